//! Dashboard UI port.

use anyhow::Result;
use shared::models::{AuthUser, Goals, UserSettings, WeightEntry};

/// Capability-checked UI surface.
///
/// The layout-switching methods are required; every data and clear hook has
/// a default no-op implementation, which models a surface the adapter does
/// not have — skipping an absent surface is never an error. Adapters backed
/// by a real surface return whatever that surface reports; the reactor logs
/// and swallows hook errors at its own boundaries.
pub trait DashboardUi: Send + Sync {
    /// Switch to the signed-in layout and populate the user-name surface
    /// (adapters use [`AuthUser::display_label`]).
    fn show_signed_in(&self, user: &AuthUser) -> Result<()>;

    /// Switch to the signed-out layout and blank the name/email surfaces.
    fn show_signed_out(&self) -> Result<()>;

    /// Combined refresh hook, invoked before the per-collection hooks.
    fn data_loaded(&self) -> Result<()> {
        Ok(())
    }

    fn weight_log_loaded(&self, _entries: &[WeightEntry]) -> Result<()> {
        Ok(())
    }

    fn settings_loaded(&self, _settings: &UserSettings) -> Result<()> {
        Ok(())
    }

    fn goals_loaded(&self, _goals: &Goals) -> Result<()> {
        Ok(())
    }

    fn clear_weight_chart(&self) -> Result<()> {
        Ok(())
    }

    fn clear_settings(&self) -> Result<()> {
        Ok(())
    }

    fn clear_goals(&self) -> Result<()> {
        Ok(())
    }
}
