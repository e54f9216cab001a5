//! Document-store and readiness contracts.

use async_trait::async_trait;
use shared::models::{Goals, UserSettings, WeightEntry};

use crate::error::{GateError, StoreError};

/// Per-user document storage.
///
/// Each load operation returns the signed-in user's records or fails;
/// the reactor joins the three loads and never combines partial results.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Whether the store connection is initialized. A false value delays the
    /// next load once; the flag is not re-checked after the delay.
    fn is_ready(&self) -> bool;

    async fn load_weight_log(&self) -> Result<Vec<WeightEntry>, StoreError>;

    async fn load_settings(&self) -> Result<UserSettings, StoreError>;

    async fn load_goals(&self) -> Result<Goals, StoreError>;
}

/// Optional signal that the store connection has finished initializing.
/// Deployments without one fall back to a fixed delay before loading.
#[async_trait]
pub trait ReadinessGate: Send + Sync {
    /// Resolves once the store is fully initialized, or fails if readiness
    /// cannot be established.
    async fn wait_ready(&self) -> Result<(), GateError>;
}
