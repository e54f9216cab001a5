//! Session reaction core for the weight dashboard.
//!
//! This crate provides:
//! - Collaborator contracts for the identity provider, the per-user document
//!   store, and the dashboard UI surfaces
//! - [`SessionReactor`], which consumes authentication-state transitions and
//!   keeps UI state and loaded user data consistent with session presence
//! - Timing configuration for the reactor's fallback delays

pub mod auth;
pub mod config;
pub mod error;
pub mod reactor;
pub mod store;
pub mod ui;

pub use auth::AuthProvider;
pub use config::ReactorConfig;
pub use error::{AuthError, GateError, StoreError};
pub use reactor::SessionReactor;
pub use store::{DataStore, ReadinessGate};
pub use ui::DashboardUi;
