//! Domain models shared across the weight-dashboard workspace.

pub mod models;

pub use models::{
    AuthUser, Credentials, Goals, SessionState, Units, UserRecordSet, UserSettings, WeightEntry,
};
