//! Identity-provider contract.

use async_trait::async_trait;
use shared::models::{Credentials, SessionState};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::AuthError;

/// External identity service: emits session transitions and performs
/// sign-in/sign-out on behalf of the dashboard.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Subscribe to authentication-state transitions.
    ///
    /// The provider sends one [`SessionState`] per observed change, in the
    /// order the changes occur. Closing the channel ends the reactor's run
    /// loop.
    fn changes(&self) -> UnboundedReceiver<SessionState>;

    /// Snapshot of the current session, [`SessionState::SignedOut`] when
    /// nobody is signed in.
    fn current_session(&self) -> SessionState;

    async fn sign_in(&self, credentials: Credentials) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}
