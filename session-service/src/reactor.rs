//! Session transition handling.
//!
//! [`SessionReactor`] consumes authentication-state transitions from the
//! identity provider and keeps the dashboard consistent with session
//! presence: switching the visible layout, fanning out the per-user data
//! load after sign-in, and clearing stale surfaces after sign-out.

use std::sync::Arc;

use shared::models::{AuthUser, Credentials, SessionState, UserRecordSet};
use tokio::time::sleep;

use crate::auth::AuthProvider;
use crate::config::ReactorConfig;
use crate::store::{DataStore, ReadinessGate};
use crate::ui::DashboardUi;

/// Reacts to each session transition emitted by the identity provider.
///
/// Transitions are handled in arrival order. Handling is not serialized
/// against in-flight loads: a fallback load scheduled by one transition is
/// never cancelled by a later one, so overlapping loads may race and the
/// last UI update wins. A transition repeating the current presence re-runs
/// the same branch; layout switching is repeat-safe and a repeated sign-in
/// runs a second full load.
///
/// Cloning is cheap: clones share the same collaborators.
#[derive(Clone)]
pub struct SessionReactor {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn DataStore>,
    gate: Option<Arc<dyn ReadinessGate>>,
    ui: Arc<dyn DashboardUi>,
    config: ReactorConfig,
}

impl SessionReactor {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn DataStore>,
        gate: Option<Arc<dyn ReadinessGate>>,
        ui: Arc<dyn DashboardUi>,
        config: ReactorConfig,
    ) -> Self {
        Self {
            auth,
            store,
            gate,
            ui,
            config,
        }
    }

    /// Consume transitions until the provider closes its change channel.
    pub async fn run(self) {
        let mut changes = self.auth.changes();
        tracing::info!("Session reactor started");

        while let Some(session) = changes.recv().await {
            self.handle_transition(session).await;
        }

        tracing::info!("Session reactor stopped: change channel closed");
    }

    /// React to a single transition. Never fails; every nested failure is
    /// logged at its own boundary and suppressed.
    pub async fn handle_transition(&self, session: SessionState) {
        match session {
            SessionState::SignedIn(user) => self.handle_signed_in(user).await,
            SessionState::SignedOut => self.handle_signed_out(),
        }
    }

    async fn handle_signed_in(&self, user: AuthUser) {
        tracing::info!("User signed in: {}", user.uid);

        if let Err(e) = self.ui.show_signed_in(&user) {
            tracing::error!("Signed-in layout switch failed: {:?}", e);
        }

        match &self.gate {
            Some(gate) => match gate.wait_ready().await {
                Ok(()) => {
                    tracing::debug!("Store ready, loading data for {}", user.uid);
                    self.load_all_user_data(&user).await;
                }
                Err(e) => {
                    tracing::error!("Readiness gate failed: {:?}", e);
                    self.schedule_fallback_load(user);
                }
            },
            None => self.schedule_fallback_load(user),
        }
    }

    fn handle_signed_out(&self) {
        tracing::info!("User signed out");

        // Stale data must leave the surfaces before the layout switches.
        self.clear_user_data();

        if let Err(e) = self.ui.show_signed_out() {
            tracing::error!("Signed-out layout switch failed: {:?}", e);
        }
    }

    /// Load user data after the fixed fallback delay, fire-and-forget.
    /// The spawned task is not awaited and no later transition cancels it.
    fn schedule_fallback_load(&self, user: AuthUser) {
        let delay = self.config.gate_fallback_delay;
        tracing::debug!("Scheduling data load for {} in {:?}", user.uid, delay);

        let reactor = self.clone();
        tokio::spawn(async move {
            sleep(delay).await;
            reactor.load_all_user_data(&user).await;
        });
    }

    /// Fetch the user's complete record set and propagate it to the UI
    /// hooks. The three fetches are joined; any failure drops the whole
    /// attempt with no partial application and no retry.
    async fn load_all_user_data(&self, user: &AuthUser) {
        tracing::info!("Loading data for user {}", user.uid);

        if !self.store.is_ready() {
            tracing::warn!(
                "Store not ready, waiting {:?} before loading",
                self.config.store_warmup_delay
            );
            sleep(self.config.store_warmup_delay).await;
        }

        let fetched = tokio::try_join!(
            self.store.load_weight_log(),
            self.store.load_settings(),
            self.store.load_goals(),
        );

        let (weight_log, settings, goals) = match fetched {
            Ok(parts) => parts,
            Err(e) => {
                tracing::error!("Data load failed for user {}: {:?}", user.uid, e);
                return;
            }
        };

        let records = UserRecordSet {
            weight_log,
            settings,
            goals,
        };
        tracing::info!(
            "Data loaded for user {}: {} weight entries",
            user.uid,
            records.weight_log.len()
        );

        if let Err(e) = self.apply_records(&records) {
            tracing::error!("UI update after data load failed: {:?}", e);
        }
    }

    /// Combined hook first, then one hook per collection. The first hook
    /// error aborts the rest of the fan-out.
    fn apply_records(&self, records: &UserRecordSet) -> anyhow::Result<()> {
        self.ui.data_loaded()?;
        self.ui.weight_log_loaded(&records.weight_log)?;
        self.ui.settings_loaded(&records.settings)?;
        self.ui.goals_loaded(&records.goals)?;
        Ok(())
    }

    /// Manually re-run the data load for the current session. A no-op with
    /// a warning when nobody is signed in.
    pub async fn refresh(&self) {
        match self.auth.current_session() {
            SessionState::SignedIn(user) => self.load_all_user_data(&user).await,
            SessionState::SignedOut => {
                tracing::warn!("Refresh requested with no active session");
            }
        }
    }

    /// Sign in through the provider.
    ///
    /// Empty email/password credentials are rejected up front without a
    /// provider call. Provider failures are logged and swallowed; the
    /// resulting transition arrives through the change channel.
    pub async fn sign_in(&self, credentials: Credentials) {
        if let Credentials::EmailPassword { email, password } = &credentials {
            if email.is_empty() || password.is_empty() {
                tracing::warn!("Email or password missing, sign-in skipped");
                return;
            }
        }

        if let Err(e) = self.auth.sign_in(credentials).await {
            tracing::error!("Sign-in failed: {:?}", e);
        }
    }

    /// Sign out through the provider.
    ///
    /// On success the UI surfaces are cleared eagerly; the signed-out
    /// transition that follows clears them again, which is safe to repeat.
    /// A provider failure is logged and swallowed.
    pub async fn sign_out(&self) {
        match self.auth.sign_out().await {
            Ok(()) => self.clear_user_data(),
            Err(e) => tracing::error!("Sign-out failed: {:?}", e),
        }
    }

    /// Best-effort invalidation of the chart, settings, and goals surfaces,
    /// in that order. The first hook error aborts the remaining clears and
    /// is swallowed; sign-out layout switching proceeds regardless.
    pub fn clear_user_data(&self) {
        if let Err(e) = self.clear_surfaces() {
            tracing::error!("UI clear failed: {:?}", e);
        } else {
            tracing::debug!("UI surfaces cleared");
        }
    }

    fn clear_surfaces(&self) -> anyhow::Result<()> {
        self.ui.clear_weight_chart()?;
        self.ui.clear_settings()?;
        self.ui.clear_goals()?;
        Ok(())
    }
}
