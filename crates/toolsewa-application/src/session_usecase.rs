//! Session use case implementation.
//!
//! `SessionUseCase` is the single authority for "may this visitor perform a
//! gated action right now", and for recording what gated actions succeeded.
//! It owns the user identity, the anonymous usage counter, the login-prompt
//! flag and the activity log, and persists each of them through an injected
//! repository.
//!
//! State is loaded once at construction and cached; every mutation persists
//! through the repository first and updates the cache only on success, so a
//! failed write never leaves the cache ahead of disk.

use std::sync::{Arc, RwLock};

use toolsewa_core::account::{ProfileRepository, UserAccount};
use toolsewa_core::error::Result;
use toolsewa_core::history::{ActivityRecord, ActivityRepository};
use toolsewa_core::session::{GateDecision, UsageCounter, UsageRepository};

/// Cached session state, guarded by one lock.
#[derive(Debug, Default)]
struct SessionState {
    account: Option<UserAccount>,
    usage: UsageCounter,
    history: Vec<ActivityRecord>,
    login_prompt_visible: bool,
}

/// The session state manager.
///
/// Constructed once at application start and handed by reference into every
/// tool screen; it lives for the whole process. Each operation takes the
/// internal lock for its full duration, so a gate check and its side effect
/// are one atomic step from the caller's point of view.
pub struct SessionUseCase {
    profile_repository: Arc<dyn ProfileRepository>,
    usage_repository: Arc<dyn UsageRepository>,
    activity_repository: Arc<dyn ActivityRepository>,
    state: RwLock<SessionState>,
}

impl SessionUseCase {
    /// Creates the use case, restoring persisted state.
    ///
    /// A fresh profile starts anonymous with a zero counter and an empty
    /// log; the repositories already degrade unreadable records to those
    /// defaults.
    pub fn load(
        profile_repository: Arc<dyn ProfileRepository>,
        usage_repository: Arc<dyn UsageRepository>,
        activity_repository: Arc<dyn ActivityRepository>,
    ) -> Result<Self> {
        let state = SessionState {
            account: profile_repository.load()?,
            usage: usage_repository.load()?,
            history: activity_repository.load()?,
            login_prompt_visible: false,
        };

        Ok(Self {
            profile_repository,
            usage_repository,
            activity_repository,
            state: RwLock::new(state),
        })
    }

    // ============================================================================
    // Identity
    // ============================================================================

    /// Logs in with an email address.
    ///
    /// This is a mock identity system: the call always succeeds, deriving
    /// the display name from the email's local part. Gating is lifted for
    /// as long as the account exists, and any pending login prompt is
    /// dismissed.
    pub fn login_with_email(&self, email: &str) -> Result<UserAccount> {
        self.login_with(UserAccount::from_email(email))
    }

    /// Logs in via an external provider label. Same contract as
    /// [`login_with_email`](Self::login_with_email); no real protocol is
    /// involved.
    pub fn login_with_provider(&self, provider: &str) -> Result<UserAccount> {
        self.login_with(UserAccount::from_provider(provider))
    }

    fn login_with(&self, account: UserAccount) -> Result<UserAccount> {
        let mut state = self.state.write().unwrap();
        self.profile_repository.save(&account)?;
        state.account = Some(account.clone());
        state.login_prompt_visible = false;
        tracing::info!("logged in as {}", account.display_name);
        Ok(account)
    }

    /// Logs out and resets the anonymous usage counter.
    ///
    /// The reset re-grants free uses after a login/logout cycle; the
    /// product has not resolved that tension, so the behavior is kept
    /// as-is. Activity records are deliberately retained.
    pub fn logout(&self) -> Result<()> {
        let mut state = self.state.write().unwrap();
        self.profile_repository.clear()?;
        let counter = UsageCounter::new();
        self.usage_repository.save(&counter)?;
        state.account = None;
        state.usage = counter;
        tracing::info!("logged out");
        Ok(())
    }

    // ============================================================================
    // Gating
    // ============================================================================

    /// Decides whether a gated action may proceed, consuming a free use
    /// when it does.
    ///
    /// Identified visitors are always granted. Anonymous visitors are
    /// granted until the free-use limit is reached; at the limit the login
    /// prompt is raised and the counter left untouched. Decision and side
    /// effect happen under one lock, so callers never act on stale state
    /// between check and consumption.
    pub fn request_gate(&self) -> Result<GateDecision> {
        let mut state = self.state.write().unwrap();

        if state.account.is_some() {
            return Ok(GateDecision::Granted);
        }

        if state.usage.limit_reached() {
            state.login_prompt_visible = true;
            tracing::debug!("gate denied at {} uses", state.usage.count());
            return Ok(GateDecision::Denied);
        }

        let mut counter = state.usage.clone();
        counter.increment();
        self.usage_repository.save(&counter)?;
        state.usage = counter;
        Ok(GateDecision::Granted)
    }

    // ============================================================================
    // Activity log
    // ============================================================================

    /// Records one completed tool action.
    ///
    /// Anonymous usage is never recorded; history requires identity. For
    /// identified visitors the record is prepended (newest first) and the
    /// full list persisted.
    pub fn record_activity(&self, tool_id: &str, tool_name: &str, result_summary: &str) -> Result<()> {
        let mut state = self.state.write().unwrap();
        if state.account.is_none() {
            return Ok(());
        }

        let record = ActivityRecord::new(tool_id, tool_name, result_summary);
        let mut updated = Vec::with_capacity(state.history.len() + 1);
        updated.push(record);
        updated.extend_from_slice(&state.history);

        self.activity_repository.save(&updated)?;
        state.history = updated;
        Ok(())
    }

    // ============================================================================
    // Prompt visibility
    // ============================================================================

    /// Shows or hides the login prompt.
    ///
    /// Pure UI state, independent of gating: dismissing the prompt never
    /// consumes an attempt.
    pub fn set_login_prompt_visible(&self, visible: bool) {
        self.state.write().unwrap().login_prompt_visible = visible;
    }

    // ============================================================================
    // Read accessors
    // ============================================================================

    /// The current account, if identified.
    pub fn current_account(&self) -> Option<UserAccount> {
        self.state.read().unwrap().account.clone()
    }

    /// Gated actions consumed while anonymous.
    pub fn usage_count(&self) -> u32 {
        self.state.read().unwrap().usage.count()
    }

    /// Whether the login prompt is currently raised.
    pub fn login_prompt_visible(&self) -> bool {
        self.state.read().unwrap().login_prompt_visible
    }

    /// The activity log, newest first.
    pub fn activity(&self) -> Vec<ActivityRecord> {
        self.state.read().unwrap().history.clone()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    fn fresh_session() -> SessionUseCase {
        in_memory_session()
    }

    #[test]
    fn test_fresh_profile_scenario() {
        let session = fresh_session();

        assert!(session.request_gate().unwrap().is_granted());
        assert_eq!(session.usage_count(), 1);

        assert!(session.request_gate().unwrap().is_granted());
        assert_eq!(session.usage_count(), 2);

        assert!(!session.request_gate().unwrap().is_granted());
        assert!(session.login_prompt_visible());
        assert_eq!(session.usage_count(), 2);

        let account = session.login_with_email("a@b.com").unwrap();
        assert_eq!(account.display_name, "a");
        assert!(!session.login_prompt_visible());

        assert!(session.request_gate().unwrap().is_granted());
    }

    #[test]
    fn test_gate_fails_iff_two_prior_successes() {
        let session = fresh_session();
        let mut successes = 0;
        for _ in 0..10 {
            let granted = session.request_gate().unwrap().is_granted();
            assert_eq!(granted, successes < 2);
            if granted {
                successes += 1;
            }
        }
        assert_eq!(session.usage_count(), 2);
    }

    #[test]
    fn test_identified_visitors_are_unlimited() {
        let session = fresh_session();
        session.login_with_email("a@b.com").unwrap();
        for _ in 0..50 {
            assert!(session.request_gate().unwrap().is_granted());
        }
        // The anonymous counter does not move for identified visitors.
        assert_eq!(session.usage_count(), 0);
    }

    #[test]
    fn test_logout_resets_counter_regardless_of_prior_value() {
        let session = fresh_session();
        session.request_gate().unwrap();
        session.request_gate().unwrap();
        session.request_gate().unwrap();
        assert_eq!(session.usage_count(), 2);

        session.login_with_email("a@b.com").unwrap();
        session.logout().unwrap();

        // The login/logout cycle re-grants free uses. Known product
        // tension, kept as-is; see DESIGN.md.
        assert_eq!(session.usage_count(), 0);
        assert!(session.request_gate().unwrap().is_granted());
        assert!(session.request_gate().unwrap().is_granted());
        assert!(!session.request_gate().unwrap().is_granted());
    }

    #[test]
    fn test_anonymous_activity_is_not_recorded() {
        let session = fresh_session();
        session
            .record_activity("gst-calc", "GST Calculator", "GST: ₹180.00")
            .unwrap();
        assert!(session.activity().is_empty());
    }

    #[test]
    fn test_identified_activity_prepends_newest_first() {
        let session = fresh_session();
        session.login_with_email("a@b.com").unwrap();

        for i in 0..5 {
            session
                .record_activity("gst-calc", "GST Calculator", &format!("GST: ₹{i}.00"))
                .unwrap();
        }

        let log = session.activity();
        assert_eq!(log.len(), 5);
        assert_eq!(log[0].result_summary, "GST: ₹4.00");
        assert_eq!(log[4].result_summary, "GST: ₹0.00");
    }

    #[test]
    fn test_gst_scenario_record_shape() {
        let session = fresh_session();
        session.login_with_email("a@b.com").unwrap();
        session
            .record_activity("gst-calc", "GST Calculator", "GST: ₹180.00")
            .unwrap();

        let log = session.activity();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].tool_id, "gst-calc");
        assert_eq!(log[0].tool_name, "GST Calculator");
        assert_eq!(log[0].result_summary, "GST: ₹180.00");
    }

    #[test]
    fn test_logout_keeps_activity() {
        let session = fresh_session();
        session.login_with_email("a@b.com").unwrap();
        session
            .record_activity("gst-calc", "GST Calculator", "GST: ₹180.00")
            .unwrap();

        session.logout().unwrap();
        assert_eq!(session.activity().len(), 1);
    }

    #[test]
    fn test_prompt_dismissal_does_not_consume_attempts() {
        let session = fresh_session();
        session.request_gate().unwrap();
        session.set_login_prompt_visible(true);
        session.set_login_prompt_visible(false);
        assert_eq!(session.usage_count(), 1);
        assert!(session.request_gate().unwrap().is_granted());
    }

    #[test]
    fn test_provider_login_lifts_gating() {
        let session = fresh_session();
        session.request_gate().unwrap();
        session.request_gate().unwrap();
        assert!(!session.request_gate().unwrap().is_granted());

        let account = session.login_with_provider("google").unwrap();
        assert_eq!(account.display_name, "google-user");
        assert!(session.request_gate().unwrap().is_granted());
    }

    #[test]
    fn test_unbounded_history_growth() {
        // The log has no eviction policy; after N writes it holds N
        // records. Documented product gap.
        let session = fresh_session();
        session.login_with_email("a@b.com").unwrap();
        for i in 0..500 {
            session
                .record_activity("gst-calc", "GST Calculator", &format!("#{i}"))
                .unwrap();
        }
        assert_eq!(session.activity().len(), 500);
    }

    #[test]
    fn test_restore_from_repositories() {
        let profile = Arc::new(InMemoryProfileRepository::default());
        let usage = Arc::new(InMemoryUsageRepository::default());
        let activity = Arc::new(InMemoryActivityRepository::default());

        {
            let session = SessionUseCase::load(
                profile.clone(),
                usage.clone(),
                activity.clone(),
            )
            .unwrap();
            session.request_gate().unwrap();
            session.login_with_email("a@b.com").unwrap();
            session
                .record_activity("gst-calc", "GST Calculator", "GST: ₹180.00")
                .unwrap();
        }

        // A second use case over the same stores sees identical state.
        let restored =
            SessionUseCase::load(profile, usage, activity).unwrap();
        assert_eq!(
            restored.current_account().unwrap().email,
            "a@b.com"
        );
        assert_eq!(restored.usage_count(), 1);
        assert_eq!(restored.activity().len(), 1);
        // The prompt flag is UI state and starts hidden after a restart.
        assert!(!restored.login_prompt_visible());
    }
}
