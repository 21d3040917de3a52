use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Activation {
    token: String,
    expires_at: Instant,
}

/// Tracks which code block was most recently copied so the UI can flash a
/// "copied" marker next to it.
///
/// At most one token is active at a time and it carries a single deadline.
/// Activating while another token is active replaces both the token and the
/// deadline, so a stale deadline can never clear a newer activation. The
/// event loop polls `clear_expired` once per tick; there is no background
/// timer thread.
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    timeout: Duration,
    active: Option<Activation>,
}

impl CopyIndicator {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            active: None,
        }
    }

    /// Mark `token` active and arm its deadline from now.
    pub fn activate(&mut self, token: impl Into<String>) {
        self.activate_at(token, Instant::now());
    }

    fn activate_at(&mut self, token: impl Into<String>, now: Instant) {
        self.active = Some(Activation {
            token: token.into(),
            expires_at: now + self.timeout,
        });
    }

    /// Drop the activation once its deadline has passed. Returns true if
    /// the indicator changed, so the caller knows a redraw is needed.
    pub fn clear_expired(&mut self) -> bool {
        self.clear_expired_at(Instant::now())
    }

    fn clear_expired_at(&mut self, now: Instant) -> bool {
        match &self.active {
            Some(activation) if activation.expires_at <= now => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn active_token(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.token.as_str())
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.active_token() == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(2000);

    fn indicator() -> CopyIndicator {
        CopyIndicator::new(TIMEOUT)
    }

    #[test]
    fn test_activate_sets_token_immediately() {
        let mut ind = indicator();
        assert_eq!(ind.active_token(), None);

        ind.activate_at("get-products-response", Instant::now());
        assert!(ind.is_active("get-products-response"));
        assert!(!ind.is_active("get-users-response"));
    }

    #[test]
    fn test_token_expires_after_timeout() {
        let mut ind = indicator();
        let t0 = Instant::now();

        ind.activate_at("get-products-response", t0);
        assert!(!ind.clear_expired_at(t0 + TIMEOUT - Duration::from_millis(1)));
        assert!(ind.is_active("get-products-response"));

        assert!(ind.clear_expired_at(t0 + TIMEOUT));
        assert_eq!(ind.active_token(), None);
    }

    #[test]
    fn test_new_activation_supersedes_previous() {
        let mut ind = indicator();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(1500);

        ind.activate_at("token-a", t0);
        ind.activate_at("token-b", t1);
        assert!(ind.is_active("token-b"));

        // token-a's original deadline has passed but must not clear token-b
        assert!(!ind.clear_expired_at(t0 + TIMEOUT));
        assert!(ind.is_active("token-b"));

        assert!(ind.clear_expired_at(t1 + TIMEOUT));
        assert_eq!(ind.active_token(), None);
    }

    #[test]
    fn test_reactivating_same_token_rearms_deadline() {
        let mut ind = indicator();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(500);

        ind.activate_at("token-a", t0);
        ind.activate_at("token-a", t1);

        assert!(!ind.clear_expired_at(t0 + TIMEOUT));
        assert!(ind.is_active("token-a"));
        assert!(ind.clear_expired_at(t1 + TIMEOUT));
        assert_eq!(ind.active_token(), None);
    }

    #[test]
    fn test_clear_expired_on_idle_is_noop() {
        let mut ind = indicator();
        assert!(!ind.clear_expired_at(Instant::now() + TIMEOUT));
        assert_eq!(ind.active_token(), None);
    }
}
