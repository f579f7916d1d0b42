//! Mock link supervisor for testing

use super::{Credentials, LinkSupervisor};
use std::sync::{Arc, Mutex};

/// Mock link supervisor with scriptable connectivity.
///
/// Clones share state, so a test can flip the link while the loop driver
/// owns its own handle.
#[derive(Clone)]
pub struct MockLink {
    inner: Arc<Mutex<MockLinkInner>>,
}

struct MockLinkInner {
    connected: bool,
    join_allowed: bool,
    join_attempts: usize,
}

impl MockLink {
    /// Create a mock link, initially disconnected but joinable
    pub fn new() -> Self {
        MockLink {
            inner: Arc::new(Mutex::new(MockLinkInner {
                connected: false,
                join_allowed: true,
                join_attempts: 0,
            })),
        }
    }

    /// Force the connectivity state (simulates link loss or recovery)
    pub fn set_connected(&self, connected: bool) {
        self.inner.lock().unwrap().connected = connected;
    }

    /// Allow or deny future join attempts
    pub fn set_join_allowed(&self, allowed: bool) {
        self.inner.lock().unwrap().join_allowed = allowed;
    }

    /// Number of join attempts made so far
    pub fn join_attempts(&self) -> usize {
        self.inner.lock().unwrap().join_attempts
    }
}

impl LinkSupervisor for MockLink {
    fn is_connected(&mut self) -> bool {
        self.inner.lock().unwrap().connected
    }

    fn join(&mut self, _credentials: &Credentials) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.join_attempts += 1;
        if inner.join_allowed {
            inner.connected = true;
        }
        inner.join_allowed
    }
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            ssid: "net".to_string(),
            passphrase: "secret".to_string(),
        }
    }

    #[test]
    fn test_join_connects_when_allowed() {
        let mut link = MockLink::new();
        assert!(!link.is_connected());
        assert!(link.join(&creds()));
        assert!(link.is_connected());
        assert_eq!(link.join_attempts(), 1);
    }

    #[test]
    fn test_join_denied() {
        let mut link = MockLink::new();
        link.set_join_allowed(false);
        assert!(!link.join(&creds()));
        assert!(!link.is_connected());
    }
}
