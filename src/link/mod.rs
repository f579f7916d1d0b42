//! Wireless link supervision
//!
//! Link establishment is owned by an external service (on Linux, the WPA
//! supplicant); this module defines the narrow interface the telemetry
//! loop consumes from it, plus the production observer and a mock.

mod mock;
mod operstate;

pub use mock::MockLink;
pub use operstate::OperstateLink;

/// Wireless network credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Network name (SSID)
    pub ssid: String,
    /// WPA2 passphrase
    pub passphrase: String,
}

/// Link supervision trait.
///
/// `join` is one blocking attempt; the loop driver wraps it in a bounded
/// retry schedule. Neither call is expected to be cheap enough for a hot
/// path - both run at most once per cycle.
pub trait LinkSupervisor: Send {
    /// Is the link currently healthy?
    fn is_connected(&mut self) -> bool;

    /// One attempt to (re-)join the network. Returns true on success.
    fn join(&mut self, credentials: &Credentials) -> bool;
}
