//! Interface-carrier link supervisor

use super::{Credentials, LinkSupervisor};
use std::path::PathBuf;

/// Link supervisor that observes a network interface's operational state.
///
/// Association and WPA key negotiation are handled by the system
/// supplicant, which holds the same credentials; this supervisor only
/// answers "is the carrier up". A `join` attempt is therefore a re-check
/// of the carrier, giving the supplicant time to re-associate between the
/// loop driver's bounded retries.
pub struct OperstateLink {
    interface: String,
    operstate_path: PathBuf,
}

impl OperstateLink {
    /// Supervise the given interface (e.g., "wlan0")
    pub fn new(interface: &str) -> Self {
        Self {
            interface: interface.to_string(),
            operstate_path: PathBuf::from(format!("/sys/class/net/{}/operstate", interface)),
        }
    }

    fn carrier_up(&self) -> bool {
        match std::fs::read_to_string(&self.operstate_path) {
            Ok(state) => state.trim() == "up",
            Err(e) => {
                log::debug!("Failed to read operstate for {}: {}", self.interface, e);
                false
            }
        }
    }
}

impl LinkSupervisor for OperstateLink {
    fn is_connected(&mut self) -> bool {
        self.carrier_up()
    }

    fn join(&mut self, credentials: &Credentials) -> bool {
        log::debug!(
            "Waiting for {} to associate with \"{}\"",
            self.interface,
            credentials.ssid
        );
        self.carrier_up()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_interface_reports_down() {
        let mut link = OperstateLink::new("vega-test-does-not-exist");
        assert!(!link.is_connected());

        let creds = Credentials {
            ssid: "net".to_string(),
            passphrase: "secret".to_string(),
        };
        assert!(!link.join(&creds));
    }
}
