//! Device fingerprint collection.
//!
//! Gathers host metadata sent with every login request so the backend
//! can enforce per-account device limits. Collection never fails; any
//! unavailable field degrades to a placeholder.

use crewdesk_entity::DeviceFingerprint;

/// Collect the fingerprint for the machine we are running on.
pub fn collect() -> DeviceFingerprint {
    let hostname = whoami::fallible::hostname().unwrap_or_else(|_| "unknown-host".to_string());
    DeviceFingerprint {
        platform: whoami::platform().to_string(),
        os_version: whoami::distro(),
        arch: std::env::consts::ARCH.to_string(),
        device_name: format!("{} ({})", whoami::devicename(), whoami::username()),
        device_type: "desktop".to_string(),
        hostname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_fills_every_field() {
        let fp = collect();
        assert!(!fp.platform.is_empty());
        assert!(!fp.arch.is_empty());
        assert!(!fp.hostname.is_empty());
        assert_eq!(fp.device_type, "desktop");
    }
}
