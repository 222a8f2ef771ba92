//! Device entity and login-time fingerprint payload.

use serde::{Deserialize, Serialize};

/// A registered device as persisted alongside a session.
///
/// Captured from the login response, referenced on refresh and
/// single-device logout calls. Immutable once stored; a fresh record is
/// written on every login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Backend-issued device identifier.
    pub device_id: String,
    /// Human-readable device name.
    #[serde(default)]
    pub device_name: Option<String>,
    /// Device class, e.g. `"desktop"`.
    #[serde(default)]
    pub device_type: Option<String>,
    /// Client software identifier.
    #[serde(default)]
    pub browser: Option<String>,
    /// Operating system string.
    #[serde(default)]
    pub os: Option<String>,
    /// Whether the backend has marked this device as trusted.
    #[serde(default)]
    pub is_trusted: bool,
}

/// Client-collected device metadata sent with every login request.
///
/// Supports server-side device-limit enforcement. Collection happens in
/// the auth crate; this is only the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceFingerprint {
    /// Platform family, e.g. `"Linux"`.
    pub platform: String,
    /// OS distribution/version string.
    pub os_version: String,
    /// CPU architecture, e.g. `"x86_64"`.
    pub arch: String,
    /// Host name of the machine.
    pub hostname: String,
    /// Proposed device name shown in device-management views.
    pub device_name: String,
    /// Device class, e.g. `"desktop"`.
    pub device_type: String,
}
