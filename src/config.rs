//! Bench configuration constants. Edit these before running on a new setup.

/// Address of the ESP32 battery tester on the bench network.
pub const ESP32_IP: &str = "192.168.1.100";

/// Local clone that will receive uploaded CSV files. "." is the current
/// directory. Not consumed yet; the upload flow is not implemented.
#[allow(dead_code)]
pub const GITHUB_REPO_PATH: &str = ".";
