/// Application-level constants
pub const APP_NAME: &str = "HealthLog";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "HEALTHLOG_LOG";

/// Largest report text file accepted for import (5 MiB).
pub const MAX_REPORT_BYTES: u64 = 5 * 1024 * 1024;

/// Filter used when `HEALTHLOG_LOG` is unset or invalid.
pub fn default_log_filter() -> &'static str {
    "healthlog_lib=info,warn"
}

/// Acceptance-ratio thresholds for import previews
pub mod preview_thresholds {
    /// Below this: most result rows were rejected
    pub const LOW: f32 = 0.50;

    /// At or above this: preview can be confirmed as is
    pub const HIGH: f32 = 0.80;
}
