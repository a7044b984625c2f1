//! Version information populated at build time.
//!
//! Displayed in the UI footer as `{channel}:{info}`:
//! - stable release: `stable:{version}`
//! - nightly build: `nightly:{date}`
//! - dev build: `dev:{commit}`

/// Build date in RFC3339 format.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Short git commit hash, or `unknown` outside a checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Package version.
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Channel label and version/info string, picked by build features.
pub fn env_version_info() -> (&'static str, &'static str) {
    if cfg!(feature = "env_nightly") {
        ("nightly", build_date())
    } else if cfg!(feature = "env_dev") {
        ("dev", build_commit())
    } else {
        ("stable", build_version())
    }
}

/// Format the channel and version info as a display string.
pub fn format_env_version() -> String {
    let (env_name, info) = env_version_info();
    // For nightly, keep just the date portion of the RFC3339 timestamp.
    if env_name == "nightly" && info.len() >= 10 && info.is_ascii() {
        format!("{}:{}", env_name, &info[..10])
    } else {
        format!("{env_name}:{info}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_date_not_empty() {
        assert!(!build_date().is_empty());
    }

    #[test]
    fn build_commit_not_empty() {
        assert!(!build_commit().is_empty());
    }

    #[test]
    fn env_version_info_has_both_parts() {
        let (env_name, info) = env_version_info();
        assert!(!env_name.is_empty());
        assert!(!info.is_empty());
    }

    #[test]
    fn format_env_version_is_colon_separated() {
        assert!(format_env_version().contains(':'));
    }
}
