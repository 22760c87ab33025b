//! Info commands: uptime, version

use std::time::{Duration, Instant};

/// Get bot version from Cargo.toml
pub fn version() -> String {
    format!("📦 discord-commands v{}", env!("CARGO_PKG_VERSION"))
}

/// Generate uptime response
pub fn uptime(start_time: Instant) -> String {
    format_uptime(start_time.elapsed())
}

pub fn format_uptime(uptime: Duration) -> String {
    let days = uptime.as_secs() / 86400;
    let hours = (uptime.as_secs() % 86400) / 3600;
    let minutes = (uptime.as_secs() % 3600) / 60;
    let seconds = uptime.as_secs() % 60;

    if days > 0 {
        format!("⏱️ Uptime: {}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("⏱️ Uptime: {}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("⏱️ Uptime: {}m {}s", minutes, seconds)
    } else {
        format!("⏱️ Uptime: {}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(5)), "⏱️ Uptime: 5s");
        assert_eq!(format_uptime(Duration::from_secs(65)), "⏱️ Uptime: 1m 5s");
        assert_eq!(format_uptime(Duration::from_secs(3725)), "⏱️ Uptime: 1h 2m 5s");
        assert_eq!(
            format_uptime(Duration::from_secs(90061)),
            "⏱️ Uptime: 1d 1h 1m 1s"
        );
    }

    #[test]
    fn test_version_mentions_package_version() {
        assert!(version().contains(env!("CARGO_PKG_VERSION")));
    }
}
