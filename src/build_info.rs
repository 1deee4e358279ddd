use chrono::{DateTime, Datelike};

/// RFC 3339 timestamp recorded by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year of the build. Server and browser read the same constant, so the
/// footer hydrates without a mismatch around New Year.
pub fn build_year() -> Option<i32> {
    year_of(BUILD_TIME)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2025-06-01T12:00:00+00:00"), Some(2025));
        assert_eq!(year_of("yesterday"), None);
    }

    #[test]
    fn test_build_time_is_recorded() {
        assert!(build_year().is_some_and(|y| y >= 2024));
    }
}
