//! ISO 8601 duration parsing and display formatting.

use std::sync::LazyLock;

use regex::Regex;

/// Sentinel for providers that report no duration.
pub const UNKNOWN_DURATION: &str = "Unknown";

// PT#H#M#S with every component optional (PT4M, PT2H, PT45S, ...).
static ISO8601_DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").unwrap());

/// Total seconds of a `PT#H#M#S` expression. Input that does not parse
/// counts as zero seconds rather than an error.
pub fn parse_iso8601_duration(value: &str) -> u64 {
    let Some(captures) = ISO8601_DURATION_PATTERN.captures(value) else {
        return 0;
    };

    let component = |index: usize| {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    component(1) * 3600 + component(2) * 60 + component(3)
}

/// Format seconds as `H:MM:SS`, or `M:SS` when there is no hour part.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_expression() {
        assert_eq!(parse_iso8601_duration("PT1H2M10S"), 3730);
        assert_eq!(parse_iso8601_duration("PT3M33S"), 213);
    }

    #[test]
    fn every_component_is_optional() {
        assert_eq!(parse_iso8601_duration("PT4M"), 240);
        assert_eq!(parse_iso8601_duration("PT2H"), 7200);
        assert_eq!(parse_iso8601_duration("PT45S"), 45);
        assert_eq!(parse_iso8601_duration("PT"), 0);
    }

    #[test]
    fn unparseable_input_counts_as_zero() {
        assert_eq!(parse_iso8601_duration("garbage"), 0);
        assert_eq!(parse_iso8601_duration(""), 0);
    }

    #[test]
    fn formats_with_hour_segment_only_when_needed() {
        assert_eq!(format_duration(3730), "1:02:10");
        assert_eq!(format_duration(213), "3:33");
        assert_eq!(format_duration(240), "4:00");
        assert_eq!(format_duration(45), "0:45");
        assert_eq!(format_duration(0), "0:00");
    }
}
