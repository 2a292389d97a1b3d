//! Field-level cleaning for raw flight records

use std::sync::OnceLock;

use regex::Regex;

fn hours_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)h").expect("valid regex"))
}

fn minutes_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)m").expect("valid regex"))
}

fn time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("valid regex"))
}

fn route_separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[→>-]").expect("valid regex"))
}

/// Parse a duration string like "2h 50m", "7h 25m", or "19h" into total
/// minutes. Returns `None` when the string carries no recognizable hour
/// or minute component.
pub fn parse_duration(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let hours = hours_re()
        .captures(trimmed)
        .and_then(|c| c[1].parse::<u32>().ok());
    let minutes = minutes_re()
        .captures(trimmed)
        .and_then(|c| c[1].parse::<u32>().ok());

    if hours.is_none() && minutes.is_none() {
        return None;
    }

    Some(hours.unwrap_or(0) * 60 + minutes.unwrap_or(0))
}

/// Extract and normalize an HH:MM time from a raw string
pub fn parse_time(raw: &str) -> Option<String> {
    let captures = time_re().captures(raw.trim())?;
    let hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = captures[2].parse().ok()?;
    Some(format!("{:02}:{:02}", hour, minute))
}

/// Validate and parse a price value; commas are stripped, only strictly
/// positive prices are accepted
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    let price: f64 = cleaned.parse().ok()?;
    (price > 0.0).then_some(price)
}

/// Declared stop count from strings like "non-stop", "1 stop", "2 stops".
/// Unrecognized patterns default to non-stop.
pub fn parse_stop_count(raw: &str) -> u32 {
    let lowered = raw.trim().to_lowercase();
    if lowered.contains("non-stop") {
        0
    } else if lowered.contains("1 stop") {
        1
    } else if lowered.contains("2 stops") {
        2
    } else {
        0
    }
}

/// Clean an airline name (whitespace only; names are otherwise kept verbatim)
pub fn clean_airline(raw: &str) -> String {
    raw.trim().to_string()
}

/// Split a route string like "BLR → NAG → DEL" into its city tokens.
/// Handles the arrow, ">", and "-" separators seen in the wild.
pub fn split_route_string(raw: &str) -> Vec<String> {
    route_separator_re()
        .split(raw)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_hours_and_minutes() {
        assert_eq!(parse_duration("2h 50m"), Some(170));
        assert_eq!(parse_duration("7h 25m"), Some(445));
    }

    #[test]
    fn test_parse_duration_hours_only() {
        assert_eq!(parse_duration("19h"), Some(1140));
    }

    #[test]
    fn test_parse_duration_minutes_only() {
        assert_eq!(parse_duration("45m"), Some(45));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("   "), None);
        assert_eq!(parse_duration("soon"), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("5:50"), Some("05:50".to_string()));
        assert_eq!(parse_time("22:20 01 Mar"), Some("22:20".to_string()));
        assert_eq!(parse_time("late"), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("3897"), Some(3897.0));
        assert_eq!(parse_price("13,302"), Some(13302.0));
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-100"), None);
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_parse_stop_count() {
        assert_eq!(parse_stop_count("non-stop"), 0);
        assert_eq!(parse_stop_count("1 stop"), 1);
        assert_eq!(parse_stop_count("2 stops"), 2);
        assert_eq!(parse_stop_count("red-eye"), 0);
    }

    #[test]
    fn test_split_route_string() {
        assert_eq!(split_route_string("BLR → DEL"), vec!["BLR", "DEL"]);
        assert_eq!(
            split_route_string("BLR → NAG → DEL"),
            vec!["BLR", "NAG", "DEL"]
        );
        assert_eq!(split_route_string("CCU > BOM"), vec!["CCU", "BOM"]);
        assert_eq!(split_route_string(""), Vec::<String>::new());
    }
}
