use chrono::{NaiveDate, NaiveDateTime};

/// Fast parse of `"YYYY-MM-DD HH:MM:SS"` → naive timestamp
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    // minimal length + separators check
    if s.len() < 19 || &s[4..5] != "-" || &s[7..8] != "-" || &s[10..11] != " " {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    let hour: u32 = s[11..13].parse().ok()?;
    let min: u32 = s[14..16].parse().ok()?;
    let sec: u32 = s[17..19].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, min, sec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_timestamp() {
        let ts = parse_timestamp("2021-01-14 08:15:30").unwrap();
        assert_eq!(ts.to_string(), "2021-01-14 08:15:30");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert!(parse_timestamp(" 2021-01-14 08:15:30 ").is_some());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2021-01-14").is_none());
        assert!(parse_timestamp("2021/01/14 08:15:30").is_none());
        assert!(parse_timestamp("not a timestamp at all").is_none());
        assert!(parse_timestamp("2021-13-40 08:15:30").is_none());
    }
}
