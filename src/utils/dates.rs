// ============================================================================
// DATES - Date-picker value normalization
// ============================================================================
// Every endpoint that takes a date range embeds it in the URL path as an
// 8-digit YYYYMMDD string. The picker yields ISO "YYYY-MM-DD".
// ============================================================================

use chrono::NaiveDate;

/// Normalize a date-picker value to the compact `YYYYMMDD` form used in
/// request paths. Zero-pads month and day.
pub fn to_compact_date(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|date| date.format("%Y%m%d").to_string())
        .map_err(|_| format!("Invalid date value: '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_picker_value() {
        assert_eq!(to_compact_date("2024-01-01").unwrap(), "20240101");
        assert_eq!(to_compact_date("2024-12-31").unwrap(), "20241231");
    }

    #[test]
    fn zero_pads_month_and_day() {
        assert_eq!(to_compact_date("2024-3-7").unwrap(), "20240307");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(to_compact_date(" 2024-01-31 ").unwrap(), "20240131");
    }

    #[test]
    fn rejects_garbage() {
        assert!(to_compact_date("").is_err());
        assert!(to_compact_date("31/01/2024").is_err());
        assert!(to_compact_date("2024-13-01").is_err());
    }
}
