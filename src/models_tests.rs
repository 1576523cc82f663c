//! Unit tests for data models

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ====== Month Truncation Tests ======

    #[test]
    fn test_review_month_truncates_day() {
        let review = Review::new(date(2023, 7, 19), 4.0, "Lovely walk.");
        assert_eq!(review.month(), date(2023, 7, 1));
    }

    #[test]
    fn test_month_start_is_idempotent() {
        let first = date(2024, 2, 1);
        assert_eq!(month_start(first), first);
        assert_eq!(month_start(date(2024, 2, 29)), first);
    }

    // ====== ColumnStats Tests ======

    #[test]
    fn test_column_stats_skips_undefined() {
        let stats = ColumnStats::from_values([Some(0.2), None, Some(0.6)]);
        assert_eq!(stats.count, 2);
        assert!((stats.mean.unwrap() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_column_stats_all_undefined() {
        let stats = ColumnStats::from_values([None, None]);
        assert_eq!(stats, ColumnStats { mean: None, count: 0 });
    }

    #[test]
    fn test_column_stats_empty() {
        assert_eq!(
            ColumnStats::from_values(std::iter::empty()),
            ColumnStats::default()
        );
    }

    // ====== Column Naming Tests ======

    #[test]
    fn test_column_names() {
        assert_eq!(snippet_column("Crowding"), "Crowding_snippet");
        assert_eq!(sentiment_column("Crowding"), "Crowding_sent");
        assert_eq!(OVERALL_COLUMN, "Overall_Review_sent");
    }
}
