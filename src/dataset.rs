//! Review table input and score table output
//!
//! Reading drops rows the scoring core cannot use. Writing produces the
//! per-review score table and the monthly summary table.

use std::path::Path;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::categories::CategorySet;
use crate::models::sentiment_column;
use crate::models::snippet_column;
use crate::models::ColumnStats;
use crate::models::MonthlyBucket;
use crate::models::Review;
use crate::models::ScoredReview;
use crate::models::OVERALL_COLUMN;
use crate::models::RATING_COLUMN;
use crate::Result;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d %B %Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const MONTH_NAME_FORMATS: [&str; 2] = ["%B %d, %Y", "%b %d, %Y"];

/// One input row before validation
#[derive(Debug, Deserialize)]
struct RawReview {
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Content", default)]
    content: Option<String>,
    #[serde(rename = "Rating", default)]
    rating: Option<String>,
}

impl RawReview {
    fn into_review(self) -> Option<Review> {
        let content = self.content.filter(|c| !c.is_empty())?;
        let date = parse_date(self.date.as_deref()?)?;
        let rating = parse_rating(self.rating.as_deref()?)?;
        Some(Review::new(date, rating, content))
    }
}

/// Reviews that survived filtering, plus how many rows were dropped
#[derive(Debug, Clone, Default)]
pub struct LoadedReviews {
    pub reviews: Vec<Review>,
    pub dropped: usize,
}

/// Parse a calendar date in any of the accepted layouts
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .chain(MONTH_NAME_FORMATS.iter())
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Parse a finite numeric rating
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Load the review table, dropping rows without a usable Date, Content or
/// Rating
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<LoadedReviews> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut loaded = LoadedReviews::default();
    for (line, record) in reader.deserialize::<RawReview>().enumerate() {
        match record?.into_review() {
            Some(review) => loaded.reviews.push(review),
            None => {
                debug!("Dropping row {} of {}", line + 1, path.display());
                loaded.dropped += 1;
            }
        }
    }

    if loaded.dropped > 0 {
        warn!(
            "Dropped {} rows with missing or unparseable Date, Content or Rating",
            loaded.dropped
        );
    }
    info!(
        "Loaded {} reviews from {}",
        loaded.reviews.len(),
        path.display()
    );
    Ok(loaded)
}

/// Shortest round-trip text, with `.0` on integral values
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Empty cell for undefined values
pub fn format_score(score: Option<f64>) -> String {
    score.map(format_value).unwrap_or_default()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn create_writer(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(csv::Writer::from_path(path)?)
}

/// Header of the per-review score table
pub fn review_scores_header(categories: &CategorySet) -> Vec<String> {
    let mut header = vec!["Date".to_string(), RATING_COLUMN.to_string(), "Content".to_string()];
    header.extend(categories.iter().map(|c| snippet_column(&c.name)));
    header.extend(categories.iter().map(|c| sentiment_column(&c.name)));
    header.push(OVERALL_COLUMN.to_string());
    header
}

/// Write one row per scored review, in input order
pub fn write_review_scores<P: AsRef<Path>>(
    path: P,
    categories: &CategorySet,
    rows: &[ScoredReview],
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create_writer(path)?;
    writer.write_record(review_scores_header(categories))?;

    for row in rows {
        let mut record = vec![
            format_date(row.review.date),
            format_value(row.review.rating),
            row.review.content.clone(),
        ];
        record.extend(row.categories.iter().map(|c| c.snippet.clone()));
        record.extend(row.categories.iter().map(|c| format_score(c.sentiment)));
        record.push(format_score(row.overall));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    info!("Wrote {} review rows to {}", rows.len(), path.display());
    Ok(())
}

/// Header of the monthly summary table
pub fn monthly_summary_header(categories: &CategorySet) -> Vec<String> {
    let mut header = vec!["Month".to_string()];
    let columns = categories
        .iter()
        .map(|c| sentiment_column(&c.name))
        .chain([OVERALL_COLUMN.to_string(), RATING_COLUMN.to_string()]);
    for column in columns {
        header.push(format!("{column}_mean"));
        header.push(format!("{column}_count"));
    }
    header
}

/// Write one row per month bucket
pub fn write_monthly_summary<P: AsRef<Path>>(
    path: P,
    categories: &CategorySet,
    buckets: &[MonthlyBucket],
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create_writer(path)?;
    writer.write_record(monthly_summary_header(categories))?;

    for bucket in buckets {
        let mut record = vec![format_date(bucket.month)];
        let stats = bucket
            .categories
            .iter()
            .chain([&bucket.overall, &bucket.rating]);
        for ColumnStats { mean, count } in stats {
            record.push(format_score(*mean));
            record.push(count.to_string());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    info!("Wrote {} monthly rows to {}", buckets.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::CategoryDefinition;
    use crate::models::CategoryScore;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn categories() -> CategorySet {
        CategorySet::new(vec![
            CategoryDefinition::new("Crowding", &["crowd"]).unwrap(),
            CategoryDefinition::new("Difficulty", &["steep"]).unwrap(),
        ])
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2023-04-09"), Some(ymd(2023, 4, 9)));
        assert_eq!(parse_date(" 04/09/2023 "), Some(ymd(2023, 4, 9)));
        assert_eq!(parse_date("April 9, 2023"), Some(ymd(2023, 4, 9)));
        assert_eq!(parse_date("Apr 9, 2023"), Some(ymd(2023, 4, 9)));
        assert_eq!(parse_date("9 April 2023"), Some(ymd(2023, 4, 9)));
        assert_eq!(parse_date("2023-04-09 17:30:00"), Some(ymd(2023, 4, 9)));
        assert_eq!(parse_date("2023-04-09T17:30:00+02:00"), Some(ymd(2023, 4, 9)));
        assert_eq!(parse_date("last spring"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4"), Some(4.0));
        assert_eq!(parse_rating(" 3.5 "), Some(3.5));
        assert_eq!(parse_rating("five"), None);
        assert_eq!(parse_rating("NaN"), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.0), "1.0");
        assert_eq!(format_value(-0.2), "-0.2");
        assert_eq!(format_value(0.4), "0.4");
        assert_eq!(format_score(None), "");
        assert_eq!(format_score(Some(0.0)), "0.0");
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            review_scores_header(&categories()),
            vec![
                "Date",
                "Rating",
                "Content",
                "Crowding_snippet",
                "Difficulty_snippet",
                "Crowding_sent",
                "Difficulty_sent",
                "Overall_Review_sent",
            ]
        );
        assert_eq!(
            monthly_summary_header(&categories()),
            vec![
                "Month",
                "Crowding_sent_mean",
                "Crowding_sent_count",
                "Difficulty_sent_mean",
                "Difficulty_sent_count",
                "Overall_Review_sent_mean",
                "Overall_Review_sent_count",
                "Rating_mean",
                "Rating_count",
            ]
        );
    }

    #[test]
    fn test_load_reviews_drops_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        std::fs::write(
            &path,
            "Title,Date,Rating,Content\n\
             a,2023-01-05,5,Great trail.\n\
             b,,4,No date.\n\
             c,not a date,4,Bad date.\n\
             d,2023-02-01,,No rating.\n\
             e,2023-02-02,x,Bad rating.\n\
             f,2023-02-03,3,\n\
             g,2023-02-04,2,\"Steep, rocky.\"\n",
        )
        .unwrap();

        let loaded = load_reviews(&path).unwrap();
        assert_eq!(loaded.dropped, 5);
        assert_eq!(
            loaded.reviews,
            vec![
                Review::new(ymd(2023, 1, 5), 5.0, "Great trail."),
                Review::new(ymd(2023, 2, 4), 2.0, "Steep, rocky."),
            ]
        );
    }

    #[test]
    fn test_load_reviews_missing_column_drops_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        std::fs::write(&path, "Date,Content\n2023-01-05,Great trail.\n").unwrap();

        let loaded = load_reviews(&path).unwrap();
        assert!(loaded.reviews.is_empty());
        assert_eq!(loaded.dropped, 1);
    }

    #[test]
    fn test_write_review_scores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("scores.csv");
        let rows = vec![ScoredReview {
            review: Review::new(ymd(2023, 1, 5), 4.0, "Not crowded, steep."),
            categories: vec![
                CategoryScore {
                    snippet: "not crowded, steep.".to_string(),
                    sentiment: Some(0.4),
                },
                CategoryScore {
                    snippet: String::new(),
                    sentiment: None,
                },
            ],
            overall: Some(0.0),
        }];

        write_review_scores(&path, &categories(), &rows).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Rating,Content,Crowding_snippet,Difficulty_snippet,Crowding_sent,Difficulty_sent,Overall_Review_sent"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2023-01-05,4.0,\"Not crowded, steep.\",\"not crowded, steep.\",,0.4,,0.0"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_monthly_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monthly.csv");
        let buckets = vec![MonthlyBucket {
            month: ymd(2023, 1, 1),
            categories: vec![
                ColumnStats {
                    mean: Some(-0.5),
                    count: 2,
                },
                ColumnStats::default(),
            ],
            overall: ColumnStats {
                mean: Some(0.25),
                count: 4,
            },
            rating: ColumnStats {
                mean: Some(4.5),
                count: 4,
            },
        }];

        write_monthly_summary(&path, &categories(), &buckets).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.lines().nth(1).unwrap(),
            "2023-01-01,-0.5,2,,0,0.25,4,4.5,4"
        );
    }
}
