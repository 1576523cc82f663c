use chrono::Datelike;
use chrono::NaiveDate;

/// Column holding the whole-review sentiment
pub const OVERALL_COLUMN: &str = "Overall_Review_sent";
pub const RATING_COLUMN: &str = "Rating";

/// A review that passed input filtering
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub date: NaiveDate,
    pub rating: f64,
    pub content: String,
}

impl Review {
    pub fn new(date: NaiveDate, rating: f64, content: impl Into<String>) -> Self {
        Self {
            date,
            rating,
            content: content.into(),
        }
    }

    /// First day of the review's calendar month
    pub fn month(&self) -> NaiveDate {
        month_start(self.date)
    }
}

/// Truncate a date to the 1st of its month
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Snippet and sentiment for one category of one review
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub snippet: String,
    /// `None` when the snippet is empty or has no tokens
    pub sentiment: Option<f64>,
}

/// One row of the per-review output table
///
/// `categories` is index-aligned with the category set that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredReview {
    pub review: Review,
    pub categories: Vec<CategoryScore>,
    pub overall: Option<f64>,
}

/// Mean and count over the defined values of one column
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColumnStats {
    pub mean: Option<f64>,
    pub count: usize,
}

impl ColumnStats {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let (sum, count) = values
            .into_iter()
            .flatten()
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        let mean = if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        };
        Self { mean, count }
    }
}

/// Aggregated statistics for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub month: NaiveDate,
    /// Index-aligned with the category set
    pub categories: Vec<ColumnStats>,
    pub overall: ColumnStats,
    pub rating: ColumnStats,
}

/// Header name of a category's snippet column
pub fn snippet_column(category: &str) -> String {
    format!("{category}_snippet")
}

/// Header name of a category's sentiment column
pub fn sentiment_column(category: &str) -> String {
    format!("{category}_sent")
}
