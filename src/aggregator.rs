//! Monthly aggregation of per-review scores

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::ColumnStats;
use crate::models::MonthlyBucket;
use crate::models::ScoredReview;

/// Group scored reviews by calendar month
///
/// Every column gets the mean and count of its defined values. Buckets come
/// out in ascending month order; months without reviews are absent.
pub fn aggregate(rows: &[ScoredReview]) -> Vec<MonthlyBucket> {
    let category_count = rows.iter().map(|r| r.categories.len()).max().unwrap_or(0);

    let mut by_month: BTreeMap<NaiveDate, Vec<&ScoredReview>> = BTreeMap::new();
    for row in rows {
        by_month.entry(row.review.month()).or_default().push(row);
    }

    by_month
        .into_iter()
        .map(|(month, members)| {
            let categories = (0..category_count)
                .map(|i| {
                    ColumnStats::from_values(
                        members
                            .iter()
                            .map(|r| r.categories.get(i).and_then(|c| c.sentiment)),
                    )
                })
                .collect();
            MonthlyBucket {
                month,
                categories,
                overall: ColumnStats::from_values(members.iter().map(|r| r.overall)),
                rating: ColumnStats::from_values(members.iter().map(|r| Some(r.review.rating))),
            }
        })
        .collect()
}
