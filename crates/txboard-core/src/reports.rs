//! Monthly report aggregates computed over a dataset snapshot
//!
//! Every function here expects its input to be restricted to one calendar
//! month already; the reducers themselves are month-agnostic.

use serde::{Deserialize, Serialize};

use crate::models::TransactionRecord;

/// Sales statistics for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Sum of prices over sold records, unrounded
    pub total_sales_amount: f64,
    /// Count of sold records
    pub total_sold_items: usize,
    /// Count of unsold records
    pub total_not_sold_items: usize,
}

/// One bucket of the fixed price-range histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeBucket {
    /// Range label, e.g. "101-500"
    pub range: String,
    /// Number of records in this range
    pub count: usize,
}

/// Category occurrence count for the pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category name
    pub category: String,
    /// Number of records in this category
    pub count: usize,
}

/// Labels and inclusive upper bounds of the bounded price buckets; the
/// final "10001+" bucket is open-ended and catches everything else.
const PRICE_BUCKETS: [(&str, f64); 5] = [
    ("0-100", 100.0),
    ("101-500", 500.0),
    ("501-1000", 1000.0),
    ("1001-5000", 5000.0),
    ("5001-10000", 10000.0),
];

/// Compute sales statistics over records already restricted to one month
///
/// Empty input yields all-zero statistics.
pub fn monthly_statistics(records: &[TransactionRecord]) -> Statistics {
    let total_sales_amount = records
        .iter()
        .filter(|r| r.sold)
        .map(|r| r.price)
        .sum();
    let total_sold_items = records.iter().filter(|r| r.sold).count();

    Statistics {
        total_sales_amount,
        total_sold_items,
        total_not_sold_items: records.len() - total_sold_items,
    }
}

/// Classify records into the six fixed price buckets, first match wins
///
/// Every bucket appears in the result in declared order, even at count
/// zero.
pub fn price_range_histogram(records: &[TransactionRecord]) -> Vec<PriceRangeBucket> {
    let mut buckets: Vec<PriceRangeBucket> = PRICE_BUCKETS
        .iter()
        .map(|(range, _)| PriceRangeBucket {
            range: range.to_string(),
            count: 0,
        })
        .collect();
    buckets.push(PriceRangeBucket {
        range: "10001+".to_string(),
        count: 0,
    });

    for record in records {
        let slot = PRICE_BUCKETS
            .iter()
            .position(|(_, upper)| record.price <= *upper)
            .unwrap_or(PRICE_BUCKETS.len());
        buckets[slot].count += 1;
    }

    buckets
}

/// Count records per category, in first-occurrence order
///
/// Only categories present in the input appear; there is no fixed
/// category list.
pub fn category_breakdown(records: &[TransactionRecord]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for record in records {
        match counts.iter_mut().find(|c| c.category == record.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: record.category.clone(),
                count: 1,
            }),
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: f64, sold: bool, category: &str) -> TransactionRecord {
        TransactionRecord {
            id: 0,
            title: "item".to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            sold,
            date_of_sale: "2022-03-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_statistics_concrete_scenario() {
        let records = vec![
            record(50.0, true, "a"),
            record(150.0, false, "a"),
            record(1200.0, true, "b"),
        ];

        let stats = monthly_statistics(&records);

        assert_eq!(stats.total_sales_amount, 1250.0);
        assert_eq!(stats.total_sold_items, 2);
        assert_eq!(stats.total_not_sold_items, 1);
    }

    #[test]
    fn test_statistics_empty_input_is_all_zero() {
        let stats = monthly_statistics(&[]);

        assert_eq!(stats.total_sales_amount, 0.0);
        assert_eq!(stats.total_sold_items, 0);
        assert_eq!(stats.total_not_sold_items, 0);
    }

    #[test]
    fn test_statistics_counts_partition_the_input() {
        let records = vec![
            record(1.0, true, "a"),
            record(2.0, false, "a"),
            record(3.0, false, "a"),
            record(4.0, true, "a"),
        ];

        let stats = monthly_statistics(&records);

        assert_eq!(
            stats.total_sold_items + stats.total_not_sold_items,
            records.len()
        );
    }

    #[test]
    fn test_statistics_serializes_camel_case() {
        let value = serde_json::to_value(monthly_statistics(&[])).unwrap();

        assert!(value.get("totalSalesAmount").is_some());
        assert!(value.get("totalSoldItems").is_some());
        assert!(value.get("totalNotSoldItems").is_some());
    }

    #[test]
    fn test_price_range_concrete_scenario() {
        let records = vec![
            record(50.0, true, "a"),
            record(150.0, false, "a"),
            record(1200.0, true, "b"),
        ];

        let buckets = price_range_histogram(&records);

        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_price_range_boundaries_are_inclusive() {
        let records = vec![
            record(100.0, false, "a"),
            record(100.01, false, "a"),
            record(500.0, false, "a"),
            record(10000.0, false, "a"),
            record(10000.01, false, "a"),
        ];

        let buckets = price_range_histogram(&records);

        assert_eq!(buckets[0].count, 1); // 100 stays in 0-100
        assert_eq!(buckets[1].count, 2); // 100.01 and 500
        assert_eq!(buckets[4].count, 1); // 10000 stays bounded
        assert_eq!(buckets[5].count, 1); // 10000.01 overflows
    }

    #[test]
    fn test_price_range_counts_sum_to_input_len() {
        let records: Vec<TransactionRecord> = [3.0, 99.9, 101.0, 777.0, 4999.0, 9999.0, 20000.0]
            .iter()
            .map(|p| record(*p, false, "a"))
            .collect();

        let buckets = price_range_histogram(&records);

        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_price_range_empty_input_keeps_all_buckets() {
        let buckets = price_range_histogram(&[]);

        let ranges: Vec<&str> = buckets.iter().map(|b| b.range.as_str()).collect();
        assert_eq!(
            ranges,
            vec!["0-100", "101-500", "501-1000", "1001-5000", "5001-10000", "10001+"]
        );
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_category_breakdown_insertion_order() {
        let records = vec![
            record(1.0, false, "electronics"),
            record(2.0, false, "clothing"),
            record(3.0, false, "electronics"),
            record(4.0, false, "jewelery"),
        ];

        let counts = category_breakdown(&records);

        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].category, "electronics");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].category, "clothing");
        assert_eq!(counts[1].count, 1);
        assert_eq!(counts[2].category, "jewelery");
        assert_eq!(counts[2].count, 1);
    }

    #[test]
    fn test_category_breakdown_empty_input() {
        assert!(category_breakdown(&[]).is_empty());
    }
}
