//! Record selection modes for the transactions listing

use crate::models::TransactionRecord;
use crate::month::Month;

/// Selection mode for the transactions listing
///
/// Month and search are alternate modes, never combined: a search query
/// always scans the full dataset regardless of any selected month.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionFilter {
    /// Records whose sale falls in the given calendar month, any year
    ByMonth(Month),
    /// Records matching the search text on title, description or price
    BySearch(String),
    /// The full dataset
    All,
}

impl TransactionFilter {
    /// Check whether a record passes this filter
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            TransactionFilter::ByMonth(month) => record.sale_month() == Some(*month),
            TransactionFilter::BySearch(text) => matches_search(record, text),
            TransactionFilter::All => true,
        }
    }

    /// Apply this filter to a dataset snapshot, preserving record order
    pub fn apply(&self, records: &[TransactionRecord]) -> Vec<TransactionRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Check whether the search text matches a record
///
/// Title and description match case-insensitively; the price matches on a
/// literal substring of its decimal string form, so "10" matches 10, 100
/// and 1007. An empty search matches every record.
pub fn matches_search(record: &TransactionRecord, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }

    let needle = text.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
        || record.price.to_string().contains(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str, description: &str, price: f64, date: &str) -> TransactionRecord {
        TransactionRecord {
            id,
            title: title.to_string(),
            price,
            description: description.to_string(),
            category: "misc".to_string(),
            image: format!("https://example.com/{}.jpg", id),
            sold: false,
            date_of_sale: date.to_string(),
        }
    }

    #[test]
    fn test_month_filter_matches_any_year() {
        let records = vec![
            record(1, "a", "", 10.0, "2021-03-15T10:00:00+00:00"),
            record(2, "b", "", 10.0, "2022-03-01T10:00:00+00:00"),
            record(3, "c", "", 10.0, "2022-07-04T10:00:00+00:00"),
        ];

        let filtered = TransactionFilter::ByMonth(Month::March).apply(&records);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.sale_month() == Some(Month::March)));
    }

    #[test]
    fn test_month_filter_skips_unparseable_dates() {
        let records = vec![
            record(1, "a", "", 10.0, "garbage"),
            record(2, "b", "", 10.0, "2022-03-01T10:00:00+00:00"),
        ];

        let filtered = TransactionFilter::ByMonth(Month::March).apply(&records);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let shirt = record(1, "Red Shirt", "cotton", 199.0, "2022-03-01");

        assert!(matches_search(&shirt, "red"));
        assert!(matches_search(&shirt, "SHIRT"));
        assert!(matches_search(&shirt, "cotton"));
        assert!(!matches_search(&shirt, "blue"));
    }

    #[test]
    fn test_search_matches_price_substring() {
        let shirt = record(1, "Red Shirt", "cotton", 199.0, "2022-03-01");

        assert!(matches_search(&shirt, "19"));
        assert!(matches_search(&shirt, "199"));
        assert!(!matches_search(&shirt, "200"));
    }

    #[test]
    fn test_search_matches_fractional_price() {
        let item = record(1, "Cap", "wool", 109.95, "2022-03-01");

        assert!(matches_search(&item, "109.95"));
        assert!(matches_search(&item, "9.9"));
    }

    #[test]
    fn test_search_empty_matches_all_unchanged_order() {
        let records = vec![
            record(3, "c", "", 1.0, "2022-01-01"),
            record(1, "a", "", 2.0, "2022-02-01"),
            record(2, "b", "", 3.0, "2022-03-01"),
        ];

        let filtered = TransactionFilter::BySearch(String::new()).apply(&records);

        assert_eq!(filtered, records);
    }

    #[test]
    fn test_all_filter_keeps_everything() {
        let records = vec![
            record(1, "a", "", 1.0, "garbage"),
            record(2, "b", "", 2.0, "2022-03-01"),
        ];

        assert_eq!(TransactionFilter::All.apply(&records), records);
    }
}
