//! Pure predicates and the AND combinator behind every filterable list view.
//!
//! Each dashboard page (listings, campaigns, offers, gift cards, orders)
//! loads its per-hub batch of records and narrows it with one
//! [`FilterCriteria`] value. Predicates are total functions: missing record
//! fields fail an active criterion instead of erroring, and a contradictory
//! range simply matches nothing.

use chrono::NaiveDate;
use serde::Serialize;

/// Field accessors a record exposes to the filter pipeline.
///
/// Implementors return only the fields their list view filters on; the
/// defaults opt out of a predicate entirely.
pub trait Filterable {
    /// String fields the free-text query is matched against.
    fn search_text(&self) -> Vec<&str>;

    /// Category-like label tested by the first selection predicate.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Status label tested by the second selection predicate.
    fn status(&self) -> Option<&str> {
        None
    }

    /// Date tested by the date-range predicate.
    fn date(&self) -> Option<NaiveDate> {
        None
    }

    /// Amount in minor units tested by the numeric-range predicate.
    fn amount(&self) -> Option<i64> {
        None
    }
}

/// Current filter state for one list view.
///
/// The default value is the identity filter: it matches every record. The
/// builder setters normalize raw UI input, so an empty query or the `"all"`
/// select option deactivate their criterion instead of filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub text: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub amount_min: Option<i64>,
    pub amount_max: Option<i64>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text query; blank input deactivates the predicate.
    pub fn text(mut self, query: impl Into<String>) -> Self {
        self.text = normalize_query(query.into());
        self
    }

    /// Sets the category selection; `"all"` or blank deactivates it.
    pub fn category(mut self, selected: impl Into<String>) -> Self {
        self.category = normalize_selection(selected.into());
        self
    }

    /// Sets the status selection; `"all"` or blank deactivates it.
    pub fn status(mut self, selected: impl Into<String>) -> Self {
        self.status = normalize_selection(selected.into());
        self
    }

    /// Constrains the record date; either bound may be open-ended.
    pub fn date_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Constrains the record amount; either bound may be open-ended.
    pub fn amount_between(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.amount_min = min;
        self.amount_max = max;
        self
    }

    /// Whether no criterion is active.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Conjunction of every active predicate against one record.
    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        let text_ok = match &self.text {
            None => true,
            Some(query) => text_matches(query, &record.search_text()),
        };

        text_ok
            && selection_matches(self.category.as_deref(), record.category())
            && selection_matches(self.status.as_deref(), record.status())
            && date_in_range(record.date(), self.date_from, self.date_to)
            && amount_in_range(record.amount(), self.amount_min, self.amount_max)
    }
}

fn normalize_query(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The UI sends `"all"` for an unconstrained select.
fn normalize_selection(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case-insensitive substring test over any of the record's haystacks.
/// A blank query always matches.
pub fn text_matches(query: &str, haystacks: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}

/// Exact (case-insensitive) equality, unless the selection is inactive.
/// A record without a value never matches an active selection.
pub fn selection_matches(selected: Option<&str>, actual: Option<&str>) -> bool {
    match (selected, actual) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(selected), Some(actual)) => selected.eq_ignore_ascii_case(actual),
    }
}

/// Closed-interval containment with open-ended bounds.
/// A record without a date fails any active bound; `from > to` matches nothing.
pub fn date_in_range(date: Option<NaiveDate>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let Some(date) = date else {
        return false;
    };
    from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
}

/// Numeric analogue of [`date_in_range`], over minor currency units.
pub fn amount_in_range(amount: Option<i64>, min: Option<i64>, max: Option<i64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(amount) = amount else {
        return false;
    };
    min.is_none_or(|min| amount >= min) && max.is_none_or(|max| amount <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        title: &'static str,
        category: Option<&'static str>,
        date: Option<NaiveDate>,
        amount: Option<i64>,
    }

    impl Filterable for Row {
        fn search_text(&self) -> Vec<&str> {
            vec![self.title]
        }

        fn category(&self) -> Option<&str> {
            self.category
        }

        fn date(&self) -> Option<NaiveDate> {
            self.date
        }

        fn amount(&self) -> Option<i64> {
            self.amount
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    fn row(title: &'static str) -> Row {
        Row {
            title,
            category: None,
            date: None,
            amount: None,
        }
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        assert!(text_matches("Apartment", &["Modern Apartment"]));
        assert!(text_matches("apartment", &["Modern Apartment"]));
        assert!(!text_matches("apartment", &["Cozy Cottage"]));
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(text_matches("", &["anything"]));
        assert!(text_matches("   ", &[]));
    }

    #[test]
    fn selection_all_sentinel_deactivates() {
        let criteria = FilterCriteria::new().category("all");
        assert_eq!(criteria, FilterCriteria::default());
        assert!(criteria.is_identity());
    }

    #[test]
    fn active_selection_rejects_missing_field() {
        assert!(!selection_matches(Some("food"), None));
        assert!(selection_matches(None, None));
        assert!(selection_matches(Some("Food"), Some("food")));
    }

    #[test]
    fn date_range_bounds_are_inclusive_and_open_ended() {
        let from = Some(date("2025-01-01"));
        let to = Some(date("2025-01-31"));
        assert!(!date_in_range(Some(date("2025-02-01")), from, to));
        assert!(date_in_range(Some(date("2025-02-01")), from, None));
        assert!(date_in_range(Some(date("2025-01-31")), from, to));
        assert!(date_in_range(None, None, None));
        assert!(!date_in_range(None, from, None));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let from = Some(date("2025-06-01"));
        let to = Some(date("2025-01-01"));
        assert!(!date_in_range(Some(date("2025-03-01")), from, to));
        assert!(!amount_in_range(Some(50), Some(100), Some(10)));
    }

    #[test]
    fn combinator_requires_every_active_predicate() {
        let record = Row {
            title: "Modern Apartment",
            category: Some("housing"),
            date: Some(date("2025-03-10")),
            amount: Some(2_500),
        };

        let criteria = FilterCriteria::new()
            .text("apartment")
            .category("housing")
            .date_between(Some(date("2025-03-01")), None)
            .amount_between(Some(1_000), Some(5_000));
        assert!(criteria.matches(&record));

        let tightened = criteria.clone().text("cottage");
        assert!(!tightened.matches(&record));
    }

    #[test]
    fn identity_criteria_matches_all() {
        let criteria = FilterCriteria::new();
        for title in ["a", "b", "c"] {
            assert!(criteria.matches(&row(title)));
        }
    }
}
