//! Per-view state machine tying [`FilterCriteria`] to the paginator.
//!
//! Every list page builds one [`ListState`] per request from its query
//! parameters and runs the loaded record batch through [`ListState::apply`].
//! The invariants live here rather than in each page handler: changing the
//! criteria lands the user on page 1, and a page request can never point
//! past the end of the filtered set.

use crate::filters::{Filterable, FilterCriteria};
use crate::pagination::{Paginated, page_count, page_slice};

/// Filter and page state owned by one list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    criteria: FilterCriteria,
    page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
        }
    }
}

impl ListState {
    /// Starts a view at the requested page; page indices are 1-based.
    pub fn new(criteria: FilterCriteria, requested_page: usize) -> Self {
        Self {
            criteria,
            page: requested_page.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replaces the criteria and returns to page 1, so a narrowed result set
    /// is never shown at a stale page index.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Moves to the requested page, clamped to `[1, total_pages]`; paging
    /// past either end is a no-op at the boundary.
    pub fn go_to_page(&mut self, requested: usize, total_pages: usize) {
        self.page = requested.clamp(1, total_pages.max(1));
    }

    /// Restores the default criteria and page 1 in a single state update.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Filters, counts, clamps the current page and slices, in that order.
    pub fn apply<T: Filterable>(&mut self, records: Vec<T>, per_page: usize) -> Paginated<T> {
        let filtered: Vec<T> = records
            .into_iter()
            .filter(|record| self.criteria.matches(record))
            .collect();

        let total_items = filtered.len();
        let total_pages = page_count(total_items, per_page);
        self.page = self.page.clamp(1, total_pages);

        let items = page_slice(filtered, self.page, per_page);
        Paginated::new(items, self.page, total_pages, total_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: usize,
        title: String,
        status: &'static str,
    }

    impl Filterable for Row {
        fn search_text(&self) -> Vec<&str> {
            vec![&self.title]
        }

        fn status(&self) -> Option<&str> {
            Some(self.status)
        }
    }

    /// 12 records, 7 of them active.
    fn records() -> Vec<Row> {
        (1..=12)
            .map(|id| Row {
                id,
                title: format!("Listing #{id}"),
                status: if id <= 7 { "active" } else { "hidden" },
            })
            .collect()
    }

    #[test]
    fn status_filter_paginates_the_matching_subset() {
        let criteria = FilterCriteria::new().status("active");
        let mut state = ListState::new(criteria.clone(), 1);

        let first = state.apply(records(), 5);
        assert_eq!(first.total_items, 7);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 5);

        let mut state = ListState::new(criteria, 2);
        let second = state.apply(records(), 5);
        assert_eq!(second.items.len(), 2);
        assert!(second.items.iter().all(|r| r.status == "active"));
        assert!(first.items.iter().all(|r| r.status == "active"));
    }

    #[test]
    fn identity_criteria_preserves_input_order() {
        let mut state = ListState::default();
        let view = state.apply(records(), 100);
        let ids: Vec<usize> = view.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn filtering_is_idempotent() {
        let criteria = FilterCriteria::new().status("active");
        let once: Vec<Row> = records()
            .into_iter()
            .filter(|r| criteria.matches(r))
            .collect();
        let twice: Vec<Row> = once
            .clone()
            .into_iter()
            .filter(|r| criteria.matches(r))
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn tightening_criteria_never_grows_the_result() {
        let loose = FilterCriteria::new().status("active");
        let tight = loose.clone().text("#1");

        let loose_count = records().iter().filter(|r| loose.matches(*r)).count();
        let tight_count = records().iter().filter(|r| tight.matches(*r)).count();
        assert!(tight_count <= loose_count);
    }

    #[test]
    fn pages_concatenate_to_the_filtered_sequence() {
        let criteria = FilterCriteria::new().status("active");
        let filtered: Vec<Row> = records()
            .into_iter()
            .filter(|r| criteria.matches(r))
            .collect();

        let mut rebuilt = Vec::new();
        let total_pages = page_count(filtered.len(), 3);
        for page in 1..=total_pages {
            let mut state = ListState::new(criteria.clone(), page);
            rebuilt.extend(state.apply(records(), 3).items);
        }
        assert_eq!(rebuilt, filtered);
    }

    #[test]
    fn changing_criteria_resets_to_page_one() {
        let mut state = ListState::new(FilterCriteria::new(), 3);
        assert_eq!(state.page(), 3);

        state.set_criteria(FilterCriteria::new().text("listing"));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn page_requests_clamp_to_bounds() {
        let mut state = ListState::default();
        state.go_to_page(99, 3);
        assert_eq!(state.page(), 3);
        state.go_to_page(0, 3);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn out_of_range_request_lands_on_last_page() {
        let mut state = ListState::new(FilterCriteria::new(), 50);
        let view = state.apply(records(), 5);
        assert_eq!(view.page, 3);
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn unmatchable_criteria_render_page_one_of_one() {
        let mut state = ListState::new(FilterCriteria::new().text("no such listing"), 4);
        let view = state.apply(records(), 5);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
        assert!(view.items.is_empty());
    }

    #[test]
    fn reset_restores_the_unfiltered_first_page() {
        let mut state = ListState::new(FilterCriteria::new().status("hidden"), 2);
        state.apply(records(), 5);

        state.reset();
        assert!(state.criteria().is_identity());
        assert_eq!(state.page(), 1);

        let view = state.apply(records(), 5);
        assert_eq!(view.total_items, 12);
        let ids: Vec<usize> = view.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
