//! Client-side pagination over an already-filtered record batch.

use serde::Serialize;

/// Page size shared by the dashboard list views.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Number of pages needed for `total_items`, never less than one: an empty
/// result set still renders as page 1 of 1. A zero `per_page` degrades to a
/// single page instead of dividing by zero.
pub fn page_count(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total_items.div_ceil(per_page).max(1)
}

/// The 1-based page window `[(page - 1) * per_page, page * per_page)`.
///
/// A page past the end yields an empty vector; clamping the requested page is
/// the view controller's job, not the paginator's.
pub fn page_slice<T>(items: Vec<T>, page: usize, per_page: usize) -> Vec<T> {
    if page == 0 || per_page == 0 {
        return Vec::new();
    }
    items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect()
}

/// Page numbers to render in the pagination control, with `None` marking an
/// ellipsis gap. The first/last edges and a window around the current page
/// are always present.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One rendered page of a filtered sequence plus the display metadata the
/// templates need for the pagination controls.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize, total_items: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            has_next: current_page < total_pages,
            has_prev: current_page > 1,
            items,
            pages,
            page: current_page,
            total_pages,
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_minimum_is_one() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(0, 0), 1);
    }

    #[test]
    fn page_count_exact_multiples() {
        assert_eq!(page_count(20, 5), 4);
        assert_eq!(page_count(21, 5), 5);
        assert_eq!(page_count(4, 5), 1);
    }

    #[test]
    fn slice_returns_requested_window() {
        let items: Vec<usize> = (1..=12).collect();
        assert_eq!(page_slice(items.clone(), 1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_slice(items.clone(), 3, 5), vec![11, 12]);
    }

    #[test]
    fn slice_out_of_range_is_empty() {
        let items: Vec<usize> = (1..=12).collect();
        assert!(page_slice(items.clone(), 4, 5).is_empty());
        assert!(page_slice(items, 0, 5).is_empty());
    }

    #[test]
    fn concatenated_pages_rebuild_the_sequence() {
        let items: Vec<usize> = (1..=23).collect();
        let per_page = 5;
        let mut rebuilt = Vec::new();
        for page in 1..=page_count(items.len(), per_page) {
            rebuilt.extend(page_slice(items.clone(), page, per_page));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn window_always_contains_edges_and_current() {
        let pages = get_pages(20, 10, 2, 2, 4, 2);
        assert_eq!(pages.first(), Some(&Some(1)));
        assert_eq!(pages.last(), Some(&Some(20)));
        assert!(pages.contains(&Some(10)));
        // Gaps exist on both sides of the middle window.
        assert_eq!(pages.iter().filter(|p| p.is_none()).count(), 2);
    }

    #[test]
    fn window_has_no_gap_when_contiguous() {
        let pages = get_pages(5, 2, 2, 2, 4, 2);
        assert!(pages.iter().all(|p| p.is_some()));
        let numbers: Vec<usize> = pages.into_iter().flatten().collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn paginated_metadata() {
        let view = Paginated::new(vec![1, 2], 2, 2, 7);
        assert_eq!(view.page, 2);
        assert!(view.has_prev);
        assert!(!view.has_next);
        assert_eq!(view.total_items, 7);

        let first: Paginated<usize> = Paginated::new(vec![], 0, 1, 0);
        assert_eq!(first.page, 1);
        assert!(!first.has_prev);
        assert!(!first.has_next);
    }
}
