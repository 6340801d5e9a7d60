//! End-to-end checks of the filter/pagination pipeline over domain records.

use chrono::Utc;
use localmart::domain::listing::{Listing, ListingStatus};
use localmart::filters::FilterCriteria;
use localmart::listview::ListState;

fn listing(id: i32, title: &str, status: ListingStatus) -> Listing {
    let now = Utc::now().naive_utc();
    Listing {
        id,
        hub_id: 1,
        owner_email: "owner@example.com".to_string(),
        title: title.to_string(),
        description: String::new(),
        category: "retail".to_string(),
        city: "Springfield".to_string(),
        address: format!("{id} Main St"),
        phone: None,
        email: None,
        lat: None,
        lng: None,
        status,
        created_at: now,
        updated_at: now,
    }
}

/// 12 records, 7 of them active.
fn batch() -> Vec<Listing> {
    (1..=12)
        .map(|id| {
            let status = if id <= 7 {
                ListingStatus::Active
            } else {
                ListingStatus::Hidden
            };
            listing(id, &format!("Listing #{id}"), status)
        })
        .collect()
}

#[test]
fn status_filter_with_page_size_five_splits_seven_matches() {
    let criteria = FilterCriteria::new().status("Active");

    let mut first = ListState::new(criteria.clone(), 1);
    let page_one = first.apply(batch(), 5);
    assert_eq!(page_one.total_pages, 2);
    assert_eq!(page_one.total_items, 7);
    assert_eq!(page_one.items.len(), 5);

    let mut second = ListState::new(criteria, 2);
    let page_two = second.apply(batch(), 5);
    assert_eq!(page_two.items.len(), 2);

    assert!(
        page_one
            .items
            .iter()
            .chain(page_two.items.iter())
            .all(|l| l.status == ListingStatus::Active)
    );
}

#[test]
fn text_search_is_case_insensitive_over_designated_fields() {
    let records = vec![
        listing(1, "Modern Apartment", ListingStatus::Active),
        listing(2, "Cozy Cottage", ListingStatus::Active),
    ];

    let criteria = FilterCriteria::new().text("apartment");
    let matched: Vec<&Listing> = records.iter().filter(|l| criteria.matches(*l)).collect();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, 1);
}

#[test]
fn pages_partition_the_filtered_sequence() {
    let criteria = FilterCriteria::new().status("Active");
    let expected: Vec<i32> = (1..=7).collect();

    let mut seen = Vec::new();
    for page in 1..=2 {
        let mut state = ListState::new(criteria.clone(), page);
        seen.extend(state.apply(batch(), 5).items.into_iter().map(|l| l.id));
    }
    assert_eq!(seen, expected);
}

#[test]
fn reset_returns_the_unfiltered_first_page() {
    let mut state = ListState::new(FilterCriteria::new().status("Hidden"), 2);
    state.apply(batch(), 5);

    state.reset();
    let view = state.apply(batch(), 5);

    assert_eq!(view.page, 1);
    assert_eq!(view.total_items, 12);
    let ids: Vec<i32> = view.items.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn page_past_the_end_clamps_to_the_last_page() {
    let mut state = ListState::new(FilterCriteria::new(), 9);
    let view = state.apply(batch(), 5);
    assert_eq!(view.page, 3);
    assert_eq!(view.items.len(), 2);
    assert!(view.has_prev);
    assert!(!view.has_next);
}
