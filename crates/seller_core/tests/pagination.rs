use seller_core::{paginate, total_pages, Page, PageSummary};

#[test]
fn twenty_three_items_span_three_pages() {
    let items: Vec<u32> = (1..=23).collect();

    assert_eq!(total_pages(items.len(), 10), 3);
    assert_eq!(paginate(&items, 1, 10), &items[0..10]);
    assert_eq!(paginate(&items, 3, 10), &[21, 22, 23]);
    assert!(paginate(&items, 4, 10).is_empty());
}

#[test]
fn empty_sequence_needs_no_controls() {
    let items: Vec<u32> = Vec::new();
    let page = Page::new(&items, 1, 10);

    assert_eq!(page.total_pages, 0);
    assert!(!page.needs_controls());
    assert!(page.items.is_empty());
    assert_eq!(page.summary(), None);
}

#[test]
fn single_page_hides_controls() {
    let items: Vec<u32> = (1..=10).collect();
    let page = Page::new(&items, 1, 10);

    assert_eq!(page.total_pages, 1);
    assert!(!page.needs_controls());
    assert!(!page.has_previous());
    assert!(!page.has_next());
}

#[test]
fn middle_page_reports_navigation_and_range() {
    let items: Vec<u32> = (1..=23).collect();
    let page = Page::new(&items, 2, 10);

    assert!(page.needs_controls());
    assert!(page.has_previous());
    assert!(page.has_next());
    assert_eq!(
        page.summary(),
        Some(PageSummary {
            from: 11,
            to: 20,
            total: 23
        })
    );
}

#[test]
fn far_out_of_range_page_does_not_panic() {
    let items = [1, 2, 3];
    assert!(paginate(&items, usize::MAX, 10).is_empty());
    assert!(paginate(&items, 2, usize::MAX).is_empty());
}
