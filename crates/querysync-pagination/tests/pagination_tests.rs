use querysync_core::types::Location;
use querysync_pagination::{PageLink, PaginationView, Paginator, ResultsSummary};

fn at(url: &str) -> Location {
    Location::parse(url)
}

#[test]
fn parses_both_summary_shapes() {
    assert_eq!("No results found.".parse::<ResultsSummary>().unwrap(), ResultsSummary::NoResults);
    assert_eq!(
        "  Showing 21 to 40 of 100 results found\n".parse::<ResultsSummary>().unwrap(),
        ResultsSummary::Showing { start: 21, end: 40, total: 100 }
    );
    assert!("Loading…".parse::<ResultsSummary>().is_err());
}

#[test]
fn middle_page_shows_both_links() {
    let paginator = Paginator::new("/", 20);
    let view = paginator.view_for_text("Showing 21 to 40 of 100 results found", &at("/page/2/"));
    assert_eq!(view.next, Some(PageLink { offset: 1, target_page: 3, href: "/page/3".into() }));
    assert_eq!(view.previous, Some(PageLink { offset: -1, target_page: 1, href: "/".into() }));
}

#[test]
fn first_page_hides_previous() {
    let paginator = Paginator::new("/", 20);
    let view = paginator.view_for_text("Showing 1 to 20 of 45 results found", &at("/?size=9"));
    assert!(view.previous.is_none());
    assert_eq!(view.next.map(|l| l.href), Some("/page/2?size=9".to_string()));
}

#[test]
fn last_page_hides_next() {
    let paginator = Paginator::new("/keymaps/", 20);
    let view = paginator.view_for_text("Showing 41 to 45 of 45 results found", &at("/keymaps/page/3/?layout=ortho"));
    assert!(view.next.is_none());
    assert_eq!(view.previous.map(|l| l.href), Some("/keymaps/page/2?layout=ortho".to_string()));
}

#[test]
fn page_past_the_end_points_back_to_last_page() {
    let paginator = Paginator::new("/", 20);
    let view = paginator.view_for_text("Showing 0 to 0 of 5 results found", &at("/page/9/?size=9%2C10"));
    assert!(view.next.is_none(), "next is forced hidden past the end");
    let previous = view.previous.expect("previous visible");
    assert_eq!(previous.offset, -8);
    assert_eq!(previous.target_page, 1);
    assert_eq!(previous.href, "/?size=9%2C10");
}

#[test]
fn page_past_the_end_with_several_valid_pages() {
    let paginator = Paginator::new("/", 20);
    let view = paginator.view_for_text("Showing 0 to 0 of 45 results found", &at("/page/7/"));
    let previous = view.previous.expect("previous visible");
    assert_eq!(previous.offset, -4);
    assert_eq!(previous.href, "/page/3");
}

#[test]
fn no_results_and_garbage_hide_everything() {
    let paginator = Paginator::new("/", 20);
    assert_eq!(paginator.view_for_text("No results found.", &at("/")), PaginationView::hidden());
    assert_eq!(paginator.view_for_text("", &at("/page/4/")), PaginationView::hidden());
}

#[test]
fn view_serializes_hidden_links_as_null() {
    let view = Paginator::new("/", 20).view_for_text("Showing 1 to 20 of 21 results found", &at("/"));
    let json = serde_json::to_value(&view).unwrap();
    assert!(json["previous"].is_null());
    assert_eq!(json["next"]["target_page"], 2);
}
