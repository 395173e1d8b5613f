//! Component Integration Tests
//!
//! End-to-end behavior of the pagination control, the modal provider, the
//! search bar, and configuration loading.

use app_ui::document::{Document, HeadlessDocument, Overflow};
use app_ui::events::Key;
use app_ui::modal::{use_modal, ClickTarget, ModalError, ModalOptions, ModalProvider};
use app_ui::navigation::{diary_detail_url, match_dynamic_route, UrlPath};
use app_ui::pagination::{compute_window, PageItem, PageItemView, Pagination};
use app_ui::{SearchBar, StyleSheet};
use diary_commons::AppConfig;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn pages(items: &[PageItem]) -> Vec<u32> {
    items.iter().filter_map(PageItem::page).collect()
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn test_window_properties_hold_for_small_inputs() {
    for total in 1..=25u32 {
        for visible in 1..=9u32 {
            for current in 1..=total {
                let window = compute_window(current, total, visible);
                let numbers = pages(&window);

                assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
                assert!(numbers.iter().all(|page| (1..=total).contains(page)));
                assert!(numbers.contains(&current));
                assert!(window
                    .windows(2)
                    .all(|pair| !(pair[0] == PageItem::Ellipsis && pair[1] == PageItem::Ellipsis)));
            }
        }
    }
}

#[test]
fn test_window_examples() {
    use PageItem::{Ellipsis, Page};

    assert_eq!(
        compute_window(1, 20, 5),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
    );
    assert_eq!(
        compute_window(10, 20, 5),
        vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
    );
    assert_eq!(compute_window(3, 3, 5), vec![Page(1), Page(2), Page(3)]);
}

#[test]
fn test_pagination_callbacks() {
    let selected = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&selected);

    let mut pagination = Pagination::new(10, 20).on_page_change(move |page: u32| {
        sink.lock().push(page);
    });

    assert!(!pagination.handle_page_click(10));
    assert!(!pagination.handle_page_click(0));
    assert!(!pagination.handle_page_click(21));
    assert!(selected.lock().is_empty());

    assert!(pagination.handle_page_click(12));
    assert!(pagination.handle_next_click());
    assert!(pagination.handle_last_click());

    pagination.set_current_page(1);
    assert!(!pagination.handle_prev_click());
    assert!(!pagination.handle_first_click());

    pagination.set_current_page(20);
    assert!(!pagination.handle_next_click());

    assert_eq!(*selected.lock(), vec![12, 11, 20]);
}

#[test]
fn test_pagination_render_matches_window() {
    let pagination = Pagination::new(10, 20);
    let view = pagination.render(&StyleSheet::identity());

    let rendered: Vec<Option<u32>> = view
        .items
        .iter()
        .map(|item| match item {
            PageItemView::Page { page, .. } => Some(*page),
            PageItemView::Ellipsis { .. } => None,
        })
        .collect();
    let expected: Vec<Option<u32>> = pagination.window().iter().map(PageItem::page).collect();
    assert_eq!(rendered, expected);

    let active: Vec<u32> = view
        .items
        .iter()
        .filter_map(|item| match item {
            PageItemView::Page { page, active: true, .. } => Some(*page),
            _ => None,
        })
        .collect();
    assert_eq!(active, vec![10]);
}

// =============================================================================
// Modal
// =============================================================================

fn modal() -> (Arc<HeadlessDocument>, ModalProvider<String>) {
    let document = Arc::new(HeadlessDocument::new());
    let provider = ModalProvider::new(document.clone() as Arc<dyn Document>);
    (document, provider)
}

#[test]
fn test_modal_replace_then_close_releases_everything() {
    let (document, provider) = modal();
    let handle = provider.handle();

    handle.open("first".to_string(), ModalOptions::default()).unwrap();
    handle.open("second".to_string(), ModalOptions::default()).unwrap();
    assert_eq!(provider.content().as_deref(), Some("second"));
    assert_eq!(document.listener_count(), 1);
    assert_eq!(document.body_overflow(), Some(Overflow::Hidden));

    handle.close().unwrap();
    assert_eq!(document.body_overflow(), Some(Overflow::Unset));
    assert_eq!(document.listener_count(), 0);
    assert!(!handle.is_open().unwrap());
}

#[test]
fn test_modal_escape_respects_option() {
    let (document, provider) = modal();
    let handle = provider.handle();

    handle
        .open(
            "sticky".to_string(),
            ModalOptions::new().with_close_on_escape(false),
        )
        .unwrap();
    document.dispatch_key(&Key::Escape);
    assert!(handle.is_open().unwrap());

    handle.open("dismissible".to_string(), ModalOptions::default()).unwrap();
    document.dispatch_key(&Key::from_name("Escape"));
    assert!(!handle.is_open().unwrap());
    assert!(!document.is_scroll_locked());
}

#[test]
fn test_modal_backdrop_child_click_never_closes() {
    let (_document, provider) = modal();
    provider.open("body".to_string(), ModalOptions::default());

    for _ in 0..3 {
        assert!(!provider.handle_backdrop_click(ClickTarget::Content));
    }
    assert!(provider.is_open());
    assert!(provider.handle_backdrop_click(ClickTarget::Backdrop));
    assert!(provider.render().is_none());
}

#[test]
fn test_modal_provider_teardown() {
    let (document, provider) = modal();
    let handle = provider.handle();
    handle.open("body".to_string(), ModalOptions::default()).unwrap();

    drop(provider);

    assert_eq!(document.body_overflow(), Some(Overflow::Unset));
    assert_eq!(document.listener_count(), 0);
    assert_eq!(handle.close(), Err(ModalError::OutsideProvider));
    assert!(use_modal(Some(&handle)).is_err());
}

// =============================================================================
// Search bar and routing
// =============================================================================

#[test]
fn test_search_submits_typed_text() {
    let searches = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&searches);

    let mut bar = SearchBar::new().on_search(move |text: String| {
        sink.lock().push(text);
    });
    bar.handle_change("행복");
    assert!(bar.handle_key_down(&Key::Enter));
    assert!(!bar.handle_key_down(&Key::from_name("a")));
    bar.handle_clear_click();
    bar.handle_search_click();

    assert_eq!(*searches.lock(), vec!["행복".to_string(), String::new()]);
}

#[test]
fn test_diary_detail_route_roundtrip() {
    let url = diary_detail_url(42);
    assert_eq!(url, "/diaries/42");

    let matched = match_dynamic_route(&url).unwrap();
    assert_eq!(matched.pattern, UrlPath::DiaryDetail);
    assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_from_file() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "ui": {{ "theme": "dark", "visiblePages": 7 }},
            "query": {{ "queries": {{ "refetchOnWindowFocus": true }} }},
            "logLevel": "debug"
        }}"#
    )?;

    let config = AppConfig::from_file(file.path())?;
    assert!(config.ui.theme().is_dark());
    assert_eq!(config.ui.visible_pages, 7);
    assert!(config.query.queries.refetch_on_window_focus);
    assert_eq!(config.query.queries.retry.retry, 3);
    assert_eq!(config.log_level, "debug");

    let pagination = config.ui.pagination(1, 30);
    assert_eq!(pages(&pagination.window()), vec![1, 2, 3, 4, 5, 6, 7, 30]);
    Ok(())
}

#[test]
fn test_init_tracing_twice_fails_cleanly() {
    let _ = diary_commons::init_tracing("warn");
    let second = diary_commons::init_tracing("warn");
    assert!(matches!(second, Err(diary_commons::ConfigError::Tracing(_))));
}
