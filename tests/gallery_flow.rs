//! End-to-end flows through `handle_event`, with web request results fed
//! back the way the plugin shim delivers them.

use pixzel::app::{handle_event, Action, AppState, Event, Focus};
use pixzel::client::PixabayClient;
use pixzel::search::SearchStatus;
use pixzel::ui::{Layout, StatusLine, Theme};
use std::collections::BTreeMap;

fn new_state() -> AppState {
    let client = PixabayClient::new(
        "https://pixabay.com/api/",
        Some("test-key".to_string()),
        "photo",
        "horizontal",
    );
    let mut state = AppState::new(client, Theme::default());
    state.layout = Layout::new(24, 80);
    state
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).expect("event should be handled")
}

fn search(state: &mut AppState, query: &str) -> BTreeMap<String, String> {
    for c in query.chars() {
        send(state, Event::Char(c));
    }
    let (_, actions) = send(state, Event::Submit);
    single_fetch(&actions)
}

fn single_fetch(actions: &[Action]) -> BTreeMap<String, String> {
    match actions {
        [Action::Fetch(request)] => {
            assert!(request.url.contains("key=test-key"));
            assert!(request.url.contains("per_page=12"));
            request.context.clone()
        }
        other => panic!("expected one fetch, got {other:?}"),
    }
}

fn page_body(first_id: u64, count: u64, total: u32) -> Vec<u8> {
    let hits: Vec<serde_json::Value> = (first_id..first_id + count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "tags": format!("cat, kitten {id}"),
                "webformatURL": format!("https://cdn.example/{id}_640.jpg"),
                "largeImageURL": format!("https://cdn.example/{id}_1280.jpg"),
                "views": 100,
            })
        })
        .collect();
    serde_json::json!({ "total": total, "totalHits": total, "hits": hits })
        .to_string()
        .into_bytes()
}

fn settle(state: &mut AppState, context: BTreeMap<String, String>, body: Vec<u8>) -> (bool, Vec<Action>) {
    send(
        state,
        Event::FetchSettled {
            status: 200,
            body,
            context,
        },
    )
}

#[test]
fn paging_through_a_query_until_nothing_is_left() {
    let mut state = new_state();

    let first = search(&mut state, "cats");
    assert!(state.orchestrator.is_loading());
    assert_eq!(
        state.compute_viewmodel().status,
        Some(StatusLine::Loading {
            query: "cats".to_string(),
            page: 1
        })
    );

    settle(&mut state, first, page_body(1, 12, 40));
    assert_eq!(state.orchestrator.items().len(), 12);
    assert_eq!(state.orchestrator.status(), SearchStatus::Resolved);
    assert!(state.orchestrator.is_load_more_visible());

    let (_, actions) = send(&mut state, Event::LoadMore);
    let second = single_fetch(&actions);
    assert_eq!(second.get("page").map(String::as_str), Some("2"));
    assert!(!state.orchestrator.is_load_more_visible());

    settle(&mut state, second, page_body(13, 12, 40));
    let ids: Vec<u64> = state.orchestrator.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, (1..=24).collect::<Vec<_>>());
    assert!(state.orchestrator.is_load_more_visible());

    let (_, actions) = send(&mut state, Event::LoadMore);
    let third = single_fetch(&actions);
    settle(&mut state, third, page_body(25, 12, 40));
    assert_eq!(state.orchestrator.items().len(), 36);
    assert!(state.orchestrator.is_load_more_visible());

    let (_, actions) = send(&mut state, Event::LoadMore);
    let fourth = single_fetch(&actions);
    settle(&mut state, fourth, page_body(37, 4, 40));
    assert_eq!(state.orchestrator.items().len(), 40);
    assert_eq!(state.orchestrator.page(), 4);
    assert!(!state.orchestrator.is_load_more_visible());

    let (render, actions) = send(&mut state, Event::LoadMore);
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn a_new_query_discards_the_previous_results_and_late_pages() {
    let mut state = new_state();

    let cats = search(&mut state, "cats");
    settle(&mut state, cats, page_body(1, 12, 40));
    let (_, actions) = send(&mut state, Event::LoadMore);
    let late_cats_page = single_fetch(&actions);

    send(&mut state, Event::FocusSearch);
    let dogs = search(&mut state, "dogs");
    assert!(state.orchestrator.items().is_empty());
    assert_eq!(state.orchestrator.page(), 1);

    let (render, _) = settle(&mut state, late_cats_page, page_body(13, 12, 40));
    assert!(!render);
    assert!(state.orchestrator.items().is_empty());

    settle(&mut state, dogs, page_body(500, 3, 3));
    let ids: Vec<u64> = state.orchestrator.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![500, 501, 502]);
}

#[test]
fn failed_next_page_can_be_retried() {
    let mut state = new_state();

    let first = search(&mut state, "cats");
    settle(&mut state, first, page_body(1, 12, 40));
    let (_, actions) = send(&mut state, Event::LoadMore);
    let second = single_fetch(&actions);

    send(
        &mut state,
        Event::FetchSettled {
            status: 429,
            body: b"Too many requests".to_vec(),
            context: second,
        },
    );
    assert_eq!(state.orchestrator.status(), SearchStatus::Failed);
    assert_eq!(state.orchestrator.items().len(), 12);
    assert!(state
        .advisories
        .current()
        .is_some_and(|a| a.message.starts_with("Something went wrong")));

    let (_, actions) = send(&mut state, Event::LoadMore);
    let retry = single_fetch(&actions);
    assert_eq!(retry.get("page").map(String::as_str), Some("2"));
}

#[test]
fn modal_opens_from_the_gallery_and_closes_on_escape() {
    let mut state = new_state();
    let first = search(&mut state, "cats");
    settle(&mut state, first, page_body(1, 12, 40));
    assert_eq!(state.focus, Focus::Gallery);

    send(&mut state, Event::KeyDown);
    send(&mut state, Event::OpenSelected);
    assert_eq!(state.modal.full_url(), Some("https://cdn.example/2_1280.jpg"));
    assert_eq!(state.listeners.active(), 1);

    let (_, actions) = send(&mut state, Event::LoadMore);
    assert!(actions.is_empty());

    let (render, _) = send(&mut state, Event::Escape);
    assert!(render);
    assert!(!state.modal.is_visible());
    assert_eq!(state.listeners.active(), 0);
    assert_eq!(state.focus, Focus::Gallery);

    let (render, _) = send(&mut state, Event::Escape);
    assert!(!render);
}

#[test]
fn clicks_inside_the_modal_keep_it_open_and_backdrop_clicks_close_it() {
    let mut state = new_state();
    let first = search(&mut state, "cats");
    settle(&mut state, first, page_body(1, 12, 40));

    // Third gallery row.
    send(&mut state, Event::Click { row: Layout::GALLERY_ROW + 2, col: 10 });
    assert_eq!(state.selected_index, 2);
    assert_eq!(state.modal.full_url(), Some("https://cdn.example/3_1280.jpg"));

    let rect = state.layout.modal_rect();
    let (render, _) = send(&mut state, Event::Click { row: rect.row + 1, col: rect.col + 1 });
    assert!(!render);
    assert!(state.modal.is_visible());

    let (render, _) = send(&mut state, Event::Click { row: 1, col: 1 });
    assert!(render);
    assert!(!state.modal.is_visible());
    assert_eq!(state.listeners.active(), 0);
}

#[test]
fn clicking_the_status_line_loads_more() {
    let mut state = new_state();
    let first = search(&mut state, "cats");
    settle(&mut state, first, page_body(1, 12, 40));

    let status_row = state.layout.status_row();
    let (_, actions) = send(&mut state, Event::Click { row: status_row, col: 40 });
    let second = single_fetch(&actions);
    assert_eq!(second.get("page").map(String::as_str), Some("2"));
}
