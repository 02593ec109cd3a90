use super::*;
use crate::DEAL_DELAY;
use crate::REVEAL_DELAY;
use crate::table::Phase;
use crate::table::Table;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SLACK: Duration = Duration::from_millis(200);

async fn sleep(duration: Duration) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, duration.as_millis() as i32)
            .expect("setTimeout");
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("sleep");
}

fn container() -> web_sys::HtmlElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let parent = document
        .create_element("div")
        .expect("create div")
        .unchecked_into::<web_sys::HtmlElement>();
    document
        .body()
        .expect("body")
        .append_child(&parent)
        .expect("append");
    parent
}

fn faces(parent: &web_sys::HtmlElement) -> u32 {
    parent
        .query_selector_all("[data-card]")
        .expect("query")
        .length()
}

fn shuffle_button(parent: &web_sys::HtmlElement) -> web_sys::HtmlButtonElement {
    parent
        .query_selector("button")
        .expect("query")
        .expect("new cards button")
        .unchecked_into::<web_sys::HtmlButtonElement>()
}

#[wasm_bindgen_test]
async fn timers_deal_one_hand() {
    let table = RwSignal::new(Table::default());
    let timers = Timers::new(table);
    timers.trigger();
    timers.trigger();
    assert!(timers.pending());
    sleep(DEAL_DELAY + REVEAL_DELAY + SLACK).await;
    table.with_untracked(|t| {
        assert!(t.epoch() == 1);
        assert!(t.phase() == Phase::Idle);
        assert!(t.hand().map(|h| h.size()) == Some(4));
    });
    assert!(!timers.pending());
}

#[wasm_bindgen_test]
async fn timers_teardown_mid_deal() {
    let table = RwSignal::new(Table::default());
    let timers = Timers::new(table);
    timers.trigger();
    sleep(DEAL_DELAY / 5).await;
    timers.teardown();
    assert!(!timers.pending());
    sleep(DEAL_DELAY + REVEAL_DELAY + SLACK).await;
    table.with_untracked(|t| {
        assert!(t.closed());
        assert!(t.hand().is_none());
    });
    assert!(!timers.pending());
}

#[wasm_bindgen_test]
async fn mount_deals_without_input() {
    let parent = container();
    let handle = leptos::mount::mount_to(parent.clone(), App);
    assert!(faces(&parent) == 0);
    sleep(DEAL_DELAY + REVEAL_DELAY + SLACK).await;
    assert!(faces(&parent) == 4);
    assert!(!shuffle_button(&parent).disabled());
    drop(handle);
}

#[wasm_bindgen_test]
async fn shuffle_button_disabled_while_dealing() {
    let parent = container();
    let handle = leptos::mount::mount_to(parent.clone(), App);
    sleep(DEAL_DELAY / 5).await;
    assert!(shuffle_button(&parent).disabled());
    sleep(DEAL_DELAY + REVEAL_DELAY + SLACK).await;
    assert!(!shuffle_button(&parent).disabled());
    drop(handle);
}

#[wasm_bindgen_test]
async fn unmount_mid_deal_stays_empty() {
    let parent = container();
    let handle = leptos::mount::mount_to(parent.clone(), App);
    sleep(DEAL_DELAY / 5).await;
    drop(handle);
    sleep(DEAL_DELAY + REVEAL_DELAY + SLACK).await;
    assert!(faces(&parent) == 0);
    assert!(parent.child_element_count() == 0);
}

#[wasm_bindgen_test]
async fn faces_survive_reveal() {
    let parent = container();
    let handle = leptos::mount::mount_to(parent.clone(), App);
    sleep(DEAL_DELAY + REVEAL_DELAY / 2).await;
    let dealt = parent
        .query_selector("[data-card]")
        .expect("query")
        .expect("dealt face");
    sleep(REVEAL_DELAY + SLACK).await;
    let settled = parent
        .query_selector("[data-card]")
        .expect("query")
        .expect("settled face");
    assert!(dealt.is_same_node(Some(&settled)));
    drop(handle);
}
