#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use gloo_timers::future::sleep;
use reviewdesk::api::SaveFuture;
use reviewdesk::components::review_modal::ReviewModal;
use reviewdesk::error::ReviewError;
use reviewdesk::models::candidate::sample_candidates;
use reviewdesk::models::review::{ReviewData, ReviewStatus};

mod support;
use support::{
    all, is_disabled, mount_point, one, settle, text, type_into_input, type_into_textarea, value_of,
};

wasm_bindgen_test_configure!(run_in_browser);

struct Harness {
    container: web_sys::HtmlElement,
    saved: RwSignal<Option<ReviewData>>,
    closed: RwSignal<bool>,
}

async fn mount_modal(id: &str) -> Harness {
    let container = mount_point(id);
    let saved = create_rw_signal(None::<ReviewData>);
    let closed = create_rw_signal(false);

    mount_to(container.clone(), move || {
        view! {
            <ReviewModal
                candidate=sample_candidates().remove(0)
                on_close=Callback::new(move |_: ()| closed.set(true))
                on_saved=Callback::new(move |review: ReviewData| saved.set(Some(review)))
                save_delay=Duration::from_millis(10)
            />
        }
    });
    settle().await;

    Harness { container, saved, closed }
}

// Clicks star `stars` (1-5) on every criterion card
async fn rate_all(container: &web_sys::HtmlElement, stars: usize) {
    for card in all(container, ".criterion-card") {
        all(&card, ".star-rating button")[stars - 1].click();
    }
    settle().await;
}

#[wasm_bindgen_test]
async fn test_modal_starts_from_default_criteria() {
    let harness = mount_modal("modal-defaults").await;
    let container = &harness.container;

    assert_eq!(all(container, ".criterion-card").len(), 6);
    assert_eq!(text(container, ".completion-percent"), "0% Complete");
    assert_eq!(text(container, ".completion .muted"), "0 of 6 criteria rated");
    assert_eq!(text(container, ".overall-label"), "Overall Rating: Pending");
    assert_eq!(text(container, ".save-review"), "Save Progress");
    assert!(text(container, ".candidate-name").contains("Avery Quinn"));
}

#[wasm_bindgen_test]
async fn test_rating_updates_progress_and_overall() {
    let harness = mount_modal("modal-progress").await;
    let container = &harness.container;

    let cards = all(container, ".criterion-card");
    all(&cards[0], ".star-rating button")[3].click();
    all(&cards[1], ".star-rating button")[4].click();
    settle().await;

    assert_eq!(text(container, ".completion-percent"), "33% Complete");
    assert_eq!(text(container, ".completion .muted"), "2 of 6 criteria rated");
    assert_eq!(text(container, ".overall-label"), "Overall Rating: 4.5/5");
    assert_eq!(text(container, ".progress-card .badge"), "2/6 Completed");
}

#[wasm_bindgen_test]
async fn test_complete_review_is_saved_and_closes() {
    let harness = mount_modal("modal-complete").await;
    let container = &harness.container;

    rate_all(container, 5).await;
    assert_eq!(text(container, ".completion-percent"), "100% Complete");
    assert_eq!(text(container, ".save-review"), "Complete Review");

    one(container, ".save-review").click();
    sleep(Duration::from_millis(150)).await;

    let review = harness.saved.get_untracked().expect("review was not saved");
    assert_eq!(review.status, ReviewStatus::Completed);
    assert_eq!(review.overall_rating, 5.0);
    assert_eq!(review.criteria.len(), 6);
    assert!(harness.closed.get_untracked());
}

#[wasm_bindgen_test]
async fn test_partial_review_saves_as_draft() {
    let harness = mount_modal("modal-draft").await;
    let container = &harness.container;

    let cards = all(container, ".criterion-card");
    all(&cards[2], ".star-rating button")[1].click();
    settle().await;

    one(container, ".save-review").click();
    sleep(Duration::from_millis(150)).await;

    let review = harness.saved.get_untracked().expect("review was not saved");
    assert_eq!(review.status, ReviewStatus::Draft);
    assert_eq!(review.overall_rating, 2.0);
}

#[wasm_bindgen_test]
async fn test_custom_criteria_can_be_added_and_removed() {
    let harness = mount_modal("modal-custom").await;
    let container = &harness.container;

    one(container, ".add-criteria-trigger").click();
    settle().await;

    let submit = one(container, ".criteria-form button[type=submit]");
    assert!(is_disabled(&submit));

    type_into_input(&one(container, "#criteria-name"), "  Leadership Skills ");
    type_into_textarea(&one(container, "#criteria-description"), "Guides and grows the team");
    settle().await;
    assert!(!is_disabled(&submit));

    submit.click();
    settle().await;

    let cards = all(container, ".criterion-card");
    assert_eq!(cards.len(), 7);
    let added = &cards[6];
    assert_eq!(text(added, "h4"), "Leadership Skills");
    assert_eq!(text(added, ".badge-outline"), "07");
    assert_eq!(text(container, ".completion .muted"), "0 of 7 criteria rated");

    one(added, ".danger").click();
    settle().await;
    assert_eq!(all(container, ".criterion-card").len(), 6);
}

#[wasm_bindgen_test]
async fn test_default_criteria_name_is_locked_when_editing() {
    let harness = mount_modal("modal-edit").await;
    let container = &harness.container;

    let first = all(container, ".criterion-card").remove(0);
    all(&first, ".criterion-actions button")[0].click();
    settle().await;

    let name_input = one(container, "#edit-criteria-name");
    assert!(name_input.unchecked_ref::<web_sys::HtmlInputElement>().disabled());
    assert!(text(container, ".criteria-form").contains("Default criteria names cannot be edited"));

    type_into_textarea(&one(container, "#edit-criteria-description"), "Depth in Rust and systems design");
    settle().await;
    one(container, ".criteria-form button[type=submit]").click();
    settle().await;

    let first = all(container, ".criterion-card").remove(0);
    assert_eq!(text(&first, "h4"), "Technical Knowledge");
    assert_eq!(text(&first, "p.muted"), "Depth in Rust and systems design");
}

#[wasm_bindgen_test]
async fn test_cancelled_edit_keeps_the_original_description() {
    let harness = mount_modal("modal-edit-cancel").await;
    let container = &harness.container;

    let first = all(container, ".criterion-card").remove(0);
    let original = text(&first, "p.muted");
    all(&first, ".criterion-actions button")[0].click();
    settle().await;

    type_into_textarea(&one(container, "#edit-criteria-description"), "Thrown away");
    settle().await;
    one(container, ".criteria-form button.outline").click();
    settle().await;
    assert!(container.query_selector(".criteria-form").unwrap().is_none());

    let first = all(container, ".criterion-card").remove(0);
    assert_eq!(text(&first, "p.muted"), original);

    all(&first, ".criterion-actions button")[0].click();
    settle().await;
    assert_eq!(value_of(&one(container, "#edit-criteria-description")), original);
}

#[wasm_bindgen_test]
async fn test_cancelled_add_clears_the_fields() {
    let harness = mount_modal("modal-add-cancel").await;
    let container = &harness.container;

    one(container, ".add-criteria-trigger").click();
    settle().await;
    type_into_input(&one(container, "#criteria-name"), "Leadership");
    type_into_textarea(&one(container, "#criteria-description"), "Leads the team");
    settle().await;

    one(container, ".criteria-form button.outline").click();
    settle().await;
    assert!(container.query_selector(".criteria-form").unwrap().is_none());
    assert_eq!(all(container, ".criterion-card").len(), 6);

    one(container, ".add-criteria-trigger").click();
    settle().await;
    assert_eq!(value_of(&one(container, "#criteria-name")), "");
    assert_eq!(value_of(&one(container, "#criteria-description")), "");
    assert!(is_disabled(&one(container, ".criteria-form button[type=submit]")));
}

#[wasm_bindgen_test]
async fn test_save_draft_keeps_a_complete_review_as_draft() {
    let harness = mount_modal("modal-save-draft").await;
    let container = &harness.container;

    rate_all(container, 5).await;
    assert_eq!(text(container, ".save-review"), "Complete Review");

    one(container, ".save-draft").click();
    sleep(Duration::from_millis(150)).await;

    let review = harness.saved.get_untracked().expect("review was not saved");
    assert_eq!(review.status, ReviewStatus::Draft);
    assert_eq!(review.overall_rating, 5.0);
    assert!(harness.closed.get_untracked());
}

fn rejecting_submit(_review: ReviewData, _delay: Duration) -> SaveFuture {
    Box::pin(async { Err(ReviewError::Submit("backend unavailable".into())) })
}

#[wasm_bindgen_test]
async fn test_failed_save_keeps_the_modal_open_with_an_error() {
    let container = mount_point("modal-save-failure");
    let saved = create_rw_signal(None::<ReviewData>);
    let closed = create_rw_signal(false);

    mount_to(container.clone(), move || {
        view! {
            <ReviewModal
                candidate=sample_candidates().remove(0)
                on_close=Callback::new(move |_: ()| closed.set(true))
                on_saved=Callback::new(move |review: ReviewData| saved.set(Some(review)))
                save_delay=Duration::from_millis(10)
                submitter=rejecting_submit
            />
        }
    });
    settle().await;

    rate_all(&container, 3).await;
    one(&container, ".save-review").click();
    sleep(Duration::from_millis(150)).await;

    assert!(saved.get_untracked().is_none());
    assert!(!closed.get_untracked());
    assert_eq!(text(&container, ".notice-destructive strong"), "Error saving review");
    assert_eq!(text(&container, ".notice-destructive span"), "Please try again later");

    let save = one(&container, ".save-review");
    assert!(!is_disabled(&save));
    assert_eq!(text(&container, ".save-review"), "Complete Review");
}
