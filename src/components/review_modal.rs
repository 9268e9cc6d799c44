use leptos::*;
use leptos::logging::{error, log};
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

use crate::api::{submit_review, Submitter, SAVE_DELAY};
use crate::components::criteria_review_form::CriteriaReviewForm;
use crate::components::dialog::Dialog;
use crate::models::candidate::Candidate;
use crate::models::criterion::{default_criteria, ReviewCriterion};
use crate::models::review::{
    completion_percentage, is_complete, overall_label, rated_count, ReviewData, SaveFeedback,
};
use crate::utils::leptos_owner::with_owner_safe;

/// Review workflow for one candidate. Mounted fresh for each review, so the
/// criteria always start from the defaults.
#[component]
pub fn ReviewModal(
    candidate: Candidate,
    on_close: Callback<()>,
    on_saved: Callback<ReviewData>,
    #[prop(optional)] save_delay: Option<Duration>,
    #[prop(optional)] submitter: Option<Submitter>,
) -> impl IntoView {
    let save_delay = save_delay.unwrap_or(SAVE_DELAY);
    let submit: Submitter = submitter.unwrap_or(submit_review);
    let (criteria, set_criteria) = create_signal(default_criteria());
    let (is_saving, set_is_saving) = create_signal(false);
    let (failure, set_failure) = create_signal(None::<SaveFeedback>);
    let candidate = store_value(candidate);

    let complete = move || criteria.with(|list| is_complete(list));

    let handle_save = move |as_draft: bool| {
        if is_saving.get_untracked() {
            return;
        }
        let review = candidate.with_value(|candidate| {
            criteria.with_untracked(|list| ReviewData::compose(candidate, list, as_draft))
        });
        set_failure.set(None);
        set_is_saving.set(true);

        let owner = Owner::current();
        spawn_local(async move {
            let result = submit(review, save_delay).await;
            with_owner_safe(owner, "review save", move || {
                set_is_saving.set(false);
                match result {
                    Ok(saved) => {
                        log!("[REVIEW] Saved {} review for {}", saved.status, saved.candidate_name);
                        on_saved.call(saved);
                        on_close.call(());
                    }
                    Err(err) => {
                        error!("[REVIEW] Save failed: {}", err);
                        set_failure.set(Some(SaveFeedback::failure()));
                    }
                }
            });
        });
    };

    let close = move || {
        if !is_saving.get_untracked() {
            on_close.call(());
        }
    };

    let candidate_value = candidate.get_value();
    let has_interview_date = !candidate_value.interview_date.is_empty();

    view! {
        <Dialog
            open=true
            title="Candidate Review"
            class="review-modal"
            on_close=Callback::new(move |_| close())
        >
            <header class="review-header">
                <div class="candidate-meta">
                    <span class="candidate-name">{ "👤 " }{candidate_value.name.clone()}</span>
                    <span class="badge badge-outline">{candidate_value.position.clone()}</span>
                    <Show when=move || has_interview_date>
                        <span class="interview-date">
                            { "📅 " }{candidate.with_value(|c| c.interview_date.clone())}
                        </span>
                    </Show>
                </div>
                <div class="completion">
                    <span class="completion-icon">{move || if complete() { "✔" } else { "⏱" }}</span>
                    <span class="completion-percent">
                        {move || format!("{}% Complete", criteria.with(|list| completion_percentage(list)).round())}
                    </span>
                    <div class="muted">
                        {move || criteria.with(|list| format!("{} of {} criteria rated", rated_count(list), list.len()))}
                    </div>
                </div>
            </header>

            <div class="review-body">
                <CriteriaReviewForm
                    criteria=criteria
                    on_criteria_change=Callback::new(move |next: Vec<ReviewCriterion>| set_criteria.set(next))
                />
            </div>

            <footer class="review-footer">
                <div>
                    <div class="overall-label">
                        {move || format!("Overall Rating: {}", criteria.with(|list| overall_label(list)))}
                    </div>
                    <div class="muted">
                        {move || if complete() { "All criteria completed" } else { "Complete all ratings to finish review" }}
                    </div>
                    <Show when=move || failure.with(Option::is_some)>
                        <div class="notice notice-destructive" role="alert">
                            <strong>{move || failure.get().map(|f| f.title).unwrap_or_default()}</strong>
                            <span>{move || failure.get().map(|f| f.description).unwrap_or_default()}</span>
                        </div>
                    </Show>
                </div>
                <div class="footer-actions">
                    <button
                        type="button"
                        class="outline"
                        disabled=move || is_saving.get()
                        on:click=move |_| close()
                    >
                        { "Cancel" }
                    </button>
                    <button
                        type="button"
                        class="outline save-draft"
                        disabled=move || is_saving.get()
                        on:click=move |_| handle_save(true)
                    >
                        { "Save Draft" }
                    </button>
                    <button
                        type="button"
                        class="primary save-review"
                        disabled=move || is_saving.get()
                        on:click=move |_| handle_save(false)
                    >
                        {move || {
                            if is_saving.get() {
                                "Saving..."
                            } else if complete() {
                                "Complete Review"
                            } else {
                                "Save Progress"
                            }
                        }}
                    </button>
                </div>
            </footer>
        </Dialog>
    }
}
