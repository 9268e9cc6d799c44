/// Main application entry point for the review desk.
/// Combines the candidate list, saved reviews and the review modal into one page.
use leptos::*;
use leptos::logging::log;
use leptos_meta::*;
use leptos_router::*;
use std::time::Duration;

use crate::api::SAVE_DELAY;
use crate::components::{
    candidates_list::CandidatesList, review_modal::ReviewModal, reviews_list::ReviewsList,
};
use crate::models::candidate::{sample_candidates, Candidate, CandidateStatus};
use crate::models::review::{ReviewData, SaveFeedback};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/reviewdesk.css"/>
        <Title text="Candidates Management"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=|| view! { <CandidatesPage/> }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn CandidatesPage(
    /// How long a review save takes to resolve.
    #[prop(optional)]
    save_delay: Option<Duration>,
) -> impl IntoView {
    let save_delay = save_delay.unwrap_or(SAVE_DELAY);
    // Signals holding the page state; nothing outlives the page.
    let (candidates, set_candidates) = create_signal(sample_candidates());
    let (reviews, set_reviews) = create_signal(Vec::<ReviewData>::new());
    let (selected, set_selected) = create_signal(None::<Candidate>);
    let (show_reviews, set_show_reviews) = create_signal(false);
    let (notice, set_notice) = create_signal(None::<SaveFeedback>);

    let open_review = Callback::new(move |candidate: Candidate| {
        log!("[REVIEW] Opening review for candidate {}", candidate.id);
        set_notice.set(None);
        set_selected.set(Some(candidate));
    });

    let close_review = Callback::new(move |_: ()| set_selected.set(None));

    // A saved review updates the candidate's status and lands on top of the list.
    let record_review = Callback::new(move |review: ReviewData| {
        let status = CandidateStatus::after_review(review.status);
        if let Some(candidate_id) = selected.with_untracked(|c| c.as_ref().map(|c| c.id.clone())) {
            set_candidates.update(|list| {
                if let Some(candidate) = list.iter_mut().find(|c| c.id == candidate_id) {
                    candidate.status = status;
                }
            });
        }
        set_notice.set(Some(SaveFeedback::for_status(review.status)));
        set_reviews.update(|list| list.insert(0, review));
    });

    view! {
        <div class="page">
            <header class="page-header">
                <div class="logo">{ "👥" }</div>
                <div>
                    <h1>{ "Candidates Management" }</h1>
                    <p class="muted">{ "Professional review system for candidate evaluation" }</p>
                </div>
            </header>

            {move || notice.get().map(|feedback| view! {
                <div
                    class="notice"
                    class:notice-destructive=feedback.destructive
                    role="status"
                >
                    <strong>{feedback.title}</strong>
                    <span>{feedback.description}</span>
                    <button type="button" class="ghost" on:click=move |_| set_notice.set(None)>{ "✕" }</button>
                </div>
            })}

            <CandidatesList
                candidates=candidates
                on_add_review=open_review
                on_toggle_reviews=Callback::new(move |_| set_show_reviews.update(|shown| *shown = !*shown))
            />

            <Show when=move || show_reviews.get()>
                <ReviewsList reviews=reviews/>
            </Show>

            {move || selected.get().map(|candidate| view! {
                <ReviewModal
                    candidate=candidate
                    on_close=close_review
                    on_saved=record_review
                    save_delay=save_delay
                />
            })}
        </div>
    }
}
