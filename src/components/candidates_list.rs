/// Component to display the candidate database.
/// Each card shows the candidate's contact details, interview date and review status.
use leptos::*;
use crate::models::candidate::Candidate;

#[component]
pub fn CandidatesList(
    #[prop(into)] candidates: Signal<Vec<Candidate>>,
    on_add_review: Callback<Candidate>,
    on_toggle_reviews: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="candidates">
            <section class="card database-header">
                <h2>{ "Candidate Database" }</h2>
                <span class="badge badge-secondary">
                    {move || format!("{} candidates", candidates.with(Vec::len))}
                </span>
                <button type="button" class="outline view-reviews" on:click=move |_| on_toggle_reviews.call(())>
                    { "★ View All Reviews" }
                </button>
            </section>

            <ul class="candidate-list">
                <For
                    each=move || candidates.get()
                    // Status is part of the key so a saved review refreshes the card.
                    key=|candidate| (candidate.id.clone(), candidate.status)
                    children=move |candidate: Candidate| {
                        let status_class = candidate.status.badge_class();
                        let status_label = candidate.status.to_string();
                        let picked = candidate.clone();
                        view! {
                            <li class="card candidate-card">
                                <div class="avatar">{candidate.initials()}</div>
                                <div class="candidate-info">
                                    <h3>{candidate.name.clone()}</h3>
                                    <div class="candidate-details">
                                        <span>{ "✉ " }{candidate.email.clone()}</span>
                                        <span>{ "💼 " }{candidate.position.clone()}</span>
                                        <span>{ "📅 " }{candidate.interview_date.clone()}</span>
                                    </div>
                                </div>
                                <div class="candidate-actions">
                                    <span class=status_class>{status_label}</span>
                                    <button
                                        type="button"
                                        class="primary add-review"
                                        on:click=move |_| on_add_review.call(picked.clone())
                                    >
                                        { "Add Review" }
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
