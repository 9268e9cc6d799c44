use leptos::*;
use crate::models::rating::rating_caption;
use crate::models::review::ReviewData;

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<ReviewData>>) -> impl IntoView {
    view! {
        <section class="card reviews">
            <h3>{ "Reviews" }</h3>
            <Show
                when=move || reviews.with(|r| !r.is_empty())
                fallback=|| view! { <p class="muted">{ "No reviews saved yet" }</p> }
            >
                <ul>
                    {move || {
                        reviews.get().into_iter().map(|review| {
                            view! {
                                <li class="review-entry">
                                    <strong>{review.candidate_name}</strong>
                                    { " - " }{review.position}
                                    <span class=format!("badge status-{}", review.status)>
                                        {review.status.to_string()}
                                    </span>
                                    <span>{rating_caption(review.overall_rating)}</span>
                                    <span class="muted">
                                        {review.review_date.format("%b %d, %Y %H:%M").to_string()}
                                    </span>
                                </li>
                            }
                        }).collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </section>
    }
}
