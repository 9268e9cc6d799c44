use leptos::*;
use crate::models::rating::{rating_caption, RatingTier, StarSize, MAX_RATING};

/// Five clickable stars followed by a "x/5" caption.
/// Without `on_rating_change` (or with `readonly`) the stars only display.
#[component]
pub fn StarRating(
    #[prop(into)] rating: Signal<f64>,
    #[prop(optional)] on_rating_change: Option<Callback<u8>>,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] size: StarSize,
) -> impl IntoView {
    let interactive = on_rating_change.is_some() && !readonly;

    let pick = move |star: u8| {
        if !interactive {
            return;
        }
        if let Some(on_rating_change) = on_rating_change {
            on_rating_change.call(star);
        }
    };

    view! {
        <div class=format!("star-rating {}", size.css_class())>
            {(1..=MAX_RATING).map(|star| view! {
                <button
                    type="button"
                    class=move || RatingTier::for_star(star, rating.get()).css_class()
                    class:readonly=!interactive
                    disabled=!interactive
                    aria-label=format!("{} star", star)
                    on:click=move |_| pick(star)
                >
                    { "★" }
                </button>
            }).collect::<Vec<_>>()}
            <span class="rating-caption">{move || rating_caption(rating.get())}</span>
        </div>
    }
}
