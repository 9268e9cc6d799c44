/// The review body: a progress summary followed by one card per criterion.
/// The form owns no criteria state; every edit is reported upward as a new list.
use leptos::*;
use leptos::logging::error;

use crate::components::add_custom_criteria::AddCustomCriteria;
use crate::components::edit_criteria_dialog::EditCriteriaDialog;
use crate::components::star_rating::StarRating;
use crate::error::ReviewError;
use crate::models::criterion::ReviewCriterion;
use crate::models::rating::StarSize;
use crate::models::review::{
    add_custom, completion_percentage, overall_rating, rated_count, remove_custom,
    replace_criterion, set_comment, set_rating,
};

fn apply_edit<F>(
    criteria: Signal<Vec<ReviewCriterion>>,
    on_criteria_change: Callback<Vec<ReviewCriterion>>,
    context: &str,
    edit: F,
) where
    F: FnOnce(&mut Vec<ReviewCriterion>) -> Result<(), ReviewError>,
{
    let mut next = criteria.get_untracked();
    match edit(&mut next) {
        Ok(()) => on_criteria_change.call(next),
        Err(err) => error!("[CRITERIA] {} failed: {}", context, err),
    }
}

#[component]
pub fn CriteriaReviewForm(
    #[prop(into)] criteria: Signal<Vec<ReviewCriterion>>,
    on_criteria_change: Callback<Vec<ReviewCriterion>>,
) -> impl IntoView {
    let (editing_id, set_editing_id) = create_signal(None::<String>);

    let editing = Signal::derive(move || {
        editing_id.get().and_then(|id| {
            criteria.with(|list| list.iter().find(|c| c.id == id).cloned())
        })
    });

    let on_add = Callback::new(move |criterion: ReviewCriterion| {
        apply_edit(criteria, on_criteria_change, "add", |list| add_custom(list, criterion));
    });
    let on_save_edit = Callback::new(move |updated: ReviewCriterion| {
        apply_edit(criteria, on_criteria_change, "edit", |list| replace_criterion(list, updated));
    });

    view! {
        <div class="criteria-review-form">
            <section class="card progress-card">
                <div class="progress-header">
                    <h3>{ "Review Progress" }</h3>
                    <span class="badge badge-accent">
                        {move || criteria.with(|list| format!("{}/{} Completed", rated_count(list), list.len()))}
                    </span>
                </div>
                <div class="progress-row">
                    <div class="progress-track">
                        <div
                            class="progress-fill"
                            style=move || format!("width: {}%", criteria.with(|list| completion_percentage(list)))
                        ></div>
                    </div>
                    <div class="overall">
                        <div class="muted">{ "Overall Rating" }</div>
                        <StarRating
                            rating=Signal::derive(move || criteria.with(|list| overall_rating(list)))
                            readonly=true
                            size=StarSize::Sm
                        />
                    </div>
                </div>
            </section>

            <div class="criteria-list">
                <For
                    each=move || criteria.with(|list| list.iter().map(|c| c.id.clone()).collect::<Vec<_>>())
                    key=|id| id.clone()
                    children=move |id| view! {
                        <CriterionCard
                            id=id
                            criteria=criteria
                            on_criteria_change=on_criteria_change
                            on_edit=Callback::new(move |id: String| set_editing_id.set(Some(id)))
                        />
                    }
                />
            </div>

            <AddCustomCriteria
                on_add_criteria=on_add
                criteria_count=Signal::derive(move || criteria.with(Vec::len))
            />
            <EditCriteriaDialog
                is_open=Signal::derive(move || editing_id.with(Option::is_some))
                criterion=editing
                on_close=Callback::new(move |_| set_editing_id.set(None))
                on_save=on_save_edit
            />
        </div>
    }
}

#[component]
fn CriterionCard(
    id: String,
    criteria: Signal<Vec<ReviewCriterion>>,
    on_criteria_change: Callback<Vec<ReviewCriterion>>,
    on_edit: Callback<String>,
) -> impl IntoView {
    let id = store_value(id);

    // Position and current values of this card's criterion.
    let current = create_memo(move |_| {
        let id = id.get_value();
        criteria.with(|list| {
            list.iter()
                .position(|c| c.id == id)
                .map(|index| (index, list[index].clone()))
        })
    });
    let field = move |read: fn(&ReviewCriterion) -> String| {
        current.with(|entry| entry.as_ref().map(|(_, c)| read(c)).unwrap_or_default())
    };
    let is_custom = move || current.with(|entry| entry.as_ref().map(|(_, c)| c.is_custom).unwrap_or(false));

    let on_rating_change = Callback::new(move |rating: u8| {
        apply_edit(criteria, on_criteria_change, "rating", |list| {
            set_rating(list, &id.get_value(), rating)
        });
    });
    let on_comment = move |comment: String| {
        apply_edit(criteria, on_criteria_change, "comment", |list| {
            set_comment(list, &id.get_value(), comment)
        });
    };
    let on_remove = move |_: ev::MouseEvent| {
        apply_edit(criteria, on_criteria_change, "remove", |list| {
            remove_custom(list, &id.get_value()).map(|_| ())
        });
    };

    let comment_id = format!("comment-{}", id.get_value());

    view! {
        <section class="card criterion-card">
            <div class="criterion-header">
                <span class="badge badge-outline">
                    {move || current.with(|entry| {
                        format!("{:02}", entry.as_ref().map(|(index, _)| index + 1).unwrap_or(0))
                    })}
                </span>
                <h4>{move || field(|c| c.name.clone())}</h4>
                <Show when=is_custom>
                    <span class="badge badge-accent">{ "Custom" }</span>
                </Show>
                <div class="criterion-actions">
                    <button type="button" class="ghost" on:click=move |_| on_edit.call(id.get_value())>
                        { "Edit" }
                    </button>
                    <Show when=is_custom>
                        <button type="button" class="ghost danger" on:click=on_remove>
                            { "Remove" }
                        </button>
                    </Show>
                </div>
            </div>
            <p class="muted">{move || field(|c| c.description.clone())}</p>

            <label class="field-label">{ "Rating *" }</label>
            <StarRating
                rating=Signal::derive(move || {
                    current.with(|entry| entry.as_ref().map(|(_, c)| f64::from(c.rating)).unwrap_or(0.0))
                })
                on_rating_change=on_rating_change
            />

            <label class="field-label" for=comment_id.clone()>{ "Comments & Feedback" }</label>
            <textarea
                id=comment_id
                placeholder="Provide specific feedback and observations..."
                prop:value=move || field(|c| c.comment.clone())
                on:input=move |e| on_comment(event_target_value(&e))
            />
        </section>
    }
}
