use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};

use crate::components::dialog::Dialog;
use crate::models::criterion::{CriterionDraft, ReviewCriterion, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};

#[component]
pub fn AddCustomCriteria(
    on_add_criteria: Callback<ReviewCriterion>,
    #[prop(into)] criteria_count: Signal<usize>,
) -> impl IntoView {
    let (is_open, set_is_open) = create_signal(false);
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());

    let draft = move || CriterionDraft::new(&name.get(), &description.get());

    let reset_and_close = move || {
        set_name.set(String::new());
        set_description.set(String::new());
        set_is_open.set(false);
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match ReviewCriterion::custom(&draft()) {
            Ok(criterion) => {
                log!("[CRITERIA] Adding custom criterion {}", criterion.id);
                on_add_criteria.call(criterion);
                reset_and_close();
            }
            // Leave the dialog open so the interviewer can fix the input.
            Err(err) => error!("[CRITERIA] Rejected custom criterion: {}", err),
        }
    };

    view! {
        <button
            type="button"
            class="add-criteria-trigger"
            on:click=move |_| set_is_open.set(true)
        >
            { "+ Add Custom Review Criteria" }
        </button>
        <Dialog
            open=is_open
            title="Add Custom Criteria"
            on_close=Callback::new(move |_| reset_and_close())
        >
            <form class="criteria-form" on:submit=handle_submit>
                <p class="hint">
                    {move || format!("This will be criterion {:02}", criteria_count.get() + 1)}
                </p>
                <label for="criteria-name">{ "Criteria Name *" }</label>
                <input
                    id="criteria-name"
                    type="text"
                    placeholder="e.g., Leadership Skills"
                    maxlength=NAME_MAX_LEN
                    required=true
                    prop:value=move || name.get()
                    on:input=move |e| set_name.set(event_target_value(&e))
                />
                <label for="criteria-description">{ "Description *" }</label>
                <textarea
                    id="criteria-description"
                    placeholder="Describe what this criteria evaluates..."
                    maxlength=DESCRIPTION_MAX_LEN
                    required=true
                    prop:value=move || description.get()
                    on:input=move |e| set_description.set(event_target_value(&e))
                />
                <div class="dialog-actions">
                    <button type="button" class="outline" on:click=move |_| reset_and_close()>
                        { "Cancel" }
                    </button>
                    <button
                        type="submit"
                        class="primary"
                        disabled=move || !draft().is_submittable()
                    >
                        { "Add Criteria" }
                    </button>
                </div>
            </form>
        </Dialog>
    }
}
