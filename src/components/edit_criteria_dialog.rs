use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::error;

use crate::components::dialog::Dialog;
use crate::models::criterion::{CriterionDraft, ReviewCriterion, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};

#[component]
pub fn EditCriteriaDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] criterion: Signal<Option<ReviewCriterion>>,
    on_close: Callback<()>,
    on_save: Callback<ReviewCriterion>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());

    let seed_from = move |current: Option<ReviewCriterion>| {
        if let Some(current) = current {
            set_name.set(current.name);
            set_description.set(current.description);
        }
    };
    let seed = move || seed_from(criterion.get_untracked());

    // Re-seed the fields whenever a different criterion is picked for editing.
    create_effect(move |_| seed_from(criterion.get()));

    let is_custom = move || criterion.with(|c| c.as_ref().map(|c| c.is_custom).unwrap_or(false));
    let draft = move || CriterionDraft::new(&name.get(), &description.get());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(current) = criterion.get_untracked() else {
            return;
        };
        match current.edited(&draft()) {
            Ok(updated) => {
                on_save.call(updated);
                on_close.call(());
            }
            Err(err) => error!("[CRITERIA] Rejected edit of {}: {}", current.id, err),
        }
    };

    let handle_cancel = move || {
        seed();
        on_close.call(());
    };

    view! {
        <Show when=move || criterion.with(Option::is_some)>
            <Dialog
                open=is_open
                title="Edit Criteria"
                on_close=Callback::new(move |_| handle_cancel())
            >
                <form class="criteria-form" on:submit=handle_submit>
                    <label for="edit-criteria-name">{ "Criteria Name *" }</label>
                    <input
                        id="edit-criteria-name"
                        type="text"
                        placeholder="e.g., Leadership Skills"
                        maxlength=NAME_MAX_LEN
                        required=true
                        disabled=move || !is_custom()
                        prop:value=move || name.get()
                        on:input=move |e| set_name.set(event_target_value(&e))
                    />
                    <Show when=move || !is_custom()>
                        <p class="hint">{ "Default criteria names cannot be edited" }</p>
                    </Show>
                    <label for="edit-criteria-description">{ "Description *" }</label>
                    <textarea
                        id="edit-criteria-description"
                        placeholder="Describe what this criteria evaluates..."
                        maxlength=DESCRIPTION_MAX_LEN
                        required=true
                        prop:value=move || description.get()
                        on:input=move |e| set_description.set(event_target_value(&e))
                    />
                    <div class="dialog-actions">
                        <button type="button" class="outline" on:click=move |_| handle_cancel()>
                            { "Cancel" }
                        </button>
                        <button
                            type="submit"
                            class="primary"
                            disabled=move || !draft().is_submittable()
                        >
                            { "Save Changes" }
                        </button>
                    </div>
                </form>
            </Dialog>
        </Show>
    }
}
