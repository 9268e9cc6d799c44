use leptos::*;

/// Bare overlay dialog. Clicking the backdrop asks the owner to close it.
#[component]
pub fn Dialog(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    let title = store_value(title);
    let class = store_value(class);

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.call(())></div>
            <div class=format!("dialog {}", class.get_value()) role="dialog">
                <h2 class="dialog-title">{title.get_value()}</h2>
                {children.with_value(|children| children())}
            </div>
        </Show>
    }
}
