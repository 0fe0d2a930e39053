use leptos::prelude::*;

/// Select whose first entry is an "any" choice with an empty value
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, empty for the "any" entry
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Caption of the empty-value entry
    #[prop(into)]
    any_label: String,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>{l}</label>
            })}
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>{any_label}</option>
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let current = option.clone();
                        let is_selected = move || value.get() == current;
                        view! {
                            <option value=option.clone() selected=is_selected>{option.clone()}</option>
                        }
                    }
                />
            </select>
        </div>
    }
}
