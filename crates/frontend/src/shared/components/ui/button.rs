use leptos::prelude::*;

/// Button with variants (primary, secondary, ghost).
///
/// While `busy` is set the button is disabled and shows `busy_label`
/// instead of its children.
#[component]
pub fn Button(
    /// "primary" (default), "secondary" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Defaults to "button"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Text shown while busy
    #[prop(optional, into)]
    busy_label: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let is_busy = move || busy.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || {
                format!(
                    "button {} {} {}",
                    variant_class(),
                    if is_busy() { "button--busy" } else { "" },
                    class.get().unwrap_or_default(),
                )
            }
            disabled=move || disabled.get().unwrap_or(false) || is_busy()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || {
                if is_busy() {
                    busy_label.get().unwrap_or_else(|| "Working...".to_string()).into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
