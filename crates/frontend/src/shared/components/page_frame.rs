use leptos::prelude::*;

/// Root wrapper of every feature page.
///
/// The root element gets `id="{page_id}"` so pages can be located in the DOM.
#[component]
pub fn PageFrame(
    page_id: &'static str,
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=page_id class="page">
            <div class="page-header">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page__content">{children()}</div>
        </section>
    }
}
