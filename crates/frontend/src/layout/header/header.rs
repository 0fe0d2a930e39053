use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::health::HealthIndicator;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button class="button button--ghost" aria-label="Toggle navigation" on:click=move |_| ctx.toggle_left()>
                    {icon("menu")}
                </button>
                <span class="header__title">"SeizureGuard"</span>
            </div>
            <div class="header__actions">
                <HealthIndicator />
            </div>
        </header>
    }
}
