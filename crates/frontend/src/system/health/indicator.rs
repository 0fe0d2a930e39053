use super::probe::HealthProbe;
use leptos::prelude::*;

/// Header pill showing the startup probe result
#[component]
#[allow(non_snake_case)]
pub fn HealthIndicator() -> impl IntoView {
    let probe = use_context::<RwSignal<HealthProbe>>().expect("HealthProbe not provided in component tree");
    let badge = Memo::new(move |_| probe.with(|p| p.badge()));

    view! {
        <span class=move || badge.get().css_class() title=move || badge.get().label()>
            <span class="health__dot"></span>
            <span class="health__label">{move || badge.get().label()}</span>
        </span>
    }
}
