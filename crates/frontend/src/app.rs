use crate::domain::a004_doctor_directory::model::ReferenceCache;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::backend::HttpBackend;
use crate::shared::config::ClientConfig;
use crate::shared::notice::Notifier;
use crate::system::health::probe::probe;
use crate::system::health::HealthProbe;
use leptos::prelude::*;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let backend = HttpBackend::new(&config.api);
    let health = RwSignal::new(HealthProbe::new());

    provide_context(AppGlobalContext::new());
    provide_context(Notifier::new(config.notices.dismiss_after_ms));
    provide_context(backend.clone());
    // Filter options are cached for the whole session
    provide_context(RwSignal::new(ReferenceCache::default()));
    provide_context(health);

    wasm_bindgen_futures::spawn_local(async move {
        let _ = probe(&health, &backend).await;
    });

    view! {
        <AppRoutes />
    }
}
