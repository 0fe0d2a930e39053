use crate::domain::a004_doctor_directory::model::{ListingView, ProviderRecord, ReferenceCache};
use crate::domain::a004_doctor_directory::workflow::{activate, search, DoctorDirectoryWorkflow};
use crate::shared::backend::use_backend;
use crate::shared::components::ui::{Badge, Button, Checkbox, Select};
use crate::shared::components::PageFrame;
use crate::shared::error::ValidationError;
use crate::shared::icons::icon;
use crate::shared::lifecycle::Settlement;
use crate::shared::notice::{use_notifier, Notifier};
use leptos::prelude::*;

/// Errors only; a successful listing speaks for itself
fn report_search(notifier: Notifier, outcome: Result<Settlement, ValidationError>) {
    if let Ok(Settlement::Rejected(error)) = outcome {
        notifier.error(error.message);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DoctorDirectoryPage() -> impl IntoView {
    let cache = use_context::<RwSignal<ReferenceCache>>()
        .expect("ReferenceCache not provided in component tree");
    let workflow = RwSignal::new(DoctorDirectoryWorkflow::new());
    let backend = use_backend();
    let notifier = use_notifier();

    {
        let backend = backend.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = activate(&cache, &workflow, &backend).await;
            report_search(notifier, outcome);
        });
    }

    let on_search = Callback::new(move |_| {
        let backend = backend.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = search(&workflow, &backend).await;
            report_search(notifier, outcome);
        });
    });

    let locations = Signal::derive(move || cache.with(|c| c.locations().to_vec()));
    let specializations = Signal::derive(move || cache.with(|c| c.specializations().to_vec()));
    let location = Signal::derive(move || workflow.with(|w| w.filter().location.clone()));
    let specialization = Signal::derive(move || workflow.with(|w| w.filter().specialization.clone()));
    let emergency_only = Signal::derive(move || workflow.with(|w| w.filter().emergency_only));
    let pending = Signal::derive(move || workflow.with(|w| w.is_pending()));

    view! {
        <PageFrame
            page_id="a004_doctor_directory--page"
            title="Find a Neurologist"
            subtitle="Connect with qualified specialists near you"
        >
            <div class="filter-panel">
                <Select
                    id="filter-location"
                    label="Location"
                    value=location
                    options=locations
                    any_label="All locations"
                    on_change=Callback::new(move |v: String| workflow.update(|w| w.set_location(v)))
                />
                <Select
                    id="filter-specialization"
                    label="Specialization"
                    value=specialization
                    options=specializations
                    any_label="All specializations"
                    on_change=Callback::new(move |v: String| workflow.update(|w| w.set_specialization(v)))
                />
                <Checkbox
                    id="filter-emergency"
                    label="Accepts emergency"
                    checked=emergency_only
                    on_change=Callback::new(move |v| workflow.update(|w| w.set_emergency_only(v)))
                />
                <Button on_click=on_search busy=pending busy_label="Searching...">
                    "Search"
                </Button>
            </div>

            {move || workflow.with(|w| match w.listing() {
                ListingView::Loading => view! {
                    <div class="listing listing--loading">"Loading doctors..."</div>
                }.into_any(),
                ListingView::Empty => view! {
                    <div class="listing listing--empty">"No doctors found matching your criteria"</div>
                }.into_any(),
                ListingView::Failed(error) => view! {
                    <div class="listing listing--failed">{error.message.clone()}</div>
                }.into_any(),
                ListingView::Results(records) => {
                    let records = records.to_vec();
                    view! {
                        <div class="listing provider-grid">
                            {records.into_iter().map(|record| view! { <ProviderCard record=record /> }).collect_view()}
                        </div>
                    }.into_any()
                }
            })}
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProviderCard(record: ProviderRecord) -> impl IntoView {
    let tel = format!("tel:{}", record.phone);

    view! {
        <div class="provider-card">
            <div class="provider-card__header">
                {icon("doctor")}
                <div>
                    <h3 class="provider-card__name">{record.name}</h3>
                    <div class="provider-card__specialization">{record.specialization}</div>
                </div>
            </div>
            <div class="provider-card__hospital">{record.hospital}</div>
            <div class="provider-card__location">{record.location}</div>
            <div class="provider-card__meta">
                <span>{format!("{} years experience", record.experience_years)}</span>
                <span class="provider-card__rating">{format!("★ {:.1}", record.rating)}</span>
            </div>
            {record.accepts_emergency.then(|| view! {
                <Badge variant="error">"Accepts emergency"</Badge>
            })}
            <a class="provider-card__phone" href=tel>
                {icon("phone")}
                {record.phone}
            </a>
        </div>
    }
}
