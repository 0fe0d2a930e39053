use crate::domain::a001_eeg_upload::model::{
    is_accepted, FileSelection, UploadOutcome, ACCEPT_ATTRIBUTE,
};
use crate::domain::a001_eeg_upload::workflow::{upload, EegUploadWorkflow};
use crate::shared::backend::use_backend;
use crate::shared::components::ui::{Button, RiskBadge};
use crate::shared::components::PageFrame;
use crate::shared::icons::icon;
use crate::shared::notice::use_notifier;
use crate::shared::risk_palette::risk_palette;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Read name, type and contents of a browser file
async fn read_selection(file: web_sys::File) -> Result<FileSelection, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {e:?}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FileSelection::new(file.name(), file.type_(), bytes))
}

#[component]
#[allow(non_snake_case)]
pub fn EegUploadPage() -> impl IntoView {
    let workflow = RwSignal::new(EegUploadWorkflow::new());
    let drag_active = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let backend = use_backend();
    let notifier = use_notifier();

    let pending = Signal::derive(move || workflow.with(|w| w.is_pending()));
    let has_file = Signal::derive(move || workflow.with(|w| w.selection().is_some()));

    let take_file = move |file: web_sys::File| {
        if !is_accepted(&file.name()) {
            log::debug!("refusing unsupported file {}", file.name());
            return;
        }
        let Some(token) = workflow.try_update(|w| w.begin_pick()) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match read_selection(file).await {
                Ok(selection) => {
                    if let Some(Err(invalid)) = workflow.try_update(|w| w.finish_pick(token, selection)) {
                        notifier.report(Err(invalid), "");
                    }
                }
                Err(e) => log::error!("{e}"),
            }
        });
    };

    let on_input_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            take_file(file);
        }
        // Allows picking the same file again after a clear
        input.set_value("");
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            take_file(file);
        }
    };

    let on_upload = Callback::new(move |_| {
        let backend = backend.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = upload(&workflow, &backend).await;
            notifier.report(outcome, "File processed successfully!");
        });
    });

    view! {
        <PageFrame
            page_id="a001_eeg_upload--page"
            title="Upload EEG File"
            subtitle="Upload your EEG data for seizure detection"
        >
            <div
                class=move || if drag_active.get() { "dropzone dropzone--active" } else { "dropzone" }
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_active.set(true);
                }
                on:dragleave=move |_| drag_active.set(false)
                on:drop=on_drop
            >
                <input
                    node_ref=input_ref
                    type="file"
                    accept=ACCEPT_ATTRIBUTE
                    class="dropzone__input"
                    on:change=on_input_change
                />
                {icon("upload")}
                {move || match workflow.with(|w| w.selection().map(|f| (f.name.clone(), f.size_label()))) {
                    Some((name, size)) => view! {
                        <div class="dropzone__file">
                            {icon("file")}
                            <div>
                                <div class="dropzone__file-name">{name}</div>
                                <div class="dropzone__file-size">{size}</div>
                            </div>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="dropzone__hint">
                            <p>{move || if drag_active.get() { "Drop file here" } else { "Drag & drop file here" }}</p>
                            <p>"or click to browse"</p>
                            <p class="dropzone__formats">"Supported: CSV, PDF, PNG, JPG, EDF"</p>
                        </div>
                    }.into_any(),
                }}
            </div>

            <Show when=move || has_file.get()>
                <div class="upload-actions">
                    <Button on_click=on_upload busy=pending busy_label="Processing...">
                        "Analyze File"
                    </Button>
                    <Button
                        variant="secondary"
                        disabled=pending
                        on_click=Callback::new(move |_| workflow.update(|w| w.clear()))
                    >
                        "Clear"
                    </Button>
                </div>
            </Show>

            {move || workflow.with(|w| w.outcome().cloned()).map(|outcome| view! {
                <PredictionCard outcome=outcome />
            })}
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn PredictionCard(outcome: UploadOutcome) -> impl IntoView {
    let prediction = outcome.prediction;
    let palette = risk_palette(&prediction.risk_level);

    view! {
        <div class=palette.card_class>
            <div class="risk-card__header">
                <h2 class="risk-card__title">{prediction.predicted_class.clone()}</h2>
                <RiskBadge level=prediction.risk_level.clone() />
            </div>
            <div class="risk-card__confidence">
                {format!("Confidence: {:.1}%", prediction.confidence_percent)}
            </div>
            {outcome.summary.file_type.clone().map(|t| view! {
                <div class="risk-card__file-type">{format!("File type: {}", t.to_uppercase())}</div>
            })}
            {outcome.summary.message.clone().map(|m| view! {
                <div class="risk-card__summary">{m}</div>
            })}
            <p class="risk-card__explanation">{prediction.explanation.clone()}</p>

            <div class="risk-card__section">
                <h3>"Class probabilities"</h3>
                {prediction.class_probabilities.iter().map(|(class, percent)| {
                    let width = percent.clamp(0.0, 100.0);
                    view! {
                        <div class="probability-row">
                            <span class="probability-row__label">{class.clone()}</span>
                            <div class="risk-meter">
                                <div class="risk-meter__fill" style=format!("width: {width:.2}%")></div>
                            </div>
                            <span class="probability-row__value">{format!("{percent:.2}%")}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
