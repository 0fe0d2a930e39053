use crate::domain::a002_symptom_check::model::AssessmentResult;
use crate::domain::a002_symptom_check::workflow::{analyze, SymptomCheckWorkflow};
use crate::shared::backend::use_backend;
use crate::shared::components::ui::{Badge, Button, RiskBadge, Textarea};
use crate::shared::components::PageFrame;
use crate::shared::notice::use_notifier;
use crate::shared::risk_palette::risk_palette;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn SymptomCheckPage() -> impl IntoView {
    let workflow = RwSignal::new(SymptomCheckWorkflow::new());
    let symptoms = RwSignal::new(String::new());
    let backend = use_backend();
    let notifier = use_notifier();

    let pending = Signal::derive(move || workflow.with(|w| w.is_pending()));

    let on_analyze = Callback::new(move |_| {
        let text = symptoms.get_untracked();
        let backend = backend.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = analyze(&workflow, &backend, &text).await;
            notifier.report(outcome, "Analysis complete!");
        });
    });

    view! {
        <PageFrame
            page_id="a002_symptom_check--page"
            title="Symptom Checker"
            subtitle="Describe what you are experiencing to get a risk assessment"
        >
            <div class="symptom-form">
                <Textarea
                    id="symptom-text"
                    label="Your symptoms"
                    value=symptoms
                    on_input=Callback::new(move |v| symptoms.set(v))
                    placeholder="e.g. I feel dizzy and confused, with a strange taste in my mouth"
                    rows=5
                    disabled=pending
                />
                <Button on_click=on_analyze busy=pending busy_label="Analyzing...">
                    "Analyze Symptoms"
                </Button>
            </div>

            {move || workflow.with(|w| w.result().cloned()).map(|result| view! {
                <AssessmentCard result=result />
            })}
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn AssessmentCard(result: AssessmentResult) -> impl IntoView {
    let palette = risk_palette(&result.risk_level);
    let score = result.risk_score;

    view! {
        <div class=palette.card_class>
            <div class="risk-card__header">
                <RiskBadge level=result.risk_level.clone() />
                {result.urgency.clone().map(|u| view! {
                    <Badge variant="neutral" class="badge--urgency">{u}</Badge>
                })}
            </div>

            <div class="risk-card__score">
                <div class="risk-meter">
                    <div class="risk-meter__fill" style=format!("width: {score}%")></div>
                </div>
                <span class="risk-card__score-value">{format!("{score}/100")}</span>
            </div>

            <div class="risk-card__condition">
                <span class="risk-card__label">"Possible condition: "</span>
                {result.possible_condition.clone()}
            </div>

            <p class="risk-card__explanation">{result.explanation.clone()}</p>

            {(!result.detected_symptoms.is_empty()).then(|| view! {
                <div class="risk-card__section">
                    <h3>"Detected symptoms"</h3>
                    <ul class="symptom-list">
                        {result.detected_symptoms.iter().map(|s| view! {
                            <li>
                                {s.symptom.clone()}
                                {s.severity.clone().map(|sev| view! {
                                    <span class="symptom-list__severity">{format!(" ({sev})")}</span>
                                })}
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            })}

            <div class="risk-card__section">
                <h3>"Recommendations"</h3>
                <ol class="recommendation-list">
                    {result.recommendations.iter().map(|r| view! { <li>{r.clone()}</li> }).collect_view()}
                </ol>
            </div>
        </div>
    }
}
