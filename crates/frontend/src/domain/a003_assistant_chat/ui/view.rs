use crate::domain::a003_assistant_chat::model::{ChatRole, QUICK_QUESTIONS};
use crate::domain::a003_assistant_chat::workflow::{send, AssistantChatWorkflow};
use crate::shared::backend::use_backend;
use crate::shared::components::ui::Button;
use crate::shared::components::PageFrame;
use crate::shared::icons::icon;
use crate::shared::lifecycle::Settlement;
use crate::shared::notice::use_notifier;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AssistantChatPage() -> impl IntoView {
    let workflow = RwSignal::new(AssistantChatWorkflow::new());
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let backend = use_backend();
    let notifier = use_notifier();

    let pending = Signal::derive(move || workflow.with(|w| w.is_pending()));
    let log_len = Memo::new(move |_| workflow.with(|w| w.log().len()));

    // Keep the newest message in view
    Effect::new(move |_| {
        log_len.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let submit = move || {
        let backend = backend.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = send(&workflow, &backend).await;
            // Success is visible in the log itself
            if !matches!(outcome, Ok(Settlement::Fulfilled)) {
                notifier.report(outcome, "");
            }
        });
    };
    let on_send = Callback::new({
        let submit = submit.clone();
        move |_| submit()
    });

    view! {
        <PageFrame
            page_id="a003_assistant_chat--page"
            title="AI Health Assistant"
            subtitle="Ask questions about seizures, epilepsy and neurological health"
        >
            <div class="chat">
                <div class="chat__messages" node_ref=messages_container_ref>
                    {move || workflow.with(|w| {
                        w.log().messages().iter().map(|msg| {
                            let class = match msg.role {
                                ChatRole::User => "chat-message chat-message--user",
                                ChatRole::Assistant => "chat-message chat-message--assistant",
                            };
                            view! {
                                <div class=class>
                                    <div class="chat-message__bubble">{msg.content.clone()}</div>
                                </div>
                            }
                        }).collect_view()
                    })}
                    <Show when=move || pending.get()>
                        <div class="chat-message chat-message--assistant chat-message--typing">
                            <div class="chat-message__bubble">
                                <span class="typing-dot"></span>
                                <span class="typing-dot"></span>
                                <span class="typing-dot"></span>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="chat__quick">
                    {QUICK_QUESTIONS.into_iter().map(|question| view! {
                        <button
                            class="chip"
                            disabled=move || pending.get()
                            on:click=move |_| workflow.update(|w| w.prefill(question))
                        >
                            {question}
                        </button>
                    }).collect_view()}
                </div>

                <div class="chat__input">
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Type your question..."
                        disabled=move || pending.get()
                        prop:value=move || workflow.with(|w| w.draft().to_string())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            workflow.update(|w| w.set_draft(text));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                    <Button on_click=on_send disabled=pending>
                        {icon("send")}
                        " Send"
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
