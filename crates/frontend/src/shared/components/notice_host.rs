use crate::shared::icons::icon;
use crate::shared::notice::use_notifier;
use leptos::prelude::*;

/// Stack of visible notices, newest last
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notice-host" role="status" aria-live="polite">
            <For
                each=move || notifier.board.with(|b| b.items().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.css_class()>
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__close"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
