use crate::domain::a001_eeg_upload::EegUploadPage;
use crate::domain::a002_symptom_check::SymptomCheckPage;
use crate::domain::a003_assistant_chat::AssistantChatPage;
use crate::domain::a004_doctor_directory::DoctorDirectoryPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::left::Navbar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Page for the active key.
///
/// Switching pages disposes the previous one together with its workflow.
#[component]
fn ActivePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.active.get() {
        Page::Upload => view! { <EegUploadPage /> }.into_any(),
        Page::Symptoms => view! { <SymptomCheckPage /> }.into_any(),
        Page::Chat => view! { <AssistantChatPage /> }.into_any(),
        Page::Doctors => view! { <DoctorDirectoryPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the component is created
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}
