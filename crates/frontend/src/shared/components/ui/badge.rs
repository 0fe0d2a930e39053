use crate::shared::risk_palette::risk_palette;
use contracts::shared::RiskLevel;
use leptos::prelude::*;

/// Badge: "primary", "success", "warning", "error", "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {} {}", variant_class(), class.get().unwrap_or_default())>
            {children()}
        </span>
    }
}

/// Risk level rendered with its palette; unknown levels show the raw value
#[component]
pub fn RiskBadge(level: RiskLevel) -> impl IntoView {
    let palette = risk_palette(&level);
    let text = if level.is_known() {
        palette.label.to_string()
    } else {
        format!("{} ({})", palette.label, level)
    };

    view! {
        <Badge variant=palette.badge_variant class="badge--risk">
            {text}
        </Badge>
    }
}
