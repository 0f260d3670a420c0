use crate::shared::icons::icon;
use crate::shared::status_presentation::Presentation;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
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

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Coloured badge of an enum value, see `status_presentation::present`
#[component]
pub fn StatusBadge(
    presentation: Presentation,
    /// Hide the leading icon (dense tables)
    #[prop(optional)]
    no_icon: bool,
) -> impl IntoView {
    let Presentation {
        label,
        color_class,
        icon: icon_name,
    } = presentation;

    view! {
        <span class=format!("badge badge--status {}", color_class) title=label>
            {(!no_icon).then(|| view! { <span class="badge__icon">{icon(icon_name)}</span> })}
            {label}
        </span>
    }
}
