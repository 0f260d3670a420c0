use leptos::prelude::*;

/// Labelled select over `(value, label)` pairs.
///
/// A non-empty value that is not among the options (for example a code kept
/// in an old draft) is marked invalid instead of silently showing the first
/// option.
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    options: Vec<(String, String)>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let codes: Vec<String> = options.iter().map(|(v, _)| v.clone()).collect();
    let invalid = move || value.with(|v| !v.is_empty() && !codes.contains(v));

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                class:form__select--invalid=invalid
                disabled=disabled
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.with(|v| *v == current)>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
