use leptos::prelude::*;
use thaw::*;

use super::{FormDefinition, FormState, WizardState};
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;

/// One page of a wizard
#[derive(Clone)]
pub struct WizardStep {
    pub title: &'static str,
    pub view: ViewFn,
}

impl WizardStep {
    pub fn new(title: &'static str, view: impl Into<ViewFn>) -> Self {
        Self {
            title,
            view: view.into(),
        }
    }
}

/// Step header, current step body and the navigation footer.
///
/// Submit is only offered on the last step and only once every required
/// field is filled in. A failed submission leaves the step and the values
/// untouched; the caller reports it through `error`.
#[component]
pub fn FormWizard(
    form: RwSignal<FormState>,
    steps: Vec<WizardStep>,
    on_submit: Callback<FormState>,
    #[prop(optional)] on_save_draft: Option<Callback<FormState>>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] submit_label: MaybeProp<String>,
) -> impl IntoView {
    let wizard = RwSignal::new(WizardState::new(steps.len()));
    let titles: Vec<&'static str> = steps.iter().map(|s| s.title).collect();
    let steps = StoredValue::new(steps);

    let missing = Signal::derive(move || form.with(|f| f.missing_required()));
    let can_submit = Signal::derive(move || missing.with(|m| m.is_empty()) && !submitting.get());
    let submit_text = move || submit_label.get().unwrap_or_else(|| "Create".to_string());

    let submit = move |_| {
        if !wizard.with_untracked(|w| w.is_last()) {
            return;
        }
        on_submit.run(form.get_untracked());
    };

    let save_draft = move |_| {
        if let Some(cb) = on_save_draft {
            cb.run(form.get_untracked());
        }
    };

    view! {
        <div class="wizard">
            <ol class="wizard__steps">
                {titles
                    .into_iter()
                    .enumerate()
                    .map(|(index, title)| {
                        let class = move || {
                            let current = wizard.with(|w| w.current());
                            if index == current {
                                "wizard__step wizard__step--active"
                            } else if index < current {
                                "wizard__step wizard__step--done"
                            } else {
                                "wizard__step"
                            }
                        };
                        view! {
                            <li class=class on:click=move |_| wizard.update(|w| w.jump_to(index))>
                                <span class="wizard__step-number">{index + 1}</span>
                                <span class="wizard__step-title">{title}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <div class="wizard__body">
                {move || {
                    let index = wizard.with(|w| w.current());
                    steps.with_value(|s| s.get(index).map(|step| step.view.run()))
                }}
            </div>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="alert alert--error">
                                {icon("alert-triangle")}
                                <span>{err}</span>
                            </div>
                        }
                    })
            }}

            <Show when=move || wizard.with(|w| w.is_last()) && !missing.with(|m| m.is_empty())>
                <div class="wizard__hint">
                    {move || format!("Required: {}", missing.get().join(", "))}
                </div>
            </Show>

            <div class="wizard__footer">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Space>
                        {on_cancel
                            .map(|cb| {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| cb.run(())
                                    >
                                        "Cancel"
                                    </Button>
                                }
                            })}
                        {on_save_draft
                            .map(|_| {
                                view! {
                                    <Button appearance=ButtonAppearance::Secondary on_click=save_draft>
                                        {icon("save")}
                                        " Save draft"
                                    </Button>
                                }
                            })}
                    </Space>
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| wizard.update(|w| w.previous())
                            disabled=Signal::derive(move || wizard.with(|w| w.is_first()))
                        >
                            "Back"
                        </Button>
                        <Show
                            when=move || wizard.with(|w| w.is_last())
                            fallback=move || {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| wizard.update(|w| w.next())
                                    >
                                        "Next"
                                    </Button>
                                }
                            }
                        >
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=submit
                                disabled=Signal::derive(move || !can_submit.get())
                            >
                                {move || if submitting.get() { "Saving...".to_string() } else { submit_text() }}
                            </Button>
                        </Show>
                    </Space>
                </Flex>
            </div>
        </div>
    }
}

fn field_label(definition: &FormDefinition, key: &'static str) -> String {
    match definition.field(key) {
        Some(f) if f.required => format!("{} *", f.label),
        Some(f) => f.label.to_string(),
        None => key.to_string(),
    }
}

fn bind(form: RwSignal<FormState>, key: &'static str) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || form.with(|f| f.get(key).to_string()));
    let on_change = Callback::new(move |v: String| {
        form.update(|f| {
            if let Err(e) = f.set(key, v) {
                log::warn!("{}", e);
            }
        });
    });
    (value, on_change)
}

/// Text input bound to one form field
#[component]
pub fn FormField(
    form: RwSignal<FormState>,
    key: &'static str,
    #[prop(optional, into)] input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let definition = form.with_untracked(|f| f.definition());
    let label = field_label(definition, key);
    let required = definition.field(key).map(|f| f.required).unwrap_or(false);
    let (value, on_change) = bind(form, key);
    let id = format!("{}__{}", definition.form_key, key);

    if multiline {
        view! {
            <Textarea
                id=id
                label=label
                value=value
                on_input=on_change
                placeholder=placeholder
                required=required
            />
        }
        .into_any()
    } else {
        view! {
            <Input
                id=id
                label=label
                value=value
                on_input=on_change
                placeholder=placeholder
                input_type=input_type
                required=required
            />
        }
        .into_any()
    }
}

/// Select bound to one form field
#[component]
pub fn FormSelect(
    form: RwSignal<FormState>,
    key: &'static str,
    options: Vec<(&'static str, &'static str)>,
    /// Adds an empty first option
    #[prop(optional)]
    allow_empty: bool,
) -> impl IntoView {
    let definition = form.with_untracked(|f| f.definition());
    let label = field_label(definition, key);
    let (value, on_change) = bind(form, key);
    let id = format!("{}__{}", definition.form_key, key);

    let mut choices: Vec<(String, String)> = Vec::with_capacity(options.len() + 1);
    if allow_empty {
        choices.push((String::new(), "-".to_string()));
    }
    choices.extend(options.into_iter().map(|(v, l)| (v.to_string(), l.to_string())));

    view! {
        <Select id=id label=label value=value on_change=on_change options=choices />
    }
}

/// Read-only summary of every field, for the last step of a wizard
#[component]
pub fn FormReview(form: RwSignal<FormState>) -> impl IntoView {
    let definition = form.with_untracked(|f| f.definition());

    view! {
        <dl class="wizard__review">
            {definition
                .fields
                .iter()
                .map(|field| {
                    let key = field.key;
                    let value = move || {
                        form.with(|f| {
                            let v = f.get(key).trim();
                            if v.is_empty() { "-".to_string() } else { v.to_string() }
                        })
                    };
                    view! {
                        <dt>{field.label}</dt>
                        <dd>{value}</dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}
