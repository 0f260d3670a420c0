use contracts::domain::common::AggregateRoot;
use contracts::shared::validation::Validate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

use super::{FormDefinition, FormError, FormState, SubmitGuard};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::ApiClient;
use crate::system::auth::context::use_auth;

/// Signals and callbacks that connect a [`super::FormWizard`] to the create
/// endpoint of aggregate `R`.
#[derive(Clone, Copy)]
pub struct CreateForm {
    pub form: RwSignal<FormState>,
    pub submitting: Signal<bool>,
    pub error: RwSignal<Option<String>>,
    pub on_submit: Callback<FormState>,
    pub on_save_draft: Callback<FormState>,
}

/// Sets up a create wizard.
///
/// The form starts from the saved draft when there is one. `build` turns the
/// field values into the request body; a build error is shown inline and
/// nothing is sent. After a successful create the draft is dropped, lists are
/// told to reload and `on_created` gets the new id.
pub fn use_create_form<R, B>(
    definition: &'static FormDefinition,
    build: fn(&FormState) -> Result<B, FormError>,
    on_created: Callback<String>,
) -> CreateForm
where
    R: AggregateRoot + 'static,
    B: Serialize + Validate + 'static,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let form_key = definition.form_key;

    let initial = match ctx.get_form_state(form_key) {
        Some(draft) => {
            log::debug!("{}: restoring draft", form_key);
            FormState::restore(definition, &draft)
        }
        None => FormState::new(definition),
    };
    let form = RwSignal::new(initial);
    let guard = RwSignal::new(SubmitGuard::default());
    let error = RwSignal::new(None::<String>);

    let on_save_draft = Callback::new(move |state: FormState| {
        ctx.set_form_state(form_key, state.to_json());
        log::debug!("{}: draft saved", form_key);
    });

    let on_submit = Callback::new(move |state: FormState| {
        let body = match build(&state) {
            Ok(body) => body,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        let mut started = false;
        guard.update(|g| started = g.try_begin());
        if !started {
            log::warn!("{}: submit ignored, previous one still running", form_key);
            return;
        }
        error.set(None);

        let client = auth_state.with_untracked(ApiClient::from_session);
        spawn_local(async move {
            let result = client.create::<R, B>(&body).await;
            guard.try_update(|g| g.finish());
            match result {
                Ok(id) => {
                    ctx.clear_form_state(form_key);
                    ctx.bump_data_version();
                    on_created.run(id);
                }
                Err(e) => {
                    log::error!("{}: create failed: {}", form_key, e);
                    error.try_set(Some(format!("{}: {}", e.kind.title(), e.message)));
                }
            }
        });
    });

    CreateForm {
        form,
        submitting: Signal::derive(move || guard.with(|g| g.in_flight())),
        error,
        on_submit,
        on_save_draft,
    }
}
