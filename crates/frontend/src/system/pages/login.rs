use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::input::Input;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        if username_val.trim().is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Enter your username and password".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            if let Err(e) = do_login(username_val, password_val, set_auth_state).await {
                log::error!("Login failed: {}", e);
                set_error_message.try_set(Some(format!("{}: {}", e.kind.title(), e.message)));
            }
            set_is_loading.try_set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Practice Console"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.with(Option::is_some)>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Input
                        label="Username"
                        id="username"
                        autocomplete="username"
                        value=username
                        on_input=Callback::new(move |v| username.set(v))
                        required=true
                    />
                    <Input
                        label="Password"
                        id="password"
                        input_type="password"
                        autocomplete="current-password"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                        required=true
                    />

                    <button
                        type="submit"
                        class="button button--primary login-box__submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
