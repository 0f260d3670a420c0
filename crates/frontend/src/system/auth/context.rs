use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api::{ApiClient, ApiErrorKind};

/// The signed-in session. Every [`ApiClient`] is derived from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Auth context provider component.
///
/// A token left in localStorage signs the user in straight away; the user
/// record is then loaded from `/system/auth/me`, and a rejected token ends
/// the session.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
        user_info: None,
    });

    Effect::new(move |_| {
        let Some(access_token) = auth_state.with_untracked(|s| s.access_token.clone()) else {
            return;
        };
        spawn_local(async move {
            let client = auth_state.with_untracked(ApiClient::from_session);
            match api::get_current_user(&client).await {
                Ok(user_info) => {
                    set_auth_state.try_set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(e) if e.kind == ApiErrorKind::Auth => {
                    log::warn!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.try_set(AuthState::default());
                }
                Err(e) => log::error!("Failed to restore session: {}", e),
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// The session token alone. Filling in `user_info` does not notify readers,
/// so data pages refetch only when the token itself changes.
pub fn use_access_token() -> Memo<Option<String>> {
    let (auth_state, _) = use_auth();
    access_token_memo(auth_state)
}

fn access_token_memo(auth_state: ReadSignal<AuthState>) -> Memo<Option<String>> {
    Memo::new(move |_| auth_state.with(|s| s.access_token.clone()))
}

/// Sign in, persist the token pair and start the session
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), crate::shared::api::ApiError> {
    let response = api::login(username, password).await?;

    storage::save_tokens(&response.access_token, &response.refresh_token);
    log::debug!("Signed in as '{}'", response.user.username);

    set_auth_state.try_set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// End the session locally; the server-side revoke is best effort
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.try_set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            username: "dana".into(),
            full_name: None,
            email: None,
            is_admin,
        }
    }

    #[test]
    fn test_default_state_is_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_admin_flag_comes_from_user() {
        let state = AuthState {
            access_token: Some("t".into()),
            user_info: Some(user(true)),
        };
        assert!(state.is_authenticated());
        assert!(state.is_admin());

        let pending = AuthState {
            access_token: Some("t".into()),
            user_info: None,
        };
        assert!(pending.is_authenticated());
        assert!(!pending.is_admin());
    }

    #[test]
    fn test_user_info_update_keeps_token_readers_quiet() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let owner = Owner::new();
        owner.set();

        let (auth_state, set_auth_state) = signal(AuthState {
            access_token: Some("t".into()),
            user_info: None,
        });
        let token = access_token_memo(auth_state);
        let runs = Arc::new(AtomicUsize::new(0));
        let reader = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                token.get()
            }
        });

        assert_eq!(reader.get(), Some("t".to_string()));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        set_auth_state.update(|s| s.user_info = Some(user(false)));
        assert_eq!(reader.get(), Some("t".to_string()));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        set_auth_state.set(AuthState::default());
        assert_eq!(reader.get(), None);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
