//! Fetch-on-mount with an explicit loading state.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for LoadState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => LoadState::Failed(err),
        }
    }
}

/// Reactive result of [`use_fetch`]
pub struct FetchHandle<T: Send + Sync + 'static> {
    pub state: RwSignal<LoadState<T>>,
    reload: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchHandle<T> {}

impl<T: Send + Sync + 'static> FetchHandle<T> {
    /// Start a new request; any response still in flight is discarded.
    pub fn reload(&self) {
        self.reload.run(());
    }
}

/// What to do with a response once it arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrival {
    Current,
    /// a newer request was started; carries its generation
    Stale(u64),
    Disposed,
}

/// `current` is `None` when the owning scope is gone
fn arrival(requested: u64, current: Option<u64>) -> Arrival {
    match current {
        Some(current) if current == requested => Arrival::Current,
        Some(current) => Arrival::Stale(current),
        None => Arrival::Disposed,
    }
}

/// Run `fetch` on mount and whenever a signal read inside `fetch` changes.
///
/// Each request takes the next generation number. Only the response of the
/// latest generation is applied, and nothing is applied once the owner is
/// disposed.
pub fn use_fetch<T, F, Fut>(fetch: F) -> FetchHandle<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(LoadState::Loading);
    let generation = RwSignal::new(0_u64);
    let fetch = Arc::new(fetch);

    let run = move || {
        let requested = generation.get_untracked() + 1;
        generation.set(requested);
        state.set(LoadState::Loading);
        log::debug!("fetch #{} started", requested);

        let pending = fetch();
        spawn_local(async move {
            let result = pending.await;
            match arrival(requested, generation.try_get_untracked()) {
                Arrival::Current => {}
                Arrival::Stale(current) => {
                    log::warn!("fetch #{} discarded, #{} is newer", requested, current);
                    return;
                }
                Arrival::Disposed => {
                    log::warn!("fetch #{} discarded, owner disposed", requested);
                    return;
                }
            }
            match result {
                Ok(data) => {
                    log::debug!("fetch #{} finished", requested);
                    state.try_set(LoadState::Loaded(data));
                }
                Err(err) => {
                    log::error!("fetch #{} failed: {}", requested, err);
                    state.try_set(LoadState::Failed(err));
                }
            }
        });
    };

    let on_mount = run.clone();
    Effect::new(move |_| on_mount());

    FetchHandle {
        state,
        reload: Callback::new(move |_| run()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiErrorKind;

    #[test]
    fn test_default_is_loading() {
        let state: LoadState<Vec<u8>> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<u32> = Ok(7).into();
        assert_eq!(ok.data(), Some(&7));

        let failed: LoadState<u32> = Err(ApiError::server("HTTP 503")).into();
        assert_eq!(failed.error().map(|e| e.kind), Some(ApiErrorKind::Server));
        assert!(!failed.is_loading());
    }

    #[test]
    fn test_latest_response_applies() {
        assert_eq!(arrival(3, Some(3)), Arrival::Current);
    }

    #[test]
    fn test_response_after_reload_is_stale() {
        assert_eq!(arrival(1, Some(2)), Arrival::Stale(2));
    }

    #[test]
    fn test_response_after_dispose_is_dropped() {
        assert_eq!(arrival(1, None), Arrival::Disposed);
    }
}
