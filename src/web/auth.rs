//! Auth context for the browser. The provider owns the only `SessionStore`,
//! mirrors its state into signals for views, and verifies the cookie session
//! once on mount. Views change the session only through `login` and `logout`.

use crate::{
    api::ApiClient,
    config::AppConfig,
    session::{Credentials, LoginResult, Session, SessionStore, SessionUser},
};
use leptos::{prelude::*, task::spawn_local};
use tracing::error;

/// Auth session context shared through Leptos.
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: StoredValue<SessionStore, LocalStorage>,
    pub session: ReadSignal<Session>,
    pub user: Signal<Option<SessionUser>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Wraps the store and keeps a signal in step with its subscription.
    fn new(store: SessionStore) -> Self {
        let (session, set_session) = signal(store.session());
        let mut receiver = store.subscribe();

        spawn_local(async move {
            while receiver.changed().await.is_ok() {
                let next = receiver.borrow_and_update().clone();
                if set_session.try_set(next).is_some() {
                    // signal disposed, provider is gone
                    break;
                }
            }
        });

        Self {
            store: StoredValue::new_local(store),
            session,
            user: Signal::derive(move || session.get().user().cloned()),
            is_authenticated: Signal::derive(move || session.get().is_authenticated()),
        }
    }

    /// Submits credentials; the session signal updates on success.
    pub async fn login(&self, credentials: Credentials) -> LoginResult {
        let store = self.store.get_value();
        store.login(&credentials).await
    }

    /// Ends the session; the session signal is always cleared.
    pub async fn logout(&self) {
        let store = self.store.get_value();
        store.logout().await;
    }
}

/// Provides auth context and verifies the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = match ApiClient::new(&AppConfig::load()) {
        Ok(api) => api,
        Err(err) => {
            error!(error = %err, "failed to initialize API client");
            return view! { <p role="alert">{err.to_string()}</p> }.into_any();
        }
    };

    let store = SessionStore::new(api);
    let auth = AuthContext::new(store.clone());
    provide_context(auth);

    spawn_local(async move {
        store.verify().await;
    });

    view! { {children()} }.into_any()
}

/// Returns the auth context provided by `AuthProvider`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
