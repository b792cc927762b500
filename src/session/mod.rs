//! Session store: the single owner of "who is logged in". Front ends hold a
//! cloned handle, read snapshots or subscribe to changes, and mutate only
//! through `verify`, `login` and `logout`. The session cookie itself is
//! `HttpOnly` and never visible here; only the non-sensitive identity is kept
//! in memory.
//!
//! State machine:
//!
//! ```text
//! verify ok        -> Authenticated(user)
//! verify not ok    -> Unauthenticated
//! login ok         -> Authenticated(user)
//! login not ok     -> unchanged
//! logout           -> Unauthenticated (always)
//! ```

mod types;

pub use types::{
    AUTHENTICATION_FAILED, Credentials, LOGIN_FAILED, LoginResult, MeResponse, MeUser,
    NETWORK_ERROR, Session, SessionUser, VERIFY_FAILED,
};

use crate::{api::ApiClient, errors::AppError};
use reqwest::StatusCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use types::ErrorBody;

pub const ME_PATH: &str = "/me";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Why a `/me` probe did not produce a body.
#[derive(Debug, Error)]
enum ProbeError {
    #[error(transparent)]
    Transport(#[from] AppError),

    #[error("session check rejected with status {0}")]
    Rejected(StatusCode),

    #[error("session check returned an unreadable body: {0}")]
    Malformed(#[source] AppError),
}

/// Shared handle to the current session. Clones observe and mutate the same
/// state.
#[derive(Clone, Debug)]
pub struct SessionStore {
    api: ApiClient,
    state: Arc<watch::Sender<Session>>,
}

impl SessionStore {
    /// Creates a store with an empty session.
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(Session::Unauthenticated);
        Self {
            api,
            state: Arc::new(state),
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Receiver that is notified on every session change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Probes `/me` and replaces the session with what the server reports.
    /// Best effort: any failure leaves the session unauthenticated.
    #[instrument(skip(self))]
    pub async fn verify(&self) {
        let session = match self.probe().await {
            Ok(me) => Session::from_me(me),
            Err(err) => {
                debug!(error = %err, "session check failed, treating as signed out");
                Session::Unauthenticated
            }
        };

        debug!(authenticated = session.is_authenticated(), "session verified");
        self.replace(session);
    }

    /// Posts credentials, then re-reads `/me` so the identity comes from the
    /// server's canonical view rather than the login response. The session is
    /// only touched on success.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> LoginResult {
        let response = match self.api.post_json(LOGIN_PATH, credentials).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "login request failed");
                return LoginResult::failure(NETWORK_ERROR);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            info!(status = status.as_u16(), "login rejected");
            let message = body
                .error
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| LOGIN_FAILED.to_string());
            return LoginResult::failure(message);
        }

        match self.probe().await {
            Ok(me) => {
                let session = Session::from_me(me);
                if session.is_authenticated() {
                    self.replace(session);
                    LoginResult::Success
                } else {
                    warn!("login accepted but session is not authenticated");
                    LoginResult::failure(AUTHENTICATION_FAILED)
                }
            }
            Err(ProbeError::Transport(err)) => {
                warn!(error = %err, "session check after login failed");
                LoginResult::failure(NETWORK_ERROR)
            }
            Err(err) => {
                warn!(error = %err, "session check after login failed");
                LoginResult::failure(VERIFY_FAILED)
            }
        }
    }

    /// Asks the server to drop the session and clears local state no matter
    /// what it answers.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        match self.api.post_empty(LOGOUT_PATH).await {
            Ok(response) if !response.status().is_success() => {
                warn!(status = response.status().as_u16(), "logout rejected by server");
            }
            Ok(_) => {}
            Err(err) => warn!(error = %err, "logout request failed"),
        }

        self.replace(Session::Unauthenticated);
    }

    async fn probe(&self) -> Result<MeResponse, ProbeError> {
        let response = self.api.get(ME_PATH).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Rejected(status));
        }

        response
            .json::<MeResponse>()
            .await
            .map_err(|err| ProbeError::Malformed(AppError::Parse(err.to_string())))
    }

    fn replace(&self, session: Session) {
        self.state.send_replace(session);
    }
}
