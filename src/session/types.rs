//! Session, credential and wire types. Credentials carry a password, so their
//! `Debug` output is redacted and they must never be logged.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

pub const LOGIN_FAILED: &str = "Login failed";
pub const VERIFY_FAILED: &str = "Failed to verify session";
pub const AUTHENTICATION_FAILED: &str = "Authentication failed";
pub const NETWORK_ERROR: &str = "Network error";

/// Identity of the signed-in user. `role` is opaque here; only the server
/// interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub role: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(SessionUser),
}

impl Session {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Session::Unauthenticated => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    /// True only when a user is present and has a non-empty username.
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some_and(|user| !user.username.is_empty())
    }

    /// Derives the session from a `/me` body. Anything short of
    /// `authenticated: true` with a named user is unauthenticated.
    pub fn from_me(me: MeResponse) -> Self {
        if !me.authenticated {
            return Session::Unauthenticated;
        }
        match me.user {
            Some(MeUser {
                username: Some(username),
                role,
            }) if !username.is_empty() => Session::Authenticated(SessionUser {
                username,
                role: role.unwrap_or_default(),
            }),
            _ => Session::Unauthenticated,
        }
    }
}

/// Body of `GET /me`. Missing fields decode as "not authenticated".
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<MeUser>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MeUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Error body returned by `/auth/login` on rejection.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Login credentials: an email or a username plus a password. Shape is not
/// validated; the server is the only judge.
#[derive(Debug, Serialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

impl Credentials {
    pub fn with_email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            username: None,
            password: SecretString::from(password.into()),
        }
    }

    pub fn with_username(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: None,
            username: Some(username.into()),
            password: SecretString::from(password.into()),
        }
    }

    /// Routes a free-form identifier to `email` when it looks like an address,
    /// otherwise to `username`.
    pub fn from_identifier(identifier: &str, password: impl Into<String>) -> Self {
        if looks_like_email(identifier) {
            Self::with_email(identifier, password)
        } else {
            Self::with_username(identifier, password)
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(value.trim()))
}

fn serialize_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

/// Outcome of a login attempt. Login never returns an error; failures carry a
/// message that is safe to show to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginResult {
    Success,
    Failure { message: String },
}

impl LoginResult {
    pub fn failure(message: impl Into<String>) -> Self {
        LoginResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoginResult::Success)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoginResult::Success => None,
            LoginResult::Failure { message } => Some(message),
        }
    }
}
