//! # Electroverse sign-in client
//!
//! Cookie-session authentication for the Electroverse recordings service.
//!
//! ## Session lifecycle
//!
//! 1. **Verify:** on start the client asks `GET /me` whether the current cookie
//!    is a valid session. Anything but a confirmed, named user leaves the session
//!    empty.
//! 2. **Login:** credentials are posted to `/auth/login`; the server sets an
//!    `HttpOnly` cookie. The identity is then read back from `/me` rather than
//!    trusted from the login response.
//! 3. **Logout:** `/auth/logout` is asked to drop the cookie and the local
//!    session is cleared regardless of the answer.
//!
//! The same [`session::SessionStore`] backs the browser front end (`web`,
//! built for `wasm32`) and the terminal front end (`cli`).

pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod config;
pub mod errors;
pub mod session;
pub mod ui;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
