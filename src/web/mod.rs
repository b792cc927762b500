//! Browser front end. The provider owns the session store and verifies once on
//! mount; the page shows the sign-in card until the store reports a user.

mod app;
pub mod auth;
pub mod components;
mod sign_in;
mod signed_in;

pub use app::App;
pub use sign_in::SignInCard;
pub use signed_in::SignedInPanel;

use leptos::prelude::mount_to_body;

/// Mounts the application onto `<body>`.
pub fn mount() {
    mount_to_body(App);
}

/// Shows a blocking browser alert. Used for login failures.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
