use crate::{
    api::ApiClient,
    cli::actions::Args,
    session::{Credentials, LoginResult, Session, SessionStore},
};
use anyhow::{Result, anyhow};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Builds a store, seeding the cookie jar when a session cookie was given.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built
pub fn build_store(args: &Args) -> Result<SessionStore> {
    let api = match &args.session_cookie {
        Some(cookie) => ApiClient::with_session_cookie(&args.config, cookie.expose_secret())?,
        None => ApiClient::new(&args.config)?,
    };
    debug!(base_url = api.base_url(), "session store ready");
    Ok(SessionStore::new(api))
}

/// Verify the current session and print it.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built
pub async fn whoami(args: &Args) -> Result<()> {
    let store = build_store(args)?;
    store.verify().await;
    println!("{}", describe(&store.session()));
    Ok(())
}

/// Sign in with the given identifier and print the confirmed session.
///
/// # Errors
///
/// Returns the failure message when the login is refused or cannot be confirmed
pub async fn login(
    args: &Args,
    identifier: &str,
    password: SecretString,
    logout_after: bool,
) -> Result<()> {
    let store = build_store(args)?;
    let credentials = Credentials::from_identifier(identifier, password.expose_secret());

    match store.login(&credentials).await {
        LoginResult::Success => {
            println!("{}", describe(&store.session()));
            if logout_after {
                store.logout().await;
                println!("{}", describe(&store.session()));
            }
            Ok(())
        }
        LoginResult::Failure { message } => Err(anyhow!(message)),
    }
}

/// End the session on the server. Local state is cleared whatever the
/// server answers.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built
pub async fn logout(args: &Args) -> Result<()> {
    let store = build_store(args)?;
    store.logout().await;
    println!("{}", describe(&store.session()));
    Ok(())
}

fn describe(session: &Session) -> String {
    match session.user() {
        Some(user) if session.is_authenticated() => {
            if user.role.is_empty() {
                format!("signed in as {}", user.username)
            } else {
                format!("signed in as {} ({})", user.username, user.role)
            }
        }
        _ => "signed out".to_string(),
    }
}
