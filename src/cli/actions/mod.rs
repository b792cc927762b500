pub mod session;

use crate::config::AppConfig;
use anyhow::Result;
use secrecy::SecretString;

/// Connection settings shared by every subcommand.
#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub session_cookie: Option<SecretString>,
}

#[derive(Debug)]
pub enum Action {
    Whoami(Args),
    Login {
        args: Args,
        identifier: String,
        password: SecretString,
        logout_after: bool,
    },
    Logout(Args),
}

impl Action {
    /// Execute the action.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built or a login is refused
    pub async fn execute(self) -> Result<()> {
        match self {
            Action::Whoami(args) => session::whoami(&args).await,
            Action::Login {
                args,
                identifier,
                password,
                logout_after,
            } => session::login(&args, &identifier, password, logout_after).await,
            Action::Logout(args) => session::logout(&args).await,
        }
    }
}
