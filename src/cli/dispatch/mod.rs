//! Maps validated CLI matches to an action with its connection settings.

use crate::cli::actions::{Action, Args};
use crate::cli::commands::{
    ARG_IDENTIFIER, ARG_LOGOUT, ARG_PASSWORD, ARG_SESSION_COOKIE, ARG_TIMEOUT_MS, ARG_URL,
    CMD_LOGIN, CMD_LOGOUT, CMD_WHOAMI,
};
use crate::config::{AppConfig, RuntimeConfig};
use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let mut config = AppConfig::from_build_env();
    config.apply(RuntimeConfig::from_raw(
        matches.get_one::<String>(ARG_URL).map(String::as_str),
        matches.get_one::<String>(ARG_TIMEOUT_MS).map(String::as_str),
    ));

    if config.api_base_url.is_empty() {
        return Err(anyhow!("missing required argument: --url"));
    }

    let args = Args {
        config,
        session_cookie: matches
            .get_one::<String>(ARG_SESSION_COOKIE)
            .filter(|cookie| !cookie.trim().is_empty())
            .map(|cookie| SecretString::from(cookie.clone())),
    };

    match matches.subcommand() {
        Some((CMD_WHOAMI, _)) => Ok(Action::Whoami(args)),
        Some((CMD_LOGOUT, _)) => Ok(Action::Logout(args)),
        Some((CMD_LOGIN, sub_m)) => {
            let identifier = sub_m
                .get_one::<String>(ARG_IDENTIFIER)
                .cloned()
                .context("missing required argument: --identifier")?;
            let password = sub_m
                .get_one::<String>(ARG_PASSWORD)
                .cloned()
                .map(SecretString::from)
                .context("missing required argument: --password")?;

            Ok(Action::Login {
                args,
                identifier,
                password,
                logout_after: sub_m.get_flag(ARG_LOGOUT),
            })
        }
        _ => Err(anyhow!("unknown subcommand")),
    }
}
