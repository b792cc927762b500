pub mod logging;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_URL: &str = "url";
pub const ARG_TIMEOUT_MS: &str = "timeout-ms";
pub const ARG_SESSION_COOKIE: &str = "session-cookie";
pub const ARG_IDENTIFIER: &str = "identifier";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_LOGOUT: &str = "logout";

pub const CMD_WHOAMI: &str = "whoami";
pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("electroverse")
        .about("Sign in to Electroverse and inspect the current session")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new(ARG_URL)
                .short('u')
                .long("url")
                .help("API base URL, example: https://api.electroverse.dev")
                .env("ELECTROVERSE_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_MS)
                .long("timeout-ms")
                .help("Request timeout in milliseconds")
                .env("ELECTROVERSE_TIMEOUT_MS")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_COOKIE)
                .long("session-cookie")
                .help("Existing session cookie to start from, example: ev_token=<value>")
                .env("ELECTROVERSE_SESSION_COOKIE")
                .hide_env_values(true)
                .global(true),
        )
        .subcommand(Command::new(CMD_WHOAMI).about("Show who the server thinks you are"))
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in and show the resulting session")
                .arg(
                    Arg::new(ARG_IDENTIFIER)
                        .short('i')
                        .long("identifier")
                        .help("Email address or username")
                        .env("ELECTROVERSE_IDENTIFIER")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .short('P')
                        .long("password")
                        .help("Account password")
                        .env("ELECTROVERSE_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_LOGOUT)
                        .long("logout")
                        .help("Sign out again once the session is confirmed")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new(CMD_LOGOUT).about("End the session on the server"));

    logging::with_args(command)
}
