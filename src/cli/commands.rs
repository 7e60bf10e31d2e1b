use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};
use std::path::PathBuf;

fn email_arg() -> Arg {
    Arg::new("email")
        .short('e')
        .long("email")
        .help("Account email address")
        .env("LOGINBRIDGE_EMAIL")
        .default_value("")
}

fn password_arg() -> Arg {
    Arg::new("password")
        .short('p')
        .long("password")
        .help("Account password")
        .env("LOGINBRIDGE_PASSWORD")
        .hide_env_values(true)
        .default_value("")
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("loginbridge")
        .about("Sign in with an identity provider and hand the token to a backend session")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Directory containing an overriding Settings.toml")
                .env("LOGINBRIDGE_SECRETS_DIR")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("backend-url")
                .short('b')
                .long("backend-url")
                .help("Backend base URL, example: https://app.example.com")
                .env("LOGINBRIDGE_BACKEND_URL")
                .global(true),
        )
        .subcommand(
            Command::new("login")
                .visible_alias("loginUser")
                .about("Sign in to an existing account and establish a session")
                .arg(email_arg())
                .arg(password_arg()),
        )
        .subcommand(
            Command::new("register")
                .visible_alias("registerUser")
                .about("Create an account and establish a session")
                .arg(email_arg())
                .arg(password_arg())
                .arg(
                    Arg::new("confirm-password")
                        .long("confirm-password")
                        .help("Password confirmation, must match --password")
                        .env("LOGINBRIDGE_CONFIRM_PASSWORD")
                        .hide_env_values(true)
                        .default_value(""),
                ),
        )
}
