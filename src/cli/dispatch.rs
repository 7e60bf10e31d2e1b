use crate::handlers::Action;
use crate::models::{FieldMap, CONFIRM_PASSWORD_FIELD, EMAIL_FIELD, PASSWORD_FIELD};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

/// What the command line asked for
#[derive(Debug)]
pub struct CliAction {
    pub action: Action,
    pub form: FieldMap,
    pub config_dir: Option<PathBuf>,
    pub backend_url: Option<String>,
}

/// Turn parsed arguments into an action and the form it reads from
///
/// # Errors
///
/// Returns an error if no known subcommand was given
pub fn handler(matches: &clap::ArgMatches) -> Result<CliAction> {
    let (name, sub_m) = matches
        .subcommand()
        .context("missing subcommand: login or register")?;
    let action = Action::from_name(name).ok_or_else(|| anyhow!("unknown action: {name}"))?;

    let value = |id: &str| -> String {
        sub_m
            .try_get_one::<String>(id)
            .ok()
            .flatten()
            .cloned()
            .unwrap_or_default()
    };

    let mut form = FieldMap::new()
        .with(EMAIL_FIELD, value("email"))
        .with(PASSWORD_FIELD, value("password"));
    if action == Action::Register {
        form.insert(CONFIRM_PASSWORD_FIELD, value("confirm-password"));
    }

    Ok(CliAction {
        action,
        form,
        config_dir: matches.get_one::<PathBuf>("config").cloned(),
        backend_url: matches.get_one::<String>("backend-url").cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use crate::models::Form;
    use serial_test::serial;

    fn clean_env_vars() {
        for var in [
            "LOGINBRIDGE_EMAIL",
            "LOGINBRIDGE_PASSWORD",
            "LOGINBRIDGE_CONFIRM_PASSWORD",
            "LOGINBRIDGE_SECRETS_DIR",
            "LOGINBRIDGE_BACKEND_URL",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_login_arguments() {
        clean_env_vars();
        let matches = commands::new()
            .try_get_matches_from([
                "loginbridge",
                "login",
                "--email",
                "a@example.com",
                "--password",
                "secret123",
            ])
            .unwrap();

        let cli = handler(&matches).unwrap();
        assert_eq!(cli.action, Action::Login);
        assert_eq!(cli.form.value(EMAIL_FIELD), "a@example.com");
        assert_eq!(cli.form.value(PASSWORD_FIELD), "secret123");
        assert_eq!(cli.form.field(CONFIRM_PASSWORD_FIELD), None);
        assert!(cli.config_dir.is_none());
    }

    #[test]
    #[serial]
    fn test_register_arguments_with_globals() {
        clean_env_vars();
        let matches = commands::new()
            .try_get_matches_from([
                "loginbridge",
                "--backend-url",
                "https://app.example.com",
                "register",
                "-e",
                "a@example.com",
                "-p",
                "abc",
                "--confirm-password",
                "xyz",
                "--config",
                "/etc/loginbridge",
            ])
            .unwrap();

        let cli = handler(&matches).unwrap();
        assert_eq!(cli.action, Action::Register);
        assert_eq!(cli.form.value(CONFIRM_PASSWORD_FIELD), "xyz");
        assert_eq!(cli.backend_url.as_deref(), Some("https://app.example.com"));
        assert_eq!(cli.config_dir, Some(PathBuf::from("/etc/loginbridge")));
    }

    #[test]
    #[serial]
    fn test_password_from_environment() {
        clean_env_vars();
        std::env::set_var("LOGINBRIDGE_PASSWORD", "from-env");
        let matches = commands::new()
            .try_get_matches_from(["loginbridge", "login", "--email", "a@example.com"])
            .unwrap();

        let cli = handler(&matches).unwrap();
        assert_eq!(cli.form.value(PASSWORD_FIELD), "from-env");
        clean_env_vars();
    }

    #[test]
    #[serial]
    fn test_missing_password_is_forwarded_empty() {
        clean_env_vars();
        let matches = commands::new()
            .try_get_matches_from(["loginbridge", "loginUser"])
            .unwrap();

        let cli = handler(&matches).unwrap();
        assert_eq!(cli.action, Action::Login);
        assert_eq!(cli.form.value(EMAIL_FIELD), "");
        assert_eq!(cli.form.value(PASSWORD_FIELD), "");
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(commands::new()
            .try_get_matches_from(["loginbridge"])
            .is_err());
    }
}
