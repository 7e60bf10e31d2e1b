#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use loginbridge::{
    authentication::AuthenticationServiceFactory,
    cli::{commands, dispatch, ConsoleNotifier},
    settings::LoginBridgeSettings,
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = commands::new().get_matches();
    let cli = dispatch::handler(&matches)?;

    // Load configuration from Settings.toml, .env and environment variables
    let mut settings = LoginBridgeSettings::load_from(cli.config_dir.as_deref())?;
    if let Some(backend_url) = cli.backend_url {
        settings.backend.base_url = backend_url;
    }
    settings.init_logging()?;

    let flow = AuthenticationServiceFactory::create_auth_flow(&settings, ConsoleNotifier)?;
    let outcome = flow.dispatch(cli.action, &cli.form).await;

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
