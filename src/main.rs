use std::process;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};
use zerosmoke_settings::{Settings, load_settings};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() {
    init_tracing();

    let settings = match load_settings() {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Failed to load settings");
            process::exit(1);
        }
    };

    report(&settings);
}

/// Print the effective configuration with secrets masked.
fn report(settings: &Settings) {
    info!(
        expiry = ?settings.access_token_expiry(),
        "Access token expiry"
    );

    match serde_json::to_string_pretty(&settings.redacted()) {
        Ok(json) => println!("{}", json),
        Err(e) => error!(error = %e, "Failed to render settings"),
    }
}
