// No public repository is published for this crate, and duplicate
// transitive versions come from the tracing-subscriber tree.
#![allow(clippy::cargo_common_metadata, clippy::multiple_crate_versions)]

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_query_core::{
    application::{ports::roster::RosterSource, queries::users::UserQueryService},
    config::AppConfig,
    infrastructure::JsonRosterSource,
};

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let source = JsonRosterSource::new(config.roster_path());
    let users = source.load()?;
    tracing::info!(
        path = %config.roster_path().display(),
        users = users.len(),
        "roster loaded"
    );

    let report = UserQueryService::new().roster_report(&users, &config.report_query());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(AppConfig::log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
