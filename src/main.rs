//! `rtp-profiles` - checks a profile document offline.
//!
//! Resolves every profile in the configured document against the worlds and
//! distributions it declares, then prints each profile's summary (as JSON
//! with `--json`, one profile only with `--profile <name>`). Exits non-zero
//! if the load aborts or any profile was skipped.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;
use tracing_subscriber::EnvFilter;

use rtp_profiles::adapters::{
    InMemoryDistributionCatalog, InMemoryWorldRegistry, ProfileDocument, StaticEconomy,
};
use rtp_profiles::application::{LoadProfilesCommand, LoadProfilesHandler};
use rtp_profiles::config::{AppConfig, LoggingConfig};
use rtp_profiles::domain::foundation::DomainError;
use rtp_profiles::domain::profile::{Profile, ProfileDefaults, ProfileResolver};
use rtp_profiles::ports::WorldRegistry;

/// Logs go to stderr so summaries on stdout stay machine readable.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[derive(Debug, Default)]
struct Options {
    json: bool,
    profile: Option<String>,
}

impl Options {
    fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => options.json = true,
                "--profile" => options.profile = args.next(),
                _ => {}
            }
        }
        options
    }
}

fn run(config: &AppConfig, options: &Options) -> Result<bool, Box<dyn std::error::Error>> {
    let document = ProfileDocument::read(&config.profiles.path).map_err(DomainError::from)?;

    let worlds = Arc::new(InMemoryWorldRegistry::with_worlds(document.worlds()?));
    let catalog = Arc::new(InMemoryDistributionCatalog::new());
    for world in worlds.worlds() {
        catalog.register_world_border(&world);
    }
    if let Some(distributions) = document.distributions() {
        catalog.load_yaml(distributions)?;
    }

    let resolver = Arc::new(ProfileResolver::new(
        worlds,
        catalog,
        Arc::new(StaticEconomy::from(config.economy.enabled)),
    ));
    let handler = LoadProfilesHandler::new(resolver, ProfileDefaults::baseline());

    let result = handler.handle(LoadProfilesCommand {
        document,
        skip_invalid: config.profiles.skip_invalid,
    })?;

    let selected: Vec<Arc<Profile>> = match &options.profile {
        Some(name) => vec![result.registry.require(name)?],
        None => result.registry.iter().cloned().collect(),
    };

    if options.json {
        let summaries: Vec<_> = selected.iter().map(|p| p.summary()).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for profile in &selected {
            for line in profile.info_lines(true) {
                println!("{}", line);
            }
        }
    }
    for failure in &result.failures {
        eprintln!("{}", failure);
    }
    Ok(result.failures.is_empty())
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let options = Options::from_args(std::env::args().skip(1));
    match run(&config, &options) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "Profile load failed");
            ExitCode::FAILURE
        }
    }
}
