pub mod assets;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod rating;
pub mod scheduler;
pub mod services;
pub mod session;
pub mod store;

use std::io;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{Cli, SessionOptions};
use crate::config::{AppConfig, resolve_items};
use crate::services::{JudgingService, SimulationService, StandingsService};
use crate::store::SessionStore;

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Defaults overridden by any options given on the command line
pub fn build_config(options: &SessionOptions) -> AppConfig {
    let mut config = AppConfig::new();
    if let Some(dir) = &options.state_dir {
        config.store.state_dir = dir.clone();
    }
    if let Some(dir) = &options.photos {
        config.store.photos_dir = dir.clone();
    }
    config
}

pub fn handle_judge(options: &SessionOptions, threshold: Option<i64>) -> Result<()> {
    let mut config = build_config(options);
    if let Some(threshold) = threshold {
        config.judging.skip_policy.threshold = threshold;
    }
    let items = resolve_items(options.items.as_deref())?;

    let service = JudgingService::new(config, items)?;
    let stdin = io::stdin();
    service.run(stdin.lock(), io::stdout(), &mut rand::thread_rng())?;
    Ok(())
}

pub fn handle_standings(options: &SessionOptions, json: bool) -> Result<()> {
    let config = build_config(options);
    let items = resolve_items(options.items.as_deref())?;

    let service = StandingsService::new(config, items)?;
    service.run(io::stdout(), json, &mut rand::thread_rng())
}

pub fn handle_simulate(options: &SessionOptions, seed: Option<u64>) -> Result<()> {
    let config = build_config(options);
    let items = resolve_items(options.items.as_deref())?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    SimulationService::new(config, items).run(io::stdout(), &mut rng)
}

pub fn handle_reset(options: &SessionOptions) -> Result<()> {
    let config = build_config(options);
    SessionStore::new(&config.store.state_dir)?.clear()?;
    println!("Saved session cleared.");
    Ok(())
}
