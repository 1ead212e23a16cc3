// src/lib.rs

pub mod cli;
pub mod config;
pub mod cron;
pub mod errors;
pub mod fs;
pub mod logging;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{Config, LoadOptions, load_with};
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the config named on the command line, prints it, and
/// releases it. Any load failure is returned to the caller, which decides
/// whether to exit.
pub fn run(args: CliArgs) -> Result<()> {
    let options = LoadOptions {
        strict: args.strict,
    };
    let cfg = load_with(&RealFileSystem, &args.config, options).map_err(|err| {
        let stage = err.stage();
        anyhow::Error::new(err).context(format!("{stage} stage failed for {:?}", args.config))
    })?;

    if args.json {
        let json = serde_json::to_string_pretty(&cfg).context("serialising config")?;
        println!("{json}");
    } else {
        print_summary(&cfg);
    }

    let released = cfg.destroy();
    debug!(released, "done");
    Ok(())
}

/// Human-readable listing of the config and its monitors.
fn print_summary(cfg: &Config) {
    let now = chrono::Local::now();

    println!("procmon config '{}'", cfg.name);
    println!("  logfile: {}", cfg.logfile);
    if let Some(ref pidfile) = cfg.pidfile {
        println!("  pidfile: {pidfile}");
    }
    println!("  daemon: {}", cfg.daemon);
    println!();

    println!("monitors ({}):", cfg.monitors().len());
    for monitor in cfg.monitors().iter() {
        println!("  - {}", monitor.name);
        println!("      cmd: {}", monitor.cmd);
        println!("      logfile: {}", monitor.logfile);
        println!("      attempts: {}", monitor.max_attempts);
        println!("      sleep: {}s", monitor.max_sleepsec);
        if let Some(ref hook) = monitor.on_error {
            println!("      on_error: {hook}");
        }
        if let Some(ref hook) = monitor.on_restart {
            println!("      on_restart: {hook}");
        }
        if let Some(cron) = monitor.cron() {
            match monitor.next_run(&now) {
                Some(next) => println!("      cron: {} (next: {next})", cron.expression()),
                None => println!("      cron: {} (no upcoming run)", cron.expression()),
            }
        }
    }
}
