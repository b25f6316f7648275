// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! injector
//!
//! Synthetic log producer (C6) used to drive the detector during end-to-end
//! tests and demos. Appends realistic multi-language bursts to a log file
//! on a schedule; not part of production operation.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod templates;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use rand::seq::IndexedRandom;
use rand::Rng;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};

use templates::Template;

const INITIAL_BURST_DELAY: Duration = Duration::from_secs(5);
const CADENCE: Duration = Duration::from_secs(30 * 60);
const CADENCE_BURST_DELAY: Duration = Duration::from_secs(2);
const NORMAL_LINE_SPACING: Duration = Duration::from_millis(100);
const CADENCE_LINE_SPACING: Duration = Duration::from_millis(100);
const TRACE_LINE_SPACING: Duration = Duration::from_millis(50);

const CANNED_NORMAL_LINES: &[&str] = &[
    "[INFO] request completed",
    "[INFO] health check passed",
    "[DEBUG] cache hit",
    "[INFO] connection established",
    "[DEBUG] flushed write buffer",
    "[INFO] scheduled job finished",
];

#[derive(Parser)]
#[command(name = "injector", about = "Appends synthetic log bursts for end-to-end testing")]
struct Cli {
    /// Log file to append to.
    #[arg(long)]
    log_path: PathBuf,

    /// Skip the 30-minute cadence and exit after the first burst.
    #[arg(long)]
    once: bool,

    /// Force a specific burst template instead of a random pick.
    #[arg(long)]
    burst: Option<String>,
}

#[tokio::main]
async fn main() {
    setup_logging();
    let cli = Cli::parse();

    let template = match cli.burst.as_deref() {
        Some(name) => match templates::find(name) {
            Some(t) => Some(t),
            None => {
                error!(name, "unknown burst template");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut file = match OpenOptions::new().create(true).append(true).open(&cli.log_path) {
        Ok(file) => file,
        Err(err) => {
            error!(path = %cli.log_path.display(), error = %err, "failed to open log file");
            std::process::exit(1);
        }
    };

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(err) => {
            error!(error = %err, "failed to install SIGTERM handler");
            std::process::exit(1);
        }
    };
    let mut sigint = match signal(SignalKind::interrupt()) {
        Ok(s) => s,
        Err(err) => {
            error!(error = %err, "failed to install SIGINT handler");
            std::process::exit(1);
        }
    };

    let mut rng = rand::rng();
    let line_count = rng.random_range(25..=35);
    if write_lines(&mut file, line_count, NORMAL_LINE_SPACING, &mut rng).await.is_err() {
        std::process::exit(1);
    }

    tokio::select! {
        _ = tokio::time::sleep(INITIAL_BURST_DELAY) => {}
        _ = sigterm.recv() => return,
        _ = sigint.recv() => return,
    }

    if emit_burst(&mut file, template, &mut rng).await.is_err() {
        std::process::exit(1);
    }
    info!("initial burst emitted");

    if cli.once {
        return;
    }

    loop {
        tokio::select! {
            _ = tokio::time::sleep(CADENCE) => {}
            _ = sigterm.recv() => return,
            _ = sigint.recv() => return,
        }

        let line_count = rng.random_range(15..=25);
        if write_lines(&mut file, line_count, CADENCE_LINE_SPACING, &mut rng).await.is_err() {
            std::process::exit(1);
        }

        tokio::select! {
            _ = tokio::time::sleep(CADENCE_BURST_DELAY) => {}
            _ = sigterm.recv() => return,
            _ = sigint.recv() => return,
        }

        if emit_burst(&mut file, template, &mut rng).await.is_err() {
            std::process::exit(1);
        }
        info!("cadence burst emitted");
    }
}

/// Append `count` generic informational lines, sleeping `spacing` between
/// each, with content drawn at random from the small canned set.
async fn write_lines(
    file: &mut std::fs::File,
    count: u32,
    spacing: Duration,
    rng: &mut impl Rng,
) -> Result<(), ()> {
    for _ in 0..count {
        let text = CANNED_NORMAL_LINES.choose(rng).copied().unwrap_or("[INFO] heartbeat");
        append_line(file, &Utc::now().to_rfc3339(), text)?;
        tokio::time::sleep(spacing).await;
    }
    Ok(())
}

/// Emit one error burst: the template's normal logs (100ms spacing), then
/// its trace lines (50ms spacing), all sharing the single timestamp
/// captured when the burst started.
async fn emit_burst(
    file: &mut std::fs::File,
    forced: Option<&'static Template>,
    rng: &mut impl Rng,
) -> Result<(), ()> {
    let template = forced.or_else(|| templates::TEMPLATES.choose(rng)).ok_or(())?;
    let timestamp = Utc::now().to_rfc3339();

    for line in template.normal_logs.iter().copied() {
        append_line(file, &timestamp, line)?;
        tokio::time::sleep(NORMAL_LINE_SPACING).await;
    }
    for line in template.trace.iter().copied() {
        append_line(file, &timestamp, line)?;
        tokio::time::sleep(TRACE_LINE_SPACING).await;
    }
    Ok(())
}

fn append_line(file: &mut std::fs::File, timestamp: &str, text: &str) -> Result<(), ()> {
    writeln!(file, "{timestamp} {text}").map_err(|err| {
        error!(error = %err, "failed to write log line");
    })?;
    file.flush().map_err(|err| {
        error!(error = %err, "failed to flush log file");
    })
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
