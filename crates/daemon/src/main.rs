// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! detectord
//!
//! Tails a single log file, reassembles multi-line error traces, and posts
//! recognized incidents to a configured ingestion endpoint.
//!
//! Architecture:
//! - Tailer Task: owns the file handle, forwards raw lines over a channel
//! - Reassembler Task: drives the Idle/Collecting state machine, emits Incidents
//! - Delivery Client: drains the Incident channel, applies duplicate
//!   suppression, and POSTs survivors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::path::PathBuf;
use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use idt_adapters::{DeliveryClient, HttpDeliveryTransport, Tailer};
use idt_core::{Clock, Config, Incident, SystemClock, BUFFER_SIZE};
use idt_engine::{pipeline, Reassembler};

const CONFIG_PATH: &str = "detector.toml";
const LINE_CHANNEL_CAPACITY: usize = 256;
const INCIDENT_CHANNEL_CAPACITY: usize = 100;

#[tokio::main]
async fn main() {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" | "-v" => {
                println!("detectord {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--help" | "-h" | "help" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("error: unexpected argument '{arg}'");
                eprintln!("Usage: detectord [--help | --version]");
                std::process::exit(1);
            }
        }
    }

    setup_logging();

    let config = match Config::load(&PathBuf::from(CONFIG_PATH)) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(err) = std::fs::File::open(&config.log_path) {
        error!(path = %config.log_path.display(), error = %err, "failed to open log file");
        std::process::exit(1);
    }

    let tailer = Tailer::new(config.log_path.clone());
    let cancel = CancellationToken::new();

    let (line_tx, line_rx) = tokio::sync::mpsc::channel(LINE_CHANNEL_CAPACITY);
    let (incident_tx, incident_rx) = tokio::sync::mpsc::channel(INCIDENT_CHANNEL_CAPACITY);

    let tailer_cancel = cancel.clone();
    let mut tailer_handle = tokio::spawn(async move { tailer.run(line_tx, tailer_cancel).await });

    let hostname = Incident::local_hostname();
    let repo_url = Some(config.repo_url.clone()).filter(|s| !s.is_empty());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let reassembler = Reassembler::new(BUFFER_SIZE, hostname, repo_url, clock);
    let reassembler_handle = tokio::spawn(pipeline::run(reassembler, line_rx, incident_tx));

    let delivery = DeliveryClient::new(
        HttpDeliveryTransport::new(),
        config.server_url.clone(),
        Box::new(SystemClock),
    );
    let delivery_handle = tokio::spawn(delivery.run(incident_rx));

    info!(log_path = %config.log_path.display(), server_url = %config.server_url, "detectord ready");

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

    let mut tailer_failed = false;
    let mut tailer_joined = false;
    tokio::select! {
        _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
        _ = sigint.recv() => info!("received SIGINT, shutting down"),
        result = &mut tailer_handle => {
            tailer_joined = true;
            if let Ok(Err(err)) = result {
                error!(error = %err, "tailer stopped with an error");
                tailer_failed = true;
            }
        }
    }

    cancel.cancel();

    if !tailer_joined {
        let _ = tailer_handle.await;
    }
    let _ = reassembler_handle.await;
    let _ = delivery_handle.await;

    if tailer_failed {
        std::process::exit(1);
    }
    info!("detectord stopped");
}

fn print_help() {
    println!("detectord {}", env!("CARGO_PKG_VERSION"));
    println!("Tails a log file, reassembles error traces, and delivers incidents over HTTP");
    println!();
    println!("USAGE:");
    println!("    detectord");
    println!();
    println!("Configuration is read from ./detector.toml, with DETECTOR_LOG_PATH,");
    println!("DETECTOR_SERVER_URL, and DETECTOR_REPO_URL environment overrides.");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help information");
    println!("    -v, --version    Print version information");
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
