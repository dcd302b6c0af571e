// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! strata-cat - Dump the contents of a `.strata` recording.
//!
//! Usage:
//!   strata-cat capture.strata
//!   strata-cat capture.strata --entity /camera/
//!   strata-cat capture.strata --batches

use clap::Parser;
use std::path::PathBuf;
use strata_recording::{EntityFilter, Player, PlayerConfig};

#[derive(Parser, Debug)]
#[command(name = "strata-cat")]
#[command(about = "Dump the contents of a .strata recording")]
#[command(version)]
struct Args {
    /// Input file path
    input: PathBuf,

    /// Only show entities under this path prefix (e.g. "/camera/")
    #[arg(short, long)]
    entity: Option<String>,

    /// Show per-batch detail for every message
    #[arg(short, long)]
    batches: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = args.log_level.parse().unwrap_or(tracing::Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .init();

    let mut config = PlayerConfig::new(&args.input);
    if let Some(prefix) = &args.entity {
        config = config.entity_filter(EntityFilter::include(vec![prefix.clone()]));
    }

    let mut player = Player::open(config)?;

    let metadata = player.metadata();
    println!("recording: {}", args.input.display());
    println!("  sdk version: {}", metadata.sdk_version);
    println!("  messages:    {}", player.message_count());
    println!(
        "  duration:    {:.3}s",
        player.duration_nanos() as f64 / 1e9
    );
    if let Some(desc) = &metadata.description {
        println!("  description: {}", desc);
    }
    println!("  entities:");
    for entity in &player.metadata().entities {
        println!(
            "    {} [{}] - {} messages",
            entity.path, entity.archetype, entity.message_count
        );
    }
    println!();

    while let Some(msg) = player.next_message()? {
        println!(
            "[{:>14}ns] {} {} ({} batches, {} bytes)",
            msg.timestamp_nanos,
            msg.entity_path,
            msg.archetype,
            msg.batches.len(),
            msg.payload_bytes()
        );
        if args.batches {
            for batch in &msg.batches {
                println!(
                    "    {:<12} [{}] {} instances, {} bytes",
                    batch.field,
                    batch.component_type,
                    batch.num_instances(),
                    batch.payload.len()
                );
            }
        }
    }

    Ok(())
}
