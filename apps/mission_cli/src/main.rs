use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{HeadlessBoard, HeadlessTabs, HeadlessTree, MissionBoard, TabWidget};
use serde_json::Value;
use shared::domain::{CourseId, StepId};
use storage::{reference, ContentStore};
use tracing::info;
use tracing_subscriber::EnvFilter;
use web_bridge::{channel_host, EventBridge};

mod config;

use config::load_settings;

/// Boots the mission board against in-memory widgets and a host task that
/// only becomes ready after startup, then prints what the page would show.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "missions.toml")]
    config: PathBuf,
    /// JSON course sequence passed to `set_tree_config`.
    #[arg(long)]
    tree: Option<PathBuf>,
    /// JSON object merged with `set_mission_text`.
    #[arg(long)]
    missions: Option<PathBuf>,
    #[arg(long, requires = "step")]
    course: Option<i64>,
    #[arg(long, requires = "course")]
    step: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    tab: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.config);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let mut board: HeadlessBoard = MissionBoard::new(
        ContentStore::reference(),
        HeadlessTree::with_layout(
            reference::COURSE_COUNT as usize,
            reference::STEP_COUNT as usize,
        ),
        HeadlessTabs::standard(),
        settings.board(),
    )
    .with_bridge(EventBridge::new(settings.bridge()));
    board.init();

    if let Some(path) = &args.tree {
        board.set_tree_config(&read_json(path)?);
    }
    if let Some(path) = &args.missions {
        board.set_mission_text(&read_json(path)?);
    }
    if let (Some(course), Some(step)) = (args.course, args.step) {
        board.update_mission(CourseId(course), StepId(step));
    }
    if let Some(tab) = args.tab {
        board.set_active_tab_index(tab);
    }

    print_board(&board);

    let (host, mut rx) = channel_host();
    let printer = tokio::spawn(async move {
        let mut received = 0usize;
        while let Some(message) = rx.recv().await {
            println!("host <- {}.{} {}", message.channel, message.method, message.body);
            received += 1;
        }
        received
    });

    if let Some(bridge) = board.bridge_mut() {
        bridge.attach_host(host);
        let delivered = bridge.ready();
        info!(delivered, "host ready; queued events flushed");
    }
    drop(board);

    let received = printer.await.context("host task failed")?;
    println!("host received {received} event(s)");
    Ok(())
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in '{}'", path.display()))
}

fn print_board(board: &HeadlessBoard) {
    for section in board.tree().sections() {
        let marker = if section.open { "v" } else { ">" };
        println!("{marker} {}", section.title);
        if !section.open {
            continue;
        }
        for slot in &section.steps {
            let marker = if slot.active { "*" } else { " " };
            println!("   {marker} {}", slot.text);
        }
    }

    println!();
    let tabs: Vec<String> = board
        .tabs()
        .slots()
        .iter()
        .map(|slot| {
            if slot.active {
                format!("[{}]", slot.label)
            } else {
                slot.label.clone()
            }
        })
        .collect();
    println!("{}", tabs.join(" | "));
    if let Some(active) = board.tabs().active_slot() {
        info!(tab = active, "active tab");
    }

    for line in board.tabs().description_lines() {
        println!("  {line}");
    }
    println!();
}
