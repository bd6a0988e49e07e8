use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

mod scene;

use scene::{OutputBlock, Scene};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Drives the block-cutting engine over a scene file")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cut the scene's initial polytope by its ordered joint stream and
    /// write the canonicalised child polytopes as JSON.
    Cut {
        /// Path to a scene JSON file: initial polytope + joint stream.
        #[arg(long)]
        scene: PathBuf,
        /// Path to write the resulting polytopes as JSON.
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Cut { scene, out } => cut(&scene, &out),
    }
}

fn cut(scene_path: &Path, out_path: &Path) -> Result<()> {
    tracing::info!(scene = %scene_path.display(), "loading scene");
    let raw = fs::read_to_string(scene_path)
        .with_context(|| format!("reading scene file {}", scene_path.display()))?;
    let scene: Scene = serde_json::from_str(&raw)
        .with_context(|| format!("parsing scene file {}", scene_path.display()))?;

    let joints = scene.joints();
    tracing::info!(joint_count = joints.len(), "scene loaded");

    let mut blocks = vec![scene.initial_block()];
    for (i, joint) in joints.iter().enumerate() {
        let mut next = Vec::with_capacity(blocks.len() * 2);
        for block in &blocks {
            for child in block.cut(joint) {
                next.push(child.canonicalize());
            }
        }
        tracing::debug!(joint_index = i, block_count = next.len(), "applied joint");
        blocks = next;
    }
    tracing::info!(block_count = blocks.len(), "cut tree complete");

    let output: Vec<OutputBlock> = blocks.iter().map(OutputBlock::from).collect();
    let serialized =
        serde_json::to_string_pretty(&output).context("serializing resulting polytopes")?;
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }
    fs::write(out_path, serialized)
        .with_context(|| format!("writing {}", out_path.display()))?;
    tracing::info!(out = %out_path.display(), "wrote result");

    Ok(())
}
