use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glam::Vec2;
use tracing::info;

use boxtree::demo::{build_context_menu_scene, DEFAULT_CANVAS};
use boxtree::report::{render_detailed, render_json, render_tree};
use boxtree_layout::{BoxLayoutEngine, LayoutEngine};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Tree,
    Json,
    Detailed,
}

#[derive(Parser)]
#[command(name = "boxtree-debug")]
#[command(about = "Lays out the demo scene and prints the resulting box tree")]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "tree")]
    format: Format,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Show element positions and sizes in tree output
    #[arg(long)]
    show_layout: bool,

    /// Canvas width the scene is built for
    #[arg(long, default_value_t = DEFAULT_CANVAS.x)]
    width: f32,

    /// Canvas height the scene is built for
    #[arg(long, default_value_t = DEFAULT_CANVAS.y)]
    height: f32,

    /// Root origin x
    #[arg(long, default_value_t = 0.0)]
    origin_x: f32,

    /// Root origin y
    #[arg(long, default_value_t = 0.0)]
    origin_y: f32,

    /// Number of layout passes to run. Passes accumulate, so anything above 1
    /// shows how results drift when a tree is laid out again.
    #[arg(long, default_value_t = 1)]
    passes: u32,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if args.width <= 0.0 || args.height <= 0.0 {
        anyhow::bail!("Canvas size must be positive, got {}x{}", args.width, args.height);
    }

    let mut scene = build_context_menu_scene(Vec2::new(args.width, args.height))
        .context("Failed to build demo scene")?;
    scene.tree.node_mut(scene.root)?.position = Vec2::new(args.origin_x, args.origin_y);

    let mut engine = BoxLayoutEngine::new().with_debug(args.debug);
    for _ in 0..args.passes {
        let stats = engine
            .compute_layout(&mut scene.tree, scene.root)
            .context("Layout failed")?;
        info!("Pass {}: laid out {} nodes", stats.pass, stats.node_count);
    }

    let output_text = match args.format {
        Format::Tree => render_tree(&scene.tree, scene.root, &scene.labels, args.show_layout),
        Format::Json => render_json(&scene.tree, scene.root, &scene.labels),
        Format::Detailed => render_detailed(&scene.tree, scene.root, &scene.labels),
    }
    .context("Failed to render layout report")?;

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file))?;
        info!("Output written to: {}", output_file);
    } else {
        print!("{}", output_text);
    }

    Ok(())
}
