//! Napkin CLI - turn a sketched rect set into widget trees and source code.
//!
//! Rect sets are plain JSON arrays as produced by a drawing surface:
//!
//! ```json
//! [
//!   { "left": 0, "top": 0, "right": 300, "bottom": 40, "text": "Full name" },
//!   { "left": 0, "top": 50, "right": 20, "bottom": 70, "text": "x" }
//! ]
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use classify::tag_for;
use containment::{build_forest, RectNode};
use node::Rect;
use std::path::PathBuf;

/// Napkin CLI - sketch-to-UI code generation
#[derive(Parser)]
#[command(name = "napkin")]
#[command(about = "Classify sketched rectangles and generate UI code")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the containment forest with classified tags
    Tree {
        /// JSON file holding the rect set
        file: PathBuf,
    },

    /// Print the instruction token stream, one token per line
    Tokens {
        /// JSON file holding the rect set
        file: PathBuf,
    },

    /// Generate a Vaadin Flow Java class
    Flow {
        /// JSON file holding the rect set
        file: PathBuf,

        /// Design name (kebab-case), becomes the Java class name
        #[arg(short, long, default_value = "my-design")]
        name: String,
    },

    /// Generate a Polymer 3 custom-element module
    Polymer {
        /// JSON file holding the rect set
        file: PathBuf,

        /// Custom-element tag name (kebab-case)
        #[arg(short, long, default_value = "my-design")]
        name: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Tree { file } => print_tree(&file),
        Commands::Tokens { file } => print_tokens(&file),
        Commands::Flow { file, name } => print_flow(&file, &name),
        Commands::Polymer { file, name } => print_polymer(&file, &name),
    }
}

fn load_rects(file: &PathBuf) -> Result<Vec<Rect>> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let rects: Vec<Rect> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid rect set in {}", file.display()))?;
    log::info!("loaded {} rects from {}", rects.len(), file.display());
    Ok(rects)
}

fn print_tree(file: &PathBuf) -> Result<()> {
    let rects = load_rects(file)?;
    let forest = build_forest(&rects);
    for root in &forest {
        print_node(root, 0);
    }
    Ok(())
}

fn print_node(node: &RectNode, depth: usize) {
    let tag = tag_for(node);
    let label = node.rect.text().unwrap_or("");
    println!(
        "{:indent$}{} [{:.0},{:.0} {:.0}x{:.0}] {}",
        "",
        tag.guess_label(),
        node.rect.left,
        node.rect.top,
        node.rect.width(),
        node.rect.height(),
        label,
        indent = depth * 2
    );
    for child in &node.children {
        print_node(child, depth + 1);
    }
}

fn print_tokens(file: &PathBuf) -> Result<()> {
    for token in tokens_for(file)? {
        println!("{token}");
    }
    Ok(())
}

fn print_flow(file: &PathBuf, name: &str) -> Result<()> {
    let tokens = tokens_for(file)?;
    println!("{}", codegen::flow::export(name, &tokens));
    Ok(())
}

fn print_polymer(file: &PathBuf, name: &str) -> Result<()> {
    let tokens = tokens_for(file)?;
    println!("{}", codegen::polymer::export(name, &tokens));
    Ok(())
}

fn tokens_for(file: &PathBuf) -> Result<Vec<String>> {
    let rects = load_rects(file)?;
    let forest = build_forest(&rects);
    let instructions = interchange::flatten(&forest);
    Ok(interchange::to_tokens(&instructions))
}
