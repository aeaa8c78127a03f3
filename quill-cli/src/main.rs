//! Quill CLI
//!
//! Builds CSS selectors and works with shapes from the command line.

mod parts;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use quill_common::warning::warn_once;
use quill_objects::{Rectangle, from_json_text, to_json_text};

#[derive(Parser)]
#[command(name = "quill", version, about = "Selector builder and shape playground")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a selector from `kind:value` parts and combinators
    Selector {
        /// Parts (`element:div`, `id:main`, `class:x`, `attr:href`,
        /// `pseudo-class:hover`, `pseudo-element:before`) and combinators
        /// (`+`, `~`, `>`, `descendant`)
        #[arg(required = true, allow_hyphen_values = true)]
        parts: Vec<String>,
    },
    /// Print the area of a rectangle
    Rect {
        /// Rectangle width
        #[arg(long)]
        width: f64,
        /// Rectangle height
        #[arg(long)]
        height: f64,
        /// Print the rectangle as JSON instead of its area
        #[arg(long)]
        json: bool,
    },
    /// Decode a rectangle from JSON and print its area
    Decode {
        /// JSON text, e.g. '{"width":10,"height":20}'
        json: String,
    },
}

fn emit(text: &str, color: bool) {
    if color {
        println!("{}", text.green());
    } else {
        println!("{text}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let color = !cli.no_color;
    match &cli.command {
        Command::Selector { parts } => {
            let selector = parts::build_selector(parts)?;
            emit(selector.stringify(), color);
        }
        Command::Rect {
            width,
            height,
            json,
        } => {
            if *width < 0.0 || *height < 0.0 {
                warn_once("Shape", "negative rectangle dimensions");
            }
            let rect = Rectangle::new(*width, *height);
            if *json {
                emit(&to_json_text(&rect)?, color);
            } else {
                emit(&rect.area().to_string(), color);
            }
        }
        Command::Decode { json } => {
            let rect: Rectangle =
                from_json_text(json).with_context(|| format!("cannot decode '{json}'"))?;
            emit(&rect.area().to_string(), color);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if cli.no_color {
            eprintln!("error: {err:#}");
        } else {
            eprintln!("{} {err:#}", "error:".red().bold());
        }
        std::process::exit(1);
    }
}
