//! tinysvg CLI
//!
//! Usage:
//!   tinysvg [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>  Write the SVG to a file instead of stdout
//!       --standalone     Include the XML prolog and DOCTYPE
//!   -v, --verbose        Log debug output to stderr
//!   -h, --help           Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use tinysvg::Scene;

#[derive(Parser)]
#[command(name = "tinysvg")]
#[command(about = "Render a TOML scene description to SVG")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit a standalone document with XML prolog and DOCTYPE
    #[arg(long)]
    standalone: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if cli.standalone {
        scene.document.inline = false;
    }

    let doc = match scene.build() {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = doc.save(path) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", doc),
    }
}
