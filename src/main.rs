// Shopsort CLI - thin caller around the engine
// Reads config/input text from files and prints the grouped list;
// all real logic lives in the library.

use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use tracing::info;

use shopsort::ListEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<String> = None;
    let mut input_path: Option<String> = None;
    let mut json = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                config_path = iter.next().cloned();
                if config_path.is_none() {
                    usage("--config needs a file argument");
                }
            }
            "--json" => json = true,
            "--help" | "-h" => usage(""),
            other if other.starts_with('-') => usage(&format!("unknown flag {}", other)),
            other => {
                if input_path.is_some() {
                    usage("only one input file is supported");
                }
                input_path = Some(other.to_string());
            }
        }
    }

    let input_path = input_path.unwrap_or_else(|| {
        usage("missing input file");
    });

    let mut engine = ListEngine::new();

    if let Some(path) = config_path {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        engine
            .load_config(&text)
            .with_context(|| format!("Invalid config file: {}", path))?;
        info!(config = %path, "configuration loaded");
    }

    let text = fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read input file: {}", input_path))?;
    engine.process_input(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&engine.list_result())?);
    } else {
        print!("{}", engine.plaintext_result());
    }

    Ok(())
}

fn usage(error: &str) -> ! {
    if !error.is_empty() {
        eprintln!("Error: {}", error);
        eprintln!();
    }
    eprintln!("shopsort {} - group a shopping list by merchant", shopsort::VERSION);
    eprintln!();
    eprintln!("Usage: shopsort [--config FILE] [--json] INPUT");
    eprintln!();
    eprintln!("  --config, -c FILE  merchant configuration (one 'Name:' header per");
    eprintln!("                     merchant, followed by its item patterns)");
    eprintln!("  --json             print the structured result as JSON");
    process::exit(if error.is_empty() { 0 } else { 2 });
}
