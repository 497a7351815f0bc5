use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;
use polyrec::{input::ShareDoc, solve::solve};

/// Reconstruct a polynomial with exact rational coefficients from
/// points encoded in mixed bases
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input JSON document. Read from standard input if omitted
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();
    let args = Args::parse();

    let json = match &args.input {
        Some(path) => {
            debug!("Reading {path:?}");
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {path:?}"))?
        }
        None => {
            debug!("Reading from standard input");
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read standard input")?;
            json
        }
    };
    let doc = ShareDoc::from_json(&json)?;
    let solution = solve(&doc)?;
    println!("{solution}");
    Ok(())
}
