use anyhow::{Context, Result};
use cit2bib::{convert, Cache, HttpRegistry, InputMode, RunOptions};
use clap::Parser;
use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

/// Fetch BibTeX entries for DOIs, arXiv ids and PMIDs
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file (reads stdin if not specified)
    #[arg(short, long)]
    infile: Option<PathBuf>,
    /// Output file (prints to stdout if not specified)
    #[arg(short, long)]
    outfile: Option<PathBuf>,
    /// Treat the input as a TeX source and resolve its \cite{} keys
    #[arg(long)]
    texfile: bool,
    /// Treat the input as a LaTeX log and resolve keys biblatex could not find
    #[arg(long = "latex_log")]
    latex_log: bool,
    /// Log informational messages
    #[arg(long)]
    debug: bool,
    /// Drop each token's cached entry before resolving it
    #[arg(long = "clear_cache")]
    clear_cache: bool,
    /// Cache file (defaults to $CIT2BIB_CACHE or ~/.cit2bib.cache)
    #[arg(long)]
    cache: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Configure logging
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let input = match &args.infile {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from {:?}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            buf
        }
    };

    let mut out: Box<dyn Write> = match &args.outfile {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to open output {:?}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let cache_path = match args.cache {
        Some(path) => path,
        None => Cache::default_path()?,
    };
    let mut cache = Cache::open(&cache_path)
        .with_context(|| format!("Failed to open cache {:?}", cache_path))?;
    info!("Using cache {:?} ({} entries)", cache.path(), cache.len());
    let registry = HttpRegistry::from_env()?;

    let options = RunOptions {
        mode: InputMode::from_flags(args.texfile, args.latex_log),
        clear_cache: args.clear_cache,
    };
    let written = convert(&input, options, &mut cache, &registry, &mut *out)
        .context("Failed to write bibliography")?;
    info!("Wrote {} entries", written);

    cache
        .close()
        .with_context(|| format!("Failed to write cache {:?}", cache_path))?;
    Ok(())
}
