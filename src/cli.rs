//! Command line filter: rank lines from stdin (or a file) against a query.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crate::engine::fuzzy::{FuzzyEngine, RankedMatch};
use crate::item::{RankBuilder, RankCriteria};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Fuzzy-rank candidate lines (file paths, symbols) against a query
#[derive(Parser, Debug, Clone)]
#[command(name = "jumpfuzz", version, about)]
pub struct Cli {
    /// Query to match against every candidate
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Read candidates from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Match case exactly (default: ASCII case-insensitive)
    #[arg(long)]
    pub case_sensitive: bool,

    /// Comma-separated sort criteria: score, span, begin, end, length,
    /// each optionally prefixed with `-` to reverse it
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_value = "score,span"
    )]
    pub tiebreak: Vec<RankCriteria>,

    /// Print at most N results
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Prefix every result with its score and a tab
    #[arg(long)]
    pub print_score: bool,

    /// Suffix every result with a tab and its matched positions
    #[arg(long)]
    pub print_positions: bool,

    /// Wrap matched characters in ANSI bold
    #[arg(long)]
    pub highlight: bool,

    /// Number of matcher threads (0: one per core)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}

impl Cli {
    fn needs_positions(&self) -> bool {
        self.print_positions || self.highlight
    }
}

fn read_candidates(cli: &Cli) -> Result<Vec<String>> {
    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(File::open(path).with_context(|| format!("failed to open {}", path.display()))?),
        None => Box::new(io::stdin().lock()),
    };
    let mut reader = BufReader::new(reader);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).context("failed to read candidates")? == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        // Paths need not be UTF-8.
        let line = match String::from_utf8_lossy(line) {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => {
                warn!("candidate {} is not valid UTF-8, matching {s:?}", lines.len() + 1);
                s
            }
        };
        lines.push(line);
    }
    Ok(lines)
}

fn highlighted(item: &RankedMatch) -> String {
    let Some(positions) = &item.result.positions else {
        return item.text.to_string();
    };
    let mut out = String::with_capacity(item.text.len() + positions.len() * (BOLD.len() + RESET.len()));
    let mut next = positions.iter().peekable();
    for (i, c) in item.text.chars().enumerate() {
        if next.peek() == Some(&&i) {
            next.next();
            out.push_str(BOLD);
            out.push(c);
            out.push_str(RESET);
        } else {
            out.push(c);
        }
    }
    out
}

fn write_item(out: &mut impl Write, cli: &Cli, item: &RankedMatch) -> io::Result<()> {
    if cli.print_score {
        write!(out, "{}\t", item.result.score)?;
    }
    if cli.highlight {
        write!(out, "{}", highlighted(item))?;
    } else {
        write!(out, "{}", item.text)?;
    }
    if cli.print_positions {
        let positions = item.result.positions.as_deref().unwrap_or_default();
        let joined: Vec<String> = positions.iter().map(|p| p.to_string()).collect();
        write!(out, "\t{}", joined.join(","))?;
    }
    writeln!(out)
}

/// Run the filter. Returns whether anything matched.
pub fn run(cli: &Cli) -> Result<bool> {
    let candidates = read_candidates(cli)?;
    debug!("read {} candidates", candidates.len());

    let engine = FuzzyEngine::builder()
        .query(&cli.query)
        .case(cli.case_sensitive.into())
        .rank_builder(Arc::new(RankBuilder::new(cli.tiebreak.clone())))
        .filter_mode(!cli.needs_positions())
        .build();

    let ranked = rayon::ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build()
        .context("failed to start matcher threads")?
        .install(|| engine.par_rank(&candidates));
    info!("{engine}: {} of {} candidates matched", ranked.len(), candidates.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let limit = cli.limit.unwrap_or(usize::MAX);
    for item in ranked.iter().take(limit) {
        match write_item(&mut out, cli, item) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(!ranked.is_empty()),
            other => other.context("failed to write results")?,
        }
    }
    match out.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        other => other.context("failed to write results")?,
    }
    Ok(!ranked.is_empty())
}
