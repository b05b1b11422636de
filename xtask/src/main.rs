//! Release chores: man page and shell completions for `jumpfuzz`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use jumpfuzz::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Args {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the man page
    Mangen {
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completions
    Compgen {
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Shells to generate for (default: all)
        #[arg(long, value_enum)]
        shell: Vec<Shell>,
    },
}

fn mangen(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    let path = out_dir.join("jumpfuzz.1");
    fs::write(&path, buffer).with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn compgen(out_dir: &Path, shells: &[Shell]) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let shells = if shells.is_empty() {
        vec![Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh]
    } else {
        shells.to_vec()
    };
    let mut cmd = Cli::command();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "jumpfuzz", out_dir)
            .with_context(|| format!("generating {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    match Args::parse().task {
        Task::Mangen { out_dir } => mangen(&out_dir),
        Task::Compgen { out_dir, shell } => compgen(&out_dir, &shell),
    }
}
