//! Build tasks: man pages and shell completions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(about = "blogscore build tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into `target/dist/man`.
    Man {
        #[arg(long, default_value = "target/dist/man")]
        out: PathBuf,
    },
    /// Generate shell completions into `target/dist/completions`.
    Completions {
        #[arg(long, default_value = "target/dist/completions")]
        out: PathBuf,
    },
    /// Generate everything under `target/dist`.
    Dist,
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out } => completions(&out),
        Task::Dist => {
            man(Path::new("target/dist/man"))?;
            completions(Path::new("target/dist/completions"))
        }
    }
}

fn man(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = blogscore::command();

    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buf)?;
    fs::write(out.join("blogscore.1"), buf)?;

    for sub in cmd.get_subcommands() {
        let name = format!("blogscore-{}", sub.get_name());
        let mut buf = Vec::new();
        clap_mangen::Man::new(sub.clone()).render(&mut buf)?;
        fs::write(out.join(format!("{name}.1")), buf)?;
    }

    println!("man pages written to {}", out.display());
    Ok(())
}

fn completions(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let mut cmd = blogscore::command();
    for shell in Shell::value_variants() {
        clap_complete::generate_to(*shell, &mut cmd, "blogscore", out)?;
    }
    println!("completions written to {}", out.display());
    Ok(())
}
