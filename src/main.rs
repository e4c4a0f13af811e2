use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::{Path, PathBuf};
use tern::areas::repository::Repository;
use tern::artifacts::core::PagerWriter;

#[derive(Parser)]
#[command(
    name = "tern",
    version = "0.1.0",
    about = "A minimal snapshot-based version control system",
    long_about = "tern tracks a set of files, freezes them into immutable commits named by \
    deterministic branch-aware identifiers, and restores the working tree from any commit or branch.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "dir",
        global = true,
        help = "Run as if started in <DIR> instead of the current directory"
    )]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .tern control directory with an empty index \
        and a master branch pointing at the root commit."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command adds a file to the staging index. \
        Its content is copied when the next commit is created."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        path: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file",
        long_about = "This command removes a file from the staging index. \
        The file itself is left in the working tree."
    )]
    Rm {
        #[arg(index = 1, help = "The file to unstage")]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots every staged file into a new commit on the current branch. \
        The message must contain \"GO BEARS!\"."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "status", about = "Show HEAD and the tracked files")]
    Status,
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command lists the commits reachable from HEAD, newest first. \
        Output is paged when stdout is a terminal, unless NO_PAGER is set."
    )]
    Log,
    #[command(name = "branch", about = "List branches")]
    Branch,
    #[command(
        name = "checkout",
        about = "Switch to a branch or commit",
        long_about = "This command restores the working tree from a branch or a commit. \
        A 40-symbol identifier detaches HEAD; with -b a new branch is created at HEAD first."
    )]
    Checkout {
        #[arg(short = 'b', help = "Create a new branch named <TARGET> and switch to it")]
        new_branch: bool,
        #[arg(index = 1, help = "Branch name or commit identifier")]
        target: String,
    },
}

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match &cli.command {
        Commands::Init => open(&root)?.init()?,
        Commands::Add { path } => open(&root)?.add(path)?,
        Commands::Rm { path } => open(&root)?.rm(path)?,
        Commands::Commit { message } => {
            open(&root)?.commit(message)?;
        }
        Commands::Status => open(&root)?.status()?,
        Commands::Log => {
            if use_pager() {
                let pager = Pager::new();
                let repository =
                    Repository::new(&root, Box::new(PagerWriter::new(pager.clone())))?;

                repository.log()?;
                minus::page_all(pager)?;
            } else {
                open(&root)?.log()?;
            }
        }
        Commands::Branch => open(&root)?.branch()?,
        Commands::Checkout { new_branch, target } => {
            open(&root)?.checkout(target, *new_branch)?
        }
    }

    Ok(())
}

fn open(root: &Path) -> anyhow::Result<Repository> {
    Repository::new(root, Box::new(std::io::stdout()))
}

fn use_pager() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}
