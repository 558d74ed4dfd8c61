use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use twig::CommitDisplayFormat;
use twig::areas::repository::Repository;
use twig::commands::porcelain::log::LogOptions;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressed version control system",
    long_about = "twig stages files into a content-addressed object store, snapshots them \
    as a linear chain of commits, and shows line-level changes between successive versions.",
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
        long,
        global = true,
        env = "TWIG_REPO",
        help = "Repository root (defaults to the current directory)"
    )]
    repo: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .twig directory in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the content of the given files (directories are expanded \
        recursively) and records them in the staging index."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots the staged files as a new commit on top of HEAD and clears the index."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show commit history, newest first")]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
        #[arg(long = "abbrev-commit", help = "Show abbreviated commit IDs")]
        abbrev_commit: bool,
        #[arg(long, value_enum, default_value_t = CommitDisplayFormat::Medium)]
        format: CommitDisplayFormat,
    },
    #[command(
        name = "show",
        about = "Show a commit and its changes against its parent",
        long_about = "This command prints a commit and, for each of its files, the line diff against \
        the parent's version, or marks the file as new or as part of the first commit."
    )]
    Show {
        #[arg(index = 1, default_value = "HEAD", help = "Commit ID, abbreviated ID or HEAD")]
        revision: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object store"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "cat-file", about = "Print the raw content of an object")]
    CatFile {
        #[arg(short = 'p', long, help = "The object ID to print")]
        sha: String,
    },
}

fn open_repository(repo: Option<PathBuf>) -> Result<Repository> {
    let path = match repo {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    Repository::new(&path, Box::new(std::io::stdout()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => {
            let repository = open_repository(path.or(cli.repo))?;
            repository.init().await?;
        }
        Commands::Add { paths } => {
            let repository = open_repository(cli.repo)?;
            repository.add(&paths).await?;
        }
        Commands::Commit { message } => {
            let repository = open_repository(cli.repo)?;
            repository.commit(&message).await?;
        }
        Commands::Log {
            oneline,
            abbrev_commit,
            format,
        } => {
            let repository = open_repository(cli.repo)?;
            repository.log(&LogOptions {
                oneline,
                abbrev_commit,
                format,
            })?;
        }
        Commands::Show { revision } => {
            let repository = open_repository(cli.repo)?;
            repository.show(&revision)?;
        }
        Commands::HashObject { write, file } => {
            let repository = open_repository(cli.repo)?;
            repository.hash_object(&file, write)?;
        }
        Commands::CatFile { sha } => {
            let repository = open_repository(cli.repo)?;
            repository.cat_file(&sha)?;
        }
    }

    Ok(())
}
