use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commit_analyzer::cli::orchestration::{self, AnalyzeWorkflowArgs};
use commit_analyzer::ui;

#[derive(clap::Parser)]
#[command(
    name = "commit-analyzer",
    about = "Determine the release type triggered by parsed commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        default_value = "-",
        help = "JSON file with an array of parsed commits ('-' reads stdin)"
    )]
    commits: String,

    #[arg(long, help = "Show the configured release types and exit")]
    list_types: bool,

    #[arg(long, help = "Log every rule evaluation")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("commit-analyzer {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(args.verbose);

    let workflow_args = AnalyzeWorkflowArgs {
        config_path: args.config,
        commits_path: args.commits,
    };

    if args.list_types {
        let config = orchestration::load_workflow_config(&workflow_args)?;
        ui::display_release_types(&config.ordering()?);
        return Ok(());
    }

    let commits = match orchestration::read_commits(&workflow_args.commits_path) {
        Ok(commits) => commits,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    ui::display_commit_summary(&commits);

    let config = orchestration::load_workflow_config(&workflow_args)?;
    match orchestration::analyze(config, &commits) {
        Ok(result) => {
            ui::display_release(result.release.as_deref());
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("commit_analyzer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
