use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bumpy::boundary::BoundaryWarning;
use bumpy::cli::{self, BumpWorkflowArgs};
use bumpy::config;
use bumpy::domain::BumpKind;
use bumpy::{ui, BumpyError};

#[derive(clap::Parser)]
#[command(
    name = "bumpy",
    version,
    about = "Create the next semantic version tag for a git repository"
)]
struct Args {
    #[arg(help = "Repository directory to tag")]
    directory: Option<PathBuf>,

    #[arg(long, help = "Bump the minor version instead of the patch")]
    minor: bool,

    #[arg(long, value_name = "REMOTE", help = "Push the new tag to this remote")]
    push: Option<String>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Module file, or directory containing go.mod [default: DIRECTORY]"
    )]
    module: Option<PathBuf>,

    #[arg(long, help = "Tag prefix, e.g. 'api/'")]
    prefix: Option<String>,

    #[arg(short, long, value_name = "FILE", help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Resolve and print the tag without creating it")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .without_time()
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let directory = args
        .directory
        .ok_or_else(|| BumpyError::missing_argument("No directory specified"))?;

    let config = config::load_config(args.config.as_deref(), &directory)?;

    // Flags win over the config file
    let mut workflow_args = BumpWorkflowArgs::new(directory).with_config(&config);
    if let Some(prefix) = args.prefix {
        workflow_args.prefix = prefix;
    }
    if let Some(remote) = args.push {
        workflow_args.push_remote = Some(remote);
    }
    if let Some(module) = args.module {
        workflow_args.module_path = module;
    }
    if args.minor {
        workflow_args.bump = BumpKind::Minor;
    }
    workflow_args.dry_run = args.dry_run;

    let result = cli::run(&workflow_args)?;

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
        if let BoundaryWarning::PushFailed { tag, remote, .. } = warning {
            ui::display_manual_push_instruction(tag, remote);
        }
    }

    ui::display_tag(&result.tag);
    Ok(())
}
