mod logging;

use std::path::PathBuf;

use clap::Parser;
use retention::restart_cleaner::RestartCleaner;

#[derive(Parser, Debug)]
#[command(about = "Removes old simulation restart directories, keeping the most recent ones")]
struct Cli {
    /// Keep the N most recent restore directories
    #[arg(long = "recent", value_name = "N")]
    recent: usize,

    /// Base directory containing restore.NNNNNN subdirectories
    restart_dir: PathBuf,

    /// Preview mode - show what would be deleted without actual deletion
    #[arg(long)]
    dry_run: bool,

    /// Cleanup strategy to apply
    #[arg(long, default_value = "KEEP_RECENT_N")]
    strategy: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();
    let args = Cli::parse();
    tracing::debug!("Parsed arguments: {:?}", args);

    let cleaner = RestartCleaner::new(
        &args.restart_dir,
        args.recent,
        &args.strategy,
        args.dry_run,
    )?;
    let report = cleaner.cleanup()?;

    for result in &report.deletion_results {
        if report.dry_run {
            println!("DRY RUN: Would delete {}", result.path.display());
        } else if result.success {
            println!("Deleted {}", result.path.display());
        } else {
            eprintln!(
                "Error deleting {}: {}",
                result.path.display(),
                result.error_message.as_deref().unwrap_or("unknown error")
            );
        }
    }

    let remaining = cleaner.get_available_iterations();
    println!("Final result: {} directories remaining.", remaining.len());

    Ok(())
}
