mod history_cmd;

use std::path::Path;

use clap::{Parser, Subcommand};

use retext::TransformResult;
use retext::clipboard;
use retext::history::{self, HistoryRecord};
use retext::output;
use retext::transform::{self, LocalTransform, Transform as _};

#[derive(Parser)]
#[command(
    name = "retext",
    version,
    about = "Deterministic local text transformer with a persisted history"
)]
struct Cli {
    /// Show how long the transform took
    #[arg(long, global = true)]
    timing: bool,

    /// Print the transform result as pretty JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform text and record the result to history
    Run {
        /// Skip recording this result to history
        #[arg(long)]
        no_record: bool,
        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,
    },
    /// Copy the most recent transform output to the system clipboard
    Copy,
    /// Manage the transform history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List recent history entries, newest first
    List {
        /// Number of entries to show; 0 shows all (default: 10)
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Show one history entry in full (1 = newest)
    Show {
        /// Entry position from `history list`
        position: usize,
    },
    /// Delete one history entry (1 = newest); every record with the same
    /// content and timestamp goes with it
    Delete {
        /// Entry position from `history list`
        position: usize,
    },
    /// Clear all history entries — this is destructive and cannot be undone
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export the full history as pretty-printed JSON
    Export {
        /// Destination file (default: retext-history.json)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn cmd_run(text: &[String], no_record: bool, cli: &Cli) -> anyhow::Result<i32> {
    let input = text.join(" ");

    let start = std::time::Instant::now();
    let outcome = LocalTransform.transform(&input);
    let elapsed = start.elapsed();

    if cli.timing {
        eprintln!(
            "[retext] transform took {:.1}ms",
            elapsed.as_secs_f64() * 1000.0
        );
    }

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            // A failing transformer degrades to a note; nothing is recorded.
            if std::env::var("RETEXT_DEBUG").is_ok() {
                eprintln!("[retext] transform error: {e:#}");
            }
            output::render_result(&TransformResult {
                output: String::new(),
                note: transform::ERROR_NOTE.to_owned(),
            });
            return Ok(0);
        }
    };

    if cli.json {
        output::print_json(&result);
    } else {
        output::render_result(&result);
    }

    if !no_record {
        history::try_append(HistoryRecord {
            input,
            output: result.output,
            note: result.note,
            timestamp_ms: history::now_ms(),
        });
    }

    Ok(0)
}

fn cmd_copy() -> anyhow::Result<i32> {
    let slot = history::default_slot()
        .ok_or_else(|| anyhow::anyhow!("cannot determine history slot path"))?;

    // The last rendered result is the newest entry with a non-empty output;
    // prompt/privacy entries have nothing to put on the clipboard.
    let latest = history::newest_first(&slot)
        .into_iter()
        .find(|r| !r.output.is_empty());
    let Some(entry) = latest else {
        eprintln!("[retext] nothing to copy");
        return Ok(1);
    };

    match clipboard::copy(&entry.output) {
        Ok(()) => {
            eprintln!("[retext] copied {} chars", entry.output.chars().count());
            Ok(0)
        }
        Err(e) => {
            eprintln!("[retext] copy failed: {e:#}");
            Ok(1)
        }
    }
}

fn or_exit(r: anyhow::Result<i32>) -> i32 {
    r.unwrap_or_else(|e| {
        eprintln!("[retext] error: {e:#}");
        1
    })
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match &cli.command {
        Commands::Run { no_record, text } => or_exit(cmd_run(text, *no_record, &cli)),
        Commands::Copy => or_exit(cmd_copy()),
        Commands::History { action } => or_exit(match action {
            HistoryAction::List { limit } => history_cmd::cmd_history_list(*limit),
            HistoryAction::Show { position } => history_cmd::cmd_history_show(*position),
            HistoryAction::Delete { position } => history_cmd::cmd_history_delete(*position),
            HistoryAction::Clear { yes } => history_cmd::cmd_history_clear(*yes),
            HistoryAction::Export { output } => {
                history_cmd::cmd_history_export(output.as_deref().map(Path::new))
            }
        }),
    };
    std::process::exit(exit_code);
}
