use clap::{Parser, Subcommand};
use liftlog_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Plain-text workout journal parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a log file and print a per-session summary
    Parse {
        /// Path to the journal file
        file: PathBuf,

        /// Dump the full parse result as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Show the recorded history of one exercise shorthand
    History {
        /// Path to the journal file
        file: PathBuf,

        /// Exercise shorthand, e.g. BP
        shorthand: String,

        /// Report the previous occurrence strictly before this date
        /// (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        before: Option<String>,
    },

    /// Flatten every parsed set into a CSV file
    Export {
        /// Path to the journal file
        file: PathBuf,

        /// Destination CSV path
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    liftlog_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Parse { file, json } => cmd_parse(&file, json, &config),
        Commands::History {
            file,
            shorthand,
            before,
        } => cmd_history(&file, &shorthand, before, &config),
        Commands::Export { file, out } => cmd_export(&file, &out, &config),
    }
}

fn load_log(path: &Path) -> Result<Log> {
    let text = std::fs::read_to_string(path)?;
    let id = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("log")
        .to_string();
    Ok(Log { id, text })
}

fn report_errors(parsed: &ParsedLog) {
    if parsed.errors.is_empty() {
        return;
    }
    eprintln!("{} line(s) failed to parse:", parsed.errors.len());
    for (line, message) in &parsed.errors {
        eprintln!("  line {}: {}", line, message);
    }
}

fn cmd_parse(file: &Path, json: bool, config: &Config) -> Result<()> {
    let log = load_log(file)?;
    let parsed = parse_log(&log, &config.shortcuts);

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    for session in &parsed.sessions {
        let duration = session
            .duration
            .map(|minutes| format!("  {}'", minutes))
            .unwrap_or_default();
        println!(
            "{}  lines {:>4}-{:<4}  {} lifts, {} sets{}",
            session.date,
            session.start_line,
            session.end_line,
            session.lifts.len(),
            session.total_sets(),
            duration,
        );
    }
    println!(
        "{} session(s), {} shortcut(s) in scope",
        parsed.sessions.len(),
        parsed.shortcuts.len(),
    );
    report_errors(&parsed);

    Ok(())
}

fn cmd_history(
    file: &Path,
    shorthand: &str,
    before: Option<String>,
    config: &Config,
) -> Result<()> {
    let log = load_log(file)?;
    let parsed = parse_log(&log, &config.shortcuts);
    report_errors(&parsed);

    let cache = LiftCache::new(&parsed.sessions);
    let before = before.unwrap_or_else(|| chrono::Local::now().date_naive().to_string());

    let mut occurrences = 0;
    for session in &parsed.sessions {
        for lift in &session.lifts {
            if lift.shorthand == shorthand {
                occurrences += 1;
                println!("{}  line {:>4}  {} {}", session.date, lift.line.unwrap_or(0), lift.shorthand, lift.work);
            }
        }
    }
    if occurrences == 0 {
        println!("No recorded lifts for {}", shorthand);
        return Ok(());
    }

    match cache.find_previous_lift(shorthand, &before) {
        Some(previous) => println!(
            "Previous before {}: {}  {} {}",
            before,
            previous.date.as_deref().unwrap_or("?"),
            previous.shorthand,
            previous.work,
        ),
        None => println!("No occurrence before {}", before),
    }

    Ok(())
}

fn cmd_export(file: &Path, out: &Path, config: &Config) -> Result<()> {
    let log = load_log(file)?;
    let parsed = parse_log(&log, &config.shortcuts);
    report_errors(&parsed);

    let count = export_csv(&parsed.sessions, out)?;
    println!("Wrote {} set row(s) to {}", count, out.display());

    Ok(())
}
