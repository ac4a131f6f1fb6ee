use clap::{Parser, Subcommand};
use roster::{commands, config, dataset, tui};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "roster")]
#[command(
    about = "Club roster history browser",
    long_about = "Club roster history browser\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the roster for a season
    Roster {
        /// Season token (e.g. 2016.1), defaults to the configured season
        #[arg(short, long)]
        season: Option<String>,
    },
    /// List all known seasons
    Seasons,
    /// Display one player's detail card
    Player {
        /// Player nickname (exact match)
        nickname: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("default_season: {}", cfg.default_season);
    println!("selector: {:?}", cfg.selector);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::read();

    let (log_level, log_file) = resolve_log_config(&cli, &config);
    init_logging(log_level, log_file);

    let players = dataset::load()?;
    tracing::info!("loaded {} players from bundled dataset", players.len());

    match cli.command {
        Some(Commands::Roster { season }) => {
            let season = commands::resolve_season(season, &config);
            commands::roster::run(&players, &season)
        }
        Some(Commands::Seasons) => commands::seasons::run(&players),
        Some(Commands::Player { nickname }) => commands::player::run(&players, &nickname),
        Some(Commands::Config) => {
            handle_config_command();
            Ok(())
        }
        None => tui::run(players, &config),
    }
}
