use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "timecraft-cli", version, about = "Timecraft CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign schedule items to non-overlapping lanes
    Layout(commands::layout::LayoutArgs),
    /// Show the visible hour window of a schedule
    Window(commands::window::WindowArgs),
    /// Time string utilities
    Time {
        #[command(subcommand)]
        action: commands::time::TimeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Layout(args) => commands::layout::run(args),
        Commands::Window(args) => commands::window::run(args),
        Commands::Time { action } => commands::time::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
