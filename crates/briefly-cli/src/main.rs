use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "briefly-cli", version, about = "Briefly CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reveal state machine control
    Reveal {
        #[command(subcommand)]
        action: commands::reveal::RevealAction,
    },
    /// Liked facts
    Liked {
        #[command(subcommand)]
        action: commands::liked::LikedAction,
    },
    /// Archived scoops
    Archive {
        #[command(subcommand)]
        action: commands::archive::ArchiveAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print countdowns to the unlock instant and local midnight
    Countdown,
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Reveal { action } => commands::reveal::run(action).await,
        Commands::Liked { action } => commands::liked::run(action),
        Commands::Archive { action } => commands::archive::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Countdown => commands::countdown::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "briefly-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
