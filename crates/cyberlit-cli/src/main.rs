//! cyberlit CLI: the learner-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(
    name = "cyberlit",
    version,
    about = "Cybersecurity literacy assessment and progress tracker"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for stored progress (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for `results`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ResultFormat {
    Text,
    Markdown,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the assessment interactively
    Quiz,

    /// Score a prepared answer file
    Submit {
        /// JSON array with one selected option (or null) per question
        #[arg(long)]
        answers: PathBuf,
    },

    /// Show the latest quiz result
    Results {
        #[arg(long, value_enum, default_value = "text")]
        format: ResultFormat,
    },

    /// List learning modules with completion
    Modules,

    /// List a module's articles
    Articles {
        #[arg(long)]
        module: String,
    },

    /// Mark an article read or unread
    Toggle {
        #[arg(long)]
        module: String,

        /// Article title, exactly as listed by `articles`
        #[arg(long)]
        article: String,
    },

    /// Ask the assistant a question
    Ask {
        /// The question text
        text: String,
    },

    /// Validate a question bank TOML file
    Validate {
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create a starter config and sample question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cyberlit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let opts = commands::GlobalOpts {
        config: cli.config,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        Commands::Quiz => commands::quiz::execute(&opts).await,
        Commands::Submit { answers } => commands::submit::execute(&opts, answers).await,
        Commands::Results { format } => commands::results::execute(&opts, format).await,
        Commands::Modules => commands::modules::list(&opts).await,
        Commands::Articles { module } => commands::modules::articles(&opts, &module).await,
        Commands::Toggle { module, article } => {
            commands::modules::toggle(&opts, &module, &article).await
        }
        Commands::Ask { text } => commands::ask::execute(&opts, &text).await,
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
