use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use issueguard::cli::check::CheckArgs;
use issueguard::cli::run::RunArgs;
use issueguard::{FormKind, Outcome, Result};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "issueguard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate templated GitHub issue submissions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the triggering issue and comment/label/close it (CI entry point)
    Run(RunArgs),

    /// Validate a saved issue body locally without calling the API
    Check(CheckArgs),

    /// Print an issue body skeleton for a form
    Template {
        /// Form type
        #[arg(value_enum)]
        form: FormKind,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "issueguard=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    match runtime.block_on(run_async(cli)) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

async fn run_async(cli: Cli) -> Result<i32> {
    let outcome: Outcome = match cli.command {
        Commands::Run(args) => issueguard::cli::run::run(&args).await?,

        Commands::Check(args) => issueguard::cli::check::run(&args)?,

        Commands::Template { form } => {
            issueguard::cli::template::run(form);
            return Ok(0);
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "issueguard", &mut io::stdout());
            return Ok(0);
        }
    };

    Ok(outcome.exit_code())
}
