//! wowarmory — World of Warcraft Armory lookups from the command line.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use wowarmory::query::{DEFAULT_CHARACTER, DEFAULT_REALM};
use wowarmory::{ArmoryClient, CharacterQuery};
use wowarmory_cli::commands;
use wowarmory_cli::config::{resolve_options, ConfigFlags};
use wowarmory_cli::output::{self, Output, Styled};

#[derive(Parser)]
#[command(
    name = "wowarmory",
    about = "Character and realm lookups against the World of Warcraft Armory",
    version,
    after_help = "Run 'wowarmory' with no command to look up xoq on hellfire."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output even when CLICOLOR is set
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Armory base URL (also ARMORY_URL)
    #[arg(long, global = true)]
    armory_url: Option<String>,

    /// Realm status feed URL (also ARMORY_STATUS_URL)
    #[arg(long, global = true)]
    status_url: Option<String>,

    /// Request timeout in milliseconds, 0 for none (also ARMORY_TIMEOUT_MS)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a character sheet
    Character {
        /// Realm the character lives on
        #[arg(short, long, default_value = DEFAULT_REALM)]
        realm: String,
        /// Character name
        #[arg(short, long, default_value = DEFAULT_CHARACTER)]
        character: String,
        /// Print level, race, faction, guild and battle group too
        #[arg(long)]
        detail: bool,
    },
    /// Show realm status (all realms, or just REALM)
    Status {
        /// Realm to check
        realm: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let out = if cli.json {
        Output::json()
    } else {
        Output::text(Styled::from_env(cli.no_color))
    };

    let result = run(cli, &out).await;

    // 0 = success, 1 = any failure
    if let Err(e) = &result {
        let code = output::report_error(
            &out,
            e,
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        );
        std::process::exit(code);
    }

    result
}

async fn run(cli: Cli, out: &Output) -> Result<()> {
    let flags = ConfigFlags {
        armory_url: cli.armory_url,
        status_url: cli.status_url,
        timeout_ms: cli.timeout_ms,
    };
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        None => {
            let client = build_client(&flags)?;
            commands::character::run(&client, &CharacterQuery::default(), false, out, &mut stdout)
                .await
        }
        Some(Commands::Character {
            realm,
            character,
            detail,
        }) => {
            let client = build_client(&flags)?;
            let query = CharacterQuery::new(realm, character);
            commands::character::run(&client, &query, detail, out, &mut stdout).await
        }
        Some(Commands::Status { realm }) => {
            let client = build_client(&flags)?;
            commands::status::run(&client, realm.as_deref(), out, &mut stdout).await
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "wowarmory", &mut stdout);
            Ok(())
        }
    }
}

fn build_client(flags: &ConfigFlags) -> Result<ArmoryClient> {
    let options = resolve_options(flags)?;
    tracing::debug!(?options, "resolved client options");
    Ok(ArmoryClient::with_options(&options)?)
}
