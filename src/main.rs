use anyhow::Result;
use clap::{Parser, Subcommand};
use qspin::config::Config;
use qspin::models::{ServiceTier, ServiceType};
use qspin::output::Format;
use qspin::tui::router::ViewId;
use qspin::{commands, tui};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), env!("QSPIN_VERSION_SUFFIX"));

#[derive(Parser)]
#[command(name = "qspin")]
#[command(author, version = VERSION, about = "QuickSpin - manage cloud services from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default when no command is given)
    Dashboard {
        /// Screen to open instead of the landing page
        #[arg(long, value_enum)]
        view: Option<ViewId>,
    },

    /// Authentication commands
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// Manage services
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },

    /// Manage local configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show detailed version information
    Version,
}

#[derive(Subcommand)]
enum AuthCommands {
    /// Log in with email and password
    Login {
        /// Email address (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log out and clear stored credentials
    Logout,

    /// Show the currently authenticated user
    Whoami {
        /// Output format (table, json)
        #[arg(short, long, value_enum)]
        output: Option<Format>,
    },

    /// Print the stored access token (for scripting)
    Token,

    /// Exchange the refresh token for a new access token
    Refresh,
}

#[derive(Subcommand)]
enum ServiceCommands {
    /// List services
    List {
        /// Output format (table, json)
        #[arg(short, long, value_enum)]
        output: Option<Format>,
    },

    /// Show one service in detail
    Describe {
        /// Service id or name
        service: String,

        #[arg(short, long, value_enum)]
        output: Option<Format>,
    },

    /// Provision a new service
    Create {
        /// Service name
        name: String,

        /// Service type (redis, rabbitmq, postgresql, mongodb, mysql, elasticsearch)
        #[arg(short = 't', long = "type")]
        service_type: Option<ServiceType>,

        /// Pricing tier (developer, basic, standard, pro, premium)
        #[arg(long)]
        tier: Option<ServiceTier>,

        /// Deployment region
        #[arg(short, long)]
        region: Option<String>,

        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long, value_enum)]
        output: Option<Format>,
    },

    /// Delete a service
    Delete {
        /// Service id or name
        service: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Move a service to a different tier
    Scale {
        /// Service id or name
        service: String,

        /// Target tier
        #[arg(long)]
        tier: ServiceTier,

        #[arg(short, long, value_enum)]
        output: Option<Format>,
    },

    /// Tail recent log lines for a service
    Logs {
        /// Service id or name
        service: String,

        /// Number of lines to fetch
        #[arg(short = 'n', long, default_value = "100")]
        lines: usize,

        #[arg(short, long, value_enum)]
        output: Option<Format>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    View,

    /// Read one config value
    Get {
        /// Dotted key, e.g. `defaults.region`
        key: String,
    },

    /// Set one config value
    Set {
        /// Dotted key, e.g. `defaults.region`
        key: String,
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Logs go to stderr so they never corrupt command
    // output or the dashboard's alternate screen.
    let filter = if cli.verbose {
        "qspin=debug"
    } else {
        "qspin=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;

    match cli.command {
        None => tui::launch_dashboard(config).await,
        Some(Commands::Dashboard { view }) => match view {
            Some(view) => tui::launch_view(config, view).await,
            None => tui::launch_dashboard(config).await,
        },
        Some(Commands::Auth { command }) => match command {
            AuthCommands::Login { email, password } => {
                commands::auth::login(config, email, password).await
            }
            AuthCommands::Logout => commands::auth::logout(config).await,
            AuthCommands::Whoami { output } => commands::auth::whoami(config, output).await,
            AuthCommands::Token => commands::auth::token(config).await,
            AuthCommands::Refresh => commands::auth::refresh(config).await,
        },
        Some(Commands::Service { command }) => match command {
            ServiceCommands::List { output } => commands::service::list(config, output).await,
            ServiceCommands::Describe { service, output } => {
                commands::service::describe(config, service, output).await
            }
            ServiceCommands::Create {
                name,
                service_type,
                tier,
                region,
                description,
                output,
            } => {
                commands::service::create(
                    config,
                    name,
                    service_type,
                    tier,
                    region,
                    description,
                    output,
                )
                .await
            }
            ServiceCommands::Delete { service, yes } => {
                commands::service::delete(config, service, yes).await
            }
            ServiceCommands::Scale {
                service,
                tier,
                output,
            } => commands::service::scale(config, service, tier, output).await,
            ServiceCommands::Logs {
                service,
                lines,
                output,
            } => commands::service::logs(config, service, lines, output).await,
        },
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { force } => commands::config::init(config, force),
            ConfigCommands::View => commands::config::view(config),
            ConfigCommands::Get { key } => commands::config::get(config, key),
            ConfigCommands::Set { key, value } => commands::config::set(config, key, value),
        },
        Some(Commands::Version) => {
            println!("qspin {VERSION}");
            println!("commit:     {}", env!("QSPIN_GIT_HASH"));
            println!("built:      {}", env!("QSPIN_BUILD_TIME"));
            println!("api url:    {}", config.api_url());
            Ok(())
        }
    }
}
