//! Numeral conversion service entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use radix_convert::api::{bind_listener, serve, AppState};
use radix_convert::config::Config;
use radix_convert::converter;
use radix_convert::metrics;
use radix_convert::utils::shutdown_signal;

/// Numeral conversion service.
#[derive(Parser, Debug)]
#[command(name = "radix-convert")]
#[command(about = "Convert numerals between decimal, binary and hexadecimal over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides RADIX_PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides RADIX_PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Convert a single value and print the result.
    Convert {
        /// Numeral to convert.
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Input format: dec, bin or hex.
        input_format: String,
        /// Output format: dec, bin or hex.
        output_format: String,
    },

    /// Check configuration validity.
    CheckConfig,
}

impl Args {
    /// Port requested on the command line; `serve --port` wins over `--port`.
    fn port_override(&self) -> Option<u16> {
        match &self.command {
            Some(Command::Serve { port: Some(port) }) => Some(*port),
            _ => self.port,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::load()?;
    if let Some(port) = args.port_override() {
        config.port = port;
    }

    init_logging(&config, args.verbose);

    match args.command {
        Some(Command::Convert {
            value,
            input_format,
            output_format,
        }) => {
            println!("{}", cmd_convert(&value, &input_format, &output_format)?);
            Ok(())
        }
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve { .. }) | None => cmd_serve(config).await,
    }
}

fn log_filter(config: &Config, verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("radix_convert=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let registry = tracing_subscriber::registry().with(log_filter(config, verbose));
    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let app_state = if config.metrics_enabled {
        let handle = metrics::install_prometheus()?;
        info!("Prometheus metrics enabled on /metrics");
        AppState::with_prometheus(handle)
    } else {
        AppState::new()
    };

    info!(version = env!("CARGO_PKG_VERSION"), "radix-convert starting");
    let listener = bind_listener(&config).await?;
    serve(listener, app_state, shutdown_signal()).await?;
    Ok(())
}

/// Convert one value from the command line.
fn cmd_convert(value: &str, input_format: &str, output_format: &str) -> anyhow::Result<String> {
    Ok(converter::convert(value, input_format, output_format)?)
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("RADIX-CONVERT - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", config.socket_addr()?);
    println!("  Log Level: {}", config.log_level);
    println!("  JSON Logs: {}", config.log_json);
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
