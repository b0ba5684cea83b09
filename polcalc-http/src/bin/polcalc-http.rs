use clap::Parser;
use polcalc_http::server::ServerConfig;

/// Polcalc HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
    };

    println!(
        "Starting polcalc HTTP server on {}:{}",
        config.host, config.port
    );
    polcalc_http::start_with_config(config).await?;

    Ok(())
}
