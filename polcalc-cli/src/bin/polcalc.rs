use clap::{Parser, Subcommand, ValueEnum};
use polcalc_core::{Notation, evaluate};
use polcalc_http::server::ServerConfig;

/// Polcalc command line interface
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print its result
    Eval {
        /// The expression, tokens separated by single spaces
        expression: String,

        /// Notation the expression is written in
        #[arg(short, long, value_enum, default_value_t = NotationArg::Prefix)]
        notation: NotationArg,
    },
    /// Start the HTTP API server
    Serve {
        /// Host address to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NotationArg {
    Prefix,
    Infix,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Prefix => Notation::Prefix,
            NotationArg::Infix => Notation::Infix,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            expression,
            notation,
        } => match evaluate(&expression, notation.into()) {
            Ok(result) => println!("{result}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
        Commands::Serve { host, port } => {
            // Note: tracing is initialized by the server library, not here.
            println!("Starting polcalc HTTP server on {host}:{port}");
            polcalc_http::start_with_config(ServerConfig { host, port }).await?;
        }
    }

    Ok(())
}
