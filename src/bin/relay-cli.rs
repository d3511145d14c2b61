use std::process::ExitCode;

use clap::{Parser, Subcommand};
use url::Url;

use fetch_relay::http::FETCH_PATH;
use fetch_relay::relay::{Target, TARGET_PARAM};

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Companion CLI for the fetch relay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the relay would accept a target
    Check {
        /// Target URL
        url: String,
    },
    /// Fetch a target through a running relay
    Fetch {
        /// Target URL
        url: String,

        /// Base URL of the relay
        #[arg(short, long, default_value = "http://localhost:8080")]
        relay: String,

        /// Disable HTTP_PROXY / HTTPS_PROXY for the call to the relay
        #[arg(long)]
        no_proxy: bool,
    },
}

/// `<relay>/fetch?url=<target>`, with the target form-encoded.
fn fetch_endpoint(relay: &str, target: &str) -> Result<Url, url::ParseError> {
    let mut endpoint = Url::parse(relay)?.join(FETCH_PATH)?;
    endpoint.query_pairs_mut().clear().append_pair(TARGET_PARAM, target);
    Ok(endpoint)
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { url } => match url.parse::<Target>() {
            Ok(target) => {
                println!("accepted: {target}");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                println!("rejected: {e}");
                Ok(ExitCode::FAILURE)
            }
        },
        Commands::Fetch { url, relay, no_proxy } => {
            let endpoint = fetch_endpoint(&relay, &url)?;

            let mut builder = reqwest::Client::builder();
            if no_proxy {
                builder = builder.no_proxy();
            }
            let res = builder.build()?.get(endpoint).send().await?;

            let status = res.status();
            eprintln!("Status: {status}");
            let body = res.bytes().await?;
            println!("{}", String::from_utf8_lossy(&body));

            Ok(if status.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
