use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Query CLI for the HTTP forwarding gateway", long_about = None)]
struct Cli {
    /// Gateway base URL.
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway liveness
    Health,
    /// Fetch third-party posts through the gateway
    Posts {
        /// Fetch a single post by id
        #[arg(long)]
        id: Option<String>,
    },
    /// List blobs through the gateway
    Blobs {
        /// Restrict the listing to this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Blob credential; omit to use the gateway's configured one
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let request = match cli.command {
        Commands::Health => client.get(format!("{}/health", cli.url)),
        Commands::Posts { id } => {
            let mut request = client.get(format!("{}/api/posts", cli.url));
            if let Some(id) = id {
                request = request.query(&[("id", id)]);
            }
            request
        }
        Commands::Blobs { prefix, token } => {
            let mut request = client.get(format!("{}/api/blobs", cli.url));
            if let Some(prefix) = prefix {
                request = request.query(&[("prefix", prefix)]);
            }
            if let Some(token) = token {
                request = request.query(&[("token", token)]);
            }
            request
        }
    };

    print_response(request.send().await?).await?;
    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
