use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "fetcher-cli")]
#[command(about = "Management CLI for the fetch daemon", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API is online
    Info,
    /// Show daemon status
    Status,
    /// Print the most recent daemon log lines
    Log,
    /// Run a fetch now
    Fetch,
    /// Run a sort now
    Sort,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Info => {
            let res = client.get(format!("{}/", base)).send().await?;
            println!("{}", res.text().await?);
        }
        Commands::Status => {
            let res = client.get(format!("{}/status", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Log => {
            let res = client.get(format!("{}/log", base)).send().await?;
            print_log(res).await?;
        }
        Commands::Fetch => {
            let res = client.post(format!("{}/force/fetch", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Sort => {
            let res = client.post(format!("{}/force/sort", base)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

async fn print_log(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    if !res.status().is_success() {
        return print_response(res).await;
    }

    let json: Value = res.json().await?;
    if let Some(lines) = json.get("log").and_then(Value::as_array) {
        for line in lines.iter().filter_map(Value::as_str) {
            println!("{}", line);
        }
    }
    Ok(())
}
