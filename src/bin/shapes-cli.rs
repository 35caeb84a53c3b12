use clap::{Parser, Subcommand};
use serde_json::Value;

use shape_service::registry::Shape;

#[derive(Parser)]
#[command(name = "shapes-cli")]
#[command(about = "Management CLI for the shape registry service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every shape in the registry
    List,
    /// Fetch a single shape by id
    Get { id: i64 },
    /// Append a new shape
    Create { name: String, sides: i64, id: i64 },
    /// Replace the name and side count of an existing shape
    Update { id: i64, name: String, sides: i64 },
    /// Update a shape, inserting it when absent
    Upsert { id: i64, name: String, sides: i64 },
    /// Remove a shape by id
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let res = client.get(format!("{}/shapes", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client
                .get(format!("{}/shapes/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Create { name, sides, id } => {
            let body = Shape {
                item_name: name,
                no_of_sides: sides,
                id,
            };
            let res = client
                .post(format!("{}/shapes", cli.url))
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Update { id, name, sides } => {
            let body = Shape {
                item_name: name,
                no_of_sides: sides,
                id,
            };
            let res = client
                .put(format!("{}/shapes/{}", cli.url, id))
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Upsert { id, name, sides } => {
            let body = Shape {
                item_name: name,
                no_of_sides: sides,
                id,
            };
            let res = client
                .put(format!("{}/shapes/upsert/{}", cli.url, id))
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Delete { id } => {
            let res = client
                .delete(format!("{}/shapes/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
