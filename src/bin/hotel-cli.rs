use clap::{Parser, Subcommand};
use hotel_browser::client::HotelClient;

#[derive(Parser)]
#[command(name = "hotel-cli")]
#[command(about = "Command-line client for the hotel browser", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all hotels
    List,
    /// Show one hotel
    Show { id: u64 },
    /// Book a hotel (placeholder action)
    Book { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = HotelClient::new(&cli.url);

    match cli.command {
        Commands::List => {
            let hotels = client.list().await?;
            println!("{}", serde_json::to_string_pretty(&hotels)?);
        }
        Commands::Show { id } => {
            let hotel = client.show(id).await?;
            println!("{}", serde_json::to_string_pretty(&hotel)?);
        }
        Commands::Book { id } => {
            client.book(id).await?;
            println!("Booking request for hotel {} accepted", id);
        }
    }

    Ok(())
}
