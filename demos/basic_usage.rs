//! Basic usage: health, account info, a text prompt, stats and balance.
//!
//! The API key is read from RORAIMA_API_KEY by this program (the library
//! itself never reads the environment):
//!   RORAIMA_API_KEY=sk-... cargo run --example basic_usage

use roraima_ai::types::{InfoResponse, ProcessResponse, StatsResponse};
use roraima_ai::{Error, ErrorClass, RoraimaClient, StatsPeriod};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Ok(api_key) = std::env::var("RORAIMA_API_KEY") else {
        eprintln!("Set RORAIMA_API_KEY to run this example.");
        return Ok(());
    };
    let client = RoraimaClient::new(api_key)?;

    if let Err(e) = run(&client).await {
        report(&e);
    }
    Ok(())
}

async fn run(client: &RoraimaClient) -> roraima_ai::Result<()> {
    let health = client.get_health().await?;
    println!("Status: {}", health["status"]);

    let info: InfoResponse = serde_json::from_value(client.get_info().await?).unwrap_or_default();
    println!("User: {}", info.user.name);
    println!("Balance: ${:.4}", info.user.balance);

    let text: ProcessResponse = serde_json::from_value(
        client
            .process_text("Explain artificial intelligence in two lines")
            .await?,
    )
    .unwrap_or_default();
    println!("Answer: {}", text.content.unwrap_or_default());
    match text.metrics.and_then(|m| m.cost_estimate) {
        Some(cost) => println!("Cost: {}", cost),
        None => println!("Cost: N/A"),
    }

    let stats: StatsResponse =
        serde_json::from_value(client.get_stats_for(StatsPeriod::Day).await?).unwrap_or_default();
    println!("Requests in the last 24h: {}", stats.summary.total_requests);
    println!("Cost in the last 24h: ${:.6}", stats.summary.total_cost);

    println!("Final balance: ${:.4}", client.get_balance().await?);
    Ok(())
}

fn report(e: &Error) {
    let Some(api) = e.as_client_error() else {
        eprintln!("Error: {}", e);
        return;
    };
    eprintln!("API error: {} (status {})", api.message, api.status);
    match api.class() {
        ErrorClass::Authentication => eprintln!("Hint: check that your API key is correct"),
        ErrorClass::InsufficientBalance => eprintln!("Hint: top up your account balance"),
        ErrorClass::ServerError => eprintln!("Hint: try again in a few minutes"),
        ErrorClass::Transport => eprintln!("Hint: check your network connection"),
        _ => {}
    }
}
