use subgram::{Credentials, SubgramClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = SubgramClient::new(Credentials::from_env()?);
    let response = client.account().balance().await?;
    println!(
        "status: {:?}, balance: {:?}, bots: {:?}",
        response.status, response.balance, response.bots_info
    );

    client.close();
    Ok(())
}
