use std::io;

use subgram::domain::Link;
use subgram::{AdsType, CreateOrder, Credentials, OrderOptions, SubgramClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let link = std::env::var("SUBGRAM_ORDER_LINK").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SUBGRAM_ORDER_LINK environment variable is required",
        )
    })?;
    let quantity = std::env::var("SUBGRAM_ORDER_QUANTITY")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(100);

    let client = SubgramClient::new(Credentials::from_env()?);
    let request = CreateOrder::new(
        Link::new(link)?,
        AdsType::Channel,
        quantity,
        OrderOptions {
            name: Some("demo order".to_owned()),
            is_on: Some(false),
            ..Default::default()
        },
    );

    let response = client.advertiser().create_order(request).await?;
    println!(
        "status: {:?}, code: {}, message: {:?}, order: {:?}",
        response.status, response.code, response.message, response.response
    );

    client.close();
    Ok(())
}
