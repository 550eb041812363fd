use std::io;

use subgram::{ButtonTexts, Credentials, GetSponsors, SponsorOptions, SubgramClient};
use tracing_subscriber::EnvFilter;

fn required_i64(name: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let raw = std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })?;
    Ok(raw.trim().parse()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let user_id = required_i64("SUBGRAM_USER_ID")?;
    let chat_id = std::env::var("SUBGRAM_CHAT_ID")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(user_id);

    let client = SubgramClient::new(Credentials::from_env()?);
    let request = GetSponsors::new(
        chat_id,
        user_id,
        SponsorOptions {
            get_links: Some(true),
            ..Default::default()
        },
    );

    let keyboard = client
        .publisher()
        .sponsor_keyboard(request, &ButtonTexts::default())
        .await?;
    match keyboard {
        Some(keyboard) => println!("keyboard: {keyboard:?}"),
        None => println!("nothing to subscribe to"),
    }

    client.close();
    Ok(())
}
