use subgram::{Credentials, DateValue, GetStatistic, StatisticAction, SubgramClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let action = match std::env::var("SUBGRAM_BOT_ID") {
        Ok(raw) => StatisticAction::Bots {
            bot_id: raw.trim().parse()?,
        },
        Err(_) => StatisticAction::AllAds,
    };
    let mut request = GetStatistic::new(action);
    if let Ok(start) = std::env::var("SUBGRAM_START_DATE") {
        request.start_date = Some(DateValue::parse(&start)?);
    }
    if let Ok(end) = std::env::var("SUBGRAM_END_DATE") {
        request.end_date = Some(DateValue::parse(&end)?);
    }

    let client = SubgramClient::new(Credentials::from_env()?);
    let response = client.account().statistic(request).await?;
    match response.data {
        Some(data) => println!(
            "subscribers: {:?}, value: {:?}, rows: {}",
            data.total_subscribers,
            data.total_value,
            data.table_data.map_or(0, |rows| rows.len())
        ),
        None => println!("status: {:?}, no data", response.status),
    }

    client.close();
    Ok(())
}
