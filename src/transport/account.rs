use crate::domain::{ApiToken, ExclusionTarget, GetStatistic, ToggleExclusion};

use super::payload::Payload;

pub fn encode_api_token_query(api_token: &str) -> Payload {
    Payload::new().set(ApiToken::FIELD, api_token)
}

pub fn encode_statistic_query(request: &GetStatistic, api_token: &str) -> Payload {
    let action = request.action();
    encode_api_token_query(api_token)
        .set("action", action.as_str())
        .opt("ads_id", action.ads_id())
        .opt("bot_id", action.bot_id())
        .opt("start_date", request.start_date.map(|date| date.to_wire()))
        .opt("end_date", request.end_date.map(|date| date.to_wire()))
        .set("output_format", "json")
}

pub fn encode_toggle_exclusion(request: &ToggleExclusion) -> Payload {
    let (ads_id, bot_id) = match request.target {
        ExclusionTarget::Advertiser { ads_id, bot_id } => (ads_id, Some(bot_id)),
        ExclusionTarget::Publisher { ads_id, bot_id } => (ads_id, bot_id),
    };

    Payload::new()
        .set("action", request.action.as_str())
        .set("context", request.target.context())
        .set("ads_id", ads_id)
        .opt("bot_id", bot_id)
}
