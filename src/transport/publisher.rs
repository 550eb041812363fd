use crate::domain::{AddBot, BotIdentity, BotSettings, GetSponsors, GetUserSubscriptions, UpdateBot};

use super::payload::Payload;

pub fn encode_get_sponsors(request: &GetSponsors) -> Payload {
    let options = request.options();
    Payload::new()
        .set("chat_id", request.chat_id())
        .set("user_id", request.user_id())
        .opt("first_name", options.first_name.clone())
        .opt("username", options.username.clone())
        .opt("language_code", options.language_code.clone())
        .opt("is_premium", options.is_premium)
        .set("action", options.action.unwrap_or_default().as_str())
        .opt("max_sponsors", options.max_sponsors)
        .opt_flag("get_links", options.get_links)
        .opt("exclude_resource_ids", options.exclude_resource_ids.clone())
        .opt("exclude_ads_ids", options.exclude_ads_ids.clone())
}

pub fn encode_add_bot(request: &AddBot) -> Payload {
    let payload = Payload::new().set("action", "add");
    let payload = match request.identity() {
        BotIdentity::Token(token) => payload.set("bot_token", token.as_str()),
        BotIdentity::Manual {
            bot_id,
            bot_name,
            bot_nickname,
        } => payload
            .set("bot_id", *bot_id)
            .set("bot_name", bot_name.as_str())
            .set("bot_nickname", bot_nickname.as_str()),
    };
    push_settings(payload, &request.settings)
}

pub fn encode_update_bot(request: &UpdateBot) -> Payload {
    let payload = Payload::new()
        .set("action", "update")
        .opt("bot_token", request.bot_token().map(|token| token.as_str()))
        .opt("bot_id", request.bot_id())
        .opt("bot_name", request.bot_name.clone())
        .opt("bot_nickname", request.bot_nickname.clone());
    push_settings(payload, &request.settings).opt_flag("is_on", request.is_on)
}

pub fn encode_bot_info(bot_id: i64) -> Payload {
    Payload::new().set("action", "info").set("bot_id", bot_id)
}

fn push_settings(payload: Payload, settings: &BotSettings) -> Payload {
    payload
        .opt("time_purge", settings.time_purge)
        .opt("max_sponsors", settings.max_sponsors)
        .opt_flag("get_links", settings.get_links)
        .opt_flag("show_quiz", settings.show_quiz)
        .opt_flag("gender_question", settings.gender_question)
        .opt_flag("age_question", settings.age_question)
        .opt("text_op", settings.text_op.clone())
        .opt("image_op", settings.image_op.clone())
        .opt("forbidden_themes", settings.forbidden_themes.clone())
}

pub fn encode_user_subscriptions(request: &GetUserSubscriptions) -> Payload {
    Payload::new()
        .set("user_id", request.user_id())
        .opt("links", request.links.clone())
        .opt("start_date", request.start_date.map(|date| date.to_wire()))
        .opt("end_date", request.end_date.map(|date| date.to_wire()))
}

pub fn encode_user_info(user_id: i64) -> Payload {
    Payload::new().set("user_id", user_id)
}
