use std::fmt;

use crate::domain::{CreateOrder, OrderOptions, OrderSchedule, UpdateOrder, UserParameters};

use super::payload::Payload;

pub fn encode_create_order(request: &CreateOrder) -> Payload {
    let options = request.options();
    let payload = Payload::new()
        .set("action", "create")
        .set("link", request.link().as_str())
        .set("ads_type", request.ads_type().as_str())
        .set("quantity_all", request.quantity_all());

    // Server-side defaults differ from "unset" for these, so they are always sent.
    let defaults = OrderOptions {
        is_on: Some(options.is_on.unwrap_or(true)),
        to_bot_member: Some(options.to_bot_member.unwrap_or(0)),
        track_unsubscriptions: Some(options.track_unsubscriptions.unwrap_or(true)),
        is_lite: Some(options.is_lite.unwrap_or(false)),
        ..options.clone()
    };
    push_options(payload, &defaults)
}

pub fn encode_update_order(request: &UpdateOrder) -> Payload {
    let payload = Payload::new()
        .set("action", "update")
        .set("order_id", request.order_id())
        .opt("link", request.link.as_ref().map(|link| link.as_str()))
        .opt_flag("in_archive", request.in_archive)
        .opt("quantity_all", request.quantity_all);
    push_options(payload, &request.options)
}

pub fn encode_order_info(order_id: i64) -> Payload {
    Payload::new().set("action", "info").set("order_id", order_id)
}

fn push_options(payload: Payload, options: &OrderOptions) -> Payload {
    payload
        .opt("name", options.name.clone())
        .opt_flag("is_on", options.is_on)
        .opt("quantity_day", options.quantity_day)
        .opt("price", options.price)
        .opt("price_premium", options.price_premium)
        .opt(
            "bot_token",
            options.bot_token.as_ref().map(|token| token.as_str()),
        )
        .opt("to_bot_member", options.to_bot_member)
        .opt("track_unsubscriptions", options.track_unsubscriptions)
        .opt_flag("is_lite", options.is_lite)
        .opt("sub_speed", options.sub_speed)
        .opt(
            "user_parameters",
            options.user_parameters.as_ref().map(encode_user_parameters),
        )
        .opt("forbidden_themes", options.forbidden_themes.clone())
        .opt(
            "order_schedule",
            options.order_schedule.as_ref().map(encode_order_schedule),
        )
}

pub fn encode_user_parameters(params: &UserParameters) -> Payload {
    Payload::new()
        .opt("gender", params.gender.map(|gender| gender.as_str()))
        .opt("only_premium", params.only_premium)
        .opt("languages", params.languages.clone())
        .opt("countries", params.countries.clone())
        .opt("cities", params.cities.clone())
        .opt("devicestype", params.devicestype.clone())
        .opt("devicesos", params.devicesos.clone())
        .opt("ages", params.ages.clone())
        .opt_flag("has_photo", params.has_photo)
        .opt_flag("has_username", params.has_username)
        .opt_flag("has_bio", params.has_bio)
        .opt_flag("has_first_name", params.has_first_name)
        .opt_flag("has_ru_name", params.has_ru_name)
        .opt_flag("has_fake_check", params.has_fake_check)
        .opt("old_account", params.old_account)
}

pub fn encode_order_schedule(schedule: &OrderSchedule) -> Payload {
    Payload::new()
        .opt("start_datetime", schedule.start_datetime.map(wire))
        .opt("start_time", schedule.start_time.map(wire))
        .opt("end_time", schedule.end_time.map(wire))
        .opt("excluded_days", schedule.excluded_days.clone())
}

fn wire(value: impl fmt::Display) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::domain::{AdsType, BotToken, Gender, Link, TimeOfDay};

    fn link() -> Link {
        Link::new("https://t.me/channel").unwrap()
    }

    #[test]
    fn create_order_applies_defaults_and_prunes_unset() {
        let request = CreateOrder::new(link(), AdsType::Channel, 500, OrderOptions::default());

        assert_eq!(
            encode_create_order(&request).into_json(),
            json!({
                "action": "create",
                "link": "https://t.me/channel",
                "ads_type": "channel",
                "quantity_all": 500,
                "is_on": 1,
                "to_bot_member": 0,
                "track_unsubscriptions": true,
                "is_lite": 0
            })
        );
    }

    #[test]
    fn create_order_keeps_explicit_falsy_values() {
        let request = CreateOrder::new(
            link(),
            AdsType::Bot,
            100,
            OrderOptions {
                is_on: Some(false),
                track_unsubscriptions: Some(false),
                bot_token: Some(BotToken::new("123:abc").unwrap()),
                forbidden_themes: Some(Vec::new()),
                ..Default::default()
            },
        );

        let body = encode_create_order(&request).into_json();
        assert_eq!(body["is_on"], json!(0));
        assert_eq!(body["track_unsubscriptions"], json!(false));
        assert_eq!(body["bot_token"], json!("123:abc"));
        assert_eq!(body["forbidden_themes"], json!([]));
        assert!(body.get("price").is_none());
        assert!(body.get("name").is_none());
    }

    #[test]
    fn update_order_sends_only_changed_fields() {
        let mut request = UpdateOrder::new(77);
        request.in_archive = Some(false);
        request.options.price = Some(2.5);

        assert_eq!(
            encode_update_order(&request).into_json(),
            json!({
                "action": "update",
                "order_id": 77,
                "in_archive": 0,
                "price": 2.5
            })
        );
    }

    #[test]
    fn order_info_payload() {
        assert_eq!(
            encode_order_info(5).into_json(),
            json!({"action": "info", "order_id": 5})
        );
    }

    #[test]
    fn nested_targeting_and_schedule_are_pruned_and_normalized() {
        let request = CreateOrder::new(
            link(),
            AdsType::Channel,
            10,
            OrderOptions {
                user_parameters: Some(UserParameters {
                    gender: Some(Gender::Female),
                    languages: Some(vec![1, 2]),
                    has_photo: Some(true),
                    has_bio: Some(false),
                    ..Default::default()
                }),
                order_schedule: Some(OrderSchedule {
                    start_datetime: Some(
                        NaiveDate::from_ymd_opt(2024, 3, 5)
                            .unwrap()
                            .and_hms_opt(8, 0, 0)
                            .unwrap()
                            .into(),
                    ),
                    start_time: Some(TimeOfDay::parse("9:30").unwrap()),
                    end_time: None,
                    excluded_days: Some(vec![7]),
                }),
                ..Default::default()
            },
        );

        let body = encode_create_order(&request).into_json();
        assert_eq!(
            body["user_parameters"],
            json!({
                "gender": "female",
                "languages": [1, 2],
                "has_photo": 1,
                "has_bio": 0
            })
        );
        assert_eq!(
            body["order_schedule"],
            json!({
                "start_datetime": "2024-03-05 08:00:00",
                "start_time": "09:30",
                "excluded_days": [7]
            })
        );
    }
}
