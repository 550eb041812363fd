//! Domain layer: strong types with validation and invariants (no I/O).

mod keyboard;
mod request;
mod response;
mod validation;
mod value;

pub use keyboard::{ButtonTexts, DONE_CALLBACK_DATA, KeyboardButton, SponsorKeyboard};
pub use request::{
    AddBot, AdsType, BotIdentity, BotSettings, CreateOrder, ExclusionAction, ExclusionTarget,
    Gender, GetSponsors, GetStatistic, GetUserSubscriptions, OrderOptions, OrderSchedule,
    SponsorAction, SponsorOptions, StatisticAction, ToggleExclusion, UpdateBot, UpdateOrder,
    UserParameters,
};
pub use response::{
    AdsFilters, BalanceResponse, Bot, BotAdded, BotBalance, BotResult, BotsFilters, BotsResponse,
    CreatedOrder, FilterId, FilterValue, Filters, FiltersResponse, LanguageStat, OrderCoefficients,
    OrderInfo, OrderInfoResponse, OrderResponse, OrderState, RequestsStats, ResourceId, Sponsor,
    SponsorKind, SponsorsResponse, StatisticData, StatisticResponse, Status, SubscriptionStatus,
    TableRow, ToggleExclusionResponse, UserInfo, UserInfoResponse,
};
pub use validation::ValidationError;
pub use value::{ApiKey, ApiToken, BotToken, DateTimeValue, DateValue, Link, SecretKey, TimeOfDay};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_reject_empty() {
        assert!(matches!(
            SecretKey::new("   "),
            Err(ValidationError::Empty {
                field: SecretKey::FIELD
            })
        ));
        assert!(matches!(
            ApiToken::new(""),
            Err(ValidationError::Empty {
                field: ApiToken::FIELD
            })
        ));
        assert!(matches!(
            ApiKey::new("\t"),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn link_is_trimmed() {
        let link = Link::new("  https://t.me/channel ").unwrap();
        assert_eq!(link.as_str(), "https://t.me/channel");
    }

    #[test]
    fn manual_bot_identity_requires_every_part() {
        assert!(matches!(
            BotIdentity::manual(1, "", "nick"),
            Err(ValidationError::MissingBotIdentity)
        ));
        assert!(matches!(
            BotIdentity::manual(1, "Name", " "),
            Err(ValidationError::MissingBotIdentity)
        ));

        let identity = BotIdentity::manual(1, "Name", "@nick").unwrap();
        assert_eq!(
            identity,
            BotIdentity::Manual {
                bot_id: 1,
                bot_name: "Name".to_owned(),
                bot_nickname: "nick".to_owned(),
            }
        );
    }

    #[test]
    fn statistic_action_carries_required_ids() {
        let action = StatisticAction::Source { ads_id: 7 };
        assert_eq!(action.as_str(), "source");
        assert_eq!(action.ads_id(), Some(7));
        assert_eq!(action.bot_id(), None);

        let action = StatisticAction::Sponsor { bot_id: 9 };
        assert_eq!(action.as_str(), "sponsor");
        assert_eq!(action.bot_id(), Some(9));
        assert_eq!(StatisticAction::AllAds.ads_id(), None);
    }
}
