use serde::Deserialize;

use crate::domain::validation::ValidationError;
use crate::domain::value::{BotToken, DateTimeValue, DateValue, Link, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of advertised resource (`ads_type`).
pub enum AdsType {
    Channel,
    Bot,
    Resource,
}

impl AdsType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Bot => "bot",
            Self::Resource => "resource",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    All,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::All => "all",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// Audience targeting for an order. Every targeting option raises the price
/// per subscriber by a server-side coefficient.
///
/// Unset fields are omitted from the request.
pub struct UserParameters {
    pub gender: Option<Gender>,
    /// 0 - anyone, 1 - Premium only, 2 - without Premium.
    pub only_premium: Option<u8>,
    /// Language ids from `filters`.
    pub languages: Option<Vec<i64>>,
    pub countries: Option<Vec<i64>>,
    pub cities: Option<Vec<i64>>,
    /// `desktop`, `mobile`.
    pub devicestype: Option<Vec<String>>,
    pub devicesos: Option<Vec<i64>>,
    pub ages: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "crate::transport::wire::opt_flag")]
    pub has_photo: Option<bool>,
    #[serde(default, deserialize_with = "crate::transport::wire::opt_flag")]
    pub has_username: Option<bool>,
    #[serde(default, deserialize_with = "crate::transport::wire::opt_flag")]
    pub has_bio: Option<bool>,
    #[serde(default, deserialize_with = "crate::transport::wire::opt_flag")]
    pub has_first_name: Option<bool>,
    #[serde(default, deserialize_with = "crate::transport::wire::opt_flag")]
    pub has_ru_name: Option<bool>,
    #[serde(default, deserialize_with = "crate::transport::wire::opt_flag")]
    pub has_fake_check: Option<bool>,
    /// Minimal account age bucket: 1 (>2y) .. 5 (>9y).
    pub old_account: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// Display schedule of an order.
pub struct OrderSchedule {
    /// Deferred start.
    pub start_datetime: Option<DateTimeValue>,
    /// Daily window start.
    pub start_time: Option<TimeOfDay>,
    /// Daily window end.
    pub end_time: Option<TimeOfDay>,
    /// Weekdays to skip, 1 = Monday .. 7 = Sunday.
    pub excluded_days: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Optional order settings shared by [`CreateOrder`] and [`UpdateOrder`].
pub struct OrderOptions {
    pub name: Option<String>,
    /// Start immediately (`true`) or keep paused.
    pub is_on: Option<bool>,
    /// Daily subscriber limit.
    pub quantity_day: Option<u32>,
    /// Base price per subscriber.
    pub price: Option<f64>,
    /// Price per Premium subscriber, when Premium targeting is enabled.
    pub price_premium: Option<f64>,
    /// Required by the server for `ads_type = bot`.
    pub bot_token: Option<BotToken>,
    /// Token kind: 0 - standard, 1 - BotMembers.
    pub to_bot_member: Option<u8>,
    pub track_unsubscriptions: Option<bool>,
    /// Smooth distribution (`true`) or as fast as possible.
    pub is_lite: Option<bool>,
    /// Joins per hour when `is_lite` is on.
    pub sub_speed: Option<u32>,
    pub user_parameters: Option<UserParameters>,
    pub forbidden_themes: Option<Vec<String>>,
    pub order_schedule: Option<OrderSchedule>,
}

#[derive(Debug, Clone)]
/// `orders` with `action=create`.
pub struct CreateOrder {
    link: Link,
    ads_type: AdsType,
    quantity_all: u32,
    options: OrderOptions,
}

impl CreateOrder {
    pub fn new(link: Link, ads_type: AdsType, quantity_all: u32, options: OrderOptions) -> Self {
        Self {
            link,
            ads_type,
            quantity_all,
            options,
        }
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn ads_type(&self) -> AdsType {
        self.ads_type
    }

    pub fn quantity_all(&self) -> u32 {
        self.quantity_all
    }

    pub fn options(&self) -> &OrderOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// `orders` with `action=update`. Only fields that are set are sent.
pub struct UpdateOrder {
    order_id: i64,
    pub link: Option<Link>,
    pub in_archive: Option<bool>,
    pub quantity_all: Option<u32>,
    pub options: OrderOptions,
}

impl UpdateOrder {
    pub fn new(order_id: i64) -> Self {
        Self {
            order_id,
            link: None,
            in_archive: None,
            quantity_all: None,
            options: OrderOptions::default(),
        }
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SponsorAction {
    #[default]
    Subscribe,
    NewTask,
    Task,
}

impl SponsorAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subscribe => "subscribe",
            Self::NewTask => "newtask",
            Self::Task => "task",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SponsorOptions {
    /// Required when the bot was registered without a token.
    pub first_name: Option<String>,
    /// Required when the bot was registered without a token.
    pub username: Option<String>,
    pub language_code: Option<String>,
    pub is_premium: Option<bool>,
    /// Defaults to [`SponsorAction::Subscribe`].
    pub action: Option<SponsorAction>,
    pub max_sponsors: Option<u8>,
    /// Return links through the API (`true`) or let SubGram message the user.
    pub get_links: Option<bool>,
    pub exclude_resource_ids: Option<Vec<String>>,
    pub exclude_ads_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone)]
/// `get-sponsors`: sponsors a user has to subscribe to.
pub struct GetSponsors {
    chat_id: i64,
    user_id: i64,
    options: SponsorOptions,
}

impl GetSponsors {
    pub fn new(chat_id: i64, user_id: i64, options: SponsorOptions) -> Self {
        Self {
            chat_id,
            user_id,
            options,
        }
    }

    pub fn chat_id(&self) -> i64 {
        self.chat_id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn options(&self) -> &SponsorOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Publisher-side bot settings shared by [`AddBot`] and [`UpdateBot`].
pub struct BotSettings {
    /// Sponsor list cache lifetime in minutes (5..=4320).
    pub time_purge: Option<u16>,
    /// Sponsors per response (1..=10).
    pub max_sponsors: Option<u8>,
    pub get_links: Option<bool>,
    pub show_quiz: Option<bool>,
    pub gender_question: Option<bool>,
    pub age_question: Option<bool>,
    pub text_op: Option<String>,
    pub image_op: Option<String>,
    pub forbidden_themes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How a new bot is identified: by token, or by its full public identity.
pub enum BotIdentity {
    Token(BotToken),
    Manual {
        bot_id: i64,
        bot_name: String,
        bot_nickname: String,
    },
}

impl BotIdentity {
    /// Manual identity; every part is required.
    pub fn manual(
        bot_id: i64,
        bot_name: impl Into<String>,
        bot_nickname: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let bot_name = bot_name.into();
        let bot_nickname = bot_nickname.into();
        if bot_name.trim().is_empty() || bot_nickname.trim().is_empty() {
            return Err(ValidationError::MissingBotIdentity);
        }
        Ok(Self::Manual {
            bot_id,
            bot_name,
            bot_nickname: bot_nickname.trim_start_matches('@').to_owned(),
        })
    }
}

#[derive(Debug, Clone)]
/// `bots` with `action=add`.
pub struct AddBot {
    identity: BotIdentity,
    pub settings: BotSettings,
}

impl AddBot {
    pub fn new(identity: BotIdentity, settings: BotSettings) -> Self {
        Self { identity, settings }
    }

    pub fn identity(&self) -> &BotIdentity {
        &self.identity
    }
}

#[derive(Debug, Clone)]
/// `bots` with `action=update`.
pub struct UpdateBot {
    bot_id: Option<i64>,
    bot_token: Option<BotToken>,
    pub bot_name: Option<String>,
    pub bot_nickname: Option<String>,
    pub is_on: Option<bool>,
    pub settings: BotSettings,
}

impl UpdateBot {
    pub fn by_id(bot_id: i64) -> Self {
        Self::with_reference(Some(bot_id), None)
    }

    pub fn by_token(bot_token: BotToken) -> Self {
        Self::with_reference(None, Some(bot_token))
    }

    fn with_reference(bot_id: Option<i64>, bot_token: Option<BotToken>) -> Self {
        Self {
            bot_id,
            bot_token,
            bot_name: None,
            bot_nickname: None,
            is_on: None,
            settings: BotSettings::default(),
        }
    }

    pub fn bot_id(&self) -> Option<i64> {
        self.bot_id
    }

    pub fn bot_token(&self) -> Option<&BotToken> {
        self.bot_token.as_ref()
    }
}

#[derive(Debug, Clone)]
/// `get-user-subscriptions`: subscription state of one user.
pub struct GetUserSubscriptions {
    user_id: i64,
    /// Resources to check; when absent the date range selects them.
    pub links: Option<Vec<String>>,
    pub start_date: Option<DateValue>,
    pub end_date: Option<DateValue>,
}

impl GetUserSubscriptions {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            links: None,
            start_date: None,
            end_date: None,
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Statistic report kind with the id it requires.
pub enum StatisticAction {
    /// Advertiser: all orders.
    AllAds,
    /// Advertiser: one order.
    Ads { ads_id: i64 },
    /// Advertiser: traffic sources of one order.
    Source { ads_id: i64 },
    /// Publisher: all bots.
    AllBots,
    /// Publisher: one bot.
    Bots { bot_id: i64 },
    /// Publisher: sponsors shown in one bot.
    Sponsor { bot_id: i64 },
}

impl StatisticAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllAds => "allads",
            Self::Ads { .. } => "ads",
            Self::Source { .. } => "source",
            Self::AllBots => "allbots",
            Self::Bots { .. } => "bots",
            Self::Sponsor { .. } => "sponsor",
        }
    }

    pub fn ads_id(self) -> Option<i64> {
        match self {
            Self::Ads { ads_id } | Self::Source { ads_id } => Some(ads_id),
            _ => None,
        }
    }

    pub fn bot_id(self) -> Option<i64> {
        match self {
            Self::Bots { bot_id } | Self::Sponsor { bot_id } => Some(bot_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// `statistic`. Without dates the server reports the last nine days.
pub struct GetStatistic {
    action: StatisticAction,
    pub start_date: Option<DateValue>,
    pub end_date: Option<DateValue>,
}

impl GetStatistic {
    pub fn new(action: StatisticAction) -> Self {
        Self {
            action,
            start_date: None,
            end_date: None,
        }
    }

    pub fn action(&self) -> StatisticAction {
        self.action
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionAction {
    /// Put on the blacklist.
    Exclude,
    /// Remove from the blacklist.
    Activate,
}

impl ExclusionAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Activate => "activate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Who blacklists whom.
pub enum ExclusionTarget {
    /// An advertiser blocks a bot for one of its orders.
    Advertiser { ads_id: i64, bot_id: i64 },
    /// A bot owner blocks a sponsor, for one bot or for all of them.
    Publisher { ads_id: i64, bot_id: Option<i64> },
}

impl ExclusionTarget {
    pub fn context(self) -> &'static str {
        match self {
            Self::Advertiser { .. } => "advertiser",
            Self::Publisher { .. } => "publisher",
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// `toggle-exclusion`.
pub struct ToggleExclusion {
    pub action: ExclusionAction,
    pub target: ExclusionTarget,
}

impl ToggleExclusion {
    pub fn new(action: ExclusionAction, target: ExclusionTarget) -> Self {
        Self { action, target }
    }
}
