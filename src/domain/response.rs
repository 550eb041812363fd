use serde::Deserialize;

use crate::domain::request::{AdsType, OrderSchedule, UserParameters};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Top-level `status` of the response envelope.
pub enum Status {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Response of `create_order` and `update_order`.
pub struct OrderResponse {
    pub status: Status,
    pub code: i64,
    pub message: Option<String>,
    pub response: Option<CreatedOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedOrder {
    pub order_id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderInfoResponse {
    pub status: Status,
    pub code: i64,
    pub message: Option<String>,
    pub response: Option<OrderInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
/// Lifecycle state of an order.
pub enum OrderState {
    Moderation,
    Processing,
    /// Stopped manually.
    Stopped,
    /// Subscriber limit reached.
    Finished,
    /// See [`OrderInfo::reason`].
    Rejected,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderInfo {
    pub order_id: i64,
    pub status: OrderState,
    pub reason: Option<String>,
    pub link: String,
    pub name: Option<String>,
    pub ads_type: AdsType,
    #[serde(default, deserialize_with = "crate::transport::wire::opt_flag")]
    pub track_unsubscriptions: Option<bool>,
    pub to_bot_member: Option<u8>,
    pub quantity_all: i64,
    pub quantity_day: Option<i64>,
    /// Subscriptions delivered so far.
    pub quantity_now: i64,
    pub remains: i64,
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub is_on: bool,
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub in_archive: bool,
    /// Base price before coefficients.
    pub old_price: f64,
    /// Final price per subscriber.
    pub real_price: f64,
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub is_lite: bool,
    pub sub_speed: Option<i64>,
    pub user_parameters: Option<UserParameters>,
    pub order_schedule: Option<OrderSchedule>,
    pub coefficients: Option<OrderCoefficients>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// Price multipliers applied to an order.
pub struct OrderCoefficients {
    pub cities: Option<f64>,
    pub ages: Option<f64>,
    pub has_photo: Option<f64>,
    pub total: Option<f64>,
    pub countries: Option<f64>,
    pub devicestype: Option<f64>,
    pub devicesos: Option<f64>,
    pub has_username: Option<f64>,
    pub has_bio: Option<f64>,
    pub has_first_name: Option<f64>,
    pub has_ru_name: Option<f64>,
    pub has_fake_check: Option<f64>,
    pub old_account: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalanceResponse {
    pub status: Status,
    pub code: i64,
    pub message: Option<String>,
    pub balance: Option<f64>,
    pub bots_info: Option<Vec<BotBalance>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BotBalance {
    pub bot_id: i64,
    pub bot_username: String,
    pub total_followers: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FiltersResponse {
    pub filters: Option<Filters>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Filters {
    pub ads: Option<AdsFilters>,
    pub bots: Option<BotsFilters>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Targeting values usable in [`UserParameters`].
pub struct AdsFilters {
    pub countries: Option<Vec<FilterValue>>,
    pub languages: Option<Vec<FilterValue>>,
    pub cities: Option<Vec<FilterValue>>,
    pub ages: Option<Vec<FilterValue>>,
    pub devicestype: Option<Vec<FilterValue>>,
    pub devicesos: Option<Vec<FilterValue>>,
    pub forbidden_themes: Option<Vec<FilterValue>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BotsFilters {
    pub forbidden_themes: Option<Vec<FilterValue>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterValue {
    pub id: FilterId,
    pub name: String,
    /// Approximate share of users with this value, in percent.
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
/// Numeric id (countries, languages) or string code (themes).
pub enum FilterId {
    Int(i64),
    Code(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatisticResponse {
    pub status: Option<Status>,
    pub data: Option<StatisticData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// Chart series and tables; which fields are filled depends on the action.
pub struct StatisticData {
    /// X-axis dates.
    pub labels: Option<Vec<String>>,
    pub subscribers_data: Option<Vec<i64>>,
    pub value_data: Option<Vec<f64>>,
    pub avg_price_data: Option<Vec<f64>>,
    pub total_subscribers: Option<i64>,
    pub total_value: Option<f64>,
    pub table_data: Option<Vec<TableRow>>,
    #[serde(default, deserialize_with = "crate::transport::wire::opt_flag")]
    pub show_extended_table: Option<bool>,
    pub requests_stats: Option<RequestsStats>,
    pub language_stats: Option<Vec<LanguageStat>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableRow {
    pub bot_id: Option<i64>,
    pub bot_nickname: Option<String>,
    pub subscribers: Option<i64>,
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "crate::transport::wire::opt_flag")]
    pub is_excluded: Option<bool>,
    pub link: Option<String>,
    pub ads_id: Option<i64>,
    pub service_subs: Option<i64>,
    pub service_value: Option<f64>,
    pub own_subs: Option<i64>,
    pub own_value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RequestsStats {
    pub total_requests: i64,
    pub successful_requests: i64,
    pub failed_requests: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageStat {
    pub lang: String,
    /// Preformatted, e.g. `85.4%`.
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToggleExclusionResponse {
    pub status: Status,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::transport::SponsorsJsonResponse")]
/// Response of `get_sponsors` and `user_subscriptions`.
///
/// - `ok`: let the user through (subscribed, or nothing to show),
/// - `warning`: the user has to subscribe first,
/// - `error`: the request failed.
pub struct SponsorsResponse {
    pub status: Status,
    pub message: Option<String>,
    pub sponsors: Vec<Sponsor>,
}

impl SponsorsResponse {
    /// `true` when the user must act on the sponsor list before going on.
    pub fn requires_action(&self) -> bool {
        self.status == Status::Warning
    }

    /// Sponsors the user still has to subscribe to.
    pub fn unsubscribed(&self) -> impl Iterator<Item = &Sponsor> {
        self.sponsors
            .iter()
            .filter(|sponsor| sponsor.status == SubscriptionStatus::Unsubscribed)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sponsor {
    pub ads_id: String,
    pub link: String,
    pub resource_id: Option<ResourceId>,
    #[serde(rename = "type")]
    pub kind: SponsorKind,
    pub status: SubscriptionStatus,
    /// Inactive sponsors should not be shown.
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub available_now: bool,
    pub button_text: String,
    pub resource_logo: Option<String>,
    pub resource_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorKind {
    /// Channel or chat.
    Channel,
    Bot,
    /// Redirect resolved to a concrete sponsor when opened.
    SmartLink,
    /// Mini app, website, or a channel/bot without subscription checks.
    Resource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Subscribed,
    Unsubscribed,
    /// Subscribed before and left; access may be granted but is not paid.
    Notgetted,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Response of the `bots` endpoint.
pub struct BotsResponse {
    pub status: Status,
    pub message: Option<String>,
    pub result: Option<BotResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BotResult {
    /// Full settings, returned by `info` and `update`.
    Bot(Box<Bot>),
    /// Returned by `add`.
    Added(BotAdded),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BotAdded {
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bot {
    pub bot_id: i64,
    pub bot_name: String,
    pub bot_nickname: String,
    pub status: Option<String>,
    pub note: Option<serde_json::Value>,
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub is_on: bool,
    pub profit: Option<f64>,
    pub profit_own_orders: Option<f64>,
    pub api_key: String,
    pub time_purge: i64,
    pub max_sponsors: i64,
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub get_links: bool,
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub gender_question: bool,
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub age_question: bool,
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub show_quiz: bool,
    pub text_op: Option<String>,
    pub image_op: Option<String>,
    #[serde(default)]
    pub forbidden_themes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfoResponse {
    pub status: Status,
    pub message: Option<String>,
    pub data: Option<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Demographics of a Telegram user as seen by SubGram.
pub struct UserInfo {
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub lang_code: String,
    /// 0 - unknown, 1 - <10, 2 - 11-13, 3 - 14-15, 4 - 16-17, 5 - 18-25, 6 - >25.
    pub age_category: i64,
    pub age_category_info: String,
    pub gender: String,
    pub country: String,
    pub city: String,
    pub device_type: String,
    pub device_os: String,
    pub ip_address: String,
    /// Multi-account or fraud suspicion.
    #[serde(deserialize_with = "crate::transport::wire::flag")]
    pub is_suspicious: bool,
}
