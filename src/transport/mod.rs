//! Transport layer: wire-format details (payload encoding, serde quirks, response classification).

mod account;
mod orders;
mod payload;
mod publisher;
mod response;
pub mod wire;

pub use account::{encode_api_token_query, encode_statistic_query, encode_toggle_exclusion};
pub use orders::{encode_create_order, encode_order_info, encode_update_order};
pub use payload::Payload;
pub use publisher::{
    encode_add_bot, encode_bot_info, encode_get_sponsors, encode_update_bot, encode_user_info,
    encode_user_subscriptions,
};
pub use response::{ResponseError, decode_response};
pub use wire::SponsorsJsonResponse;

/// API paths, relative to the base endpoint.
pub mod endpoint {
    pub const ORDERS: &str = "orders";
    pub const GET_BALANCE: &str = "get-balance";
    pub const FILTERS: &str = "filters";
    pub const STATISTIC: &str = "statistic";
    pub const TOGGLE_EXCLUSION: &str = "toggle-exclusion";
    pub const GET_SPONSORS: &str = "get-sponsors";
    pub const BOTS: &str = "bots";
    pub const GET_USER_SUBSCRIPTIONS: &str = "get-user-subscriptions";
    pub const GET_USER_INFO: &str = "get-user-info";
}
