//! Typed async Rust client for the SubGram HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks, and a client layer that authenticates, sends and
//! decodes requests over one lazily opened HTTP session.
//!
//! ```rust,no_run
//! use subgram::{Credentials, GetSponsors, SponsorOptions, SubgramClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), subgram::SubgramError> {
//!     let client = SubgramClient::new(Credentials::api_key("...")?);
//!     let request = GetSponsors::new(42, 42, SponsorOptions::default());
//!     let response = client.publisher().get_sponsors(request).await?;
//!     if response.requires_action() {
//!         for sponsor in response.unsubscribed() {
//!             println!("{}", sponsor.link);
//!         }
//!     }
//!     client.close();
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Account, Advertiser, Credentials, Executor, HttpMethod, KeyType, Publisher, SubgramClient,
    SubgramClientBuilder, SubgramError,
};
pub use domain::{
    AddBot, AdsType, ButtonTexts, CreateOrder, DateTimeValue, DateValue, ExclusionAction,
    ExclusionTarget, GetSponsors, GetStatistic, GetUserSubscriptions, OrderOptions, SponsorKeyboard,
    SponsorOptions, SponsorsResponse, StatisticAction, Status, TimeOfDay, ToggleExclusion,
    UpdateBot, UpdateOrder, ValidationError,
};
pub use transport::{Payload, endpoint};
