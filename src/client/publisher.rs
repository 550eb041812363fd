use crate::client::{Executor, HttpMethod, KeyType, SubgramError};
use crate::domain::{
    AddBot, BotsResponse, ButtonTexts, GetSponsors, GetUserSubscriptions, SponsorKeyboard,
    SponsorsResponse, UpdateBot, UserInfoResponse,
};
use crate::transport::{
    Payload, encode_add_bot, encode_bot_info, encode_get_sponsors, encode_update_bot,
    encode_user_info, encode_user_subscriptions, endpoint,
};

/// Sponsor lookups for bot users and bot registration.
///
/// Sponsor, subscription and user lookups use the bot `api_key`; bot
/// management uses the `secret_key`.
#[derive(Clone, Copy)]
pub struct Publisher<'a> {
    executor: &'a Executor,
}

impl<'a> Publisher<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        key_type: KeyType,
        body: Payload,
    ) -> Result<T, SubgramError> {
        self.executor
            .execute(HttpMethod::Post, path, key_type, None, Some(body))
            .await
    }

    /// Sponsors the user has to subscribe to.
    ///
    /// A `warning` status means the user is not subscribed to everything yet.
    pub async fn get_sponsors(
        &self,
        request: GetSponsors,
    ) -> Result<SponsorsResponse, SubgramError> {
        self.post(
            endpoint::GET_SPONSORS,
            KeyType::Bot,
            encode_get_sponsors(&request),
        )
        .await
    }

    /// Fetch sponsors and lay out a keyboard for the unsubscribed ones.
    ///
    /// `Ok(None)` means the user has nothing left to subscribe to.
    pub async fn sponsor_keyboard(
        &self,
        request: GetSponsors,
        texts: &ButtonTexts,
    ) -> Result<Option<SponsorKeyboard>, SubgramError> {
        let response = self.get_sponsors(request).await?;
        Ok(SponsorKeyboard::build(&response, texts))
    }

    /// Register a bot. The new bot's `api_key` comes back in `result`.
    pub async fn add_bot(&self, request: AddBot) -> Result<BotsResponse, SubgramError> {
        self.post(endpoint::BOTS, KeyType::Secret, encode_add_bot(&request))
            .await
    }

    pub async fn update_bot(&self, request: UpdateBot) -> Result<BotsResponse, SubgramError> {
        self.post(endpoint::BOTS, KeyType::Secret, encode_update_bot(&request))
            .await
    }

    pub async fn bot_info(&self, bot_id: i64) -> Result<BotsResponse, SubgramError> {
        self.post(endpoint::BOTS, KeyType::Secret, encode_bot_info(bot_id))
            .await
    }

    /// Sponsors the user was shown, with their current subscription status.
    pub async fn user_subscriptions(
        &self,
        request: GetUserSubscriptions,
    ) -> Result<SponsorsResponse, SubgramError> {
        self.post(
            endpoint::GET_USER_SUBSCRIPTIONS,
            KeyType::Bot,
            encode_user_subscriptions(&request),
        )
        .await
    }

    pub async fn user_info(&self, user_id: i64) -> Result<UserInfoResponse, SubgramError> {
        self.post(
            endpoint::GET_USER_INFO,
            KeyType::Bot,
            encode_user_info(user_id),
        )
        .await
    }
}
