use crate::client::{Executor, HttpMethod, KeyType, SubgramError};
use crate::domain::{
    BalanceResponse, FiltersResponse, GetStatistic, StatisticResponse, ToggleExclusion,
    ToggleExclusionResponse,
};
use crate::transport::{
    encode_api_token_query, encode_statistic_query, encode_toggle_exclusion, endpoint,
};

/// Account-wide data. Every call authenticates with the `api_token`.
#[derive(Clone, Copy)]
pub struct Account<'a> {
    executor: &'a Executor,
}

impl<'a> Account<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    fn api_token(&self) -> Result<&'a str, SubgramError> {
        self.executor.credentials().resolve(KeyType::Token)
    }

    /// Account balance and per-bot earnings.
    pub async fn balance(&self) -> Result<BalanceResponse, SubgramError> {
        self.executor
            .execute(
                HttpMethod::Post,
                endpoint::GET_BALANCE,
                KeyType::Token,
                None,
                None,
            )
            .await
    }

    /// Targeting values accepted by orders and bot settings.
    pub async fn filters(&self) -> Result<FiltersResponse, SubgramError> {
        self.executor
            .execute(
                HttpMethod::Get,
                endpoint::FILTERS,
                KeyType::Token,
                None,
                None,
            )
            .await
    }

    /// Advertiser or publisher statistics. The server also expects the token in
    /// the query string.
    pub async fn statistic(
        &self,
        request: GetStatistic,
    ) -> Result<StatisticResponse, SubgramError> {
        let query = encode_statistic_query(&request, self.api_token()?);
        self.executor
            .execute(
                HttpMethod::Get,
                endpoint::STATISTIC,
                KeyType::Token,
                Some(query),
                None,
            )
            .await
    }

    /// Exclude a bot from an order, or bring it back.
    pub async fn toggle_exclusion(
        &self,
        request: ToggleExclusion,
    ) -> Result<ToggleExclusionResponse, SubgramError> {
        let query = encode_api_token_query(self.api_token()?);
        self.executor
            .execute(
                HttpMethod::Post,
                endpoint::TOGGLE_EXCLUSION,
                KeyType::Token,
                Some(query),
                Some(encode_toggle_exclusion(&request)),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::session::testing::FakeTransport;
    use crate::client::testing::{client, client_with};
    use crate::client::{Credentials, HttpMethod, KeyType, SubgramError};
    use crate::domain::{
        ExclusionAction, ExclusionTarget, FilterId, GetStatistic, StatisticAction, Status,
        ToggleExclusion,
    };

    #[tokio::test]
    async fn balance_posts_without_body() {
        let transport = FakeTransport::new(
            200,
            r#"{
              "status": "ok",
              "code": 200,
              "balance": 12.5,
              "bots_info": [
                {"bot_id": 1, "bot_username": "one_bot", "total_followers": 3, "revenue": 1.5}
              ]
            }"#,
        );
        let client = client(transport.clone());

        let balance = client.account().balance().await.unwrap();
        assert_eq!(balance.balance, Some(12.5));
        assert_eq!(balance.bots_info.unwrap()[0].bot_username, "one_bot");

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://api.example.invalid/get-balance");
        assert_eq!(sent.auth, "token-1");
        assert_eq!(sent.body, None);
    }

    #[tokio::test]
    async fn filters_is_a_get() {
        let transport = FakeTransport::new(
            200,
            r#"{"filters": {"ads": {"countries": [{"id": 1, "name": "Russia"}]}}}"#,
        );
        let client = client(transport.clone());

        let filters = client.account().filters().await.unwrap();
        let countries = filters.filters.unwrap().ads.unwrap().countries.unwrap();
        assert_eq!(countries[0].name, "Russia");
        assert!(matches!(countries[0].id, FilterId::Int(1)));

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.url, "https://api.example.invalid/filters");
    }

    #[tokio::test]
    async fn statistic_sends_token_in_query_and_header() {
        let transport = FakeTransport::new(
            200,
            r#"{"status": "ok", "data": {"labels": ["2024-03-05"], "total_subscribers": 4}}"#,
        );
        let client = client(transport.clone());

        let mut request = GetStatistic::new(StatisticAction::Ads { ads_id: 7 });
        request.start_date = Some("2024-03-05".parse().unwrap());
        let statistic = client.account().statistic(request).await.unwrap();
        assert_eq!(statistic.data.unwrap().total_subscribers, Some(4));

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(
            sent.url,
            "https://api.example.invalid/statistic?api_token=token-1&action=ads&ads_id=7&start_date=2024-03-05&output_format=json"
        );
        assert_eq!(sent.auth, "token-1");
    }

    #[tokio::test]
    async fn toggle_exclusion_sends_query_token_and_body() {
        let transport = FakeTransport::new(200, r#"{"status": "ok", "message": "excluded"}"#);
        let client = client(transport.clone());

        let request = ToggleExclusion::new(
            ExclusionAction::Exclude,
            ExclusionTarget::Advertiser {
                ads_id: 5,
                bot_id: 6,
            },
        );
        let response = client.account().toggle_exclusion(request).await.unwrap();
        assert_eq!(response.status, Status::Ok);

        let sent = transport.last_request();
        assert_eq!(
            sent.url,
            "https://api.example.invalid/toggle-exclusion?api_token=token-1"
        );
        assert_eq!(
            sent.body,
            Some(json!({"action": "exclude", "context": "advertiser", "ads_id": 5, "bot_id": 6}))
        );
    }

    #[tokio::test]
    async fn account_calls_need_api_token() {
        let transport = FakeTransport::new(200, r#"{"status": "ok"}"#);
        let client = client_with(Credentials::secret_key("s").unwrap(), transport.clone());

        let err = client
            .account()
            .statistic(GetStatistic::new(StatisticAction::AllBots))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubgramError::MissingCredential {
                key_type: KeyType::Token
            }
        ));
        assert!(client.account().balance().await.is_err());
        assert!(transport.requests().is_empty());
    }
}
