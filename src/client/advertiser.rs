use crate::client::{Executor, HttpMethod, KeyType, SubgramError};
use crate::domain::{CreateOrder, OrderInfoResponse, OrderResponse, UpdateOrder};
use crate::transport::{encode_create_order, encode_order_info, encode_update_order, endpoint};

/// Order management. Every call authenticates with the `secret_key`.
#[derive(Clone, Copy)]
pub struct Advertiser<'a> {
    executor: &'a Executor,
}

impl<'a> Advertiser<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Create an order. `response.order_id` carries the new id.
    pub async fn create_order(&self, request: CreateOrder) -> Result<OrderResponse, SubgramError> {
        self.executor
            .execute(
                HttpMethod::Post,
                endpoint::ORDERS,
                KeyType::Secret,
                None,
                Some(encode_create_order(&request)),
            )
            .await
    }

    /// Change an existing order. Only the fields set on `request` are sent.
    pub async fn update_order(&self, request: UpdateOrder) -> Result<OrderResponse, SubgramError> {
        self.executor
            .execute(
                HttpMethod::Post,
                endpoint::ORDERS,
                KeyType::Secret,
                None,
                Some(encode_update_order(&request)),
            )
            .await
    }

    pub async fn order_info(&self, order_id: i64) -> Result<OrderInfoResponse, SubgramError> {
        self.executor
            .execute(
                HttpMethod::Post,
                endpoint::ORDERS,
                KeyType::Secret,
                None,
                Some(encode_order_info(order_id)),
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
    use crate::domain::{AdsType, CreateOrder, Link, OrderOptions, OrderState, Status, UpdateOrder};

    #[tokio::test]
    async fn create_order_posts_defaults_with_secret_key() {
        let transport = FakeTransport::new(
            200,
            r#"{"status": "ok", "code": 200, "message": "created", "response": {"order_id": 77}}"#,
        );
        let client = client(transport.clone());

        let request = CreateOrder::new(
            Link::new("https://t.me/channel").unwrap(),
            AdsType::Channel,
            100,
            OrderOptions {
                price: Some(2.5),
                ..Default::default()
            },
        );
        let response = client.advertiser().create_order(request).await.unwrap();
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.response.map(|created| created.order_id), Some(77));

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://api.example.invalid/orders");
        assert_eq!(sent.auth, "secret-1");
        assert_eq!(
            sent.body,
            Some(json!({
                "action": "create",
                "link": "https://t.me/channel",
                "ads_type": "channel",
                "quantity_all": 100,
                "is_on": 1,
                "price": 2.5,
                "to_bot_member": 0,
                "track_unsubscriptions": true,
                "is_lite": 0
            }))
        );
    }

    #[tokio::test]
    async fn update_order_sends_only_set_fields() {
        let transport = FakeTransport::new(200, r#"{"status": "ok", "code": 200}"#);
        let client = client(transport.clone());

        let mut request = UpdateOrder::new(77);
        request.in_archive = Some(true);
        request.options.is_on = Some(false);
        client.advertiser().update_order(request).await.unwrap();

        let body = transport.last_request().body.unwrap();
        assert_eq!(body["action"], json!("update"));
        assert_eq!(body["order_id"], json!(77));
        assert_eq!(body["is_on"], json!(0));
        assert_eq!(body["in_archive"], json!(1));
        assert!(body.get("price").is_none());
        assert!(body.get("link").is_none());
    }

    #[tokio::test]
    async fn order_info_decodes_state_and_flags() {
        let transport = FakeTransport::new(
            200,
            r#"{
              "status": "ok",
              "code": 200,
              "response": {
                "order_id": 77,
                "status": "Processing",
                "link": "https://t.me/channel",
                "ads_type": "channel",
                "quantity_all": 100,
                "quantity_now": 10,
                "remains": 90,
                "is_on": 1,
                "in_archive": 0,
                "old_price": 2.5,
                "real_price": 2.5,
                "is_lite": 0,
                "unexpected": "ignored"
              }
            }"#,
        );
        let client = client(transport.clone());

        let info = client.advertiser().order_info(77).await.unwrap();
        let order = info.response.unwrap();
        assert_eq!(order.status, OrderState::Processing);
        assert!(order.is_on);
        assert!(!order.in_archive);
        assert_eq!(
            transport.last_request().body,
            Some(json!({"action": "info", "order_id": 77}))
        );
    }

    #[tokio::test]
    async fn order_calls_need_secret_key() {
        let transport = FakeTransport::new(200, r#"{"status": "ok", "code": 200}"#);
        let client = client_with(Credentials::api_token("token").unwrap(), transport.clone());

        let err = client.advertiser().order_info(1).await.unwrap_err();
        assert!(matches!(
            err,
            SubgramError::MissingCredential {
                key_type: KeyType::Secret
            }
        ));
        assert!(transport.requests().is_empty());
    }
}
