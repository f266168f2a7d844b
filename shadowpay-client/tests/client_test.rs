//! End-to-end client tests against an in-process HTTP server.
//!
//! The server accepts a single connection, records the raw request and
//! answers with a canned status and body.

use shadowpay_client::{
    ClientError, PaymentDepositRequest, ShadowPayApi, ShadowPayClient, UpdateTokenRequest,
    WebhookLogsRequest,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Request as seen by the fake server.
struct Captured {
    head: String,
    body: String,
}

impl Captured {
    fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (k, v) = line.split_once(':')?;
            k.trim()
                .eq_ignore_ascii_case(name)
                .then(|| v.trim().to_string())
        })
    }
}

async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let head_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers completed");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|l| {
                let (k, v) = l.split_once(':')?;
                k.eq_ignore_ascii_case("content-length")
                    .then(|| v.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while buf.len() < head_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let req_body = String::from_utf8_lossy(&buf[head_end..]).to_string();

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        Captured {
            head,
            body: req_body,
        }
    });

    (format!("http://{addr}"), handle)
}

fn client_for(base: &str) -> ShadowPayClient {
    ShadowPayClient::builder()
        .base_url(base)
        .api_key("test-key-0123456789")
        .build()
        .unwrap()
}

// ---- requests ----

#[tokio::test]
async fn payment_deposit_posts_json_with_api_key() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"unsigned_tx_base64":"AQID","recent_blockhash":"9sHcv","last_valid_block_height":42}"#,
    )
    .await;

    let resp = client_for(&base)
        .payment_deposit(&PaymentDepositRequest {
            wallet_address: "wallet1".to_string(),
            amount: 1_500_000_000,
        })
        .await
        .unwrap();

    assert_eq!(resp.recent_blockhash, "9sHcv");
    assert_eq!(resp.last_valid_block_height, 42);

    let req = server.await.unwrap();
    assert_eq!(
        req.request_line(),
        "POST /shadowpay/v1/payment/deposit HTTP/1.1"
    );
    assert_eq!(req.header("x-api-key").as_deref(), Some("test-key-0123456789"));
    assert_eq!(
        req.header("content-type").as_deref(),
        Some("application/json")
    );
    assert!(
        req.header("user-agent")
            .is_some_and(|ua| ua.starts_with("shadowpay-rust-client/"))
    );
    let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(body["wallet_address"], "wallet1");
    assert_eq!(body["amount"], 1_500_000_000_i64);
}

#[tokio::test]
async fn pool_balance_encodes_wallet_segment() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"wallet_address":"a b","balance":2000000000,"min_deposit":10000000}"#,
    )
    .await;

    let resp = client_for(&base).pool_balance("a b").await.unwrap();
    assert_eq!(resp.balance, 2_000_000_000);

    let req = server.await.unwrap();
    assert_eq!(
        req.request_line(),
        "GET /shadowpay/api/pool/balance/a%20b HTTP/1.1"
    );
}

#[tokio::test]
async fn update_token_uses_patch_and_omits_unset_fields() {
    let (base, server) = serve_once("200 OK", r#"{"success":true}"#).await;

    let resp = client_for(&base)
        .update_token(
            "So11111111111111111111111111111111111111112",
            &UpdateTokenRequest {
                enabled: Some(true),
                symbol: None,
                decimals: None,
            },
        )
        .await
        .unwrap();
    assert!(resp.success);

    let req = server.await.unwrap();
    assert!(
        req.request_line()
            .starts_with("PATCH /shadowpay/api/tokens/update/So111")
    );
    assert_eq!(req.body, r#"{"enabled":true}"#);
}

#[tokio::test]
async fn webhook_logs_sends_filters_in_get_body() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"logs":[],"total_count":0,"limit":50,"offset":0}"#,
    )
    .await;

    let resp = client_for(&base)
        .webhook_logs(&WebhookLogsRequest {
            limit: Some(50),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(resp.limit, 50);

    let req = server.await.unwrap();
    assert_eq!(
        req.request_line(),
        "GET /shadowpay/api/webhooks/logs HTTP/1.1"
    );
    assert_eq!(req.body, r#"{"limit":50}"#);
}

#[tokio::test]
async fn missing_api_key_sends_no_header() {
    let (base, server) = serve_once("200 OK", r#"{"root":"0xabc","tree_depth":20,"leaf_count":3}"#).await;

    let client = ShadowPayClient::builder().base_url(&base).build().unwrap();
    let resp = client.tree_root().await.unwrap();
    assert_eq!(resp.leaf_count, 3);

    let req = server.await.unwrap();
    assert!(req.header("x-api-key").is_none());
}

// ---- errors ----

#[tokio::test]
async fn api_error_body_is_decoded() {
    let (base, _server) = serve_once(
        "400 Bad Request",
        r#"{"message":"withdraw failed","error":"insufficient balance"}"#,
    )
    .await;

    let err = client_for(&base).merchant_earnings().await.unwrap_err();
    assert!(err.is_expected());
    assert_eq!(
        err.to_string(),
        "shadowpay: withdraw failed (status 400) - insufficient balance"
    );
}

#[tokio::test]
async fn undecodable_error_body_falls_back_to_reason() {
    let (base, _server) = serve_once("500 Internal Server Error", "oops").await;

    let err = client_for(&base).webhook_stats().await.unwrap_err();
    assert!(!err.is_expected());
    assert_eq!(
        err.to_string(),
        "api error (status 500): Internal Server Error"
    );
}

#[tokio::test]
async fn unauthorized_maps_to_invalid_credentials() {
    let (base, _server) = serve_once("401 Unauthorized", r#"{"message":"invalid api key"}"#).await;

    let err = client_for(&base).list_tokens().await.unwrap_err();
    assert!(
        matches!(err, ClientError::InvalidCredentials { status: 401, .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn malformed_success_body_is_parse_error() {
    let (base, _server) = serve_once("200 OK", "not json").await;

    let err = client_for(&base).pool_deposit_address().await.unwrap_err();
    assert!(matches!(err, ClientError::ParseError { .. }));
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}"))
        .tree_root()
        .await
        .unwrap_err();
    assert!(
        matches!(err, ClientError::NetworkError { .. }),
        "unexpected error: {err:?}"
    );
}
