//! End-to-end tests for the HTTP surface over in-memory stores.
//!
//! Requests are driven through the `axum` router without binding a socket.
//! Tokens are minted locally and verified against a static JWK set.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use chrono::Utc;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::sync::Arc;
use storefront::api::{self, AppState};
use storefront::auth::{AccessClaims, JwksTokenVerifier, SharedTokenVerifier};
use storefront::message::adapters::InMemoryMessageRepository;
use storefront::product::adapters::InMemoryProductRepository;
use tower::ServiceExt;

const ISSUER: &str = "http://localhost:8180/realms/storefront";
const KEY_ID: &str = "test-key";
const SECRET: &[u8] = b"storefront-test-signing-secret-0123456789a";
const SECRET_B64: &str = "c3RvcmVmcm9udC10ZXN0LXNpZ25pbmctc2VjcmV0LTAxMjM0NTY3ODlh";

#[fixture]
fn app() -> Router {
    let keys: JwkSet = serde_json::from_value(json!({
        "keys": [{"kty": "oct", "kid": KEY_ID, "alg": "HS256", "k": SECRET_B64}]
    }))
    .expect("valid JWK set");
    let verifier: SharedTokenVerifier = Arc::new(JwksTokenVerifier::with_static_keys(ISSUER, keys));
    api::router(AppState::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(InMemoryProductRepository::new()),
        verifier,
    ))
}

#[fixture]
fn token() -> String {
    mint(ISSUER, 300, SECRET)
}

fn mint(issuer: &str, expires_in: i64, secret: &[u8]) -> String {
    let claims = AccessClaims {
        iss: issuer.to_owned(),
        exp: u64::try_from(Utc::now().timestamp() + expires_in).unwrap_or_default(),
        sub: Some("service-account-product-service".to_owned()),
        azp: Some("product-service".to_owned()),
        scope: Some("profile email".to_owned()),
    };
    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(KEY_ID.to_owned());
    encode(&header, &claims, &EncodingKey::from_secret(secret)).expect("token encodes")
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request builds")
}

fn post(path: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(bearer) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {bearer}"));
    }
    builder
        .body(Body::from(body.to_owned()))
        .expect("request builds")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, headers, body)
}

#[rstest]
#[case("/api/messages")]
#[case("/api/products")]
#[tokio::test(flavor = "multi_thread")]
async fn listing_an_empty_store_returns_empty_array(app: Router, #[case] path: &str) {
    let (status, _, body) = send(&app, get(path)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn product_post_without_token_is_rejected_and_not_stored(app: Router) {
    let (status, headers, _) = send(
        &app,
        post("/api/products", r#"{"title":"Widget"}"#, None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        headers.get(header::WWW_AUTHENTICATE).map(|value| value.as_bytes()),
        Some(b"Bearer".as_slice())
    );
    let (_, _, listed) = send(&app, get("/api/products")).await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn product_post_with_token_is_created_and_listed(app: Router, token: String) {
    let (status, _, created) = send(
        &app,
        post("/api/products", r#"{"title":"Widget"}"#, Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1, "title": "Widget", "description": null}));

    let (status, _, listed) = send(&app, get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn product_with_empty_title_is_a_bad_request(app: Router, token: String) {
    let (status, _, body) = send(
        &app,
        post(
            "/api/products",
            r#"{"title":"","description":"no title"}"#,
            Some(&token),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(
        body["violations"],
        json!([{"field": "title", "reason": "must not be empty"}])
    );
    let (_, _, listed) = send(&app, get("/api/products")).await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[case::wrong_signature(mint(ISSUER, 300, b"not-the-provider-signing-secret"))]
#[case::expired(mint(ISSUER, -3600, SECRET))]
#[case::foreign_issuer(mint("http://other-idp.example/realms/x", 300, SECRET))]
#[case::garbage("definitely-not-a-jwt".to_owned())]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_tokens_get_invalid_token_challenge(app: Router, #[case] bad_token: String) {
    let (status, headers, _) = send(
        &app,
        post("/api/products", r#"{"title":"Widget"}"#, Some(&bad_token)),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        headers.get(header::WWW_AUTHENTICATE).map(|value| value.as_bytes()),
        Some(br#"Bearer error="invalid_token""#.as_slice())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authentication_is_checked_before_the_body(app: Router) {
    let (status, _, _) = send(&app, post("/api/messages", "{not json", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_is_a_bad_request(app: Router, token: String) {
    let (status, _, body) = send(&app, post("/api/products", "{\"title\":", Some(&token))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_json_content_type_is_unsupported(app: Router, token: String) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(r#"{"title":"Widget"}"#))
        .expect("request builds");

    let (status, _, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn message_post_ignores_client_id_and_timestamp(app: Router, token: String) {
    let payload = json!({
        "id": 99,
        "content": "Hello",
        "createdBy": "alice",
        "createdAt": "1999-01-01T00:00:00Z"
    })
    .to_string();

    let (status, _, created) = send(&app, post("/api/messages", &payload, Some(&token))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["content"], "Hello");
    assert_eq!(created["createdBy"], "alice");
    let created_at = created["createdAt"].as_str().expect("timestamp string");
    assert!(!created_at.starts_with("1999"));

    let (_, _, listed) = send(&app, get("/api/messages")).await;
    assert_eq!(listed, json!([created]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn message_with_empty_fields_reports_each_violation(app: Router, token: String) {
    let (status, _, body) = send(
        &app,
        post("/api/messages", r#"{"content":""}"#, Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let violations = body["violations"].as_array().expect("violations array");
    let fields: BTreeSet<_> = violations
        .iter()
        .filter_map(|violation| violation["field"].as_str())
        .collect();
    assert_eq!(fields, BTreeSet::from(["content", "createdBy"]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_message_posts_never_share_an_id(app: Router, token: String) {
    let handles: Vec<_> = (0..32)
        .map(|n| {
            let router = app.clone();
            let bearer = token.clone();
            tokio::spawn(async move {
                let payload = json!({"content": format!("message {n}"), "createdBy": "load"});
                let (status, _, body) = send(
                    &router,
                    post("/api/messages", &payload.to_string(), Some(&bearer)),
                )
                .await;
                assert_eq!(status, StatusCode::CREATED);
                body["id"].as_u64().expect("numeric id")
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        ids.insert(handle.await.expect("task completes"));
    }
    assert_eq!(ids.len(), 32);

    let (_, _, listed) = send(&app, get("/api/messages")).await;
    let entries = listed.as_array().expect("array");
    assert_eq!(entries.len(), 32);
    let listed_ids: Vec<_> = entries.iter().filter_map(|m| m["id"].as_u64()).collect();
    assert!(listed_ids.windows(2).all(|pair| pair[0] < pair[1]));
}
