use std::sync::Arc;

use apisign_bitmex::{SignHttpSend, API_EXPIRES, API_KEY, API_SIGNATURE};
use apisign_core::{Body, ErrorKind, HttpSend};
use http::{HeaderValue, StatusCode};
use pretty_assertions::assert_eq;

use super::{build_request, init_signer, streaming, BrokenBody, RecordingHttpSend, KEY_ID};

const ORDER: &str = r#"{"symbol":"XBTM15","price":219.0,"clOrdID":"mm_bitmex_1a/oemUeQ4CAJZgP3fjHsA","orderQty":98}"#;

fn interceptor(expires: &str) -> (SignHttpSend<Arc<RecordingHttpSend>>, Arc<RecordingHttpSend>) {
    let next = Arc::new(RecordingHttpSend::default());
    let http = SignHttpSend::with_http_send(init_signer(expires), next.clone());
    (http, next)
}

#[tokio::test]
async fn test_request_is_signed_before_sending() -> anyhow::Result<()> {
    let (http, next) = interceptor("1518064238");

    let req = build_request("POST", "/api/v1/order", Some(streaming(ORDER)));
    let resp = http.http_send(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body().as_ref(), b"ok");

    let requests = next.requests.lock().expect("lock must not be poisoned");
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.headers()[API_KEY], KEY_ID);
    assert_eq!(sent.headers()[API_EXPIRES], "1518064238");
    assert_eq!(
        sent.headers()[API_SIGNATURE],
        "1749cd2ccae4aa49048ae09f0b95110cee706e0944e6a14ad0b3a8cb45bd336b"
    );
    assert_eq!(sent.body().as_ref(), ORDER.as_bytes());
    Ok(())
}

#[tokio::test]
async fn test_signed_request_is_sent_as_is() -> anyhow::Result<()> {
    let (http, next) = interceptor("1518064236");

    let mut req = build_request("GET", "/api/v1/position", Some(streaming("body-value")));
    req.headers_mut()
        .insert(API_SIGNATURE, HeaderValue::from_static("pregenerated"));
    http.http_send(req).await?;

    let requests = next.requests.lock().expect("lock must not be poisoned");
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.headers().len(), 1);
    assert_eq!(sent.headers()[API_SIGNATURE], "pregenerated");
    assert_eq!(sent.body().as_ref(), b"body-value");
    Ok(())
}

#[tokio::test]
async fn test_unsigned_request_is_never_sent() {
    let (http, next) = interceptor("1518064238");

    let req = build_request(
        "POST",
        "/api/v1/order",
        Some(Body::wrap(BrokenBody::new("{"))),
    );
    let err = http
        .http_send(req)
        .await
        .expect_err("broken body must not be sent");
    assert_eq!(err.kind(), ErrorKind::BodyUnreadable);

    assert!(next
        .requests
        .lock()
        .expect("lock must not be poisoned")
        .is_empty());
}

#[tokio::test]
async fn test_every_request_gets_its_own_signature() -> anyhow::Result<()> {
    let (http, next) = interceptor("1518064236");

    http.http_send(build_request("GET", "/api/v1/instrument", None))
        .await?;
    http.http_send(build_request("GET", "/api/v1/position", None))
        .await?;

    let requests = next.requests.lock().expect("lock must not be poisoned");
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].headers()[API_SIGNATURE],
        "c7682d435d0cfe87c16098df34ef2eb5a549d4c5a3c2b1f0f77b8af73423bf00"
    );
    assert!(requests[0].headers()[API_SIGNATURE] != requests[1].headers()[API_SIGNATURE]);
    Ok(())
}
