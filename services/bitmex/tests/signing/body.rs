use apisign_bitmex::SignOutcome;
use apisign_core::{Body, ErrorKind};
use http::{HeaderMap, HeaderValue};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;

use super::{build_request, init_signer, read_body, streaming, BrokenBody, TrailerBody};

const ORDER: &str = r#"{"symbol":"XBTUSD","orderQty":10,"ordType":"Market"}"#;

#[tokio::test]
async fn test_signed_body_is_readable() -> anyhow::Result<()> {
    let signer = init_signer("1518064238");
    let mut req = build_request("POST", "/api/v1/order", Some(streaming(ORDER)));

    let SignOutcome::Signed(mut signed) = signer.sign(&mut req).await? else {
        panic!("request must be signed");
    };

    assert_eq!(read_body(&mut signed).await, ORDER);
    Ok(())
}

#[tokio::test]
async fn test_original_body_is_restored() -> anyhow::Result<()> {
    let signer = init_signer("1518064238");
    let mut req = build_request("POST", "/api/v1/order", Some(streaming(ORDER)));
    assert!(req.body().is_streaming());

    signer.sign(&mut req).await?;

    assert!(!req.body().is_streaming());
    assert_eq!(read_body(&mut req).await, ORDER);
    Ok(())
}

#[tokio::test]
async fn test_absent_body_stays_absent() -> anyhow::Result<()> {
    let signer = init_signer("1518064236");
    let mut req = build_request("GET", "/api/v1/instrument", None);

    let SignOutcome::Signed(signed) = signer.sign(&mut req).await? else {
        panic!("request must be signed");
    };

    assert!(signed.body().is_absent());
    assert!(req.body().is_absent());
    Ok(())
}

#[tokio::test]
async fn test_body_read_failure() -> anyhow::Result<()> {
    let signer = init_signer("1518064238");
    let mut req = build_request(
        "POST",
        "/api/v1/order",
        Some(Body::wrap(BrokenBody::new("{\"symbol\":"))),
    );

    let err = signer
        .sign(&mut req)
        .await
        .expect_err("broken body must fail signing");
    assert_eq!(err.kind(), ErrorKind::BodyUnreadable);

    // Nothing was signed and the original keeps what could be read.
    assert!(req.headers().is_empty());
    assert_eq!(read_body(&mut req).await, "{\"symbol\":");
    Ok(())
}

#[tokio::test]
async fn test_trailers_survive_signing() -> anyhow::Result<()> {
    let signer = init_signer("1518064238");
    let mut trailers = HeaderMap::new();
    trailers.insert("x-checksum", HeaderValue::from_static("abc123"));
    let mut req = build_request(
        "POST",
        "/api/v1/order",
        Some(Body::wrap(TrailerBody::new(ORDER, trailers.clone()))),
    );

    let SignOutcome::Signed(signed) = signer.sign(&mut req).await? else {
        panic!("request must be signed");
    };

    let collected = signed.into_body().collect().await.expect("body must be readable");
    assert_eq!(collected.trailers(), Some(&trailers));
    assert_eq!(collected.to_bytes(), ORDER);

    let collected = std::mem::take(req.body_mut())
        .collect()
        .await
        .expect("body must be readable");
    assert_eq!(collected.trailers(), Some(&trailers));
    Ok(())
}
