use anyhow::Result;
use apisign::bitmex::{Config, RequestSigner, SignHttpSend};
use apisign::{Body, HttpSend, OsEnv};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Requires BITMEX_API_KEY and BITMEX_API_SECRET.
    let cfg = Config::new().from_env(&OsEnv)?;
    let http = SignHttpSend::new(RequestSigner::from_config(&cfg)?);

    let req = http::Request::get("https://www.bitmex.com/api/v1/position?count=5")
        .body(Body::empty())?;
    let resp = http.http_send(req).await?;

    println!("status: {}", resp.status());
    println!("body: {}", String::from_utf8_lossy(resp.body()));
    Ok(())
}
