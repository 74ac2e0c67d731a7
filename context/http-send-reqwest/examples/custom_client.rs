use std::time::Duration;

use apisign_core::{Body, HttpSend, Result};
use apisign_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("apisign-example/0.1")
        .build()
        .map_err(|err| apisign_core::Error::config_invalid("invalid client").with_source(err))?;

    let http = ReqwestHttpSend::new(client);

    let req = http::Request::builder()
        .method("GET")
        .uri("https://www.bitmex.com/api/v1/instrument/active")
        .body(Body::empty())?;

    match http.http_send(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("Response size: {} bytes", resp.body().len());
        }
        Err(err) => eprintln!("Request failed: {err}"),
    }

    Ok(())
}
