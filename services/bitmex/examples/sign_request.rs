use anyhow::Result;
use apisign_bitmex::{Config, RequestSigner, SignOutcome, API_EXPIRES, API_KEY, API_SIGNATURE};
use apisign_core::{Body, OsEnv};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Falls back to a demo key if BITMEX_API_KEY/BITMEX_API_SECRET are unset.
    let cfg = Config::new().from_env(&OsEnv)?;
    let cfg = match cfg.credential() {
        Ok(_) => cfg,
        Err(_) => cfg
            .with_api_key("LAqUlngMIQkIUjXMUreyu3qn")
            .with_api_secret("chNOOS4KvNXR_Xq4k4c9qsfoKWvnDecLATCRlcBwyKDYnWgO"),
    };
    let signer = RequestSigner::from_config(&cfg)?;

    let mut req = http::Request::post("https://www.bitmex.com/api/v1/order")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"symbol":"XBTUSD","orderQty":1,"ordType":"Market"}"#))?;

    match signer.sign(&mut req).await? {
        SignOutcome::Signed(signed) => {
            println!("{API_KEY}: {:?}", signed.headers()[API_KEY]);
            println!("{API_EXPIRES}: {:?}", signed.headers()[API_EXPIRES]);
            println!(
                "{API_SIGNATURE} length: {}",
                signed.headers()[API_SIGNATURE].len()
            );
        }
        SignOutcome::Unchanged(_) => println!("request was already signed"),
    }

    Ok(())
}
