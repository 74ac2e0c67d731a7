use std::pin::Pin;
use std::str::FromStr;
use std::sync::Mutex;
use std::task::{Context, Poll};

use apisign_bitmex::{FixedExpires, RequestSigner};
use apisign_core::{Body, HttpSend, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, Request, StatusCode};
use http_body::Frame;
use http_body_util::BodyExt;

mod body;
mod interceptor;

pub const KEY_ID: &str = "LAqUlngMIQkIUjXMUreyu3qn";
pub const KEY_SECRET: &str = "chNOOS4KvNXR_Xq4k4c9qsfoKWvnDecLATCRlcBwyKDYnWgO";

pub fn init_signer(expires: &str) -> RequestSigner {
    let _ = env_logger::builder().is_test(true).try_init();

    RequestSigner::new(KEY_ID, KEY_SECRET).with_expires(FixedExpires::new(expires))
}

pub fn build_request(method: &str, uri: &str, body: Option<Body>) -> Request<Body> {
    let mut req = Request::new(body.unwrap_or_default());
    *req.method_mut() = Method::from_str(method).expect("method must be valid");
    *req.uri_mut() = http::Uri::from_str(uri).expect("uri must be valid");
    req
}

/// Wraps a body so that it can only be read as a stream, never peeked.
pub fn streaming(content: &'static str) -> Body {
    Body::wrap(http_body_util::Full::new(Bytes::from_static(content.as_bytes())))
}

pub async fn read_body(req: &mut Request<Body>) -> Bytes {
    let body = std::mem::take(req.body_mut());
    body.collect()
        .await
        .expect("body must be readable")
        .to_bytes()
}

/// Yields `prefix`, then fails like a dropped connection.
pub struct BrokenBody {
    prefix: Option<Bytes>,
}

impl BrokenBody {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix: Some(Bytes::from_static(prefix.as_bytes())),
        }
    }
}

impl http_body::Body for BrokenBody {
    type Data = Bytes;
    type Error = std::io::Error;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        _: &mut Context<'_>,
    ) -> Poll<Option<std::result::Result<Frame<Bytes>, std::io::Error>>> {
        match self.prefix.take() {
            Some(bs) => Poll::Ready(Some(Ok(Frame::data(bs)))),
            None => Poll::Ready(Some(Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )))),
        }
    }
}

/// Yields `data`, then `trailers`.
pub struct TrailerBody {
    data: Option<Bytes>,
    trailers: Option<http::HeaderMap>,
}

impl TrailerBody {
    pub fn new(data: &'static str, trailers: http::HeaderMap) -> Self {
        Self {
            data: Some(Bytes::from_static(data.as_bytes())),
            trailers: Some(trailers),
        }
    }
}

impl http_body::Body for TrailerBody {
    type Data = Bytes;
    type Error = std::io::Error;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        _: &mut Context<'_>,
    ) -> Poll<Option<std::result::Result<Frame<Bytes>, std::io::Error>>> {
        if let Some(bs) = self.data.take() {
            return Poll::Ready(Some(Ok(Frame::data(bs))));
        }
        Poll::Ready(self.trailers.take().map(|t| Ok(Frame::trailers(t))))
    }
}

/// Records every request it receives and answers `200 OK`.
#[derive(Debug, Default)]
pub struct RecordingHttpSend {
    pub requests: Mutex<Vec<Request<Bytes>>>,
}

#[async_trait]
impl HttpSend for RecordingHttpSend {
    async fn http_send(&self, req: Request<Body>) -> Result<http::Response<Bytes>> {
        let (parts, mut body) = req.into_parts();
        let bs = body.buffer().await?;
        self.requests
            .lock()
            .expect("lock must not be poisoned")
            .push(Request::from_parts(parts, bs));

        let mut resp = http::Response::new(Bytes::from_static(b"ok"));
        *resp.status_mut() = StatusCode::OK;
        Ok(resp)
    }
}
