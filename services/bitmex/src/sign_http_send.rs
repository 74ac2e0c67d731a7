// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use apisign_core::{Body, HttpSend, Result};
use apisign_http_send_reqwest::ReqwestHttpSend;
use async_trait::async_trait;
use bytes::Bytes;
use log::warn;

use crate::{RequestSigner, SignOutcome};

/// SignHttpSend signs every request before handing it to another [`HttpSend`].
///
/// It is an `HttpSend` itself, so it can be dropped in wherever a transport is
/// expected and callers never see the signing step.
///
/// ```no_run
/// use apisign_bitmex::{RequestSigner, SignHttpSend};
/// use apisign_core::{Body, HttpSend};
///
/// # async fn example() -> apisign_core::Result<()> {
/// let http = SignHttpSend::new(RequestSigner::new("key_id", "key_secret"));
///
/// let req = http::Request::get("https://www.bitmex.com/api/v1/position")
///     .body(Body::empty())?;
/// let resp = http.http_send(req).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SignHttpSend<S = ReqwestHttpSend> {
    signer: RequestSigner,
    next: S,
}

impl SignHttpSend {
    /// Sign requests and send them with a default reqwest client.
    pub fn new(signer: RequestSigner) -> Self {
        Self::with_http_send(signer, ReqwestHttpSend::default())
    }
}

impl<S: HttpSend> SignHttpSend<S> {
    /// Sign requests and send them with `next`.
    pub fn with_http_send(signer: RequestSigner, next: S) -> Self {
        Self { signer, next }
    }

    /// The signer used for every request.
    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }
}

#[async_trait]
impl<S: HttpSend> HttpSend for SignHttpSend<S> {
    async fn http_send(&self, mut req: http::Request<Body>) -> Result<http::Response<Bytes>> {
        let signed = match self.signer.sign(&mut req).await {
            Ok(SignOutcome::Signed(signed)) => Some(signed),
            Ok(SignOutcome::Unchanged(_)) => None,
            Err(err) => {
                warn!("failed to sign request, not sending it: {err}");
                return Err(err);
            }
        };

        self.next.http_send(signed.unwrap_or(req)).await
    }
}
