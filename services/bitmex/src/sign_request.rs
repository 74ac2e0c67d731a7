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

//! Exchange API request signer.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

use apisign_core::utils::Redact;
use apisign_core::{Body, Result};
use http::header::HeaderName;
use http::{HeaderValue, Method, Request, Uri};
use log::debug;

use crate::constants::*;
use crate::{Config, Credential, ExpiresIn, GenerateExpires, SigningKey};

/// Result of [`RequestSigner::sign`].
#[derive(Debug)]
pub enum SignOutcome<'a> {
    /// The request already carried a signature and was left untouched.
    ///
    /// This is the caller's own request, not a copy.
    Unchanged(&'a Request<Body>),
    /// A signed copy of the request.
    Signed(Request<Body>),
}

impl SignOutcome<'_> {
    /// Returns `true` if the request was already signed.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, SignOutcome::Unchanged(_))
    }

    /// The request that should be sent.
    pub fn request(&self) -> &Request<Body> {
        match self {
            SignOutcome::Unchanged(req) => req,
            SignOutcome::Signed(req) => req,
        }
    }
}

/// RequestSigner signs requests for the exchange API.
///
/// Every signed request carries three headers:
///
/// - `api-key`: the key id
/// - `api-expires`: Unix timestamp after which the server rejects the request
/// - `api-signature`: `hex(HMAC_SHA256(secret, VERB + PATH[?QUERY] + EXPIRES + BODY))`
///
/// The query string is signed exactly as it appears in the request URI. It is
/// neither sorted nor re-encoded, so the transport must send the URI
/// unchanged or the server will reject the signature.
///
/// - [API Key Authentication](https://www.bitmex.com/app/apiKeysUsage)
#[derive(Clone)]
pub struct RequestSigner {
    key_id: String,
    key: SigningKey,
    expires: Arc<dyn GenerateExpires>,
}

impl RequestSigner {
    /// Create a signer that expires requests 5 seconds after signing.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key: SigningKey::new(key_secret),
            expires: Arc::new(ExpiresIn::default()),
        }
    }

    /// Create a signer from a credential.
    pub fn from_credential(cred: Credential) -> Self {
        Self::new(cred.key_id, cred.key_secret)
    }

    /// Create a signer from config, honouring its signing window.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self::from_credential(cfg.credential()?).with_expires_in(cfg.expires_in()))
    }

    /// Replace the expiration policy.
    pub fn with_expires(mut self, expires: impl GenerateExpires) -> Self {
        self.expires = Arc::new(expires);
        self
    }

    /// Expire requests `window` after they are signed.
    ///
    /// Windows shorter than a second are raised to one second.
    pub fn with_expires_in(self, window: Duration) -> Self {
        self.with_expires(ExpiresIn(window))
    }

    /// The key id sent in the `api-key` header.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Sign the request.
    ///
    /// A request that already has an `api-signature` header is returned as
    /// [`SignOutcome::Unchanged`]. Otherwise the body is buffered and a signed
    /// copy is returned, leaving `req` with the same (re-readable) body and
    /// its original headers. A request without a body yields a copy without
    /// one. Body trailers are copied but never signed.
    ///
    /// Fails only if the body can't be read, in which case nothing is signed.
    pub async fn sign<'a>(&self, req: &'a mut Request<Body>) -> Result<SignOutcome<'a>> {
        if req.headers().contains_key(API_SIGNATURE) {
            debug!("request is already signed, skip signing");
            return Ok(SignOutcome::Unchanged(req));
        }

        let absent = req.body().is_absent();
        let body = req.body_mut().buffer().await?;

        let expires = self.expires.generate_expires();
        let string_to_sign = string_to_sign(req.method(), req.uri(), &expires, &body);
        let signature = self.key.sign(&string_to_sign);

        let cloned_body = if absent {
            Body::empty()
        } else {
            Body::from(body).with_trailers(req.body().trailers().cloned())
        };
        let mut signed = clone_request(req, cloned_body);
        let headers = signed.headers_mut();
        headers.insert(
            HeaderName::from_static(API_KEY),
            HeaderValue::from_str(&self.key_id)?,
        );
        headers.insert(
            HeaderName::from_static(API_EXPIRES),
            HeaderValue::from_str(&expires)?,
        );
        headers.insert(HeaderName::from_static(API_SIGNATURE), {
            let mut value = HeaderValue::from_str(&signature)?;
            value.set_sensitive(true);

            value
        });

        Ok(SignOutcome::Signed(signed))
    }
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("key_id", &Redact::from(&self.key_id))
            .field("key", &self.key)
            .field("expires", &self.expires)
            .finish()
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// UPPERCASE(VERB) + PATH + ["?" + QUERY] + EXPIRES + BODY
/// ```
///
/// There are no separators. The path and query are taken verbatim from the
/// URI, so an absolute URI only contributes its path and query.
fn string_to_sign(method: &Method, uri: &Uri, expires: &str, body: &[u8]) -> Vec<u8> {
    let path = match uri.path() {
        "" => "/",
        v => v,
    };

    let mut s = Vec::with_capacity(16 + path.len() + expires.len() + body.len());
    s.extend_from_slice(method.as_str().to_ascii_uppercase().as_bytes());
    s.extend_from_slice(path.as_bytes());
    if let Some(query) = uri.query() {
        s.push(b'?');
        s.extend_from_slice(query.as_bytes());
    }
    s.extend_from_slice(expires.as_bytes());
    s.extend_from_slice(body);

    debug!("string to sign: {}", String::from_utf8_lossy(&s));
    s
}

/// Copy everything but the body, which the caller provides.
fn clone_request(req: &Request<Body>, body: Body) -> Request<Body> {
    let mut cloned = Request::new(body);
    *cloned.method_mut() = req.method().clone();
    *cloned.uri_mut() = req.uri().clone();
    *cloned.version_mut() = req.version();
    *cloned.headers_mut() = req.headers().clone();
    *cloned.extensions_mut() = req.extensions().clone();
    cloned
}
