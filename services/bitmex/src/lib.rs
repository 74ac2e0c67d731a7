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

//! Signer for the BitMEX style exchange API.
//!
//! Requests are authenticated with an API key id and an HMAC-SHA256 signature
//! over the request method, path, query, expiration and body.
//!
//! ## Example
//!
//! ```no_run
//! use apisign_bitmex::{RequestSigner, SignOutcome};
//! use apisign_core::Body;
//!
//! # async fn example() -> apisign_core::Result<()> {
//! let signer = RequestSigner::new("key_id", "key_secret");
//!
//! let mut req = http::Request::post("https://www.bitmex.com/api/v1/order")
//!     .header("content-type", "application/json")
//!     .body(Body::from(r#"{"symbol":"XBTUSD","orderQty":1}"#))?;
//!
//! if let SignOutcome::Signed(signed) = signer.sign(&mut req).await? {
//!     println!("signature: {:?}", signed.headers()["api-signature"]);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod constants;
pub use constants::{API_EXPIRES, API_KEY, API_SIGNATURE, DEFAULT_EXPIRES_IN};

mod credential;
pub use credential::Credential;

mod expires;
pub use expires::{ExpiresFn, ExpiresIn, FixedExpires, GenerateExpires};

mod key;
pub use key::SigningKey;

mod sign_request;
pub use sign_request::{RequestSigner, SignOutcome};

mod sign_http_send;
pub use sign_http_send::SignHttpSend;
