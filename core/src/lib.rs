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

//! Core components for signing exchange API requests.
//!
//! This crate provides the foundational types and traits shared by the apisign
//! crates. Service crates (for example `apisign-bitmex`) build their signers on
//! top of them, and transport crates (for example `apisign-http-send-reqwest`)
//! implement [`HttpSend`] to actually put requests on the wire.
//!
//! ## Overview
//!
//! - **Body**: A request body that can be buffered once and read again, so that a
//!   signer can hash the payload without draining it for the transport.
//! - **HttpSend**: The request executor capability a signer wraps. Signers never
//!   perform network I/O themselves.
//! - **Env**: Environment access used to load configuration, with a static
//!   implementation for tests.
//!
//! ## Example
//!
//! ```no_run
//! use apisign_core::{Body, HttpSend, Result};
//! use async_trait::async_trait;
//! use bytes::Bytes;
//!
//! #[derive(Debug)]
//! struct EchoHttpSend;
//!
//! #[async_trait]
//! impl HttpSend for EchoHttpSend {
//!     async fn http_send(&self, req: http::Request<Body>) -> Result<http::Response<Bytes>> {
//!         let (_, mut body) = req.into_parts();
//!         let bs = body.buffer().await?;
//!         Ok(http::Response::new(bs))
//!     }
//! }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod body;
pub use body::{Body, BoxError};
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod http;
pub use self::http::HttpSend;
