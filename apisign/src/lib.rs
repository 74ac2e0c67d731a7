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

//! Signing exchange API requests without effort.
//!
//! This crate re-exports the core types and every enabled signer:
//!
//! - `bitmex`: HMAC-SHA256 API key signing for BitMEX style exchanges
//! - `default-context`: [`ReqwestHttpSend`] as the default transport

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use apisign_core::*;

#[cfg(feature = "default-context")]
pub use apisign_http_send_reqwest::ReqwestHttpSend;

#[cfg(feature = "bitmex")]
pub mod bitmex {
    pub use apisign_bitmex::*;
}
