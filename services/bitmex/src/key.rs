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

use std::fmt::{Debug, Formatter};

use apisign_core::hash::hex_hmac_sha256;
use apisign_core::utils::Redact;

/// SigningKey computes HMAC-SHA256 signatures with the API key secret.
///
/// The secret is used as raw bytes, the output is lowercase hex.
#[derive(Clone)]
pub struct SigningKey {
    secret: String,
}

impl SigningKey {
    /// Create a signing key from the API key secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign arbitrary bytes.
    pub fn sign(&self, data: &[u8]) -> String {
        hex_hmac_sha256(self.secret.as_bytes(), data)
    }

    /// Sign a string, encoded as UTF-8.
    pub fn sign_str(&self, data: &str) -> String {
        self.sign(data.as_bytes())
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}
