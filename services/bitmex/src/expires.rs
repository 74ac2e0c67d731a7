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
use std::time::Duration;

use apisign_core::time::{now, unix_timestamp_after};

use crate::constants::DEFAULT_EXPIRES_IN;

const MIN_EXPIRES_IN: Duration = Duration::from_secs(1);

/// GenerateExpires produces the `api-expires` value for one signing call.
///
/// The value is a base-10 Unix timestamp in seconds. It is asked for once per
/// signed request and never cached.
pub trait GenerateExpires: Debug + Send + Sync + 'static {
    /// Generate the expiration for a request being signed now.
    fn generate_expires(&self) -> String;
}

/// Expire a fixed window after the current wall-clock time.
///
/// The expiration is rounded up to a whole second and is always at least one
/// second in the future, even for a zero window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiresIn(pub Duration);

impl Default for ExpiresIn {
    fn default() -> Self {
        Self(DEFAULT_EXPIRES_IN)
    }
}

impl GenerateExpires for ExpiresIn {
    fn generate_expires(&self) -> String {
        unix_timestamp_after(now(), self.0.max(MIN_EXPIRES_IN)).to_string()
    }
}

/// Always return the same expiration.
///
/// # Note
///
/// Requests signed with a fixed expiration are rejected once it passes. Only
/// use this for testing or for reproducing a known signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedExpires(pub String);

impl FixedExpires {
    /// Create a fixed expiration.
    pub fn new(expires: impl Into<String>) -> Self {
        Self(expires.into())
    }
}

impl GenerateExpires for FixedExpires {
    fn generate_expires(&self) -> String {
        self.0.clone()
    }
}

/// Adapt a closure into a [`GenerateExpires`].
///
/// ```
/// use apisign_bitmex::ExpiresFn;
/// use apisign_bitmex::RequestSigner;
///
/// let signer = RequestSigner::new("key", "secret")
///     .with_expires(ExpiresFn(|| "1518064236".to_string()));
/// ```
#[derive(Clone)]
pub struct ExpiresFn<F>(pub F);

impl<F> GenerateExpires for ExpiresFn<F>
where
    F: Fn() -> String + Send + Sync + 'static,
{
    fn generate_expires(&self) -> String {
        (self.0)()
    }
}

impl<F> Debug for ExpiresFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ExpiresFn")
    }
}
