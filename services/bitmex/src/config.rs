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

use apisign_core::utils::Redact;
use apisign_core::{Env, Error, Result};

use crate::constants::*;
use crate::Credential;

/// Config carries all the configuration for the exchange signer.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BITMEX_API_KEY`]
    pub api_key: Option<String>,
    /// `api_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BITMEX_API_SECRET`]
    pub api_secret: Option<String>,
    /// `expires_in` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BITMEX_API_EXPIRES_IN`], in seconds
    ///
    /// Falls back to [`DEFAULT_EXPIRES_IN`] when unset.
    pub expires_in: Option<Duration>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set api_secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Set expires_in
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = Some(expires_in);
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, env: &impl Env) -> Result<Self> {
        if let Some(v) = env.var(BITMEX_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = env.var(BITMEX_API_SECRET) {
            self.api_secret.get_or_insert(v);
        }
        if self.expires_in.is_none() {
            if let Some(v) = env.var(BITMEX_API_EXPIRES_IN) {
                self.expires_in = Some(parse_expires_in(&v)?);
            }
        }

        Ok(self)
    }

    /// Build the credential from this config.
    pub fn credential(&self) -> Result<Credential> {
        match (&self.api_key, &self.api_secret) {
            (Some(key_id), Some(key_secret)) => Ok(Credential::new(key_id, key_secret)),
            (None, _) => Err(Error::config_invalid(format!(
                "api key is missing, set {BITMEX_API_KEY}"
            ))),
            (_, None) => Err(Error::config_invalid(format!(
                "api secret is missing, set {BITMEX_API_SECRET}"
            ))),
        }
    }

    /// The signing window, or the default one.
    pub fn expires_in(&self) -> Duration {
        self.expires_in.unwrap_or(DEFAULT_EXPIRES_IN)
    }
}

fn parse_expires_in(v: &str) -> Result<Duration> {
    match v.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        Ok(_) => Err(Error::config_invalid(format!(
            "{BITMEX_API_EXPIRES_IN} must be positive"
        ))),
        Err(err) => Err(Error::config_invalid(format!(
            "{BITMEX_API_EXPIRES_IN} is not a number of seconds: {v}"
        ))
        .with_source(err)),
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field("api_secret", &self.api_secret.as_ref().map(Redact::from))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
