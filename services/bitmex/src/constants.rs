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

use std::time::Duration;

/// Header carrying the credential key id.
pub const API_KEY: &str = "api-key";
/// Header carrying the Unix timestamp after which the signature is rejected.
pub const API_EXPIRES: &str = "api-expires";
/// Header carrying the hex encoded HMAC-SHA256 signature.
pub const API_SIGNATURE: &str = "api-signature";

// Env values used to load the config.
pub const BITMEX_API_KEY: &str = "BITMEX_API_KEY";
pub const BITMEX_API_SECRET: &str = "BITMEX_API_SECRET";
pub const BITMEX_API_EXPIRES_IN: &str = "BITMEX_API_EXPIRES_IN";

/// Signatures stay valid for this long unless configured otherwise.
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(5);
