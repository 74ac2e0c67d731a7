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

//! Time related utils.

use std::time::Duration;

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Unix timestamp in seconds of `time + window`, rounded up.
///
/// Any sub-second remainder moves the result to the next whole second, so a
/// non-zero window never yields a timestamp at or before `time`. Windows too
/// large to represent saturate instead of overflowing.
pub fn unix_timestamp_after(time: DateTime, window: Duration) -> i64 {
    let secs = i64::try_from(window.as_secs()).unwrap_or(i64::MAX);
    let nanos = u64::from(time.timestamp_subsec_nanos()) + u64::from(window.subsec_nanos());
    let carry = nanos.div_ceil(1_000_000_000) as i64;

    time.timestamp().saturating_add(secs).saturating_add(carry)
}
