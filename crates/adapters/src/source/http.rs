// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP fee source for the MetaMask-style suggested gas fees endpoint

use super::{FeeSource, FetchError};
use gw_core::{Clock, FeeLevel, Reading};
use std::time::Duration;

/// Blocking HTTP source. One GET per fetch, bounded by a global timeout.
#[derive(Clone)]
pub struct HttpFeeSource<C: Clock> {
    url: String,
    level: FeeLevel,
    agent: ureq::Agent,
    clock: C,
}

impl<C: Clock> HttpFeeSource<C> {
    pub fn new(url: impl Into<String>, level: FeeLevel, timeout: Duration, clock: C) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            url: url.into(),
            level,
            agent,
            clock,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<C: Clock + 'static> FeeSource for HttpFeeSource<C> {
    fn fetch(&self) -> Result<Reading, FetchError> {
        // Non-2xx statuses surface as ureq::Error::StatusCode and are
        // treated like any other transport failure.
        let mut response = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|e| FetchError::Transient(format!("GET {} failed: {}", self.url, e)))?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| FetchError::Transient(format!("failed to read response: {}", e)))?;

        Ok(Reading::parse_quote(&body, self.level, self.clock.wall())?)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
