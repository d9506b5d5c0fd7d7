// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for credentials and fetch configuration.

use std::time::Duration;

use folio_core::content::{ApiCredentials, ApiMode, ContentConfig};

#[test]
fn test_new_credentials_use_master_environment() {
    let creds = ApiCredentials::new("space1", "del", "pre");
    assert_eq!(creds.space_id, "space1");
    assert_eq!(creds.environment, "master");
}

#[test]
fn test_tokens_and_hosts_differ_per_mode() {
    let creds = ApiCredentials::new("space1", "del", "pre");
    assert_ne!(
        creds.token_for(ApiMode::Delivery),
        creds.token_for(ApiMode::Preview)
    );
    assert_ne!(
        creds.host_for(ApiMode::Delivery),
        creds.host_for(ApiMode::Preview)
    );
}

#[test]
fn test_credentials_serde_roundtrip() {
    let creds = ApiCredentials::new("space1", "del", "pre").with_environment("staging");
    let json = serde_json::to_string(&creds).unwrap();
    let back: ApiCredentials = serde_json::from_str(&json).unwrap();
    assert_eq!(back, creds);
}

#[test]
fn test_content_config_defaults() {
    let config = ContentConfig::new(ApiCredentials::new("s", "d", "p"));
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_response_size, 5 * 1024 * 1024);
    assert!(config.proxy_url.is_none());
}

#[test]
fn test_content_config_proxy_builder() {
    let config = ContentConfig::new(ApiCredentials::new("s", "d", "p"))
        .with_proxy("socks5://127.0.0.1:1080")
        .with_timeout(Duration::from_secs(5));
    assert_eq!(config.proxy_url.as_deref(), Some("socks5://127.0.0.1:1080"));
    assert_eq!(config.timeout, Duration::from_secs(5));
}
