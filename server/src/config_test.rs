use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// parse_path_list
// =============================================================================

#[test]
fn path_list_normalises_slashes_and_skips_blanks() {
    assert_eq!(parse_path_list("dashboard, /profile/ ,,/add-blog"), ["/dashboard", "/profile", "/add-blog"]);
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.session_cookie, "__session");
    assert_eq!(config.protected_paths, ["/dashboard", "/profile", "/settings", "/add-blog"]);
    assert!(config.auth.userinfo_url.is_none());
    assert!(!config.cookie_secure);
}

#[test]
fn values_override_defaults() {
    let config = Config::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("AUTH_SIGN_IN_URL", "https://accounts.example.com/sign-in"),
        ("AUTH_USERINFO_URL", "https://api.example.com/v1/me"),
        ("AUTH_SESSION_COOKIE", "sid"),
        ("PROTECTED_PATHS", "/add-blog"),
    ]))
    .unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.auth.sign_in_url.as_deref(), Some("https://accounts.example.com/sign-in"));
    assert!(config.auth.sign_up_url.is_none());
    assert_eq!(config.session_cookie, "sid");
    assert_eq!(config.protected_paths, ["/add-blog"]);
}

#[test]
fn content_api_url_is_left_to_the_client_build() {
    let config = Config::from_lookup(lookup(&[("CONTENT_API_URL", "not a url")])).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn https_sign_in_implies_secure_cookies_unless_overridden() {
    let implied = Config::from_lookup(lookup(&[("AUTH_SIGN_IN_URL", "https://a.example.com")])).unwrap();
    assert!(implied.cookie_secure);

    let overridden = Config::from_lookup(lookup(&[
        ("AUTH_SIGN_IN_URL", "https://a.example.com"),
        ("COOKIE_SECURE", "off"),
    ]))
    .unwrap();
    assert!(!overridden.cookie_secure);
}

#[test]
fn blank_values_count_as_unset() {
    let config = Config::from_lookup(lookup(&[("PORT", "  "), ("AUTH_USERINFO_URL", "")])).unwrap();
    assert_eq!(config.port, 3000);
    assert!(config.auth.userinfo_url.is_none());
}

#[test]
fn invalid_port_is_rejected() {
    let err = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
}

#[test]
fn non_http_url_is_rejected() {
    let err = Config::from_lookup(lookup(&[("AUTH_USERINFO_URL", "ftp://x")])).unwrap_err();
    assert_eq!(err.to_string(), "AUTH_USERINFO_URL must be an http(s) URL, got ftp://x");
}
