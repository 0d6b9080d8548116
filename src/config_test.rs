use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn disable_auth_true_skips_endpoint_requirements() {
    let cfg = AuthConfig::from_lookup(lookup_from(&[("DISABLE_AUTH", "true")])).unwrap();
    assert!(cfg.disable_auth);
    assert!(cfg.endpoint.is_none());
    assert_eq!(cfg, AuthConfig::disabled());
}

#[test]
fn disable_auth_only_accepts_exact_true() {
    for raw in ["TRUE", "1", "yes", " true", ""] {
        let cfg = AuthConfig::from_lookup(lookup_from(&[
            ("DISABLE_AUTH", raw),
            ("SUPABASE_URL", "https://abcd.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();
        assert!(!cfg.disable_auth, "{raw:?} must not disable auth");
    }
}

#[test]
fn enabled_auth_requires_url() {
    let err = AuthConfig::from_lookup(lookup_from(&[("SUPABASE_ANON_KEY", "anon")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingVar { var: "SUPABASE_URL" });
}

#[test]
fn enabled_auth_requires_non_blank_anon_key() {
    let err = AuthConfig::from_lookup(lookup_from(&[
        ("SUPABASE_URL", "https://abcd.supabase.co"),
        ("SUPABASE_ANON_KEY", "   "),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::MissingVar { var: "SUPABASE_ANON_KEY" });
}

#[test]
fn endpoint_url_is_trimmed_of_trailing_slash() {
    let cfg = AuthConfig::from_lookup(lookup_from(&[
        ("SUPABASE_URL", "https://abcd.supabase.co/"),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap();
    let endpoint = cfg.endpoint.unwrap();
    assert_eq!(endpoint.url, "https://abcd.supabase.co");
    assert_eq!(endpoint.anon_key, "anon");
}

#[test]
fn project_ref_uses_first_host_label() {
    let endpoint = ProviderEndpoint { url: "https://abcd.supabase.co".to_owned(), anon_key: String::new() };
    assert_eq!(endpoint.project_ref(), "abcd");
}

#[test]
fn project_ref_handles_localhost_with_port() {
    let endpoint = ProviderEndpoint { url: "http://localhost:54321".to_owned(), anon_key: String::new() };
    assert_eq!(endpoint.project_ref(), "localhost");
}

#[test]
fn project_ref_falls_back_for_empty_host() {
    let endpoint = ProviderEndpoint { url: "http://".to_owned(), anon_key: String::new() };
    assert_eq!(endpoint.project_ref(), "local");
}

#[test]
fn error_message_names_the_variable() {
    let err = ConfigError::MissingVar { var: "SUPABASE_URL" };
    assert_eq!(err.to_string(), "missing required config var: SUPABASE_URL");
}
