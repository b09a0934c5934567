use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_cover_every_service() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
    assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    assert_eq!(cfg.endpoints.len(), Service::ALL.len());
    assert_eq!(cfg.upstream_url("top20"), Some("https://functions.poehali.dev/3a7d0c03-532a-459f-9580-a416ebac4e41"));
    assert_eq!(
        cfg.upstream_url("owner-transactions"),
        Some("https://functions.poehali.dev/d65e7c1b-75b3-4a33-965b-70ee3a543a50")
    );
    assert_eq!(cfg.upstream_url("billing"), None);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let cfg = Config::from_lookup(lookup(&[("UPSTREAM_BASE_URL", "http://127.0.0.1:9000/")])).unwrap();
    assert_eq!(cfg.upstream_url("admin-auth"), Some("http://127.0.0.1:9000/f446518c-113b-41ed-8bdc-17ef6babda08"));
}

#[test]
fn per_service_override_wins() {
    let cfg = Config::from_lookup(lookup(&[("UPSTREAM_OWNER_LISTING_SUBMISSION", "https://fn.example/abc")])).unwrap();
    assert_eq!(cfg.upstream_url("owner-listing-submission"), Some("https://fn.example/abc"));
    assert_eq!(cfg.upstream_url("owner-listings"), Some("https://functions.poehali.dev/f431775b-031f-4417-b3eb-9e0475119162"));
}

#[test]
fn every_service_defaults_to_a_distinct_function() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    let urls: std::collections::BTreeSet<&String> = cfg.endpoints.values().collect();
    assert_eq!(urls.len(), Service::ALL.len());
    for url in urls {
        let id = url.strip_prefix(DEFAULT_UPSTREAM_BASE_URL).unwrap().trim_start_matches('/');
        assert_eq!(id.len(), 36, "{url}");
        assert_eq!(id.matches('-').count(), 4, "{url}");
    }
}

#[test]
fn override_var_names() {
    assert_eq!(override_var("admin-auth"), "UPSTREAM_ADMIN_AUTH");
    assert_eq!(override_var("top20"), "UPSTREAM_TOP20");
}

#[test]
fn malformed_numbers_are_errors() {
    let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { ref var, .. } if var == "PORT"));
    assert!(Config::from_lookup(lookup(&[("MAX_BODY_BYTES", "-1")])).is_err());
    let cfg = Config::from_lookup(lookup(&[("UPSTREAM_TIMEOUT_SECS", " 5 ")])).unwrap();
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(5));
}

#[test]
fn endpoints_yaml_is_validated() {
    let map = parse_endpoints("e.yaml", "top20: https://fn.example/t\nstatistics: https://fn.example/s\n").unwrap();
    assert_eq!(map.get("top20").map(String::as_str), Some("https://fn.example/t"));
    assert!(matches!(parse_endpoints("e.yaml", "billing: https://x\n"), Err(ConfigError::UnknownService(name)) if name == "billing"));
    assert!(matches!(parse_endpoints("e.yaml", "- not a map\n"), Err(ConfigError::EndpointsParse { .. })));
}

#[test]
fn endpoints_file_sits_between_override_and_base() {
    let path = std::env::temp_dir().join(format!("hourly-endpoints-{}.yaml", std::process::id()));
    std::fs::write(&path, "top20: https://file.example/top\nstatistics: https://file.example/stats\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let cfg = Config::from_lookup(lookup(&[
        ("ENDPOINTS_FILE", path_str.as_str()),
        ("UPSTREAM_STATISTICS", "https://env.example/stats"),
    ]))
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(cfg.upstream_url("top20"), Some("https://file.example/top"));
    assert_eq!(cfg.upstream_url("statistics"), Some("https://env.example/stats"));
    assert_eq!(cfg.upstream_url("subscription"), Some("https://functions.poehali.dev/083c2fbe-03b3-474d-accd-281d4089bb06"));
}

#[test]
fn missing_endpoints_file_is_reported() {
    let err = Config::from_lookup(lookup(&[("ENDPOINTS_FILE", "/nonexistent/hourly/endpoints.yaml")])).unwrap_err();
    assert!(matches!(err, ConfigError::EndpointsRead { .. }));
}
