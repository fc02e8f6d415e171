use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_unset_is_none() {
    assert_eq!(parse_port(None).unwrap(), None);
}

#[test]
fn parse_port_blank_is_none() {
    assert_eq!(parse_port(Some("   ")).unwrap(), None);
}

#[test]
fn parse_port_valid_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), Some(8080));
    assert_eq!(parse_port(Some(" 3000 ")).unwrap(), Some(3000));
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
    assert!(parse_port(Some("-1")).is_err());
}

#[test]
fn invalid_port_error_message_names_value() {
    let err = ConfigError::InvalidPort("abc".to_owned());
    assert_eq!(err.to_string(), "invalid PORT value: \"abc\"");
}

// =============================================================================
// parse_bool / env_bool: env tests use unique variable names.
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for raw in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for raw in ["0", "false", "no", "off", "No"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

#[test]
fn env_bool_reads_variable() {
    let key = "__TEST_ECOLEARN_EB_SET_4411__";
    unsafe { std::env::set_var(key, "off") };
    assert_eq!(env_bool(key), Some(false));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_ECOLEARN_EB_SURELY_UNSET_907__"), None);
}

// =============================================================================
// ServerConfig::with_overrides
// =============================================================================

fn leptos_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("ecolearn")
        .site_addr(SocketAddr::from(([127, 0, 0, 1], 3000)))
        .build()
}

#[test]
fn overrides_unset_keep_site_addr_and_enable_compression() {
    let config = ServerConfig::with_overrides(leptos_options(), None, None).unwrap();
    assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
    assert!(config.compression);
}

#[test]
fn port_override_replaces_only_the_port() {
    let config = ServerConfig::with_overrides(leptos_options(), Some("8081"), None).unwrap();
    assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 8081)));
    assert_eq!(config.leptos_options.site_addr.port(), 3000);
}

#[test]
fn invalid_port_override_fails() {
    let err = ServerConfig::with_overrides(leptos_options(), Some("http"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
}

#[test]
fn compression_override_is_respected() {
    let config = ServerConfig::with_overrides(leptos_options(), None, Some(false)).unwrap();
    assert!(!config.compression);
}
