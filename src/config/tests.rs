// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use serde_json::json;

const CONFIG: &str = r#"
[app]
name = TestApp
debug = on
log-level = info
ratio = 0.75

[server]
host = localhost
port = 8080
retries = -1
features[] = auth
features[] = logging

[db.primary]
max_conn = 16
replica = null
"#;

#[test]
fn test_config_from_string() {
    let config = IniConfig::from_str(CONFIG).expect("Failed to parse config");

    let name: String = config.get("app.name").expect("Failed to get app.name");
    assert_eq!(name, "TestApp");

    let port: u16 = config.get("server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let debug: bool = config.get("app.debug").expect("Failed to get debug");
    assert!(debug);

    let ratio: f64 = config.get("app.ratio").unwrap();
    assert_eq!(ratio, 0.75);

    let features: Vec<String> = config.get("server.features").expect("Failed to get features");
    assert_eq!(features, vec!["auth", "logging"]);

    assert!(config.has("app.name"));
    assert!(!config.has("app.nonexistent"));
    assert!(!config.has("app"));

    assert_eq!(config.sections(), vec!["app", "server", "db.primary"]);
    assert_eq!(
        config.get_keys("server").unwrap(),
        vec!["host", "port", "retries", "features"]
    );
    assert!(config.source().is_none());
}

#[test]
fn test_dotted_section_names() {
    let config = IniConfig::from_str(CONFIG).unwrap();

    let max_conn: usize = config.get("db.primary.max_conn").unwrap();
    assert_eq!(max_conn, 16);

    let replica: Option<String> = config.get("db.primary.replica").unwrap();
    assert_eq!(replica, None);
}

#[test]
fn test_snake_and_kebab_lookup() {
    let config = IniConfig::from_str(CONFIG).unwrap();

    let level: String = config.get("app.log_level").unwrap();
    assert_eq!(level, "info");
    let max_conn: i64 = config.get("db.primary.max-conn").unwrap();
    assert_eq!(max_conn, 16);
}

#[test]
fn test_missing_path_and_defaults() {
    let config = IniConfig::from_str(CONFIG).unwrap();

    assert!(matches!(
        config.get::<String>("server.missing"),
        Err(IniError::NotFound { code: Some(304), .. })
    ));
    assert_eq!(config.get_optional::<String>("server.missing").unwrap(), None);
    assert_eq!(config.get_optional::<String>("server.host").unwrap(), Some("localhost".into()));
    assert_eq!(config.get_or("server.timeout", 30u64), 30);
    assert_eq!(config.get_or("server.port", 1u16), 8080);
    assert!(config.get_keys("nope").is_err());
}

#[test]
fn test_type_errors_carry_line_info() {
    let config = IniConfig::from_str(CONFIG).unwrap();

    match config.get::<bool>("server.host") {
        Err(IniError::TypeError { line, message, .. }) => {
            assert_eq!(line, 9);
            assert!(message.contains("host = localhost"));
        }
        other => panic!("Expected TypeError, got {:?}", other),
    }

    assert!(matches!(
        config.get::<u32>("server.retries"),
        Err(IniError::TypeError { code: Some(408), .. })
    ));
    assert!(config.get::<i64>("app.ratio").is_err());
    assert!(config.get::<Vec<String>>("server.host").is_err());
}

#[test]
fn test_get_choice() {
    let config = IniConfig::from_str(CONFIG).unwrap();

    let level = config.get_choice("app.log-level", &["debug", "INFO", "warn"]).unwrap();
    assert_eq!(level, "INFO");

    // `on` was read as a boolean and compares as its text form.
    assert_eq!(config.get_choice("app.debug", &["true", "false"]).unwrap(), "true");
    assert_eq!(config.get_choice("server.port", &["80", "8080"]).unwrap(), "8080");

    match config.get_choice("server.host", &["good", "better"]) {
        Err(IniError::ValidationError { line, code, hint, .. }) => {
            assert_eq!(line, 9);
            assert_eq!(code, Some(452));
            assert!(hint.unwrap().contains("good | better"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }

    assert!(matches!(
        config.get_choice("server.features", &["auth"]),
        Err(IniError::TypeError { code: Some(410), .. })
    ));
    assert!(matches!(
        config.get_choice("server.missing", &["x"]),
        Err(IniError::NotFound { .. })
    ));
}

#[test]
fn test_require() {
    let config = IniConfig::from_str(CONFIG).unwrap();

    assert!(config.require(&["app.name", "server.port", "db.primary.max-conn"]).is_ok());

    match config.require(&["app.name", "server.tls", "cache.size"]) {
        Err(IniError::ValidationError { message, hint, code, .. }) => {
            assert_eq!(code, Some(450));
            assert!(message.ends_with("server.tls, cache.size"));
            assert!(hint.unwrap().contains("[server]"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_check_keys() {
    let config = IniConfig::from_str(CONFIG).unwrap();

    assert!(config.check_keys("app", &["name", "debug", "log_level", "ratio"]).is_ok());

    match config.check_keys("server", &["host", "port"]) {
        Err(IniError::ValidationError { message, line, code, .. }) => {
            assert_eq!(code, Some(451));
            assert_eq!(line, 11);
            assert!(message.contains("'retries'"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }

    assert!(matches!(
        config.check_keys("cache", &[]),
        Err(IniError::NotFound { code: Some(306), .. })
    ));
}

#[test]
fn test_debug_output_names_source() {
    let config = IniConfig::from_str("[a]\nx = 1\n").unwrap();
    let debug = format!("{:?}", config);
    assert!(debug.starts_with("IniConfig"));
    assert!(debug.contains("source: None"));
}

#[test]
fn test_set_remove_and_render() {
    let mut config = IniConfig::from_str("[a]\nx = 1\n").unwrap();

    config.set("a", "y", "hello").unwrap();
    config.set("b", "list", vec![1i64, 2]).unwrap();
    config.set("b", "maybe", None::<i64>).unwrap();
    assert!(config.set("b", "true", 1i64).unwrap_err().is_invalid_data());
    assert!(config.set("bad section", "k", 1i64).is_err());

    assert_eq!(
        config.to_ini_string(),
        "[a]\nx = 1\ny = hello\n\n[b]\nlist[] = 1\nlist[] = 2\nmaybe = null\n"
    );

    assert_eq!(config.remove("a", "x"), Some(Value::Integer(1)));
    assert_eq!(config.remove("a", "x"), None);
    assert!(config.remove_section("b").is_some());
    assert_eq!(config.to_ini_string(), "[a]\ny = hello\n");
}

#[test]
fn test_from_json() {
    let config = IniConfig::from_json(&json!({"net": {"port": "8080", "tls": true}})).unwrap();
    let port: u16 = config.get("net.port").unwrap();
    assert_eq!(port, 8080);
    assert!(config.get::<bool>("net.tls").unwrap());

    assert!(IniConfig::from_json(&json!(["a"])).is_err());
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");
    fs::write(&path, CONFIG).unwrap();

    let config = IniConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(config.source(), Some(path.as_path()));

    let out = dir.path().join("out.ini");
    config.save(&out).unwrap();

    let reloaded = IniConfig::from_file(&out).unwrap();
    assert_eq!(reloaded.document(), config.document());
}

#[test]
fn test_from_file_with_base() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("base.ini"), "[x]\ny = 2\n").unwrap();

    let config = IniConfig::from_file_with_base(Path::new("base.ini"), dir.path()).unwrap();
    assert_eq!(config.get::<i64>("x.y").unwrap(), 2);
    assert_eq!(config.source(), Some(dir.path().join("base.ini").as_path()));
}

#[test]
fn test_from_file_with_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let primary = dir.path().join("primary.ini");
    let fallback = dir.path().join("fallback.ini");
    fs::write(&fallback, "[src]\nname = fallback\n").unwrap();

    let config = IniConfig::from_file_with_fallback(&primary, &fallback).unwrap();
    assert_eq!(config.get::<String>("src.name").unwrap(), "fallback");

    fs::write(&primary, "[src]\nname = primary\n").unwrap();
    let config = IniConfig::from_file_with_fallback(&primary, &fallback).unwrap();
    assert_eq!(config.get::<String>("src.name").unwrap(), "primary");

    let missing = dir.path().join("missing.ini");
    match IniConfig::from_file_with_fallback(&missing, &missing) {
        Err(IniError::FileNotFound { code, .. }) => assert_eq!(code, Some(303)),
        other => panic!("Expected FileNotFound, got {:?}", other.err()),
    }

    fs::write(&primary, "not ini at all").unwrap();
    assert!(IniConfig::from_file_with_fallback(&primary, &fallback)
        .unwrap_err()
        .is_invalid_data());
}
