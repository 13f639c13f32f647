#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pricemon_api::config::{self, ApiConfig};

fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |k| pairs.iter().find(|(name, _)| *name == k).map(|(_, v)| v.to_string())
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8000"
jobs:
  enabled: true
  metrics_refesh_secs: 60 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    assert!(cfg.jobs.enabled);
    assert!(cfg.commodities.iter().any(|c| c.as_str() == "gold"));
    assert_eq!(cfg.dashboard.chart_height, 400);
}

#[test]
fn full_config_round_trip() {
    let ok = r#"
version: 1
server: { listen: "127.0.0.1:9000" }
commodities: [Gold, wheat]
store: { max_records_per_commodity: 50 }
models: { evaluation_window: 7 }
jobs:
  enabled: false
  price_refresh_secs: 60
  metrics_refresh_secs: 120
  price_source: { path: "/tmp/prices.json" }
dashboard:
  title: "Metals"
  auto_refresh_interval_secs: 10
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let ids: Vec<&str> = cfg.commodities.iter().map(|c| c.as_str()).collect();
    assert_eq!(ids, ["gold", "wheat"]);
    assert_eq!(cfg.store.max_records_per_commodity, 50);
    assert_eq!(cfg.models.evaluation_window, 7);
    assert!(!cfg.jobs.enabled);
    assert_eq!(cfg.jobs.price_source.unwrap().path.to_str(), Some("/tmp/prices.json"));
    assert_eq!(cfg.dashboard.title, "Metals");
    assert_eq!(cfg.dashboard.chart_template, "plotly_white");
}

#[test]
fn rejects_bad_version_and_values() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");

    let err = config::load_from_str("version: 1\ncommodities: []\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");

    let err = config::load_from_str("version: 1\ncommodities: [gold, GOLD]\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");

    let err = config::load_from_str("version: 1\nserver: { listen: \"nope\" }\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");

    let err = config::load_from_str("version: 1\njobs: { metrics_refresh_secs: 0 }\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn disable_background_jobs_flag() {
    for v in ["1", "true", "YES", " on "] {
        let mut cfg = ApiConfig::default();
        let pairs = [("DISABLE_BACKGROUND_JOBS", v)];
        config::apply_env_overrides(&mut cfg, env(&pairs));
        assert!(!cfg.jobs.enabled, "value={v:?}");
    }

    for v in ["0", "false", "", "maybe"] {
        let mut cfg = ApiConfig::default();
        let pairs = [("DISABLE_BACKGROUND_JOBS", v)];
        config::apply_env_overrides(&mut cfg, env(&pairs));
        assert!(cfg.jobs.enabled, "value={v:?}");
    }
}

#[test]
fn env_overrides_listen_and_base_url() {
    let mut cfg = ApiConfig::default();
    let pairs = [
        ("PRICEMON_LISTEN", "127.0.0.1:18000"),
        ("API_BASE_URL", "http://prices.internal:8000"),
    ];
    config::apply_env_overrides(&mut cfg, env(&pairs));
    assert_eq!(cfg.server.listen, "127.0.0.1:18000");
    assert_eq!(cfg.dashboard.api_base_url, "http://prices.internal:8000");
    cfg.validate().unwrap();
}

#[test]
fn load_explicit_file_then_env() {
    let path = std::env::temp_dir().join(format!("pricemon-cfg-{}.yaml", std::process::id()));
    std::fs::write(&path, "version: 1\ncommodities: [gold]\n").unwrap();

    let pairs = [("DISABLE_BACKGROUND_JOBS", "1")];
    let cfg = config::load(path.to_str(), env(&pairs)).expect("explicit file");
    let _ = std::fs::remove_file(&path);
    assert_eq!(cfg.commodities.len(), 1);
    assert!(!cfg.jobs.enabled);

    let err = config::load(Some("does-not-exist.yaml"), env(&[])).expect_err("explicit path must exist");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}
