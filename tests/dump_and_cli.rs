mod common;
use crate::common::{TestResult, write_config};

use chrono::{TimeZone, Utc};
use clap::Parser;
use procmon::cli::{CliArgs, LogLevel};
use procmon::config::{LoadOptions, load_from_str};
use procmon::logging::resolve_level;
use tracing::Level;
use procmon::run;

const DOC: &str = r#"{
    "name": "sup",
    "pidfile": "/run/sup.pid",
    "web": {"cmd": "/bin/serve", "attempts": 5, "on_restart": "/bin/notify"},
    "nightly": {"name": "backup", "cmd": "/bin/backup", "cron": "0 3 * * *"}
}"#;

#[test]
fn json_dump_reloads_to_the_same_config() -> TestResult {
    let cfg = load_from_str(DOC, LoadOptions::default())?;
    let dumped = serde_json::to_string(&cfg)?;

    let reloaded = load_from_str(&dumped, LoadOptions { strict: true })?;

    assert_eq!(dumped, serde_json::to_string(&reloaded)?);
    assert_eq!(reloaded.pidfile.as_deref(), Some("/run/sup.pid"));
    let names: Vec<&str> = reloaded.monitors().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["web", "backup"]);
    Ok(())
}

#[test]
fn json_dump_keeps_monitors_sharing_a_name() -> TestResult {
    let cfg = load_from_str(
        r#"{"name":"sup","a":{"name":"dup","cmd":"/bin/one"},"b":{"name":"dup","cmd":"/bin/two"}}"#,
        LoadOptions::default(),
    )?;
    let dumped = serde_json::to_string(&cfg)?;

    let reloaded = load_from_str(&dumped, LoadOptions::default())?;

    assert_eq!(reloaded.monitors().len(), 2);
    let pairs: Vec<(&str, &str, &str)> = reloaded
        .monitors()
        .iter()
        .map(|m| (m.key(), m.name.as_str(), m.cmd.as_str()))
        .collect();
    assert_eq!(pairs, [("a", "dup", "/bin/one"), ("b", "dup", "/bin/two")]);
    Ok(())
}

#[test]
fn json_dump_keeps_monitor_named_like_a_reserved_key() -> TestResult {
    let cfg = load_from_str(
        r#"{"name":"sup","web":{"name":"name","cmd":"/bin/one"}}"#,
        LoadOptions::default(),
    )?;
    let dumped = serde_json::to_string(&cfg)?;

    let reloaded = load_from_str(&dumped, LoadOptions::default())?;

    assert_eq!(reloaded.name, "sup");
    let web = reloaded.find("name").expect("monitor named 'name'");
    assert_eq!(web.key(), "web");
    assert_eq!(web.cmd, "/bin/one");
    Ok(())
}

#[test]
fn cron_monitor_reports_next_run() -> TestResult {
    let cfg = load_from_str(
        r#"{"name":"sup","tick":{"cmd":"x","cron":"*/5 * * * *"},"plain":{"cmd":"y"}}"#,
        LoadOptions::default(),
    )?;
    let after = Utc.with_ymd_and_hms(2026, 1, 1, 0, 1, 0).unwrap();

    let next = cfg.find("tick").unwrap().next_run(&after);
    assert_eq!(next, Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 5, 0).unwrap()));
    assert_eq!(cfg.find("plain").unwrap().next_run(&after), None);
    Ok(())
}

#[test]
fn cli_parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "procmon",
        "--config",
        "/etc/sup.json",
        "--log-level",
        "debug",
        "--strict",
        "--json",
    ])
    .unwrap();

    assert_eq!(args.config.to_str(), Some("/etc/sup.json"));
    assert_eq!(args.log_level, Some(LogLevel::Debug));
    assert!(args.strict);
    assert!(args.json);
}

#[test]
fn cli_defaults() {
    let args = CliArgs::try_parse_from(["procmon"]).unwrap();

    assert_eq!(args.config.to_str(), Some("procmon.json"));
    assert_eq!(args.log_level, None);
    assert!(!args.strict);
    assert!(!args.json);
}

#[test]
fn log_level_prefers_flag_then_env() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error")), Level::TRACE);
    assert_eq!(resolve_level(None, Some(" Warning ")), Level::WARN);
    assert_eq!(resolve_level(None, Some("loud")), Level::INFO);
    assert_eq!(resolve_level(None, None), Level::INFO);
}

#[test]
fn run_succeeds_on_valid_config() {
    let file = write_config(DOC);
    let args =
        CliArgs::try_parse_from(["procmon", "--json", "--config", file.path().to_str().unwrap()])
            .unwrap();

    run(args).unwrap();
}

#[test]
fn run_reports_failing_stage() {
    let file = write_config(r#"{"name":"sup"}"#);
    let args =
        CliArgs::try_parse_from(["procmon", "--config", file.path().to_str().unwrap()]).unwrap();

    let err = run(args).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("validate stage failed"), "{message}");
    assert!(message.contains("at least one monitor"), "{message}");
}
