mod common;
use crate::common::{TestResult, init_tracing};

use std::time::Duration;

use procmon::config::{Config, INITIAL_CLOCK};
use procmon_test_utils::builders::{DocumentBuilder, MonitorBuilder};

fn three_monitors() -> Config {
    DocumentBuilder::named("sup")
        .with_monitor("web", MonitorBuilder::new("/bin/web").on_error("/bin/alert"))
        .with_monitor("backup", MonitorBuilder::new("/bin/backup").cron("0 3 * * *"))
        .with_monitor("worker", MonitorBuilder::new("/bin/worker").logfile("/tmp/w.log"))
        .load()
        .expect("valid config")
}

fn names(cfg: &Config) -> Vec<String> {
    cfg.monitors().iter().map(|m| m.name.clone()).collect()
}

#[test]
fn reset_clears_runtime_state_only() -> TestResult {
    init_tracing();
    let mut cfg = three_monitors();
    let id = cfg.find("backup").unwrap().id();

    {
        let m = cfg.monitor_mut(id).unwrap();
        m.pid = Some(4242);
        m.attempts = 7;
        m.clock = Duration::from_millis(1_500);
        m.reset();
    }

    let m = cfg.monitor(id).unwrap();
    assert_eq!(m.pid, None);
    assert_eq!(m.attempts, 0);
    assert_eq!(m.clock, INITIAL_CLOCK);

    assert_eq!(m.name, "backup");
    assert_eq!(m.cmd, "/bin/backup");
    assert_eq!(m.logfile, "/dev/null");
    assert_eq!(m.cron().map(|c| c.expression()), Some("0 3 * * *"));
    Ok(())
}

#[test]
fn reset_is_idempotent() {
    let mut cfg = three_monitors();
    let id = cfg.find("web").unwrap().id();

    cfg.monitor_mut(id).unwrap().attempts = 3;
    assert!(cfg.reset_monitor(id));
    let once = format!("{:?}", cfg.monitor(id).unwrap());
    assert!(cfg.reset_monitor(id));
    let twice = format!("{:?}", cfg.monitor(id).unwrap());

    assert_eq!(once, twice);
    assert_eq!(cfg.monitor(id).unwrap().on_error.as_deref(), Some("/bin/alert"));
}

#[test]
fn reset_all_touches_every_monitor() {
    let mut cfg = three_monitors();
    for id in cfg.monitors().ids() {
        let m = cfg.monitor_mut(id).unwrap();
        m.pid = Some(1);
        m.attempts = 2;
    }

    cfg.reset_all();

    assert!(cfg.monitors().iter().all(|m| m.pid.is_none() && m.attempts == 0));
}

#[test]
fn cronless_monitor_can_be_removed() {
    init_tracing();
    let mut cfg = three_monitors();
    let web = cfg.find("web").unwrap().id();

    assert!(cfg.remove_monitor(web));
    assert_eq!(names(&cfg), ["backup", "worker"]);
    assert!(!cfg.monitors().contains(web));
    assert!(cfg.monitor(web).is_none());
}

#[test]
fn removed_monitor_cannot_be_removed_or_reset_again() {
    let mut cfg = three_monitors();
    let worker = cfg.find("worker").unwrap().id();

    assert!(cfg.remove_monitor(worker));
    assert!(!cfg.remove_monitor(worker));
    assert!(!cfg.reset_monitor(worker));
    assert_eq!(cfg.monitors().len(), 2);
}

#[test]
fn cron_monitor_removal_is_refused_and_nothing_changes() {
    let mut cfg = three_monitors();
    let backup = cfg.find("backup").unwrap().id();
    let before = names(&cfg);

    assert!(!cfg.remove_monitor(backup));

    assert_eq!(names(&cfg), before);
    assert!(cfg.monitor(backup).is_some());
}

#[test]
fn removing_from_the_middle_keeps_later_lookups_valid() {
    let mut cfg = DocumentBuilder::named("sup")
        .with_monitor("a", MonitorBuilder::new("a"))
        .with_monitor("b", MonitorBuilder::new("b"))
        .with_monitor("c", MonitorBuilder::new("c"))
        .with_monitor("d", MonitorBuilder::new("d"))
        .load()
        .unwrap();
    let ids = cfg.monitors().ids();

    assert!(cfg.remove_monitor(ids[1]));
    assert!(cfg.remove_monitor(ids[3]));

    assert_eq!(names(&cfg), ["a", "c"]);
    assert_eq!(cfg.monitor(ids[2]).unwrap().cmd, "c");
    assert_eq!(cfg.monitors().ids(), [ids[0], ids[2]]);
}

#[test]
fn destroy_releases_every_monitor() {
    let cfg = three_monitors();
    assert_eq!(cfg.destroy(), 3);
}

#[test]
fn destroy_after_removing_everything_removable() {
    let mut cfg = DocumentBuilder::named("sup")
        .with_monitor("a", MonitorBuilder::new("a"))
        .with_monitor("b", MonitorBuilder::new("b"))
        .load()
        .unwrap();

    for id in cfg.monitors().ids() {
        assert!(cfg.remove_monitor(id));
    }
    assert!(cfg.monitors().is_empty());
    assert_eq!(cfg.monitors().iter().count(), 0);

    assert_eq!(cfg.destroy(), 0);
}
