use std::fs;
use std::process::{Command, Output};

fn yh_bin() -> String {
    env!("CARGO_BIN_EXE_yh").to_string()
}

fn run(args: &[&str]) -> Output {
    Command::new(yh_bin()).args(args).output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn help_runs() {
    let out = run(&["--help"]);
    assert!(out.status.success());
    let s = stdout(&out);
    assert!(s.contains("score"));
    assert!(s.contains("claim"));
}

#[test]
fn rules_lists_all_thirteen() {
    let out = run(&["rules"]);
    assert!(out.status.success());
    let s = stdout(&out);
    assert_eq!(s.lines().count(), 13);
    assert!(s.contains("full_house"));
    assert!(s.contains("25 points for a full house"));
}

#[test]
fn score_single_rule_json() {
    let out = run(&["score", "2,2,3,3,3", "--rule", "fullHouse", "--json"]);
    assert!(
        out.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["dice"], serde_json::json!([2, 2, 3, 3, 3]));
    assert_eq!(v["scores"][0]["rule"], "full_house");
    assert_eq!(v["scores"][0]["score"], 25);
}

#[test]
fn score_all_rules_table() {
    let out = run(&["score", "1", "2", "3", "4", "6"]);
    assert!(out.status.success());
    let s = stdout(&out);
    let line = |name: &str| {
        s.lines()
            .find(|l| l.split_whitespace().next() == Some(name))
            .map(|l| l.split_whitespace().last().unwrap().to_string())
    };
    assert_eq!(line("small_straight").as_deref(), Some("30"));
    assert_eq!(line("large_straight").as_deref(), Some("0"));
    assert_eq!(line("chance").as_deref(), Some("16"));
}

#[test]
fn score_rejects_invalid_hand() {
    let out = run(&["score", "1", "2", "3", "4"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("hand has 4 dice"), "stderr:\n{err}");

    let out = run(&["score", "1,2,3,4,7"]);
    assert!(!out.status.success());
}

#[test]
fn score_rejects_unknown_rule() {
    let out = run(&["score", "1,2,3,4,5", "--rule", "two_pairs"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown rule"));
}

#[test]
fn config_overrides_payouts() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("rules.yaml");
    fs::write(&cfg, "yahtzee: 100\n").unwrap();

    let out = run(&[
        "--config",
        cfg.to_str().unwrap(),
        "score",
        "5,5,5,5,5",
        "--rule",
        "yahtzee",
    ]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("100"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("rules.yaml");
    fs::write(&cfg, "four_of_kind: 9\n").unwrap();

    let out = run(&["--config", cfg.to_str().unwrap(), "rules"]);
    assert!(!out.status.success());
}

#[test]
fn claim_is_once_per_rule_and_logged() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("claims.ndjson");

    let out = run(&[
        "claim",
        "yahtzee=4,4,4,4,4",
        "yahtzee=1,1,1,1,1",
        "chance=1,2,3,4,6",
        "--log",
        log.to_str().unwrap(),
    ]);
    assert!(
        out.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    let s = stdout(&out);
    assert!(s.contains("claimed 50"));
    assert!(s.contains("already claimed (50)"));
    assert!(s.contains("1 point per 1"));

    let events: Vec<serde_json::Value> = fs::read_to_string(&log)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["outcome"], "claimed");
    assert_eq!(events[1]["outcome"], "already_claimed");
    assert_eq!(events[1]["score"], 50);
    assert_eq!(events[2]["rule"], "chance");
    assert_eq!(events[2]["score"], 16);
}

#[test]
fn claim_with_invalid_hand_reports_and_fails() {
    let out = run(&["claim", "ones=1,1,1", "ones=1,1,2,3,4"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("rejected"), "stderr:\n{err}");
    // The rejected claim left the row open, so the second one scored.
    assert!(stdout(&out).contains("claimed 2"));
}
