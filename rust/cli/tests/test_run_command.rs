use beancounter_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write as _;

fn clear_env() {
    unsafe {
        std::env::remove_var("BEANCOUNTER_CONFIG");
        std::env::remove_var("BEANCOUNTER_SEED");
        std::env::remove_var("BEANCOUNTER_MODE");
    }
}

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let argv: Vec<&str> = std::iter::once("beancounter").chain(args.iter().copied()).collect();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).to_string(),
        String::from_utf8_lossy(&err).to_string(),
    )
}

fn slot_counts(out: &str) -> Vec<usize> {
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Slot bean counts:"));
    lines
        .next()
        .expect("slot line")
        .split_whitespace()
        .map(|n| n.parse().unwrap())
        .collect()
}

#[test]
#[serial]
fn luck_run_prints_every_slot() {
    clear_env();
    let (code, out, err) = run_capture(&["run", "10", "500", "luck", "--seed", "1"]);
    assert_eq!(code, 0, "stderr={}", err);
    let counts = slot_counts(&out);
    assert_eq!(counts.len(), 10);
    assert_eq!(counts.iter().sum::<usize>(), 500);
    // a bell curve puts more beans in the middle than at the edges
    assert!(counts[4] + counts[5] > counts[0] + counts[9]);
}

#[test]
#[serial]
fn seeded_runs_are_reproducible() {
    clear_env();
    let a = run_capture(&["run", "8", "200", "skill", "--seed", "99", "--json"]);
    let b = run_capture(&["run", "8", "200", "skill", "--seed", "99", "--json"]);
    assert_eq!(a.0, 0);
    assert_eq!(a.1, b.1);
}

#[test]
#[serial]
fn json_summary_shape() {
    clear_env();
    let (code, out, _) = run_capture(&["run", "5", "3", "skill", "--seed", "3", "--json"]);
    assert_eq!(code, 0);
    let v: Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(v["slot_count"], 5);
    assert_eq!(v["total"], 3);
    assert_eq!(v["counts"].as_array().unwrap().len(), 5);
    assert!(v["average"].is_number());
}

#[test]
#[serial]
fn zero_beans_reports_empty_slots() {
    clear_env();
    let (code, out, _) = run_capture(&["run", "4", "0", "luck"]);
    assert_eq!(code, 0);
    assert_eq!(slot_counts(&out), vec![0, 0, 0, 0]);
    assert!(!out.contains("Average slot"));
}

#[test]
#[serial]
fn skill_repeat_reproduces_distribution() {
    clear_env();
    let once = run_capture(&["run", "7", "50", "skill", "--seed", "5", "--json"]);
    let again = run_capture(&[
        "run", "7", "50", "skill", "--seed", "5", "--repeat", "3", "--json",
    ]);
    assert_eq!(once.1, again.1);
}

#[test]
#[serial]
fn mode_and_seed_fall_back_to_config() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 11\nmode = \"skill\"").unwrap();
    unsafe {
        std::env::set_var("BEANCOUNTER_CONFIG", file.path());
    }
    let from_config = run_capture(&["run", "6", "40", "--json"]);
    clear_env();
    let explicit = run_capture(&["run", "6", "40", "skill", "--seed", "11", "--json"]);

    assert_eq!(from_config.0, 0, "stderr={}", from_config.2);
    assert_eq!(from_config.1, explicit.1);
}

#[test]
#[serial]
fn invalid_config_fails_run() {
    clear_env();
    unsafe {
        std::env::set_var("BEANCOUNTER_MODE", "fate");
    }
    let (code, _, err) = run_capture(&["run", "5", "3"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));
}

#[test]
#[serial]
fn cfg_shows_sources() {
    clear_env();
    unsafe {
        std::env::set_var("BEANCOUNTER_MODE", "skill");
    }
    let (code, out, _) = run_capture(&["cfg"]);
    clear_env();
    assert_eq!(code, 0);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["mode"]["value"], "skill");
    assert_eq!(v["mode"]["source"], "env");
    assert_eq!(v["seed"]["source"], "default");
}
