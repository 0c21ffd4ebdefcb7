//! Integration tests for ranking commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn linkrank_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linkrank").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("LINKRANK_CONFIG")
        .env_remove("LINKRANK_DAMPING")
        .env_remove("LINKRANK_SAMPLES")
        .env_remove("LINKRANK_THRESHOLD")
        .env_remove("LINKRANK_MAX_ITERATIONS")
        .env_remove("LINKRANK_SEED");
    cmd
}

fn setup_corpus() -> (TempDir, TempDir) {
    let corpus_dir = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();

    let pages = vec![
        (
            "1.html",
            r#"<html><body><h1>1</h1><a href="2.html">2</a></body></html>"#,
        ),
        (
            "2.html",
            r#"<html><body><a href="1.html">1</a> <a href="3.html">3</a></body></html>"#,
        ),
        (
            "3.html",
            r#"<html><body><a href="2.html">2</a> <a href="4.html">4</a></body></html>"#,
        ),
        (
            "4.html",
            r#"<html><body><a href="2.html">2</a> <a href="https://example.com">out</a></body></html>"#,
        ),
        ("notes.txt", "not a page"),
    ];

    for (path, content) in &pages {
        fs::write(corpus_dir.path().join(path), content).unwrap();
    }

    (corpus_dir, config_home)
}

#[test]
fn test_rank_prints_both_estimators() {
    let (corpus, config_home) = setup_corpus();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.arg("rank").arg(corpus.path()).arg("--seed").arg("7");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 10000)",
        ))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::is_match(r"  1\.html: 0\.\d{4}\n").unwrap())
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_iterate_matches_known_ranks() {
    let (corpus, config_home) = setup_corpus();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.arg("iterate").arg(corpus.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  1.html: 0.2198\n"))
        .stdout(predicate::str::contains("  2.html: 0.4294\n"))
        .stdout(predicate::str::contains("  3.html: 0.2198\n"))
        .stdout(predicate::str::contains("  4.html: 0.1311\n"));
}

#[test]
fn test_sample_is_reproducible_with_seed() {
    let (corpus, config_home) = setup_corpus();

    let run = || {
        let output = linkrank_cmd(&config_home)
            .arg("sample")
            .arg(corpus.path())
            .args(["--seed", "99", "--samples", "5000"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    let first = run();
    assert!(first.starts_with("PageRank Results from Sampling (n = 5000)\n"));
    assert_eq!(first, run());
}

#[test]
fn test_top_limits_output() {
    let (corpus, config_home) = setup_corpus();

    let output = linkrank_cmd(&config_home)
        .arg("iterate")
        .arg(corpus.path())
        .args(["--top", "1"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "PageRank Results from Iteration\n  2.html: 0.4294\n"
    );
}

#[test]
fn test_json_output() {
    let (corpus, config_home) = setup_corpus();

    let output = linkrank_cmd(&config_home)
        .arg("rank")
        .arg(corpus.path())
        .args(["--format", "json", "--seed", "1", "-n", "1000"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["method"], "sampling");
    assert_eq!(value[1]["method"], "iteration");
    assert_eq!(value[1]["ranks"].as_array().unwrap().len(), 4);
}

#[test]
fn test_transition_command() {
    let (corpus, config_home) = setup_corpus();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.arg("transition").arg(corpus.path()).arg("3.html");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  1.html: 0.0375\n"))
        .stdout(predicate::str::contains("  2.html: 0.4625\n"))
        .stdout(predicate::str::contains("  4.html: 0.4625\n"));
}

#[test]
fn test_transition_unknown_page() {
    let (corpus, config_home) = setup_corpus();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.arg("transition").arg(corpus.path()).arg("9.html");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Node not found"));
}

#[test]
fn test_invalid_damping() {
    let (corpus, config_home) = setup_corpus();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.arg("rank").arg(corpus.path()).args(["--damping", "1.5"]);

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid parameter"));
}

#[test]
fn test_did_not_converge() {
    let (corpus, config_home) = setup_corpus();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.arg("iterate")
        .arg(corpus.path())
        .args(["--max-iterations", "1", "--threshold", "1e-12"]);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Did not converge"));
}

#[test]
fn test_empty_corpus() {
    let corpus = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.arg("rank").arg(corpus.path());

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("contains no documents"));
}

#[test]
fn test_config_file() {
    let (corpus, config_home) = setup_corpus();
    let config_path = config_home.path().join("custom.yml");
    fs::write(&config_path, "samples: 250\nseed: 4\n").unwrap();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.arg("sample")
        .arg(corpus.path())
        .arg("--config")
        .arg(&config_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 250)",
        ));
}

#[test]
fn test_graph_command_csv() {
    let (corpus, config_home) = setup_corpus();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.arg("graph").arg(corpus.path()).args(["--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("source,target\n1.html,2.html\n"))
        .stdout(predicate::str::contains("example.com").not());
}

fn setup_sink_corpus() -> (TempDir, TempDir) {
    let corpus_dir = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();

    fs::write(
        corpus_dir.path().join("a.html"),
        r#"<a href="b.html">b</a>"#,
    )
    .unwrap();
    fs::write(corpus_dir.path().join("b.html"), "no links here").unwrap();

    (corpus_dir, config_home)
}

#[test]
fn test_iterate_warns_when_rescaling_sink_corpus() {
    let (corpus, config_home) = setup_sink_corpus();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.env_remove("RUST_LOG").arg("iterate").arg(corpus.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Rescaling PageRank"));
}

#[test]
fn test_iterate_no_normalize_reports_raw_ranks() {
    let (corpus, config_home) = setup_sink_corpus();

    let mut cmd = linkrank_cmd(&config_home);
    cmd.env_remove("RUST_LOG")
        .arg("iterate")
        .arg(corpus.path())
        .arg("--no-normalize");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  a.html: 0.0750\n"))
        .stderr(predicate::str::contains("Rescaling PageRank").not());
}
