//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use cyberlit_core::bank::QuestionBank;

/// A command isolated from any real config or environment overrides.
fn cyberlit(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("cyberlit").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("CYBERLIT_DATA_DIR")
        .env_remove("CYBERLIT_ASSISTANT_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Answer file with every question correct except `wrong` (left unanswered).
fn write_answers(dir: &Path, wrong: &[usize]) -> std::path::PathBuf {
    let bank = QuestionBank::builtin();
    let answers: Vec<Option<String>> = bank
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| (!wrong.contains(&i)).then(|| q.correct_option.clone()))
        .collect();
    let path = dir.join("answers.json");
    std::fs::write(&path, serde_json::to_string(&answers).unwrap()).unwrap();
    path
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cybersecurity literacy"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cyberlit"));
}

#[test]
fn results_before_any_quiz() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path())
        .args(["results", "--data-dir", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quiz result yet"));
}

#[test]
fn submit_persists_result() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), &[6, 7, 8]);

    cyberlit(dir.path())
        .args(["submit", "--data-dir", "data", "--answers"])
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your Cyber Awareness Score: 18/21 (85.7%)",
        ))
        .stdout(predicate::str::contains("Level: Advanced"))
        .stdout(predicate::str::contains("Suggested Topics to Review:\nPhishing"));

    assert!(dir.path().join("data/cyber_results.json").exists());

    cyberlit(dir.path())
        .args(["results", "--data-dir", "data", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""userLevel": "advanced""#))
        .stdout(predicate::str::contains(r#""Phishing": 3"#));

    cyberlit(dir.path())
        .args(["results", "--data-dir", "data", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Phishing | 0/3 | 0% |"))
        .stdout(predicate::str::contains("read module `phishing`"));
}

#[test]
fn resubmission_replaces_result() {
    let dir = TempDir::new().unwrap();

    let answers = write_answers(dir.path(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]);
    cyberlit(dir.path())
        .args(["submit", "--data-dir", "data", "--answers"])
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Level: Beginner"));

    let answers = write_answers(dir.path(), &[]);
    cyberlit(dir.path())
        .args(["submit", "--data-dir", "data", "--answers"])
        .arg(&answers)
        .assert()
        .success();

    cyberlit(dir.path())
        .args(["results", "--data-dir", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("21/21 (100.0%)"))
        .stdout(predicate::str::contains("No topics to review"));
}

#[test]
fn submit_wrong_length_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(&path, r#"["Using strong passwords", null]"#).unwrap();

    cyberlit(dir.path())
        .args(["submit", "--data-dir", "data", "--answers"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 21 answers, got 2"));

    assert!(!dir.path().join("data/cyber_results.json").exists());
}

#[test]
fn quiz_reads_answers_from_stdin() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path())
        .args(["quiz", "--data-dir", "data"])
        .write_stdin("1\n".repeat(21))
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 21/21"))
        .stdout(predicate::str::contains("Your Cyber Awareness Score:"));

    assert!(dir.path().join("data/cyber_results.json").exists());
}

#[test]
fn corrupt_stored_result_is_a_cold_start() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/cyber_results.json"), "{not json").unwrap();

    cyberlit(dir.path())
        .args(["results", "--data-dir", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quiz result yet"))
        .stderr(predicate::str::contains(
            "Warning: stored progress could not be read",
        ))
        .stderr(predicate::str::contains("cyber_results"));
}

#[test]
fn corrupt_module_progress_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/progress_phishing.json"), "[1, 2").unwrap();

    cyberlit(dir.path())
        .args(["articles", "--data-dir", "data", "--module", "phishing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] Video 1"))
        .stderr(predicate::str::contains("progress_phishing"));
}

#[test]
fn modules_lists_catalog_and_recommendations() {
    let dir = TempDir::new().unwrap();

    cyberlit(dir.path())
        .args(["modules", "--data-dir", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("phishing"))
        .stdout(predicate::str::contains("0/8"))
        .stdout(predicate::str::contains("review").not());

    let answers = write_answers(dir.path(), &[6]);
    cyberlit(dir.path())
        .args(["submit", "--data-dir", "data", "--answers"])
        .arg(&answers)
        .assert()
        .success();

    cyberlit(dir.path())
        .args(["modules", "--data-dir", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("review"));
}

#[test]
fn toggle_twice_restores_progress() {
    let dir = TempDir::new().unwrap();

    cyberlit(dir.path())
        .args(["toggle", "--data-dir", "data", "--module", "phishing", "--article", "Video 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Marked 'Video 1' as read. phishing: 1/8 read (13%)",
        ));

    cyberlit(dir.path())
        .args(["articles", "--data-dir", "data", "--module", "phishing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Video 1"))
        .stdout(predicate::str::contains("1/8 read (13%)"));

    cyberlit(dir.path())
        .args(["toggle", "--data-dir", "data", "--module", "phishing", "--article", "Video 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("as unread. phishing: 0/8 read (0%)"));
}

#[test]
fn toggle_unknown_article_fails() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path())
        .args(["toggle", "--data-dir", "data", "--module", "phishing", "--article", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no article titled 'Nope'"));

    cyberlit(dir.path())
        .args(["toggle", "--data-dir", "data", "--module", "nope", "--article", "Video 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown module"));
}

#[test]
fn articles_unknown_module_fails() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path())
        .args(["articles", "--data-dir", "data", "--module", "defaultModule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown module 'defaultModule'"));
}

#[test]
fn ask_offline_prints_connection_message() {
    let dir = TempDir::new().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    cyberlit(dir.path())
        .env("CYBERLIT_ASSISTANT_URL", format!("http://{addr}"))
        .args(["ask", "--data-dir", "data", "What is phishing?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Couldn't connect to the server"));
}

#[test]
fn ask_blank_question_fails() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path())
        .args(["ask", "--data-dir", "data", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to ask"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    cyberlit(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created cyberlit.toml"))
        .stdout(predicate::str::contains("Created questions.toml"));

    assert!(dir.path().join("cyberlit.toml").exists());
    assert!(dir.path().join("questions.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    cyberlit(dir.path()).arg("init").assert().success();

    cyberlit(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_sample_bank() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path()).arg("init").assert().success();

    cyberlit(dir.path())
        .args(["validate", "--bank", "questions.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions, 3 topics"))
        .stdout(predicate::str::contains("no questions for topic 'Cyber Hygiene'"))
        .stdout(predicate::str::contains("4 warning(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path())
        .args(["validate", "--bank", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn memory_storage_forgets_between_runs() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cyberlit.toml"), "storage = \"memory\"\n").unwrap();
    let answers = write_answers(dir.path(), &[]);

    cyberlit(dir.path())
        .args(["submit", "--answers"])
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("21/21"));

    cyberlit(dir.path())
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quiz result yet"));
}

#[test]
fn custom_bank_from_config() {
    let dir = TempDir::new().unwrap();
    cyberlit(dir.path()).arg("init").assert().success();
    std::fs::write(
        dir.path().join("cyberlit.toml"),
        "data_dir = \"data\"\nquestion_bank = \"questions.toml\"\n",
    )
    .unwrap();

    cyberlit(dir.path())
        .arg("quiz")
        .write_stdin("2\n3\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3/3"))
        .stdout(predicate::str::contains("Your Cyber Awareness Score: 3/3 (100.0%)"));
}
