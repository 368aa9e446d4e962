use predicates::prelude::*;

use crate::common::{ALICE, CorpusDir, corpus_count};

#[test]
fn shows_help() {
    corpus_count()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("corpus_count"))
        .stdout(predicate::str::contains("--swap-ngram"));
}

#[test]
fn requires_a_file() {
    corpus_count().assert().failure();
}

#[test]
fn processes_single_file() {
    let dir = CorpusDir::new();
    let path = dir.write("alice.txt", ALICE);

    corpus_count()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("words\n"))
        .stdout(predicate::str::contains("\nletters\n"));
}

#[test]
fn rejects_non_txt_file() {
    let dir = CorpusDir::new();
    let path = dir.write("alice.md", ALICE);

    corpus_count()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must be a .txt file"))
        .stderr(predicate::str::contains("alice.md"));
}

#[test]
fn rejects_missing_file() {
    let dir = CorpusDir::new();

    corpus_count()
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn rejects_malformed_swap() {
    let dir = CorpusDir::new();
    let path = dir.write("alice.txt", ALICE);

    corpus_count()
        .args(["-s", "th"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing flags"))
        .stderr(predicate::str::contains("'th'"));
}

#[test]
fn line_limit_failure_names_the_file() {
    let dir = CorpusDir::new();
    let path = dir.write("long.txt", &"x".repeat(100));

    corpus_count()
        .args(["--max-line-bytes", "10"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("executing command"))
        .stderr(predicate::str::contains("long.txt"));
}

#[test]
fn largest_line_limit_still_reads_whole_lines() {
    let dir = CorpusDir::new();
    let path = dir.write("tiny.txt", "hello world\n");

    corpus_count()
        .args(["--max-line-bytes", &usize::MAX.to_string()])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("| raw (2) |"))
        .stdout(predicate::str::contains(" hello ("));
}
