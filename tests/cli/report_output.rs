use predicates::prelude::*;

use crate::common::{ALICE, CorpusDir, corpus_count};

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn words_table_for_small_corpus() {
    let dir = CorpusDir::new();
    let path = dir.write("tiny.txt", "The cat\nthe dog\n");

    let expected_words = "\
words
|  | raw (4) | removed (2) | swapped (4) | both (2) |
|---|---|---|---|---|
|  0 |   the (     2, 50.00%) |   cat (     1, 50.00%) |    xe (     2, 50.00%) |   cat (     1, 50.00%) |
|  1 |   cat (     1, 25.00%) |   dog (     1, 50.00%) |   cat (     1, 25.00%) |   dog (     1, 50.00%) |
|  2 |   dog (     1, 25.00%) |  |   dog (     1, 25.00%) |  |
 
letters
|  | raw (12) | removed (6) | swapped (10) | both (6) |
";
    let out = stdout_of(corpus_count().args(["-s", "th,x", "-r", "the"]).arg(&path));
    assert!(out.starts_with(expected_words), "unexpected report:\n{out}");
}

#[test]
fn hyphenated_word_is_joined_across_lines() {
    let dir = CorpusDir::new();
    let path = dir.write("alice.txt", ALICE);

    corpus_count()
        .args(["--top-words", "0"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(" conversations ("))
        .stdout(predicate::str::contains(" conver (").not());
}

#[test]
fn top_words_limits_rows() {
    let dir = CorpusDir::new();
    let path = dir.write("alice.txt", ALICE);

    let out = stdout_of(corpus_count().args(["--top-words", "3"]).arg(&path));
    let words_table = out.split(" \nletters").next().unwrap();
    // title, header, separator, three ranks
    assert_eq!(words_table.lines().count(), 6);
}

#[test]
fn output_is_stable_across_runs_and_job_counts() {
    let dir = CorpusDir::new();
    let a = dir.write("a.txt", ALICE);
    let b = dir.write("b.txt", "Down the Rabbit-Hole\n<p>Alice</p> was\n");

    let first = stdout_of(corpus_count().args(["-w", "-j", "1"]).arg(&a).arg(&b));
    let second = stdout_of(corpus_count().args(["-w", "-j", "4"]).arg(&b).arg(&a));
    assert_eq!(first, second);
}
