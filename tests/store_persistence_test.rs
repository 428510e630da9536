//! JsonStore behavior against a real filesystem

use memory_match::core::{Achievement, Achievements};
use memory_match::store::{JsonStore, ScoreStore};
use memory_match::types::Difficulty;

#[test]
fn scores_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    {
        let mut store = JsonStore::open(&path);
        assert_eq!(store.best_score(Difficulty::Hard), None);
        store.set_best_score(Difficulty::Hard, 4200);

        let mut earned = Achievements::new();
        earned.insert(Achievement::LastSecond);
        store.set_achievements(&earned);
    }

    let store = JsonStore::open(&path);
    assert_eq!(store.best_score(Difficulty::Hard), Some(4200));
    assert!(store.achievements().contains(Achievement::LastSecond));
    assert!(!store.achievements().contains(Achievement::SpeedDemon));
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("never-written.json"));
    for difficulty in Difficulty::ALL {
        assert_eq!(store.best_score(difficulty), None);
    }
    assert!(store.achievements().is_empty());
}

#[test]
fn malformed_file_degrades_to_empty_and_recovers_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let mut store = JsonStore::open(&path);
    assert_eq!(store.best_score(Difficulty::Easy), None);

    store.set_best_score(Difficulty::Easy, 100);
    let reopened = JsonStore::open(&path);
    assert_eq!(reopened.best_score(Difficulty::Easy), Some(100));
}

#[test]
fn nested_directories_are_created_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("scores.json");

    let mut store = JsonStore::open(&path);
    store.set_best_score(Difficulty::Medium, 777);

    assert_eq!(JsonStore::open(&path).best_score(Difficulty::Medium), Some(777));
}

#[test]
fn writes_keep_unrelated_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut store = JsonStore::open(&path);
    store.set_best_score(Difficulty::Easy, 10);
    store.set_best_score(Difficulty::Expert, 99);

    let mut earned = Achievements::new();
    earned.insert(Achievement::FirstVictory);
    store.set_achievements(&earned);

    let reopened = JsonStore::open(&path);
    assert_eq!(reopened.best_score(Difficulty::Easy), Some(10));
    assert_eq!(reopened.best_score(Difficulty::Expert), Some(99));
    assert!(reopened.achievements().contains(Achievement::FirstVictory));
}
