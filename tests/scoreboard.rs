use std::fs;
use std::path::PathBuf;

use starship::scoreboard::Scoreboard;

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("starship-scoreboard-{tag}-{}", std::process::id()))
        .join("Scoreboard.txt")
}

#[test]
fn saved_board_loads_back_in_rank_order() {
    let path = temp_path("roundtrip");
    let mut board = Scoreboard::empty(path.clone());
    board.add_score("ALICE", 300);
    board.add_score("BOB", 1200);
    board.add_score("CAROL", 50);
    board.save().unwrap();

    let loaded = Scoreboard::load(path.clone());
    let rows: Vec<(usize, &str, u32)> = loaded
        .entries()
        .iter()
        .map(|e| (e.rank, e.name.as_str(), e.score))
        .collect();
    assert_eq!(rows, vec![(1, "BOB", 1200), (2, "ALICE", 300), (3, "CAROL", 50)]);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1. BOB - 1200\n2. ALICE - 300\n3. CAROL - 50\n"
    );
    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_empty_board() {
    let board = Scoreboard::load(temp_path("missing"));
    assert!(board.entries().is_empty());
    assert_eq!(board.high_score(), 0);
}

#[test]
fn corrupt_file_degrades_to_empty() {
    let path = temp_path("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "this is not a scoreboard\n").unwrap();

    let board = Scoreboard::load(path.clone());
    assert!(board.entries().is_empty());
    let _ = fs::remove_file(&path);
}
