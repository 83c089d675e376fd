//! Headless replay output.

use timetravel_tui::replay;

#[test]
fn test_draw_script_text() {
    let report = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8], None, true).unwrap();
    let text = report.to_text();
    assert!(text.contains("\nDraw\n"));
    assert!(text.contains("> 9. Go to move #9(col: 3, row: 3)"));
    assert!(!text.contains('['), "no winning line on a drawn board");
}

#[test]
fn test_winning_script_json() {
    let report = replay(&[0, 1, 4, 2, 8], None, false).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["view"]["status"]["Winner"], "X");
    assert_eq!(json["view"]["order_ascending"], false);
    assert_eq!(json["view"]["moves"][0]["step"], 5);
    assert_eq!(json["view"]["moves"][0]["coordinate"]["column"], 3);
    assert_eq!(json["view"]["moves"][0]["coordinate"]["row"], 3);
    assert_eq!(json["view"]["cells"][4]["highlighted"], true);
    assert_eq!(json["ignored"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_jump_back_keeps_history() {
    // Travelling back to the start keeps the finished game in history.
    let report = replay(&[0, 1, 4, 2, 8], Some(0), true).unwrap();
    assert_eq!(report.view.moves.len(), 6);
    assert!(report.to_text().contains("Next player: X"));
}
