use std::process::Command;

fn run_debug(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_boxtree-debug"))
        .args(args)
        .output()
        .expect("Failed to execute boxtree-debug");

    assert!(
        output.status.success(),
        "boxtree-debug failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_tree_output() {
    let stdout = run_debug(&["--show-layout"]);

    assert!(stdout.starts_with("App [Fixed LeftToRight] pos:(0,0) size:(660,440)"));
    assert!(stdout.contains("├── Text \"TS LAYOUT\""), "Title should be the first child");
    assert!(stdout.contains("└── ContextMenuSection [Grow TopToBottom]"));
    assert!(stdout.contains("MenuItem 5"));
    assert!(stdout.contains("Action - 3125"));
}

#[test]
fn test_json_output() {
    let stdout = run_debug(&["--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Output should be JSON");

    assert_eq!(value["root"], 0);
    assert_eq!(value["passes"], 1);
    assert_eq!(value["nodes"].as_array().map(Vec::len), Some(15));
    assert_eq!(value["nodes"][0]["size_behavior"], "FIXED");
}

#[test]
fn test_repeated_passes_are_counted() {
    let stdout = run_debug(&["--format", "detailed", "--passes", "3"]);

    assert!(stdout.starts_with("Layout passes: 3\n"));
}

#[test]
fn test_rejects_empty_canvas() {
    let output = Command::new(env!("CARGO_BIN_EXE_boxtree-debug"))
        .args(["--width", "0"])
        .output()
        .expect("Failed to execute boxtree-debug");

    assert!(!output.status.success());
}
