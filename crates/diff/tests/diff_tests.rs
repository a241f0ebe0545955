use line_diff::{compute_diff, EditOp};

#[test]
fn test_empty_documents() {
    // Two empty documents should produce an empty script
    let empty: [&str; 0] = [];

    let script = compute_diff(&empty, &empty);

    assert!(script.is_empty());
    assert!(!script.has_changes());
    assert_eq!(script.common_lines(), 0);
    assert_eq!(script.removed_lines(), 0);
    assert_eq!(script.added_lines(), 0);
}

#[test]
fn test_identical_documents() {
    // Identical documents should produce only common ops, in order
    let lines = ["Line 1", "Line 2", "Line 3"];

    let script = compute_diff(&lines, &lines);

    assert!(!script.has_changes());
    assert_eq!(script.len(), 3);
    assert!(script.iter().all(|op| op.is_common()));
    assert_eq!(
        script.ops(),
        &[
            EditOp::Common("Line 1".to_string()),
            EditOp::Common("Line 2".to_string()),
            EditOp::Common("Line 3".to_string()),
        ]
    );
}

#[test]
fn test_all_added() {
    // Old document is empty, so every line of the new one is an addition
    let empty: [&str; 0] = [];
    let new = ["Line 1", "Line 2"];

    let script = compute_diff(&empty, &new);

    assert_eq!(script.len(), 2);
    assert!(script.iter().all(|op| op.is_added()));
    assert_eq!(script.added_lines(), 2);
    assert_eq!(script.removed_lines(), 0);
    assert_eq!(script.reconstruct_new(), vec!["Line 1", "Line 2"]);
}

#[test]
fn test_all_removed() {
    // New document is empty, so every line of the old one is a removal
    let old = ["Line 1", "Line 2"];
    let empty: [&str; 0] = [];

    let script = compute_diff(&old, &empty);

    assert_eq!(script.len(), 2);
    assert!(script.iter().all(|op| op.is_removed()));
    assert_eq!(script.removed_lines(), 2);
    assert_eq!(script.added_lines(), 0);
    assert_eq!(script.reconstruct_old(), vec!["Line 1", "Line 2"]);
}

#[test]
fn test_disjoint_documents() {
    // No shared lines: all removals come first, then all additions
    let old = ["apple", "banana"];
    let new = ["cherry", "date", "elderberry"];

    let script = compute_diff(&old, &new);

    assert_eq!(
        script.ops(),
        &[
            EditOp::Removed("apple".to_string()),
            EditOp::Removed("banana".to_string()),
            EditOp::Added("cherry".to_string()),
            EditOp::Added("date".to_string()),
            EditOp::Added("elderberry".to_string()),
        ]
    );
    assert_eq!(script.common_lines(), 0);
}

#[test]
fn test_single_line_replacement() {
    // A changed line between two anchors becomes a removal then an addition
    let old = ["Line 1", "Line 2", "Line 3"];
    let new = ["Line 1", "Line X", "Line 3"];

    let script = compute_diff(&old, &new);

    assert_eq!(
        script.ops(),
        &[
            EditOp::Common("Line 1".to_string()),
            EditOp::Removed("Line 2".to_string()),
            EditOp::Added("Line X".to_string()),
            EditOp::Common("Line 3".to_string()),
        ]
    );
}

#[test]
fn test_change_run_groups_removals_first() {
    // Within one run of changes, every removal precedes every addition
    let old = ["anchor", "old 1", "old 2", "tail"];
    let new = ["anchor", "new 1", "new 2", "new 3", "tail"];

    let script = compute_diff(&old, &new);

    assert_eq!(
        script.ops(),
        &[
            EditOp::Common("anchor".to_string()),
            EditOp::Removed("old 1".to_string()),
            EditOp::Removed("old 2".to_string()),
            EditOp::Added("new 1".to_string()),
            EditOp::Added("new 2".to_string()),
            EditOp::Added("new 3".to_string()),
            EditOp::Common("tail".to_string()),
        ]
    );
}

#[test]
fn test_reordered_line_alignment() {
    // "beta" still matches after "GAMMA" appears, so the insertion is
    // emitted before the match and the old "gamma" is removed after it.
    let old = ["alpha", "beta", "gamma"];
    let new = ["alpha", "GAMMA", "beta"];

    let script = compute_diff(&old, &new);

    assert_eq!(
        script.ops(),
        &[
            EditOp::Common("alpha".to_string()),
            EditOp::Added("GAMMA".to_string()),
            EditOp::Common("beta".to_string()),
            EditOp::Removed("gamma".to_string()),
        ]
    );
}

#[test]
fn test_duplicate_lines() {
    // Duplicates are aligned greedily from the front
    let old = ["x", "x"];
    let new = ["x"];

    let script = compute_diff(&old, &new);

    assert_eq!(
        script.ops(),
        &[
            EditOp::Common("x".to_string()),
            EditOp::Removed("x".to_string()),
        ]
    );
    assert_eq!(script.reconstruct_old(), vec!["x", "x"]);
    assert_eq!(script.reconstruct_new(), vec!["x"]);
}

#[test]
fn test_reconstruction() {
    // Filtering additions out recovers the old lines; filtering removals
    // out recovers the new lines.
    let old = ["keep", "drop me", "keep 2", "also drop", "end"];
    let new = ["keep", "fresh", "keep 2", "end", "extra"];

    let script = compute_diff(&old, &new);

    assert_eq!(script.reconstruct_old(), old.to_vec());
    assert_eq!(script.reconstruct_new(), new.to_vec());
}

#[test]
fn test_op_accounting() {
    let old = ["a", "b", "c", "d"];
    let new = ["a", "x", "c", "y", "z"];

    let script = compute_diff(&old, &new);

    assert_eq!(script.common_lines() + script.removed_lines(), old.len());
    assert_eq!(script.common_lines() + script.added_lines(), new.len());
    assert_eq!(script.len(), old.len() + new.len() - script.common_lines());
}

#[test]
fn test_script_display_format() {
    let script = compute_diff(&["a", "b"], &["a", "c"]);

    insta::assert_snapshot!(script.to_string(), @r###"
  a
- b
+ c
"###);
}

#[test]
fn test_accepts_owned_and_borrowed_lines() {
    // The API is generic over anything string-like
    let old: Vec<String> = vec!["one".to_string(), "two".to_string()];
    let new = ["one", "three"];

    let script = compute_diff(&old, &new);

    assert_eq!(script.common_lines(), 1);
    assert_eq!(script.removed_lines(), 1);
    assert_eq!(script.added_lines(), 1);
}
