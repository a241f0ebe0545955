use line_diff::{compute_diff, EditOp};

fn main() {
    // Two sample documents to compare
    let old = [
        "This is the first line.",
        "Here is the second line.",
        "And the third line.",
    ];
    let new = [
        "This is the first line.",
        "This is a completely different second line.",
        "And the third line.",
        "Plus a new fourth line.",
    ];

    let script = compute_diff(&old, &new);

    // Print diff statistics
    println!("Diff statistics:");
    println!("  Total ops: {}", script.len());
    println!("  Common lines: {}", script.common_lines());
    println!("  Removed lines: {}", script.removed_lines());
    println!("  Added lines: {}", script.added_lines());

    // Print the script with color-coded markers
    println!("\nEdit script:");
    for op in &script {
        match op {
            EditOp::Removed(line) => println!("\x1b[31m- {}\x1b[0m", line),
            EditOp::Added(line) => println!("\x1b[32m+ {}\x1b[0m", line),
            EditOp::Common(line) => println!("  {}", line),
        }
    }
}
