use line_diff::{build_views, compute_diff, LineRole};

fn main() {
    let old = [
        "shopping list",
        "eggs",
        "milk",
        "bread",
    ];
    let new = [
        "shopping list",
        "eggs",
        "butter",
        "bread",
        "coffee",
    ];

    let script = compute_diff(&old, &new);
    let (old_view, new_view) = build_views(&script);

    // Each document gets its own annotated pane
    println!("Old document:");
    for line in &old_view {
        match line.role {
            LineRole::Removed => println!("\x1b[31m- {}\x1b[0m", line.content),
            _ => println!("  {}", line.content),
        }
    }

    println!("\nNew document:");
    for line in &new_view {
        match line.role {
            LineRole::Added => println!("\x1b[32m+ {}\x1b[0m", line.content),
            _ => println!("  {}", line.content),
        }
    }
}
