use anyhow::{Context, Result};
use serde_json::{json, Value};
use tree_foreach::{foreach, try_foreach, ForeachOptions, Strategy, TreeNode};

fn label(node: &Value) -> String {
    match node.get("name") {
        Some(Value::String(name)) => name.clone(),
        _ => node.to_string(),
    }
}

fn main() -> Result<()> {
    // Set RUST_LOG=debug to see traversal logging
    env_logger::init();

    // A small menu structure, the kind of tree this crate is meant for
    let menu = json!([
        {"name": "File", "items": [
            {"name": "New"},
            {"name": "Open Recent", "items": [{"name": "notes.md"}, {"name": "todo.md"}]},
            {"name": "Quit"}
        ]},
        {"name": "Help", "items": [{"name": "About"}]}
    ]);

    // Options usually come from a config file
    let options: ForeachOptions = serde_json::from_str(r#"{"childrenKey": "items"}"#)
        .context("Failed to read traversal options")?;

    println!("Pre-order:");
    foreach(
        &menu,
        |node, meta| println!("{:indent$}{}", "", label(node), indent = meta.depth() * 2),
        &options,
    );

    for strategy in [Strategy::Post, Strategy::Breadth] {
        let options = options.clone().strategy(strategy);
        let mut names = Vec::new();
        foreach(&menu, |node, _| names.push(label(node)), &options);
        println!("\n{}: {}", strategy, names.join(", "));
    }

    // Breadcrumbs built from the ancestor chain
    println!("\nBreadcrumbs:");
    try_foreach(
        &menu,
        |node, meta| {
            if node.children(meta.children_key()).is_none() {
                let mut crumbs: Vec<_> = meta.parents().iter().map(|p| label(p)).collect();
                crumbs.push(label(node));
                println!("  {}", crumbs.join(" > "));
            }
            Ok(())
        },
        &options,
    )?;

    Ok(())
}
