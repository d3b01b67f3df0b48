//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use termtree::Tree;

use crate::domain::{Category, HierarchyStore};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// One listing row: id, name, parent marker.
pub fn category_row(category: &Category) -> String {
    let parent = category
        .parent_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {}  {}",
        category.id.to_string().dimmed(),
        category.name,
        parent.dimmed()
    )
}

/// Render every root's subtree as a termtree, in creation order.
pub fn hierarchy_trees(store: &HierarchyStore) -> Vec<Tree<String>> {
    store
        .root_categories()
        .into_iter()
        .map(|root| subtree(store, root))
        .collect()
}

fn subtree(store: &HierarchyStore, category: &Category) -> Tree<String> {
    let label = format!("{} {}", category.name, category.id.to_string().dimmed());
    let leaves: Vec<_> = store
        .children_of(&category.id)
        .into_iter()
        .map(|child| subtree(store, child))
        .collect();
    Tree::new(label).with_leaves(leaves)
}
