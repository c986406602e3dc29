//! Box-drawing rendering of a learned tree.
//!
//! ```text
//! (Close to Char?)
//! ├──F:(Coins In Room?)
//! │  ├──F:{Roam Room : 0.500, Change Room : 0.500}
//! │  └──T:{Collect Coin}
//! └──T:{Chase}
//! ```
use std::fmt;

use super::node::{Node, ActionLeaf};


const FALSE_POINTER: &str = "├──F:";
const TRUE_POINTER: &str = "└──T:";
const BRANCH_PADDING: &str = "│  ";
const BLANK_PADDING: &str = "   ";


/// `{Chase}` for a deterministic leaf,
/// `{Chase : 0.500, Roam Room : 0.500}` for a randomized one.
impl fmt::Display for ActionLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_randomized() {
            return write!(f, "{{{}}}", self.most_probable());
        }

        let body = self.actions()
            .map(|(action, p)| format!("{action} : {p:.3}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{body}}}")
    }
}


impl Node {
    /// The one-line label of this node.
    pub fn label(&self) -> String {
        match self {
            Self::Decision { attribute, .. } => format!("({attribute}?)"),
            Self::Action(leaf) => leaf.to_string(),
        }
    }
}


/// Renders `root` and its subtrees as a box-drawing diagram.
/// The output has no trailing newline.
pub fn render(root: &Node) -> String {
    let mut out = root.label();
    if let Some((false_child, true_child)) = root.children() {
        traverse(&mut out, "", FALSE_POINTER, false_child, true);
        traverse(&mut out, "", TRUE_POINTER, true_child, false);
    }
    out
}


fn traverse(
    out: &mut String,
    padding: &str,
    pointer: &str,
    node: &Node,
    has_right_sibling: bool,
)
{
    out.push('\n');
    out.push_str(padding);
    out.push_str(pointer);
    out.push_str(&node.label());

    if let Some((false_child, true_child)) = node.children() {
        let extension = if has_right_sibling {
            BRANCH_PADDING
        } else {
            BLANK_PADDING
        };
        let padding = format!("{padding}{extension}");

        traverse(out, &padding, FALSE_POINTER, false_child, true);
        traverse(out, &padding, TRUE_POINTER, true_child, false);
    }
}
