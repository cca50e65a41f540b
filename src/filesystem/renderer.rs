use std::io::{self, Write};

use crate::filesystem::Node;

/// Prefix fragment under a node that still has siblings below it.
const CONTINUATION: &str = "│\t";
/// Prefix fragment under the last node of a sibling sequence.
const SPACER: &str = "\t";

/// Position of a node among its siblings
#[derive(Debug, Clone, Copy)]
enum Connector {
    Branch,
    Last,
}

impl Connector {
    fn for_index(index: usize, len: usize) -> Self {
        if index + 1 == len {
            Connector::Last
        } else {
            Connector::Branch
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Connector::Branch => "├───",
            Connector::Last => "└───",
        }
    }

    /// Fragment appended to the prefix of this node's descendants.
    fn child_fragment(self) -> &'static str {
        match self {
            Connector::Branch => CONTINUATION,
            Connector::Last => SPACER,
        }
    }
}

/// Writes `tree` as a box-drawing diagram, one line per node in pre-order.
/// The root's children start at column zero.
pub fn render(out: &mut impl Write, tree: &[Node]) -> io::Result<()> {
    render_level(out, tree, "")
}

fn render_level(out: &mut impl Write, nodes: &[Node], prefix: &str) -> io::Result<()> {
    for (index, node) in nodes.iter().enumerate() {
        let connector = Connector::for_index(index, nodes.len());
        writeln!(out, "{prefix}{}{node}", connector.glyph())?;

        if node.is_directory() {
            // Each subtree gets its own prefix; siblings never share one.
            let child_prefix = format!("{prefix}{}", connector.child_fragment());
            render_level(out, node.children(), &child_prefix)?;
        }
    }

    Ok(())
}
