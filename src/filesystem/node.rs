use derive_more::Display;

/// Ordered sequence of the direct children of one directory.
pub type Tree = Vec<Node>;

/// A single entry of a directory tree
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Node {
    #[display("{name}, {size}")]
    File { name: String, size: u64 },
    #[display("{name}")]
    Directory { name: String, children: Tree },
}

impl Node {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Node::File {
            name: name.into(),
            size,
        }
    }

    pub fn directory(name: impl Into<String>, children: Tree) -> Self {
        Node::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Directory { name, .. } => name,
        }
    }

    /// Children of a directory; files have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Directory { children, .. } => children,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }
}
