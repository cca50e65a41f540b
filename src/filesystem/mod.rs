//! In-memory directory trees and their text rendering.
//!
//! `build` walks a directory into a sorted tree of nodes, and `render`
//! writes that tree as a box-drawing diagram.

mod builder;
mod node;
mod renderer;

pub use builder::{TraversalError, build};
pub use node::{Node, Tree};
pub use renderer::render;
