use indextree::{Arena, NodeId};

use crate::elements::Elements;
use crate::htmlvalue::Value;

pub(crate) type HtmlArena = Arena<Value>;

/// A node in the HTML tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Html` struct owns all HTML tree data in your program. It lets you
/// parse, access and manipulate one or more documents.
///
/// `Html` is implemented in several sections focusing on different aspects
/// of accessing and manipulating the tree.
pub struct Html {
    pub(crate) arena: HtmlArena,
    pub(crate) elements: Elements,
}

impl Html {
    /// Create a new `Html` instance.
    pub fn new() -> Self {
        Html {
            arena: HtmlArena::new(),
            elements: Elements::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &HtmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut HtmlArena {
        &mut self.arena
    }

    /// The element name sets (void, preformatted, raw text) this tree uses.
    #[inline]
    pub fn elements(&self) -> &Elements {
        &self.elements
    }
}

impl Default for Html {
    fn default() -> Self {
        Self::new()
    }
}
