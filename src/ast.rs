pub mod node;
pub mod repeat;

pub use self::{
    node::{AstNode, NodeKind},
    repeat::RepeatKind,
};

/// The root of a successfully parsed expression.
///
/// The root is never [`AstNode::Blank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstRoot {
    node: AstNode,
}

impl AstRoot {
    #[must_use]
    pub(crate) fn new(node: AstNode) -> Self {
        debug_assert!(!node.is_blank());
        Self { node }
    }

    /// Consumes the root, returning the top-level node.
    #[must_use]
    pub fn into_inner(self) -> AstNode {
        self.node
    }
}

impl std::ops::Deref for AstRoot {
    type Target = AstNode;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl PartialEq<AstNode> for AstRoot {
    fn eq(&self, other: &AstNode) -> bool {
        self.node == *other
    }
}

impl std::fmt::Display for AstRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.node, f)
    }
}
