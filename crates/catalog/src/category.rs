use serde::{Deserialize, Serialize};

use vitrine_core::CategoryId;

/// A category as stored: flat, with an optional parent reference.
///
/// The set of categories forms a forest. No-cycle discipline is assumed but
/// not enforced here; the transforms in [`crate::tree`] stay well-behaved on
/// malformed data (dangling parents, cycles) rather than trusting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub parent_id: Option<CategoryId>,
    pub name: String,
    /// Sibling sort key, ascending.
    pub position: i32,
    pub is_active: bool,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A category with its resolved children, as produced by
/// [`crate::tree::build_forest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    pub category: Category,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn id(&self) -> CategoryId {
        self.category.id
    }

    /// Nodes in this subtree, including self.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(CategoryNode::size).sum::<usize>()
    }
}
