//! Pure transforms over a flat category snapshot.

use std::collections::{HashMap, HashSet};

use vitrine_core::CategoryId;

use crate::category::{Category, CategoryNode};

/// Assemble a flat snapshot into a forest of nested nodes.
///
/// Roots are the categories with no parent, plus every category whose parent
/// id does not exist in the snapshot. Such orphans are promoted to roots
/// rather than dropped, so a dangling reference cannot make inventory
/// invisible. Siblings (and roots) are ordered by `position` ascending,
/// ties keeping input order.
///
/// Each category is attached at most once: child lists are consumed as they
/// are claimed, so malformed data (duplicate ids, cyclic parent chains)
/// cannot make the recursion unbounded. Categories on a parent cycle are
/// unreachable from any root and are omitted from the forest; they still
/// participate in [`descendant_ids`].
pub fn build_forest(categories: Vec<Category>) -> Vec<CategoryNode> {
    let known_ids: HashSet<CategoryId> = categories.iter().map(|c| c.id).collect();

    let mut roots: Vec<Category> = Vec::new();
    let mut children_by_parent: HashMap<CategoryId, Vec<Category>> = HashMap::new();
    for category in categories {
        match category.parent_id {
            Some(parent_id) if known_ids.contains(&parent_id) => {
                children_by_parent.entry(parent_id).or_default().push(category);
            }
            // No parent, or a dangling reference: either way a root.
            _ => roots.push(category),
        }
    }

    // sort_by_key is stable, so equal positions keep input order.
    roots.sort_by_key(|c| c.position);
    for siblings in children_by_parent.values_mut() {
        siblings.sort_by_key(|c| c.position);
    }

    roots
        .into_iter()
        .map(|root| build_node(root, &mut children_by_parent))
        .collect()
}

fn build_node(
    category: Category,
    children_by_parent: &mut HashMap<CategoryId, Vec<Category>>,
) -> CategoryNode {
    let children = children_by_parent
        .remove(&category.id)
        .unwrap_or_default()
        .into_iter()
        .map(|child| build_node(child, children_by_parent))
        .collect();
    CategoryNode { category, children }
}

/// Transitive descendant-id closure of `root_id`, including `root_id` itself.
///
/// Grows the set by whole passes over the snapshot until a pass adds nothing.
/// Iteration is bounded by the number of distinct categories rather than by
/// following parent/child pointers, so cyclic input terminates — a category
/// can be included at most once. Returns at least `{root_id}` even when no
/// record with that id exists; callers scope product queries to the result
/// directly ("this category and everything under it").
pub fn descendant_ids(categories: &[Category], root_id: CategoryId) -> HashSet<CategoryId> {
    let mut ids = HashSet::from([root_id]);
    loop {
        let before = ids.len();
        for category in categories {
            if let Some(parent_id) = category.parent_id {
                if ids.contains(&parent_id) {
                    ids.insert(category.id);
                }
            }
        }
        if ids.len() == before {
            return ids;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    /// Deterministic id from a small number, for readable fixtures.
    fn id(n: u32) -> CategoryId {
        CategoryId::from_str(&format!("00000000-0000-7000-8000-{n:012}")).unwrap()
    }

    fn cat(n: u32, parent: Option<u32>, position: i32) -> Category {
        Category {
            id: id(n),
            parent_id: parent.map(id),
            name: format!("cat-{n}"),
            position,
            is_active: true,
        }
    }

    #[test]
    fn chain_builds_single_root_with_nested_children() {
        let cats = vec![cat(1, None, 0), cat(2, Some(1), 0), cat(3, Some(2), 0)];

        let forest = build_forest(cats);
        assert_eq!(forest.len(), 1);

        let root = &forest[0];
        assert_eq!(root.id(), id(1));
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].id(), id(2));
        assert_eq!(root.children[0].children[0].id(), id(3));
        assert_eq!(root.size(), 3);
    }

    #[test]
    fn chain_descendants_cover_whole_chain() {
        let cats = vec![cat(1, None, 0), cat(2, Some(1), 0), cat(3, Some(2), 0)];
        let ids = descendant_ids(&cats, id(1));
        assert_eq!(ids, HashSet::from([id(1), id(2), id(3)]));
    }

    #[test]
    fn descendants_of_mid_node_exclude_ancestors() {
        let cats = vec![cat(1, None, 0), cat(2, Some(1), 0), cat(3, Some(2), 0)];
        let ids = descendant_ids(&cats, id(2));
        assert_eq!(ids, HashSet::from([id(2), id(3)]));
    }

    #[test]
    fn siblings_are_ordered_by_position() {
        let cats = vec![
            cat(1, None, 0),
            cat(2, Some(1), 5),
            cat(3, Some(1), 1),
            cat(4, Some(1), 3),
        ];

        let forest = build_forest(cats);
        let children: Vec<CategoryId> = forest[0].children.iter().map(CategoryNode::id).collect();
        assert_eq!(children, vec![id(3), id(4), id(2)]);
    }

    #[test]
    fn position_ties_keep_input_order() {
        let cats = vec![cat(1, None, 0), cat(2, Some(1), 1), cat(3, Some(1), 1)];

        let forest = build_forest(cats);
        let children: Vec<CategoryId> = forest[0].children.iter().map(CategoryNode::id).collect();
        assert_eq!(children, vec![id(2), id(3)]);
    }

    #[test]
    fn dangling_parent_promotes_orphan_to_root() {
        let cats = vec![cat(1, None, 0), cat(5, Some(999), 1)];

        let forest = build_forest(cats);
        let roots: Vec<CategoryId> = forest.iter().map(CategoryNode::id).collect();
        assert_eq!(roots, vec![id(1), id(5)]);
    }

    #[test]
    fn orphan_keeps_its_own_subtree() {
        let cats = vec![cat(5, Some(999), 0), cat(6, Some(5), 0)];

        let forest = build_forest(cats);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id(), id(5));
        assert_eq!(forest[0].children[0].id(), id(6));
    }

    #[test]
    fn multiple_roots_form_a_forest() {
        let cats = vec![cat(2, None, 1), cat(1, None, 0), cat(3, Some(1), 0)];

        let forest = build_forest(cats);
        let roots: Vec<CategoryId> = forest.iter().map(CategoryNode::id).collect();
        assert_eq!(roots, vec![id(1), id(2)]);
    }

    #[test]
    fn empty_snapshot_builds_empty_forest() {
        assert!(build_forest(Vec::new()).is_empty());
    }

    #[test]
    fn cyclic_input_terminates_and_includes_cycle_once() {
        let cats = vec![cat(1, Some(2), 0), cat(2, Some(1), 0)];
        let ids = descendant_ids(&cats, id(1));
        assert_eq!(ids, HashSet::from([id(1), id(2)]));
    }

    #[test]
    fn self_parent_terminates() {
        let cats = vec![cat(1, Some(1), 0)];
        assert_eq!(descendant_ids(&cats, id(1)), HashSet::from([id(1)]));
        // Unreachable from any root, so the forest is empty rather than looping.
        assert!(build_forest(cats).is_empty());
    }

    #[test]
    fn unknown_root_still_returns_itself() {
        let cats = vec![cat(1, None, 0)];
        assert_eq!(descendant_ids(&cats, id(42)), HashSet::from([id(42)]));
    }

    #[test]
    fn descendants_ignore_disjoint_subtrees() {
        let cats = vec![
            cat(1, None, 0),
            cat(2, Some(1), 0),
            cat(10, None, 1),
            cat(11, Some(10), 0),
        ];
        let ids = descendant_ids(&cats, id(1));
        assert_eq!(ids, HashSet::from([id(1), id(2)]));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the closure terminates on arbitrary parent maps
            /// (including cycles and dangling refs) and always contains root.
            #[test]
            fn closure_terminates_and_contains_root(
                parents in prop::collection::vec(prop::option::of(0u32..12), 0..12),
                root in 0u32..12,
            ) {
                let cats: Vec<Category> = parents
                    .iter()
                    .enumerate()
                    .map(|(i, p)| cat(i as u32, *p, 0))
                    .collect();

                let ids = descendant_ids(&cats, id(root));
                prop_assert!(ids.contains(&id(root)));
                prop_assert!(ids.len() <= cats.len() + 1);
            }

            /// Property: every category appears at most once in the forest,
            /// and never more categories than went in.
            #[test]
            fn forest_never_duplicates_nodes(
                parents in prop::collection::vec(prop::option::of(0u32..12), 0..12),
            ) {
                let cats: Vec<Category> = parents
                    .iter()
                    .enumerate()
                    .map(|(i, p)| cat(i as u32, *p, 0))
                    .collect();
                let total = cats.len();

                let forest = build_forest(cats);
                let mut seen = HashSet::new();
                let mut stack: Vec<&CategoryNode> = forest.iter().collect();
                while let Some(node) = stack.pop() {
                    prop_assert!(seen.insert(node.id()));
                    stack.extend(node.children.iter());
                }
                prop_assert!(seen.len() <= total);
            }
        }
    }
}
