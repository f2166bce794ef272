//! Category hierarchy and the queries the category step runs against it.
//!
//! The hierarchy is a static forest of [`CategoryNode`]s. All traversals go
//! through [`Walk`], an explicit-stack pre-order walk, so lookup order and
//! search truncation are deterministic: siblings are visited in declaration
//! order and a node is always visited before its descendants.

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;

/// Build a [`CategoryNode`] literal: `category!(id, name)` for a leaf,
/// `category!(id, name, [children...])` for a branch, and
/// `category!(id, name, icon, [children...])` for an iconed root.
macro_rules! category {
    ($id:literal, $name:literal) => {
        $crate::category::CategoryNode {
            id: $id,
            name: $name,
            icon: None,
            subcategories: &[],
        }
    };
    ($id:literal, $name:literal, [$($sub:expr),* $(,)?]) => {
        $crate::category::CategoryNode {
            id: $id,
            name: $name,
            icon: None,
            subcategories: &[$($sub),*],
        }
    };
    ($id:literal, $name:literal, $icon:literal, [$($sub:expr),* $(,)?]) => {
        $crate::category::CategoryNode {
            id: $id,
            name: $name,
            icon: Some($icon),
            subcategories: &[$($sub),*],
        }
    };
}

mod data;

pub use data::CATEGORIES;

/// Separator used when joining category names into a single label.
pub const PATH_SEPARATOR: &str = " > ";

/// Maximum number of hits returned by [`CategoryTree::search`].
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Minimum path length before a listing may move on to item details.
pub const MIN_SELECTABLE_DEPTH: usize = 2;

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// One category. Ids are unique among siblings; the built-in dataset keeps
/// them globally unique.
#[derive(Debug, Serialize)]
pub struct CategoryNode {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    #[serde(skip_serializing_if = "is_leaf_slice")]
    pub subcategories: &'static [CategoryNode],
}

fn is_leaf_slice(subs: &&'static [CategoryNode]) -> bool {
    subs.is_empty()
}

impl CategoryNode {
    pub fn is_leaf(&self) -> bool {
        self.subcategories.is_empty()
    }

    pub fn crumb(&self) -> CategoryCrumb {
        CategoryCrumb {
            id: self.id.to_string(),
            name: self.name.to_string(),
            icon: self.icon.map(str::to_string),
        }
    }
}

/// Owned `{id, name, icon}` summary of a node, as persisted in a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCrumb {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Pre-order walk over a forest that tracks the root-to-node trail.
struct Walk {
    stack: Vec<(&'static CategoryNode, usize)>,
    trail: Vec<&'static CategoryNode>,
}

impl Walk {
    fn new(roots: &'static [CategoryNode]) -> Self {
        Self {
            stack: roots.iter().rev().map(|n| (n, 0)).collect(),
            trail: Vec::new(),
        }
    }

    /// Move to the next node. Afterwards [`Walk::trail`] ends at that node.
    fn advance(&mut self) -> Option<&'static CategoryNode> {
        let (node, depth) = self.stack.pop()?;
        self.trail.truncate(depth);
        self.trail.push(node);
        self.stack
            .extend(node.subcategories.iter().rev().map(|child| (child, depth + 1)));
        Some(node)
    }

    fn trail(&self) -> &[&'static CategoryNode] {
        &self.trail
    }
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

/// Read-only view over a category forest.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTree {
    roots: &'static [CategoryNode],
}

impl Default for CategoryTree {
    fn default() -> Self {
        Self::standard()
    }
}

impl CategoryTree {
    pub const fn new(roots: &'static [CategoryNode]) -> Self {
        Self { roots }
    }

    /// The built-in marketplace hierarchy.
    pub fn standard() -> Self {
        Self::new(CATEGORIES)
    }

    pub fn roots(&self) -> &'static [CategoryNode] {
        self.roots
    }

    /// Root-to-node path for `category_id`, or an empty vec when absent.
    ///
    /// If ids collide, the first node in pre-order wins.
    pub fn path_to(&self, category_id: &str) -> Vec<&'static CategoryNode> {
        let mut walk = Walk::new(self.roots);
        while let Some(node) = walk.advance() {
            if node.id == category_id {
                return walk.trail().to_vec();
            }
        }
        Vec::new()
    }

    /// Case-insensitive substring search over node names.
    ///
    /// A blank query means no search is active, which is reported as
    /// [`SearchOutcome::Inactive`] rather than an empty hit list.
    pub fn search(&self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            return SearchOutcome::Inactive;
        }
        let needle = query.to_lowercase();

        let mut hits = Vec::new();
        let mut walk = Walk::new(self.roots);
        while let Some(node) = walk.advance() {
            if !node.name.to_lowercase().contains(&needle) {
                continue;
            }
            let path = CategoryPath(walk.trail().to_vec());
            hits.push(SearchHit {
                category: node.crumb(),
                full_path: path.label(),
                path,
            });
            if hits.len() == MAX_SEARCH_RESULTS {
                break;
            }
        }
        SearchOutcome::Results(hits)
    }

    /// Options to show below `path` (a list of ids from a root).
    ///
    /// An empty path yields the roots. A path that does not follow the tree
    /// yields an empty slice instead of an error.
    pub fn children_at<S: AsRef<str>>(&self, path: &[S]) -> &'static [CategoryNode] {
        let mut current = self.roots;
        for id in path {
            match current.iter().find(|c| c.id == id.as_ref()) {
                Some(found) => current = found.subcategories,
                None => return &[],
            }
        }
        current
    }

    /// Every node in pre-order with its depth, parent and joined label.
    pub fn flatten(&self) -> Vec<FlatCategory> {
        let mut out = Vec::new();
        let mut walk = Walk::new(self.roots);
        while let Some(node) = walk.advance() {
            let trail = walk.trail();
            out.push(FlatCategory {
                id: node.id,
                name: node.name,
                depth: trail.len() - 1,
                parent_id: trail.iter().rev().nth(1).map(|p| p.id),
                full_path: join_names(trail),
            });
        }
        out
    }
}

fn join_names(nodes: &[&'static CategoryNode]) -> String {
    nodes
        .iter()
        .map(|n| n.name)
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// A flattened node, as produced by [`CategoryTree::flatten`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub depth: usize,
    pub parent_id: Option<&'static str>,
    pub full_path: String,
}

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// Result of a category search.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The query was blank; the browser should show the regular options.
    Inactive,
    /// A search ran; the list may be empty.
    Results(Vec<SearchHit>),
}

impl SearchOutcome {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Results(_))
    }

    /// Hits of an active search, `None` when inactive.
    pub fn hits(&self) -> Option<&[SearchHit]> {
        match self {
            Self::Inactive => None,
            Self::Results(hits) => Some(hits),
        }
    }

    pub fn into_hits(self) -> Option<Vec<SearchHit>> {
        match self {
            Self::Inactive => None,
            Self::Results(hits) => Some(hits),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub category: CategoryCrumb,
    pub path: CategoryPath,
    pub full_path: String,
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// A root-to-node path where each node is a direct child of the previous
/// one. Serializes as a list of [`CategoryCrumb`]s.
#[derive(Debug, Clone, Default)]
pub struct CategoryPath(Vec<&'static CategoryNode>);

impl PartialEq for CategoryPath {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(&other.0).all(|(a, b)| std::ptr::eq(*a, *b))
    }
}

impl CategoryPath {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Resolve a list of ids against `tree`, checking the parent-child
    /// chain at every level.
    pub fn from_ids<S: AsRef<str>>(tree: &CategoryTree, ids: &[S]) -> Result<Self, CoreError> {
        let mut path = Self::empty();
        for id in ids {
            path.descend(tree, id.as_ref())?;
        }
        Ok(path)
    }

    /// Resolve persisted crumbs; their ids must still form a valid path.
    pub fn from_crumbs(tree: &CategoryTree, crumbs: &[CategoryCrumb]) -> Result<Self, CoreError> {
        let ids: Vec<&str> = crumbs.iter().map(|c| c.id.as_str()).collect();
        Self::from_ids(tree, &ids)
    }

    /// Append the child `id` of the current last node (or a root when the
    /// path is empty).
    pub fn descend(&mut self, tree: &CategoryTree, id: &str) -> Result<(), CoreError> {
        let options = match self.last() {
            Some(node) => node.subcategories,
            None => tree.roots(),
        };
        let child = options.iter().find(|c| c.id == id).ok_or_else(|| {
            CoreError::Validation(match self.last() {
                Some(parent) => format!("Category '{id}' is not a subcategory of '{}'", parent.id),
                None => format!("Category '{id}' is not a top-level category"),
            })
        })?;
        self.0.push(child);
        Ok(())
    }

    /// Keep only the first `len` nodes (breadcrumb navigation).
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the path is deep enough to continue to item details.
    pub fn is_complete(&self) -> bool {
        self.0.len() >= MIN_SELECTABLE_DEPTH
    }

    pub fn last(&self) -> Option<&'static CategoryNode> {
        self.0.last().copied()
    }

    pub fn nodes(&self) -> &[&'static CategoryNode] {
        &self.0
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.0.iter().map(|n| n.id).collect()
    }

    /// Node names joined with `" > "`.
    pub fn label(&self) -> String {
        join_names(&self.0)
    }

    pub fn crumbs(&self) -> Vec<CategoryCrumb> {
        self.0.iter().map(|n| n.crumb()).collect()
    }
}

impl Serialize for CategoryPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for node in &self.0 {
            seq.serialize_element(&node.crumb())?;
        }
        seq.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
