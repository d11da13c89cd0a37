//! NRM classification: builds the element hierarchy from a nested label
//! definition and classifies build-ups into exact nodes, bubbling counts to
//! ancestors. Classification never errors: codes arrive as user-entered
//! strings, so anything unparseable or unmatched degrades silently to the
//! Uncategorized bucket.

use crate::domain::models::BuildUp;
use crate::services::ordering::{compare_coded, numeric_prefix};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ROOT_LABEL: &str = "NRM";
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Arbitrarily deep mapping from coded labels to sub-mappings; an empty map
/// marks a leaf.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaxonomyDef(pub BTreeMap<String, TaxonomyDef>);

/// One classification node. `assigned` holds exact matches only; an assembly
/// never appears on an ancestor it merely passed through. `subtree_count` is
/// a derived aggregate: own assigned plus the sum over children.
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyNode {
    pub label: String,
    pub code: Option<String>,
    pub children: Vec<TaxonomyNode>,
    pub assigned: Vec<String>,
    pub subtree_count: usize,
}

impl TaxonomyNode {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            code: numeric_prefix(label).map(str::to_string),
            children: Vec::new(),
            assigned: Vec::new(),
            subtree_count: 0,
        }
    }
}

/// Builds the classification skeleton: every level sorted by the shared
/// dotted-numeric comparator, with a synthetic Uncategorized node appended
/// last at the top level. Stateless; each call yields a fresh tree.
pub fn build_tree(def: &TaxonomyDef) -> TaxonomyNode {
    let mut root = TaxonomyNode::new(ROOT_LABEL);
    root.children = build_children(def);
    root.children.push(TaxonomyNode::new(UNCATEGORIZED_LABEL));
    root
}

fn build_children(def: &TaxonomyDef) -> Vec<TaxonomyNode> {
    let mut nodes: Vec<TaxonomyNode> = def
        .0
        .iter()
        .map(|(label, sub)| {
            let mut node = TaxonomyNode::new(label);
            node.children = build_children(sub);
            node
        })
        .collect();
    nodes.sort_by(|a, b| compare_coded(&a.label, &b.label));
    nodes
}

/// Classifies every build-up into the tree, returning a freshly annotated
/// copy (the input tree is never mutated). Per code: parse the leading
/// dotted-numeric prefix and walk one segment at a time, matching each
/// child's own code against the accumulated prefix exactly; any miss routes
/// the whole code to Uncategorized with no partial attribution to the
/// deepest matched ancestor. A build-up lands in Uncategorized at most once
/// however many of its codes fail.
pub fn classify(tree: &TaxonomyNode, buildups: &[BuildUp]) -> TaxonomyNode {
    let mut out = tree.clone();
    for b in buildups {
        let mut in_uncategorized = false;
        if b.classification_codes.is_empty() {
            route_uncategorized(&mut out, &b.name, &mut in_uncategorized);
            continue;
        }
        for code in &b.classification_codes {
            let placed = match numeric_prefix(code) {
                Some(prefix) => place_exact(&mut out, prefix, &b.name),
                None => false,
            };
            if !placed {
                route_uncategorized(&mut out, &b.name, &mut in_uncategorized);
            }
        }
    }
    out
}

/// Walks the accumulated prefix ("2", "2.5", "2.5.1", ...) down the tree.
/// Resolves the full index path first so counts are only touched when the
/// walk consumes the entire code.
fn place_exact(root: &mut TaxonomyNode, prefix: &str, name: &str) -> bool {
    let mut path = Vec::new();
    {
        let mut cur: &TaxonomyNode = root;
        let mut accumulated = String::new();
        for segment in prefix.split('.') {
            if !accumulated.is_empty() {
                accumulated.push('.');
            }
            accumulated.push_str(segment);
            let Some(i) = cur
                .children
                .iter()
                .position(|c| c.code.as_deref() == Some(accumulated.as_str()))
            else {
                return false;
            };
            path.push(i);
            cur = &cur.children[i];
        }
    }

    let mut cur = root;
    cur.subtree_count += 1;
    for i in path {
        cur = &mut cur.children[i];
        cur.subtree_count += 1;
    }
    cur.assigned.push(name.to_string());
    true
}

fn route_uncategorized(root: &mut TaxonomyNode, name: &str, already: &mut bool) {
    if *already {
        return;
    }
    *already = true;
    root.subtree_count += 1;
    if root
        .children
        .iter()
        .all(|c| c.label != UNCATEGORIZED_LABEL)
    {
        root.children.push(TaxonomyNode::new(UNCATEGORIZED_LABEL));
    }
    if let Some(uncategorized) = root
        .children
        .iter_mut()
        .find(|c| c.label == UNCATEGORIZED_LABEL)
    {
        uncategorized.subtree_count += 1;
        uncategorized.assigned.push(name.to_string());
    }
}
