//! Defines the inner representation
//! of the ID3 classifier.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Instance};
use crate::error::{Error, Result};


/// Enumeration of branch and leaf nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on `attribute`,
    /// with one edge per value of its domain.
    Branch {
        /// Attribute this node splits on.
        attribute: String,
        /// Outgoing edges, in domain order.
        edges: Vec<Edge>,
    },


    /// A node that predicts `label`.
    Leaf {
        /// Predicted label.
        label: bool,
    },
}


/// An edge from a branch to its child,
/// labeled with a value of the branch attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    value: String,
    child: Node,
}


impl Edge {
    pub(crate) fn new<S: Into<String>>(value: S, child: Node) -> Self {
        Self { value: value.into(), child }
    }


    /// The attribute value this edge is taken for.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }


    /// The node this edge leads to.
    #[inline]
    pub fn child(&self) -> &Node {
        &self.child
    }
}


impl Node {
    pub(crate) fn branch<S: Into<String>>(attribute: S, edges: Vec<Edge>)
        -> Self
    {
        Self::Branch { attribute: attribute.into(), edges }
    }


    pub(crate) fn leaf(label: bool) -> Self {
        Self::Leaf { label }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// The split attribute of a branch.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::Branch { attribute, .. } => Some(attribute),
            Self::Leaf { .. } => None,
        }
    }


    /// The outgoing edges. Empty for a leaf.
    pub fn edges(&self) -> &[Edge] {
        match self {
            Self::Branch { edges, .. } => &edges[..],
            Self::Leaf { .. } => &[],
        }
    }


    /// The prediction of a leaf.
    pub fn label(&self) -> Option<bool> {
        match self {
            Self::Branch { .. } => None,
            Self::Leaf { label } => Some(*label),
        }
    }


    /// Length of the longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.edges().iter().map(|e| (&e.child, depth + 1)));
        }
        deepest
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        let mut leaves = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Branch { edges, .. } => {
                    stack.extend(edges.iter().map(|e| &e.child));
                },
                Self::Leaf { .. } => { leaves += 1; },
            }
        }
        leaves
    }


    /// Text shown for this node when it is the target of an edge.
    pub(crate) fn caption(&self) -> String {
        match self {
            Self::Branch { attribute, .. } => attribute.clone(),
            Self::Leaf { label } => label.to_string(),
        }
    }


    /// Returns the branches in depth-first order,
    /// paired with their level (the root is on level `1`).
    pub(crate) fn branches(&self) -> Vec<(&str, &[Edge], usize)> {
        let mut branches = Vec::new();
        let mut stack = vec![(self, 1_usize)];
        while let Some((node, level)) = stack.pop() {
            if let Self::Branch { attribute, edges } = node {
                branches.push((attribute.as_str(), &edges[..], level));
                stack.extend(edges.iter().rev().map(|e| (&e.child, level + 1)));
            }
        }
        branches
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { attribute, edges } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attribute}\" ];\n",
                )];

                let mut next_id = id + 1;
                for edge in edges {
                    let child_id = next_id;
                    let (mut child, return_id) = edge.child.to_dot_info(child_id);
                    info.append(&mut child);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                        value = edge.value,
                    ));
                    next_id = return_id;
                }

                (info, next_id)
            },
            Self::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl Classifier for Node {
    fn classify(&self, instance: &Instance) -> Result<bool> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { label } => { return Ok(*label); },
                Self::Branch { attribute, edges } => {
                    let value = instance.get(attribute)
                        .ok_or_else(|| Error::MissingAttribute {
                            attribute: attribute.clone(),
                        })?;
                    node = edges.iter()
                        .find(|edge| edge.value == value)
                        .map(|edge| &edge.child)
                        .ok_or_else(|| Error::UnknownValue {
                            attribute: attribute.clone(),
                            value: value.to_string(),
                        })?;
                },
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // outlook ─┬─ sunny ── humidity ─┬─ high   ── false
    //          │                     └─ normal ── true
    //          ├─ overcast ── true
    //          └─ rain ── false
    fn small_tree() -> Node {
        let humidity = Node::branch("humidity", vec![
            Edge::new("high", Node::leaf(false)),
            Edge::new("normal", Node::leaf(true)),
        ]);
        Node::branch("outlook", vec![
            Edge::new("sunny", humidity),
            Edge::new("overcast", Node::leaf(true)),
            Edge::new("rain", Node::leaf(false)),
        ])
    }

    #[test]
    fn traversal() {
        let tree = small_tree();
        let instance = Instance::new()
            .with("outlook", "sunny")
            .with("humidity", "normal");
        assert!(tree.classify(&instance).unwrap());

        // `humidity` is never visited on this path.
        let instance = Instance::new().with("outlook", "rain");
        assert!(!tree.classify(&instance).unwrap());
    }

    #[test]
    fn domain_mismatch() {
        let tree = small_tree();

        let instance = Instance::new().with("outlook", "sunny");
        let err = tree.classify(&instance).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAttribute { ref attribute } if attribute == "humidity"
        ));

        let instance = Instance::new().with("outlook", "foggy");
        let err = tree.classify(&instance).unwrap_err();
        assert!(matches!(err, Error::UnknownValue { .. }));
        assert!(err.is_domain_mismatch());
    }

    #[test]
    fn shape() {
        let tree = small_tree();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 4);
        assert_eq!(tree.attribute(), Some("outlook"));
        assert_eq!(tree.edges().len(), 3);
        assert_eq!(tree.edges()[1].child().label(), Some(true));

        let levels = tree.branches()
            .into_iter()
            .map(|(attribute, _, level)| (attribute, level))
            .collect::<Vec<_>>();
        assert_eq!(levels, [("outlook", 1), ("humidity", 2)]);

        let leaf = Node::leaf(false);
        assert_eq!(leaf.depth(), 0);
        assert_eq!(leaf.n_leaves(), 1);
        assert!(leaf.edges().is_empty());
    }
}
