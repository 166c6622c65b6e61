//! Defines the representation of a tree while it is grown.
use super::node::{Node, Edge};


/// A node grown into an arena.
/// Children are referred to by their slot in the arena,
/// and are always allocated after their parent.
pub(super) enum TrainNode {
    /// A node with one child slot per value of `attribute`.
    Branch {
        attribute: String,
        children: Vec<(String, usize)>,
    },


    /// A node that have no child.
    Leaf(bool),
}


/// Arena of [`TrainNode`]s. Slot `0` is the root.
pub(super) struct Arena {
    slots: Vec<Option<TrainNode>>,
}


impl Arena {
    /// Construct an arena holding the (not yet grown) root slot.
    pub(super) fn new() -> Self {
        Self { slots: vec![None] }
    }


    /// Reserve a slot for a node that is grown later.
    pub(super) fn reserve(&mut self) -> usize {
        self.slots.push(None);
        self.slots.len() - 1
    }


    /// Fill a reserved slot.
    pub(super) fn fill(&mut self, slot: usize, node: TrainNode) {
        self.slots[slot] = Some(node);
    }


    /// Number of slots.
    pub(super) fn len(&self) -> usize {
        self.slots.len()
    }
}


impl From<Arena> for Node {
    /// Assemble the arena bottom-up.
    /// Walking the slots backwards finishes every child before its parent,
    /// so no recursion is needed.
    fn from(arena: Arena) -> Self {
        let mut nodes: Vec<Option<Node>> = Vec::with_capacity(arena.len());
        nodes.resize_with(arena.len(), || None);

        for (slot, node) in arena.slots.into_iter().enumerate().rev() {
            let node = match node.expect("Every slot is grown before assembly") {
                TrainNode::Leaf(label) => Node::leaf(label),
                TrainNode::Branch { attribute, children } => {
                    let edges = children.into_iter()
                        .map(|(value, child)| {
                            let child = nodes[child].take()
                                .expect("A child is assembled before its parent");
                            Edge::new(value, child)
                        })
                        .collect::<Vec<_>>();
                    Node::branch(attribute, edges)
                },
            };
            nodes[slot] = Some(node);
        }

        nodes.swap_remove(0)
            .expect("The root slot is never taken")
    }
}
