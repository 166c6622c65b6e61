//! Grows an ID3 tree from a labeled subset and the global domain.
use log::{debug, warn};
use rayon::prelude::*;

use crate::{Example, Domain};
use super::entropy::{entropy, label_counts, partition, split_gain};
use super::node::{Node, Edge};
use super::train_node::{Arena, TrainNode};


/// The decision taken for a single node.
pub(super) enum Growth<'d, 'a> {
    /// The subset is pure (or cannot be split): predict the label.
    Leaf(bool),


    /// Split on `attribute`; one subset per domain value, in domain order.
    Split {
        attribute: &'d str,
        partitions: Vec<(&'d str, Vec<&'a Example>)>,
    },
}


/// The majority label of `examples`. Ties and the empty subset give `false`.
#[inline]
pub(super) fn majority_label(examples: &[&Example]) -> bool {
    let (pos, neg) = label_counts(examples);
    pos > neg
}


/// Decide whether `examples` becomes a leaf or a branch.
///
/// The split attribute maximizes the information gain,
/// ties going to the first one in `domain`.
/// Only attributes taking two or more values on `examples` compete:
/// an attribute constant on the subset has zero gain and
/// would reproduce the same subset below it.
pub(super) fn grow<'d, 'a>(examples: &[&'a Example], domain: &'d Domain)
    -> Growth<'d, 'a>
{
    let parent = entropy(examples);
    if parent == 0.0 {
        return Growth::Leaf(majority_label(examples));
    }

    let mut best: Option<(f64, &'d str, Vec<(&'d str, Vec<&'a Example>)>)>
        = None;
    for attribute in domain.attributes() {
        let name = attribute.name();
        let partitions = partition(examples, name, attribute.values());

        let n_nonempty = partitions.iter()
            .filter(|(_, subset)| !subset.is_empty())
            .count();
        if n_nonempty < 2 { continue; }

        let gain = split_gain(parent, examples.len(), &partitions);
        if best.as_ref().map_or(true, |(best_gain, ..)| gain > *best_gain) {
            best = Some((gain, name, partitions));
        }
    }

    match best {
        Some((_, attribute, partitions)) => {
            Growth::Split { attribute, partitions }
        },
        None => {
            warn!(
                "{} examples share every attribute value \
                but disagree on the label; predicting the majority",
                examples.len()
            );
            Growth::Leaf(majority_label(examples))
        },
    }
}


/// Grow the tree for `examples` over the global `domain`.
///
/// Nodes are grown from an explicit work stack into an arena and
/// assembled bottom-up, so the depth of the tree is not limited
/// by the call stack.
/// An empty `examples` yields a single `false` leaf.
pub fn build_tree(examples: &[&Example], domain: &Domain) -> Node {
    let mut arena = Arena::new();
    let mut stack = vec![(0_usize, examples.to_vec(), 0_usize)];

    while let Some((slot, subset, depth)) = stack.pop() {
        let node = match grow(&subset, domain) {
            Growth::Leaf(label) => {
                debug!("depth {depth}: leaf {label} ({} examples)", subset.len());
                TrainNode::Leaf(label)
            },
            Growth::Split { attribute, partitions } => {
                debug!(
                    "depth {depth}: split on `{attribute}` ({} examples)",
                    subset.len()
                );
                let mut children = Vec::with_capacity(partitions.len());
                let mut pending = Vec::with_capacity(partitions.len());
                for (value, part) in partitions {
                    let child = arena.reserve();
                    children.push((value.to_string(), child));
                    pending.push((child, part, depth + 1));
                }
                // Pop the children in edge order.
                stack.extend(pending.into_iter().rev());

                TrainNode::Branch {
                    attribute: attribute.to_string(),
                    children,
                }
            },
        };
        arena.fill(slot, node);
    }

    Node::from(arena)
}


/// Same as [`build_tree`], but the subtrees below a branch
/// are grown in parallel with `rayon`.
/// The result is identical to [`build_tree`].
pub fn build_tree_par(examples: &[&Example], domain: &Domain) -> Node {
    grow_par(examples, domain, 0)
}


fn grow_par(examples: &[&Example], domain: &Domain, depth: usize) -> Node {
    match grow(examples, domain) {
        Growth::Leaf(label) => {
            debug!("depth {depth}: leaf {label} ({} examples)", examples.len());
            Node::leaf(label)
        },
        Growth::Split { attribute, partitions } => {
            debug!(
                "depth {depth}: split on `{attribute}` ({} examples)",
                examples.len()
            );
            let edges = partitions.into_par_iter()
                .map(|(value, part)| {
                    Edge::new(value, grow_par(&part, domain, depth + 1))
                })
                .collect::<Vec<_>>();
            Node::branch(attribute, edges)
        },
    }
}
