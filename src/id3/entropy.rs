//! Entropy and information gain of a labeled subset.
use crate::{Example, Domain};
use crate::error::{Error, Result};


/// Returns `(#positive, #negative)` labels in `examples`.
#[inline]
pub(crate) fn label_counts(examples: &[&Example]) -> (usize, usize) {
    let pos = examples.iter()
        .filter(|example| example.label())
        .count();
    (pos, examples.len() - pos)
}


/// Returns the binary entropy (in bits) of the labels in `examples`.
///
/// A pure subset, including the empty one, has entropy `0.0`.
pub fn entropy(examples: &[&Example]) -> f64 {
    let total = examples.len();
    let (pos, neg) = label_counts(examples);

    if pos == total || neg == total { return 0.0; }

    let total = total as f64;
    let pos_p = pos as f64 / total;
    let neg_p = neg as f64 / total;

    -(pos_p * pos_p.log2()) - (neg_p * neg_p.log2())
}


/// Returns the subsets of `examples` taking each of `values`
/// for `attribute`, in the order of `values`.
/// A value no example takes yields an empty subset.
pub(crate) fn partition<'d, 'a>(
    examples: &[&'a Example],
    attribute: &str,
    values: &'d [String],
) -> Vec<(&'d str, Vec<&'a Example>)>
{
    values.iter()
        .map(|value| {
            let subset = examples.iter()
                .copied()
                .filter(|example| {
                    example.get(attribute) == Some(value.as_str())
                })
                .collect::<Vec<_>>();
            (value.as_str(), subset)
        })
        .collect()
}


/// Information gain of a split, given the entropy of the parent
/// and the partition it induces.
pub(crate) fn split_gain<'d, 'a>(
    parent_entropy: f64,
    n_examples: usize,
    partitions: &[(&'d str, Vec<&'a Example>)],
) -> f64
{
    if n_examples == 0 { return parent_entropy; }

    let total = n_examples as f64;
    partitions.iter()
        .fold(parent_entropy, |gain, (_, subset)| {
            gain - (subset.len() as f64 / total) * entropy(subset)
        })
}


/// Returns the information gain of splitting `examples` on `attribute`,
/// summing over every value `domain` lists for it.
///
/// An empty `examples` has gain `0.0`.
pub fn information_gain(
    examples: &[&Example],
    attribute: &str,
    domain: &Domain,
) -> Result<f64>
{
    let values = domain.values(attribute)
        .ok_or_else(|| Error::UnknownAttribute(attribute.into()))?;
    let partitions = partition(examples, attribute, values);
    Ok(split_gain(entropy(examples), examples.len(), &partitions))
}


/// Returns the attribute of `domain` with the highest information gain.
/// Ties go to the attribute that comes first in `domain`.
/// Returns `None` if `domain` is empty.
pub fn best_attribute<'d>(examples: &[&Example], domain: &'d Domain)
    -> Option<&'d str>
{
    let parent = entropy(examples);
    let mut best: Option<(&str, f64)> = None;
    for attribute in domain.attributes() {
        let name = attribute.name();
        let partitions = partition(examples, name, attribute.values());
        let gain = split_gain(parent, examples.len(), &partitions);

        if best.map_or(true, |(_, best_gain)| gain > best_gain) {
            best = Some((name, gain));
        }
    }
    best.map(|(name, _)| name)
}
