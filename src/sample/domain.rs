//! Defines the attribute domain used to grow a tree.
use serde::{Serialize, Deserialize};

use super::instance::Example;


/// A categorical attribute and its legal values, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    values: Vec<String>,
}


impl Attribute {
    /// Name of the attribute.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Values of the attribute, in domain order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }


    fn push_value(&mut self, value: &str) {
        if !self.values.iter().any(|v| v == value) {
            self.values.push(value.to_string());
        }
    }
}


/// The global attribute domain: an ordered sequence of attributes,
/// each with an ordered list of distinct values.
///
/// The order fixes both the tie-break of attribute selection and
/// the order of the edges leaving a branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    attributes: Vec<Attribute>,
}


impl Domain {
    /// Construct an empty domain.
    pub fn new() -> Self {
        Self { attributes: Vec::new() }
    }


    /// Append the attribute `name` with `values`.
    /// If `name` already exists, unseen values are appended to it.
    pub fn with_attribute<S, I, V>(mut self, name: S, values: I) -> Self
        where S: AsRef<str>,
              I: IntoIterator<Item = V>,
              V: AsRef<str>,
    {
        let attribute = self.attribute_mut(name.as_ref());
        for value in values {
            attribute.push_value(value.as_ref());
        }
        self
    }


    /// Enumerate the domain of `examples`.
    /// Attributes and values appear in the order they are first seen.
    pub fn from_examples<'a, I>(examples: I) -> Self
        where I: IntoIterator<Item = &'a Example>,
    {
        let mut domain = Self::new();
        for example in examples {
            for (name, value) in example.instance().iter() {
                domain.attribute_mut(name).push_value(value);
            }
        }
        domain
    }


    fn attribute_mut(&mut self, name: &str) -> &mut Attribute {
        let pos = match self.attributes.iter().position(|a| a.name == name) {
            Some(pos) => pos,
            None => {
                self.attributes.push(Attribute {
                    name: name.to_string(),
                    values: Vec::new(),
                });
                self.attributes.len() - 1
            },
        };
        &mut self.attributes[pos]
    }


    /// Returns the values of `attribute`, if it is in the domain.
    #[inline]
    pub fn values(&self, attribute: &str) -> Option<&[String]> {
        self.attributes.iter()
            .find(|a| a.name == attribute)
            .map(Attribute::values)
    }


    /// Returns `true` if `value` is a legal value of `attribute`.
    pub fn contains(&self, attribute: &str, value: &str) -> bool {
        self.values(attribute)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }


    /// Iterate over the attribute names in domain order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(Attribute::name)
    }


    /// Returns the attributes in domain order.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }


    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }


    /// Returns `true` if the domain has no attribute.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Instance;

    fn example(pairs: &[(&str, &str)], label: bool) -> Example {
        Example::new(pairs.iter().copied().collect::<Instance>(), label)
    }

    #[test]
    fn first_seen_order() {
        let examples = [
            example(&[("outlook", "sunny"), ("wind", "weak")], false),
            example(&[("outlook", "rain"), ("wind", "strong")], true),
            example(&[("outlook", "sunny"), ("wind", "weak")], true),
            example(&[("outlook", "overcast"), ("wind", "weak")], true),
        ];
        let domain = Domain::from_examples(&examples);

        let names = domain.names().collect::<Vec<_>>();
        assert_eq!(names, ["outlook", "wind"]);
        assert_eq!(
            domain.values("outlook").unwrap(),
            ["sunny", "rain", "overcast"]
        );
        assert_eq!(domain.values("wind").unwrap(), ["weak", "strong"]);
    }

    #[test]
    fn explicit_construction_merges_values() {
        let domain = Domain::new()
            .with_attribute("wind", ["strong", "weak"])
            .with_attribute("outlook", ["rain"])
            .with_attribute("wind", ["weak", "calm"]);

        assert_eq!(domain.len(), 2);
        assert_eq!(domain.values("wind").unwrap(), ["strong", "weak", "calm"]);
        assert!(domain.contains("outlook", "rain"));
        assert!(!domain.contains("outlook", "sunny"));
        assert!(!domain.contains("humidity", "high"));
    }
}
