use serde::{Serialize, Deserialize};


/// An unlabeled instance: an ordered map from attribute name to
/// categorical value.
///
/// Insertion order is kept, so a [`Domain`](crate::Domain)
/// derived from instances enumerates attributes deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pairs: Vec<(String, String)>,
}


impl Instance {
    /// Construct an empty instance.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }


    /// Set `attribute` to `value`.
    /// An existing value is replaced in place.
    pub fn with<A, V>(mut self, attribute: A, value: V) -> Self
        where A: Into<String>,
              V: Into<String>,
    {
        self.insert(attribute, value);
        self
    }


    /// Set `attribute` to `value`.
    /// An existing value is replaced in place.
    pub fn insert<A, V>(&mut self, attribute: A, value: V)
        where A: Into<String>,
              V: Into<String>,
    {
        let attribute = attribute.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(a, _)| *a == attribute) {
            Some((_, v)) => { *v = value; },
            None => { self.pairs.push((attribute, value)); },
        }
    }


    /// Returns the value of `attribute`, if any.
    #[inline]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.pairs.iter()
            .find(|(a, _)| a == attribute)
            .map(|(_, v)| v.as_str())
    }


    /// Iterate over `(attribute, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(a, v)| (a.as_str(), v.as_str()))
    }


    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }


    /// Returns `true` if the instance has no attribute.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}


impl<A, V> FromIterator<(A, V)> for Instance
    where A: Into<String>,
          V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, V)>>(iter: I) -> Self {
        let mut instance = Self::new();
        for (a, v) in iter {
            instance.insert(a, v);
        }
        instance
    }
}


/// An [`Instance`] paired with its boolean label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    instance: Instance,
    label: bool,
}


impl Example {
    /// Pair `instance` with `label`.
    pub fn new(instance: Instance, label: bool) -> Self {
        Self { instance, label }
    }


    /// The attributes of this example.
    #[inline]
    pub fn instance(&self) -> &Instance {
        &self.instance
    }


    /// The label of this example.
    #[inline]
    pub fn label(&self) -> bool {
        self.label
    }


    /// Shorthand for `self.instance().get(attribute)`.
    #[inline]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.instance.get(attribute)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let instance = Instance::new()
            .with("outlook", "sunny")
            .with("wind", "weak")
            .with("outlook", "rain");

        assert_eq!(instance.len(), 2);
        assert_eq!(instance.get("outlook"), Some("rain"));
        let names = instance.iter().map(|(a, _)| a).collect::<Vec<_>>();
        assert_eq!(names, ["outlook", "wind"]);
    }

    #[test]
    fn missing_attribute_is_none() {
        let instance = [("wind", "weak")].into_iter().collect::<Instance>();
        assert_eq!(instance.get("outlook"), None);
    }
}
