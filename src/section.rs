use indexmap::IndexMap;

use crate::value::{Value, ValueType};

/// A named, typed leaf value inside a section.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    value: Value,
}

impl Property {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Property { name: name.into(), value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

/// Two properties are equal when name and value type match; the values
/// themselves are not compared.
impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value.value_type() == other.value.value_type()
    }
}

/// A named node in the configuration tree: an insertion-ordered set of
/// properties plus an insertion-ordered set of child sections, each unique
/// by name within this node.
///
/// Every addressing operation takes a dotted path and splits on the FIRST
/// dot: `"A.B.C"` descends into child `A`, then `B`, then resolves `C` at
/// that level. Missing intermediate segments resolve to `None`/`false`,
/// never an error. Empty paths and empty segments never resolve.
#[derive(Debug, Clone, Default)]
pub struct Section {
    name: String,
    properties: IndexMap<String, Property>,
    children: IndexMap<String, Section>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            properties: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties directly inside this section, in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Child sections directly inside this section, in insertion order.
    pub fn subsections(&self) -> impl Iterator<Item = &Section> {
        self.children.values()
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn subsection_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.children.is_empty()
    }

    /// Drop every property and child section.
    pub fn clear(&mut self) {
        self.properties.clear();
        self.children.clear();
    }

    /// Resolve a property by dotted path.
    pub fn get(&self, path: &str) -> Option<&Property> {
        if path.is_empty() {
            return None;
        }

        match path.split_once('.') {
            None => self.properties.get(path),
            Some((head, rest)) => self.children.get(head)?.get(rest),
        }
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut Property> {
        if path.is_empty() {
            return None;
        }

        match path.split_once('.') {
            None => self.properties.get_mut(path),
            Some((head, rest)) => self.children.get_mut(head)?.get_mut(rest),
        }
    }

    /// Resolve a child section by dotted path.
    pub fn get_subsection(&self, path: &str) -> Option<&Section> {
        if path.is_empty() {
            return None;
        }

        match path.split_once('.') {
            None => self.children.get(path),
            Some((head, rest)) => self.children.get(head)?.get_subsection(rest),
        }
    }

    pub fn get_subsection_mut(&mut self, path: &str) -> Option<&mut Section> {
        if path.is_empty() {
            return None;
        }

        match path.split_once('.') {
            None => self.children.get_mut(path),
            Some((head, rest)) => self.children.get_mut(head)?.get_subsection_mut(rest),
        }
    }

    pub fn has_property(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn has_subsection(&self, path: &str) -> bool {
        self.get_subsection(path).is_some()
    }

    /// Insert a property at a dotted path, creating intermediate sections
    /// as needed.
    ///
    /// The first insertion wins: if the path already resolves to a
    /// property this is a no-op and the existing value is kept. The final
    /// path segment overwrites whatever name the property carried.
    pub fn add_property(&mut self, path: &str, mut property: Property) {
        if path.is_empty() || self.has_property(path) {
            return;
        }

        match path.split_once('.') {
            None => {
                property.set_name(path);
                self.properties.insert(path.to_string(), property);
            }
            Some((head, rest)) => {
                if head.is_empty() {
                    return;
                }
                self.ensure_child(head).add_property(rest, property);
            }
        }
    }

    /// Resolve or create a child section at a dotted path.
    ///
    /// Returns the existing node when the name is already taken, so a
    /// second call with the same path hands back the original section. A
    /// multi-segment path materializes a chain of single-level sections;
    /// no section is ever literally named `"B.C"`. Returns `None` only for
    /// an empty path or an empty segment.
    pub fn add_subsection(&mut self, path: &str) -> Option<&mut Section> {
        if path.is_empty() {
            return None;
        }

        match path.split_once('.') {
            None => Some(self.ensure_child(path)),
            Some((head, rest)) => {
                if head.is_empty() {
                    return None;
                }
                self.ensure_child(head).add_subsection(rest)
            }
        }
    }

    fn ensure_child(&mut self, name: &str) -> &mut Section {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| Section::new(name))
    }
}
