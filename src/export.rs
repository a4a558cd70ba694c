// License: MIT

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::document::Document;
use crate::error::StrataError;
use crate::section::Section;
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Unknown => serializer.serialize_none(),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
        }
    }
}

/// A section serializes as a flat ordered map: property entries first,
/// child sections after, each child as a nested map.
///
/// A property and a child section are allowed to share a name inside one
/// section; in the flat map the section entry wins.
impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.property_count() + self.subsection_count();
        let mut map = serializer.serialize_map(Some(len))?;

        for property in self.properties() {
            map.serialize_entry(property.name(), property.value())?;
        }

        for child in self.subsections() {
            map.serialize_entry(child.name(), child)?;
        }

        map.end()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root().serialize(serializer)
    }
}

/// Export a document to pretty-printed JSON.
///
/// Typed values map directly; `Unknown` becomes JSON `null`. Section
/// nesting becomes JSON object nesting, so the dotted headers of the wire
/// format disappear in favor of real structure.
///
/// # Examples
/// ```no_run
/// use strata_cfg::{Document, export};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut config = Document::new();
/// config.open("config.cfg")?;
/// let json = export::export_document_to_json(&config)?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, StrataError> {
    serde_json::to_string_pretty(doc).map_err(|e| StrataError::TypeError {
        message: format!("Failed to serialize document: {}", e),
        hint: None,
        code: Some(500),
    })
}

/// Export a configuration file directly to JSON.
///
/// Convenience function that opens, parses, and exports in one call.
///
/// # Errors
/// Returns error if the file can't be read.
pub fn export_file(path: &str) -> Result<String, StrataError> {
    let mut doc = Document::new();
    doc.open(path)?;
    export_document_to_json(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_nested_document() {
        let input = "\
title = demo
count = 3

[General]
scale = 1.5

[General.Editor]
dark = true
";
        let (doc, _) = Document::from_str(input);
        let json_output = export_document_to_json(&doc).expect("Failed to export document");

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["title"], "demo");
        assert_eq!(v["count"], 3);
        assert_eq!(v["General"]["scale"], 1.5);
        assert_eq!(v["General"]["Editor"]["dark"], true);
    }

    #[test]
    fn test_export_unknown_is_null() {
        let (doc, _) = Document::from_str("empty =\n");
        let json_output = export_document_to_json(&doc).unwrap();

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert!(v["empty"].is_null());
    }

    #[test]
    fn test_export_preserves_insertion_order() {
        let (doc, _) = Document::from_str("z = 1\na = 2\n");
        let json_output = export_document_to_json(&doc).unwrap();

        let z = json_output.find("\"z\"").unwrap();
        let a = json_output.find("\"a\"").unwrap();
        assert!(z < a);
    }
}
