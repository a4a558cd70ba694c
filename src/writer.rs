use std::io::{self, Write};

use crate::document::Document;
use crate::section::{Property, Section};

/// Write a whole document: root properties first, a separating blank line
/// if there were any, then every section depth-first.
///
/// Nesting is encoded purely in dot-joined headers (`[parent.child]`);
/// there is no indentation and no section-end marker on the wire, which is
/// what lets `open` rebuild the exact same tree.
pub fn write_document<W: Write>(doc: &Document, out: &mut W) -> io::Result<()> {
    let root = doc.root();

    for property in root.properties() {
        write_property(property, out)?;
    }

    if root.property_count() > 0 {
        writeln!(out)?;
    }

    for section in root.subsections() {
        write_section(section, "", out)?;
    }

    Ok(())
}

/// Pre-order: header, own properties, blank line, then children with the
/// extended prefix.
pub fn write_section<W: Write>(section: &Section, prefix: &str, out: &mut W) -> io::Result<()> {
    let qualified = if prefix.is_empty() {
        section.name().to_string()
    } else {
        format!("{}.{}", prefix, section.name())
    };

    writeln!(out, "[{}]", qualified)?;

    for property in section.properties() {
        write_property(property, out)?;
    }

    writeln!(out)?;

    for child in section.subsections() {
        write_section(child, &qualified, out)?;
    }

    Ok(())
}

fn write_property<W: Write>(property: &Property, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} = {}", property.name(), property.value())
}
