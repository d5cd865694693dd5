//! Nested JSON rendering.
//!
//! Each quadrant carries its theme and the root record; every record holds
//! its children in ascending order. Record fields use the CSV column names,
//! followed by the octet's catalog code and description.

use super::{ExportOptions, GEOMETRY, HIERARCHY, LOGIC, TITLE};
use crate::catalog;
use crate::classify::Record;
use crate::core::octet::Octet;
use crate::error::{Result, TaxonomyError};
use crate::tree::Tree;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Document<'a> {
    title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated: Option<&'a str>,
    geometry: &'static str,
    hierarchy: &'static str,
    logic: &'static str,
    quadrants: Vec<Quadrant<'a>>,
}

#[derive(Serialize)]
struct Quadrant<'a> {
    index: usize,
    theme: &'static str,
    root: Node<'a>,
}

#[derive(Serialize)]
struct Node<'a> {
    #[serde(flatten)]
    record: &'a Record,
    code: &'static str,
    describe: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node<'a>>,
}

fn node<'a>(tree: &'a Tree, record: &'a Record) -> Node<'a> {
    let code = catalog::code(record.value);
    Node {
        record,
        code: code.name,
        describe: code.describe,
        children: tree
            .children(record.value)
            .map(|child| node(tree, child))
            .collect(),
    }
}

fn document<'a>(tree: &'a Tree, options: &'a ExportOptions) -> Document<'a> {
    let quadrants = tree
        .roots()
        .enumerate()
        .map(|(i, root)| Quadrant {
            index: i + 1,
            theme: catalog::quadrant(root.root).name,
            root: node(tree, root),
        })
        .collect();
    Document {
        title: TITLE,
        generated: options.generated.as_deref(),
        geometry: GEOMETRY,
        hierarchy: HIERARCHY,
        logic: LOGIC,
        quadrants,
    }
}

/// Writes the forest as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`crate::TaxonomyError::Json`] if serialization fails or
/// [`crate::TaxonomyError::Io`] if writing fails.
pub fn write<W: Write>(tree: &Tree, options: &ExportOptions, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &document(tree, options)).map_err(|e| {
        if e.is_io() {
            TaxonomyError::Io(e.into())
        } else {
            TaxonomyError::Json(e)
        }
    })?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Serializes a single octet's subtree to a JSON value.
///
/// # Errors
///
/// Returns [`crate::TaxonomyError::Json`] if serialization fails.
pub fn subtree_value(tree: &Tree, head: Octet) -> Result<serde_json::Value> {
    let value = match tree.record(head) {
        Some(record) => serde_json::to_value(node(tree, record))?,
        None => serde_json::Value::Null,
    };
    Ok(value)
}
