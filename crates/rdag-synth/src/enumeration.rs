//! Stable operation enumeration.
//!
//! Every representation of the enumeration (C++ header, Java enum, JSON
//! manifest) is rendered from one [`EnumerationTable`], which is built in a
//! single pass over the operation catalog. An entry's ordinal is its catalog
//! position, so appending to the catalog never moves an existing ordinal and
//! two representations cannot disagree.

use rdag_catalog::{OperationCatalog, OperationCategory};
use rdag_core::log_debug;
use rdag_templates::{Unit, UnitKind, render, render_all};
use serde::Serialize;

use crate::EmitOptions;
use crate::error::Result;

/// One enumerated operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumerationEntry {
    pub ordinal: usize,
    pub enum_name: String,
    pub name: String,
    pub category: OperationCategory,
    pub function_tag: Option<String>,
}

/// The ordered enumeration shared by every representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumerationTable {
    operations: Vec<EnumerationEntry>,
}

impl EnumerationTable {
    pub fn build(catalog: &OperationCatalog) -> Self {
        let operations: Vec<EnumerationEntry> = catalog
            .ordinals()
            .map(|(ordinal, spec)| EnumerationEntry {
                ordinal,
                enum_name: spec.enum_name().to_string(),
                name: spec.name().to_string(),
                category: spec.category(),
                function_tag: spec.function_tag().map(str::to_string),
            })
            .collect();
        log_debug!("synth", "Enumerated {} operations", operations.len());
        Self { operations }
    }

    pub fn entries(&self) -> &[EnumerationEntry] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Ordinal bound to `enum_name`, if enumerated.
    pub fn ordinal_of(&self, enum_name: &str) -> Option<usize> {
        self.operations
            .iter()
            .find(|e| e.enum_name == enum_name)
            .map(|e| e.ordinal)
    }

    /// `exprenum.hh`: the `ExprType_t` enum plus the function-tag table.
    pub fn to_cpp(&self, options: &EmitOptions) -> Result<String> {
        let mut entries = Vec::with_capacity(self.len());
        let mut tags = Vec::with_capacity(self.len());
        for entry in &self.operations {
            entries.push(
                Unit::new(UnitKind::ExprEnumHeaderEntry)
                    .with("enumname", entry.enum_name.as_str())
                    .with("ordinal", entry.ordinal.to_string()),
            );
            tags.push(
                Unit::new(UnitKind::ExprEnumHeaderTag)
                    .with("enumname", entry.enum_name.as_str())
                    .with("tag_literal", tag_literal(entry, "nullptr")),
            );
        }
        let unit = Unit::new(UnitKind::ExprEnumHeader)
            .with("namespace", options.namespace.as_str())
            .with("count", self.len().to_string())
            .with("entries", render_all(&entries)?)
            .with("function_tags", render_all(&tags)?);
        Ok(render(&unit)?)
    }

    /// `ExprTypeEnum.java`: the same ordinals as a Java enum.
    pub fn to_java(&self, options: &EmitOptions) -> Result<String> {
        let entries: Vec<Unit> = self
            .operations
            .iter()
            .map(|entry| {
                Unit::new(UnitKind::ExprEnumJavaEntry)
                    .with("enumname", entry.enum_name.as_str())
                    .with("ordinal", entry.ordinal.to_string())
                    .with("tag_literal", tag_literal(entry, "null"))
            })
            .collect();
        let unit = Unit::new(UnitKind::ExprEnumJava)
            .with("package", options.java_package.as_str())
            .with("entries", render_all(&entries)?);
        Ok(render(&unit)?)
    }

    /// JSON manifest: `{ "operations": [ ... ] }`.
    pub fn to_json(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }
}

fn tag_literal(entry: &EnumerationEntry, null: &str) -> String {
    match &entry.function_tag {
        Some(tag) => format!("\"{tag}\""),
        None => null.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdag_catalog::{OperationRecord, reference_operations};
    use serde_json::Value;

    fn table() -> EnumerationTable {
        EnumerationTable::build(&reference_operations().unwrap())
    }

    #[test]
    fn ordinals_follow_catalog_order() {
        let table = table();
        assert_eq!(table.len(), 54);
        assert_eq!(table.ordinal_of("ABS_ENUM"), Some(0));
        assert_eq!(table.ordinal_of("PLUS_ENUM"), Some(29));
        assert_eq!(table.ordinal_of("TAN_ENUM"), Some(36));
        assert_eq!(table.ordinal_of("NORM2_ENUM"), Some(41));
        assert_eq!(table.ordinal_of("SUMROWS_ENUM"), Some(53));
        assert_eq!(table.ordinal_of("NOPE_ENUM"), None);
    }

    #[test]
    fn appending_keeps_existing_ordinals() {
        let catalog = reference_operations().unwrap();
        let before = EnumerationTable::build(&catalog);
        let extended = catalog
            .with_appended(OperationRecord::function("CBRT", "CBRT_ENUM", "cbrt"))
            .unwrap();
        let after = EnumerationTable::build(&extended);

        assert_eq!(&after.entries()[..before.len()], before.entries());
        assert_eq!(after.ordinal_of("CBRT_ENUM"), Some(54));
    }

    #[test]
    fn tan_tag_reaches_every_representation() {
        let table = table();
        let options = EmitOptions::default();
        let cpp = table.to_cpp(&options).unwrap();
        let java = table.to_java(&options).unwrap();
        let json: Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();

        assert!(cpp.contains("  TAN_ENUM = 36,\n"));
        assert!(cpp.contains("  \"tan\", // TAN_ENUM\n"));
        assert!(cpp.contains("  nullptr, // PLUS_ENUM\n"));
        assert!(cpp.contains("ExprType_function_tags[54]"));
        assert!(java.contains("  TAN_ENUM(36, \"tan\"),\n"));
        assert!(java.contains("  PLUS_ENUM(29, null),\n"));
        assert!(java.contains("package com.opengamma.rdag.enums;"));
        assert_eq!(json["operations"][36]["function_tag"], "tan");
        assert_eq!(json["operations"][29]["function_tag"], Value::Null);
    }

    #[test]
    fn representations_agree_on_every_ordinal() {
        let table = table();
        let options = EmitOptions::default();
        let cpp = table.to_cpp(&options).unwrap();
        let java = table.to_java(&options).unwrap();
        let json: Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();

        let manifest = json["operations"].as_array().unwrap();
        assert_eq!(manifest.len(), table.len());
        for item in manifest {
            let name = item["enum_name"].as_str().unwrap();
            let ordinal = item["ordinal"].as_u64().unwrap();
            assert!(cpp.contains(&format!("  {name} = {ordinal},\n")), "{name} in C++");
            assert!(java.contains(&format!("  {name}({ordinal}, ")), "{name} in Java");
        }
    }

    #[test]
    fn json_names_categories_in_snake_case() {
        let json: Value = serde_json::from_str(&table().to_json().unwrap()).unwrap();
        assert_eq!(json["operations"][0]["name"], "ABS");
        assert_eq!(json["operations"][0]["category"], "placeholder_unary");
        assert_eq!(json["operations"][29]["category"], "infix_arithmetic");
    }
}
