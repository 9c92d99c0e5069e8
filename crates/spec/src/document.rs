// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Attr, ColumnRef, Ref};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSpec {
	pub name: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub attrs: Vec<Attr>,
}

impl SchemaSpec {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attrs: vec![],
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
	pub name: String,
	#[serde(default)]
	pub null: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub attrs: Vec<Attr>,
}

impl ColumnSpec {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			null: false,
			default: None,
			attrs: vec![],
		}
	}

	pub fn attr(&self, key: &str) -> Option<&Attr> {
		self.attrs.iter().find(|a| a.key == key)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKeySpec {
	pub columns: Vec<ColumnRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeySpec {
	pub symbol: String,
	pub columns: Vec<ColumnRef>,
	pub ref_columns: Vec<ColumnRef>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub on_update: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub on_delete: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
	pub name: String,
	/// Empty unless `name` collides with a table of another schema, in which
	/// case it holds the owning schema name.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub qualifier: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub schema: Option<Ref>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub columns: Vec<ColumnSpec>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub primary_key: Option<PrimaryKeySpec>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub foreign_keys: Vec<ForeignKeySpec>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub attrs: Vec<Attr>,
}

impl TableSpec {
	pub fn new(name: impl Into<String>, schema: Ref) -> Self {
		Self {
			name: name.into(),
			qualifier: String::new(),
			schema: Some(schema),
			columns: vec![],
			primary_key: None,
			foreign_keys: vec![],
			attrs: vec![],
		}
	}

	pub fn foreign_key(&self, symbol: &str) -> Option<&ForeignKeySpec> {
		self.foreign_keys.iter().find(|fk| fk.symbol == symbol)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSpec {
	pub name: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub qualifier: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub schema: Option<Ref>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub columns: Vec<ColumnSpec>,
	#[serde(rename = "as")]
	pub definition: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub attrs: Vec<Attr>,
}

impl ViewSpec {
	pub fn new(name: impl Into<String>, schema: Ref, definition: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			qualifier: String::new(),
			schema: Some(schema),
			columns: vec![],
			definition: definition.into(),
			attrs: vec![],
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumSpec {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub schema: Option<Ref>,
	pub values: Vec<String>,
}

/// The spec objects a schema converter produces for one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFragment {
	pub schema: SchemaSpec,
	pub tables: Vec<TableSpec>,
	pub views: Vec<ViewSpec>,
	pub enums: Vec<EnumSpec>,
}

impl SchemaFragment {
	pub fn new(schema: SchemaSpec) -> Self {
		Self {
			schema,
			tables: vec![],
			views: vec![],
			enums: vec![],
		}
	}
}

/// The flat document handed to a marshaler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
	#[serde(rename = "table", default, skip_serializing_if = "Vec::is_empty")]
	pub tables: Vec<TableSpec>,
	#[serde(rename = "view", default, skip_serializing_if = "Vec::is_empty")]
	pub views: Vec<ViewSpec>,
	#[serde(rename = "schema", default, skip_serializing_if = "Vec::is_empty")]
	pub schemas: Vec<SchemaSpec>,
	#[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
	pub enums: Vec<EnumSpec>,
}

impl Document {
	/// Finds a table by `(qualifier, name)`; pass an empty qualifier for
	/// unqualified tables.
	pub fn table(&self, qualifier: &str, name: &str) -> Option<&TableSpec> {
		self.tables.iter().find(|t| t.qualifier == qualifier && t.name == name)
	}

	pub fn view(&self, qualifier: &str, name: &str) -> Option<&ViewSpec> {
		self.views.iter().find(|v| v.qualifier == qualifier && v.name == name)
	}

	pub fn append(&mut self, fragment: SchemaFragment) {
		self.tables.extend(fragment.tables);
		self.views.extend(fragment.views);
		self.schemas.push(fragment.schema);
		self.enums.extend(fragment.enums);
	}
}

impl From<SchemaFragment> for Document {
	fn from(fragment: SchemaFragment) -> Self {
		let mut document = Document::default();
		document.append(fragment);
		document
	}
}
