// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Column, ForeignKey, TableRef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKey {
	pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
	/// Name of the owning schema.
	pub schema: String,
	pub name: String,
	pub columns: Vec<Column>,
	pub primary_key: Option<PrimaryKey>,
	pub foreign_keys: Vec<ForeignKey>,
	pub comment: Option<String>,
}

impl Table {
	pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			schema: schema.into(),
			name: name.into(),
			columns: vec![],
			primary_key: None,
			foreign_keys: vec![],
			comment: None,
		}
	}

	pub fn with_column(mut self, column: Column) -> Self {
		self.columns.push(column);
		self
	}

	pub fn with_primary_key<I>(mut self, columns: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.primary_key = Some(PrimaryKey {
			columns: columns.into_iter().map(Into::into).collect(),
		});
		self
	}

	pub fn with_foreign_key(mut self, foreign_key: ForeignKey) -> Self {
		self.foreign_keys.push(foreign_key);
		self
	}

	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = Some(comment.into());
		self
	}

	pub fn table_ref(&self) -> TableRef {
		TableRef::new(&self.schema, &self.name)
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn foreign_key(&self, symbol: &str) -> Option<&ForeignKey> {
		self.foreign_keys.iter().find(|fk| fk.symbol == symbol)
	}
}
