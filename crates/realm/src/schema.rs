// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use realmspec_type::Result;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{RealmError, Table, View};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
	pub name: String,
	pub values: Vec<String>,
}

impl Enum {
	pub fn new<I>(name: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self {
			name: name.into(),
			values: values.into_iter().map(Into::into).collect(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
	pub name: String,
	pub tables: Vec<Table>,
	pub views: Vec<View>,
	pub enums: Vec<Enum>,
	pub comment: Option<String>,
}

impl Schema {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			tables: vec![],
			views: vec![],
			enums: vec![],
			comment: None,
		}
	}

	/// Adds a table, taking ownership of it for this schema.
	pub fn with_table(mut self, mut table: Table) -> Self {
		table.schema = self.name.clone();
		self.tables.push(table);
		self
	}

	/// Adds a view, taking ownership of it for this schema.
	pub fn with_view(mut self, mut view: View) -> Self {
		view.schema = self.name.clone();
		self.views.push(view);
		self
	}

	pub fn with_enum(mut self, e: Enum) -> Self {
		self.enums.push(e);
		self
	}

	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = Some(comment.into());
		self
	}

	pub fn table(&self, name: &str) -> Option<&Table> {
		self.tables.iter().find(|t| t.name == name)
	}

	pub fn view(&self, name: &str) -> Option<&View> {
		self.views.iter().find(|v| v.name == name)
	}

	pub fn enum_def(&self, name: &str) -> Option<&Enum> {
		self.enums.iter().find(|e| e.name == name)
	}

	#[instrument(name = "realm::table::get", level = "trace", skip(self), fields(schema = %self.name))]
	pub fn get_table(&self, name: &str) -> Result<&Table> {
		self.table(name).ok_or_else(|| {
			RealmError::TableNotFound {
				schema: self.name.clone(),
				table: name.to_string(),
			}
			.into()
		})
	}
}
