// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::Column;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
	/// Name of the owning schema.
	pub schema: String,
	pub name: String,
	pub columns: Vec<Column>,
	/// The query the view is defined as.
	pub definition: String,
	pub comment: Option<String>,
}

impl View {
	pub fn new(schema: impl Into<String>, name: impl Into<String>, definition: impl Into<String>) -> Self {
		Self {
			schema: schema.into(),
			name: name.into(),
			columns: vec![],
			definition: definition.into(),
			comment: None,
		}
	}

	pub fn with_column(mut self, column: Column) -> Self {
		self.columns.push(column);
		self
	}

	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = Some(comment.into());
		self
	}
}
