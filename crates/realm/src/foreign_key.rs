// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifies a table by its owning schema and its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
	pub schema: String,
	pub name: String,
}

impl TableRef {
	pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			schema: schema.into(),
			name: name.into(),
		}
	}
}

impl Display for TableRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}", self.schema, self.name)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceOption {
	NoAction,
	Restrict,
	Cascade,
	SetNull,
	SetDefault,
}

impl Display for ReferenceOption {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ReferenceOption::NoAction => f.write_str("NO_ACTION"),
			ReferenceOption::Restrict => f.write_str("RESTRICT"),
			ReferenceOption::Cascade => f.write_str("CASCADE"),
			ReferenceOption::SetNull => f.write_str("SET_NULL"),
			ReferenceOption::SetDefault => f.write_str("SET_DEFAULT"),
		}
	}
}

/// A foreign key constraint. `columns` and `ref_columns` are positional:
/// `columns[i]` references `ref_columns[i]` on `ref_table`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
	pub symbol: String,
	pub columns: Vec<String>,
	pub ref_table: TableRef,
	pub ref_columns: Vec<String>,
	pub on_update: Option<ReferenceOption>,
	pub on_delete: Option<ReferenceOption>,
}

impl ForeignKey {
	pub fn new<C, R>(symbol: impl Into<String>, columns: C, ref_table: TableRef, ref_columns: R) -> Self
	where
		C: IntoIterator,
		C::Item: Into<String>,
		R: IntoIterator,
		R::Item: Into<String>,
	{
		Self {
			symbol: symbol.into(),
			columns: columns.into_iter().map(Into::into).collect(),
			ref_table,
			ref_columns: ref_columns.into_iter().map(Into::into).collect(),
			on_update: None,
			on_delete: None,
		}
	}

	pub fn on_update(mut self, option: ReferenceOption) -> Self {
		self.on_update = Some(option);
		self
	}

	pub fn on_delete(mut self, option: ReferenceOption) -> Self {
		self.on_delete = Some(option);
		self
	}
}
