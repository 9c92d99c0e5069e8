// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
	Bool,
	SmallInt,
	Int,
	BigInt,
	Float,
	Double,
	Decimal {
		precision: u8,
		scale: u8,
	},
	Varchar(u32),
	Text,
	Bytes,
	Date,
	Timestamp,
	Uuid,
	Json,
	/// An enum declared in the same schema, by name.
	Enum(String),
	/// A driver specific type kept verbatim.
	Raw(String),
}

impl Display for ColumnType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ColumnType::Bool => f.write_str("bool"),
			ColumnType::SmallInt => f.write_str("smallint"),
			ColumnType::Int => f.write_str("int"),
			ColumnType::BigInt => f.write_str("bigint"),
			ColumnType::Float => f.write_str("float"),
			ColumnType::Double => f.write_str("double"),
			ColumnType::Decimal {
				precision,
				scale,
			} => write!(f, "decimal({},{})", precision, scale),
			ColumnType::Varchar(size) => write!(f, "varchar({})", size),
			ColumnType::Text => f.write_str("text"),
			ColumnType::Bytes => f.write_str("bytes"),
			ColumnType::Date => f.write_str("date"),
			ColumnType::Timestamp => f.write_str("timestamp"),
			ColumnType::Uuid => f.write_str("uuid"),
			ColumnType::Json => f.write_str("json"),
			ColumnType::Enum(name) => write!(f, "enum.{}", name),
			ColumnType::Raw(raw) => f.write_str(raw),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub ty: ColumnType,
	pub null: bool,
	pub default: Option<String>,
	pub comment: Option<String>,
}

impl Column {
	pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
		Self {
			name: name.into(),
			ty,
			null: false,
			default: None,
			comment: None,
		}
	}

	pub fn nullable(mut self) -> Self {
		self.null = true;
		self
	}

	pub fn with_default(mut self, default: impl Into<String>) -> Self {
		self.default = Some(default.into());
		self
	}

	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = Some(comment.into());
		self
	}
}
