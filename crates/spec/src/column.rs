// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use realmspec_type::{Error, Result, return_error};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{PathIndex, Ref, SpecError};

/// A reference to a column from inside a spec document.
///
/// Resolution works on this structured form; the textual encoding
/// (`$column.id`, `$table.users.$column.id`, `$table.s2.users.$column.id`)
/// only appears when the document is serialized or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnRef {
	/// A column of the table the reference appears in.
	Local {
		column: String,
	},
	/// A column of another, unqualified table.
	External {
		table: String,
		column: String,
	},
	/// A column of a table whose name collides across schemas.
	Qualified {
		qualifier: String,
		table: String,
		column: String,
	},
}

impl ColumnRef {
	pub fn local(column: impl Into<String>) -> Self {
		ColumnRef::Local {
			column: column.into(),
		}
	}

	pub fn external(table: impl Into<String>, column: impl Into<String>) -> Self {
		ColumnRef::External {
			table: table.into(),
			column: column.into(),
		}
	}

	pub fn qualified(qualifier: impl Into<String>, table: impl Into<String>, column: impl Into<String>) -> Self {
		ColumnRef::Qualified {
			qualifier: qualifier.into(),
			table: table.into(),
			column: column.into(),
		}
	}

	pub fn column(&self) -> &str {
		match self {
			ColumnRef::Local {
				column,
			}
			| ColumnRef::External {
				column,
				..
			}
			| ColumnRef::Qualified {
				column,
				..
			} => column,
		}
	}

	pub fn to_ref(&self) -> Ref {
		match self {
			ColumnRef::Local {
				column,
			} => Ref::build(&[PathIndex::new("column", [column])]),
			ColumnRef::External {
				table,
				column,
			} => Ref::build(&[PathIndex::new("table", [table]), PathIndex::new("column", [column])]),
			ColumnRef::Qualified {
				qualifier,
				table,
				column,
			} => Ref::build(&[
				PathIndex::new("table", [qualifier, table]),
				PathIndex::new("column", [column]),
			]),
		}
	}

	pub fn from_ref(r: &Ref) -> Result<Self> {
		let path = r.path()?;
		let column_ref = match path.as_slice() {
			[column] if column.t == "column" => match column.v.as_slice() {
				[c] => Some(ColumnRef::local(c)),
				_ => None,
			},
			[table, column] if table.t == "table" && column.t == "column" => {
				match (table.v.as_slice(), column.v.as_slice()) {
					([t], [c]) => Some(ColumnRef::external(t, c)),
					([q, t], [c]) => Some(ColumnRef::qualified(q, t, c)),
					_ => None,
				}
			}
			_ => None,
		};

		match column_ref {
			Some(column_ref) => Ok(column_ref),
			None => return_error!(SpecError::MalformedColumnRef {
				reference: r.to_string(),
			}),
		}
	}
}

impl Display for ColumnRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.to_ref(), f)
	}
}

impl FromStr for ColumnRef {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		ColumnRef::from_ref(&Ref::new(s))
	}
}

impl Serialize for ColumnRef {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for ColumnRef {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		text.parse().map_err(de::Error::custom)
	}
}
