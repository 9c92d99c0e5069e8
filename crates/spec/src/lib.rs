// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The flattened, serializable side of the model. Spec records refer to each
//! other through variable references (`$schema.public`, `$table.users.$column.id`)
//! instead of by identity.

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use attr::{Attr, AttrValue, var_attr};
pub use column::ColumnRef;
pub use document::{
	ColumnSpec, Document, EnumSpec, ForeignKeySpec, PrimaryKeySpec, SchemaFragment, SchemaSpec, TableSpec, ViewSpec,
};
pub use error::SpecError;
pub use reference::{PathIndex, Ref, schema_name};

mod attr;
mod column;
mod document;
mod error;
mod reference;
