// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The authoritative, hierarchical database model: a realm of schemas, each
//! owning tables and views. Object identity is by name within the owning
//! scope.

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use column::{Column, ColumnType};
pub use error::RealmError;
pub use foreign_key::{ForeignKey, ReferenceOption, TableRef};
pub use realm::Realm;
pub use schema::{Enum, Schema};
pub use table::{PrimaryKey, Table};
pub use view::View;

mod column;
mod error;
mod foreign_key;
mod realm;
mod schema;
mod table;
pub mod test_utils;
mod view;
