// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use realmspec_type::Result;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{RealmError, Schema, Table, TableRef};

/// An ordered collection of schemas. The realm is the source of truth for
/// table and column identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Realm {
	pub schemas: Vec<Schema>,
}

impl Realm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_schema(mut self, schema: Schema) -> Self {
		self.schemas.push(schema);
		self
	}

	pub fn schema(&self, name: &str) -> Option<&Schema> {
		self.schemas.iter().find(|s| s.name == name)
	}

	#[instrument(name = "realm::schema::get", level = "trace", skip(self))]
	pub fn get_schema(&self, name: &str) -> Result<&Schema> {
		self.schema(name).ok_or_else(|| {
			RealmError::SchemaNotFound {
				schema: name.to_string(),
			}
			.into()
		})
	}

	pub fn table(&self, table: &TableRef) -> Option<&Table> {
		self.schema(&table.schema).and_then(|s| s.table(&table.name))
	}

	pub fn get_table(&self, table: &TableRef) -> Result<&Table> {
		self.get_schema(&table.schema)?.get_table(&table.name)
	}
}
