// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use realmspec_realm::{Realm, Schema, Table, View};
use realmspec_spec::{Document, SchemaFragment};
use realmspec_type::{Error, IntoDiagnostic, Result, return_error};
use tracing::{debug, instrument};

use crate::{MarshalError, qualify_references, qualify_tables, qualify_views};

/// Converts one schema of the realm model into its spec objects.
pub trait SchemaConverter {
	fn convert(&self, schema: &Schema) -> Result<SchemaFragment>;
}

impl<F> SchemaConverter for F
where
	F: Fn(&Schema) -> Result<SchemaFragment>,
{
	fn convert(&self, schema: &Schema) -> Result<SchemaFragment> {
		self(schema)
	}
}

/// Serializes a spec document.
pub trait Marshaler {
	fn marshal_spec(&self, document: &Document) -> Result<Vec<u8>>;
}

/// What can be handed to [`marshal`].
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
	Schema(&'a Schema),
	Realm(&'a Realm),
	Table(&'a Table),
	View(&'a View),
}

impl<'a> From<&'a Schema> for Subject<'a> {
	fn from(schema: &'a Schema) -> Self {
		Subject::Schema(schema)
	}
}

impl<'a> From<&'a Realm> for Subject<'a> {
	fn from(realm: &'a Realm) -> Self {
		Subject::Realm(realm)
	}
}

impl<'a> From<&'a Table> for Subject<'a> {
	fn from(table: &'a Table) -> Self {
		Subject::Table(table)
	}
}

impl<'a> From<&'a View> for Subject<'a> {
	fn from(view: &'a View) -> Self {
		Subject::View(view)
	}
}

fn convert(converter: &impl SchemaConverter, schema: &Schema) -> Result<SchemaFragment> {
	converter.convert(schema).map_err(|err| {
		let diagnostic = MarshalError::ConversionFailed {
			schema: schema.name.clone(),
		}
		.into_diagnostic()
		.with_cause(err.into_diagnostic());
		Error::from(diagnostic)
	})
}

/// Assembles the spec document for a schema or a realm.
///
/// A single schema is converted as is. A realm is converted schema by schema
/// in realm order, then tables and views with colliding names are qualified
/// and foreign key references are rewritten to match.
pub fn build_document<'a>(subject: impl Into<Subject<'a>>, converter: &impl SchemaConverter) -> Result<Document> {
	match subject.into() {
		Subject::Schema(schema) => Ok(Document::from(convert(converter, schema)?)),
		Subject::Realm(realm) => {
			let mut document = Document::default();
			for schema in &realm.schemas {
				document.append(convert(converter, schema)?);
			}
			debug!(
				schemas = document.schemas.len(),
				tables = document.tables.len(),
				views = document.views.len(),
				"converted realm"
			);

			qualify_tables(&mut document.tables)?;
			qualify_views(&mut document.views)?;
			qualify_references(&mut document.tables, realm)?;
			Ok(document)
		}
		Subject::Table(table) => return_error!(MarshalError::UnsupportedSubject {
			kind: "table",
			name: table.table_ref().to_string(),
		}),
		Subject::View(view) => return_error!(MarshalError::UnsupportedSubject {
			kind: "view",
			name: format!("{}.{}", view.schema, view.name),
		}),
	}
}

/// Marshals a schema or a realm into a spec document using `marshaler`.
///
/// Nothing is handed to the marshaler unless the whole document was built;
/// its result is returned as is.
#[instrument(name = "specutil::marshal", level = "debug", skip_all)]
pub fn marshal<'a>(
	subject: impl Into<Subject<'a>>,
	marshaler: &impl Marshaler,
	converter: &impl SchemaConverter,
) -> Result<Vec<u8>> {
	let document = build_document(subject, converter)?;
	marshaler.marshal_spec(&document)
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use realmspec_realm::test_utils::{orders_users_realm, users_table};
	use realmspec_spec::{ColumnRef, SchemaSpec};

	use super::*;
	use crate::{ConvertError, convert_schema};

	struct CountingMarshaler {
		calls: Cell<usize>,
	}

	impl CountingMarshaler {
		fn new() -> Self {
			Self {
				calls: Cell::new(0),
			}
		}
	}

	impl Marshaler for CountingMarshaler {
		fn marshal_spec(&self, document: &Document) -> Result<Vec<u8>> {
			self.calls.set(self.calls.get() + 1);
			Ok(format!("{} tables", document.tables.len()).into_bytes())
		}
	}

	#[test]
	fn test_single_schema_is_not_qualified() {
		let schema = Schema::new("s1").with_table(users_table("s1"));

		let document = build_document(&schema, &convert_schema).unwrap();

		assert_eq!(document.schemas, vec![SchemaSpec::new("s1")]);
		assert_eq!(document.tables.len(), 1);
		assert_eq!(document.tables[0].qualifier, "");
	}

	#[test]
	fn test_single_schema_keeps_cross_schema_reference_unqualified() {
		let realm = orders_users_realm();

		let document = build_document(&realm.schemas[0], &convert_schema).unwrap();

		let orders = document.table("", "orders").unwrap();
		assert_eq!(orders.foreign_keys[0].ref_columns, vec![ColumnRef::external("users", "id")]);
	}

	#[test]
	fn test_realm_is_qualified() {
		let realm = orders_users_realm();

		let document = build_document(&realm, &convert_schema).unwrap();

		let names: Vec<(&str, &str)> =
			document.tables.iter().map(|t| (t.qualifier.as_str(), t.name.as_str())).collect();
		assert_eq!(names, vec![("s1", "users"), ("", "orders"), ("s2", "users")]);

		let orders = document.table("", "orders").unwrap();
		assert_eq!(orders.foreign_keys[0].ref_columns, vec![ColumnRef::qualified("s2", "users", "id")]);
	}

	#[test]
	fn test_realm_views_are_qualified() {
		let realm = Realm::new()
			.with_schema(Schema::new("s1").with_view(View::new("s1", "active_users", "SELECT 1")))
			.with_schema(
				Schema::new("s2")
					.with_view(View::new("s2", "active_users", "SELECT 2"))
					.with_view(View::new("s2", "recent_orders", "SELECT 3")),
			);

		let document = build_document(&realm, &convert_schema).unwrap();

		assert_eq!(document.view("s1", "active_users").unwrap().definition, "SELECT 1");
		assert_eq!(document.view("s2", "active_users").unwrap().definition, "SELECT 2");
		assert!(document.view("", "active_users").is_none());
		assert_eq!(document.view("", "recent_orders").unwrap().definition, "SELECT 3");
	}

	#[test]
	fn test_marshal_returns_marshaler_output() {
		let realm = orders_users_realm();
		let marshaler = CountingMarshaler::new();

		let bytes = marshal(&realm, &marshaler, &convert_schema).unwrap();

		assert_eq!(bytes, b"3 tables".to_vec());
		assert_eq!(marshaler.calls.get(), 1);
	}

	#[test]
	fn test_conversion_failure_is_wrapped() {
		let realm = orders_users_realm();
		let marshaler = CountingMarshaler::new();
		let failing = |schema: &Schema| -> Result<SchemaFragment> {
			if schema.name == "s2" {
				return Err(ConvertError::ForeignKeyColumnMismatch {
					schema: "s2".to_string(),
					table: "users".to_string(),
					symbol: "fk".to_string(),
					columns: 1,
					ref_columns: 2,
				}
				.into());
			}
			convert_schema(schema)
		};

		let err = marshal(&realm, &marshaler, &failing).unwrap_err();

		assert_eq!(err.code(), "MARSHAL_001");
		assert_eq!(err.diagnostic().cause.as_ref().unwrap().code, "CONVERT_001");
		assert!(err.to_string().starts_with("failed converting schema `s2` to spec: "));
		assert_eq!(marshaler.calls.get(), 0);
	}

	#[test]
	fn test_single_schema_conversion_failure_is_wrapped() {
		let schema = Schema::new("s1");
		let failing = |_: &Schema| -> Result<SchemaFragment> {
			Err(MarshalError::Encode {
				reason: "boom".to_string(),
			}
			.into())
		};

		let err = build_document(&schema, &failing).unwrap_err();

		assert_eq!(err.code(), "MARSHAL_001");
	}

	#[test]
	fn test_unsupported_subjects() {
		let realm = orders_users_realm();
		let marshaler = CountingMarshaler::new();

		let err = marshal(&realm.schemas[0].tables[1], &marshaler, &convert_schema).unwrap_err();
		assert_eq!(err.code(), "MARSHAL_002");
		assert_eq!(err.to_string(), "failed marshaling spec: table `s1.orders` is not supported");

		let view = View::new("s1", "v", "SELECT 1");
		let err = marshal(&view, &marshaler, &convert_schema).unwrap_err();
		assert_eq!(err.code(), "MARSHAL_002");

		assert_eq!(marshaler.calls.get(), 0);
	}

	#[test]
	fn test_qualification_failure_aborts_marshal() {
		let realm = orders_users_realm();
		let marshaler = CountingMarshaler::new();
		// Emits `users` twice for s1, which qualification turns into two
		// `(s1, users)` specs.
		let duplicating = |schema: &Schema| -> Result<SchemaFragment> {
			let mut fragment = convert_schema(schema)?;
			if schema.name == "s1" {
				let copy = fragment.tables[0].clone();
				fragment.tables.push(copy);
			}
			Ok(fragment)
		};

		let err = marshal(&realm, &marshaler, &duplicating).unwrap_err();

		assert_eq!(err.code(), "QUALIFY_001");
		assert_eq!(marshaler.calls.get(), 0);
	}
}
