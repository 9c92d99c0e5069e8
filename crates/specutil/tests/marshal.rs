// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Integration tests marshaling realms to JSON and reading them back

use realmspec_realm::{
	Column, ColumnType, ForeignKey, Realm, Schema, Table, TableRef,
	test_utils::{disjoint_realm, orders_table, orders_users_realm, users_table},
};
use realmspec_spec::{ColumnRef, Document, SchemaFragment};
use realmspec_specutil::{JsonEvaluator, JsonMarshaler, Marshaler, Variables, bytes_func, convert_schema, marshal};
use realmspec_type::{DefaultRenderer, DiagnosticRenderer, Result};

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_env_filter("realmspec=trace").with_test_writer().try_init();
}

fn round_trip(realm: &Realm) -> Result<Document> {
	let bytes = marshal(realm, &JsonMarshaler::builder().pretty(true).build(), &convert_schema)?;

	let eval = bytes_func(JsonEvaluator);
	let mut document = Document::default();
	eval(&bytes, &mut document, &Variables::new())?;
	Ok(document)
}

#[test]
fn test_colliding_tables_round_trip() -> Result<()> {
	init_tracing();
	let document = round_trip(&orders_users_realm())?;

	assert_eq!(document.schemas.len(), 2);
	assert!(document.table("s1", "users").is_some());
	assert!(document.table("s2", "users").is_some());

	let orders = document.table("", "orders").expect("orders is unqualified");
	let fk = orders.foreign_key("orders_user_fk").expect("foreign key survives");
	assert_eq!(fk.columns, vec![ColumnRef::local("user_id")]);
	assert_eq!(fk.ref_columns, vec![ColumnRef::qualified("s2", "users", "id")]);
	assert_eq!(fk.on_delete.as_deref(), Some("CASCADE"));
	Ok(())
}

#[test]
fn test_disjoint_tables_round_trip() -> Result<()> {
	init_tracing();
	let document = round_trip(&disjoint_realm())?;

	assert!(document.tables.iter().all(|t| t.qualifier.is_empty()));
	let orders = document.table("", "orders").expect("orders is unqualified");
	assert_eq!(orders.foreign_keys[0].ref_columns, vec![ColumnRef::external("users", "id")]);
	Ok(())
}

#[test]
fn test_literal_template_in_comment_round_trips() -> Result<()> {
	let realm = Realm::new()
		.with_schema(
			Schema::new("s1")
				.with_comment("price in ${var.currency}")
				.with_table(users_table("s1"))
				.with_table(orders_table("s1", "s2")),
		)
		.with_schema(Schema::new("s2").with_table(users_table("s2")));

	let document = round_trip(&realm)?;

	assert_eq!(document.schemas[0].attrs[0].as_str(), Some("price in ${var.currency}"));
	Ok(())
}

#[test]
fn test_output_is_deterministic() -> Result<()> {
	let realm = orders_users_realm();
	let marshaler = JsonMarshaler::new();

	let first = marshal(&realm, &marshaler, &convert_schema)?;
	let second = marshal(&realm, &marshaler, &convert_schema)?;

	assert_eq!(first, second);
	Ok(())
}

#[test]
fn test_reference_to_table_outside_realm() {
	init_tracing();
	// s1.orders points at s3.users, which no schema of the realm owns.
	let realm = Realm::new()
		.with_schema(Schema::new("s1").with_table(users_table("s1")).with_table(orders_table("s1", "s3")))
		.with_schema(Schema::new("s2").with_table(users_table("s2")));

	let err = marshal(&realm, &JsonMarshaler::new(), &convert_schema).unwrap_err();

	assert_eq!(err.code(), "QUALIFY_002");
	let rendered = DefaultRenderer.render(err.diagnostic());
	assert!(rendered.starts_with("error[QUALIFY_002]: missing reference for column `$table.users.$column.id`"));
}

struct UnreachableMarshaler;

impl Marshaler for UnreachableMarshaler {
	fn marshal_spec(&self, _: &Document) -> Result<Vec<u8>> {
		panic!("a failed document must not be marshaled");
	}
}

#[test]
fn test_foreign_key_symbol_missing_from_realm() {
	let realm = orders_users_realm();
	let renaming = |schema: &Schema| -> Result<SchemaFragment> {
		let mut fragment = convert_schema(schema)?;
		for table in &mut fragment.tables {
			for fk in &mut table.foreign_keys {
				fk.symbol = "orders_account_fk".to_string();
			}
		}
		Ok(fragment)
	};

	let err = marshal(&realm, &UnreachableMarshaler, &renaming).unwrap_err();

	assert_eq!(err.code(), "REALM_003");
	assert_eq!(err.to_string(), "foreign key `s1`.`orders`.`orders_account_fk` was not found in realm");
}

#[test]
fn test_mismatched_foreign_key_names_the_schema() {
	let realm = Realm::new().with_schema(Schema::new("s1").with_table(
		Table::new("s1", "orders").with_column(Column::new("user_id", ColumnType::BigInt)).with_foreign_key(
			ForeignKey::new("orders_user_fk", ["user_id"], TableRef::new("s1", "users"), ["id", "tenant_id"]),
		),
	));

	let err = marshal(&realm, &JsonMarshaler::new(), &convert_schema).unwrap_err();

	assert_eq!(err.code(), "MARSHAL_001");
	let rendered = DefaultRenderer.render(err.diagnostic());
	assert!(rendered.contains("CONVERT_001"), "rendered: {}", rendered);
}

#[test]
fn test_variables_are_substituted_before_decoding() -> Result<()> {
	let eval = bytes_func(JsonEvaluator);
	let mut input = Variables::new();
	input.insert("schema".to_string(), serde_json::json!("$schema.public"));
	let mut document = Document::default();

	eval(
		br#"{"schema": [{"name": "public"}], "table": [{"name": "users", "schema": "${var.schema}"}]}"#,
		&mut document,
		&input,
	)?;

	let users = document.table("", "users").expect("users is decoded");
	assert_eq!(users.schema.as_ref().map(|r| r.as_str()), Some("$schema.public"));
	Ok(())
}
