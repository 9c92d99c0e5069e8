// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use realmspec_realm::{Column, ColumnType, ForeignKey, Schema, Table, View};
use realmspec_spec::{
	Attr, ColumnRef, ColumnSpec, EnumSpec, ForeignKeySpec, PathIndex, PrimaryKeySpec, Ref, SchemaFragment, SchemaSpec,
	TableSpec, ViewSpec, var_attr,
};
use realmspec_type::{Result, return_error};
use tracing::{instrument, trace};

use crate::ConvertError;

/// A driver independent [`SchemaConverter`](crate::SchemaConverter).
///
/// Foreign keys referencing another table are emitted as unqualified
/// external references; [`qualify_references`](crate::qualify_references)
/// rewrites them once the whole realm is known.
#[instrument(name = "specutil::convert_schema", level = "trace", skip_all, fields(schema = %schema.name))]
pub fn convert_schema(schema: &Schema) -> Result<SchemaFragment> {
	let schema_ref = Ref::schema(&schema.name);

	let mut spec = SchemaSpec::new(&schema.name);
	if let Some(comment) = &schema.comment {
		spec.attrs.push(Attr::string("comment", comment));
	}

	let mut fragment = SchemaFragment::new(spec);
	for table in &schema.tables {
		fragment.tables.push(convert_table(schema, table, &schema_ref)?);
	}
	for view in &schema.views {
		fragment.views.push(convert_view(schema, view, &schema_ref)?);
	}
	for e in &schema.enums {
		fragment.enums.push(EnumSpec {
			name: e.name.clone(),
			schema: Some(schema_ref.clone()),
			values: e.values.clone(),
		});
	}
	Ok(fragment)
}

fn convert_table(schema: &Schema, table: &Table, schema_ref: &Ref) -> Result<TableSpec> {
	let mut spec = TableSpec::new(&table.name, schema_ref.clone());
	spec.columns = table.columns.iter().map(|c| convert_column(schema, &table.name, c)).collect::<Result<_>>()?;
	spec.primary_key = table.primary_key.as_ref().map(|pk| PrimaryKeySpec {
		columns: pk.columns.iter().map(ColumnRef::local).collect(),
	});
	for fk in &table.foreign_keys {
		spec.foreign_keys.push(convert_foreign_key(schema, table, fk)?);
	}
	if let Some(comment) = &table.comment {
		spec.attrs.push(Attr::string("comment", comment));
	}
	Ok(spec)
}

fn convert_view(schema: &Schema, view: &View, schema_ref: &Ref) -> Result<ViewSpec> {
	let mut spec = ViewSpec::new(&view.name, schema_ref.clone(), &view.definition);
	spec.columns = view.columns.iter().map(|c| convert_column(schema, &view.name, c)).collect::<Result<_>>()?;
	if let Some(comment) = &view.comment {
		spec.attrs.push(Attr::string("comment", comment));
	}
	Ok(spec)
}

/// Enum columns reference the enum spec of their schema, which must declare it.
fn convert_column(schema: &Schema, owner: &str, column: &Column) -> Result<ColumnSpec> {
	let mut spec = ColumnSpec::new(&column.name);
	spec.null = column.null;
	spec.default = column.default.clone();
	spec.attrs.push(match &column.ty {
		ColumnType::Enum(name) => {
			if schema.enum_def(name).is_none() {
				return_error!(ConvertError::UndeclaredEnum {
					schema: schema.name.clone(),
					owner: owner.to_string(),
					column: column.name.clone(),
					ty: column.ty.to_string(),
				});
			}
			var_attr("type", Ref::build(&[PathIndex::new("enum", [name])]).to_string())
		}
		ty => Attr::string("type", ty.to_string()),
	});
	if let Some(comment) = &column.comment {
		spec.attrs.push(Attr::string("comment", comment));
	}
	Ok(spec)
}

fn convert_foreign_key(schema: &Schema, table: &Table, fk: &ForeignKey) -> Result<ForeignKeySpec> {
	if fk.columns.len() != fk.ref_columns.len() {
		return_error!(ConvertError::ForeignKeyColumnMismatch {
			schema: schema.name.clone(),
			table: table.name.clone(),
			symbol: fk.symbol.clone(),
			columns: fk.columns.len(),
			ref_columns: fk.ref_columns.len(),
		});
	}

	let self_reference = fk.ref_table.schema == schema.name && fk.ref_table.name == table.name;
	let ref_columns = fk
		.ref_columns
		.iter()
		.map(|c| {
			if self_reference {
				ColumnRef::local(c)
			} else {
				ColumnRef::external(&fk.ref_table.name, c)
			}
		})
		.collect();
	trace!(symbol = %fk.symbol, target = %fk.ref_table, "converted foreign key");

	Ok(ForeignKeySpec {
		symbol: fk.symbol.clone(),
		columns: fk.columns.iter().map(ColumnRef::local).collect(),
		ref_columns,
		on_update: fk.on_update.map(|o| o.to_string()),
		on_delete: fk.on_delete.map(|o| o.to_string()),
	})
}

#[cfg(test)]
mod tests {
	use realmspec_realm::{Enum, ReferenceOption, TableRef, test_utils::orders_table};
	use realmspec_spec::AttrValue;

	use super::*;

	#[test]
	fn test_tables_reference_their_schema() {
		let schema = Schema::new("s1").with_table(orders_table("s1", "s2"));

		let fragment = convert_schema(&schema).unwrap();

		assert_eq!(fragment.schema, SchemaSpec::new("s1"));
		assert_eq!(fragment.tables[0].schema, Some(Ref::schema("s1")));
		assert_eq!(fragment.tables[0].qualifier, "");
	}

	#[test]
	fn test_foreign_keys() {
		let schema = Schema::new("s1").with_table(orders_table("s1", "s2"));

		let fragment = convert_schema(&schema).unwrap();
		let fk = fragment.tables[0].foreign_key("orders_user_fk").unwrap();

		assert_eq!(fk.columns, vec![ColumnRef::local("user_id")]);
		assert_eq!(fk.ref_columns, vec![ColumnRef::external("users", "id")]);
		assert_eq!(fk.on_delete.as_deref(), Some("CASCADE"));
		assert_eq!(fk.on_update, None);
	}

	#[test]
	fn test_self_reference_is_local() {
		let schema = Schema::new("s1").with_table(
			Table::new("s1", "nodes")
				.with_column(Column::new("id", ColumnType::Int))
				.with_column(Column::new("parent_id", ColumnType::Int).nullable())
				.with_foreign_key(
					ForeignKey::new("nodes_parent_fk", ["parent_id"], TableRef::new("s1", "nodes"), ["id"])
						.on_update(ReferenceOption::NoAction),
				),
		);

		let fragment = convert_schema(&schema).unwrap();
		let fk = &fragment.tables[0].foreign_keys[0];

		assert_eq!(fk.ref_columns, vec![ColumnRef::local("id")]);
		assert_eq!(fk.on_update.as_deref(), Some("NO_ACTION"));
	}

	#[test]
	fn test_column_types() {
		let schema = Schema::new("s1").with_enum(Enum::new("status", ["active", "disabled"])).with_table(
			Table::new("s1", "accounts")
				.with_column(Column::new("name", ColumnType::Varchar(64)).with_comment("display name"))
				.with_column(Column::new("status", ColumnType::Enum("status".to_string())).with_default("'active'")),
		);

		let fragment = convert_schema(&schema).unwrap();
		let columns = &fragment.tables[0].columns;

		let name_type = columns[0].attr("type").unwrap();
		assert_eq!(name_type.value, AttrValue::String("varchar(64)".to_string()));
		assert_eq!(columns[0].attr("comment").unwrap().as_str(), Some("display name"));

		let status_type = columns[1].attr("type").unwrap();
		assert_eq!(status_type.reference(), Some(&Ref::new("$enum.status")));
		assert_eq!(columns[1].default.as_deref(), Some("'active'"));

		assert_eq!(fragment.enums.len(), 1);
		assert_eq!(fragment.enums[0].schema, Some(Ref::schema("s1")));
		assert_eq!(fragment.enums[0].values, vec!["active".to_string(), "disabled".to_string()]);
	}

	#[test]
	fn test_undeclared_enum() {
		let schema = Schema::new("s1").with_view(
			View::new("s1", "active_accounts", "SELECT * FROM accounts")
				.with_column(Column::new("status", ColumnType::Enum("status".to_string()))),
		);

		let err = convert_schema(&schema).unwrap_err();

		assert_eq!(err.code(), "CONVERT_002");
		assert_eq!(
			err.to_string(),
			"column `s1`.`active_accounts`.`status` has type `enum.status` but schema `s1` declares no such enum"
		);
	}

	#[test]
	fn test_views_and_comments() {
		let schema = Schema::new("s1")
			.with_comment("main schema")
			.with_view(View::new("s1", "active_users", "SELECT * FROM users").with_comment("only active"));

		let fragment = convert_schema(&schema).unwrap();

		assert_eq!(fragment.schema.attrs, vec![Attr::string("comment", "main schema")]);
		assert_eq!(fragment.views[0].definition, "SELECT * FROM users");
		assert_eq!(fragment.views[0].schema, Some(Ref::schema("s1")));
		assert_eq!(fragment.views[0].attrs, vec![Attr::string("comment", "only active")]);
	}

	#[test]
	fn test_foreign_key_column_mismatch() {
		let schema = Schema::new("s1").with_table(Table::new("s1", "orders").with_foreign_key(ForeignKey::new(
			"orders_user_fk",
			["user_id", "tenant_id"],
			TableRef::new("s1", "users"),
			["id"],
		)));

		let err = convert_schema(&schema).unwrap_err();

		assert_eq!(err.code(), "CONVERT_001");
	}
}
