// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use realmspec_realm::{ForeignKey, Realm, RealmError};
use realmspec_spec::{ColumnRef, SpecError, TableSpec, schema_name};
use realmspec_type::{Result, return_error};
use tracing::{debug, instrument, trace};

use crate::QualifyError;

/// Tables indexed by `(qualifier, name)`.
type ByRef<'a> = HashMap<(&'a str, &'a str), &'a TableSpec>;

struct Rewrite {
	table: usize,
	foreign_key: usize,
	position: usize,
	column_ref: ColumnRef,
}

/// Rewrites the referenced columns of every foreign key into external
/// references that match how the target table was qualified.
///
/// A target qualified by [`qualify_tables`](crate::qualify_tables) is found
/// under its real schema name and referenced as
/// `$table.<schema>.<table>.$column.<c>`; an unqualified target is referenced
/// as `$table.<table>.$column.<c>`. A qualifier that differs from the owning
/// schema name makes the target unresolvable.
///
/// Either every reference is rewritten or, on error, none is.
#[instrument(name = "specutil::qualify_references", level = "debug", skip_all, fields(tables = tables.len()))]
pub fn qualify_references(tables: &mut [TableSpec], realm: &Realm) -> Result<()> {
	let rewrites = resolve(tables, realm)?;
	debug!(references = rewrites.len(), "resolved foreign key references");

	for rewrite in rewrites {
		tables[rewrite.table].foreign_keys[rewrite.foreign_key].ref_columns[rewrite.position] = rewrite.column_ref;
	}
	Ok(())
}

fn resolve(tables: &[TableSpec], realm: &Realm) -> Result<Vec<Rewrite>> {
	let mut by_ref: ByRef<'_> = HashMap::with_capacity(tables.len());
	for t in tables {
		if by_ref.insert((t.qualifier.as_str(), t.name.as_str()), t).is_some() {
			return_error!(QualifyError::DuplicateReference {
				qualifier: t.qualifier.clone(),
				table: t.name.clone(),
			});
		}
	}

	let mut rewrites = Vec::new();
	for (table_idx, t) in tables.iter().enumerate() {
		let schema = match &t.schema {
			Some(r) => schema_name(r)?,
			None => return_error!(SpecError::MissingSchemaRef {
				kind: "table",
				name: t.name.clone(),
			}),
		};
		let real_table = realm.get_schema(&schema)?.get_table(&t.name)?;

		for (fk_idx, fk) in t.foreign_keys.iter().enumerate() {
			let real_fk = real_table.foreign_key(&fk.symbol).ok_or_else(|| RealmError::ForeignKeyNotFound {
				schema: schema.clone(),
				table: t.name.clone(),
				symbol: fk.symbol.clone(),
			})?;

			for position in 0..fk.ref_columns.len() {
				let column_ref = resolve_column(&by_ref, real_fk, position).ok_or_else(|| {
					QualifyError::MissingReference {
						column: fk.ref_columns[position].to_string(),
						schema: schema.clone(),
						table: t.name.clone(),
						symbol: fk.symbol.clone(),
					}
				})?;

				trace!(
					schema = %schema,
					table = %t.name,
					symbol = %fk.symbol,
					reference = %column_ref,
					"resolved reference"
				);
				rewrites.push(Rewrite {
					table: table_idx,
					foreign_key: fk_idx,
					position,
					column_ref,
				});
			}
		}
	}
	Ok(rewrites)
}

fn resolve_column(by_ref: &ByRef<'_>, real_fk: &ForeignKey, position: usize) -> Option<ColumnRef> {
	let column = real_fk.ref_columns.get(position)?;
	let target = &real_fk.ref_table;

	if let Some(r) = by_ref.get(&(target.schema.as_str(), target.name.as_str())).filter(|r| !r.qualifier.is_empty())
	{
		return Some(ColumnRef::qualified(&r.qualifier, &r.name, column));
	}

	if let Some(r) = by_ref.get(&("", target.name.as_str())).filter(|r| r.qualifier.is_empty()) {
		return Some(ColumnRef::external(&r.name, column));
	}

	None
}
