// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use realmspec_spec::{Ref, SpecError, TableSpec, ViewSpec, schema_name};
use realmspec_type::{Result, return_error};
use tracing::{instrument, trace};

/// A named spec entity that belongs to a schema and can be qualified with
/// that schema's name.
pub trait Qualifiable {
	const KIND: &'static str;

	fn name(&self) -> &str;

	fn schema_ref(&self) -> Option<&Ref>;

	fn qualifier(&self) -> &str;

	fn set_qualifier(&mut self, qualifier: String);
}

impl Qualifiable for TableSpec {
	const KIND: &'static str = "table";

	fn name(&self) -> &str {
		&self.name
	}

	fn schema_ref(&self) -> Option<&Ref> {
		self.schema.as_ref()
	}

	fn qualifier(&self) -> &str {
		&self.qualifier
	}

	fn set_qualifier(&mut self, qualifier: String) {
		self.qualifier = qualifier;
	}
}

impl Qualifiable for ViewSpec {
	const KIND: &'static str = "view";

	fn name(&self) -> &str {
		&self.name
	}

	fn schema_ref(&self) -> Option<&Ref> {
		self.schema.as_ref()
	}

	fn qualifier(&self) -> &str {
		&self.qualifier
	}

	fn set_qualifier(&mut self, qualifier: String) {
		self.qualifier = qualifier;
	}
}

fn owning_schema<T: Qualifiable>(spec: &T) -> Result<String> {
	match spec.schema_ref() {
		Some(r) => schema_name(r),
		None => return_error!(SpecError::MissingSchemaRef {
			kind: T::KIND,
			name: spec.name().to_string(),
		}),
	}
}

/// Qualifies every entity whose name is shared with another entity of the
/// list, setting its qualifier to its owning schema name. Entities with a
/// unique name keep an empty qualifier.
///
/// The qualifier is always the owning schema name, never an alias:
/// [`qualify_references`](crate::qualify_references) relies on it to tell
/// qualified targets apart.
#[instrument(name = "specutil::qualify", level = "debug", skip_all, fields(count = specs.len()))]
pub fn qualify<T: Qualifiable>(specs: &mut [T]) -> Result<()> {
	let mut seen: HashMap<String, usize> = HashMap::with_capacity(specs.len());
	for i in 0..specs.len() {
		if let Some(&prev) = seen.get(specs[i].name()) {
			let schema = owning_schema(&specs[prev])?;
			specs[prev].set_qualifier(schema);

			let schema = owning_schema(&specs[i])?;
			specs[i].set_qualifier(schema);

			trace!(
				kind = T::KIND,
				name = specs[i].name(),
				qualifier = specs[i].qualifier(),
				other = specs[prev].qualifier(),
				"qualified duplicate name"
			);
		}
		seen.insert(specs[i].name().to_string(), i);
	}
	Ok(())
}

pub fn qualify_tables(specs: &mut [TableSpec]) -> Result<()> {
	qualify(specs)
}

pub fn qualify_views(specs: &mut [ViewSpec]) -> Result<()> {
	qualify(specs)
}
