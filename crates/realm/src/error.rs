// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use realmspec_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RealmError {
	#[error("schema `{schema}` was not found in realm")]
	SchemaNotFound {
		schema: String,
	},

	#[error("table `{schema}`.`{table}` was not found in realm")]
	TableNotFound {
		schema: String,
		table: String,
	},

	#[error("foreign key `{schema}`.`{table}`.`{symbol}` was not found in realm")]
	ForeignKeyNotFound {
		schema: String,
		table: String,
		symbol: String,
	},
}

impl IntoDiagnostic for RealmError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		let (code, label, notes) = match self {
			RealmError::SchemaNotFound {
				..
			} => ("REALM_001", "unknown schema", vec![]),
			RealmError::TableNotFound {
				..
			} => ("REALM_002", "unknown table", vec![]),
			RealmError::ForeignKeyNotFound {
				..
			} => (
				"REALM_003",
				"unknown foreign key symbol",
				vec!["foreign key specs are matched to the realm by symbol".to_string()],
			),
		};

		Diagnostic {
			code: code.to_string(),
			message,
			label: Some(label.to_string()),
			help: Some("the spec and the realm it was converted from have diverged; convert the realm again"
				.to_string()),
			notes,
			cause: None,
		}
	}
}

impl From<RealmError> for Error {
	fn from(err: RealmError) -> Self {
		Error::from(err.into_diagnostic())
	}
}
