// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use realmspec_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecError {
	#[error("{kind} `{name}` has no schema reference")]
	MissingSchemaRef {
		kind: &'static str,
		name: String,
	},

	#[error("invalid schema reference `{reference}`")]
	MalformedSchemaRef {
		reference: String,
	},

	#[error("invalid column reference `{reference}`")]
	MalformedColumnRef {
		reference: String,
	},

	#[error("malformed reference `{reference}`: {reason}")]
	MalformedRef {
		reference: String,
		reason: &'static str,
	},
}

impl IntoDiagnostic for SpecError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			SpecError::MissingSchemaRef {
				..
			} => Diagnostic {
				code: "SPEC_001".to_string(),
				message,
				label: Some("missing `schema` attribute".to_string()),
				help: Some("every table and view spec must reference the schema it belongs to, e.g. `$schema.public`"
					.to_string()),
				notes: vec![],
				cause: None,
			},
			SpecError::MalformedSchemaRef {
				..
			} => Diagnostic {
				code: "SPEC_002".to_string(),
				message,
				label: Some("expected a reference of the form `$schema.<name>`".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			SpecError::MalformedColumnRef {
				..
			} => Diagnostic {
				code: "SPEC_003".to_string(),
				message,
				label: Some("expected `$column.<c>`, `$table.<t>.$column.<c>` or `$table.<q>.<t>.$column.<c>`"
					.to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			SpecError::MalformedRef {
				..
			} => Diagnostic {
				code: "SPEC_004".to_string(),
				message,
				label: None,
				help: Some("references are `$type.value` path segments joined by `.`; quote values containing `.`"
					.to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<SpecError> for Error {
	fn from(err: SpecError) -> Self {
		Error::from(err.into_diagnostic())
	}
}
