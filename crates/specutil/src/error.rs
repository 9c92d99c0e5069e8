// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use realmspec_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QualifyError {
	#[error("duplicate references were found for `{qualifier}`.`{table}`")]
	DuplicateReference {
		qualifier: String,
		table: String,
	},

	#[error("missing reference for column `{column}` in `{schema}`.`{table}`.`{symbol}`")]
	MissingReference {
		column: String,
		schema: String,
		table: String,
		symbol: String,
	},
}

impl IntoDiagnostic for QualifyError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			QualifyError::DuplicateReference {
				qualifier,
				..
			} => Diagnostic {
				code: "QUALIFY_001".to_string(),
				message,
				label: Some("two table specs share the same qualifier and name".to_string()),
				help: Some(if qualifier.is_empty() {
					"table names must be unique unless qualified with their schema name".to_string()
				} else {
					"a qualifier must be the owning schema name; do not assign qualifiers by hand".to_string()
				}),
				notes: vec![],
				cause: None,
			},
			QualifyError::MissingReference {
				..
			} => Diagnostic {
				code: "QUALIFY_002".to_string(),
				message,
				label: Some("referenced table has no matching spec".to_string()),
				help: Some("the referenced table must be part of the document, either unqualified or qualified with its schema name".to_string()),
				notes: vec![
					"a qualified target is matched by its real schema name, an unqualified one by its name alone"
						.to_string(),
				],
				cause: None,
			},
		}
	}
}

impl From<QualifyError> for Error {
	fn from(err: QualifyError) -> Self {
		Error::from(err.into_diagnostic())
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarshalError {
	#[error("failed converting schema `{schema}` to spec")]
	ConversionFailed {
		schema: String,
	},

	#[error("failed marshaling spec: {kind} `{name}` is not supported")]
	UnsupportedSubject {
		kind: &'static str,
		name: String,
	},

	#[error("failed encoding spec document: {reason}")]
	Encode {
		reason: String,
	},
}

impl IntoDiagnostic for MarshalError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			MarshalError::ConversionFailed {
				..
			} => Diagnostic {
				code: "MARSHAL_001".to_string(),
				message,
				label: Some("schema converter failed".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			MarshalError::UnsupportedSubject {
				..
			} => Diagnostic {
				code: "MARSHAL_002".to_string(),
				message,
				label: None,
				help: Some("marshal the schema or the realm that owns it".to_string()),
				notes: vec![],
				cause: None,
			},
			MarshalError::Encode {
				..
			} => Diagnostic {
				code: "MARSHAL_003".to_string(),
				message,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<MarshalError> for Error {
	fn from(err: MarshalError) -> Self {
		Error::from(err.into_diagnostic())
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
	#[error("{filename}:{line}:{column}: {reason}")]
	Parse {
		filename: String,
		line: usize,
		column: usize,
		reason: String,
	},

	#[error("failed decoding document: {reason}")]
	Decode {
		reason: String,
	},

	#[error("unknown variable `{name}`")]
	UnknownVariable {
		name: String,
	},
}

impl IntoDiagnostic for EvalError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			EvalError::Parse {
				line,
				column,
				..
			} => Diagnostic {
				code: "PARSE_001".to_string(),
				message,
				label: Some(format!("syntax error at line {}, column {}", line, column)),
				help: None,
				notes: vec![],
				cause: None,
			},
			EvalError::Decode {
				..
			} => Diagnostic {
				code: "EVAL_001".to_string(),
				message,
				label: None,
				help: Some("the document parsed but does not have the expected shape".to_string()),
				notes: vec![],
				cause: None,
			},
			EvalError::UnknownVariable {
				name,
			} => Diagnostic {
				code: "EVAL_002".to_string(),
				message,
				label: None,
				help: Some(format!("pass a value for `{}` in the input variables", name)),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<EvalError> for Error {
	fn from(err: EvalError) -> Self {
		Error::from(err.into_diagnostic())
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
	#[error(
		"foreign key `{schema}`.`{table}`.`{symbol}` has {columns} columns but references {ref_columns} columns"
	)]
	ForeignKeyColumnMismatch {
		schema: String,
		table: String,
		symbol: String,
		columns: usize,
		ref_columns: usize,
	},

	#[error("column `{schema}`.`{owner}`.`{column}` has type `{ty}` but schema `{schema}` declares no such enum")]
	UndeclaredEnum {
		schema: String,
		owner: String,
		column: String,
		ty: String,
	},
}

impl IntoDiagnostic for ConvertError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ConvertError::ForeignKeyColumnMismatch {
				..
			} => Diagnostic {
				code: "CONVERT_001".to_string(),
				message,
				label: None,
				help: Some("each local column must reference exactly one column".to_string()),
				notes: vec![],
				cause: None,
			},
			ConvertError::UndeclaredEnum {
				..
			} => Diagnostic {
				code: "CONVERT_002".to_string(),
				message,
				label: Some("enum columns reference an enum of their own schema".to_string()),
				help: Some("declare the enum on the schema that owns the column".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<ConvertError> for Error {
	fn from(err: ConvertError) -> Self {
		Error::from(err.into_diagnostic())
	}
}
