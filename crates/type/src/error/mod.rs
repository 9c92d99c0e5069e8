// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod render;

/// Structured description of a failure.
///
/// Every error raised in the workspace is a `Diagnostic` carrying a stable
/// `code`, a one line `message` and optional guidance. Errors that wrap a
/// failure of a lower stage keep it in `cause`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}

	/// Walks the cause chain, starting with `self`.
	pub fn chain(&self) -> impl Iterator<Item = &Diagnostic> {
		std::iter::successors(Some(self), |d| d.cause.as_deref())
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.message)?;
		if let Some(cause) = &self.cause {
			write!(f, ": {}", cause)?;
		}
		Ok(())
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn diagnostic(&self) -> &Diagnostic {
		&self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl IntoDiagnostic for Error {
	fn into_diagnostic(self) -> Diagnostic {
		*self.0
	}
}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}

#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error::from($diagnostic)
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	fn diagnostic(code: &str, message: &str) -> Diagnostic {
		Diagnostic {
			code: code.to_string(),
			message: message.to_string(),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		}
	}

	#[test]
	fn test_display_without_cause() {
		let err = Error::from(diagnostic("TEST_001", "something broke"));
		assert_eq!(err.to_string(), "something broke");
		assert_eq!(err.code(), "TEST_001");
	}

	#[test]
	fn test_display_follows_cause_chain() {
		let inner = diagnostic("INNER_001", "inner failure");
		let outer = diagnostic("OUTER_001", "outer failure").with_cause(inner);

		assert_eq!(outer.to_string(), "outer failure: inner failure");

		let codes: Vec<&str> = outer.chain().map(|d| d.code.as_str()).collect();
		assert_eq!(codes, vec!["OUTER_001", "INNER_001"]);
	}

	#[test]
	fn test_return_error_macro() {
		fn fails() -> crate::Result<()> {
			return_error!(diagnostic("TEST_002", "nope"));
		}

		let err = fails().unwrap_err();
		assert_eq!(err.code(), "TEST_002");
	}

	#[test]
	fn test_diagnostic_serializes() {
		let d = diagnostic("TEST_003", "serialized");
		let json = serde_json::to_string(&d).unwrap();
		let back: Diagnostic = serde_json::from_str(&json).unwrap();
		assert_eq!(back, d);
	}
}
