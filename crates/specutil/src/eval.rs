// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use realmspec_type::Result;
use serde_json::Value;
use tracing::{instrument, trace};

use crate::EvalError;

/// Input variables available to an evaluation, by name.
pub type Variables = HashMap<String, Value>;

/// A parsed spec file.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
	filename: String,
	body: Value,
}

impl Parsed {
	pub fn new(filename: impl Into<String>, body: Value) -> Self {
		Self {
			filename: filename.into(),
			body,
		}
	}

	pub fn filename(&self) -> &str {
		&self.filename
	}

	pub fn body(&self) -> &Value {
		&self.body
	}
}

/// Evaluates a parsed spec file into `T`.
pub trait Evaluator<T> {
	fn eval(&self, parsed: &Parsed, dest: &mut T, input: &Variables) -> Result<()>;
}

/// Parses `bytes` as one spec file named `filename`.
///
/// Syntax errors carry the file name with the 1-based line and column of the
/// offending input.
#[instrument(name = "specutil::parse_bytes", level = "trace", skip(bytes), fields(len = bytes.len()))]
pub fn parse_bytes(bytes: &[u8], filename: &str) -> Result<Parsed> {
	match serde_json::from_slice::<Value>(bytes) {
		Ok(body) => Ok(Parsed::new(filename, body)),
		Err(err) => Err(EvalError::Parse {
			filename: filename.to_string(),
			line: err.line(),
			column: err.column(),
			reason: strip_position(&err),
		}
		.into()),
	}
}

// serde_json appends " at line L column C" to its messages.
fn strip_position(err: &serde_json::Error) -> String {
	let message = err.to_string();
	let suffix = format!(" at line {} column {}", err.line(), err.column());
	match message.strip_suffix(&suffix) {
		Some(reason) => reason.to_string(),
		None => message,
	}
}

/// Adapts `evaluator` into a function evaluating a single in-memory file.
///
/// The bytes are parsed as a file with an empty name, and a parse failure is
/// returned without invoking the evaluator.
pub fn bytes_func<T, E>(evaluator: E) -> impl Fn(&[u8], &mut T, &Variables) -> Result<()>
where
	E: Evaluator<T>,
{
	move |bytes: &[u8], dest: &mut T, input: &Variables| {
		let parsed = parse_bytes(bytes, "")?;
		trace!(variables = input.len(), "evaluating in-memory spec");
		evaluator.eval(&parsed, dest, input)
	}
}
