// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! JSON encoding of spec documents.

use realmspec_spec::Document;
use realmspec_type::{Result, return_error};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Serializer, Value, ser::PrettyFormatter};
use tracing::{debug, instrument};

use crate::{EvalError, Evaluator, MarshalError, Marshaler, Parsed, Variables};

const DEFAULT_INDENT: usize = 2;

/// Writes spec documents as JSON, compact unless configured otherwise.
///
/// A literal `${` in any string value is written as `$${` so that
/// [`JsonEvaluator`] reads it back unchanged instead of as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonMarshaler {
	pretty: bool,
	indent: usize,
}

impl Default for JsonMarshaler {
	fn default() -> Self {
		Self::new()
	}
}

impl JsonMarshaler {
	pub fn new() -> Self {
		Self::builder().build()
	}

	pub fn builder() -> JsonMarshalerBuilder {
		JsonMarshalerBuilder::new()
	}

	pub fn is_pretty(&self) -> bool {
		self.pretty
	}

	pub fn indent(&self) -> usize {
		self.indent
	}

	fn encode(&self, document: &Document) -> serde_json::Result<Vec<u8>> {
		let mut value = serde_json::to_value(document)?;
		escape(&mut value);
		if !self.pretty {
			return serde_json::to_vec(&value);
		}
		let indent = " ".repeat(self.indent);
		let mut out = Vec::new();
		let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
		value.serialize(&mut serializer)?;
		Ok(out)
	}
}

impl Marshaler for JsonMarshaler {
	#[instrument(name = "specutil::json::marshal_spec", level = "trace", skip_all)]
	fn marshal_spec(&self, document: &Document) -> Result<Vec<u8>> {
		match self.encode(document) {
			Ok(bytes) => {
				debug!(bytes = bytes.len(), pretty = self.pretty, "encoded spec document");
				Ok(bytes)
			}
			Err(err) => return_error!(MarshalError::Encode {
				reason: err.to_string(),
			}),
		}
	}
}

pub struct JsonMarshalerBuilder {
	pretty: Option<bool>,
	indent: Option<usize>,
}

impl Default for JsonMarshalerBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl JsonMarshalerBuilder {
	pub fn new() -> Self {
		Self {
			pretty: None,
			indent: None,
		}
	}

	/// Emit one value per line, indented. Defaults to compact output.
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = Some(pretty);
		self
	}

	/// Spaces per nesting level of pretty output. Defaults to 2.
	pub fn indent(mut self, indent: usize) -> Self {
		self.indent = Some(indent);
		self
	}

	pub fn build(self) -> JsonMarshaler {
		JsonMarshaler {
			pretty: self.pretty.unwrap_or(false),
			indent: self.indent.unwrap_or(DEFAULT_INDENT),
		}
	}
}

/// Decodes a parsed JSON spec file into any deserializable `T`, replacing
/// `${var.<name>}` placeholders in string values with input variables first.
///
/// A string that is exactly one placeholder takes the variable's JSON value;
/// placeholders embedded in longer strings are replaced by its text. `$${`
/// stands for a literal `${`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEvaluator;

impl<T: DeserializeOwned> Evaluator<T> for JsonEvaluator {
	#[instrument(name = "specutil::json::eval", level = "trace", skip_all, fields(filename = parsed.filename()))]
	fn eval(&self, parsed: &Parsed, dest: &mut T, input: &Variables) -> Result<()> {
		let body = substitute(parsed.body(), input)?;
		match serde_json::from_value(body) {
			Ok(value) => {
				*dest = value;
				Ok(())
			}
			Err(err) => return_error!(EvalError::Decode {
				reason: err.to_string(),
			}),
		}
	}
}

const PLACEHOLDER_START: &str = "${var.";
const TEMPLATE_START: &str = "${";
const ESCAPED_TEMPLATE_START: &str = "$${";

fn escape(value: &mut Value) {
	match value {
		Value::String(s) if s.contains(TEMPLATE_START) => *s = s.replace(TEMPLATE_START, ESCAPED_TEMPLATE_START),
		Value::Array(items) => items.iter_mut().for_each(escape),
		Value::Object(fields) => fields.values_mut().for_each(escape),
		_ => {}
	}
}

fn substitute(value: &Value, input: &Variables) -> Result<Value> {
	Ok(match value {
		Value::String(s) => substitute_str(s, input)?,
		Value::Array(items) => Value::Array(items.iter().map(|v| substitute(v, input)).collect::<Result<_>>()?),
		Value::Object(fields) => Value::Object(
			fields.iter().map(|(k, v)| substitute(v, input).map(|v| (k.clone(), v))).collect::<Result<_>>()?,
		),
		other => other.clone(),
	})
}

fn substitute_str(s: &str, input: &Variables) -> Result<Value> {
	if let Some(name) = s
		.strip_prefix(PLACEHOLDER_START)
		.and_then(|rest| rest.strip_suffix('}'))
		.filter(|name| !name.contains('}'))
	{
		return lookup(name, input).cloned();
	}

	let mut out = String::with_capacity(s.len());
	let mut rest = s;
	while let Some(start) = rest.find('$') {
		out.push_str(&rest[..start]);
		let tail = &rest[start..];

		if let Some(after) = tail.strip_prefix(ESCAPED_TEMPLATE_START) {
			out.push_str(TEMPLATE_START);
			rest = after;
			continue;
		}

		if let Some((name, after)) =
			tail.strip_prefix(PLACEHOLDER_START).and_then(|after| after.split_once('}'))
		{
			match lookup(name, input)? {
				Value::String(text) => out.push_str(text),
				other => out.push_str(&other.to_string()),
			}
			rest = after;
			continue;
		}

		out.push('$');
		rest = &tail[1..];
	}
	out.push_str(rest);
	Ok(Value::String(out))
}

fn lookup<'a>(name: &str, input: &'a Variables) -> Result<&'a Value> {
	match input.get(name) {
		Some(value) => Ok(value),
		None => return_error!(EvalError::UnknownVariable {
			name: name.to_string(),
		}),
	}
}
