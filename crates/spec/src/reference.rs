// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use realmspec_type::{Result, return_error};
use serde::{Deserialize, Serialize};

use crate::SpecError;

/// A variable reference to another spec object, e.g. `$schema.public` or
/// `$table.public.users.$column.id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ref(String);

/// One `$type.value[.value...]` segment of a reference path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathIndex {
	pub t: String,
	pub v: Vec<String>,
}

impl PathIndex {
	pub fn new<I>(t: impl Into<String>, v: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self {
			t: t.into(),
			v: v.into_iter().map(Into::into).collect(),
		}
	}
}

impl Ref {
	pub fn new(v: impl Into<String>) -> Self {
		Self(v.into())
	}

	pub fn schema(name: &str) -> Self {
		Self::build(&[PathIndex::new("schema", [name])])
	}

	pub fn build(path: &[PathIndex]) -> Self {
		let mut result = String::new();
		for (i, index) in path.iter().enumerate() {
			if i > 0 {
				result.push('.');
			}
			result.push('$');
			result.push_str(&index.t);
			for v in &index.v {
				result.push('.');
				push_value(&mut result, v);
			}
		}
		Self(result)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn path(&self) -> Result<Vec<PathIndex>> {
		let mut path: Vec<PathIndex> = Vec::new();
		for token in tokenize(&self.0)? {
			match token {
				Token::Type(t) => path.push(PathIndex {
					t,
					v: vec![],
				}),
				Token::Value(v) => match path.last_mut() {
					Some(index) => index.v.push(v),
					None => return_error!(self.malformed("reference must start with `$`")),
				},
			}
		}
		Ok(path)
	}

	fn malformed(&self, reason: &'static str) -> SpecError {
		SpecError::MalformedRef {
			reference: self.0.clone(),
			reason,
		}
	}
}

impl Display for Ref {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// Resolves a `$schema.<name>` reference to the schema name.
pub fn schema_name(r: &Ref) -> Result<String> {
	let path = r.path()?;
	match path.as_slice() {
		[index] if index.t == "schema" && index.v.len() == 1 => Ok(index.v[0].clone()),
		_ => return_error!(SpecError::MalformedSchemaRef {
			reference: r.to_string(),
		}),
	}
}

fn needs_quotes(v: &str) -> bool {
	v.is_empty() || v.starts_with('$') || v.contains(['.', '"', '\\'])
}

fn push_value(out: &mut String, v: &str) {
	if !needs_quotes(v) {
		out.push_str(v);
		return;
	}
	out.push('"');
	for c in v.chars() {
		if c == '"' || c == '\\' {
			out.push('\\');
		}
		out.push(c);
	}
	out.push('"');
}

enum Token {
	Type(String),
	Value(String),
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
	let malformed = |reason| SpecError::MalformedRef {
		reference: input.to_string(),
		reason,
	};

	if input.is_empty() {
		return_error!(malformed("empty reference"));
	}

	let mut tokens = Vec::new();
	let mut chars = input.chars().peekable();
	loop {
		if chars.peek() == Some(&'"') {
			chars.next();
			let mut value = String::new();
			loop {
				match chars.next() {
					Some('\\') => match chars.next() {
						Some(c) => value.push(c),
						None => return_error!(malformed("unterminated quoted value")),
					},
					Some('"') => break,
					Some(c) => value.push(c),
					None => return_error!(malformed("unterminated quoted value")),
				}
			}
			tokens.push(Token::Value(value));
		} else {
			let mut text = String::new();
			while let Some(&c) = chars.peek() {
				if c == '.' {
					break;
				}
				if c == '"' {
					return_error!(malformed("unexpected quote"));
				}
				text.push(c);
				chars.next();
			}
			match text.strip_prefix('$') {
				Some("") => return_error!(malformed("empty segment type")),
				Some(t) => tokens.push(Token::Type(t.to_string())),
				None if text.is_empty() => return_error!(malformed("empty segment")),
				None => tokens.push(Token::Value(text)),
			}
		}

		match chars.next() {
			None => break,
			Some('.') => {}
			Some(_) => return_error!(malformed("expected `.` after quoted value")),
		}
	}
	Ok(tokens)
}
