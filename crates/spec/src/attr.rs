// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::Ref;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrValue {
	Ref(Ref),
	String(String),
	Bool(bool),
	Int(i64),
}

/// A keyed attribute of a spec record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attr {
	pub key: String,
	pub value: AttrValue,
}

impl Attr {
	pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: AttrValue::String(value.into()),
		}
	}

	pub fn bool(key: impl Into<String>, value: bool) -> Self {
		Self {
			key: key.into(),
			value: AttrValue::Bool(value),
		}
	}

	pub fn int(key: impl Into<String>, value: i64) -> Self {
		Self {
			key: key.into(),
			value: AttrValue::Int(value),
		}
	}

	pub fn reference(&self) -> Option<&Ref> {
		match &self.value {
			AttrValue::Ref(r) => Some(r),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match &self.value {
			AttrValue::String(s) => Some(s),
			_ => None,
		}
	}
}

/// Builds an attribute whose value references the variable `v` instead of
/// holding a literal.
pub fn var_attr(k: impl Into<String>, v: impl Into<String>) -> Attr {
	Attr {
		key: k.into(),
		value: AttrValue::Ref(Ref::new(v)),
	}
}
