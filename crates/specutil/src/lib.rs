// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Flattens a realm into a spec document.
//!
//! [`marshal`] converts every schema with a [`SchemaConverter`], qualifies
//! table and view names that collide across schemas ([`qualify_tables`],
//! [`qualify_views`]), rewrites foreign key references to match
//! ([`qualify_references`]) and hands the document to a [`Marshaler`].

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use convert::convert_schema;
pub use error::{ConvertError, EvalError, MarshalError, QualifyError};
pub use eval::{Evaluator, Parsed, Variables, bytes_func, parse_bytes};
pub use json::{JsonEvaluator, JsonMarshaler, JsonMarshalerBuilder};
pub use marshal::{Marshaler, SchemaConverter, Subject, build_document, marshal};
pub use qualify::{Qualifiable, qualify, qualify_tables, qualify_views};
pub use reference::qualify_references;

mod convert;
mod error;
mod eval;
mod json;
mod marshal;
mod qualify;
mod reference;
