// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub mod error;

pub use error::{
	Diagnostic, Error, IntoDiagnostic,
	render::{DefaultRenderer, DiagnosticRenderer},
};

pub type Result<T> = std::result::Result<T, Error>;
