// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::error::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String {
		let mut output = String::new();

		for (depth, d) in diagnostic.chain().enumerate() {
			if depth == 0 {
				let _ = writeln!(&mut output, "error[{}]: {}", d.code, d.message);
			} else {
				let _ = writeln!(&mut output, "\ncaused by[{}]: {}", d.code, d.message);
			}

			if let Some(label) = &d.label {
				let _ = writeln!(&mut output, "  = {}", label);
			}

			if let Some(help) = &d.help {
				let _ = writeln!(&mut output, "\nhelp: {}", help);
			}

			for note in &d.notes {
				let _ = writeln!(&mut output, "\nnote: {}", note);
			}
		}

		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}
