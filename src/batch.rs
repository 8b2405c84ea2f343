//! Batch generation over many declarations.
//!
//! Declarations are independent, so a batch is documented in parallel with
//! rayon against one shared [`DocGenerator`]. Results come back in input
//! order. Declarations that visibility settings exclude are reported as
//! skipped rather than dropped, so output lines up with input.

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::declaration::{Declaration, MemberKind};
use crate::error::{AutodocError, AutodocResult};
use crate::generator::DocGenerator;
use crate::merge::MergeOutcome;
use crate::render;

/// Result for one declaration of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub kind: MemberKind,
    pub name: String,
    /// `None` when the declaration was not eligible for documentation.
    #[serde(flatten)]
    pub outcome: Option<MergeOutcome>,
}

/// Read a JSON array of declarations from `path`, or stdin for `-`.
pub fn read_declarations(path: &Path) -> AutodocResult<Vec<Declaration>> {
    let origin = path.display().to_string();
    let content = if origin == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AutodocError::InputRead {
                path: origin.clone(),
                source: e,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| AutodocError::InputRead {
            path: origin.clone(),
            source: e,
        })?
    };
    parse_declarations(&content, &origin)
}

/// Parse a JSON array of declarations.
pub fn parse_declarations(content: &str, origin: &str) -> AutodocResult<Vec<Declaration>> {
    serde_json::from_str(content).map_err(|e| AutodocError::InputParse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// Document every declaration in parallel, preserving input order.
pub fn generate_all(generator: &DocGenerator, declarations: &[Declaration]) -> Vec<BatchEntry> {
    use rayon::prelude::*;

    let entries: Vec<BatchEntry> = declarations
        .par_iter()
        .map(|decl| BatchEntry {
            kind: decl.kind,
            name: decl.name.clone(),
            outcome: generator
                .should_document(decl)
                .then(|| generator.document(decl)),
        })
        .collect();

    let skipped = entries.iter().filter(|e| e.outcome.is_none()).count();
    tracing::info!(total = entries.len(), skipped, "batch generated");
    entries
}

/// Render a batch as XML doc comments, one block per documented declaration.
pub fn render_xml(entries: &[BatchEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let Some(outcome) = &entry.outcome else {
            continue;
        };
        out.push_str(&format!("// {} {}\n", entry.kind, entry.name));
        out.push_str(&render::to_xml(&outcome.comment, ""));
        out.push('\n');
    }
    out
}

/// Render a batch as pretty JSON.
pub fn render_json(entries: &[BatchEntry]) -> AutodocResult<String> {
    serde_json::to_string_pretty(entries).map_err(|e| AutodocError::OutputEncode {
        message: e.to_string(),
    })
}
