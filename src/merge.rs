//! Merging generated text into an existing comment.
//!
//! ```text
//! existing comment?
//!   none ─────────────────────────────→ Create: everything generated
//!   present, blank summary ───────────→ Update: summary generated
//!   present, summary, preserve ───────→ Update: summary kept
//!   present, summary, no preserve ────→ Update: summary regenerated
//! ```
//!
//! In every case sections already present are kept unless a rebuild is
//! requested, missing ones are filled from the generated comment, and
//! `<remarks>` / `<example>` pass through untouched. Parameter entries follow
//! the declaration's current parameter list, so entries for removed
//! parameters disappear and new ones are added. An empty generated summary
//! never replaces written text.

use serde::{Deserialize, Serialize};

use crate::comment::{DocComment, DocEntry, GeneratedComment};

/// Shape of the comment already attached to a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingState {
    NoExistingComment,
    NoSummary,
    WithSummary,
}

impl ExistingState {
    pub fn of(existing: Option<&DocComment>) -> Self {
        match existing {
            None => ExistingState::NoExistingComment,
            Some(comment) if comment.has_summary() => ExistingState::WithSummary,
            Some(_) => ExistingState::NoSummary,
        }
    }
}

/// Host-facing label for the edit: "Create comment" vs "Update comment".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeAction {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergePolicy {
    pub preserve_existing_summary: bool,
    /// Regenerate returns/value/param/typeparam text even when present.
    pub rebuild_sections: bool,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            preserve_existing_summary: true,
            rebuild_sections: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub comment: DocComment,
    pub action: MergeAction,
}

/// Merge `generated` into `existing` under `policy`.
pub fn merge(
    existing: Option<&DocComment>,
    generated: &GeneratedComment,
    policy: MergePolicy,
) -> MergeOutcome {
    let state = ExistingState::of(existing);
    let Some(existing) = existing else {
        return MergeOutcome {
            comment: generated.clone().into_doc_comment(),
            action: MergeAction::Create,
        };
    };

    let keep_summary = state == ExistingState::WithSummary && policy.preserve_existing_summary;
    let summary = if keep_summary {
        existing.summary.clone()
    } else {
        Some(generated.summary.clone())
            .filter(|s| !s.is_empty())
            .or_else(|| existing.summary.clone())
    };

    let keep = |old: &Option<String>, new: &Option<String>| -> Option<String> {
        if policy.rebuild_sections {
            new.clone().or_else(|| old.clone())
        } else {
            old.clone().or_else(|| new.clone())
        }
    };

    MergeOutcome {
        comment: DocComment {
            summary,
            type_params: merge_entries(&existing.type_params, &generated.type_params, policy),
            params: merge_entries(&existing.params, &generated.params, policy),
            returns: keep(&existing.returns, &generated.returns),
            value: keep(&existing.value, &generated.value),
            remarks: existing.remarks.clone(),
            example: existing.example.clone(),
        },
        action: MergeAction::Update,
    }
}

/// Entries follow the generated (current) name list; existing text wins
/// unless sections are rebuilt or the existing text is blank.
fn merge_entries(existing: &[DocEntry], generated: &[DocEntry], policy: MergePolicy) -> Vec<DocEntry> {
    generated
        .iter()
        .map(|entry| {
            match existing.iter().find(|old| old.name == entry.name) {
                Some(old) if !policy.rebuild_sections && !old.text.trim().is_empty() => old.clone(),
                _ => entry.clone(),
            }
        })
        .collect()
}
