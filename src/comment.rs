//! Documentation comment model.
//!
//! [`GeneratedComment`] is what synthesis produces for one declaration.
//! [`DocComment`] is a full comment as it sits on a declaration, including
//! the hand-written sections synthesis never touches (`<remarks>`,
//! `<example>`). Merging one into the other lives in [`crate::merge`].

use serde::{Deserialize, Serialize};

/// A named entry: `<param name="..">` or `<typeparam name="..">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    pub name: String,
    pub text: String,
}

impl DocEntry {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Freshly synthesized text for one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedComment {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<DocEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<DocEntry>,
}

impl GeneratedComment {
    /// A generated comment without any sections becomes a bare comment.
    pub fn into_doc_comment(self) -> DocComment {
        DocComment {
            summary: Some(self.summary).filter(|s| !s.is_empty()),
            type_params: self.type_params,
            params: self.params,
            returns: self.returns,
            value: self.value,
            remarks: None,
            example: None,
        }
    }
}

/// A complete documentation comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<DocEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<DocEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl DocComment {
    /// Whether a non-blank summary is present.
    pub fn has_summary(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    pub fn param(&self, name: &str) -> Option<&DocEntry> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn type_param(&self, name: &str) -> Option<&DocEntry> {
        self.type_params.iter().find(|p| p.name == name)
    }

    pub fn is_empty(&self) -> bool {
        *self == DocComment::default()
    }
}
