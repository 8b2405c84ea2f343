//! Declarations as the host hands them over.
//!
//! A [`Declaration`] is what a host extracts from one syntax node: the member
//! kind, its name, the spelled type shapes and a few flags. Discovering
//! declarations is the host's job; this crate only reads them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::comment::DocComment;
use crate::grammar::TypeShape;

/// Kind of declaration being documented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum MemberKind {
    Class,
    Interface,
    Enum,
    Struct,
    Record,
    Field,
    Property,
    Method,
    Constructor,
}

impl MemberKind {
    pub const ALL: [MemberKind; 9] = [
        MemberKind::Class,
        MemberKind::Interface,
        MemberKind::Enum,
        MemberKind::Struct,
        MemberKind::Record,
        MemberKind::Field,
        MemberKind::Property,
        MemberKind::Method,
        MemberKind::Constructor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Class => "class",
            MemberKind::Interface => "interface",
            MemberKind::Enum => "enum",
            MemberKind::Struct => "struct",
            MemberKind::Record => "record",
            MemberKind::Field => "field",
            MemberKind::Property => "property",
            MemberKind::Method => "method",
            MemberKind::Constructor => "constructor",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = MemberKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown member kind \"{s}\" (expected one of: {})", names.join(", "))
            })
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<TypeShape>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, shape: Option<TypeShape>) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

fn default_true() -> bool {
    true
}

/// One declaration to document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: MemberKind,
    pub name: String,
    /// Return type for methods, declared type for properties and fields.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<TypeShape>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,
    #[serde(default = "default_true")]
    pub has_getter: bool,
    #[serde(default)]
    pub has_setter: bool,
    #[serde(default = "default_true")]
    pub is_public: bool,
    /// Members of an interface are implicitly public.
    #[serde(default)]
    pub is_owned_by_interface: bool,
    /// Documentation already attached to the declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing: Option<DocComment>,
}

impl Declaration {
    /// A public declaration with no type, parameters or existing comment.
    pub fn new(kind: MemberKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            shape: None,
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            has_getter: true,
            has_setter: false,
            is_public: true,
            is_owned_by_interface: false,
            existing: None,
        }
    }

    pub fn with_type(mut self, shape: TypeShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, shape: Option<TypeShape>) -> Self {
        self.parameters.push(Parameter::new(name, shape));
        self
    }

    pub fn with_type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    pub fn with_setter(mut self, has_setter: bool) -> Self {
        self.has_setter = has_setter;
        self
    }

    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn with_existing(mut self, existing: DocComment) -> Self {
        self.existing = Some(existing);
        self
    }

    /// Whether the member returns a value worth a `<returns>` element.
    pub fn returns_value(&self) -> bool {
        self.kind == MemberKind::Method && self.shape.as_ref().is_some_and(|s| !s.is_void())
    }
}
