//! Type shapes: the syntactic form of a type reference.
//!
//! A [`TypeShape`] records how a type was *spelled* in source, not what it
//! resolves to. Generic shapes are classified into container families on
//! demand through [`TypeShape::generic_kind`]; the classification is derived
//! from the identifier and arity every time and never stored.
//!
//! Shapes read from and print to source notation (`Dictionary<int, User[]>`),
//! which is also their serde representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{GrammarError, GrammarResult};
use super::split;

/// Built-in keyword types.
const PREDEFINED: &[&str] = &[
    "bool", "byte", "char", "decimal", "double", "dynamic", "float", "int", "long", "nint",
    "nuint", "object", "sbyte", "short", "string", "uint", "ulong", "ushort", "void",
];

/// Syntactic description of a type reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeShape {
    /// A simple type name or type-parameter reference.
    Named(String),
    /// A dotted name, kept opaque.
    Qualified(String),
    /// An array of the element shape (rank is not recorded).
    Array(Box<TypeShape>),
    /// A parameterized type and its arguments.
    Generic(String, Vec<TypeShape>),
    /// A built-in keyword type, spelled as in source.
    Predefined(String),
}

/// Container family of a generic shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericKind {
    /// `IReadOnlyCollection<T>`, `ReadOnlyCollection<T>`, `IReadOnlyList<T>`.
    ReadOnlyCollection,
    /// `List<T>`, `IEnumerable<T>`, `ICollection<T>`, `HashSet<T>` and friends.
    List,
    /// Any two-argument dictionary.
    Dictionary,
    /// An asynchronous or action-result wrapper.
    Wrapper(WrapperKind),
    /// A generic this crate has no phrasing for.
    Unrecognized,
}

impl GenericKind {
    /// Whether the shape reads as a collection ("a list of ...").
    pub fn is_collection(self) -> bool {
        matches!(
            self,
            GenericKind::ReadOnlyCollection | GenericKind::List | GenericKind::Dictionary
        )
    }
}

/// Wrapper types whose type argument is the "real" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Task,
    ValueTask,
    ActionResult,
}

impl WrapperKind {
    /// The wrapper's type name as it appears in generated text.
    pub fn type_name(self) -> &'static str {
        match self {
            WrapperKind::Task => "Task",
            WrapperKind::ValueTask => "ValueTask",
            WrapperKind::ActionResult => "ActionResult",
        }
    }
}

/// Generic names that read as a plain list.
const LIST_NAMES: &[&str] = &[
    "IEnumerable",
    "IAsyncEnumerable",
    "IQueryable",
    "IList",
    "List",
    "LinkedList",
    "ImmutableList",
    "ImmutableArray",
    "IOrderedEnumerable",
];

/// Other single-argument collections, described by their own split name.
const COLLECTION_NAMES: &[&str] = &[
    "ICollection",
    "Collection",
    "ObservableCollection",
    "ConcurrentBag",
    "BlockingCollection",
    "HashSet",
    "ISet",
    "SortedSet",
    "ImmutableHashSet",
    "Queue",
    "ConcurrentQueue",
    "Stack",
    "ConcurrentStack",
];

/// Classify a generic identifier by name and arity.
pub fn classify(name: &str, arity: usize) -> GenericKind {
    let simple = simple_name(name);

    let kind = match simple {
        "Task" if arity >= 1 => GenericKind::Wrapper(WrapperKind::Task),
        "ValueTask" if arity >= 1 => GenericKind::Wrapper(WrapperKind::ValueTask),
        "ActionResult" if arity >= 1 => GenericKind::Wrapper(WrapperKind::ActionResult),
        n if arity == 2 && n.contains("Dictionary") => GenericKind::Dictionary,
        n if arity == 1 && n.trim_start_matches('I').starts_with("ReadOnly") => {
            GenericKind::ReadOnlyCollection
        }
        n if arity == 1 && (LIST_NAMES.contains(&n) || COLLECTION_NAMES.contains(&n)) => {
            GenericKind::List
        }
        _ => GenericKind::Unrecognized,
    };
    tracing::trace!(name, arity, ?kind, "classified generic shape");
    kind
}

/// Last segment of a dotted name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Lower-case descriptive word for a container: `"list"`, `"hash set"`,
/// `"read only collection"`, `"dictionary"`.
pub fn container_word(name: &str) -> String {
    let simple = simple_name(name);
    if LIST_NAMES.contains(&simple) {
        return "list".to_string();
    }
    let words = split::split(strip_interface_prefix(simple));
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop an interface `I` prefix (`IUserService` → `UserService`).
pub fn strip_interface_prefix(name: &str) -> &str {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some('I'), Some(second)) if second.is_uppercase() => &name[1..],
        _ => name,
    }
}

impl TypeShape {
    pub fn named(name: impl Into<String>) -> Self {
        TypeShape::Named(name.into())
    }

    pub fn qualified(name: impl Into<String>) -> Self {
        TypeShape::Qualified(name.into())
    }

    pub fn predefined(keyword: impl Into<String>) -> Self {
        TypeShape::Predefined(keyword.into())
    }

    pub fn array(element: TypeShape) -> Self {
        TypeShape::Array(Box::new(element))
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeShape>) -> Self {
        TypeShape::Generic(name.into(), args)
    }

    /// Classify a generic shape; `None` for every other variant.
    pub fn generic_kind(&self) -> Option<GenericKind> {
        match self {
            TypeShape::Generic(name, args) => Some(classify(name, args.len())),
            _ => None,
        }
    }

    /// The identifier a leaf description is built from.
    pub fn leaf_name(&self) -> &str {
        match self {
            TypeShape::Named(n) | TypeShape::Qualified(n) | TypeShape::Predefined(n) => n,
            TypeShape::Generic(n, _) => n,
            TypeShape::Array(element) => element.leaf_name(),
        }
    }

    /// Whether this is the `void` keyword.
    pub fn is_void(&self) -> bool {
        matches!(self, TypeShape::Predefined(k) if k == "void")
    }

    /// Whether this shape is a boolean (`bool`, `Boolean`, `System.Boolean`).
    pub fn is_boolean(&self) -> bool {
        match self {
            TypeShape::Predefined(k) => k == "bool",
            TypeShape::Named(n) | TypeShape::Qualified(n) => simple_name(n) == "Boolean",
            _ => false,
        }
    }

    /// Whether this is an asynchronous wrapper, generic or not.
    pub fn is_task_like(&self) -> bool {
        match self {
            TypeShape::Generic(..) => matches!(
                self.generic_kind(),
                Some(GenericKind::Wrapper(WrapperKind::Task | WrapperKind::ValueTask))
            ),
            TypeShape::Named(n) | TypeShape::Qualified(n) => {
                matches!(simple_name(n), "Task" | "ValueTask")
            }
            _ => false,
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Named(n) | TypeShape::Qualified(n) | TypeShape::Predefined(n) => {
                write!(f, "{n}")
            }
            TypeShape::Array(element) => write!(f, "{element}[]"),
            TypeShape::Generic(name, args) => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
        }
    }
}

impl FromStr for TypeShape {
    type Err = GrammarError;

    fn from_str(s: &str) -> GrammarResult<Self> {
        let mut parser = ShapeParser::new(s);
        parser.skip_ws();
        if parser.at_end() {
            return Err(GrammarError::EmptyInput);
        }
        let shape = parser.parse_type()?;
        parser.skip_ws();
        match parser.peek() {
            None => Ok(shape),
            Some((offset, found)) => Err(parser.unexpected(offset, found)),
        }
    }
}

impl TryFrom<String> for TypeShape {
    type Error = GrammarError;

    fn try_from(value: String) -> GrammarResult<Self> {
        value.parse()
    }
}

impl From<TypeShape> for String {
    fn from(shape: TypeShape) -> Self {
        shape.to_string()
    }
}

/// Recursive-descent reader for one type reference.
struct ShapeParser<'a> {
    input: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> ShapeParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn unexpected(&self, offset: usize, found: char) -> GrammarError {
        GrammarError::UnexpectedChar {
            input: self.input.to_string(),
            found,
            offset,
        }
    }

    fn end(&self, expected: &str) -> GrammarError {
        GrammarError::UnexpectedEnd {
            input: self.input.to_string(),
            expected: expected.to_string(),
        }
    }

    fn expect(&mut self, want: char) -> GrammarResult<()> {
        self.skip_ws();
        match self.peek() {
            Some((_, c)) if c == want => {
                self.pos += 1;
                Ok(())
            }
            Some((offset, found)) => Err(self.unexpected(offset, found)),
            None => Err(self.end(&format!("'{want}'"))),
        }
    }

    fn parse_type(&mut self) -> GrammarResult<TypeShape> {
        self.skip_ws();
        let name = self.parse_dotted_name()?;

        self.skip_ws();
        let mut shape = if self.peek().is_some_and(|(_, c)| c == '<') {
            self.pos += 1;
            let args = self.parse_type_arguments(&name)?;
            TypeShape::Generic(name, args)
        } else if PREDEFINED.contains(&name.as_str()) {
            TypeShape::Predefined(name)
        } else if name.contains('.') {
            TypeShape::Qualified(name)
        } else {
            TypeShape::Named(name)
        };

        // Nullable markers carry no phrasing of their own.
        self.skip_ws();
        if self.peek().is_some_and(|(_, c)| c == '?') {
            self.pos += 1;
        }

        loop {
            self.skip_ws();
            if !self.peek().is_some_and(|(_, c)| c == '[') {
                break;
            }
            self.pos += 1;
            self.skip_ws();
            while self.peek().is_some_and(|(_, c)| c == ',') {
                self.pos += 1;
                self.skip_ws();
            }
            self.expect(']')?;
            shape = TypeShape::array(shape);
        }

        Ok(shape)
    }

    fn parse_type_arguments(&mut self, name: &str) -> GrammarResult<Vec<TypeShape>> {
        self.skip_ws();
        if self.peek().is_some_and(|(_, c)| c == '>') {
            return Err(GrammarError::EmptyTypeArguments {
                name: name.to_string(),
            });
        }

        let mut args = vec![self.parse_type()?];
        loop {
            self.skip_ws();
            match self.peek() {
                Some((_, ',')) => {
                    self.pos += 1;
                    args.push(self.parse_type()?);
                }
                Some((_, '>')) => {
                    self.pos += 1;
                    return Ok(args);
                }
                Some((offset, found)) => return Err(self.unexpected(offset, found)),
                None => return Err(self.end("',' or '>'")),
            }
        }
    }

    fn parse_dotted_name(&mut self) -> GrammarResult<String> {
        let mut name = self.parse_identifier()?;
        while self.peek().is_some_and(|(_, c)| c == '.') {
            self.pos += 1;
            name.push('.');
            name.push_str(&self.parse_identifier()?);
        }
        Ok(name)
    }

    fn parse_identifier(&mut self) -> GrammarResult<String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|(_, c)| c.is_alphanumeric() || c == '_' || c == '@')
        {
            self.pos += 1;
        }
        if self.pos == start {
            return match self.peek() {
                Some((offset, found)) => Err(self.unexpected(offset, found)),
                None => Err(self.end("an identifier")),
            };
        }
        Ok(self.chars[start..self.pos].iter().map(|(_, c)| *c).collect())
    }
}
