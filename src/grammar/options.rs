//! Per-call options for type-shape comment synthesis.
//!
//! Options are values: recursion never mutates the caller's copy, it derives
//! a new one with [`ReturnTypeBuilderOptions::nested`] and the `with_*`
//! overrides, so sibling calls cannot observe each other's settings.

/// Default phrasing for two-argument dictionaries; `{0}` is the key, `{1}` the value.
pub const DEFAULT_DICTIONARY_TEMPLATE: &str =
    "a dictionary with a key of type {0} and a value of type {1}";

/// How a wrapper (Task-like) phrase opens when it is the outermost shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnsStyle {
    /// "Returns a Task of type string." as a sentence of its own.
    #[default]
    Leading,
    /// "and return a Task of type string", appended to another sentence.
    Chained,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnTypeBuilderOptions {
    /// True only for the outermost call of a recursion chain.
    pub is_root_return_type: bool,
    /// Generic and array shapes become prose; otherwise an escaped literal.
    pub use_natural_language: bool,
    /// Wrap type names in `<see cref="..."/>`.
    pub include_crefs: bool,
    /// Prefix leaf phrases with "a"/"an"/"the".
    pub include_starting_word: bool,
    /// Capitalize the first letter of the result.
    pub use_proper_casing: bool,
    pub returns_style: ReturnsStyle,
    /// Type parameters of the enclosing generic method.
    pub type_parameters: Vec<String>,
    pub dictionary_template: String,
}

impl Default for ReturnTypeBuilderOptions {
    fn default() -> Self {
        Self {
            is_root_return_type: true,
            use_natural_language: true,
            include_crefs: false,
            include_starting_word: true,
            use_proper_casing: true,
            returns_style: ReturnsStyle::Leading,
            type_parameters: Vec::new(),
            dictionary_template: DEFAULT_DICTIONARY_TEMPLATE.to_string(),
        }
    }
}

impl ReturnTypeBuilderOptions {
    /// Options for a recursive call: not the root, no casing of its own.
    pub fn nested(&self) -> Self {
        Self {
            is_root_return_type: false,
            use_proper_casing: false,
            ..self.clone()
        }
    }

    pub fn with_natural_language(mut self, on: bool) -> Self {
        self.use_natural_language = on;
        self
    }

    pub fn with_crefs(mut self, on: bool) -> Self {
        self.include_crefs = on;
        self
    }

    pub fn with_starting_word(mut self, on: bool) -> Self {
        self.include_starting_word = on;
        self
    }

    pub fn with_proper_casing(mut self, on: bool) -> Self {
        self.use_proper_casing = on;
        self
    }

    pub fn with_returns_style(mut self, style: ReturnsStyle) -> Self {
        self.returns_style = style;
        self
    }

    pub fn with_type_parameters(mut self, names: Vec<String>) -> Self {
        self.type_parameters = names;
        self
    }

    pub fn with_dictionary_template(mut self, template: impl Into<String>) -> Self {
        self.dictionary_template = template.into();
        self
    }

    /// Whether `name` refers to one of the enclosing method's type parameters.
    pub fn is_type_parameter(&self, name: &str) -> bool {
        self.type_parameters.iter().any(|t| t == name)
    }
}
