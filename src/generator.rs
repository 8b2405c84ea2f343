//! Declaration-level documentation generation.
//!
//! [`DocGenerator`] ties the grammar builders to one immutable [`Settings`]
//! value, with the word maps compiled once up front. It is `Send + Sync` and every method takes `&self`, so a single
//! generator can be shared across a rayon pool.

use crate::comment::{DocEntry, GeneratedComment};
use crate::declaration::{Declaration, MemberKind};
use crate::grammar::summary::{ShapeHints, SummaryBuilder, SummaryOptions};
use crate::grammar::{
    morpho, CommentBuilder, Phrase, Pluralizer, ReturnTypeBuilderOptions, Translator, TypeShape,
};
use crate::merge::{self, MergeOutcome, MergePolicy};
use crate::settings::Settings;

pub struct DocGenerator {
    settings: Settings,
    translator: Translator,
    pluralizer: Pluralizer,
}

impl DocGenerator {
    pub fn new(settings: Settings) -> Self {
        Self::with_pluralizer(settings, Pluralizer::new())
    }

    /// Use a pluralizer with extra irregulars registered.
    pub fn with_pluralizer(settings: Settings, pluralizer: Pluralizer) -> Self {
        let translator = Translator::new(&settings.word_maps);
        Self {
            settings,
            translator,
            pluralizer,
        }
    }

    fn comments(&self) -> CommentBuilder<'_> {
        CommentBuilder::new(&self.translator, &self.pluralizer)
    }

    fn summaries(&self) -> SummaryBuilder<'_> {
        SummaryBuilder::new(
            self.comments(),
            SummaryOptions {
                include_crefs: self.settings.include_crefs,
                exclude_async_suffix: self.settings.exclude_async_suffix,
                mention_return: self.settings.summary_mentions_return,
                use_natural_language: self.settings.use_natural_language_for_return_node,
            },
        )
    }

    /// Root options for a `<returns>` or `<value>` phrase of `decl`.
    pub fn return_options(&self, decl: &Declaration) -> ReturnTypeBuilderOptions {
        ReturnTypeBuilderOptions::default()
            .with_natural_language(self.settings.use_natural_language_for_return_node)
            .with_crefs(self.settings.include_crefs)
            .with_type_parameters(decl.type_parameters.clone())
    }

    /// Whether visibility settings allow documenting `decl`.
    ///
    /// Interface members are always eligible. With `public_members_only` only
    /// public declarations are; otherwise non-public fields additionally
    /// need `non_public_fields_enabled`.
    pub fn should_document(&self, decl: &Declaration) -> bool {
        if decl.is_owned_by_interface || decl.is_public {
            return true;
        }
        if self.settings.public_members_only {
            return false;
        }
        decl.kind != MemberKind::Field || self.settings.non_public_fields_enabled
    }

    /// Synthesize every section `decl` calls for.
    pub fn synthesize(&self, decl: &Declaration) -> GeneratedComment {
        let hints = ShapeHints {
            return_type: decl.shape.as_ref(),
            has_getter: decl.has_getter,
            has_setter: decl.has_setter,
        };
        let summaries = self.summaries();
        let summary = summaries.build_summary(decl.kind, &decl.name, hints);

        let type_params = decl
            .type_parameters
            .iter()
            .map(|name| DocEntry::new(name, summaries.build_type_parameter(name)))
            .collect();

        let params = decl
            .parameters
            .iter()
            .map(|p| DocEntry::new(&p.name, summaries.build_parameter(&p.name, p.shape.as_ref())))
            .collect();

        let describe = |shape: &TypeShape| {
            let phrase = self.comments().build_comment(shape, &self.return_options(decl));
            section_text(phrase)
        };

        let returns = match &decl.shape {
            Some(shape) if decl.returns_value() => describe(shape),
            _ => None,
        };

        let value = match &decl.shape {
            Some(shape)
                if decl.kind == MemberKind::Property
                    && self.settings.include_value_node_in_properties =>
            {
                describe(shape)
            }
            _ => None,
        };

        GeneratedComment {
            summary,
            returns,
            value,
            type_params,
            params,
        }
    }

    /// Synthesize and merge into the declaration's existing comment.
    pub fn document(&self, decl: &Declaration) -> MergeOutcome {
        let generated = self.synthesize(decl);
        let outcome = merge::merge(
            decl.existing.as_ref(),
            &generated,
            MergePolicy {
                preserve_existing_summary: self.settings.preserve_existing_summary,
                rebuild_sections: self.settings.rebuild_sections,
            },
        );
        tracing::debug!(
            kind = %decl.kind,
            name = %decl.name,
            action = ?outcome.action,
            "generated documentation"
        );
        outcome
    }
}

/// Terminate prose as a sentence; literals pass through, empty phrases drop.
fn section_text(phrase: Phrase) -> Option<String> {
    if phrase.is_empty() {
        return None;
    }
    if phrase.is_escaped_literal() {
        return Some(phrase.into_text());
    }
    Some(morpho::terminate(&phrase.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::DocComment;
    use crate::merge::MergeAction;

    fn shape(src: &str) -> TypeShape {
        src.parse().unwrap()
    }

    #[test]
    fn method_with_parameters_and_type_parameters() {
        let generator = DocGenerator::new(Settings::default());
        let decl = Declaration::new(MemberKind::Method, "GetUsersByRole")
            .with_type(shape("Task<List<User>>"))
            .with_parameter("roleName", Some(shape("string")))
            .with_parameter("includeInactive", Some(shape("bool")))
            .with_type_parameter("TKey");

        let comment = generator.synthesize(&decl);
        assert_eq!(comment.summary, "Get the users by role.");
        assert_eq!(
            comment.returns.as_deref(),
            Some("Returns a Task of a list of users.")
        );
        assert_eq!(comment.params[0], DocEntry::new("roleName", "The role name."));
        assert_eq!(
            comment.params[1],
            DocEntry::new("includeInactive", "If true, include inactive.")
        );
        assert_eq!(
            comment.type_params[0],
            DocEntry::new("TKey", "The type of the key.")
        );
    }

    #[test]
    fn leaf_returns_become_sentences() {
        let generator = DocGenerator::new(Settings::default());
        let decl = Declaration::new(MemberKind::Method, "UserCount").with_type(shape("int"));
        let comment = generator.synthesize(&decl);
        assert_eq!(comment.summary, "Gets the user count.");
        assert_eq!(comment.returns.as_deref(), Some("An integer."));
    }

    #[test]
    fn void_methods_have_no_returns() {
        let generator = DocGenerator::new(Settings::default());
        let decl = Declaration::new(MemberKind::Method, "Welcome").with_type(shape("void"));
        let comment = generator.synthesize(&decl);
        assert_eq!(comment.summary, "Executes the welcome.");
        assert!(comment.returns.is_none());
    }

    #[test]
    fn type_parameter_returns_use_typeparamref() {
        let generator = DocGenerator::new(Settings::default());
        let decl = Declaration::new(MemberKind::Method, "Resolve")
            .with_type(shape("T"))
            .with_type_parameter("T");
        assert_eq!(
            generator.synthesize(&decl).returns.as_deref(),
            Some("A <typeparamref name=\"T\"/>.")
        );
    }

    #[test]
    fn property_value_node_is_optional() {
        let decl = Declaration::new(MemberKind::Property, "Tags")
            .with_type(shape("List<string>"))
            .with_setter(true);

        let plain = DocGenerator::new(Settings::default()).synthesize(&decl);
        assert_eq!(plain.summary, "Gets or sets the tags.");
        assert!(plain.value.is_none());
        assert!(plain.returns.is_none());

        let settings = Settings {
            include_value_node_in_properties: true,
            ..Settings::default()
        };
        let with_value = DocGenerator::new(settings).synthesize(&decl);
        assert_eq!(with_value.value.as_deref(), Some("A list of strings."));
    }

    #[test]
    fn literal_mode_returns_cdata() {
        let settings = Settings {
            use_natural_language_for_return_node: false,
            ..Settings::default()
        };
        let decl = Declaration::new(MemberKind::Method, "Lookup")
            .with_type(shape("Dictionary<string, int>"));
        assert_eq!(
            DocGenerator::new(settings).synthesize(&decl).returns.as_deref(),
            Some("<![CDATA[Dictionary<string, int>]]>")
        );
    }

    #[test]
    fn visibility_gating() {
        let private_field = Declaration::new(MemberKind::Field, "_cache").with_visibility(false);
        let private_method = Declaration::new(MemberKind::Method, "Reset").with_visibility(false);
        let mut interface_member = private_method.clone();
        interface_member.is_owned_by_interface = true;

        let default = DocGenerator::new(Settings::default());
        assert!(!default.should_document(&private_field));
        assert!(default.should_document(&private_method));

        let fields = DocGenerator::new(Settings {
            non_public_fields_enabled: true,
            ..Settings::default()
        });
        assert!(fields.should_document(&private_field));

        let public_only = DocGenerator::new(Settings {
            public_members_only: true,
            non_public_fields_enabled: true,
            ..Settings::default()
        });
        assert!(!public_only.should_document(&private_field));
        assert!(!public_only.should_document(&private_method));
        assert!(public_only.should_document(&interface_member));
    }

    #[test]
    fn document_preserves_a_written_summary() {
        let generator = DocGenerator::new(Settings::default());
        let decl = Declaration::new(MemberKind::Method, "GetUser")
            .with_type(shape("User"))
            .with_existing(DocComment {
                summary: Some("Fetches one user.".into()),
                ..Default::default()
            });
        let outcome = generator.document(&decl);
        assert_eq!(outcome.action, MergeAction::Update);
        assert_eq!(outcome.comment.summary.as_deref(), Some("Fetches one user."));
        assert_eq!(outcome.comment.returns.as_deref(), Some("A User."));
    }

    #[test]
    fn rebuild_replaces_written_sections_but_not_the_summary() {
        let decl = Declaration::new(MemberKind::Method, "Resolve")
            .with_type(shape("T"))
            .with_type_parameter("T")
            .with_existing(DocComment {
                summary: Some("Resolves a service.".into()),
                returns: Some("Whatever.".into()),
                type_params: vec![DocEntry::new("T", "Stale.")],
                ..Default::default()
            });

        let kept = DocGenerator::new(Settings::default()).document(&decl);
        assert_eq!(kept.comment.returns.as_deref(), Some("Whatever."));
        assert_eq!(
            kept.comment.type_param("T").map(|p| p.text.as_str()),
            Some("Stale.")
        );

        let rebuilt = DocGenerator::new(Settings {
            rebuild_sections: true,
            ..Settings::default()
        })
        .document(&decl);
        assert_eq!(rebuilt.comment.summary.as_deref(), Some("Resolves a service."));
        assert_eq!(
            rebuilt.comment.returns.as_deref(),
            Some("A <typeparamref name=\"T\"/>.")
        );
        assert_eq!(
            rebuilt.comment.type_param("T").map(|p| p.text.as_str()),
            Some("The type parameter.")
        );
    }

    #[test]
    fn custom_irregulars_reach_list_phrases() {
        let generator = DocGenerator::with_pluralizer(
            Settings::default(),
            Pluralizer::new().with_irregular("cactus", "cacti"),
        );
        let decl = Declaration::new(MemberKind::Method, "Garden").with_type(shape("List<Cactus>"));
        assert_eq!(
            generator.synthesize(&decl).returns.as_deref(),
            Some("A list of cacti.")
        );
    }
}
