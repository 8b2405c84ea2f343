//! autodoc CLI: natural-language XML documentation comments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use miette::Result;

use autodoc::batch;
use autodoc::declaration::{Declaration, MemberKind};
use autodoc::generator::DocGenerator;
use autodoc::grammar::{
    self, CommentBuilder, Pluralizer, ReturnTypeBuilderOptions, Translator, TypeShape,
};
use autodoc::settings::Settings;

#[derive(Parser)]
#[command(name = "autodoc", version, about = "Natural-language XML documentation comments")]
struct Cli {
    /// Settings file (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split an identifier into words.
    Split {
        /// Identifier, e.g. "getHTTPCode".
        name: String,
    },

    /// Describe a type reference as a returns phrase.
    Describe {
        /// Type reference, e.g. "Dictionary<int, List<string>>".
        #[arg(value_name = "TYPE")]
        shape: String,

        /// Link type names with <see cref=".."/>.
        #[arg(long)]
        crefs: bool,

        /// Escape generic and array types as CDATA instead of prose.
        #[arg(long)]
        literal: bool,
    },

    /// Build the summary sentence for a member.
    Summary {
        /// Member kind: class, interface, enum, struct, record, field,
        /// property, method or constructor.
        #[arg(long)]
        kind: MemberKind,

        /// Member name.
        name: String,

        /// Return type (methods) or declared type (properties, fields).
        #[arg(long = "returns", value_name = "TYPE")]
        shape: Option<String>,

        /// The property has a setter.
        #[arg(long)]
        setter: bool,
    },

    /// Generate comments for a JSON array of declarations.
    Generate {
        /// Path to the declarations file, or "-" for stdin.
        file: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
        format: OutputFormat,

        /// Regenerate returns, value and parameter text already written.
        #[arg(long)]
        rebuild: bool,
    },

    /// Print the effective settings as TOML.
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Xml,
    Json,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match cli.command {
        Commands::Split { name } => {
            println!("{}", grammar::split(&name).join(" "));
        }

        Commands::Describe {
            shape,
            crefs,
            literal,
        } => {
            let shape: TypeShape = shape.parse()?;
            let translator = Translator::new(&settings.word_maps);
            let pluralizer = Pluralizer::new();
            let builder = CommentBuilder::new(&translator, &pluralizer);
            let options = ReturnTypeBuilderOptions::default()
                .with_crefs(crefs || settings.include_crefs)
                .with_natural_language(
                    !literal && settings.use_natural_language_for_return_node,
                );
            println!("{}", builder.build_comment(&shape, &options).text);
        }

        Commands::Summary {
            kind,
            name,
            shape,
            setter,
        } => {
            let shape: Option<TypeShape> = shape.map(|s| s.parse()).transpose()?;
            let generator = DocGenerator::new(settings);
            let decl = Declaration {
                shape,
                has_setter: setter,
                ..Declaration::new(kind, name)
            };
            println!("{}", generator.synthesize(&decl).summary);
        }

        Commands::Generate {
            file,
            format,
            rebuild,
        } => {
            let declarations = batch::read_declarations(&file)?;
            let generator = DocGenerator::new(Settings {
                rebuild_sections: rebuild || settings.rebuild_sections,
                ..settings
            });
            let entries = batch::generate_all(&generator, &declarations);
            match format {
                OutputFormat::Xml => print!("{}", batch::render_xml(&entries)),
                OutputFormat::Json => println!("{}", batch::render_json(&entries)?),
            }
        }

        Commands::Config => {
            print!("{}", settings.to_toml_string()?);
        }
    }

    Ok(())
}
