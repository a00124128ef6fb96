mod logging;

use anyhow::Context as _;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use soltok_errors::Renderer;
use soltok_ide::{Analysis, PositionEncoding, SemanticTokens, SemanticTokensConfig};
use soltok_syntax::{LoadedSource, NodeRef};

/// Semantic tokens for Solidity sources compiled by solc.
#[derive(Parser)]
#[command(version)]
enum Options {
    /// Prints the semantic tokens of a source file.
    Tokens {
        source: Utf8PathBuf,
        /// Compact AST of `source`, bare or inside `solc --standard-json` output.
        #[arg(long)]
        ast: Utf8PathBuf,
        /// Source to pick out of compiler output with several sources.
        #[arg(long)]
        source_name: Option<String>,
        #[arg(long, value_enum, default_value_t = Encoding::Utf16)]
        position_encoding: Encoding,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Prints the token legend.
    Legend,
    /// Prints the outline of a tree.
    Dump {
        ast: Utf8PathBuf,
        #[arg(long)]
        source_name: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Encoding {
    #[value(name = "utf-8")]
    Utf8,
    #[value(name = "utf-16")]
    Utf16,
    #[value(name = "utf-32")]
    Utf32,
}

impl From<Encoding> for PositionEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Utf8 => Self::Utf8,
            Encoding::Utf16 => Self::Utf16,
            Encoding::Utf32 => Self::Utf32,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// The encoded integer array.
    Json,
    /// One decoded token per line.
    Table,
}

fn main() -> anyhow::Result<()> {
    logging::init_logging()?;

    match Options::parse() {
        Options::Tokens { source, ast, source_name, position_encoding, format } => {
            let text = read(&source)?;
            let loaded = load(&ast, source_name.as_deref())?;
            let declarations = loaded.declarations();

            let analysis = Analysis::new(SemanticTokensConfig {
                position_encoding: position_encoding.into(),
            });
            let file = analysis.add_file(source, text);
            let path = file.path(analysis.db()).as_str();

            let tokens = match analysis.semantic_tokens_with(file, &loaded.unit, &declarations) {
                Ok(tokens) => tokens,
                Err(error) => {
                    let diagnostic = error.to_diagnostic();
                    let text = file.text(analysis.db());
                    eprintln!("{}", diagnostic.render(&Renderer::styled(), path, text));
                    anyhow::bail!("failed to build semantic tokens for `{path}`");
                }
            };

            print_tokens(&tokens, format)
        }
        Options::Legend => {
            let legend = serde_json::to_string_pretty(&soltok_ide::lsp::legend())?;
            println!("{legend}");
            Ok(())
        }
        Options::Dump { ast, source_name } => {
            let loaded = load(&ast, source_name.as_deref())?;
            dump(NodeRef::SourceUnit(&loaded.unit), 0);
            Ok(())
        }
    }
}

fn read(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))
}

fn load(path: &Utf8Path, source_name: Option<&str>) -> anyhow::Result<LoadedSource> {
    let json = read(path)?;
    soltok_syntax::load(&json, source_name)
        .with_context(|| format!("failed to load the AST in `{path}`"))
}

fn print_tokens(tokens: &SemanticTokens, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(tokens.data())?),
        Format::Table => {
            for token in tokens.decode() {
                println!("{token}");
            }
        }
    }
    Ok(())
}

fn dump(node: NodeRef<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.range() {
        Some(range) => println!("{indent}{} {range:?}", node.kind_name()),
        None => println!("{indent}{}", node.kind_name()),
    }
    for child in node.children() {
        dump(child, depth + 1);
    }
}
