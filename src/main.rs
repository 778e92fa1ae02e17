//! skyslot CLI - render Bluesky post embeds

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;

use skyslot::acquire::{DataAcquirer, HttpXrpcClient};
use skyslot::binding::SlotValue;
use skyslot::config::SkyslotConfig;
use skyslot::embed::{HostElement, PostEmbed};
use skyslot::error::{FixSuggestion, SkyslotError};
use skyslot::template::{
    load_file, register_default, validate_tag_name, TemplateHost, TemplateRegistry, DEFAULT_TAG,
};
use skyslot::util::path;
use skyslot::ToHtml;

#[derive(Parser)]
#[command(name = "skyslot")]
#[command(about = "Render Bluesky posts into declarative HTML templates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a post and print the bound template as HTML
    Render {
        /// Post URL, e.g. https://bsky.app/profile/<user>/post/<id>
        href: String,

        /// Host tag name (default template is <tag>-template)
        #[arg(long, default_value = DEFAULT_TAG)]
        tag: String,

        /// Template id to use instead of <tag>-template
        #[arg(short, long)]
        template: Option<String>,

        /// YAML file with extra templates
        #[arg(long)]
        templates: Option<PathBuf>,

        /// XRPC base URL (overrides config and SKYSLOT_API_BASE)
        #[arg(long)]
        api_base: Option<String>,

        /// Config file (default ~/.config/skyslot/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Resolve a path expression against a JSON file
    Resolve {
        /// Path expression, e.g. record.text or posts[0].likeCount
        expression: String,

        /// JSON file to resolve against
        file: PathBuf,
    },

    /// List registered template ids
    Templates {
        /// YAML file with extra templates
        #[arg(long)]
        templates: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not present)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries the rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            href,
            tag,
            template,
            templates,
            api_base,
            config,
        } => render(href, tag, template, templates, api_base, config).await,
        Commands::Resolve { expression, file } => resolve(&expression, &file).await,
        Commands::Templates { templates } => list_templates(templates),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

/// Registry with file templates first, so they can shadow the built-in id
fn build_registry(templates: Option<PathBuf>) -> Result<Arc<TemplateRegistry>, SkyslotError> {
    let registry = TemplateRegistry::global();
    if let Some(file) = templates {
        load_file(file, &registry)?;
    }
    register_default(&registry)?;
    Ok(registry)
}

async fn render(
    href: String,
    tag: String,
    template: Option<String>,
    templates: Option<PathBuf>,
    api_base: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<(), SkyslotError> {
    let mut config = match config_path {
        Some(path) => SkyslotConfig::load_from(&path)?,
        None => SkyslotConfig::load()?,
    }
    .with_env()?;
    if api_base.is_some() {
        config.api_base = api_base;
    }

    validate_tag_name(&tag)?;
    let host = TemplateHost::new(build_registry(templates)?);

    let client = HttpXrpcClient::new(&config)?;
    let acquirer = DataAcquirer::new(Arc::new(client)).with_api_base(config.api_base.clone());

    let mut embed = PostEmbed::new(HostElement::new(href).with_tag(tag).with_template(template));
    let rendered = embed.mount(&host, &acquirer).await?;

    println!("{}", rendered.fragment.to_html_string());
    Ok(())
}

async fn resolve(expression: &str, file: &Path) -> Result<(), SkyslotError> {
    // Read async to not block runtime
    let text = tokio::fs::read_to_string(file).await?;
    let data: serde_json::Value = serde_json::from_str(&text)?;

    let value = SlotValue::classify(path::resolve(expression, &data));
    println!("{}", value.display());
    Ok(())
}

fn list_templates(templates: Option<PathBuf>) -> Result<(), SkyslotError> {
    let registry = build_registry(templates)?;
    for id in registry.ids() {
        println!("{} {}", "•".cyan(), id);
    }
    Ok(())
}
