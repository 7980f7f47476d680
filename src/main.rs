use anyhow::{Context, Result};
use chatmark::{Config, Conversation, MarkdownRenderer, pages, write_css_assets};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose);
    config.validate()?;

    let source = read_source(&config)?;
    debug!(bytes = source.len(), "read input");

    let html = generate(&config, &source)?;

    match &config.output {
        Some(path) => {
            write_output(path, &html, config.wants_page())?;
            info!("Generated: {}", path.display());

            if config.open
                && let Err(e) = open::that(path)
            {
                warn!("Failed to open {}: {:#}", path.display(), e);
            }
        }
        None => {
            io::stdout()
                .write_all(html.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Reads markdown or transcript text from the configured input.
///
/// # Errors
///
/// Returns error if stdin or the input file cannot be read
fn read_source(config: &Config) -> Result<String> {
    if config.reads_stdin() {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }

    fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read input: {}", config.input.display()))
}

/// Produces the HTML output for the configured mode.
///
/// Transcript input becomes a full conversation page. Markdown input becomes
/// a fragment, or a standalone document when `--page` is set.
///
/// # Errors
///
/// Returns error if transcript JSON is invalid
fn generate(config: &Config, source: &str) -> Result<String> {
    if config.transcript {
        let conversation = Conversation::from_json(source)?;
        debug!(messages = conversation.len(), "parsed transcript");
        return Ok(pages::transcript::generate(&conversation, &config.title).into_string());
    }

    let fragment = MarkdownRenderer::new().render(source);
    if config.page {
        Ok(pages::document::generate(&fragment, &config.title).into_string())
    } else {
        Ok(fragment)
    }
}

/// Writes HTML to `path`, creating parent directories.
///
/// Full pages also get the bundled stylesheet beside them.
///
/// # Errors
///
/// Returns error if directories or files cannot be written
fn write_output(path: &Path, html: &str, with_assets: bool) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new(""));
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    if with_assets {
        write_css_assets(parent).context("Failed to write CSS assets")?;
    }

    Ok(())
}
