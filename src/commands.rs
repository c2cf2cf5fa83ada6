//! CLI command handlers.

use anyhow::{bail, Context};
use msgsplit_core::config::{Config, Platform, SplitConfig};
use msgsplit_split::Splitter;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;

/// Options for the `split` command.
#[derive(Debug, Default)]
pub struct SplitOptions {
    pub file: Option<PathBuf>,
    pub limit: Option<usize>,
    pub platform: Option<Platform>,
    pub json: bool,
}

/// Resolve the split policy: `--limit` beats `--platform`, which beats the config file.
pub fn resolve_split_config(cfg: &Config, opts: &SplitOptions) -> SplitConfig {
    let mut split = cfg.effective_split();
    if let Some(platform) = opts.platform {
        split.limit = platform.max_len();
    }
    if let Some(limit) = opts.limit {
        split.limit = limit;
    }
    split
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Split the input and write the chunks to `out`.
pub fn split(cfg: &Config, opts: &SplitOptions, out: &mut impl Write) -> anyhow::Result<()> {
    if opts.limit == Some(0) {
        bail!("--limit must be greater than zero");
    }

    let text = read_input(opts.file.as_ref())?;
    let split_cfg = resolve_split_config(cfg, opts);
    let splitter = Splitter::new(split_cfg)?;

    let chunks = splitter.split(&text);
    info!(
        "split {} bytes into {} chunk(s) (limit {})",
        text.len(),
        chunks.len(),
        split_cfg.limit
    );

    write_chunks(&chunks, opts.json, out)
}

/// Render chunks either as a JSON array or as text with a header per chunk.
pub fn write_chunks(chunks: &[&str], json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, chunks)?;
        writeln!(out)?;
        return Ok(());
    }

    let total = chunks.len();
    for (i, chunk) in chunks.iter().enumerate() {
        writeln!(out, "--- chunk {}/{} ({} bytes) ---", i + 1, total, chunk.len())?;
        writeln!(out, "{chunk}")?;
    }
    Ok(())
}

/// Print the effective configuration.
pub fn show_config(cfg: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let rendered = toml::to_string_pretty(cfg).context("failed to render config")?;
    write!(out, "{rendered}")?;
    writeln!(out, "# effective limit: {}", cfg.effective_limit())?;
    Ok(())
}
