//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;
pub mod transform;

/// Read command input from a file, or from stdin when `path` is `None` or `-`,
/// rejecting anything larger than `max_bytes`.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => read_input_file(path, max_bytes),
        _ => read_stdin(max_bytes),
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if !usize::try_from(size).is_ok_and(|size| size <= max) {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_bounded(std::io::stdin().lock(), max_bytes, "stdin")
}

/// Read all of `reader`, failing once more than `max_bytes` arrive.
///
/// The size check happens on raw bytes, before UTF-8 decoding.
fn read_bounded(
    reader: impl Read,
    max_bytes: Option<usize>,
    source: &str,
) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            // One byte past the limit is enough to know it was exceeded.
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(limit)
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {source}"))?;
            if bytes.len() > max {
                anyhow::bail!("input too large: {source} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {source}"))?;
        }
    }
    String::from_utf8(bytes).with_context(|| format!("{source} is not valid UTF-8"))
}
