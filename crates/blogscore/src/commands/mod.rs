//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod headline;
pub mod info;
pub mod meta;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;

/// Read a file, refusing it up front if it exceeds `max_bytes`.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Split a comma-separated keyword list, trimming and dropping blanks.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn keywords_are_trimmed() {
        assert_eq!(parse_keywords(" rust , async,, seo "), vec!["rust", "async", "seo"]);
        assert!(parse_keywords("").is_empty());
    }

    #[test]
    fn oversized_input_is_rejected_before_reading() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("big.md")).unwrap();
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert_eq!(read_input_file(&path, None).unwrap().len(), 64);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input_file(Utf8Path::new("/nonexistent/post.md"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/post.md"));
    }
}
