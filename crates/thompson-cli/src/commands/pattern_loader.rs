use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A pattern ready to compile, plus where it came from for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPattern {
    pub text: String,
    pub path: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("pattern is required: use positional argument or -f/--file")]
    Missing,

    #[error("inputs must be given as arguments when the pattern is read from stdin")]
    StdinTaken,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolves the pattern from inline text or a file (`-` is stdin).
///
/// A single trailing line break is dropped from file and stdin content so a
/// pattern saved by an editor does not end in a literal newline.
pub fn load_pattern(
    pattern: Option<&str>,
    pattern_file: Option<&Path>,
) -> Result<LoadedPattern, LoadError> {
    if let Some(text) = pattern {
        return Ok(LoadedPattern {
            text: text.to_string(),
            path: None,
        });
    }

    let Some(path) = pattern_file else {
        return Err(LoadError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(LoadedPattern {
            text: trim_line_break(buf),
            path: Some("<stdin>".to_string()),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded pattern from {}", path.display());

    Ok(LoadedPattern {
        text: trim_line_break(content),
        path: Some(path.to_string_lossy().into_owned()),
    })
}

/// Whether `load_pattern` would consume stdin for these arguments.
pub fn pattern_reads_stdin(pattern: Option<&str>, pattern_file: Option<&Path>) -> bool {
    pattern.is_none() && pattern_file.is_some_and(|path| path.as_os_str() == "-")
}

fn trim_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_wins() {
        let loaded = load_pattern(Some("a|b"), Some(Path::new("ignored.re"))).unwrap();
        assert_eq!(loaded.text, "a|b");
        assert_eq!(loaded.path, None);
    }

    #[test]
    fn inline_text_is_untouched() {
        let loaded = load_pattern(Some("a\n"), None).unwrap();
        assert_eq!(loaded.text, "a\n");
    }

    #[test]
    fn missing() {
        let err = load_pattern(None, None).unwrap_err();
        assert!(matches!(err, LoadError::Missing));
    }

    #[test]
    fn unreadable_file() {
        let err = load_pattern(None, Some(Path::new("/nonexistent/pattern.re"))).unwrap_err();
        assert!(matches!(err, LoadError::File { .. }));
        assert!(err.to_string().starts_with("failed to read '/nonexistent/pattern.re': "));
    }

    #[test]
    fn stdin_pattern_detection() {
        assert!(pattern_reads_stdin(None, Some(Path::new("-"))));
        assert!(!pattern_reads_stdin(Some("a"), Some(Path::new("-"))));
        assert!(!pattern_reads_stdin(None, Some(Path::new("pattern.re"))));
        assert!(!pattern_reads_stdin(None, None));
    }

    #[test]
    fn trims_one_line_break() {
        assert_eq!(trim_line_break("ab\n".to_string()), "ab");
        assert_eq!(trim_line_break("ab\r\n".to_string()), "ab");
        assert_eq!(trim_line_break("ab\n\n".to_string()), "ab\n");
        assert_eq!(trim_line_break("ab".to_string()), "ab");
    }
}
