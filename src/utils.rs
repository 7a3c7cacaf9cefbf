//! Small text and file helpers shared across the crate.

use crate::Result;
use anyhow::Context;
use std::path::Path;

/// Coerces `text` into the printable range of the document encoding (Latin-1).
///
/// Em and en dashes become plain hyphens; anything else outside Latin-1 becomes `?`.
pub(crate) fn clean_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' => '-',
            c if (c as u32) < 256 => c,
            _ => '?',
        })
        .collect()
}

/// Makes an organization name usable as a file name component.
pub(crate) fn sanitize_file_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// Write a file.
pub(crate) fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, contents)
        .context(format!("Unable to write to {}", path.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_normalizes_dashes() {
        assert_eq!(clean_text("Anatomy – Vol I — 2nd Ed"), "Anatomy - Vol I - 2nd Ed");
    }

    #[test]
    fn test_clean_text_replaces_non_latin1() {
        assert_eq!(clean_text("Caf\u{e9} \u{20b9}100"), "Caf\u{e9} ?100");
    }

    #[test]
    fn test_clean_text_passthrough() {
        assert_eq!(clean_text("Plain text."), "Plain text.");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("St Mary College"), "St_Mary_College");
    }
}
