//! Line-ending bookkeeping.
//!
//! Matching runs on `\n`-only text. Before writing back, every line the
//! batch left alone gets its original terminator again; inserted and
//! rewritten lines take the file's most common terminator.

use similar::{ChangeTag, TextDiff};

/// Terminator of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// A lone `\r`.
    Cr,
}

impl LineEnding {
    fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// Per-line terminators of the original content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEndings {
    lines: Vec<LineEnding>,
    dominant: Option<LineEnding>,
}

impl LineEndings {
    /// Record the terminator of every line of `raw`.
    #[must_use]
    pub fn scan(raw: &str) -> Self {
        let bytes = raw.as_bytes();
        let mut lines = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    lines.push(LineEnding::CrLf);
                    i += 1;
                }
                b'\r' => lines.push(LineEnding::Cr),
                b'\n' => lines.push(LineEnding::Lf),
                _ => {}
            }
            i += 1;
        }

        let count = |e: LineEnding| lines.iter().filter(|&&l| l == e).count();
        let dominant = [LineEnding::Lf, LineEnding::CrLf, LineEnding::Cr]
            .into_iter()
            .filter(|&e| count(e) > 0)
            .max_by_key(|&e| (count(e), e == LineEnding::Lf));
        Self { lines, dominant }
    }

    /// `true` when every line already ends in `\n`.
    #[must_use]
    pub fn is_lf_only(&self) -> bool {
        self.lines.iter().all(|&e| e == LineEnding::Lf)
    }

    /// Terminator used for lines that did not exist in the original.
    #[must_use]
    pub fn dominant(&self) -> LineEnding {
        self.dominant.unwrap_or(LineEnding::Lf)
    }

    /// Re-terminate `modified`, a `\n`-only rewrite of `original`.
    ///
    /// `original` must be the normalized form of the text this value was
    /// scanned from.
    #[must_use]
    pub fn restore(&self, original: &str, modified: &str) -> String {
        if self.is_lf_only() {
            return modified.to_string();
        }

        let fallback = self.dominant();
        let mut out = String::with_capacity(modified.len() + self.lines.len());
        for change in TextDiff::from_lines(original, modified).iter_all_changes() {
            let ending = match change.tag() {
                ChangeTag::Delete => continue,
                ChangeTag::Equal => change
                    .old_index()
                    .and_then(|i| self.lines.get(i).copied())
                    .unwrap_or(fallback),
                ChangeTag::Insert => fallback,
            };
            let value = change.value();
            match value.strip_suffix('\n') {
                Some(line) => {
                    out.push_str(line);
                    out.push_str(ending.as_str());
                }
                None => out.push_str(value),
            }
        }
        out
    }
}

/// Convert `\r\n` and lone `\r` to `\n`.
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(raw: &str, edit: impl Fn(&str) -> String) -> String {
        let endings = LineEndings::scan(raw);
        let original = normalize_line_endings(raw);
        endings.restore(&original, &edit(&original))
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_line_endings("plain"), "plain");
    }

    #[test]
    fn test_scan() {
        let endings = LineEndings::scan("a\r\nb\nc\rd");
        assert_eq!(
            endings.lines,
            vec![LineEnding::CrLf, LineEnding::Lf, LineEnding::Cr]
        );
        assert!(!endings.is_lf_only());
        assert!(LineEndings::scan("a\nb").is_lf_only());
        assert!(LineEndings::scan("").is_lf_only());
    }

    #[test]
    fn test_dominant_prefers_majority_then_lf() {
        assert_eq!(LineEndings::scan("a\r\nb\r\nc\n").dominant(), LineEnding::CrLf);
        assert_eq!(LineEndings::scan("a\r\nb\n").dominant(), LineEnding::Lf);
        assert_eq!(LineEndings::scan("no newline").dominant(), LineEnding::Lf);
    }

    #[test]
    fn test_mixed_file_keeps_untouched_lines() {
        let out = roundtrip("class M {\r\n    int x;\n    int y;\n}\n", |s| {
            s.replace("int x;", "int z;")
        });
        assert_eq!(out, "class M {\r\n    int z;\n    int y;\n}\n");
    }

    #[test]
    fn test_crlf_file_inserted_lines_use_crlf() {
        let out = roundtrip("a\r\nb\r\n", |s| s.replace("a\n", "a\nnew\n"));
        assert_eq!(out, "a\r\nnew\r\nb\r\n");
    }

    #[test]
    fn test_lone_cr_file_stays_cr() {
        let out = roundtrip("a\rb\rc", |s| s.replace('b', "B"));
        assert_eq!(out, "a\rB\rc");
    }
}
