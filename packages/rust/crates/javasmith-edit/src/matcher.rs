//! Two-tier text matching.
//!
//! Tier 1 replaces the first literal occurrence. Tier 2 slides a window of
//! `old`'s line count over the content and compares lines with surrounding
//! whitespace trimmed, then re-indents the replacement to fit the block it
//! replaces.

use crate::types::MatchTier;

/// One successful replacement.
#[derive(Debug)]
pub(crate) struct Replacement {
    pub(crate) content: String,
    pub(crate) tier: MatchTier,
    pub(crate) line: usize,
}

/// Replace the first match of `old` in `content` with `new`.
///
/// All three inputs must already be `\n`-normalized. Returns `None` when
/// neither tier matches.
pub(crate) fn replace_first(content: &str, old: &str, new: &str) -> Option<Replacement> {
    if let Some(pos) = content.find(old) {
        let mut out = String::with_capacity(content.len() + new.len());
        out.push_str(&content[..pos]);
        out.push_str(new);
        out.push_str(&content[pos + old.len()..]);
        return Some(Replacement {
            content: out,
            tier: MatchTier::Exact,
            line: content[..pos].matches('\n').count() + 1,
        });
    }
    replace_block(content, old, new)
}

fn replace_block(content: &str, old: &str, new: &str) -> Option<Replacement> {
    let old_lines: Vec<&str> = old.lines().collect();
    let content_lines: Vec<&str> = content.split('\n').collect();
    let width = old_lines.len();
    if width == 0 || content_lines.len() < width {
        return None;
    }

    let start = (0..=content_lines.len() - width).find(|&i| {
        content_lines[i..i + width]
            .iter()
            .zip(&old_lines)
            .all(|(have, want)| have.trim() == want.trim())
    })?;

    let window = &content_lines[start..start + width];
    let new_lines: Vec<&str> = new.lines().collect();
    let replacement = reindent(window, &old_lines, &new_lines);

    let mut out: Vec<&str> = Vec::with_capacity(content_lines.len() - width + replacement.len());
    out.extend_from_slice(&content_lines[..start]);
    out.extend(replacement.iter().map(String::as_str));
    out.extend_from_slice(&content_lines[start + width..]);

    Some(Replacement {
        content: out.join("\n"),
        tier: MatchTier::WhitespaceTolerant,
        line: start + 1,
    })
}

/// Fit `new_lines` into the indentation of the matched `window`.
///
/// Line 0 takes the window's leading whitespace. Line `j > 0` takes the
/// indentation of `window[j]` plus however much further `new_lines[j]` is
/// indented than `old_lines[j]`. Blank lines and lines past the end of the
/// old block are kept verbatim.
fn reindent(window: &[&str], old_lines: &[&str], new_lines: &[&str]) -> Vec<String> {
    let base = leading_whitespace(window[0]);

    new_lines
        .iter()
        .enumerate()
        .map(|(j, line)| {
            if line.trim().is_empty() {
                return (*line).to_string();
            }
            if j == 0 {
                return format!("{base}{}", line.trim_start());
            }
            match (window.get(j), old_lines.get(j)) {
                (Some(have), Some(old)) if !old.trim().is_empty() => {
                    let delta = indent_width(line).saturating_sub(indent_width(old));
                    format!(
                        "{}{}{}",
                        leading_whitespace(have),
                        " ".repeat(delta),
                        line.trim_start()
                    )
                }
                _ => (*line).to_string(),
            }
        })
        .collect()
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

fn indent_width(line: &str) -> usize {
    leading_whitespace(line).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_first_occurrence_only() {
        let r = replace_first("x = 1;\nx = 1;\n", "x = 1;", "x = 2;").expect("match");
        assert_eq!(r.content, "x = 2;\nx = 1;\n");
        assert_eq!(r.tier, MatchTier::Exact);
        assert_eq!(r.line, 1);
    }

    #[test]
    fn test_block_reindents_to_window() {
        let content = "  void f() {\n    return 1;\n  }";
        let r = replace_first(
            content,
            "void f() {\nreturn 1;\n}",
            "void f() {\nreturn 2;\n}",
        )
        .expect("match");
        assert_eq!(r.tier, MatchTier::WhitespaceTolerant);
        assert_eq!(r.content, "  void f() {\n    return 2;\n  }");
    }

    #[test]
    fn test_block_keeps_relative_indent_delta() {
        let content = "\tif (a) {\n\t\tgo();\n\t}\n";
        let r = replace_first(
            content,
            "if (a) {\ngo();\n}",
            "if (a) {\n    go();\n}",
        )
        .expect("match");
        assert_eq!(r.content, "\tif (a) {\n\t\t    go();\n\t}\n");
    }

    #[test]
    fn test_block_extra_lines_verbatim() {
        let content = "class A {\n    int a;\n}\n";
        let r = replace_first(content, "int a;", "int a;\nint b;").expect("exact match");
        assert_eq!(r.tier, MatchTier::Exact);

        let r = replace_first(content, "  int a;  \n}", "int a;\n}\nclass B {}").expect("block");
        assert_eq!(r.content, "class A {\n    int a;\n}\nclass B {}\n");
        assert_eq!(r.line, 2);
    }

    #[test]
    fn test_block_deletion() {
        let content = "a\n    b();\n    c();\nd";
        let r = replace_first(content, "b();\nc();", "").expect("match");
        assert_eq!(r.content, "a\nd");
    }

    #[test]
    fn test_no_match() {
        assert!(replace_first("class A {}", "class B", "class C").is_none());
        assert!(replace_first("one line", "one\nline\nmore", "x").is_none());
    }
}
