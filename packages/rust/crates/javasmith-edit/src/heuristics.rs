//! Line-level heuristics for locating type declarations.
//!
//! This is regex matching on single lines, not parsing. Known false
//! negatives: declarations whose keyword and name are split across lines,
//! names with non-ASCII characters, and modifiers outside the list below.
//! Known false positives: a matching line inside a block comment or a text
//! block.

use regex::Regex;

use crate::error::EditError;

const MODIFIERS: &str =
    "public|protected|private|abstract|final|static|sealed|non-sealed|strictfp";
const KINDS: &str = "class|interface|enum|record|@interface";

/// Detects the line that declares a named class, interface, enum or record.
#[derive(Debug, Clone)]
pub struct ClassDeclarationMatcher {
    pattern: Regex,
}

/// Where a declaration was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationSite {
    /// Zero-based line index.
    pub line: usize,
    /// Byte offset just past the type name on that line.
    pub end: usize,
}

impl ClassDeclarationMatcher {
    /// Build a matcher for the type called `name`.
    ///
    /// # Errors
    /// `Pattern` if the generated expression fails to compile.
    pub fn new(name: &str) -> Result<Self, EditError> {
        let source = format!(
            r"^\s*(?:@[\w.]+(?:\([^)]*\))?\s+)*(?:(?:{MODIFIERS})\s+)*(?:{KINDS})\s+{}\b",
            regex::escape(name)
        );
        let pattern = Regex::new(&source).map_err(|e| EditError::Pattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// First line that looks like the declaration.
    #[must_use]
    pub fn find(&self, lines: &[&str]) -> Option<DeclarationSite> {
        lines.iter().enumerate().find_map(|(line, text)| {
            self.pattern
                .find(text)
                .map(|m| DeclarationSite { line, end: m.end() })
        })
    }
}

/// Insert `member` just inside the body of `class_name`.
///
/// Content and member must be `\n`-normalized. The opening brace is the
/// first `{` after the type name, so braces in annotation arguments are
/// skipped. The member is re-indented one level (four spaces) deeper than
/// the declaration line, keeping its own relative indentation. Text that
/// followed the brace on the same line moves to the body, and a trailing
/// `}` goes back to the declaration's indentation.
pub(crate) fn insert_member(
    content: &str,
    class_name: &str,
    member: &str,
) -> Result<String, EditError> {
    if member.trim().is_empty() {
        return Err(EditError::EmptyMember);
    }

    let matcher = ClassDeclarationMatcher::new(class_name)?;
    let lines: Vec<&str> = content.split('\n').collect();
    let not_found = || EditError::DeclarationNotFound(class_name.to_string());

    let site = matcher.find(&lines).ok_or_else(not_found)?;
    let (brace_line, brace_col) = std::iter::once((site.line, site.end))
        .chain((site.line + 1..lines.len()).map(|i| (i, 0)))
        .find_map(|(i, from)| lines[i][from..].find('{').map(|pos| (i, from + pos)))
        .ok_or_else(not_found)?;

    let decl_indent = leading_whitespace(lines[site.line]);
    let indent = format!("{decl_indent}    ");
    let body = dedent(member);

    let (head, tail) = lines[brace_line].split_at(brace_col + 1);

    let mut out: Vec<String> = lines[..brace_line].iter().map(|l| (*l).to_string()).collect();
    out.push(head.to_string());
    out.extend(body.iter().map(|l| {
        if l.is_empty() {
            String::new()
        } else {
            format!("{indent}{l}")
        }
    }));

    let tail = tail.trim();
    match tail.strip_suffix('}') {
        Some(inner) => {
            if !inner.trim().is_empty() {
                out.push(format!("{indent}{}", inner.trim()));
            }
            out.push(format!("{decl_indent}}}"));
        }
        None if !tail.is_empty() => out.push(format!("{indent}{tail}")),
        None => {}
    }
    out.extend(lines[brace_line + 1..].iter().map(|l| (*l).to_string()));

    Ok(out.join("\n"))
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Longest common prefix, cut on a character boundary.
fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i);
    &a[..end]
}

/// Strip the leading whitespace shared by all non-blank lines.
fn dedent(text: &str) -> Vec<String> {
    let common = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(leading_whitespace)
        .reduce(common_prefix)
        .unwrap_or("");

    text.lines()
        .map(|l| {
            if l.trim().is_empty() {
                String::new()
            } else {
                l.strip_prefix(common).unwrap_or(l).trim_end().to_string()
            }
        })
        .collect()
}
