//! @ai:module:intent Derive documentation text from a group of Go comments
//! @ai:module:layer domain
//! @ai:module:public_api CommentGroup, is_directive
//! @ai:module:stateless true

/// @ai:intent A run of adjacent `//` or `/* */` comments, raw text including markers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    pub comments: Vec<String>,
}

impl CommentGroup {
    pub fn new(comments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }

    /// @ai:intent Documentation text of the group with markers and directives removed
    /// @ai:post result is empty or ends with a single newline
    /// @ai:post no leading, trailing, or repeated blank lines
    /// @ai:example (["// Foo bar", "//", "// baz"]) -> "Foo bar\n\nbaz\n"
    /// @ai:example (["//go:generate x"]) -> ""
    /// @ai:effects pure
    pub fn text(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();

        for raw in &self.comments {
            let raw = raw.as_str();
            let body = if let Some(rest) = raw.strip_prefix("//") {
                if let Some(stripped) = rest.strip_prefix(' ') {
                    stripped
                } else if is_directive(rest) {
                    continue;
                } else {
                    rest
                }
            } else {
                raw.strip_prefix("/*")
                    .and_then(|r| r.strip_suffix("*/"))
                    .unwrap_or(raw)
            };

            lines.extend(body.split('\n').map(|l| l.trim_end()));
        }

        let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
        for line in lines {
            // drops leading blanks and collapses runs of blanks
            if line.is_empty() && kept.last().map_or(true, |l| l.is_empty()) {
                continue;
            }
            kept.push(line);
        }
        while kept.last().is_some_and(|l| l.is_empty()) {
            kept.pop();
        }

        if kept.is_empty() {
            return String::new();
        }

        let mut text = kept.join("\n");
        text.push('\n');
        text
    }
}

/// @ai:intent Check whether a `//` comment body is a tool directive rather than prose
/// @ai:example ("go:generate stringer") -> true
/// @ai:example ("converter:converter") -> true
/// @ai:example (" converter:converter") -> false
/// @ai:example ("line foo.go:10") -> true
/// @ai:effects pure
pub fn is_directive(body: &str) -> bool {
    if body.starts_with("line ") || body.starts_with("extern ") || body.starts_with("export ") {
        return true;
    }

    let bytes = body.as_bytes();
    let colon = match body.find(':') {
        Some(idx) if idx > 0 && idx + 1 < bytes.len() => idx,
        _ => return false,
    };

    bytes[..=colon + 1]
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != colon)
        .all(|(_, b)| b.is_ascii_lowercase() || b.is_ascii_digit())
}
