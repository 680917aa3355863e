//! @ai:module:intent Decide whether a declaration is annotated for converter generation and resolve its group key
//! @ai:module:layer domain
//! @ai:module:public_api Matcher, AnnotationMatch, MARKER, GROUP_PATTERN
//! @ai:module:stateless true

use regex::Regex;

/// Substring that flags a declaration block as eligible for generation.
pub const MARKER: &str = "converter:converter";

/// First capture group is the group key.
pub const GROUP_PATTERN: &str = r"group (\w+)";

/// @ai:intent Result of inspecting one documentation string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationMatch {
    pub is_match: bool,
    pub group_key: Option<String>,
}

impl AnnotationMatch {
    fn skipped() -> Self {
        Self {
            is_match: false,
            group_key: None,
        }
    }
}

/// @ai:intent Matches documentation text against the marker and extracts group keys
#[derive(Debug, Clone)]
pub struct Matcher {
    default_key: String,
    group_re: Regex,
}

impl Matcher {
    /// @ai:intent Create a matcher that falls back to `default_key` when no group clause is present
    pub fn new(default_key: impl Into<String>) -> Self {
        Self {
            default_key: default_key.into(),
            group_re: Regex::new(GROUP_PATTERN).expect("Invalid regex"),
        }
    }

    /// @ai:intent Inspect documentation text for the marker and resolve the group key
    /// @ai:post is_match == false implies group_key is None
    /// @ai:example ("converter:converter gotruct:group Widgets") -> (true, Some("Widgets"))
    /// @ai:example ("converter:converter") -> (true, Some(default_key))
    /// @ai:example ("just a type") -> (false, None)
    /// @ai:effects pure
    pub fn match_doc(&self, doc: &str) -> AnnotationMatch {
        if !doc.contains(MARKER) {
            return AnnotationMatch::skipped();
        }

        AnnotationMatch {
            is_match: true,
            group_key: Some(self.group_key(doc)),
        }
    }

    /// @ai:intent Extract the key from the first `group <identifier>` clause, else the default
    /// @ai:effects pure
    pub fn group_key(&self, doc: &str) -> String {
        self.group_re
            .captures(doc)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| self.default_key.clone())
    }
}
