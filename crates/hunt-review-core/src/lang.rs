//! Language tag to editor mode mapping for the code viewer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorMode {
    Java,
    Python,
    CCpp,
}

impl EditorMode {
    /// Map a backend language tag. Unknown tags fall back to Java, not to
    /// plain text.
    // TODO: switch the fallback to a plain-text mode once the backend's
    // full language list is agreed on.
    pub fn from_lang(lang: &str) -> Self {
        match lang.trim().to_lowercase().as_str() {
            "java" => EditorMode::Java,
            "python" => EditorMode::Python,
            "c++" | "c_cpp" | "cpp" => EditorMode::CCpp,
            _ => EditorMode::Java,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::Java => "java",
            EditorMode::Python => "python",
            EditorMode::CCpp => "c_cpp",
        }
    }

    /// CSS class understood by highlight.js
    pub fn highlight_class(&self) -> &'static str {
        match self {
            EditorMode::Java => "language-java",
            EditorMode::Python => "language-python",
            EditorMode::CCpp => "language-cpp",
        }
    }
}

impl std::fmt::Display for EditorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for `EditorMode::from_lang(lang).as_str()`
pub fn mode_from_lang(lang: &str) -> &'static str {
    EditorMode::from_lang(lang).as_str()
}
