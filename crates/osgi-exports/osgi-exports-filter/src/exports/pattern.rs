//! Class name patterns from `include:=` / `exclude:=` directive values.
//!
//! A directive value is a glob where `*` stands for any run of characters.
//! Only `*` is translated; every other character reaches the regex engine
//! unchanged, so regex metacharacters in a value keep their regex meaning.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use regex::Regex;

/// A compiled class name pattern together with its source text.
///
/// Equality, ordering and hashing use the source text only, so two patterns
/// compiled separately from the same text are interchangeable in sets.
#[derive(Debug, Clone)]
pub struct ClassPattern {
    source: String,
    regex: Regex,
}

impl ClassPattern {
    /// Translate a directive glob (`X*`) into a pattern (`X.*`) and compile it.
    pub fn from_glob(glob: &str) -> Result<Self, regex::Error> {
        Self::compile(glob_to_regex(glob))
    }

    /// Compile an already translated pattern. The match is anchored at both ends.
    pub fn compile(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        // checked bare first so errors quote the text the user wrote
        Regex::new(&source)?;
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self { source, regex })
    }

    /// The translated source text, e.g. `X.*` for the glob `X*`.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the whole of `name` matches.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Replace every `*` with `.*`.
pub fn glob_to_regex(glob: &str) -> String {
    glob.replace('*', ".*")
}

impl PartialEq for ClassPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for ClassPattern {}

impl Hash for ClassPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl PartialOrd for ClassPattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassPattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source.cmp(&other.source)
    }
}

impl fmt::Display for ClassPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_translation_only_touches_stars() {
        assert_eq!(glob_to_regex("X*"), "X.*");
        assert_eq!(glob_to_regex("*Y*"), ".*Y.*");
        assert_eq!(glob_to_regex("Foo$Bar"), "Foo$Bar");
        assert_eq!(glob_to_regex("A.B"), "A.B");
    }

    #[test]
    fn test_match_is_anchored() {
        let pattern = ClassPattern::from_glob("Impl").unwrap();
        assert!(pattern.is_match("Impl"));
        assert!(!pattern.is_match("FooImpl"));
        assert!(!pattern.is_match("ImplFoo"));
    }

    #[test]
    fn test_wildcard_matches_empty_run() {
        let pattern = ClassPattern::from_glob("X*").unwrap();
        assert!(pattern.is_match("X"));
        assert!(pattern.is_match("Xyz"));
        assert!(!pattern.is_match("aX"));
    }

    #[test]
    fn test_regex_metacharacters_are_not_escaped() {
        // `.` keeps its regex meaning
        let pattern = ClassPattern::from_glob("A.C").unwrap();
        assert!(pattern.is_match("ABC"));
    }

    #[test]
    fn test_alternation_is_contained_by_anchors() {
        let pattern = ClassPattern::compile("A|B").unwrap();
        assert!(pattern.is_match("A"));
        assert!(pattern.is_match("B"));
        assert!(!pattern.is_match("AB"));
    }

    #[test]
    fn test_separately_compiled_patterns_are_equal() {
        let a = ClassPattern::from_glob("*Y").unwrap();
        let b = ClassPattern::compile(".*Y").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), ".*Y");
    }

    #[test]
    fn test_compile_error_quotes_unanchored_source() {
        let message = ClassPattern::from_glob("Foo(").unwrap_err().to_string();
        assert!(message.contains("Foo("), "{message}");
        assert!(!message.contains("^(?:"), "{message}");
    }
}
