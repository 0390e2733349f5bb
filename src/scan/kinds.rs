//! Cast kind descriptors
//!
//! The four C++ explicit-conversion operators in a fixed declared order.
//! Declared order is both the per-line scan order and the menu ordinal
//! order (1-4), so it must stay stable.
//!
//! @module scan/kinds

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// One of the four C++ explicit-conversion operator categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastKind {
    StaticCast,
    DynamicCast,
    ConstCast,
    ReinterpretCast,
}

impl CastKind {
    /// All kinds in declared order
    pub const ALL: [CastKind; 4] = [
        CastKind::StaticCast,
        CastKind::DynamicCast,
        CastKind::ConstCast,
        CastKind::ReinterpretCast,
    ];

    /// The source keyword for this kind
    pub fn keyword(self) -> &'static str {
        match self {
            CastKind::StaticCast => "static_cast",
            CastKind::DynamicCast => "dynamic_cast",
            CastKind::ConstCast => "const_cast",
            CastKind::ReinterpretCast => "reinterpret_cast",
        }
    }

    /// Compiled line pattern: keyword, optional whitespace, `<`, a
    /// non-greedy run of any characters, `>`, optional whitespace, `(`
    pub fn pattern(self) -> &'static Regex {
        &PATTERNS[self as usize]
    }

    /// Whether a line contains at least one occurrence of this kind.
    ///
    /// Purely textual: casts inside comments and string literals match
    /// too, and a line with two casts of the same kind still answers a
    /// single yes.
    pub fn matches(self, line: &str) -> bool {
        self.pattern().is_match(line)
    }
}

impl fmt::Display for CastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Patterns compiled once, indexed by declared order
static PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    CastKind::ALL
        .map(|kind| Regex::new(&format!(r"{}\s*<.*?>\s*\(", kind.keyword())).unwrap())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_basic_form() {
        assert!(CastKind::StaticCast.matches("int x = static_cast<int>(y);"));
        assert!(CastKind::DynamicCast.matches("auto d = dynamic_cast<Derived*>(base);"));
        assert!(CastKind::ConstCast.matches("const_cast<char*>(s)"));
        assert!(CastKind::ReinterpretCast.matches("reinterpret_cast<uintptr_t>(p)"));
    }

    #[test]
    fn matches_with_whitespace() {
        assert!(CastKind::StaticCast.matches("static_cast <int> (y)"));
        assert!(CastKind::StaticCast.matches("static_cast<int>  (y)"));
    }

    #[test]
    fn matches_nested_template_arguments() {
        // The non-greedy body stops at the first `>` followed by `(`
        assert!(CastKind::StaticCast.matches("static_cast<std::vector<int>>(v)"));
    }

    #[test]
    fn requires_call_parenthesis() {
        assert!(!CastKind::StaticCast.matches("static_cast<int> y"));
        assert!(!CastKind::StaticCast.matches("// mentions static_cast but no call"));
    }

    #[test]
    fn requires_template_brackets() {
        assert!(!CastKind::StaticCast.matches("static_cast(y)"));
    }

    #[test]
    fn kinds_are_independent() {
        let line = "static_cast<int>(a); dynamic_cast<B*>(c);";
        assert!(CastKind::StaticCast.matches(line));
        assert!(CastKind::DynamicCast.matches(line));
        assert!(!CastKind::ConstCast.matches(line));
    }

    #[test]
    fn declared_order_is_stable() {
        let keywords: Vec<_> = CastKind::ALL.iter().map(|k| k.keyword()).collect();
        assert_eq!(
            keywords,
            ["static_cast", "dynamic_cast", "const_cast", "reinterpret_cast"]
        );
    }
}
