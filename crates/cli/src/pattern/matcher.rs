//! Compiled path matchers with automatic optimization.

use regex::Regex;

/// A compiled path pattern optimized for its structure.
#[derive(Debug, Clone)]
pub enum PathPattern {
    /// Literal prefix (no regex needed).
    Prefix(PrefixMatcher),
    /// Start-anchored regex.
    Regex(RegexMatcher),
}

/// Matcher for plain literal prefixes.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    source: String,
    prefix: String,
}

/// Matcher for regex patterns, anchored at the start of the path.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    source: String,
    regex: Regex,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern {pattern:?}: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl PathPattern {
    /// Compile a pattern string into a start-anchored matcher.
    ///
    /// - `drivers/i2c` or `^drivers/i2c` -> PrefixMatcher
    /// - anything with regex metacharacters -> RegexMatcher
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let body = pattern.strip_prefix('^').unwrap_or(pattern);
        if is_literal(body) {
            Ok(PathPattern::Prefix(PrefixMatcher {
                source: pattern.to_string(),
                prefix: body.to_string(),
            }))
        } else {
            Ok(PathPattern::Regex(RegexMatcher::new(pattern)?))
        }
    }

    /// Whether the pattern matches at the beginning of `path`.
    pub fn is_match(&self, path: &str) -> bool {
        match self {
            PathPattern::Prefix(m) => path.starts_with(&m.prefix),
            PathPattern::Regex(m) => m.regex.is_match(path),
        }
    }

    /// The pattern as written in the rule table.
    pub fn as_str(&self) -> &str {
        match self {
            PathPattern::Prefix(m) => &m.source,
            PathPattern::Regex(m) => &m.source,
        }
    }
}

/// Check if pattern is a plain literal (no regex metacharacters).
fn is_literal(pattern: &str) -> bool {
    !pattern.chars().any(|c| {
        matches!(
            c,
            '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
        )
    })
}

impl RegexMatcher {
    /// Create a new regex matcher.
    ///
    /// The pattern is wrapped in `^(?:...)` so alternations stay anchored too.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex =
            Regex::new(&format!("^(?:{})", pattern)).map_err(|source| PatternError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
