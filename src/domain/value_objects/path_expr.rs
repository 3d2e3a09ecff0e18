//! Path Expression
//!
//! Addresses a node of a [`DynamicValue`](super::DynamicValue) tree with a
//! dotted/bracketed string such as `proj.excludeRegExps[0]`.
//!
//! The grammar is deliberately loose: the string is split on `.`, `[` and `]`
//! and empty tokens are discarded, so `a..b`, `a[0]` and `a.0` all produce the
//! same segments. Whether a token acts as a key or an index is decided by the
//! node it is applied to.

use std::fmt;

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment(String);

impl Segment {
    /// Token used for mapping lookup
    pub fn as_key(&self) -> &str {
        &self.0
    }

    /// Token read as a sequence position
    ///
    /// `None` when the token is not a non-negative integer.
    pub fn as_index(&self) -> Option<usize> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse().ok()
    }
}

/// Parsed path, in traversal order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathExpression {
    segments: Vec<Segment>,
}

impl PathExpression {
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(['.', '[', ']'])
            .filter(|token| !token.is_empty())
            .map(|token| Segment(token.to_string()))
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl From<&str> for PathExpression {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if segment.as_index().is_some() {
                write!(f, "[{}]", segment.0)?;
            } else {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{}", segment.0)?;
            }
        }
        Ok(())
    }
}
