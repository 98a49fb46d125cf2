//! URI template compilation.
//!
//! A template such as `/user/{id:[0-9]+}/posts/{slug}` is turned into an
//! anchored regular expression with exactly one capturing group per
//! placeholder, plus the ordered list of placeholder names.
//!
//! # Design Decisions
//! - Literal text is copied verbatim, never escaped: regex metacharacters in
//!   literals are the template author's responsibility
//! - `{name}` defaults to `[^/]+` (one path segment)
//! - Routes anchor at both ends, routers only at the start so the remainder
//!   of the path can be handed to nested routes
//! - Group count is checked after compilation; a sub-pattern with its own
//!   capturing group is rejected

use regex::Regex;

use crate::observability::metrics;
use crate::routing::braces::brace_indices;
use crate::routing::error::{PatternError, RouteError};
use crate::routing::params::{bind_parameters, Params};

/// Pattern used for placeholders without an explicit sub-pattern.
pub const DEFAULT_PARAMETER_PATTERN: &str = "[^/]+";

/// How much of the path a compiled pattern must consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchoring {
    /// The whole path (routes).
    Full,
    /// A leading prefix of the path (router mount points).
    Prefix,
}

/// A compiled template: the pattern plus its parameter names, in order.
///
/// Immutable once built, so it can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Matchable {
    template: String,
    regex: Regex,
    parameters: Vec<String>,
    anchoring: Anchoring,
}

/// Result of evaluating a [`Matchable`] against a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch<'p> {
    /// Parameters bound by this pattern.
    pub params: Params,
    /// Part of the path after the matched prefix. Empty for [`Anchoring::Full`].
    pub remainder: &'p str,
}

impl Matchable {
    /// Compiles `template`.
    ///
    /// Failures are configuration errors and should abort route table
    /// construction.
    pub fn compile(template: &str, anchoring: Anchoring) -> Result<Self, PatternError> {
        let result = Self::assemble(template, anchoring);
        match &result {
            Ok(_) => metrics::record_pattern_compiled(),
            Err(e) => metrics::record_pattern_error(e.kind()),
        }
        result
    }

    fn assemble(template: &str, anchoring: Anchoring) -> Result<Self, PatternError> {
        let pairs = brace_indices(template)?;

        let mut pattern = String::with_capacity(template.len() + 2);
        pattern.push('^');

        let mut parameters: Vec<String> = Vec::with_capacity(pairs.len());
        let mut end = 0;
        for pair in &pairs {
            let body = pair.body(template);
            let (name, sub) = match body.split_once(':') {
                Some((name, sub)) => (name, Some(sub)),
                None => (body, None),
            };
            if name.is_empty() {
                return Err(PatternError::MissingParameterName {
                    placeholder: body.to_string(),
                });
            }
            let sub = match sub {
                Some("") => {
                    return Err(PatternError::MissingParameterPattern {
                        placeholder: body.to_string(),
                    })
                }
                Some(sub) => sub,
                None => DEFAULT_PARAMETER_PATTERN,
            };
            // `a)|(b` would escape the wrapper group and unanchor the pattern.
            if !groups_balanced(sub) {
                return Err(PatternError::UnbalancedSubpattern {
                    placeholder: body.to_string(),
                });
            }

            pattern.push_str(&template[end..pair.open]);
            pattern.push('(');
            pattern.push_str(sub);
            pattern.push(')');

            if parameters.iter().any(|p| p == name) {
                tracing::warn!(
                    template,
                    parameter = name,
                    "Duplicate route parameter name, last value wins"
                );
            }
            parameters.push(name.to_string());
            end = pair.close + 1;
        }
        pattern.push_str(&template[end..]);

        if anchoring == Anchoring::Full {
            pattern.push('$');
        }

        let regex = Regex::new(&pattern).map_err(|source| PatternError::InvalidPattern {
            template: template.to_string(),
            source,
        })?;

        // captures_len() counts the implicit whole-match group.
        if regex.captures_len() - 1 != parameters.len() {
            return Err(PatternError::UnexpectedCapturingGroup {
                template: template.to_string(),
            });
        }

        tracing::debug!(
            template,
            pattern = %regex.as_str(),
            parameters = ?parameters,
            anchoring = ?anchoring,
            "Compiled route pattern"
        );

        Ok(Self {
            template: template.to_string(),
            regex,
            parameters,
            anchoring,
        })
    }

    /// The template this pattern was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameter names in template order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn anchoring(&self) -> Anchoring {
        self.anchoring
    }

    /// The assembled regular expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Evaluates the pattern against `path`.
    ///
    /// Returns `None` when the path does not match; that is ordinary control
    /// flow, not an error.
    pub fn captures<'p>(&self, path: &'p str) -> Option<PathMatch<'p>> {
        let caps = self.regex.captures(path)?;
        let whole = caps.get(0)?;
        let values: Vec<&str> = caps
            .iter()
            .skip(1)
            .map(|m| m.map_or("", |m| m.as_str()))
            .collect();

        Some(PathMatch {
            params: bind_parameters(&values, &self.parameters),
            remainder: &path[whole.end()..],
        })
    }

    /// Fills the template's placeholders with `values`, in order.
    pub fn build_uri<S: AsRef<str>>(&self, values: &[S]) -> Result<String, RouteError> {
        build_uri(&self.template, values)
    }
}

/// Whether every `(` in a sub-pattern is closed inside it.
///
/// Escaped characters and parentheses inside character classes (which may
/// nest) are skipped.
fn groups_balanced(sub: &str) -> bool {
    let mut depth: i32 = 0;
    let mut class_depth = 0;
    let mut chars = sub.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' => {
                class_depth += 1;
                // A leading `]` (after an optional `^`) is a literal.
                if chars.peek() == Some(&'^') {
                    chars.next();
                }
                if chars.peek() == Some(&']') {
                    chars.next();
                }
            }
            ']' if class_depth > 0 => class_depth -= 1,
            '(' if class_depth == 0 => depth += 1,
            ')' if class_depth == 0 => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Substitutes `values` into the placeholders of `template`, left to right.
///
/// Values are inserted as-is; they are not checked against the
/// placeholder's sub-pattern.
pub fn build_uri<S: AsRef<str>>(template: &str, values: &[S]) -> Result<String, RouteError> {
    let pairs = brace_indices(template)?;
    if pairs.len() != values.len() {
        return Err(RouteError::ParameterCount {
            template: template.to_string(),
            expected: pairs.len(),
            actual: values.len(),
        });
    }

    let mut uri = String::with_capacity(template.len());
    let mut end = 0;
    for (pair, value) in pairs.iter().zip(values) {
        uri.push_str(&template[end..pair.open]);
        uri.push_str(value.as_ref());
        end = pair.close + 1;
    }
    uri.push_str(&template[end..]);
    Ok(uri)
}
