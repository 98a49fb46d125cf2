//! Route compilation and lookup errors.
//!
//! Every variant here is a configuration-time fault: it surfaces while a
//! route table is being built and must abort construction. Matching an
//! incoming path never produces one of these.

use thiserror::Error;

/// Errors raised while compiling a URI template.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Mismatched `{` / `}` anywhere in the template.
    #[error("unbalanced braces in {template:?}")]
    UnbalancedBraces { template: String },

    /// A `{}` placeholder with nothing between the braces.
    #[error("empty route parameter in {template:?}")]
    EmptyPlaceholder { template: String },

    /// Placeholder body starts with `:`.
    #[error("invalid route parameter, missing name in {placeholder:?}")]
    MissingParameterName { placeholder: String },

    /// Placeholder body ends with `:`.
    #[error("invalid route parameter, missing pattern in {placeholder:?}")]
    MissingParameterPattern { placeholder: String },

    /// A sub-pattern whose parentheses do not balance on their own, which
    /// would let it close the placeholder's group early.
    #[error("invalid route parameter, unbalanced parentheses in {placeholder:?}")]
    UnbalancedSubpattern { placeholder: String },

    /// A user sub-pattern brought its own capturing group.
    #[error(
        "route {template} contains capture groups in its pattern; only non-capturing \
         groups are accepted, e.g. (?:pattern) instead of (pattern)"
    )]
    UnexpectedCapturingGroup { template: String },

    /// The assembled expression was rejected by the regex engine.
    #[error("invalid pattern for route {template}: {source}")]
    InvalidPattern {
        template: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Short stable identifier, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            PatternError::UnbalancedBraces { .. } => "unbalanced_braces",
            PatternError::EmptyPlaceholder { .. } => "empty_placeholder",
            PatternError::MissingParameterName { .. } => "missing_parameter_name",
            PatternError::MissingParameterPattern { .. } => "missing_parameter_pattern",
            PatternError::UnbalancedSubpattern { .. } => "unbalanced_subpattern",
            PatternError::UnexpectedCapturingGroup { .. } => "unexpected_capturing_group",
            PatternError::InvalidPattern { .. } => "invalid_pattern",
        }
    }
}

/// Errors raised while assembling a route tree or building URIs from it.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Two routes registered under the same name.
    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    /// Reverse lookup for a name nobody registered.
    #[error("no route named {0:?}")]
    UnknownRoute(String),

    /// Reverse routing was given the wrong number of values.
    #[error("route {template} expects {expected} parameter(s), got {actual}")]
    ParameterCount {
        template: String,
        expected: usize,
        actual: usize,
    },
}
