//! Top-level brace scanning for URI templates.
//!
//! Finds the outermost `{ ... }` segments of a template. Nested braces are
//! allowed inside a placeholder (`{id:[0-9]{3}}`) but only the outer pair
//! delimits the placeholder.

use crate::routing::error::PatternError;

/// Byte offsets of one placeholder's outer `{` and matching `}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracePair {
    pub open: usize,
    pub close: usize,
}

impl BracePair {
    /// Text between the braces, exclusive.
    pub fn body<'t>(&self, template: &'t str) -> &'t str {
        &template[self.open + 1..self.close]
    }
}

/// Returns the first-level brace pairs of `template`, left to right.
pub fn brace_indices(template: &str) -> Result<Vec<BracePair>, PatternError> {
    let mut depth: i32 = 0;
    let mut open = 0;
    let mut pairs = Vec::new();

    // Braces are ASCII, so byte offsets are always char boundaries.
    for (i, b) in template.bytes().enumerate() {
        match b {
            b'{' => {
                depth += 1;
                if depth == 1 {
                    open = i;
                }
            }
            b'}' => {
                depth -= 1;
                if depth < 0 {
                    return Err(PatternError::UnbalancedBraces {
                        template: template.to_string(),
                    });
                }
                if depth == 0 {
                    if i == open + 1 {
                        return Err(PatternError::EmptyPlaceholder {
                            template: template.to_string(),
                        });
                    }
                    pairs.push(BracePair { open, close: i });
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(PatternError::UnbalancedBraces {
            template: template.to_string(),
        });
    }
    Ok(pairs)
}
