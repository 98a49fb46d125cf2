//! Binding captured values to parameter names.

use std::collections::HashMap;

/// Bound route parameters, name → matched substring.
pub type Params = HashMap<String, String>;

/// Zips captured values with parameter names, position by position.
///
/// `values` must hold only the capturing groups (the full match excluded)
/// and must be as long as `names`; compilation guarantees both.
///
/// ```
/// use routebind::routing::params::bind_parameters;
///
/// let names = vec!["id".to_string(), "name".to_string()];
/// let params = bind_parameters(&["33", "param"], &names);
/// assert_eq!(params["id"], "33");
/// assert_eq!(params["name"], "param");
/// ```
pub fn bind_parameters<S: AsRef<str>>(values: &[S], names: &[String]) -> Params {
    debug_assert_eq!(values.len(), names.len());
    let mut params = Params::with_capacity(values.len());
    for (name, value) in names.iter().zip(values) {
        params.insert(name.clone(), value.as_ref().to_string());
    }
    params
}

/// Moves `from` into `into`; entries in `from` win on name collisions.
pub fn merge_parameters(into: &mut Params, from: Params) {
    into.extend(from);
}
