//! Compilation and matching behaviour of single templates.

use routebind::routing::braces::brace_indices;
use routebind::{Anchoring, Matchable, PatternError};

fn compile(template: &str) -> Result<Matchable, PatternError> {
    Matchable::compile(template, Anchoring::Full)
}

#[test]
fn test_parameter_count_equals_placeholder_count() {
    let templates = [
        "/",
        "/{a}",
        "/{a}/{b}",
        "/files/{name:[a-z]+}.{ext:(?:png|jpe?g)}",
        "/{y:[0-9]{4}}/{m:[0-9]{2}}/{d:[0-9]{2}}/{slug}",
    ];
    for template in templates {
        let k = brace_indices(template).unwrap().len();
        for anchoring in [Anchoring::Full, Anchoring::Prefix] {
            let m = Matchable::compile(template, anchoring).unwrap();
            assert_eq!(m.parameters().len(), k, "{template}");
        }
    }
}

#[test]
fn test_unbalanced_braces() {
    for template in ["/a/{id", "/a/id}", "/{a{b}"] {
        assert!(
            matches!(compile(template), Err(PatternError::UnbalancedBraces { .. })),
            "{template}"
        );
    }
}

#[test]
fn test_route_template_matching() {
    let m = compile("/user/{id}").unwrap();

    let hit = m.captures("/user/42").unwrap();
    assert_eq!(hit.params.len(), 1);
    assert_eq!(hit.params["id"], "42");

    assert!(m.captures("/user/42/extra").is_none());
    assert!(m.captures("/user/").is_none());
}

#[test]
fn test_constrained_parameter() {
    let m = compile("/user/{id:[0-9]+}").unwrap();
    assert!(m.captures("/user/abc").is_none());
    assert_eq!(m.captures("/user/123").unwrap().params["id"], "123");
}

#[test]
fn test_router_prefix_leaves_remainder() {
    let m = Matchable::compile("/user/{id:[0-9]+}", Anchoring::Prefix).unwrap();
    let hit = m.captures("/user/123/profile").unwrap();
    assert_eq!(hit.remainder, "/profile");
    assert_eq!(hit.params.len(), 1);
    assert_eq!(hit.params["id"], "123");
}

#[test]
fn test_two_parameters() {
    let m = compile("/a/{x}/b/{y:[a-z]+}").unwrap();
    let params = m.captures("/a/1/b/foo").unwrap().params;
    assert_eq!(params.len(), 2);
    assert_eq!(params["x"], "1");
    assert_eq!(params["y"], "foo");
}

#[test]
fn test_placeholder_errors() {
    assert!(matches!(
        compile("/{:pattern}"),
        Err(PatternError::MissingParameterName { .. })
    ));
    assert!(matches!(
        compile("/{id:}"),
        Err(PatternError::MissingParameterPattern { .. })
    ));
    assert!(matches!(
        compile("/{id:(foo)}"),
        Err(PatternError::UnexpectedCapturingGroup { .. })
    ));
    assert!(matches!(
        compile("/{}"),
        Err(PatternError::EmptyPlaceholder { .. })
    ));
    assert!(matches!(
        compile("/{id:a{}"),
        Err(PatternError::UnbalancedBraces { .. })
    ));
}

#[test]
fn test_non_capturing_group_accepted() {
    let m = compile("/img/{file:[a-z]+\\.(?:png|gif)}").unwrap();
    assert_eq!(m.captures("/img/cat.gif").unwrap().params["file"], "cat.gif");
    assert!(!m.is_match("/img/cat.bmp"));
}

#[test]
fn test_literals_are_not_escaped() {
    // `.` in the literal part keeps its regex meaning.
    let m = compile("/feed.{format}").unwrap();
    assert!(m.is_match("/feed.json"));
    assert!(m.is_match("/feedxjson"));
}

#[test]
fn test_error_names_template() {
    let err = compile("/{id:(foo)}").unwrap_err();
    assert!(err.to_string().contains("/{id:(foo)}"));
}
