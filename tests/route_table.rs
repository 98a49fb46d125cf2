//! Route tables loaded from disk.

use routebind::config::loader::{load_config, load_router, ConfigError};
use routebind::routing::PatternError;
use routebind::{RouteError, Router};

mod common;

#[test]
fn test_load_and_match_nested_table() {
    let table = common::write_table(common::API_TABLE);
    let router = load_router(&table.path).unwrap();
    assert_eq!(router.route_count(), 4);

    let m = router.find("/api/v3/projects/apollo/tasks/12").unwrap();
    assert_eq!(m.route.target(), "tasks");
    assert_eq!(m.route.name(), Some("api.task"));
    assert_eq!(m.params.len(), 3);
    assert_eq!(m.params["version"], "v3");
    assert_eq!(m.params["project"], "apollo");
    assert_eq!(m.params["task"], "12");

    let m = router.find("/api/v1/status").unwrap();
    assert_eq!(m.route.target(), "status");
    assert_eq!(m.params["version"], "v1");

    assert_eq!(router.find("/").unwrap().route.target(), "home");
    assert_eq!(router.find("/user/9").unwrap().params["id"], "9");
}

#[test]
fn test_unmatched_paths() {
    let table = common::write_table(common::API_TABLE);
    let router = load_router(&table.path).unwrap();

    for path in [
        "/user/abc",
        "/api/x1/status",
        "/api/v1/status/",
        "/api/v1/projects/apollo/tasks/abc",
        "/api/v1/projects/apollo",
        "",
    ] {
        assert!(router.find(path).is_none(), "{path}");
    }
}

#[test]
fn test_reverse_routing_from_table() {
    let table = common::write_table(common::API_TABLE);
    let router = load_router(&table.path).unwrap();

    assert_eq!(
        router.url("api.task", &["v2", "apollo", "7"]).unwrap(),
        "/api/v2/projects/apollo/tasks/7"
    );
    let built = router.url("user.show", &["15"]).unwrap();
    assert_eq!(router.find(&built).unwrap().params["id"], "15");
}

#[test]
fn test_bad_template_aborts_loading() {
    let table = common::write_table(
        r#"
        [[routes]]
        template = "/ok/{id}"
        target = "ok"

        [[routers]]
        prefix = "/broken/{id"
        "#,
    );

    // The table itself is well formed, only compilation rejects it.
    let config = load_config(&table.path).unwrap();
    assert!(matches!(
        Router::from_config(&config),
        Err(RouteError::Pattern(PatternError::UnbalancedBraces { .. }))
    ));

    let err = load_router(&table.path).unwrap_err();
    assert!(matches!(err, ConfigError::Route(_)));
    assert!(err.to_string().contains("/broken/{id"));
}

#[test]
fn test_duplicate_names_rejected() {
    let table = common::write_table(
        r#"
        [[routes]]
        name = "dup"
        template = "/a"
        target = "a"

        [[routes]]
        name = "dup"
        template = "/b"
        target = "b"
        "#,
    );
    let err = load_router(&table.path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
}

#[test]
fn test_empty_prefix_groups_routes() {
    let table = common::write_table(
        r#"
        [[routers]]

          [[routers.routes]]
          template = "/about"
          target = "about"
        "#,
    );
    let router = load_router(&table.path).unwrap();
    assert_eq!(router.find("/about").unwrap().route.target(), "about");
    assert_eq!(router.subrouters().len(), 1);
}

#[test]
fn test_nested_empty_template_matches_mount_point() {
    let table = common::write_table(
        r#"
        [[routers]]
        prefix = "/api/{version:v[0-9]+}"

          [[routers.routes]]
          name = "api.root"
          template = ""
          target = "api.root"

          [[routers.routes]]
          template = "/status"
          target = "status"
        "#,
    );
    let router = load_router(&table.path).unwrap();

    let m = router.find("/api/v1").unwrap();
    assert_eq!(m.route.target(), "api.root");
    assert_eq!(m.params["version"], "v1");
    assert_eq!(router.find("/api/v1/status").unwrap().route.target(), "status");
    assert!(router.find("/api/v1/").is_none());
    assert_eq!(router.url("api.root", &["v2"]).unwrap(), "/api/v2");
}
