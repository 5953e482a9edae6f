use serde_json::json;
use toolbelt::dot;

#[test]
fn set_get_forget_round_trip() {
    let mut data = json!({});

    dot::set(&mut data, "site.owner.name", json!("ada")).unwrap();
    dot::set(&mut data, "site.owner.email", json!("ada@example.com")).unwrap();
    dot::set(&mut data, "site.tags", json!(["a", "b"])).unwrap();

    assert_eq!(dot::get(&data, "site.owner.name"), Some(&json!("ada")));
    assert_eq!(dot::get(&data, "site.tags.1"), Some(&json!("b")));

    assert!(dot::forget(&mut data, "site.owner.email"));
    assert_eq!(dot::get(&data, "site.owner.email"), None);
    assert_eq!(dot::get(&data, "site.owner.name"), Some(&json!("ada")));
}

#[test]
fn wildcard_write_then_wildcard_read() {
    let mut data = json!({
        "servers": [
            {"id": "a", "healthy": false},
            {"id": "b", "healthy": false},
            {"id": "c", "healthy": false}
        ]
    });

    dot::set(&mut data, "servers.*.healthy", json!(true)).unwrap();

    let healthy = dot::get_all(&data, "servers.*.healthy");
    assert_eq!(healthy.len(), 3);
    assert!(healthy.iter().all(|v| **v == json!(true)));
}

#[test]
fn fill_preserves_existing_values_across_levels() {
    let mut data = json!({"defaults": {"retries": 3}});

    dot::fill(&mut data, "defaults.retries", json!(10)).unwrap();
    dot::fill(&mut data, "defaults.timeout", json!(30)).unwrap();

    assert_eq!(
        data,
        json!({"defaults": {"retries": 3, "timeout": 30}})
    );
}

#[test]
fn deep_write_builds_every_intermediate_level() {
    let mut data = json!(null);
    dot::set(&mut data, "a.b.c.d.e", json!(1)).unwrap();
    assert_eq!(data, json!({"a": {"b": {"c": {"d": {"e": 1}}}}}));
}
