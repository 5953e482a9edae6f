use serde_json::json;
use std::io::Write;
use toolbelt::{runtime, ErrorCode};

// The global runtime can only be installed once per process, so everything
// that touches it lives in a single test.
#[test]
fn install_from_file_then_use_accessors() {
    // Nothing installed yet
    let err = runtime::app().unwrap_err();
    assert_eq!(err.code, ErrorCode::RuntimeNotInstalled);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"app": {{"name": "toolbelt", "debug": false}}, "limits": {{"upload": "5MB"}}}}"#
    )
    .unwrap();

    let app = runtime::install_from_file(file.path()).unwrap();
    assert_eq!(app.config_get("app.name"), Some(json!("toolbelt")));

    // config reads feed other helpers
    let upload = app.config_get("limits.upload").unwrap();
    let bytes = toolbelt::bytes::parse(upload.as_str().unwrap()).unwrap();
    assert_eq!(bytes, 5 * 1024 * 1024);

    // writes are visible through the same accessor
    app.config_set("app.debug", json!(true)).unwrap();
    assert_eq!(app.config_get("app.debug"), Some(json!(true)));

    // the free csrf accessor goes through the installed runtime
    let token = runtime::csrf_token().unwrap();
    assert!(toolbelt::ids::is_uuid4(&token));
    assert_eq!(runtime::csrf_token().unwrap(), token);

    // second install is rejected
    let err = runtime::install(json!({})).unwrap_err();
    assert_eq!(err.code, ErrorCode::RuntimeAlreadyInstalled);
}

#[test]
fn install_from_file_rejects_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    // Depending on test ordering the global may already be installed, but
    // the parse failure fires before the install attempt either way.
    let err = runtime::install_from_file(file.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationInvalidJson);
}

#[test]
fn install_from_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = runtime::install_from_file(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InternalIoError);
}
