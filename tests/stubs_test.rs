use packsmith::error::Error;
use packsmith::kind::ALL_KINDS;
use packsmith::stubs::StubStore;
use std::path::Path;

fn crate_stubs() -> StubStore {
    StubStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("stubs"))
}

#[test]
fn test_every_kind_ships_a_stub() {
    let store = crate_stubs();
    for kind in ALL_KINDS {
        let stub = store.load(kind.key()).unwrap();
        assert!(!stub.is_empty(), "empty stub for '{kind}'");
    }
}

#[test]
fn test_manifest_keys_ship_stubs() {
    let store = crate_stubs();
    for key in ["scaffold/admin-menu", "assets/js/app", "package"] {
        assert!(store.load(key).is_ok(), "missing stub for '{key}'");
    }
}

#[test]
fn test_missing_stub_is_template_not_found() {
    let store = crate_stubs();
    match store.load("no-such-kind") {
        Err(Error::TemplateNotFound { key, path }) => {
            assert_eq!(key, "no-such-kind");
            assert!(path.ends_with("no-such-kind.stub"));
        }
        other => panic!("expected TemplateNotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_store_is_template_not_found() {
    let store = StubStore::new("/nonexistent/stubs");
    assert!(matches!(store.load("controller"), Err(Error::TemplateNotFound { .. })));
}
