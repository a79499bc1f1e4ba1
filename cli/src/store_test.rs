use super::*;

fn temp_store() -> (tempfile::TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join("token"));
    (dir, store)
}

#[test]
fn read_missing_file_is_absent() {
    let (_dir, store) = temp_store();
    assert_eq!(store.read(), None);
}

#[test]
fn save_creates_parent_and_round_trips() {
    let (_dir, store) = temp_store();
    store.save("a.b.c");
    assert!(store.path().exists());
    assert_eq!(store.read().as_deref(), Some("a.b.c"));
}

#[test]
fn save_overwrites_previous_token() {
    let (_dir, store) = temp_store();
    store.save("first");
    store.save("second");
    assert_eq!(store.read().as_deref(), Some("second"));
}

#[test]
fn read_trims_trailing_newline() {
    let (dir, _) = temp_store();
    let path = dir.path().join("token");
    std::fs::write(&path, "tok\n").unwrap();
    assert_eq!(FileStore::new(&path).read().as_deref(), Some("tok"));
}

#[test]
fn blank_file_is_absent() {
    let (dir, _) = temp_store();
    let path = dir.path().join("token");
    std::fs::write(&path, "  \n").unwrap();
    assert_eq!(FileStore::new(&path).read(), None);
}

#[test]
fn clear_removes_file_and_is_idempotent() {
    let (_dir, store) = temp_store();
    store.save("tok");
    store.clear();
    assert_eq!(store.read(), None);
    store.clear();
    assert!(!store.path().exists());
}

#[cfg(unix)]
#[test]
fn saved_token_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;
    let (_dir, store) = temp_store();
    store.save("tok");
    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn overwriting_a_world_readable_file_tightens_it() {
    use std::os::unix::fs::PermissionsExt;
    let (_dir, store) = temp_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "old-token-that-is-longer").unwrap();
    std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();
    store.save("tok");
    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(store.read().as_deref(), Some("tok"));
}

#[test]
fn default_path_ends_with_vakya_token() {
    let path = default_session_path();
    assert!(path.ends_with(".vakya/token"));
}
