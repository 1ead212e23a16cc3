use std::io::ErrorKind;
use std::path::Path;

use procmon::config::{LoadOptions, load_with};
use procmon::errors::ProcmonError;
use procmon::fs::FileSystem;
use procmon::fs::mock::MockFileSystem;

#[test]
fn loads_from_mock_filesystem() {
    let fs = MockFileSystem::new();
    fs.add_file(
        "/etc/procmon.json",
        r#"{"name":"sup","api":{"cmd":"/bin/api","sleep":5}}"#,
    );

    let cfg = load_with(&fs, "/etc/procmon.json", LoadOptions::default()).unwrap();

    assert_eq!(cfg.name, "sup");
    assert_eq!(cfg.find("api").unwrap().max_sleepsec, 5);
}

#[test]
fn short_read_is_a_resource_error() {
    let fs = MockFileSystem::new();
    fs.add_truncated("/etc/procmon.json", r#"{"name":"sup"#, 4096);

    match load_with(&fs, "/etc/procmon.json", LoadOptions::default()) {
        Err(ProcmonError::Resource { source, .. }) => {
            assert_eq!(source.kind(), ErrorKind::UnexpectedEof);
            assert!(source.to_string().contains("short read"));
        }
        other => panic!("Expected Resource error, got: {:?}", other),
    }
}

#[test]
fn unreadable_file_is_a_resource_error() {
    let fs = MockFileSystem::new();
    fs.add_unreadable("/etc/procmon.json", ErrorKind::PermissionDenied);

    match load_with(&fs, "/etc/procmon.json", LoadOptions::default()) {
        Err(ProcmonError::Resource { path, source }) => {
            assert_eq!(path.to_str(), Some("/etc/procmon.json"));
            assert_eq!(source.kind(), ErrorKind::PermissionDenied);
        }
        other => panic!("Expected Resource error, got: {:?}", other),
    }
}

#[test]
fn read_all_returns_complete_contents() {
    let fs = MockFileSystem::new();
    fs.add_file("a.json", b"{}".to_vec());

    assert_eq!(fs.read_all(Path::new("a.json")).unwrap(), b"{}");
    assert_eq!(
        fs.read_all(Path::new("missing.json")).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}
