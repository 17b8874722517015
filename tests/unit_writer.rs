// tests/unit_writer.rs
use std::fs;
use tubetally_core::writer::write_json;

#[test]
fn test_creates_parent_dirs() {
    let d = tempfile::tempdir().unwrap();
    let p = d.path().join("a/b/c.json");
    write_json(&p, &serde_json::json!({"ok": true})).unwrap();
    assert!(p.exists());
}

#[test]
fn test_writes_indented_content() {
    let d = tempfile::tempdir().unwrap();
    let p = d.path().join("test.json");
    write_json(&p, &vec!["a", "b"]).unwrap();
    assert_eq!(fs::read_to_string(&p).unwrap(), "[\n  \"a\",\n  \"b\"\n]\n");
}

#[test]
fn test_overwrite_is_complete() {
    let d = tempfile::tempdir().unwrap();
    let p = d.path().join("test.json");
    fs::write(&p, "x".repeat(4096)).unwrap();
    write_json(&p, &1).unwrap();
    assert_eq!(fs::read_to_string(&p).unwrap(), "1\n");
}

#[test]
fn test_no_temp_files_left_behind() {
    let d = tempfile::tempdir().unwrap();
    for i in 0..5 {
        write_json(&d.path().join(format!("f{i}.json")), &i).unwrap();
    }
    let names: Vec<String> = fs::read_dir(d.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 5);
    assert!(names.iter().all(|n| n.ends_with(".json") && !n.starts_with('.')));
}

#[test]
fn test_unwritable_parent_fails_cleanly() {
    let d = tempfile::tempdir().unwrap();
    let blocker = d.path().join("blocker");
    fs::write(&blocker, "file, not dir").unwrap();
    let res = write_json(&blocker.join("out.json"), &1);
    assert!(res.is_err());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "file, not dir");
}
