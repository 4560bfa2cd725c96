use anyhow::Result;
use glossa::{Error, Message, load_locale_file, load_locales};
use pretty_assertions::assert_eq;

use crate::TestProject;

#[test]
fn test_scalar_round_trip() -> Result<()> {
    let project = TestProject::with_locale("e", r#"{"hello": "hello world"}"#)?;

    let set = load_locales(project.locales_dir())?;
    assert_eq!(
        set["e"].messages.get("hello").and_then(Message::as_text),
        Some("hello world")
    );

    Ok(())
}

#[test]
fn test_array_order_preserved() -> Result<()> {
    let project =
        TestProject::with_locale("e", r#"{"array": ["key1", "key2", "key3"]}"#)?;

    let set = load_locales(project.locales_dir())?;
    assert_eq!(
        set["e"].messages.get("array").and_then(Message::as_list),
        Some(&["key1".to_string(), "key2".to_string(), "key3".to_string()][..])
    );

    Ok(())
}

#[test]
fn test_empty_directory_loads_empty_set() -> Result<()> {
    let project = TestProject::new()?;

    let set = load_locales(project.locales_dir())?;
    assert!(set.is_empty());

    Ok(())
}

#[test]
fn test_missing_directory_is_an_error() -> Result<()> {
    let project = TestProject::new()?;
    let missing = project.root().join("no-such-dir");

    let err = load_locales(&missing).unwrap_err();
    assert!(matches!(err, Error::DirNotFound { .. }));
    assert_eq!(err.path(), &missing);

    Ok(())
}

#[test]
fn test_unrecognized_files_are_skipped() -> Result<()> {
    let project = TestProject::with_locale("en", r#"{"hello": "Hello"}"#)?;
    project.write_file("locales/README.md", "# notes")?;
    project.write_file("locales/en.json.bak", "not json at all")?;

    let set = load_locales(project.locales_dir())?;
    assert_eq!(set.keys().collect::<Vec<_>>(), vec!["en"]);

    Ok(())
}

#[test]
fn test_sub_directories_are_skipped() -> Result<()> {
    let project = TestProject::with_locale("en", r#"{"hello": "Hello"}"#)?;
    // A nested directory is not another locale grouping, even if it holds
    // json files.
    project.write_file("locales/nested/fr.json", r#"{"hello": "Bonjour"}"#)?;

    let set = load_locales(project.locales_dir())?;
    assert_eq!(set.keys().collect::<Vec<_>>(), vec!["en"]);

    Ok(())
}

#[test]
fn test_malformed_file_fails_the_whole_load() -> Result<()> {
    let project = TestProject::with_locale("en", r#"{"hello": "Hello"}"#)?;
    project.write_locale("broken", r#"{"hello": "#)?;

    let err = load_locales(project.locales_dir()).unwrap_err();
    match &err {
        Error::Parse { path, .. } => {
            assert!(path.ends_with("broken.json"), "path was {}", path.display());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    Ok(())
}

#[test]
fn test_unsupported_value_fails_the_whole_load() -> Result<()> {
    let project = TestProject::with_locale("en", r#"{"Common": {"count": 3}}"#)?;

    let err = load_locales(project.locales_dir()).unwrap_err();
    match &err {
        Error::InvalidValue { key, found, .. } => {
            assert_eq!(key, "Common.count");
            assert_eq!(*found, "number");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    Ok(())
}

#[test]
fn test_nested_groups_preserved_verbatim() -> Result<()> {
    let project = TestProject::with_locale(
        "en",
        r#"{
            "Auth": {
                "Login": { "title": "Log in", "hints": ["email", "password"] }
            }
        }"#,
    )?;

    let set = load_locales(project.locales_dir())?;
    let messages = &set["en"].messages;
    assert_eq!(
        messages.lookup("Auth.Login.title").and_then(Message::as_text),
        Some("Log in")
    );
    assert_eq!(
        messages.lookup("Auth.Login.hints").and_then(Message::as_list),
        Some(&["email".to_string(), "password".to_string()][..])
    );

    Ok(())
}

#[test]
fn test_repeated_loads_observe_updated_content() -> Result<()> {
    let project = TestProject::with_locale("en", r#"{"hello": "Hello"}"#)?;

    let first = load_locales(project.locales_dir())?;
    project.write_locale("en", r#"{"hello": "Hi"}"#)?;
    let second = load_locales(project.locales_dir())?;

    assert_eq!(
        first["en"].messages.get("hello").and_then(Message::as_text),
        Some("Hello")
    );
    assert_eq!(
        second["en"].messages.get("hello").and_then(Message::as_text),
        Some("Hi")
    );

    Ok(())
}

#[test]
fn test_load_single_locale_file() -> Result<()> {
    let project = TestProject::with_locale("en", r#"{"hello": "Hello"}"#)?;

    let tree = load_locale_file(project.root().join("locales/en.json"))?;
    assert_eq!(tree.get("hello").and_then(Message::as_text), Some("Hello"));

    let err = load_locale_file(project.locales_dir()).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));

    Ok(())
}

#[test]
fn test_locale_codes_keep_region_suffix() -> Result<()> {
    let project = TestProject::with_locale("zh-CN", r#"{"hello": "你好"}"#)?;
    project.write_locale("en", r#"{"hello": "Hello"}"#)?;

    let set = load_locales(project.locales_dir())?;
    assert_eq!(set.keys().collect::<Vec<_>>(), vec!["en", "zh-CN"]);
    assert!(set["zh-CN"].file_path.ends_with("zh-CN.json"));

    Ok(())
}
