use super::*;
use crate::compiler::PageError;
use crate::config::OutputFormat;
use std::collections::BTreeMap;
use tempfile::TempDir;

const BASE: &str = "<!doctype html>\n<html><head><title>{{ metadata.title }}</title></head>\n<body>{% include \"page.html\" %}</body></html>\n";
const PAGE: &str = "<main>{{ content | safe }}</main>";

/// Create a test site with templates and the given content files.
fn make_site(files: &[(&str, &str)]) -> (TempDir, SiteConfig) {
    let dir = TempDir::new().unwrap();
    let mut config = SiteConfig::default();
    config.root = dir.path().to_path_buf();
    config.build.content = dir.path().join("content");
    config.build.output = dir.path().join("public");
    config.templates.dir = dir.path().join("templates");

    fs::create_dir_all(&config.build.content).unwrap();
    fs::create_dir_all(&config.templates.dir).unwrap();
    fs::write(config.templates.base_path(), BASE).unwrap();
    fs::write(config.templates.page_path(), PAGE).unwrap();

    for (relative, content) in files {
        let path = config.build.content.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    (dir, config)
}

/// Snapshot every file under `root` as relative path -> bytes.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let path = e.path();
            let relative = path.strip_prefix(root).unwrap().to_path_buf();
            (relative, fs::read(&path).unwrap())
        })
        .collect()
}

#[test]
fn test_build_round_trip() {
    let (_dir, config) = make_site(&[("index.md", "---\ntitle: \"Hello\"\n---\n# Hi\n")]);

    let report = build_site(&config, true).unwrap();

    assert!(report.is_success());
    let html = fs::read_to_string(config.build.output.join("index.html")).unwrap();
    assert!(html.contains("<title>Hello</title>"));
    assert!(html.contains("<h1>Hi</h1>"));
}

#[test]
fn test_output_paths_mirror_content() {
    let (_dir, config) = make_site(&[
        ("index.md", "# Home"),
        ("blog/post.md", "---\ntitle: Post\n---\nText"),
    ]);

    let report = build_site(&config, true).unwrap();

    assert_eq!(
        report.written,
        vec![
            config.build.output.join("blog/post.html"),
            config.build.output.join("index.html"),
        ]
    );
    assert!(config.build.output.join("blog/post.html").is_file());
    assert!(config.build.output.join("index.html").is_file());
}

#[test]
fn test_walk_order_is_sorted_depth_first() {
    let (_dir, config) = make_site(&[
        ("z.md", "z"),
        ("b/c.md", "c"),
        ("a.md", "a"),
    ]);

    let files = collect_content_files(&config.build.content).unwrap();
    let relative: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(&config.build.content).unwrap().to_path_buf())
        .collect();

    assert_eq!(
        relative,
        vec![PathBuf::from("a.md"), PathBuf::from("b/c.md"), PathBuf::from("z.md")]
    );
}

#[test]
fn test_non_markdown_files_ignored() {
    let (_dir, config) = make_site(&[
        ("index.md", "# Home"),
        ("style.css", "body {}"),
        ("notes.markdown", "# Not picked up"),
        ("images/logo.png", "png"),
    ]);

    let report = build_site(&config, true).unwrap();

    assert_eq!(report.written, vec![config.build.output.join("index.html")]);
    let outputs = snapshot(&config.build.output);
    assert_eq!(outputs.keys().collect::<Vec<_>>(), vec![Path::new("index.html")]);
}

#[test]
fn test_missing_title_still_renders() {
    let (_dir, config) = make_site(&[("plain.md", "Just text")]);

    let report = build_site(&config, true).unwrap();

    assert!(report.is_success());
    let html = fs::read_to_string(config.build.output.join("plain.html")).unwrap();
    assert!(html.contains("<title></title>"));
    assert!(html.contains("<p>Just text</p>"));
}

#[test]
fn test_malformed_metadata_does_not_stop_build() {
    let (_dir, config) = make_site(&[
        ("a-bad.md", "---\ntitle: [unclosed\n---\nBody"),
        ("b-good.md", "---\ntitle: Good\n---\nBody"),
    ]);

    let report = build_site(&config, true).unwrap();

    assert_eq!(report.written, vec![config.build.output.join("b-good.html")]);
    assert_eq!(report.failures.len(), 1);

    let failure = &report.failures[0];
    assert_eq!(failure.source, config.build.content.join("a-bad.md"));
    assert!(matches!(
        failure.error.downcast_ref::<PageError>(),
        Some(PageError::Metadata(_))
    ));
    assert!(!config.build.output.join("a-bad.html").exists());
}

#[test]
fn test_template_error_is_per_file() {
    let (_dir, config) = make_site(&[("a.md", "# A"), ("b.md", "# B")]);
    fs::remove_file(config.templates.base_path()).unwrap();

    let report = build_site(&config, true).unwrap();

    assert!(report.written.is_empty());
    assert_eq!(report.failures.len(), 2);
}

#[test]
fn test_build_is_idempotent() {
    let (_dir, config) = make_site(&[
        ("index.md", "---\ntitle: Home\n---\n# Welcome\n\n- one\n- two\n"),
        ("blog/post.md", "---\ntitle: Post\n---\n| a | b |\n|---|---|\n| 1 | 2 |\n"),
        ("about.md", "No front matter here."),
    ]);

    build_site(&config, true).unwrap();
    let first = snapshot(&config.build.output);

    build_site(&config, true).unwrap();
    let second = snapshot(&config.build.output);

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn test_stray_output_removed_on_rebuild() {
    let (_dir, config) = make_site(&[("index.md", "# Home")]);

    build_site(&config, true).unwrap();
    let stray = config.build.output.join("stray.txt");
    fs::write(&stray, "left over").unwrap();
    fs::create_dir_all(config.build.output.join("old")).unwrap();

    build_site(&config, true).unwrap();

    assert!(!stray.exists());
    assert!(!config.build.output.join("old").exists());
    assert!(config.build.output.join("index.html").is_file());
}

#[test]
fn test_removed_source_output_disappears() {
    let (_dir, config) = make_site(&[("index.md", "# Home"), ("old.md", "# Old")]);

    build_site(&config, true).unwrap();
    assert!(config.build.output.join("old.html").exists());

    fs::remove_file(config.build.content.join("old.md")).unwrap();
    build_site(&config, true).unwrap();
    assert!(!config.build.output.join("old.html").exists());
}

#[test]
fn test_empty_content_dir() {
    let (_dir, config) = make_site(&[]);

    let report = build_site(&config, true).unwrap();

    assert!(report.written.is_empty());
    assert!(report.is_success());
    assert!(config.build.output.is_dir());
}

#[test]
fn test_missing_content_dir_is_fatal() {
    let (_dir, mut config) = make_site(&[]);
    config.build.content = config.root.join("does-not-exist");

    let err = build_site(&config, true).unwrap_err();
    assert!(matches!(err, BuildError::MissingContent(_)));
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, config) = make_site(&[("a.md", "# A"), ("locked/b.md", "# B")]);
    let locked = config.build.content.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not apply to root
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = build_site(&config, true);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    match result {
        Err(BuildError::Traversal(path, _)) => assert_eq!(path, locked),
        other => panic!("expected traversal error, got {other:?}"),
    }
    assert!(!config.build.output.join("a.html").exists());
}

#[test]
fn test_setup_failure_is_fatal() {
    let (_dir, mut config) = make_site(&[("index.md", "# Home")]);
    let blocker = config.root.join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();
    config.build.output = blocker.join("public");

    let err = build_site(&config, true).unwrap_err();
    assert!(matches!(err, BuildError::Setup(..)));
}

#[test]
fn test_setup_output_creates_missing_dir() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("nested/public");

    setup_output(&output).unwrap();
    assert!(output.is_dir());
}

#[test]
fn test_json_format() {
    let (_dir, mut config) = make_site(&[("post.md", "---\ntitle: Data\n---\n# Hi")]);
    config.build.format = OutputFormat::Json;

    let report = build_site(&config, true).unwrap();

    assert_eq!(report.written, vec![config.build.output.join("post.json")]);
    let value: serde_json::Value =
        serde_json::from_slice(&fs::read(config.build.output.join("post.json")).unwrap()).unwrap();
    assert_eq!(value["metadata"]["title"], "Data");
    assert_eq!(value["content"], "<h1>Hi</h1>\n");
}
