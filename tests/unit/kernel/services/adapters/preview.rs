use super::*;
use tempfile::tempdir;

fn sources() -> PreviewSources<'static> {
    PreviewSources {
        markup: "<p>hi</p>",
        stylesheet: "p { color: red; }",
        script: "",
    }
}

#[test]
fn test_memory_preview_replaces_document() {
    let mut preview = MemoryPreview::new();
    assert_eq!(preview.document(), None);

    preview.render(&sources()).unwrap();
    let first = preview.document().unwrap().to_string();
    assert!(first.contains("<p>hi</p>"));

    preview
        .render(&PreviewSources {
            markup: "<b>x</b>",
            ..sources()
        })
        .unwrap();
    assert!(!preview.document().unwrap().contains("<p>hi</p>"));
    assert_eq!(preview.renders(), 2);
}

#[test]
fn test_file_preview_writes_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out").join("preview.html");
    let mut preview = FilePreview::new(&path);
    preview.render(&sources()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, build_document(&sources()));
    assert_eq!(preview.path(), path.as_path());
}
