use super::*;

#[test]
fn test_build_document_layout() {
    let sources = PreviewSources {
        markup: "<h1>Hi</h1>",
        stylesheet: "h1 { color: red; }",
        script: "console.log(1);",
    };
    assert_eq!(
        build_document(&sources),
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"UTF-8\">",
            "<style>h1 { color: red; }</style>",
            "</head><body><h1>Hi</h1>",
            "<script>console.log(1);</script>",
            "</body></html>",
        )
    );
}

#[test]
fn test_sources_are_inserted_verbatim() {
    let sources = PreviewSources {
        markup: "a & b",
        stylesheet: "",
        script: "if (a < b) {}",
    };
    let doc = build_document(&sources);
    assert!(doc.contains("<body>a & b<script>"));
    assert!(doc.contains("if (a < b) {}"));
}

#[test]
fn test_from_fn_maps_languages() {
    let sources = PreviewSources::from_fn(|language| language.key());
    assert_eq!(sources.markup, "html");
    assert_eq!(sources.stylesheet, "css");
    assert_eq!(sources.script, "js");
}
