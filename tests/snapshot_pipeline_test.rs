//! Snapshot file in, snippet file out

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use restdocgen::application::{
    ApplicationError, GenerateDocsRequest, GenerateDocsUseCase, ListHandlersUseCase,
};
use restdocgen::core::GeneratorConfig;
use restdocgen::generation::{HttpMethod, RestDocGenerator, SnapshotLoader};
use restdocgen::infrastructure::{FileOutputSink, FileSnapshotLoader, MemorySink};
use tempfile::{Builder, TempDir};

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn request(snapshot: String, handler: Option<&str>) -> GenerateDocsRequest {
    GenerateDocsRequest {
        snapshot_path: snapshot,
        handler: handler.map(str::to_string),
        config_path: None,
    }
}

#[tokio::test]
async fn test_generate_all_handlers_to_file() {
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("snippets").join("library.java");
    let use_case = GenerateDocsUseCase::new(
        Arc::new(FileSnapshotLoader::new()),
        Arc::new(FileOutputSink::new(&out_path)),
    );

    let response = use_case
        .execute(request(fixture("library.yaml"), None))
        .await
        .unwrap();

    let summary: Vec<(&str, HttpMethod, &str)> = response
        .generated
        .iter()
        .map(|doc| (doc.handler.as_str(), doc.method, doc.path.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("getBook", HttpMethod::Get, "/books/{isbn}"),
            ("searchBooks", HttpMethod::Get, "/books/search"),
            ("createBook", HttpMethod::Post, "/books"),
        ]
    );
    assert_eq!(response.skipped, 1);

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(written.matches("mockMvc.perform(").count(), 3);
    assert!(written.contains("mockMvc.perform(get(\"/books/{isbn}\", isbn))"));
    assert!(written.contains("mockMvc.perform(post(\"/books\")"));
    assert!(written.contains("document(\"search_books\""));
}

#[tokio::test]
async fn test_response_fields_for_nested_book() {
    let loader = FileSnapshotLoader::new();
    let snapshot = loader.load(&fixture("library.yaml")).await.unwrap();
    let config = GeneratorConfig::default();
    let generator = RestDocGenerator::new(&snapshot, &config).unwrap();

    let doc = generator
        .generate(snapshot.handler("getBook").unwrap())
        .unwrap()
        .unwrap();

    let expected_fields = [
        ("isbn", "STRING"),
        ("title", "STRING"),
        ("pages", "NUMBER"),
        ("available", "BOOLEAN"),
        ("genre", "STRING"),
        ("author.name", "STRING"),
        ("author.born", "STRING"),
        ("chapters.[].number", "NUMBER"),
        ("chapters.[].title", "STRING"),
    ];
    for (path, json_type) in expected_fields {
        let entry = format!("fieldWithPath(\"{path}\").type(JsonFieldType.{json_type})");
        assert!(doc.text.contains(&entry), "missing {entry}");
    }
    assert!(!doc.text.contains("SERIAL_VERSION"));
    assert!(!doc.text.contains("author.books"));

    // Author.books points back at Book
    assert_eq!(doc.diagnostics.len(), 1);
    assert!(doc.diagnostics[0].to_string().contains("author.books"));
}

#[tokio::test]
async fn test_model_attribute_and_page_response() {
    let sink = Arc::new(MemorySink::new());
    let use_case = GenerateDocsUseCase::new(Arc::new(FileSnapshotLoader::new()), sink.clone());

    use_case
        .execute(request(fixture("library.yaml"), Some("searchBooks")))
        .await
        .unwrap();

    let published = sink.published();
    assert_eq!(published.len(), 1);
    let text = &published[0];
    assert!(text.contains(".params(search)"));
    assert!(text.contains("requestParameters(\n\t\t\t\tparameterWithName(\"title\").description(\"\"),\n\t\t\t\tparameterWithName(\"genre\").description(\"\")\n\t\t\t)"));
    assert!(text.contains("fieldWithPath(\"[].isbn\").type(JsonFieldType.STRING)"));
    assert!(text.contains("fieldWithPath(\"[].chapters.[].number\").type(JsonFieldType.NUMBER)"));
    assert!(!text.contains("pageable"));
    assert!(!text.contains("requestFields("));
}

#[tokio::test]
async fn test_named_handler_errors() {
    let sink = Arc::new(MemorySink::new());
    let use_case = GenerateDocsUseCase::new(Arc::new(FileSnapshotLoader::new()), sink.clone());

    let missing = use_case
        .execute(request(fixture("library.yaml"), Some("deleteBook")))
        .await;
    assert!(matches!(missing, Err(ApplicationError::HandlerNotFound(name)) if name == "deleteBook"));

    let not_mapped = use_case
        .execute(request(fixture("library.yaml"), Some("toDto")))
        .await;
    assert!(matches!(not_mapped, Err(ApplicationError::NotApplicable(name)) if name == "toDto"));

    let no_file = use_case
        .execute(request(fixture("does-not-exist.yaml"), None))
        .await;
    assert!(matches!(no_file, Err(ApplicationError::GenerationError(_))));

    assert!(sink.published().is_empty());
}

#[tokio::test]
async fn test_json_snapshot_with_config() {
    let mut snapshot = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        snapshot,
        r#"{{
  "classes": [
    {{ "name": "com.acme.Tag", "fields": [{{ "name": "label", "type": "String" }}] }}
  ],
  "handlers": [
    {{
      "name": "listTags",
      "annotations": [{{ "name": "GetMapping", "attributes": {{ "value": "\"/tags\"" }} }}],
      "return_type": "java.util.List<com.acme.Tag>"
    }}
  ]
}}"#
    )
    .unwrap();

    let mut config = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "client_name = \"restClient\"").unwrap();
    writeln!(config, "document_identifier = \"tags-list\"").unwrap();

    let sink = Arc::new(MemorySink::new());
    let use_case = GenerateDocsUseCase::new(Arc::new(FileSnapshotLoader::new()), sink.clone());
    let response = use_case
        .execute(GenerateDocsRequest {
            snapshot_path: snapshot.path().to_string_lossy().into_owned(),
            handler: None,
            config_path: Some(config.path().to_path_buf()),
        })
        .await
        .unwrap();

    assert_eq!(response.generated.len(), 1);
    let text = &sink.published()[0];
    assert!(text.starts_with("restClient.perform(get(\"/tags\"))"));
    assert!(text.contains("document(\"tags-list\""));
    assert!(text.contains("fieldWithPath(\"[].label\").type(JsonFieldType.STRING)"));
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let mut config = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "max_depth = 0").unwrap();

    let sink = Arc::new(MemorySink::new());
    let use_case = GenerateDocsUseCase::new(Arc::new(FileSnapshotLoader::new()), sink.clone());
    let result = use_case
        .execute(GenerateDocsRequest {
            snapshot_path: fixture("library.yaml"),
            handler: None,
            config_path: Some(config.path().to_path_buf()),
        })
        .await;

    assert!(result.is_err());
    assert!(sink.published().is_empty());
}

#[tokio::test]
async fn test_list_handlers_from_fixture() {
    let use_case = ListHandlersUseCase::new(Arc::new(FileSnapshotLoader::new()));
    let handlers = use_case.execute(&fixture("library.yaml")).await.unwrap();

    let names: Vec<&str> = handlers.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["getBook", "searchBooks", "createBook"]);
}

#[test]
fn test_cli_handlers_command() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_restdocgen"))
        .args(["handlers", "--snapshot", &fixture("library.yaml")])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("GET"));
    assert!(stdout.contains("/books/{isbn}"));
    assert!(stdout.contains("createBook"));
}
