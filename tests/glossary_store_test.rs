use voxlate::application::ports::GlossaryStore;
use voxlate::infrastructure::knowledge::FileGlossaryStore;

#[tokio::test]
async fn given_plain_text_glossary_when_loading_then_content_is_returned_trimmed() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("medical.txt"),
        "\n용어1: 정의1\n용어2: 정의2\n\n",
    )
    .unwrap();
    let store = FileGlossaryStore::new(dir.path());

    let context = store.load("medical").await.unwrap();

    assert_eq!(context.as_deref(), Some("용어1: 정의1\n용어2: 정의2"));
}

#[tokio::test]
async fn given_tabular_glossary_when_loading_then_header_is_skipped_and_rows_keep_file_order() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("legal.csv"),
        "term,definition\n계약,contract\n해지,termination\n",
    )
    .unwrap();
    let store = FileGlossaryStore::new(dir.path());

    let context = store.load("legal").await.unwrap();

    assert_eq!(context.as_deref(), Some("계약: contract\n해지: termination"));
}

#[tokio::test]
async fn given_rows_with_a_single_column_when_loading_then_they_are_dropped() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("legal.csv"),
        "term,definition\n계약,contract\n고아행\n해지,termination\n",
    )
    .unwrap();
    let store = FileGlossaryStore::new(dir.path());

    let context = store.load("legal").await.unwrap();

    assert_eq!(context.as_deref(), Some("계약: contract\n해지: termination"));
}

#[tokio::test]
async fn given_both_text_and_tabular_files_when_loading_then_text_takes_precedence() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("medical.txt"), "from text file").unwrap();
    std::fs::write(
        dir.path().join("medical.csv"),
        "term,definition\nfrom,csv\n",
    )
    .unwrap();
    let store = FileGlossaryStore::new(dir.path());

    let context = store.load("medical").await.unwrap();

    assert_eq!(context.as_deref(), Some("from text file"));
}

#[tokio::test]
async fn given_unknown_domain_when_loading_then_none_is_returned() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = FileGlossaryStore::new(dir.path());

    let context = store.load("finance").await.unwrap();

    assert!(context.is_none());
}

#[tokio::test]
async fn given_byte_order_mark_when_loading_tabular_file_then_first_header_cell_still_matches() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("legal.csv"),
        "\u{feff}term,definition\n계약,contract\n",
    )
    .unwrap();
    let store = FileGlossaryStore::new(dir.path());

    let context = store.load("legal").await.unwrap();

    assert_eq!(context.as_deref(), Some("계약: contract"));
}
