use lopdf::{Dictionary, Document, Object, Stream};
use pdf_restack::commands::{generate, merge, pad, pagenum, reorder, split};
use pdf_restack::render::{page_dimensions, source_page_ids};
use pdf_restack::*;

/// Build an in-memory test document with one page per entry in `sizes`.
/// Each page's content stream carries a distinguishable marker comment so
/// reorderings can be verified from the result document.
fn create_test_pdf(sizes: &[(f32, f32)]) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for (i, &(width, height)) in sizes.iter().enumerate() {
        let content = format!("q Q % page-{i}\n");
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(width),
                    Object::Real(height),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(sizes.len() as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

fn result_page_sizes(doc: &Document) -> Vec<(f32, f32)> {
    source_page_ids(doc)
        .iter()
        .map(|&id| page_dimensions(doc, id).unwrap())
        .collect()
}

fn result_page_contents(doc: &Document) -> Vec<String> {
    doc.page_iter()
        .map(|id| String::from_utf8_lossy(&doc.get_page_content(id).unwrap()).into_owned())
        .collect()
}

// =============================================================================
// Merge
// =============================================================================

#[test]
fn test_merge_sums_widths_and_maxes_heights() {
    let source = create_test_pdf(&[(100.0, 200.0); 5]);
    let result = merge::apply(&source, &MergeOptions { chunk: 2 }).unwrap();

    let sizes = result_page_sizes(&result);
    assert_eq!(sizes.len(), 3);
    let widths: Vec<f32> = sizes.iter().map(|s| s.0).collect();
    assert_eq!(widths, vec![200.0, 200.0, 100.0]);
    assert!(sizes.iter().all(|s| s.1 == 200.0));
}

#[test]
fn test_merge_mixed_heights() {
    let source = create_test_pdf(&[(100.0, 300.0), (120.0, 500.0), (80.0, 400.0)]);
    let result = merge::apply(&source, &MergeOptions { chunk: 2 }).unwrap();

    let sizes = result_page_sizes(&result);
    assert_eq!(sizes, vec![(220.0, 500.0), (80.0, 400.0)]);
}

#[test]
fn test_merge_places_pages_at_running_offsets() {
    let source = create_test_pdf(&[(100.0, 200.0); 2]);
    let result = merge::apply(&source, &MergeOptions { chunk: 2 }).unwrap();

    let contents = result_page_contents(&result);
    assert_eq!(contents.len(), 1);
    assert!(contents[0].contains("1 0 0 1 0 0 cm /P0 Do"));
    assert!(contents[0].contains("1 0 0 1 100 0 cm /P1 Do"));
}

#[test]
fn test_merge_rejects_empty_document() {
    let source = create_test_pdf(&[]);
    match merge::apply(&source, &MergeOptions::default()) {
        Err(RestackError::NoPages) => {}
        other => panic!("expected NoPages, got {other:?}"),
    }
}

#[test]
fn test_merge_rejects_zero_chunk() {
    let source = create_test_pdf(&[(100.0, 200.0)]);
    match merge::apply(&source, &MergeOptions { chunk: 0 }) {
        Err(RestackError::Config(_)) => {}
        other => panic!("expected Config error, got {other:?}"),
    }
}

// =============================================================================
// Split
// =============================================================================

#[test]
fn test_split_three_equal_strips() {
    let source = create_test_pdf(&[(300.0, 500.0)]);
    let result = split::apply(&source, &SplitOptions { chunk: 3 }).unwrap();

    let sizes = result_page_sizes(&result);
    assert_eq!(sizes, vec![(100.0, 500.0); 3]);

    // Each strip is translated back to the origin by its own offset
    let contents = result_page_contents(&result);
    assert!(contents[0].contains("1 0 0 1 -0 0 cm /P0 Do") || contents[0].contains("1 0 0 1 0 0 cm /P0 Do"));
    assert!(contents[1].contains("1 0 0 1 -100 0 cm /P0 Do"));
    assert!(contents[2].contains("1 0 0 1 -200 0 cm /P0 Do"));
}

#[test]
fn test_split_every_source_page() {
    let source = create_test_pdf(&[(200.0, 400.0), (300.0, 400.0)]);
    let result = split::apply(&source, &SplitOptions { chunk: 2 }).unwrap();

    let sizes = result_page_sizes(&result);
    assert_eq!(sizes, vec![(100.0, 400.0), (100.0, 400.0), (150.0, 400.0), (150.0, 400.0)]);
}

#[test]
fn test_merge_then_split_restores_page_count() {
    let source = create_test_pdf(&[(100.0, 200.0); 6]);
    let merged = merge::apply(&source, &MergeOptions { chunk: 3 }).unwrap();
    assert_eq!(result_page_sizes(&merged).len(), 2);

    let restored = split::apply(&merged, &SplitOptions { chunk: 3 }).unwrap();
    assert_eq!(result_page_sizes(&restored).len(), 6);
}

// =============================================================================
// Reorder
// =============================================================================

fn marker_order(doc: &Document, count: usize) -> Vec<usize> {
    result_page_contents(doc)
        .iter()
        .map(|content| {
            (0..count)
                .find(|i| content.contains(&format!("% page-{i}")))
                .expect("result page carries no source marker")
        })
        .collect()
}

#[test]
fn test_reorder_weave_four_pages() {
    let source = create_test_pdf(&[(100.0, 200.0); 4]);
    let options = ReorderOptions {
        scheme: ReorderScheme::Weave,
    };
    let result = reorder::apply(&source, &options).unwrap();
    assert_eq!(marker_order(&result, 4), vec![0, 3, 1, 2]);
}

#[test]
fn test_reorder_pamphlet_four_pages() {
    let source = create_test_pdf(&[(100.0, 200.0); 4]);
    let options = ReorderOptions {
        scheme: ReorderScheme::Pamphlet,
    };
    let result = reorder::apply(&source, &options).unwrap();
    assert_eq!(marker_order(&result, 4), vec![3, 0, 1, 2]);
}

#[test]
fn test_reorder_weave_then_unweave_is_identity() {
    let source = create_test_pdf(&[(100.0, 200.0); 7]);
    let woven = reorder::apply(
        &source,
        &ReorderOptions {
            scheme: ReorderScheme::Weave,
        },
    )
    .unwrap();
    let restored = reorder::apply(
        &woven,
        &ReorderOptions {
            scheme: ReorderScheme::Unweave,
        },
    )
    .unwrap();
    assert_eq!(marker_order(&restored, 7), (0..7).collect::<Vec<_>>());
}

#[test]
fn test_reorder_single_page() {
    let source = create_test_pdf(&[(100.0, 200.0)]);
    for scheme in [
        ReorderScheme::Weave,
        ReorderScheme::Unweave,
        ReorderScheme::Pamphlet,
    ] {
        let result = reorder::apply(&source, &ReorderOptions { scheme }).unwrap();
        assert_eq!(marker_order(&result, 1), vec![0], "{scheme:?}");
    }
}

// =============================================================================
// Pad
// =============================================================================

#[test]
fn test_pad_to_multiple_appends_blank_pages() {
    let mut doc = create_test_pdf(&[(100.0, 200.0); 12]);
    let options = PadOptions {
        pages: 5,
        multiple: true,
        ..Default::default()
    };
    let added = pad::apply(&mut doc, &options).unwrap();

    assert_eq!(added, 3);
    let sizes = result_page_sizes(&doc);
    assert_eq!(sizes.len(), 15);
    // Inserted pages take the last source page's size
    assert!(sizes[12..].iter().all(|&s| s == (100.0, 200.0)));
    // Appended pages are blank
    let contents = result_page_contents(&doc);
    assert!(contents[12..].iter().all(|c| !c.contains("page-")));
}

#[test]
fn test_pad_at_start() {
    let mut doc = create_test_pdf(&[(100.0, 200.0); 3]);
    let options = PadOptions {
        pages: 2,
        position: PadPosition::Start,
        ..Default::default()
    };
    pad::apply(&mut doc, &options).unwrap();

    let contents = result_page_contents(&doc);
    assert_eq!(contents.len(), 5);
    assert!(!contents[0].contains("page-"));
    assert!(!contents[1].contains("page-"));
    assert!(contents[2].contains("% page-0"));
}

#[test]
fn test_pad_at_explicit_index_is_contiguous() {
    let mut doc = create_test_pdf(&[(100.0, 200.0); 3]);
    let options = PadOptions {
        pages: 2,
        position: PadPosition::Index(1),
        ..Default::default()
    };
    pad::apply(&mut doc, &options).unwrap();

    let contents = result_page_contents(&doc);
    assert!(contents[0].contains("% page-0"));
    assert!(!contents[1].contains("page-"));
    assert!(!contents[2].contains("page-"));
    assert!(contents[3].contains("% page-1"));
    assert!(contents[4].contains("% page-2"));
}

#[test]
fn test_pad_explicit_size_override() {
    let mut doc = create_test_pdf(&[(100.0, 200.0)]);
    let options = PadOptions {
        pages: 1,
        width: Some(400.0),
        ..Default::default()
    };
    pad::apply(&mut doc, &options).unwrap();

    let sizes = result_page_sizes(&doc);
    // Width overridden, height inherited from the last source page
    assert_eq!(sizes[1], (400.0, 200.0));
}

#[test]
fn test_pad_rejects_empty_document() {
    let mut doc = create_test_pdf(&[]);
    match pad::apply(&mut doc, &PadOptions::default()) {
        Err(RestackError::NoPages) => {}
        other => panic!("expected NoPages, got {other:?}"),
    }
}

#[test]
fn test_pad_rejects_zero_pages() {
    let mut doc = create_test_pdf(&[(100.0, 200.0)]);
    let options = PadOptions {
        pages: 0,
        multiple: true,
        ..Default::default()
    };
    match pad::apply(&mut doc, &options) {
        Err(RestackError::Config(_)) => {}
        other => panic!("expected Config error, got {other:?}"),
    }
}

// =============================================================================
// Pagenum
// =============================================================================

#[test]
fn test_pagenum_skips_listed_and_last_pages() {
    let mut doc = create_test_pdf(&[(595.0, 842.0); 5]);
    let options = NumberingOptions {
        skip: vec![SkipRule::Page(2), SkipRule::Last],
        ..Default::default()
    };
    let drawn = pagenum::apply(&mut doc, &options).unwrap();
    assert_eq!(drawn, 3);

    // Skipped pages keep their assigned number out of the sequence; the
    // pages after them are not renumbered
    let contents = result_page_contents(&doc);
    assert!(contents[0].contains("(1) Tj"));
    assert!(!contents[1].contains("Tj"));
    assert!(contents[2].contains("(3) Tj"));
    assert!(contents[3].contains("(4) Tj"));
    assert!(!contents[4].contains("Tj"));
}

#[test]
fn test_pagenum_offset_restarts_numbering() {
    let mut doc = create_test_pdf(&[(595.0, 842.0); 4]);
    let options = NumberingOptions {
        offset: 2,
        ..Default::default()
    };
    let drawn = pagenum::apply(&mut doc, &options).unwrap();
    assert_eq!(drawn, 2);

    let contents = result_page_contents(&doc);
    assert!(!contents[0].contains("Tj"));
    assert!(!contents[1].contains("Tj"));
    assert!(contents[2].contains("(1) Tj"));
    assert!(contents[3].contains("(2) Tj"));
}

#[test]
fn test_pagenum_parity_alternation_positions() {
    let mut doc = create_test_pdf(&[(600.0, 800.0); 2]);
    let options = NumberingOptions {
        alternate: Some(AlternateMode::Parity),
        padding: Some(30.0),
        size: Some(12.0),
        ..Default::default()
    };
    pagenum::apply(&mut doc, &options).unwrap();

    let contents = result_page_contents(&doc);
    // Default anchor is left; page 1 stays at x=30, page 2 mirrors to x=570
    assert!(contents[0].contains("30 30 Td (1)"));
    assert!(contents[1].contains("570 30 Td (2)"));
}

#[test]
fn test_pagenum_rejects_empty_document() {
    let mut doc = create_test_pdf(&[]);
    match pagenum::apply(&mut doc, &NumberingOptions::default()) {
        Err(RestackError::NoPages) => {}
        other => panic!("expected NoPages, got {other:?}"),
    }
}

// =============================================================================
// Generate
// =============================================================================

#[test]
fn test_generate_portrait_default_size() {
    let doc = generate::build(&GenerateOptions {
        pages: 3,
        ..Default::default()
    })
    .unwrap();

    let sizes = result_page_sizes(&doc);
    assert_eq!(sizes, vec![(595.0, 842.0); 3]);

    let contents = result_page_contents(&doc);
    assert!(contents[0].contains("(1) Tj"));
    assert!(contents[2].contains("(3) Tj"));
}

#[test]
fn test_generate_landscape_swaps_dimensions() {
    let doc = generate::build(&GenerateOptions {
        pages: 1,
        orientation: Orientation::Landscape,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(result_page_sizes(&doc), vec![(842.0, 595.0)]);
}

#[test]
fn test_generate_rejects_zero_pages() {
    let options = GenerateOptions {
        pages: 0,
        ..Default::default()
    };
    match generate::build(&options) {
        Err(RestackError::Config(_)) => {}
        other => panic!("expected Config error, got {other:?}"),
    }
}

// =============================================================================
// I/O round trip
// =============================================================================

#[tokio::test]
async fn test_invalid_options_fail_before_input_is_read() {
    // A bad flag must surface as a configuration error even when the input
    // file does not exist: option validation comes before any input I/O
    let missing = std::path::Path::new("does_not_exist.pdf");

    let result = merge::run(MergeOptions { chunk: 0 }, Some(missing), None).await;
    assert!(matches!(result, Err(RestackError::Config(_))), "{result:?}");

    let result = split::run(SplitOptions { chunk: 0 }, Some(missing), None).await;
    assert!(matches!(result, Err(RestackError::Config(_))), "{result:?}");

    let options = PadOptions {
        pages: 0,
        ..Default::default()
    };
    let result = pad::run(options, Some(missing), None).await;
    assert!(matches!(result, Err(RestackError::Config(_))), "{result:?}");

    let options = NumberingOptions {
        size: Some(-1.0),
        ..Default::default()
    };
    let result = pagenum::run(options, Some(missing), None).await;
    assert!(matches!(result, Err(RestackError::Config(_))), "{result:?}");
}

#[tokio::test]
async fn test_save_and_reload_roundtrip() {
    use pdf_restack::commands::io::{load_document, save_document};

    let doc = create_test_pdf(&[(100.0, 200.0); 4]);
    let bytes = save_document(doc).await.unwrap();
    let reloaded = load_document(bytes).await.unwrap();
    assert_eq!(reloaded.get_pages().len(), 4);
}

#[tokio::test]
async fn test_file_io_roundtrip() {
    use pdf_restack::commands::io::{
        load_document, read_input_or_stdin, save_document, write_output_or_stdout,
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let doc = create_test_pdf(&[(100.0, 200.0); 2]);
    let bytes = save_document(doc).await.unwrap();
    write_output_or_stdout(bytes, Some(&path)).await.unwrap();

    let bytes = read_input_or_stdin(Some(&path)).await.unwrap();
    let reloaded = load_document(bytes).await.unwrap();
    assert_eq!(reloaded.get_pages().len(), 2);
}
