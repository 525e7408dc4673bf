/// Integration tests for wordvec-plot.
///
/// They cover:
///   - Building plots from labeled vectors (shapes, validation errors)
///   - Idempotence of the stacked grid
///   - Pixel output of the heatmap cells (rendered without text)
///   - Saving PNG / SVG files end to end
///
/// Rendering with axes needs a system font. When none is available the
/// renderer reports `PlotError::Font` and the affected tests skip their
/// file checks.
use plotters::style::RGBColor;
use wordvec_plot::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const WORDS: [&str; 3] = ["king", "queen", "prince"];

fn pixel(buffer: &[u8], width: u32, x: u32, y: u32) -> RGBColor {
    let i = ((y * width + x) * 3) as usize;
    RGBColor(buffer[i], buffer[i + 1], buffer[i + 2])
}

fn cells_only(width: u32, height: u32) -> ChartConfig {
    ChartConfig::builder()
        .width(width)
        .height(height)
        .axes(false)
        .build()
}

/// Vertical positions of every `<text>` element whose content is exactly `word`.
fn text_y_positions(svg: &str, word: &str) -> Vec<f64> {
    let needle = format!(">{word}</text>");
    svg.match_indices(&needle)
        .map(|(end, _)| {
            let open = svg[..end].rfind("<text").expect("text element start");
            let tag = &svg[open..end];
            let y = tag.find(" y=\"").expect("y attribute") + 4;
            let len = tag[y..].find('"').expect("closing quote");
            tag[y..y + len].parse::<f64>().expect("numeric y")
        })
        .collect()
}

/// Runs a render that draws text, treating a missing font as a skip.
fn allow_missing_font<T>(result: Result<T, PlotError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(PlotError::Font(msg)) => {
            eprintln!("skipping: no usable font ({msg})");
            None
        }
        Err(e) => panic!("render failed: {e}"),
    }
}

// ===========================================================================
// make_word_vec_plot
// ===========================================================================

#[test]
fn builds_plot_for_equal_length_vectors() {
    let vecs = generate_word_vecs(WORDS.len(), 100);
    let plot = make_word_vec_plot(&WORDS, &vecs, None).expect("plot should build");
    assert_eq!(plot.shape(), (3, 100));
    assert_eq!(plot.labels(), &["king", "queen", "prince"]);
}

#[test]
fn grid_shape_is_labels_by_vector_length() {
    for (rows, dims) in [(1, 1), (2, 7), (5, 300)] {
        let labels: Vec<String> = (0..rows).map(|i| format!("w{i}")).collect();
        let vecs = generate_word_vecs_seeded(rows, dims, 1);
        let plot = make_word_vec_plot(&labels, &vecs, None).unwrap();
        assert_eq!(plot.grid().shape(), (rows, dims));
        assert_eq!(plot.grid().rows(), rows);
        assert_eq!(plot.grid().dims(), dims);
    }
}

#[test]
fn grid_keeps_vector_values_in_row_order() {
    let vecs = generate_word_vecs_seeded(3, 10, 5);
    let plot = make_word_vec_plot(&WORDS, &vecs, None).unwrap();
    for (i, word) in WORDS.iter().enumerate() {
        assert_eq!(plot.grid().row(word).unwrap().to_vec(), vecs[i]);
    }
}

#[test]
fn mismatched_vector_lengths_are_rejected() {
    let vecs = vec![vec![0.0; 100], vec![0.0; 99], vec![0.0; 100]];
    let err = make_word_vec_plot(&WORDS, &vecs, None).unwrap_err();
    assert!(
        matches!(
            err,
            PlotError::RaggedVectors {
                row: 1,
                expected: 100,
                found: 99
            }
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn label_count_mismatch_is_rejected() {
    let vecs = generate_word_vecs(2, 100);
    let err = make_word_vec_plot(&WORDS, &vecs, None).unwrap_err();
    assert!(matches!(
        err,
        PlotError::LabelCountMismatch {
            labels: 3,
            vectors: 2
        }
    ));
    assert_eq!(err.to_string(), "got 3 labels for 2 vectors");
}

#[test]
fn empty_input_is_rejected() {
    let no_words: Vec<String> = Vec::new();
    let no_vecs: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(
        make_word_vec_plot(&no_words, &no_vecs, None),
        Err(PlotError::EmptyInput)
    ));
}

#[test]
fn building_twice_yields_equal_grids() {
    let vecs = generate_word_vecs_seeded(3, 100, 99);
    let a = make_word_vec_plot(&WORDS, &vecs, None).unwrap();
    let b = make_word_vec_plot(&WORDS, &vecs, None).unwrap();
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn building_does_not_touch_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.png");
    let config = ChartConfig::builder()
        .path(path.to_str().unwrap())
        .build();
    let vecs = generate_word_vecs(3, 4);
    make_word_vec_plot(&WORDS, &vecs, Some(config)).unwrap();
    assert!(!path.exists());
}

// ===========================================================================
// Rendering
// ===========================================================================

#[test]
fn cells_use_centered_bwr_colors() {
    // row 0: [-1, 1], row 1: [1, 0]
    let vecs = vec![vec![-1.0, 1.0], vec![1.0, 0.0]];
    let plot = make_word_vec_plot(&["neg", "pos"], &vecs, Some(cells_only(200, 200))).unwrap();
    let buffer = plot.render_rgb().unwrap();
    assert_eq!(buffer.len(), 200 * 200 * 3);

    // row 0 is the top half of the image
    assert_eq!(pixel(&buffer, 200, 50, 50), RGBColor(0, 0, 255));
    assert_eq!(pixel(&buffer, 200, 150, 50), RGBColor(255, 0, 0));
    assert_eq!(pixel(&buffer, 200, 50, 150), RGBColor(255, 0, 0));
    assert_eq!(pixel(&buffer, 200, 150, 150), RGBColor(255, 255, 255));
}

#[test]
fn uncentered_scale_spans_data_range() {
    let vecs = vec![vec![2.0, 4.0]];
    let config = ChartConfig::builder()
        .width(200)
        .height(100)
        .axes(false)
        .centered(false)
        .build();
    let plot = make_word_vec_plot(&["w"], &vecs, Some(config)).unwrap();
    let buffer = plot.render_rgb().unwrap();

    assert_eq!(pixel(&buffer, 200, 50, 50), RGBColor(0, 0, 255));
    assert_eq!(pixel(&buffer, 200, 150, 50), RGBColor(255, 0, 0));
}

#[test]
fn rendering_twice_gives_identical_pixels() {
    let vecs = generate_word_vecs_seeded(3, 20, 11);
    let plot = make_word_vec_plot(&WORDS, &vecs, Some(cells_only(160, 90))).unwrap();
    assert_eq!(plot.render_rgb().unwrap(), plot.render_rgb().unwrap());
}

#[test]
fn colorbar_takes_the_right_edge() {
    let vecs = vec![vec![-1.0, -1.0], vec![-1.0, -1.0]];
    let config = ChartConfig::builder()
        .width(400)
        .height(200)
        .axes(false)
        .colorbar(true)
        .build();
    let plot = make_word_vec_plot(&["a", "b"], &vecs, Some(config)).unwrap();
    let buffer = plot.render_rgb().unwrap();

    // heatmap keeps the left side, all blue
    assert_eq!(pixel(&buffer, 400, 100, 100), RGBColor(0, 0, 255));

    // the scale runs from blue at the bottom to red at the top
    let top = pixel(&buffer, 400, 345, 25);
    let bottom = pixel(&buffer, 400, 345, 175);
    assert!(top.0 > 200 && top.2 < 100, "expected red near the top, got {top:?}");
    assert!(bottom.2 > 200 && bottom.0 < 100, "expected blue near the bottom, got {bottom:?}");
}

// ===========================================================================
// Saving
// ===========================================================================

#[test]
fn saves_non_empty_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cells.png");

    let vecs = generate_word_vecs(WORDS.len(), 100);
    let plot = make_word_vec_plot(&WORDS, &vecs, Some(cells_only(320, 180))).unwrap();
    assert_eq!(plot.shape(), (3, 100));

    plot.save(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn saves_labelled_figure_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tmp.png");

    let vecs = generate_word_vecs(WORDS.len(), 100);
    let plot = make_word_vec_plot(&WORDS, &vecs, None).unwrap();

    if allow_missing_font(plot.save(&path)).is_some() {
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }
}

#[test]
fn svg_output_is_chosen_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cells.SVG");

    let vecs = vec![vec![-0.5, 0.5, 0.0]];
    let plot = make_word_vec_plot(&["w"], &vecs, Some(cells_only(300, 100))).unwrap();
    plot.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("<svg"));
    assert!(text.contains("<rect"));
}

#[test]
fn svg_with_axes_contains_every_label() {
    let vecs = generate_word_vecs_seeded(3, 10, 3);
    let config = ChartConfig::builder()
        .caption("embeddings")
        .colorbar(true)
        .build();
    let plot = make_word_vec_plot(&WORDS, &vecs, Some(config)).unwrap();

    if let Some(svg) = allow_missing_font(plot.render_svg()) {
        for word in WORDS {
            assert!(svg.contains(word), "missing tick label {word}");
        }
        assert!(svg.contains("embeddings"));
    }
}

#[test]
fn row_ticks_are_one_per_word_top_to_bottom() {
    let vecs = generate_word_vecs_seeded(3, 100, 8);
    let plot = make_word_vec_plot(&WORDS, &vecs, None).unwrap();

    let Some(svg) = allow_missing_font(plot.render_svg()) else {
        return;
    };

    let mut ys = Vec::new();
    for word in WORDS {
        let positions = text_y_positions(&svg, word);
        assert_eq!(positions.len(), 1, "{word} should label exactly one row, got {positions:?}");
        ys.push(positions[0]);
    }

    // svg y grows downwards: king on top, prince at the bottom
    assert!(ys[0] < ys[1] && ys[1] < ys[2], "rows out of order: {ys:?}");
}

#[test]
fn single_row_gets_a_single_tick() {
    let vecs = vec![vec![0.5, -0.5, 0.25]];
    let plot = make_word_vec_plot(&["solo"], &vecs, None).unwrap();

    if let Some(svg) = allow_missing_font(plot.render_svg()) {
        assert_eq!(text_y_positions(&svg, "solo").len(), 1);
    }
}

#[test]
fn save_default_writes_to_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("configured.png");
    let config = ChartConfig::builder()
        .path(path.to_str().unwrap())
        .width(160)
        .height(90)
        .axes(false)
        .build();

    let vecs = generate_word_vecs(WORDS.len(), 20);
    let plot = make_word_vec_plot(&WORDS, &vecs, Some(config)).unwrap();
    plot.save_default().unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn extreme_values_keep_their_colors() {
    let vecs = vec![vec![-f64::MAX, f64::MAX]];
    let config = ChartConfig::builder()
        .width(400)
        .height(100)
        .axes(false)
        .colorbar(true)
        .build();
    let plot = make_word_vec_plot(&["huge"], &vecs, Some(config)).unwrap();
    let buffer = plot.render_rgb().unwrap();

    // heatmap spans x 0..290, one cell per half
    assert_eq!(pixel(&buffer, 400, 70, 50), RGBColor(0, 0, 255));
    assert_eq!(pixel(&buffer, 400, 220, 50), RGBColor(255, 0, 0));
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("plot.png");

    let vecs = vec![vec![1.0, 2.0]];
    let plot = make_word_vec_plot(&["w"], &vecs, Some(cells_only(50, 50))).unwrap();
    assert!(plot.save(&path).is_err());
}
