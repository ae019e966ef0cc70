use oncoband::core::Margin;
use oncoband::{OncobandError, XAxisLayout, YAxisLayout};

fn sample_names() -> Vec<String> {
    (1..=9).map(|i| format!("Patient{i}")).collect()
}

#[test]
fn y_layout_places_panels_left_to_right() {
    let metrics = YAxisLayout::new()
        .margin(Margin::new(20.0, 20.0, 60.0, 200.0))
        .window_width(1200.0)
        .gene_bar_padding(5.0)
        .gene_bar_width(80.0)
        .tick_mark_and_text_padding(4.0)
        .tick_length(6.0)
        .facets(["TP53", "HRD", "HRD", "HRD"])
        .domain(["TP53", "RAD51", "BRCA1", "BRCA2"])
        .compute_layout()
        .expect("fully configured layout");

    // Longest facet label "TP53" (4 chars), longest gene "RAD51"/"BRCA1"
    // (5 chars), both at the default 14px font.
    assert_eq!(metrics.facet_pos_x, 200.0);
    assert_eq!(metrics.facet_width, 4.0 * 14.0);
    assert_eq!(metrics.y_text_and_tick_width, 5.0 * 14.0 + 10.0);
    assert_eq!(metrics.oncoplot_pos_start_x, 200.0 + 56.0 + 80.0);
    assert_eq!(
        metrics.oncoplot_width,
        1200.0 - 200.0 - 20.0 - 56.0 - 80.0 - 80.0 - 5.0
    );
    assert_eq!(
        metrics.oncoplot_pos_end_x,
        metrics.oncoplot_pos_start_x + metrics.oncoplot_width
    );
    assert_eq!(metrics.gene_bar_pos_x, metrics.oncoplot_pos_end_x + 5.0);
}

#[test]
fn y_layout_font_size_scales_the_label_columns() {
    let layout = YAxisLayout::new()
        .margin(Margin::uniform(10.0))
        .window_width(800.0)
        .gene_bar_padding(0.0)
        .gene_bar_width(0.0)
        .tick_mark_and_text_padding(4.0)
        .tick_length(6.0)
        .facets(["AB"])
        .domain(["XYZ"]);

    let small = layout.clone().font_size_domain(10.0).compute_layout();
    let large = layout.font_size_domain(20.0).compute_layout();
    assert_eq!(small.unwrap().y_text_and_tick_width, 3.0 * 10.0 + 10.0);
    assert_eq!(large.unwrap().y_text_and_tick_width, 3.0 * 20.0 + 10.0);
}

#[test]
fn y_layout_reports_the_first_missing_field() {
    let err = YAxisLayout::new().compute_layout().unwrap_err();
    assert_eq!(err, OncobandError::MissingField("margin"));
    assert!(err.to_string().contains("margin"));

    let err = YAxisLayout::new()
        .margin(Margin::uniform(10.0))
        .window_width(800.0)
        .gene_bar_padding(5.0)
        .gene_bar_width(80.0)
        .tick_mark_and_text_padding(4.0)
        .tick_length(6.0)
        .domain(["TP53"])
        .compute_layout()
        .unwrap_err();
    assert_eq!(err, OncobandError::MissingField("facets"));
}

#[test]
fn x_layout_stacks_panels_top_to_bottom() {
    let metrics = XAxisLayout::new()
        .margin(Margin::new(20.0, 20.0, 60.0, 200.0))
        .window_height(900.0)
        .tmb_bar_padding(5.0)
        .tmb_bar_height(100.0)
        .tick_mark_and_text_padding(4.0)
        .tick_length(6.0)
        .oncoplot_clinical_padding(10.0)
        .clinical_row_height(20.0)
        .clinical_row_padding(2.0)
        .clinical_row_count(3)
        .domain(sample_names())
        .compute_layout()
        .expect("fully configured layout");

    assert_eq!(metrics.max_sample_labels_height, 0.0);
    assert_eq!(metrics.tmb_bar_pos_start_y, 20.0);
    assert_eq!(metrics.tmb_bar_pos_end_y, 120.0);
    assert_eq!(metrics.oncoplot_pos_start_y, 125.0);
    assert_eq!(metrics.clinical_height, 20.0 * 3.0 + 2.0 * 2.0);
    assert_eq!(
        metrics.oncoplot_height,
        900.0 - 100.0 - 64.0 - 0.0 - 5.0 - 10.0 - 20.0 - 60.0
    );
    assert_eq!(
        metrics.oncoplot_pos_end_y,
        metrics.oncoplot_pos_start_y + metrics.oncoplot_height
    );
    assert_eq!(metrics.clinical_start_y, metrics.oncoplot_pos_end_y + 10.0);
    assert_eq!(metrics.clinical_end_y, metrics.clinical_start_y + 64.0);
}

#[test]
fn sample_label_block_is_reserved_only_when_names_are_shown() {
    let layout = XAxisLayout::new()
        .margin(Margin::uniform(10.0))
        .window_height(600.0)
        .tmb_bar_padding(5.0)
        .tmb_bar_height(80.0)
        .tick_mark_and_text_padding(4.0)
        .tick_length(6.0)
        .domain(sample_names());

    let hidden = layout.clone().compute_layout().expect("layout");
    assert_eq!(hidden.max_sample_labels_height, 0.0);

    let shown = layout
        .show_sample_names(true)
        .font_size_x(12.0)
        .compute_layout()
        .expect("layout");
    // "Patient1" is 8 chars; the tick and its padding extend the block.
    assert_eq!(shown.max_sample_labels_height, 12.0 * 8.0 + 10.0);
    assert_eq!(
        shown.oncoplot_height,
        hidden.oncoplot_height - shown.max_sample_labels_height
    );
}

#[test]
fn x_layout_reports_the_first_missing_field() {
    let err = XAxisLayout::new().compute_layout().unwrap_err();
    assert_eq!(err, OncobandError::MissingField("margin"));

    let err = XAxisLayout::new()
        .margin(Margin::uniform(10.0))
        .window_height(600.0)
        .tmb_bar_padding(5.0)
        .tmb_bar_height(80.0)
        .tick_mark_and_text_padding(4.0)
        .tick_length(6.0)
        .compute_layout()
        .unwrap_err();
    assert_eq!(err, OncobandError::MissingField("domain"));
}

#[test]
fn inconsistent_panel_sizes_surface_as_negative_plot_height() {
    // Fixed panels taller than the window: the remainder goes negative and
    // is passed through untouched for the caller to catch.
    let metrics = XAxisLayout::new()
        .margin(Margin::uniform(10.0))
        .window_height(100.0)
        .tmb_bar_padding(5.0)
        .tmb_bar_height(200.0)
        .tick_mark_and_text_padding(4.0)
        .tick_length(6.0)
        .domain(["s1", "s2"])
        .compute_layout()
        .expect("layout computes even when inconsistent");

    assert!(metrics.oncoplot_height < 0.0);
    assert!(metrics.oncoplot_pos_end_y < metrics.oncoplot_pos_start_y);
}

#[test]
fn layout_metrics_round_trip_through_serde_json() {
    let metrics = YAxisLayout::new()
        .margin(Margin::uniform(12.0))
        .window_width(640.0)
        .gene_bar_padding(4.0)
        .gene_bar_width(40.0)
        .tick_mark_and_text_padding(4.0)
        .tick_length(6.0)
        .facets(["F"])
        .domain(["G1", "G2"])
        .compute_layout()
        .expect("layout");

    let json = serde_json::to_string(&metrics).expect("serialize");
    let back: oncoband::YLayoutMetrics = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, metrics);
}
