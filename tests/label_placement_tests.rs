use approx::assert_abs_diff_eq;
use barchart_rs::api::{BarChartConfig, BarChartEngine};
use barchart_rs::core::{
    AnimationPhases, BarChartData, BarDataSet, BarEntry, BarStyle, IconRef, ValueTransformer,
    Viewport,
};
use barchart_rs::layout::DecimalFormatter;
use barchart_rs::render::Color;

const FONT_SIZE: f64 = 11.0;
const VALUE_OFFSET: f64 = 4.5;

fn transformer() -> ValueTransformer {
    // x in [0, 10] maps to [0, 100] px, y in [0, 10] maps to [100, 0] px
    ValueTransformer::new(Viewport::new(100, 100), 0.0, 10.0, 0.0, 10.0).expect("transformer")
}

fn build_engine(data: &BarChartData, config: BarChartConfig) -> BarChartEngine {
    let mut engine = BarChartEngine::new(config).expect("engine");
    engine.prepare(data);
    engine
        .build_geometry(data, &transformer(), AnimationPhases::full())
        .expect("geometry");
    engine
}

fn data_with_entries(entries: Vec<BarEntry>) -> BarChartData {
    let set = BarDataSet::new("series", entries).expect("data set");
    BarChartData::new(vec![set], 1.0).expect("data")
}

#[test]
fn positive_value_label_anchors_above_bar_top() {
    let data = data_with_entries(vec![BarEntry::new(2.0, 5.0).expect("entry")]);
    let engine = build_engine(&data, BarChartConfig::default());

    let pass = engine
        .place_labels(
            &data,
            &transformer(),
            AnimationPhases::full(),
            Some(&DecimalFormatter { decimals: 1 }),
        )
        .expect("labels");

    assert_eq!(pass.labels.len(), 1);
    let label = &pass.labels[0];
    assert_eq!(label.text, "5.0");
    assert_abs_diff_eq!(label.x, 20.0);
    // bar top at 50 px, label one text height plus the gap above it
    assert_abs_diff_eq!(label.y, 50.0 - (FONT_SIZE + VALUE_OFFSET));
    assert!(label.background_hint.is_none());
}

#[test]
fn no_formatter_disables_value_labels_only() {
    let icon = IconRef::new("dot", 8.0, 8.0).expect("icon");
    let data = data_with_entries(vec![
        BarEntry::new(2.0, 5.0).expect("entry").with_icon(icon),
    ]);
    let engine = build_engine(&data, BarChartConfig::default());

    let pass = engine
        .place_labels(&data, &transformer(), AnimationPhases::full(), None)
        .expect("labels");

    assert!(pass.labels.is_empty());
    assert_eq!(pass.icons.len(), 1);
}

#[test]
fn icon_anchor_applies_caller_offset() {
    let icon = IconRef::new("dot", 8.0, 8.0).expect("icon");
    let data = data_with_entries(vec![
        BarEntry::new(2.0, 5.0).expect("entry").with_icon(icon),
    ]);
    let config = BarChartConfig {
        icon_offset_x_px: 3.0,
        icon_offset_y_px: -7.0,
        ..BarChartConfig::default()
    };
    let engine = build_engine(&data, config);

    let pass = engine
        .place_labels(&data, &transformer(), AnimationPhases::full(), None)
        .expect("labels");

    assert_eq!(pass.icons.len(), 1);
    assert_abs_diff_eq!(pass.icons[0].x, 23.0);
    assert_abs_diff_eq!(pass.icons[0].y, 50.0 - (FONT_SIZE + VALUE_OFFSET) - 7.0);
}

#[test]
fn entry_left_of_viewport_terminates_series_scan() {
    // first entry entirely left of the visible range; x-monotonic data means
    // the scan stops instead of skipping
    let data = data_with_entries(vec![
        BarEntry::new(-5.0, 5.0).expect("entry"),
        BarEntry::new(2.0, 5.0).expect("entry"),
    ]);
    let engine = build_engine(&data, BarChartConfig::default());

    let pass = engine
        .place_labels(
            &data,
            &transformer(),
            AnimationPhases::full(),
            Some(&DecimalFormatter { decimals: 0 }),
        )
        .expect("labels");

    assert!(pass.labels.is_empty());
}

#[test]
fn entry_right_of_viewport_is_skipped_without_terminating() {
    let data = data_with_entries(vec![
        BarEntry::new(2.0, 5.0).expect("entry"),
        BarEntry::new(50.0, 5.0).expect("entry"),
        BarEntry::new(60.0, 5.0).expect("entry"),
    ]);
    let engine = build_engine(&data, BarChartConfig::default());

    let pass = engine
        .place_labels(
            &data,
            &transformer(),
            AnimationPhases::full(),
            Some(&DecimalFormatter { decimals: 0 }),
        )
        .expect("labels");

    assert_eq!(pass.labels.len(), 1);
    assert_eq!(pass.labels[0].entry_index, 0);
}

#[test]
fn side_flexible_label_falls_back_to_opposite_side() {
    // bar top close to the viewport top pushes the preferred anchor off-screen
    let data = data_with_entries(vec![BarEntry::new(2.0, 9.9).expect("entry")]);
    let config = BarChartConfig {
        side_flexible_labels: true,
        ..BarChartConfig::default()
    };
    let engine = build_engine(&data, config);

    let pass = engine
        .place_labels(
            &data,
            &transformer(),
            AnimationPhases::full(),
            Some(&DecimalFormatter { decimals: 1 }),
        )
        .expect("labels");

    assert_eq!(pass.labels.len(), 1);
    let label = &pass.labels[0];
    // fallback anchor sits just inside the bar, below its top edge
    assert_abs_diff_eq!(label.y, 1.0 + VALUE_OFFSET, epsilon = 1e-9);
    let style = BarStyle::default();
    assert_eq!(label.color, style.value_text_color_secondary);
    assert_eq!(label.background_hint, Some(style.colors[0]));
}

#[test]
fn without_side_flexible_anchor_stays_on_preferred_side() {
    let data = data_with_entries(vec![BarEntry::new(2.0, 9.9).expect("entry")]);
    let engine = build_engine(&data, BarChartConfig::default());

    let pass = engine
        .place_labels(
            &data,
            &transformer(),
            AnimationPhases::full(),
            Some(&DecimalFormatter { decimals: 1 }),
        )
        .expect("labels");

    assert_eq!(pass.labels.len(), 1);
    let label = &pass.labels[0];
    assert_abs_diff_eq!(label.y, 1.0 - (FONT_SIZE + VALUE_OFFSET), epsilon = 1e-9);
    assert!(label.background_hint.is_none());
}

#[test]
fn contrast_guard_inverts_text_too_close_to_bar_color() {
    let mut style = BarStyle::default();
    style.colors = vec![Color::rgb(0.30, 0.55, 0.85)];
    style.value_text_color = Color::rgb(0.35, 0.50, 0.80);
    let set = BarDataSet::new("series", vec![BarEntry::new(2.0, 5.0).expect("entry")])
        .expect("data set")
        .with_style(style);
    let data = BarChartData::new(vec![set], 1.0).expect("data");
    let engine = build_engine(&data, BarChartConfig::default());

    let pass = engine
        .place_labels(
            &data,
            &transformer(),
            AnimationPhases::full(),
            Some(&DecimalFormatter { decimals: 1 }),
        )
        .expect("labels");

    let expected = Color::rgb(0.35, 0.50, 0.80).inverted();
    assert_eq!(pass.labels[0].color, expected);
}

#[test]
fn stacked_entry_places_one_label_per_segment() {
    let data = data_with_entries(vec![
        BarEntry::stacked(2.0, &[3.0, 4.0]).expect("entry"),
    ]);
    let engine = build_engine(&data, BarChartConfig::default());

    let pass = engine
        .place_labels(
            &data,
            &transformer(),
            AnimationPhases::full(),
            Some(&DecimalFormatter { decimals: 0 }),
        )
        .expect("labels");

    assert_eq!(pass.labels.len(), 2);
    assert_eq!(pass.labels[0].stack_index, Some(0));
    assert_eq!(pass.labels[1].stack_index, Some(1));
    assert_eq!(pass.labels[0].text, "3");
    assert_eq!(pass.labels[1].text, "4");
}
