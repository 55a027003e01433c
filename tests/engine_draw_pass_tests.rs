use barchart_rs::api::{BarChartConfig, BarChartEngine};
use barchart_rs::core::{
    AnimationPhases, BarChartData, BarDataSet, BarEntry, BarStyle, ValueTransformer, Viewport,
};
use barchart_rs::error::ChartError;
use barchart_rs::layout::{DecimalFormatter, HighlightRequest};
use barchart_rs::render::{Color, RecordingSurface};

fn transformer() -> ValueTransformer {
    ValueTransformer::new(Viewport::new(200, 100), -1.0, 5.0, -5.0, 10.0).expect("transformer")
}

fn sample_data(style: BarStyle) -> BarChartData {
    let plain = BarDataSet::new(
        "plain",
        vec![
            BarEntry::new(0.0, 4.0).expect("entry"),
            BarEntry::new(1.0, -2.0).expect("entry"),
        ],
    )
    .expect("data set")
    .with_style(style.clone());
    let stacked = BarDataSet::new(
        "stacked",
        vec![BarEntry::stacked(2.0, &[3.0, -2.0, 4.0]).expect("entry")],
    )
    .expect("data set")
    .with_style(style);
    BarChartData::new(vec![plain, stacked], 0.8).expect("data")
}

fn prepared_engine(data: &BarChartData, config: BarChartConfig) -> BarChartEngine {
    let mut engine = BarChartEngine::new(config).expect("engine");
    engine.prepare(data);
    engine
        .build_geometry(data, &transformer(), AnimationPhases::full())
        .expect("geometry");
    engine
}

#[test]
fn draw_pass_emits_one_fill_per_rect() {
    let data = sample_data(BarStyle::default());
    let engine = prepared_engine(&data, BarChartConfig::default());

    let mut surface = RecordingSurface::default();
    let stats = engine
        .draw_bars(&data, &transformer(), &mut surface)
        .expect("draw");

    // 2 simple bars + 3 stack segments
    assert_eq!(stats.bars_drawn, 5);
    assert_eq!(surface.fills.len(), 5);
    assert!(surface.strokes.is_empty());
    assert!(surface.rounded_fills.is_empty());
}

#[test]
fn corner_radius_switches_to_rounded_fills() {
    let style = BarStyle {
        corner_radius: 3.0,
        ..BarStyle::default()
    };
    let data = sample_data(style);
    let engine = prepared_engine(&data, BarChartConfig::default());

    let mut surface = RecordingSurface::default();
    let stats = engine
        .draw_bars(&data, &transformer(), &mut surface)
        .expect("draw");

    assert_eq!(stats.bars_drawn, 5);
    assert!(surface.fills.is_empty());
    assert_eq!(surface.rounded_fills.len(), 5);
}

#[test]
fn border_width_adds_strokes() {
    let style = BarStyle {
        border_width: 1.5,
        outline_inset_px: 0.5,
        ..BarStyle::default()
    };
    let data = sample_data(style);
    let engine = prepared_engine(&data, BarChartConfig::default());

    let mut surface = RecordingSurface::default();
    let stats = engine
        .draw_bars(&data, &transformer(), &mut surface)
        .expect("draw");

    assert_eq!(stats.borders_drawn, 5);
    assert_eq!(surface.strokes.len(), 5);
    for stroke in &surface.strokes {
        assert_eq!(stroke.stroke_width, 1.5);
    }
}

#[test]
fn geometry_pass_without_prepare_fails_loudly() {
    let data = sample_data(BarStyle::default());
    let mut engine = BarChartEngine::new(BarChartConfig::default()).expect("engine");

    let err = engine
        .build_geometry(&data, &transformer(), AnimationPhases::full())
        .expect_err("must refuse unprepared buffers");
    assert!(matches!(err, ChartError::ContractViolation(_)));
}

#[test]
fn phase_x_zero_builds_no_rects() {
    let data = sample_data(BarStyle::default());
    let mut engine = BarChartEngine::new(BarChartConfig::default()).expect("engine");
    engine.prepare(&data);

    let phases = AnimationPhases::new(0.0, 1.0).expect("phases");
    engine
        .build_geometry(&data, &transformer(), phases)
        .expect("geometry");

    let mut surface = RecordingSurface::default();
    let stats = engine
        .draw_bars(&data, &transformer(), &mut surface)
        .expect("draw");
    assert_eq!(stats.bars_drawn, 0);
    assert!(surface.is_empty());
}

#[test]
fn rebuilding_geometry_is_deterministic() {
    let data = sample_data(BarStyle::default());
    let phases = AnimationPhases::new(0.8, 0.6).expect("phases");

    let mut engine = BarChartEngine::new(BarChartConfig::default()).expect("engine");
    engine.prepare(&data);
    engine
        .build_geometry(&data, &transformer(), phases)
        .expect("geometry");
    let first: Vec<_> = engine
        .buffer(0)
        .expect("buffer")
        .pixel_rects()
        .to_vec();

    engine
        .build_geometry(&data, &transformer(), phases)
        .expect("geometry");
    let second: Vec<_> = engine
        .buffer(0)
        .expect("buffer")
        .pixel_rects()
        .to_vec();

    assert_eq!(first, second);
}

#[test]
fn draw_labels_emits_text_and_counts() {
    let data = sample_data(BarStyle::default());
    let engine = prepared_engine(&data, BarChartConfig::default());

    let mut surface = RecordingSurface::default();
    let stats = engine
        .draw_labels(
            &data,
            &transformer(),
            AnimationPhases::full(),
            Some(&DecimalFormatter { decimals: 1 }),
            &mut surface,
        )
        .expect("labels");

    assert_eq!(stats.labels_drawn, surface.texts.len());
    assert!(stats.labels_drawn >= 2, "simple bars must label");
}

#[test]
fn draw_highlight_fills_resolved_rect() {
    let data = sample_data(BarStyle::default());
    let engine = prepared_engine(&data, BarChartConfig::default());

    let request = HighlightRequest {
        x: 2.0,
        y: 1.0,
        data_set_index: 1,
        stack_index: Some(0),
    };
    let mut surface = RecordingSurface::default();
    let resolved = engine
        .draw_highlight(
            &data,
            &request,
            &transformer(),
            AnimationPhases::full(),
            &mut surface,
        )
        .expect("highlight")
        .expect("hit");

    assert_eq!(surface.fills.len(), 1);
    assert_eq!(surface.fills[0].rect, resolved.rect);
    let style = BarStyle::default();
    assert_eq!(resolved.color.alpha, style.highlight_alpha);
}

#[test]
fn highlight_miss_draws_nothing() {
    let data = sample_data(BarStyle::default());
    let engine = prepared_engine(&data, BarChartConfig::default());

    let request = HighlightRequest {
        x: 4.5,
        y: 0.0,
        data_set_index: 0,
        stack_index: None,
    };
    let mut surface = RecordingSurface::default();
    let resolved = engine
        .draw_highlight(
            &data,
            &request,
            &transformer(),
            AnimationPhases::full(),
            &mut surface,
        )
        .expect("highlight");

    assert!(resolved.is_none());
    assert!(surface.is_empty());
}

#[test]
fn config_json_round_trip_preserves_settings() {
    let config = BarChartConfig {
        draw_value_above_bar: false,
        side_flexible_labels: true,
        highlight_full_bar: true,
        contrast_guard: false,
        clip_bars_to_axis_range: false,
        value_offset_px: 6.0,
        icon_offset_x_px: 1.0,
        icon_offset_y_px: -1.0,
    };

    let json = config.to_json().expect("serialize");
    let parsed = BarChartConfig::from_json(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn config_defaults_fill_missing_json_fields() {
    let parsed = BarChartConfig::from_json("{}").expect("parse");
    assert_eq!(parsed, BarChartConfig::default());
}

#[test]
fn non_monotonic_entries_are_rejected() {
    let err = BarDataSet::new(
        "bad",
        vec![
            BarEntry::new(2.0, 1.0).expect("entry"),
            BarEntry::new(1.0, 1.0).expect("entry"),
        ],
    )
    .expect_err("must reject unordered entries");
    assert!(matches!(err, ChartError::ContractViolation(_)));
}

#[test]
fn invalid_style_is_rejected_at_data_construction() {
    let style = BarStyle {
        colors: vec![Color::rgb(2.0, 0.0, 0.0)],
        ..BarStyle::default()
    };
    let set = BarDataSet::new("bad", vec![BarEntry::new(0.0, 1.0).expect("entry")])
        .expect("data set")
        .with_style(style);
    let err = BarChartData::new(vec![set], 0.8).expect_err("must reject invalid color");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
