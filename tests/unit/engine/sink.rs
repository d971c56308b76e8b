use super::*;

#[test]
fn transform_writes_matrix_and_opacity() {
    let mut sink = InMemorySink::new();
    sink.set_transform(ElementId::Card(2), &Pose::at(10.0, -5.0, 0.0, 1.0).with_opacity(0.5));
    assert_eq!(
        sink.style(ElementId::Card(2), "transform"),
        Some("matrix(1, 0, 0, 1, 10, -5)")
    );
    assert_eq!(sink.style(ElementId::Card(2), "opacity"), Some("0.5"));
    assert_eq!(sink.writes(), 2);
}

#[test]
fn style_values_render_css() {
    assert_eq!(
        StyleValue::DashOffset(12.0).declaration(),
        ("stroke-dashoffset", "12".to_owned())
    );
    assert_eq!(
        StyleValue::WidthPercent(37.5).declaration(),
        ("width", "37.5%".to_owned())
    );
    assert_eq!(
        StyleValue::BackgroundShift(22.5).declaration(),
        ("background-position", "-22.5px 0".to_owned())
    );
    assert_eq!(
        StyleValue::BackgroundShift(0.0).declaration(),
        ("background-position", "0px 0".to_owned())
    );
    assert_eq!(
        StyleValue::BackgroundWidth(30.5).declaration(),
        ("background-size", "30.5px 100%".to_owned())
    );
}

#[test]
fn writes_to_unmounted_elements_are_dropped() {
    let mut sink = InMemorySink::with_mounted([ElementId::Price]);
    sink.set_style(ElementId::Price, &StyleValue::Text("$49".to_owned()));
    sink.set_style(ElementId::Check(0), &StyleValue::DashOffset(3.0));
    sink.set_transform(ElementId::Card(0), &Pose::default());
    assert_eq!(sink.style(ElementId::Price, "text"), Some("$49"));
    assert_eq!(sink.style(ElementId::Check(0), "stroke-dashoffset"), None);
    assert_eq!(sink.writes(), 1);
    assert_eq!(sink.dropped(), 3);
    assert_eq!(sink.elements().collect::<Vec<_>>(), vec![ElementId::Price]);
}

#[test]
fn later_writes_replace_earlier_ones() {
    let mut sink = InMemorySink::new();
    sink.set_style(ElementId::Price, &StyleValue::Text("$49".to_owned()));
    sink.set_style(ElementId::Price, &StyleValue::Text("$50".to_owned()));
    assert_eq!(sink.style(ElementId::Price, "text"), Some("$50"));
}

#[test]
fn table_includes_section_height() {
    let mut sink = InMemorySink::new();
    sink.set_track_height(TrackHeight::Vh(700.0));
    sink.set_style(ElementId::SliderFill(1), &StyleValue::WidthPercent(60.0));
    let table = sink.table();
    assert_eq!(sink.track_height(), Some("700vh"));
    assert_eq!(table["section"]["height"], "700vh");
    assert_eq!(table["slider-fill-1"]["width"], "60%");
}
