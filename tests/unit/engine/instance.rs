use super::*;
use crate::engine::headless::HeadlessHost;
use crate::engine::sink::InMemorySink;
use crate::foundation::core::Viewport;

const VP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

fn engine(config: &EngineConfig, host: HeadlessHost) -> EngineInstance<HeadlessHost, InMemorySink> {
    EngineInstance::new(config, host, InMemorySink::new()).unwrap()
}

#[test]
fn start_is_idempotent() {
    let mut e = engine(&EngineConfig::default(), HeadlessHost::new(VP, 0.0));
    e.start();
    e.start();
    assert!(e.is_running());
    assert!(e.host().listeners_attached());
    assert_eq!(e.host().frame_requests(), 1);
    assert_eq!(e.host().observed().count(), 1);
    assert_eq!(e.sink().track_height(), Some("700vh"));
}

#[test]
fn stop_cancels_pending_frame_and_detaches() {
    let mut e = engine(&EngineConfig::default(), HeadlessHost::new(VP, 0.0));
    e.start();
    let token = e.host().queued_frames()[0];
    e.stop();
    e.stop();
    assert!(!e.is_running());
    assert!(e.host().queued_frames().is_empty());
    assert!(!e.host().listeners_attached());
    assert_eq!(e.host().observed().count(), 0);
    assert!(!e.on_frame(token).unwrap());
    assert!(e.last_frame().is_none());
}

#[test]
fn events_before_start_do_nothing() {
    let mut e = engine(&EngineConfig::default(), HeadlessHost::new(VP, 0.0));
    e.on_scroll();
    e.on_resize();
    e.on_observed_resize();
    assert_eq!(e.host().frame_requests(), 0);
    assert_eq!(e.sink().track_height(), None);
}

#[test]
fn stale_token_is_ignored() {
    let mut e = engine(&EngineConfig::default(), HeadlessHost::new(VP, 0.0));
    e.start();
    let first = e.host_mut().next_frame().unwrap();
    assert!(e.on_frame(first).unwrap());
    e.on_scroll();
    assert!(!e.on_frame(first).unwrap());
    assert_eq!(e.pump().unwrap(), 1);
}

#[test]
fn unmounted_section_skips_frames() {
    let mut e = engine(&EngineConfig::default(), HeadlessHost::unmounted(VP));
    e.start();
    assert_eq!(e.pump().unwrap(), 0);
    assert_eq!(e.sink().elements().count(), 0);
}

#[test]
fn anchor_is_observed_when_configured() {
    let cfg = EngineConfig {
        next_section_selector: Some("#next".to_owned()),
        ..EngineConfig::default()
    };
    let host = HeadlessHost::new(VP, 0.0).with_anchor("#next", 4000.0);
    let mut e = engine(&cfg, host);
    e.start();
    assert_eq!(e.host().observed().count(), 2);
    assert_eq!(e.track_length(), Some(TrackLength::Exact { px: 4000.0 }));
    assert_eq!(e.sink().track_height(), Some("4000px"));
}

#[test]
fn anchor_move_is_picked_up_on_observed_resize() {
    let cfg = EngineConfig {
        next_section_selector: Some("#next".to_owned()),
        ..EngineConfig::default()
    };
    let host = HeadlessHost::new(VP, 0.0).with_anchor("#next", 4000.0);
    let mut e = engine(&cfg, host);
    e.start();
    e.pump().unwrap();
    e.host_mut().set_anchor("#next", 5000.0);
    e.on_observed_resize();
    assert_eq!(e.track_length(), Some(TrackLength::Exact { px: 5000.0 }));
    assert_eq!(e.sink().track_height(), Some("5000px"));
    assert_eq!(e.pump().unwrap(), 1);
}

#[test]
fn gradient_offsets_are_written_once_layout_is_known() {
    let cfg = EngineConfig {
        p4_length: 200.0,
        content: crate::config::ContentConfig {
            phrase: "abc".to_owned(),
            ..Default::default()
        },
        ..EngineConfig::default()
    };
    let host = HeadlessHost::new(VP, 0.0).with_letter_advances(vec![10.0, 12.0, 8.0]);
    let mut e = engine(&cfg, host);
    e.start();
    e.pump().unwrap();
    let sink = e.sink();
    assert_eq!(sink.style(ElementId::Letter(0), "background-position"), Some("0px 0"));
    assert_eq!(sink.style(ElementId::Letter(2), "background-position"), Some("-22px 0"));
    assert_eq!(sink.style(ElementId::Letter(1), "background-size"), Some("30px 100%"));
}

#[test]
fn incomplete_layout_defers_gradient() {
    let cfg = EngineConfig {
        p4_length: 200.0,
        ..EngineConfig::default()
    };
    let host = HeadlessHost::new(VP, 0.0).with_letter_advances(vec![10.0]);
    let mut e = engine(&cfg, host);
    e.start();
    e.pump().unwrap();
    assert_eq!(e.sink().style(ElementId::Letter(0), "background-size"), None);
}

#[test]
fn invalid_advances_defer_gradient_without_failing_frames() {
    let cfg = EngineConfig {
        p4_length: 200.0,
        content: crate::config::ContentConfig {
            phrase: "ab".to_owned(),
            ..Default::default()
        },
        ..EngineConfig::default()
    };
    let host = HeadlessHost::new(VP, 0.0).with_letter_advances(vec![10.0, f64::NAN]);
    let mut e = engine(&cfg, host);
    e.start();
    assert_eq!(e.pump().unwrap(), 1);
    assert!(e.last_frame().is_some());
    assert!(e.scroll_and_pump(100_000.0).unwrap() >= 1);
    assert_eq!(e.last_frame().unwrap().raw, 1.0);
    assert_eq!(e.sink().style(ElementId::Letter(0), "background-size"), None);

    e.host_mut().set_letter_advances(Some(vec![10.0, 6.0]));
    assert!(e.scroll_and_pump(100_001.0).unwrap() >= 1);
    assert_eq!(e.sink().style(ElementId::Letter(1), "background-size"), Some("16px 100%"));
    assert_eq!(e.sink().style(ElementId::Letter(1), "background-position"), Some("-10px 0"));
}

#[test]
fn counter_carries_across_frames() {
    let mut e = engine(&EngineConfig::default(), HeadlessHost::new(VP, 0.0));
    e.start();
    e.pump().unwrap();
    assert_eq!(e.counter().display(), 49.0);
    e.host_mut().scroll_to(100_000.0);
    e.on_scroll();
    let token = e.host_mut().next_frame().unwrap();
    assert!(e.on_frame(token).unwrap());
    let once = e.counter().display();
    assert!(once > 49.0);
    let token = e.host_mut().next_frame().unwrap();
    assert!(e.on_frame(token).unwrap());
    assert!(e.counter().display() > once);
}

#[test]
fn counter_settles_without_further_scroll_events() {
    let mut e = engine(&EngineConfig::default(), HeadlessHost::new(VP, 0.0));
    e.start();
    e.pump().unwrap();
    let evaluated = e.scroll_and_pump(100_000.0).unwrap();
    assert!(evaluated > 1, "evaluated={evaluated}");
    assert!(e.host().queued_frames().is_empty());

    let frame = e.last_frame().unwrap();
    let target = frame.target_price;
    assert!(target > 49.0);
    assert!((e.counter().display() - target).abs() <= crate::scenes::counter::SETTLE_EPSILON);
    let expected = format!("${}", target.round() as i64);
    assert_eq!(e.sink().style(ElementId::Price, "text"), Some(expected.as_str()));

    // settled: a later scroll at the same offset evaluates exactly one frame
    e.on_scroll();
    assert_eq!(e.pump().unwrap(), 1);
}

#[test]
fn headline_text_is_left_to_the_host() {
    let cfg = EngineConfig {
        content: crate::config::ContentConfig {
            headline: "Launch week".to_owned(),
            ..Default::default()
        },
        ..EngineConfig::default()
    };
    let mut e = engine(&cfg, HeadlessHost::new(VP, 0.0));
    e.start();
    e.pump().unwrap();
    assert!(e.sink().style(ElementId::Title, "transform").is_some());
    assert_eq!(e.sink().style(ElementId::Title, "text"), None);
}
