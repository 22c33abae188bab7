use super::*;

#[test]
fn defaults_match_documented_startup_state() {
    let state = ViewState::new();
    assert_eq!(state.orientation(), Orientation::Left);
    assert_eq!(state.view_mode(), ViewMode::Side);
    assert_eq!(state.position(), MaskPosition::Top);
    assert_eq!(state.content_mode(), ContentMode::Image);
    assert_eq!(state.content_scale(), 1.0);
    assert_eq!(state.content_offset(), Vec2::ZERO);
    assert_eq!(state.mask_offset(), Vec2::ZERO);
    assert_eq!(state.overlay_scale(), 1.0);
    assert_eq!(state.overlay_offset(), Vec2::ZERO);
    assert_eq!(state.overlay_height_percent(), 24.0);
}

#[test]
fn position_is_a_pure_function_of_orientation_and_view() {
    let cases = [
        (Orientation::Left, ViewMode::Side, MaskPosition::Top),
        (Orientation::Right, ViewMode::Side, MaskPosition::Bottom),
        (Orientation::Left, ViewMode::Top, MaskPosition::Middle),
        (Orientation::Right, ViewMode::Top, MaskPosition::Middle),
    ];
    for (orientation, view_mode, expected) in cases {
        assert_eq!(MaskPosition::for_view(orientation, view_mode), expected);

        let mut state = ViewState::new();
        state.set_view_mode(view_mode);
        state.set_orientation(orientation);
        assert_eq!(state.position(), expected);
    }
}

#[test]
fn position_follows_either_setter_order() {
    let mut state = ViewState::new();
    state.set_orientation(Orientation::Right);
    assert_eq!(state.position(), MaskPosition::Bottom);
    state.set_view_mode(ViewMode::Top);
    assert_eq!(state.position(), MaskPosition::Middle);
    state.set_view_mode(ViewMode::Side);
    assert_eq!(state.position(), MaskPosition::Bottom);
}

#[test]
fn scale_setters_clamp_rather_than_reject() {
    let mut state = ViewState::new();
    state.set_content_scale(99.0);
    assert_eq!(state.content_scale(), CONTENT_SCALE_MAX);
    state.set_content_scale(0.0);
    assert_eq!(state.content_scale(), CONTENT_SCALE_MIN);
    state.set_content_scale(-5.0);
    assert_eq!(state.content_scale(), CONTENT_SCALE_MIN);

    state.set_overlay_scale(99.0);
    assert_eq!(state.overlay_scale(), CONTENT_SCALE_MAX);
    state.set_overlay_scale(0.05);
    assert_eq!(state.overlay_scale(), CONTENT_SCALE_MIN);
}

#[test]
fn overlay_height_clamps_to_documented_bounds() {
    let mut state = ViewState::new();
    state.set_overlay_height_percent(75.0);
    assert_eq!(state.overlay_height_percent(), OVERLAY_HEIGHT_MAX);
    state.set_overlay_height_percent(2.0);
    assert_eq!(state.overlay_height_percent(), OVERLAY_HEIGHT_MIN);
    state.set_overlay_height_percent(33.0);
    assert_eq!(state.overlay_height_percent(), 33.0);
}

#[test]
fn every_mutator_raises_the_repaint_flag() {
    let mut state = ViewState::new();
    assert!(state.take_repaint(), "first frame is due at startup");
    assert!(!state.take_repaint());

    let mutations: Vec<fn(&mut ViewState)> = vec![
        |s| s.set_orientation(Orientation::Right),
        |s| s.set_view_mode(ViewMode::Top),
        |s| s.set_content_mode(ContentMode::Color),
        |s| s.set_content_scale(2.0),
        |s| s.set_content_offset(Vec2::new(1.0, 2.0)),
        |s| s.set_mask_offset(Vec2::new(3.0, 4.0)),
        |s| s.set_overlay_scale(0.5),
        |s| s.set_overlay_offset(Vec2::new(-1.0, 0.0)),
        |s| s.set_overlay_height_percent(40.0),
        |s| s.request_repaint(),
    ];
    for mutate in mutations {
        mutate(&mut state);
        assert!(state.take_repaint());
        assert!(!state.take_repaint());
    }
}

#[test]
fn serde_roundtrip_preserves_fields_and_skips_repaint() {
    let mut state = ViewState::new();
    state.set_orientation(Orientation::Right);
    state.set_content_scale(1.5);
    state.set_content_offset(Vec2::new(4.0, -2.0));

    let json = serde_json::to_string(&state).unwrap();
    let mut back: ViewState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.orientation(), Orientation::Right);
    assert_eq!(back.position(), MaskPosition::Bottom);
    assert_eq!(back.content_scale(), 1.5);
    assert_eq!(back.content_offset(), Vec2::new(4.0, -2.0));
    // The repaint flag is transient state, not part of the model.
    assert!(!back.take_repaint());
}
