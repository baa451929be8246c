use super::*;
use crate::foundation::core::CornerRadii;

fn controller() -> HeroController {
    HeroController::new(HeroConfig::default()).unwrap()
}

fn src(ctl: &HeroController, id: NodeId) -> String {
    ctl.scene().get(id).unwrap().media.as_ref().unwrap().src.clone()
}

fn num(ctl: &HeroController, id: NodeId, p: Property) -> f64 {
    ctl.scene()
        .computed(id, p)
        .unwrap()
        .and_then(|v| v.as_number())
        .unwrap()
}

fn load_all(ctl: &mut HeroController) {
    for v in ctl.nodes().hero.gated_videos() {
        ctl.video_loaded(v, 0.1).unwrap();
    }
}

#[test]
fn background_index_maps_second_to_last_to_first() {
    let at = |v| background_index(VideoIndex::new(v, 4).unwrap());
    assert_eq!(at(1), 1);
    assert_eq!(at(2), 2);
    assert_eq!(at(3), 1);
    assert_eq!(at(4), 4);
}

#[test]
fn mount_shows_first_video_and_overlay() {
    let ctl = controller();
    let hero = ctl.nodes().hero;
    assert_eq!(ctl.state().current().get(), 1);
    assert_eq!(src(&ctl, hero.current_video), "videos/hero-2.mp4");
    assert_eq!(src(&ctl, hero.next_video), "videos/hero-1.mp4");
    assert_eq!(src(&ctl, hero.background_video), "videos/hero-1.mp4");
    assert!(ctl.scene().is_mounted(hero.loading_overlay));
    assert!(!ctl.state().is_ready());
}

#[test]
fn mount_renders_the_unrevealed_frame() {
    let ctl = controller();
    let frame = ctl.nodes().hero.video_frame;
    let shapes = ctl.config().reveal.shapes().unwrap();
    assert_eq!(
        ctl.scene().inline(frame, Property::ClipPath).unwrap(),
        Some(&PropValue::Polygon(shapes.unrevealed_clip_path))
    );
    match ctl.scene().inline(frame, Property::BorderRadius).unwrap() {
        Some(PropValue::Radii(r)) => assert!(r.0.iter().all(|l| l.is_zero())),
        other => panic!("unexpected radius {other:?}"),
    }
}

#[test]
fn scrolling_to_the_end_reveals_the_shape() {
    let mut ctl = controller();
    let frame = ctl.nodes().hero.video_frame;
    let shapes = ctl.config().reveal.shapes().unwrap();

    // Frame is 900px tall: progress runs from 0 to 450.
    ctl.scroll_to(450.0).unwrap();
    assert_eq!(
        ctl.scene().inline(frame, Property::ClipPath).unwrap(),
        Some(&PropValue::Polygon(shapes.clip_path.clone()))
    );
    assert_eq!(
        ctl.scene().inline(frame, Property::BorderRadius).unwrap(),
        Some(&PropValue::Radii(CornerRadii::parse("0 0 40% 10%").unwrap()))
    );

    ctl.scroll_to(-100.0).unwrap();
    assert_eq!(
        ctl.scene().inline(frame, Property::ClipPath).unwrap(),
        Some(&PropValue::Polygon(shapes.unrevealed_clip_path))
    );
}

#[test]
fn three_loads_open_the_gate_and_drop_the_overlay() {
    let mut ctl = controller();
    let hero = ctl.nodes().hero;
    assert_eq!(
        ctl.video_loaded(hero.current_video, 0.1).unwrap(),
        GateChange::Unchanged
    );
    assert_eq!(
        ctl.video_loaded(hero.next_video, 0.2).unwrap(),
        GateChange::Unchanged
    );
    assert_eq!(
        ctl.video_loaded(hero.background_video, 0.3).unwrap(),
        GateChange::Opened(ReadyReason::Loaded)
    );
    assert!(ctl.state().is_ready());
    assert!(!ctl.scene().is_mounted(hero.loading_overlay));
}

#[test]
fn repeated_load_without_new_source_is_ignored() {
    let mut ctl = controller();
    let v = ctl.nodes().hero.current_video;
    ctl.video_loaded(v, 0.1).unwrap();
    assert_eq!(ctl.video_loaded(v, 0.2).unwrap(), GateChange::Unchanged);
    assert_eq!(ctl.state().loaded_count(), 1);
}

#[test]
fn load_from_a_non_video_node_is_rejected() {
    let mut ctl = controller();
    let frame = ctl.nodes().hero.video_frame;
    assert!(matches!(
        ctl.video_loaded(frame, 0.1),
        Err(HeroError::Validation(_))
    ));
}

#[test]
fn timeout_opens_the_gate() {
    let mut ctl = controller();
    ctl.tick(7.9).unwrap();
    assert!(!ctl.state().is_ready());
    ctl.tick(8.0).unwrap();
    assert_eq!(
        ctl.state().gate().ready_reason(),
        Some(ReadyReason::TimedOut)
    );
    assert!(!ctl.scene().is_mounted(ctl.nodes().hero.loading_overlay));
}

#[test]
fn without_timeout_the_overlay_stays() {
    let cfg = HeroConfig {
        load_timeout_secs: None,
        ..HeroConfig::default()
    };
    let mut ctl = HeroController::new(cfg).unwrap();
    ctl.tick(600.0).unwrap();
    assert!(!ctl.state().is_ready());
    assert!(ctl.scene().is_mounted(ctl.nodes().hero.loading_overlay));
}

#[test]
fn click_updates_sources_and_backdrop_heading() {
    let mut ctl = controller();
    load_all(&mut ctl);
    let hero = ctl.nodes().hero;

    let ClickOutcome::Advanced(change) = ctl.click(2.0).unwrap() else {
        panic!("click was not applied");
    };
    assert_eq!(change.to.get(), 2);
    assert!(change.first_click);
    assert_eq!(src(&ctl, hero.current_video), "videos/hero-3.mp4");
    assert_eq!(src(&ctl, hero.next_video), "videos/hero-2.mp4");
    assert_eq!(src(&ctl, hero.background_video), "videos/hero-2.mp4");
    assert_eq!(
        ctl.scene().get(hero.backdrop_heading).unwrap().content,
        Content::Markup("Ide<b>n</b>tity".to_owned())
    );
}

#[test]
fn click_grows_the_next_video_and_plays_it() {
    let mut ctl = controller();
    load_all(&mut ctl);
    ctl.tick(2.0).unwrap();
    let hero = ctl.nodes().hero;

    ctl.click(2.0).unwrap();
    // The preview shrink-in renders its start value right away.
    assert_eq!(num(&ctl, hero.current_video, Property::Scale), 0.0);

    let cues = ctl.tick(2.0).unwrap();
    assert_eq!(cues, vec![Cue::PlayMedia(hero.next_video)]);
    assert!(ctl.scene().get(hero.next_video).unwrap().media.as_ref().unwrap().playing);
    assert_eq!(
        ctl.scene().computed(hero.next_video, Property::Visibility).unwrap(),
        Some(PropValue::Visibility(Visibility::Visible))
    );

    ctl.tick(3.0).unwrap();
    assert_eq!(
        ctl.scene().inline(hero.next_video, Property::Width).unwrap(),
        Some(&PropValue::Length(Length::Percent(100.0)))
    );
    assert_eq!(num(&ctl, hero.next_video, Property::Scale), 1.0);

    ctl.tick(3.5).unwrap();
    assert_eq!(num(&ctl, hero.current_video, Property::Scale), 1.5);
    assert!(!ctl.is_transitioning());
}

#[test]
fn second_click_reverts_geometry_before_regrowing() {
    let mut ctl = controller();
    load_all(&mut ctl);
    let hero = ctl.nodes().hero;

    ctl.click(1.0).unwrap();
    ctl.tick(1.0).unwrap();
    ctl.tick(5.0).unwrap();

    ctl.click(5.0).unwrap();
    // Reverted to the class-provided size before the new grow starts.
    assert_eq!(
        ctl.scene().computed(hero.next_video, Property::Width).unwrap(),
        Some(PropValue::Length(Length::Px(256.0)))
    );
    assert_eq!(
        ctl.scene().computed(hero.next_video, Property::Visibility).unwrap(),
        Some(PropValue::Visibility(Visibility::Hidden))
    );
    assert_eq!(ctl.state().current().get(), 3);
}

#[test]
fn heading_swaps_markup_between_fades() {
    let mut ctl = controller();
    let text = ctl.nodes().hero.current_text;
    ctl.tick(1.0).unwrap();
    assert!(!ctl.is_transitioning());

    ctl.click(1.0).unwrap();
    ctl.tick(1.25).unwrap();
    assert!(num(&ctl, text, Property::Opacity) < 1.0);
    assert!(ctl.scene().render(text).unwrap().contains("G<b>a</b>ming"));

    ctl.tick(1.5).unwrap();
    assert!(ctl.scene().render(text).unwrap().contains("Ide<b>n</b>tity"));
    assert_eq!(num(&ctl, text, Property::Opacity), 0.0);
    assert_eq!(num(&ctl, text, Property::RotateY), -60.0);

    ctl.tick(2.0).unwrap();
    assert_eq!(num(&ctl, text, Property::Opacity), 1.0);
    assert_eq!(num(&ctl, text, Property::RotateX), 0.0);
}

#[test]
fn mount_intro_can_be_disabled() {
    let cfg = HeroConfig {
        heading_intro_on_mount: false,
        ..HeroConfig::default()
    };
    let ctl = HeroController::new(cfg).unwrap();
    assert!(!ctl.is_transitioning());
    let text = ctl.nodes().hero.current_text;
    assert!(ctl.scene().get(text).unwrap().inline_style().is_empty());
}

#[test]
fn ignore_policy_drops_clicks_during_transitions() {
    let cfg = HeroConfig {
        click_policy: ClickPolicy::IgnoreWhileTransitioning,
        ..HeroConfig::default()
    };
    let mut ctl = HeroController::new(cfg).unwrap();
    assert_eq!(ctl.click(0.1).unwrap(), ClickOutcome::Ignored);
    assert_eq!(ctl.state().current().get(), 1);

    ctl.tick(1.0).unwrap();
    assert!(matches!(ctl.click(1.0).unwrap(), ClickOutcome::Advanced(_)));
    assert_eq!(ctl.click(1.1).unwrap(), ClickOutcome::Ignored);
    assert_eq!(ctl.state().current().get(), 2);
}

#[test]
fn queue_policy_replays_clicks_when_idle() {
    let cfg = HeroConfig {
        click_policy: ClickPolicy::Queue,
        heading_intro_on_mount: false,
        ..HeroConfig::default()
    };
    let mut ctl = HeroController::new(cfg).unwrap();
    assert!(matches!(ctl.click(0.0).unwrap(), ClickOutcome::Advanced(_)));
    assert_eq!(ctl.click(0.1).unwrap(), ClickOutcome::Queued);
    assert_eq!(ctl.pending_clicks(), 1);
    assert_eq!(ctl.state().current().get(), 2);

    // Grow takes 1.0s, shrink 1.5s, heading 1.0s.
    ctl.tick(0.0).unwrap();
    ctl.tick(1.0).unwrap();
    assert_eq!(ctl.state().current().get(), 2);
    ctl.tick(1.5).unwrap();
    assert_eq!(ctl.state().current().get(), 3);
    assert_eq!(ctl.pending_clicks(), 0);
}

#[test]
fn clicks_are_accepted_before_videos_load() {
    let mut ctl = controller();
    assert!(matches!(ctl.click(0.0).unwrap(), ClickOutcome::Advanced(_)));
    assert!(!ctl.state().is_ready());
}

#[test]
fn source_change_rearms_the_load_event() {
    let mut ctl = controller();
    load_all(&mut ctl);
    let hero = ctl.nodes().hero;
    ctl.click(1.0).unwrap();
    assert_eq!(
        ctl.video_loaded(hero.current_video, 1.2).unwrap(),
        GateChange::Unchanged
    );
    assert_eq!(ctl.state().loaded_count(), 4);
    assert!(ctl.state().is_ready());
}

#[test]
fn long_reels_open_once_every_gated_video_loaded() {
    let headings = (1..=5).map(|i| (i, format!("Video {i}"))).collect();
    let cfg = HeroConfig {
        total_videos: 5,
        headings: crate::hero::headings::HeadingMap::new(headings),
        load_timeout_secs: None,
        ..HeroConfig::default()
    };
    let mut ctl = HeroController::new(cfg).unwrap();
    load_all(&mut ctl);
    assert_eq!(ctl.state().loaded_count(), 3);
    assert_eq!(ctl.state().gate().ready_reason(), Some(ReadyReason::Loaded));
    assert!(!ctl.scene().is_mounted(ctl.nodes().hero.loading_overlay));
}

#[test]
fn first_click_without_intro_fades_the_old_heading_out() {
    let cfg = HeroConfig {
        heading_intro_on_mount: false,
        ..HeroConfig::default()
    };
    let mut ctl = HeroController::new(cfg).unwrap();
    let text = ctl.nodes().hero.current_text;

    ctl.click(1.0).unwrap();
    ctl.tick(1.25).unwrap();
    let html = ctl.scene().render(text).unwrap();
    assert!(num(&ctl, text, Property::Opacity) < 1.0);
    assert!(html.contains("G<b>a</b>ming"));
    assert!(!html.contains("Ide<b>n</b>tity"));

    ctl.tick(1.5).unwrap();
    assert!(ctl.scene().render(text).unwrap().contains("Ide<b>n</b>tity"));
}

#[test]
fn click_during_mount_intro_fades_the_old_heading_out() {
    let mut ctl = controller();
    let text = ctl.nodes().hero.current_text;

    ctl.tick(0.1).unwrap();
    ctl.click(0.2).unwrap();
    ctl.tick(0.45).unwrap();
    let html = ctl.scene().render(text).unwrap();
    assert!(num(&ctl, text, Property::Opacity) < 1.0);
    assert!(html.contains("G<b>a</b>ming"));
    assert!(!html.contains("Ide<b>n</b>tity"));

    ctl.tick(0.8).unwrap();
    assert!(ctl.scene().render(text).unwrap().contains("Ide<b>n</b>tity"));
}
