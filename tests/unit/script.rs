use super::*;
use crate::config::HeroConfig;

fn fps() -> Fps {
    Fps::new(10, 1).unwrap()
}

#[test]
fn parses_tagged_events() {
    let script = Script::from_json_str(
        r#"{
            "duration": 2.0,
            "events": [
                {"at": 0.2, "kind": "video_loaded", "video": "current-video"},
                {"at": 1.0, "kind": "click"},
                {"at": 1.5, "kind": "scroll", "y": 200}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(script.events.len(), 3);
    assert_eq!(script.events[1].event, ScriptEvent::Click);
    assert_eq!(script.events[2].event, ScriptEvent::Scroll { y: 200.0 });
}

#[test]
fn rejects_negative_times() {
    let err = Script::from_json_str(r#"{"duration": 1.0, "events": [{"at": -1, "kind": "click"}]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("script event 0"));
}

#[test]
fn samples_every_frame_including_the_last() {
    let mut ctl = HeroController::new(HeroConfig::default()).unwrap();
    let script = Script {
        duration: 1.0,
        events: vec![],
    };
    let frames = run_script(&mut ctl, &script, fps()).unwrap();
    assert_eq!(frames.len(), 11);
    assert_eq!(frames[0].frame, 0);
    assert_eq!(frames[10].t, 1.0);
}

#[test]
fn events_apply_in_time_order() {
    let mut ctl = HeroController::new(HeroConfig::default()).unwrap();
    let script = Script {
        duration: 1.0,
        events: vec![
            TimedEvent {
                at: 0.5,
                event: ScriptEvent::Click,
            },
            TimedEvent {
                at: 0.0,
                event: ScriptEvent::VideoLoaded {
                    video: "current".to_owned(),
                },
            },
            TimedEvent {
                at: 0.0,
                event: ScriptEvent::VideoLoaded {
                    video: "next-video".to_owned(),
                },
            },
            TimedEvent {
                at: 0.1,
                event: ScriptEvent::VideoLoaded {
                    video: "background".to_owned(),
                },
            },
        ],
    };
    let frames = run_script(&mut ctl, &script, fps()).unwrap();

    assert_eq!(frames[0].loaded, 2);
    assert!(frames[0].overlay_mounted);
    assert!(frames[1].ready);
    assert_eq!(frames[1].ready_reason, Some(ReadyReason::Loaded));
    assert!(!frames[1].overlay_mounted);

    assert_eq!(frames[4].index, 1);
    assert_eq!(frames[5].index, 2);
    assert_eq!(frames[5].upcoming, 3);
    assert!(frames[5].has_clicked);
    assert_eq!(
        frames[5].nodes["backdrop_heading"].markup.as_deref(),
        Some("Ide<b>n</b>tity")
    );
    assert_eq!(frames[5].nodes["next_video"].playing, Some(true));
}

#[test]
fn unknown_video_fails_the_run() {
    let mut ctl = HeroController::new(HeroConfig::default()).unwrap();
    let script = Script {
        duration: 0.5,
        events: vec![TimedEvent {
            at: 0.0,
            event: ScriptEvent::VideoLoaded {
                video: "nope".to_owned(),
            },
        }],
    };
    assert!(run_script(&mut ctl, &script, fps()).is_err());
}

#[test]
fn scroll_events_reach_the_frame_clip() {
    let mut ctl = HeroController::new(HeroConfig::default()).unwrap();
    let script = Script {
        duration: 0.1,
        events: vec![TimedEvent {
            at: 0.1,
            event: ScriptEvent::Scroll { y: 450.0 },
        }],
    };
    let frames = run_script(&mut ctl, &script, fps()).unwrap();
    assert!(frames[0].nodes["video_frame"].style.contains("clip-path: polygon(0% 0%"));
    assert!(frames[1].nodes["video_frame"].style.contains("clip-path: polygon(14% 0%"));
}
