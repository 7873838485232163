use pathfollow_core::{
    AngleUnit, Config, CurveMode, Outputs, PlaybackCommand, PlaybackEvent, Pose, WrapPolicy,
};
use serde_json::json;

#[test]
fn partial_config_json_falls_back_to_defaults() {
    let cfg: Config = serde_json::from_value(json!({ "wrap": "reset" })).expect("config");
    assert_eq!(cfg.wrap, WrapPolicy::Reset);
    assert_eq!(cfg.initial_mode, Some(CurveMode::CatmullRom));
    assert_eq!(cfg.angle_unit, AngleUnit::Degrees);
    assert_eq!(cfg.comment_marker, '#');

    let cfg: Config =
        serde_json::from_value(json!({ "initial_mode": null, "angle_unit": "radians" }))
            .expect("config");
    assert_eq!(cfg.initial_mode, None);
    assert_eq!(cfg.angle_unit, AngleUnit::Radians);
}

#[test]
fn commands_use_tagged_json() {
    let cmd: PlaybackCommand =
        serde_json::from_value(json!({ "type": "select_mode", "value": "bezier" }))
            .expect("command");
    assert_eq!(cmd, PlaybackCommand::SelectMode(CurveMode::Bezier));

    let value = serde_json::to_value(PlaybackCommand::SetPaused(true)).expect("serialize");
    assert_eq!(value, json!({ "type": "set_paused", "value": true }));
}

#[test]
fn outputs_serialize_pose_and_events() {
    let out = Outputs {
        pose: Pose {
            position: [1.0, 2.0, 3.0],
            orientation: [0.0, 0.0, 0.0, 1.0],
        },
        events: vec![PlaybackEvent::PathAdvanced {
            from: 0,
            to: 1,
            crossings: 1,
        }],
    };
    let value = serde_json::to_value(&out).expect("serialize");
    assert_eq!(
        value,
        json!({
            "pose": { "position": [1.0, 2.0, 3.0], "orientation": [0.0, 0.0, 0.0, 1.0] },
            "events": [ { "PathAdvanced": { "from": 0, "to": 1, "crossings": 1 } } ]
        })
    );
}
