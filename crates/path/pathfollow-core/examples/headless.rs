//! Drive a controller for a few seconds against a printing host.
//!
//! Run with: cargo run -p pathfollow-core --example headless -- [path-config]

use std::fs;

use pathfollow_core::{
    parse_path_config, progress_label, Config, CurveMode, PlaybackCommand, PlaybackController,
    PlaybackHost, Player, Pose,
};

const DEFAULT_CONFIG: &str = "\
# unit square, a quarter turn about y per corner
1
4
4.0
0,0,0
0,0,0
1,0,0
0,90,0
1,1,0
0,180,0
0,1,0
0,270,0
";

struct PrintHost {
    frame: usize,
}

impl PlaybackHost for PrintHost {
    fn set_pose(&mut self, pose: &Pose) {
        self.frame += 1;
        if self.frame % 15 == 0 {
            let [x, y, z] = pose.position;
            let [qx, qy, qz, qw] = pose.orientation;
            println!(
                "frame {:4}  pos ({x:6.3}, {y:6.3}, {z:6.3})  rot ({qx:6.3}, {qy:6.3}, {qz:6.3}, {qw:6.3})",
                self.frame
            );
        }
    }

    fn is_paused(&self) -> bool {
        false
    }

    fn is_mode_enabled(&self, _mode: CurveMode) -> bool {
        true
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = match std::env::args().nth(1) {
        Some(file) => fs::read_to_string(file)?,
        None => DEFAULT_CONFIG.to_string(),
    };
    let paths = parse_path_config(&text)?;
    let player = Player::new(paths, Config::default())?;
    let mut ctl = PlaybackController::new(player, PrintHost { frame: 0 });

    let dt = 1.0 / 60.0;
    for second in 0..8 {
        if second == 4 {
            ctl.apply([PlaybackCommand::SelectMode(CurveMode::Bezier)]);
        }
        for _ in 0..60 {
            let out = ctl.frame(dt);
            for event in &out.events {
                println!("event: {event:?}");
            }
        }
        println!("progress {}", progress_label(ctl.progress_fraction()));
    }
    Ok(())
}
