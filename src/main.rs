//! Bunny Run entry point
//!
//! Headless runner: plays a run on autopilot and logs what happens. By
//! default every tick is a fixed 1/60 s; with `realtime` the loop paces
//! itself against the wall clock and feeds measured (capped) frame times,
//! the way a windowed shell drives `tick` + `FrameSnapshot` per frame.
//!
//! Usage: `bunny-run [seed] [ticks] [tuning.json] [realtime]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bunny_run::consts::{MAX_FRAME_DT, SIM_DT};
    use bunny_run::platform::{FrameClock, InputLatch};
    use bunny_run::renderer::FrameSnapshot;
    use bunny_run::sim::{GameEvent, GameState, tick};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(time_seed);
    let ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(60 * 60);
    let tuning = args
        .next()
        .filter(|path| !path.is_empty() && path != "-")
        .map(|path| load_tuning(&path))
        .unwrap_or_default();
    let realtime = args.next().is_some_and(|mode| mode == "realtime");

    log::info!("Bunny Run (headless) starting, seed {seed}, {ticks} ticks");

    let mut state = GameState::with_tuning(seed, tuning);
    let mut latch = InputLatch::new();
    latch.autopilot = true;

    let mut goals = 0u32;
    let mut crashes = 0u32;
    let mut best = 0u64;
    let mut elapsed = 0.0f32;
    let mut clock = FrameClock::new(MAX_FRAME_DT);

    for n in 0..ticks {
        let dt = if realtime {
            std::thread::sleep(std::time::Duration::from_secs_f32(SIM_DT));
            clock.frame()
        } else {
            SIM_DT
        };
        elapsed += dt;

        let input = latch.take();
        tick(&mut state, &input, dt);
        best = best.max(state.score);

        for event in state.drain_events() {
            match event {
                GameEvent::GoalReached { .. } => goals += 1,
                GameEvent::ObstacleHit { .. } => crashes += 1,
                GameEvent::SpinFinished | GameEvent::Reset => {}
            }
        }

        if n % 600 == 0 {
            let frame = FrameSnapshot::capture(&state);
            log::info!(
                "t={:.1}s {} | ground speed {:.2} | phase {:?}",
                elapsed,
                frame.hud.text,
                state.difficulty.ground_speed,
                state.phase
            );
        }
    }

    println!(
        "seed {seed}: final score {}, best {best}, {goals} goals, {crashes} crashes",
        state.score
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Read a tuning file, falling back to defaults on any error
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> bunny_run::Tuning {
    match std::fs::read_to_string(path) {
        Ok(json) => match bunny_run::Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {path}");
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning file {path}: {e}; using defaults");
                bunny_run::Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("Cannot read tuning file {path}: {e}; using defaults");
            bunny_run::Tuning::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on the web
}
