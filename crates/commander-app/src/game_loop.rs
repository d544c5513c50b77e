//! Game loop — runs the arena engine at 30Hz and prints snapshots.
//!
//! The engine is created inside the loop function so it owns its own
//! state. Commands arrive via `mpsc` channel from the stdin feed; the
//! loop keeps ticking after the feed disconnects so the battle plays
//! out even with no commander attached.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use commander_core::commands::ArenaCommand;
use commander_core::constants::TICK_RATE;
use commander_sim::engine::{ArenaEngine, SimConfig};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Fixed simulation delta matching the tick cadence.
const TICK_DELTA_SECS: f64 = 1.0 / TICK_RATE as f64;

/// The game loop. Runs until the process is killed.
pub fn run(command_rx: mpsc::Receiver<ArenaCommand>) {
    let mut engine = ArenaEngine::new(SimConfig::default());
    let mut next_tick_time = Instant::now();
    let mut feed_connected = true;

    loop {
        // 1. Drain all pending commands
        while feed_connected {
            match command_rx.try_recv() {
                Ok(command) => engine.queue_command(command),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("command feed disconnected, running on");
                    feed_connected = false;
                }
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(TICK_DELTA_SECS);

        // 3. Emit the snapshot on stdout, one JSON object per line
        match serde_json::to_string(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("snapshot serialization failed: {err}"),
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commander_core::enums::Team;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<ArenaCommand>();

        tx.send(ArenaCommand::UpdateStrategy {
            payload: r#"{"formation":"line","target":"base","aggression":0.3}"#.to_string(),
        })
        .unwrap();
        tx.send(ArenaCommand::IssueCommand {
            text: "hold".to_string(),
        })
        .unwrap();
        tx.send(ArenaCommand::ClearStrategy).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], ArenaCommand::UpdateStrategy { .. }));
        assert!(matches!(commands[1], ArenaCommand::IssueCommand { .. }));
        assert!(matches!(commands[2], ArenaCommand::ClearStrategy));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = ArenaEngine::new(SimConfig::default());
        engine.queue_command(ArenaCommand::UpdateStrategy {
            payload: r#"{"formation":"spread","target":"enemies","aggression":1.0}"#.to_string(),
        });

        // Run enough ticks to put projectiles in flight
        for _ in 0..50 {
            engine.tick(TICK_DELTA_SECS);
        }

        let snapshot = engine.tick(TICK_DELTA_SECS);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_queued_commands_apply_on_next_tick() {
        let mut engine = ArenaEngine::new(SimConfig::default());
        engine.queue_command(ArenaCommand::UpdateStrategy {
            payload: r#"{"formation":"default","target":"enemies","aggression":0.5}"#.to_string(),
        });
        let snapshot = engine.tick(TICK_DELTA_SECS);

        let strategy = snapshot.strategy.expect("strategy applied before systems ran");
        assert_eq!(
            strategy.target,
            commander_core::enums::TargetDirective::Enemies
        );
        assert!(snapshot
            .bots
            .iter()
            .filter(|b| b.team == Team::Red)
            .all(|b| matches!(
                b.action,
                commander_core::enums::BotAction::AttackForward
                    | commander_core::enums::BotAction::AttackFlank
                    | commander_core::enums::BotAction::AttackAdvance
            )));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
        assert!((TICK_DELTA_SECS - 1.0 / 30.0).abs() < 1e-15);
    }
}
