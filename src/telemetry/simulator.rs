use crate::app_config::AppConfig;
use crate::domain::commands::Command;
use crate::domain::{GeoCoordinate, MotionState};
use crate::store::SessionState;
use crate::telemetry::VehicleLocationSample;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot;
use tokio::sync::watch::Receiver as WatchReceiver;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, trace};

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("the telemetry simulator is already running")]
    AlreadyRunning,
}

#[derive(Debug)]
struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

/// Timer-driven stand-in for the vehicle's GPS feed. While the mission is
/// running and the vehicle is moving, every tick drifts the position by a
/// small random amount and submits the result as a `RecordLocation` command.
/// The simulator never touches the session state directly; the gate is
/// re-read from the latest snapshot at every tick boundary, so toggling
/// running/moving takes effect on the next tick, never retroactively.
pub struct TelemetrySimulator {
    tick_interval: Duration,
    jitter_magnitude: f64,
    seed: Option<u64>,
    commands_tx: Sender<Command>,
    notifier_rx: WatchReceiver<SessionState>,
    worker: Option<WorkerHandle>,
}

impl TelemetrySimulator {
    pub fn new(config: &AppConfig, commands_tx: Sender<Command>, notifier_rx: WatchReceiver<SessionState>) -> Self {
        TelemetrySimulator {
            tick_interval: config.telemetry().tick_interval(),
            jitter_magnitude: config.telemetry().jitter_magnitude(),
            seed: config.telemetry().seed(),
            commands_tx,
            notifier_rx,
            worker: None,
        }
    }

    /// Spawns the tick worker. At most one worker exists at a time; a second
    /// `start` without an intervening `stop` is refused.
    pub fn start(&mut self) -> Result<(), SimulatorError> {
        if self.worker.is_some() {
            return Err(SimulatorError::AlreadyRunning);
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = tokio::spawn(run_simulator_loop(
            self.tick_interval,
            self.jitter_magnitude,
            rng,
            self.commands_tx.clone(),
            self.notifier_rx.clone(),
            stop_rx,
        ));
        self.worker = Some(WorkerHandle { stop_tx, join });

        info!("🛰️ Telemetry simulator started, one tick every {:?}", self.tick_interval);
        Ok(())
    }

    /// Cancels the tick worker and waits for it to exit. Idempotent; already
    /// applied location updates stay applied.
    pub async fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            let _ = worker.join.await;
            info!("🛰️ Telemetry simulator stopped");
        }
    }

    /// Re-stamps the current position at the operator's request. Never fails.
    pub async fn refresh_now(&self) {
        self.commands_tx.send(Command::RefreshLocation).await.unwrap_or_default();
    }
}

async fn run_simulator_loop(
    tick_interval: Duration,
    jitter_magnitude: f64,
    mut rng: StdRng,
    commands_tx: Sender<Command>,
    notifier_rx: WatchReceiver<SessionState>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    loop {
        // The deadline is taken from now rather than the previous deadline, so
        // a late tick is skipped instead of replayed.
        let next_tick = Instant::now() + tick_interval;
        let should_stop = tokio::select! {
            _ = sleep_until(next_tick) => false,
            _ = &mut stop_rx => true,
        };
        if should_stop {
            debug!("🛰️ Tick worker cancelled");
            return;
        }

        let (running, motion, coordinate) = {
            let snapshot = notifier_rx.borrow();
            (snapshot.running, snapshot.motion, snapshot.vehicle.coordinate)
        };
        if !running || motion != MotionState::Moving {
            trace!("🛰️ Tick skipped, vehicle is idle");
            continue;
        }

        let sample = VehicleLocationSample::at(drift(coordinate, jitter_magnitude, &mut rng), Utc::now());
        debug!("🛰️ Drifted to ({:.6}, {:.6})", sample.coordinate.latitude, sample.coordinate.longitude);
        if commands_tx.send(Command::RecordLocation(sample)).await.is_err() {
            // The store is gone, so the session is over.
            return;
        }
    }
}

/// One tick of simulated drift: independent uniform jitter on each axis,
/// bounded by the configured magnitude in degrees. Pure, so it is testable
/// without timers.
fn drift(from: GeoCoordinate, magnitude: f64, rng: &mut impl Rng) -> GeoCoordinate {
    GeoCoordinate {
        latitude: from.latitude + (rng.random::<f64>() - 0.5) * 2.0 * magnitude,
        longitude: from.longitude + (rng.random::<f64>() - 0.5) * 2.0 * magnitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use pretty_assertions::assert_eq;
    use tokio::sync::{mpsc, watch};
    use tokio::time::timeout;

    const JITTER: f64 = 0.0005;

    #[test]
    fn drift_is_deterministic_under_a_fixed_seed() {
        let start = GeoCoordinate { latitude: 10.0, longitude: 20.0 };
        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            let first = drift(start, JITTER, &mut first_rng);
            let second = drift(start, JITTER, &mut second_rng);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn drift_stays_strictly_within_the_jitter_magnitude_per_axis() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut coordinate = GeoCoordinate::default();

        for _ in 0..1000 {
            let next = drift(coordinate, JITTER, &mut rng);
            assert!((next.latitude - coordinate.latitude).abs() < JITTER);
            assert!((next.longitude - coordinate.longitude).abs() < JITTER);
            coordinate = next;
        }
    }

    fn active_state() -> SessionState {
        let config = AppConfigBuilder::new().build();
        let mut state = SessionState::new(&config);
        state.running = true;
        state.motion = MotionState::Moving;
        state
    }

    fn simulator(state: SessionState) -> (TelemetrySimulator, mpsc::Receiver<Command>) {
        let config = AppConfigBuilder::new()
            .tick_interval(Duration::from_millis(25))
            .jitter_magnitude(JITTER)
            .seed(Some(42))
            .build();
        let (commands_tx, commands_rx) = mpsc::channel(8);
        let (_notifier_tx, notifier_rx) = watch::channel(state);
        (TelemetrySimulator::new(&config, commands_tx, notifier_rx), commands_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn two_ticks_produce_exactly_two_samples_with_increasing_capture_times() {
        let (mut simulator, mut commands_rx) = simulator(active_state());
        simulator.start().unwrap();

        let Some(Command::RecordLocation(first)) = commands_rx.recv().await else {
            panic!("expected a location sample");
        };
        let Some(Command::RecordLocation(second)) = commands_rx.recv().await else {
            panic!("expected a second location sample");
        };

        simulator.stop().await;

        assert!(second.captured_at > first.captured_at);
        assert!((second.coordinate.latitude - first.coordinate.latitude).abs() < JITTER);
        assert!((second.coordinate.longitude - first.coordinate.longitude).abs() < JITTER);
        assert!(commands_rx.try_recv().is_err(), "no samples may arrive after stop");
    }

    #[tokio::test(start_paused = true)]
    async fn no_samples_are_produced_while_the_vehicle_is_idle() {
        let config = AppConfigBuilder::new().build();
        let (mut simulator, mut commands_rx) = simulator(SessionState::new(&config));
        simulator.start().unwrap();

        let outcome = timeout(Duration::from_millis(500), commands_rx.recv()).await;

        simulator.stop().await;
        assert!(outcome.is_err(), "an idle vehicle must stay frozen");
    }

    #[tokio::test(start_paused = true)]
    async fn a_second_start_without_a_stop_is_refused() {
        let (mut simulator, _commands_rx) = simulator(active_state());

        simulator.start().unwrap();
        assert!(matches!(simulator.start(), Err(SimulatorError::AlreadyRunning)));

        simulator.stop().await;
        // After a stop the simulator may be started again.
        simulator.start().unwrap();
        simulator.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn stop_is_idempotent() {
        let (mut simulator, _commands_rx) = simulator(active_state());
        simulator.start().unwrap();

        simulator.stop().await;
        simulator.stop().await;
    }
}
