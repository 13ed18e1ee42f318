use crate::app_config::AppConfig;
use crate::dispatch::DispatchGateway;
use crate::domain::commands::Command;
use crate::domain::events::Event;
use crate::domain::route::{EmptyRouteError, WaypointPath};
use crate::domain::{Direction, DriveMode, MotionState, PixelPoint, ViewportExtent};
use crate::projection;
use crate::telemetry::{VehicleLocationSample, VehicleStatus};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Everything a control-panel session tracks. The live copy is owned
/// exclusively by the [`Store`] task; everyone else sees immutable snapshots
/// published after each applied command.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub connected: bool,
    pub running: bool,
    pub motion: MotionState,
    pub mode: DriveMode,
    pub route: WaypointPath,
    pub vehicle: VehicleLocationSample,
    pub status: VehicleStatus,
}

impl SessionState {
    pub fn new(config: &AppConfig) -> Self {
        SessionState {
            connected: false,
            running: false,
            motion: MotionState::Stationary,
            mode: DriveMode::Manual,
            route: WaypointPath::new(),
            vehicle: VehicleLocationSample::at(config.vehicle().initial_coordinate(), Utc::now()),
            status: VehicleStatus {
                battery_percent: config.vehicle().battery_percent(),
                obstacle_distance_cm: None,
                speed_kmh: config.vehicle().speed_kmh(),
            },
        }
    }
}

/// The single mutation point of the session. Commands arrive on an mpsc
/// channel and are applied one at a time, so no collaborator can observe a
/// half-applied mutation; each applied command publishes a fresh snapshot on
/// the watch channel and its operator-facing outcome on the event channel.
#[derive(Debug)]
pub struct Store {
    state: SessionState,
    rx: Receiver<Command>,
    loopback_tx: Sender<Command>,
    events_tx: Sender<Event>,
    notifier_tx: WatchSender<SessionState>,
    notifier_rx: WatchReceiver<SessionState>,
    gateway: Arc<dyn DispatchGateway>,
    steer_hold: Duration,
}

impl Store {
    pub fn new(
        rx: Receiver<Command>,
        loopback_tx: Sender<Command>,
        events_tx: Sender<Event>,
        gateway: Arc<dyn DispatchGateway>,
        config: &AppConfig,
    ) -> Self {
        let state = SessionState::new(config);
        let (notifier_tx, notifier_rx) = watch::channel(state.clone());

        Store {
            state,
            rx,
            loopback_tx,
            events_tx,
            notifier_tx,
            notifier_rx,
            gateway,
            steer_hold: config.session().steer_hold(),
        }
    }

    pub fn notifier(&self) -> WatchReceiver<SessionState> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(command) = self.rx.recv().await {
            debug!("🔵 Received command: {:?}", command);
            self.apply(command).await;
            self.notifier_tx.send(self.state.clone()).unwrap_or_default();
        }
    }

    async fn apply(&mut self, command: Command) {
        match command {
            Command::PlaceWaypoint { point, extent } => self.place_waypoint(point, extent).await,
            Command::WithdrawWaypoint => self.withdraw_waypoint().await,
            Command::ClearRoute => self.clear_route().await,
            Command::DispatchRoute => self.dispatch_route().await,
            Command::ToggleRunning => self.toggle_running().await,
            Command::EmergencyStop => self.emergency_stop().await,
            Command::SetSpeed(speed) => self.set_speed(speed).await,
            Command::SetMode(mode) => self.set_mode(mode).await,
            Command::Steer(direction) => self.steer(direction).await,
            Command::SettleSteering => self.settle_steering(),
            Command::RecordLocation(sample) => self.record_location(sample),
            Command::RefreshLocation => self.refresh_location(),
            Command::SetConnected(connected) => self.set_connected(connected),
        }
    }

    async fn place_waypoint(&mut self, point: PixelPoint, extent: ViewportExtent) {
        if self.state.mode != DriveMode::Waypoint {
            warn!("⚠️ Ignoring a map click while in manual mode");
            return;
        }
        if extent.is_degenerate() {
            warn!("⚠️ Ignoring a map click on a zero-area viewport");
            return;
        }

        let coordinate = projection::to_geo(point, extent);
        let count = self.state.route.append(coordinate);
        info!("🟢 Placed waypoint {} at ({:.6}, {:.6})", count, coordinate.latitude, coordinate.longitude);
        self.notify(Event::WaypointPlaced { coordinate }).await;
    }

    async fn withdraw_waypoint(&mut self) {
        match self.state.route.remove_last() {
            Ok(coordinate) => {
                info!("🟢 Withdrew the waypoint at ({:.6}, {:.6})", coordinate.latitude, coordinate.longitude);
                self.notify(Event::WaypointWithdrawn).await;
            }
            Err(EmptyRouteError) => {
                warn!("⚠️ No waypoints to withdraw");
                self.notify(Event::NothingToWithdraw).await;
            }
        }
    }

    async fn clear_route(&mut self) {
        self.state.route.clear_all();
        info!("🟢 Cleared the planned route");
        self.notify(Event::RouteCleared).await;
    }

    async fn dispatch_route(&mut self) {
        match self.state.route.finalize() {
            Ok(manifest) => {
                let waypoints = manifest.len();
                info!("🟢 Dispatching {} waypoint(s) via the '{}' gateway...", waypoints, self.gateway.id());
                if let Err(error) = self.gateway.send(manifest).await {
                    warn!("⚠️ Dispatching the route failed: {}", error);
                    return;
                }
                self.notify(Event::RouteDispatched { waypoints }).await;
            }
            Err(EmptyRouteError) => {
                warn!("⚠️ No waypoints to dispatch");
                self.notify(Event::NothingToDispatch).await;
            }
        }
    }

    async fn toggle_running(&mut self) {
        self.state.running = !self.state.running;
        // The run toggle doubles as the motion switch; the telemetry gate
        // requires both.
        self.state.motion = if self.state.running { MotionState::Moving } else { MotionState::Stationary };

        let event = if self.state.running { Event::MissionResumed } else { Event::MissionPaused };
        info!("🟢 {}", event);
        self.notify(event).await;
    }

    async fn emergency_stop(&mut self) {
        self.state.running = false;
        self.state.motion = MotionState::Stationary;
        self.state.status.speed_kmh = 0;
        warn!("🛑 Emergency stop engaged");
        self.notify(Event::EmergencyStopEngaged).await;
    }

    async fn set_speed(&mut self, speed: u32) {
        self.state.status.speed_kmh = speed;
        info!("🟢 Speed set to {} km/h", speed);
        self.notify(Event::SpeedChanged(speed)).await;
    }

    async fn set_mode(&mut self, mode: DriveMode) {
        self.state.mode = mode;
        info!("🟢 Drive mode set to {:?}", mode);
        self.notify(Event::ModeChanged(mode)).await;
    }

    async fn steer(&mut self, direction: Direction) {
        if self.state.mode != DriveMode::Manual {
            warn!("⚠️ Ignoring steering input while in waypoint mode");
            return;
        }

        self.state.motion = MotionState::Moving;

        // The motion pulse settles on its own once the hold window elapses.
        let loopback = self.loopback_tx.clone();
        let hold = self.steer_hold;
        tokio::spawn(async move {
            sleep(hold).await;
            loopback.send(Command::SettleSteering).await.unwrap_or_default();
        });

        self.notify(Event::Steered(direction)).await;
    }

    fn settle_steering(&mut self) {
        self.state.motion = MotionState::Stationary;
        debug!("🟡 Steering pulse settled");
    }

    fn record_location(&mut self, sample: VehicleLocationSample) {
        debug!("🚗 Vehicle reported ({:.6}, {:.6})", sample.coordinate.latitude, sample.coordinate.longitude);
        self.state.vehicle = sample;
    }

    fn refresh_location(&mut self) {
        self.state.vehicle = self.state.vehicle.restamped(Utc::now());
        debug!("🚗 Re-stamped the vehicle position at operator request");
    }

    fn set_connected(&mut self, connected: bool) {
        self.state.connected = connected;
        info!("🔗 Vehicle link {}", if connected { "established" } else { "lost" });
    }

    async fn notify(&self, event: Event) {
        self.events_tx.send(event).await.unwrap_or_default();
    }
}
