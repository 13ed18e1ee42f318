use crate::domain::commands::Command;
use crate::domain::{Direction, DriveMode, PixelPoint, ViewportExtent};
use crate::telemetry::TelemetrySimulator;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tokio::sync::mpsc::Sender;
use tracing::{info, instrument, warn};

#[derive(Debug)]
enum ConsoleInput {
    Submit(Command),
    Refresh,
    Help,
    Quit,
}

/// Line-based operator interface, the headless stand-in for the control
/// panel's buttons and map. Each line becomes one command; the session ends
/// on `quit` or end of input.
#[instrument(skip_all)]
pub async fn operator_console(tx: Sender<Command>, simulator: &TelemetrySimulator, extent: ViewportExtent) -> std::io::Result<()> {
    print_help();

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_input(line, extent) {
            Ok(ConsoleInput::Submit(command)) => tx.send(command).await.unwrap_or_default(),
            Ok(ConsoleInput::Refresh) => simulator.refresh_now().await,
            Ok(ConsoleInput::Help) => print_help(),
            Ok(ConsoleInput::Quit) => break,
            Err(message) => warn!("⚠️ {}", message),
        }
    }

    Ok(())
}

fn print_help() {
    info!(
        "🎛️ Commands: click <x> <y>, undo, clear, send, run, estop, speed <kmh>, mode <manual|waypoint>, steer <forward|backward|left|right>, refresh, connect, disconnect, help, quit"
    );
}

fn parse_input(line: &str, extent: ViewportExtent) -> Result<ConsoleInput, String> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let input = match tokens.as_slice() {
        ["click", x, y] => {
            let x = x.parse::<f64>().map_err(|_| format!("'{}' is not a number", x))?;
            let y = y.parse::<f64>().map_err(|_| format!("'{}' is not a number", y))?;
            ConsoleInput::Submit(Command::PlaceWaypoint {
                point: PixelPoint { x, y },
                extent,
            })
        }
        ["undo"] => ConsoleInput::Submit(Command::WithdrawWaypoint),
        ["clear"] => ConsoleInput::Submit(Command::ClearRoute),
        ["send"] => ConsoleInput::Submit(Command::DispatchRoute),
        ["run"] => ConsoleInput::Submit(Command::ToggleRunning),
        ["estop"] => ConsoleInput::Submit(Command::EmergencyStop),
        ["speed", value] => {
            let speed = value.parse::<u32>().map_err(|_| format!("'{}' is not a speed in km/h", value))?;
            ConsoleInput::Submit(Command::SetSpeed(speed))
        }
        ["mode", "manual"] => ConsoleInput::Submit(Command::SetMode(DriveMode::Manual)),
        ["mode", "waypoint"] => ConsoleInput::Submit(Command::SetMode(DriveMode::Waypoint)),
        ["steer", direction] => ConsoleInput::Submit(Command::Steer(parse_direction(direction)?)),
        ["connect"] => ConsoleInput::Submit(Command::SetConnected(true)),
        ["disconnect"] => ConsoleInput::Submit(Command::SetConnected(false)),
        ["refresh"] => ConsoleInput::Refresh,
        ["help"] => ConsoleInput::Help,
        ["quit"] | ["exit"] => ConsoleInput::Quit,
        _ => return Err(format!("Unknown command '{}', type 'help' for the list", line)),
    };

    Ok(input)
}

fn parse_direction(token: &str) -> Result<Direction, String> {
    match token {
        "forward" => Ok(Direction::Forward),
        "backward" => Ok(Direction::Backward),
        "left" => Ok(Direction::Left),
        "right" => Ok(Direction::Right),
        _ => Err(format!("Unknown steering direction '{}'", token)),
    }
}
