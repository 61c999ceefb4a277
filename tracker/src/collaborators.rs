//! Boundaries to the device radio and to the user.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;
use types::{ConnectionHandle, DeviceId, DiscoveredDevice, SignalQuality};
use uuid::Uuid;

/// Asks the user to pick one of `options`. `None` means dismissed.
pub trait Confirmation {
    fn present(&self, title: &str, message: &str, options: &[&str]) -> Option<usize>;
}

/// Prompts on stdout and reads the answer from stdin.
#[derive(Debug, Default)]
pub struct ConsoleConfirmation;

impl Confirmation for ConsoleConfirmation {
    fn present(&self, title: &str, message: &str, options: &[&str]) -> Option<usize> {
        prompt(&mut std::io::stdout(), title, message, options)?;
        read_choice(&mut std::io::stdin().lock(), options.len())
    }
}

/// Writes the dialog. `None` if the output is gone, so nobody waits on input
/// for a question that was never shown.
fn prompt(out: &mut impl Write, title: &str, message: &str, options: &[&str]) -> Option<()> {
    writeln!(out, "{title}\n{message}").ok()?;
    for (i, option) in options.iter().enumerate() {
        writeln!(out, "  [{}] {option}", i + 1).ok()?;
    }
    write!(out, "> ").ok()?;
    out.flush().ok()
}

/// Reads a 1-based choice and returns it 0-based.
fn read_choice(input: &mut impl BufRead, option_count: usize) -> Option<usize> {
    let mut line = String::new();
    input.read_line(&mut line).ok()?;
    let choice: usize = line.trim().parse().ok()?;
    (1..=option_count).contains(&choice).then(|| choice - 1)
}

/// Answers every prompt without asking. Accepting picks the last option,
/// which is the affirmative one in every dialog this crate shows.
#[derive(Copy, Clone, Debug)]
pub struct AutoAnswer {
    accept: bool,
}

impl AutoAnswer {
    pub fn accept() -> Self {
        Self { accept: true }
    }

    pub fn decline() -> Self {
        Self { accept: false }
    }
}

impl Confirmation for AutoAnswer {
    fn present(&self, title: &str, _message: &str, options: &[&str]) -> Option<usize> {
        if options.is_empty() {
            return None;
        }
        let choice = if self.accept { options.len() - 1 } else { 0 };
        log::debug!("auto-answered '{title}' with '{}'", options[choice]);
        Some(choice)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Device not found: {0}")]
    NotFound(DeviceId),

    #[error("Device already connected: {0}")]
    AlreadyConnected(DeviceId),

    #[error("Device out of range: {0}")]
    OutOfRange(DeviceId),

    #[error("Unknown connection: {0}")]
    UnknownConnection(Uuid),
}

#[async_trait]
pub trait DeviceDiscovery: Send {
    async fn begin_scan(&mut self) -> Result<(), DeviceError>;
    fn discovered(&self) -> Vec<DiscoveredDevice>;
    async fn connect(&mut self, id: &DeviceId) -> Result<ConnectionHandle, DeviceError>;
    async fn disconnect(&mut self, handle: ConnectionHandle) -> Result<(), DeviceError>;
}

/// Stand-in radio with a fixed set of balls. Each scan jitters signal strength
/// by a few dBm; balls with poor signal refuse to connect.
#[derive(Debug)]
pub struct SimulatedScanner {
    known: Vec<DiscoveredDevice>,
    seen: Vec<DiscoveredDevice>,
    connections: HashMap<Uuid, DeviceId>,
}

const JITTER_DBM: i16 = 3;

impl SimulatedScanner {
    pub fn new(known: Vec<DiscoveredDevice>) -> Self {
        Self {
            known,
            seen: Vec::new(),
            connections: HashMap::new(),
        }
    }

    pub fn is_connected(&self, id: &DeviceId) -> bool {
        self.connections.values().any(|connected| connected == id)
    }
}

impl Default for SimulatedScanner {
    fn default() -> Self {
        let ball = |serial: &str, name: &str, rssi_dbm: i16| DiscoveredDevice {
            id: DeviceId(serial.to_string()),
            name: name.to_string(),
            rssi_dbm,
        };
        Self::new(vec![
            ball("GB-2024-001", "Pro Ball #1", -52),
            ball("GB-2024-002", "Practice Ball", -66),
            ball("GB-2023-045", "Backup Ball", -88),
        ])
    }
}

#[async_trait]
impl DeviceDiscovery for SimulatedScanner {
    async fn begin_scan(&mut self) -> Result<(), DeviceError> {
        let mut rng = rand::thread_rng();
        self.seen = self
            .known
            .iter()
            .map(|device| DiscoveredDevice {
                rssi_dbm: device.rssi_dbm + rng.gen_range(-JITTER_DBM..=JITTER_DBM),
                ..device.clone()
            })
            .collect();
        log::info!("scan found {} devices", self.seen.len());
        Ok(())
    }

    fn discovered(&self) -> Vec<DiscoveredDevice> {
        self.seen.clone()
    }

    async fn connect(&mut self, id: &DeviceId) -> Result<ConnectionHandle, DeviceError> {
        let device = self
            .seen
            .iter()
            .find(|device| &device.id == id)
            .ok_or_else(|| DeviceError::NotFound(id.clone()))?;
        if device.signal() == SignalQuality::Poor {
            return Err(DeviceError::OutOfRange(id.clone()));
        }
        if self.is_connected(id) {
            return Err(DeviceError::AlreadyConnected(id.clone()));
        }

        let handle = ConnectionHandle::new(id.clone());
        self.connections.insert(handle.id, id.clone());
        log::info!("connected to {id} ({})", handle.id);
        Ok(handle)
    }

    async fn disconnect(&mut self, handle: ConnectionHandle) -> Result<(), DeviceError> {
        self.connections
            .remove(&handle.id)
            .map(|id| log::info!("disconnected from {id}"))
            .ok_or(DeviceError::UnknownConnection(handle.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_answer() {
        let options = ["Cancel", "Reset"];
        assert_eq!(AutoAnswer::accept().present("t", "m", &options), Some(1));
        assert_eq!(AutoAnswer::decline().present("t", "m", &options), Some(0));
        assert_eq!(AutoAnswer::accept().present("t", "m", &[]), None);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_prompt_gives_up_on_closed_output() {
        assert_eq!(prompt(&mut ClosedPipe, "Save", "Total: 7", &["Cancel", "Save"]), None);

        let mut out = Vec::new();
        assert_eq!(prompt(&mut out, "Save", "Total: 7", &["Cancel", "Save"]), Some(()));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Save\nTotal: 7\n  [1] Cancel\n  [2] Save\n> "
        );
    }

    #[test]
    fn test_read_choice() {
        assert_eq!(read_choice(&mut "2\n".as_bytes(), 2), Some(1));
        assert_eq!(read_choice(&mut " 1 \n".as_bytes(), 2), Some(0));
        assert_eq!(read_choice(&mut "3\n".as_bytes(), 2), None);
        assert_eq!(read_choice(&mut "0\n".as_bytes(), 2), None);
        assert_eq!(read_choice(&mut "".as_bytes(), 2), None);
    }

    #[tokio::test]
    async fn test_nothing_discovered_before_scan() {
        let mut scanner = SimulatedScanner::default();
        assert!(scanner.discovered().is_empty());
        let err = scanner
            .connect(&DeviceId("GB-2024-001".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, DeviceError::NotFound(DeviceId("GB-2024-001".to_string())));
    }

    #[tokio::test]
    async fn test_connect_and_disconnect() {
        let mut scanner = SimulatedScanner::default();
        scanner.begin_scan().await.unwrap();

        let devices = scanner.discovered();
        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].signal(), SignalQuality::Excellent);
        assert_eq!(devices[1].signal(), SignalQuality::Good);
        assert_eq!(devices[2].signal(), SignalQuality::Poor);

        let pro = DeviceId("GB-2024-001".to_string());
        let handle = scanner.connect(&pro).await.expect("Failed to connect");
        assert!(scanner.is_connected(&pro));
        assert_eq!(
            scanner.connect(&pro).await.unwrap_err(),
            DeviceError::AlreadyConnected(pro.clone())
        );

        scanner.disconnect(handle.clone()).await.unwrap();
        assert!(!scanner.is_connected(&pro));
        assert_eq!(
            scanner.disconnect(handle.clone()).await.unwrap_err(),
            DeviceError::UnknownConnection(handle.id)
        );
    }

    #[tokio::test]
    async fn test_poor_signal_refuses_connection() {
        let mut scanner = SimulatedScanner::default();
        scanner.begin_scan().await.unwrap();
        let backup = DeviceId("GB-2023-045".to_string());
        assert_eq!(
            scanner.connect(&backup).await.unwrap_err(),
            DeviceError::OutOfRange(backup)
        );
    }
}
