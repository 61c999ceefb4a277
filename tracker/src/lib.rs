pub mod adjustment;
pub mod app;
pub mod collaborators;
pub mod error;
pub mod settings;

pub use adjustment::ScoreAdjustment;
pub use app::{or_empty_if_unavailable, SaveOutcome, Tracker};
pub use collaborators::{
    AutoAnswer, Confirmation, ConsoleConfirmation, DeviceDiscovery, DeviceError, SimulatedScanner,
};
pub use error::TrackerError;
pub use settings::Settings;
