pub mod device;
pub mod game;
pub mod hole;
pub mod score;
pub mod status;
pub mod to_par;

pub use device::{ConnectionHandle, DeviceId, DiscoveredDevice, SignalQuality};
pub use game::{Game, GameId, GameValidationError, NewGame, DEFAULT_MAX_PLAYERS};
pub use hole::{standard_holes, Hole, DEFAULT_HOLE_COUNT, DEFAULT_PAR};
pub use score::Score;
pub use status::GameStatus;
pub use to_par::ScoreToPar;
