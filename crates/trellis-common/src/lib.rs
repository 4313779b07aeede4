pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod scheduler;
pub mod types;

pub use actions::{Action, Direction};
pub use errors::{ConfigError, PlatformError, TrellisError};
pub use events::{Event, EventBus};
pub use id::{new_id, WorkspaceId};
pub use scheduler::{Purpose, Scheduler, Subject, TimerKey};
pub use types::{BiscuitState, PaneId, PaneState, Rect, SearchState, WorkspaceInfo};

pub type Result<T> = std::result::Result<T, TrellisError>;
