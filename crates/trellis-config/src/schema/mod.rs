//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod browser;
mod hints;
mod keybind_config;
mod layout;
mod session;
mod system;
mod window;

pub use browser::*;
pub use hints::*;
pub use keybind_config::*;
pub use layout::*;
pub use session::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrellisConfig {
    pub layout: LayoutConfig,
    pub browser: BrowserConfig,
    pub hints: HintConfig,
    pub session: SessionConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub keybinds: KeybindConfig,
}

// =============================================================================
// Tests
// =============================================================================
