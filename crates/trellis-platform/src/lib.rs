pub mod crash_report;
pub mod dispatcher;
pub mod input;
pub mod key_names;
pub mod keymap;
pub mod paths;

pub use dispatcher::{
    resolve, HintInput, HintOutcome, HintSession, KeyEvent, Mode, Outcome, PaneContext,
    Resolution,
};
pub use input::{KeyCombo, KeybindRegistry};
pub use key_names::normalize_key;
pub use keymap::{KeyBind, Modifier};
pub use paths::{config_dir, config_file, crash_report_dir, data_dir, ensure_dirs, session_file};
