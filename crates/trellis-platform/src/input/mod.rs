//! Keybind registry: maps parsed `KeyBind` values to runtime `Action`s,
//! split into layers the dispatcher consults in precedence order.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::{KeybindRegistry, Layer};
