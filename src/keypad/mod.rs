//! Keypad editing layer.
//!
//! Turns button presses into an edited expression string and keeps a live
//! result alongside it, the way a pocket calculator screen does.

mod editing;
mod key;
mod session;

pub use editing::{append_token, toggle_sign};
pub use key::{Key, UnknownKey};
pub use session::{Screen, Session};
