pub mod bridge;
pub mod session;

pub use bridge::{SNAPSHOT_SCRIPT, TestBridge};
pub use session::{BrowserConfig, BrowserKind, new_session};
