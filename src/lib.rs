pub mod api;
pub mod config;
pub mod error;
pub mod grid;
pub mod loader;
pub mod neighbors;
pub mod path;
pub mod search;
pub mod task;
// cmd and reports belong to the binary (main.rs).

pub use error::{KeyPathError, KpResult};
pub use grid::Keyboard;
pub use path::{PathToken, TypedPath};
pub use task::{TypingResult, TypingTask};
