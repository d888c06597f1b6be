pub mod core;

pub use core::{CompletionError, Message, Role, completion};
