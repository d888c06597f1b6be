pub mod channel;
pub mod session;
pub mod transcript;

pub use channel::{Channel, MessageId, TerminalChannel};
pub use session::{ERROR_PREFIX, SessionStore, THINKING_INDICATOR, handle_turn};
pub use transcript::write_transcript;
