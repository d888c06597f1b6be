use anyhow::{Result, bail};
use std::io::{self, Write};

/// Identifies a message previously sent on a channel so it can be
/// updated in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageId(pub usize);

/// Outbound user-facing channel. Supports in-place update of a
/// previously sent message, used for the thinking indicator to
/// final-reply transition.
pub trait Channel {
    fn send(&mut self, content: &str) -> Result<MessageId>;
    fn update(&mut self, id: MessageId, content: &str) -> Result<()>;
}

/// Channel that writes to stdout. Updates are limited to the most
/// recently sent message, which is always a single line (the thinking
/// indicator), so an update erases that line and reprints.
#[derive(Debug, Default)]
pub struct TerminalChannel {
    next_id: usize,
    last_sent: Option<MessageId>,
}

impl TerminalChannel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Channel for TerminalChannel {
    fn send(&mut self, content: &str) -> Result<MessageId> {
        println!("{}", content);
        io::stdout().flush()?;
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.last_sent = Some(id);
        Ok(id)
    }

    fn update(&mut self, id: MessageId, content: &str) -> Result<()> {
        if self.last_sent != Some(id) {
            bail!("Only the most recently sent message can be updated");
        }
        // Move up one line and clear it before reprinting
        print!("\x1b[1A\x1b[2K");
        println!("{}", content);
        io::stdout().flush()?;
        Ok(())
    }
}
