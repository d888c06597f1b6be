use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::openai::Message;

/// Writes the session's full transcript as a pretty-printed JSON array
/// of role/content records, replacing any previous file at the path.
/// The path is shared across sessions; last writer wins.
pub fn write_transcript(path: &Path, messages: &[Message]) -> Result<()> {
    let json = serde_json::to_string_pretty(messages)?;
    fs::write(path, json)?;
    Ok(())
}
