//! Inbound ports (driving side): capabilities the core offers to callers
//! such as the CLI or a chat-command layer.

pub mod operator;
pub mod roster;
