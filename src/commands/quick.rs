//! Quick commands: ping, echo, and the `o/` wave

use anyhow::Result;

/// Generate ping response
pub fn ping() -> String {
    "🏓 Pong!".to_string()
}

/// Echo the text after the command name back
pub fn echo(content: &str) -> Result<String> {
    if content.is_empty() {
        anyhow::bail!("Nothing to echo. Usage: `echo <text>`");
    }
    Ok(content.to_string())
}

/// Generate wave response
pub fn wave() -> String {
    "\\o".to_string()
}
