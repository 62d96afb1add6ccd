//! Mood and persona catalog types.
//!
//! Moods and role cards are configured in `config.toml`; the persona display
//! name, however, is a fixed mapping so editing the role list never changes
//! which bot a role id resolves to.

use serde::{Deserialize, Serialize};

/// A selectable mood option shown on the mood panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodOption {
    /// Stable identifier carried through selection and logging
    pub id: String,

    /// Display glyph (emoji)
    pub glyph: String,

    /// Display label
    pub label: String,
}

/// A persona card shown on the role panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCard {
    /// Stable role identifier, resolved through `persona_name`
    pub id: String,

    /// Display glyph (emoji)
    pub glyph: String,

    /// Card title
    pub title: String,

    /// Short tagline shown under the title
    #[serde(default)]
    pub tagline: String,
}

/// Resolve a role id to its persona display name.
///
/// Two personas exist in current scope: the calm-thinking bot and the baby
/// bot. Every recognized id other than "calm" resolves to the baby bot.
pub fn persona_name(role_id: &str) -> &'static str {
    if role_id == "calm" {
        "冷靜思考 BOT"
    } else {
        "寶寶 (嗚嗚) bot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_lookup() {
        assert_eq!(persona_name("calm"), "冷靜思考 BOT");
        assert_eq!(persona_name("baby"), "寶寶 (嗚嗚) bot");
        // The table has exactly two entries; unrecognized ids fall through
        // to the second one.
        assert_eq!(persona_name("anything-else"), "寶寶 (嗚嗚) bot");
    }
}
