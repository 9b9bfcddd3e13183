//! Persona configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Persona shown by the widget: the assistant's name and speaking style.
///
/// Both values feed the opening prompt only; the tone does not change the
/// per-phase prompts.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonaConfig {
    /// Display name the assistant introduces itself with
    #[serde(default = "default_name")]
    pub name: String,

    /// Speaking style rendered into the opening prompt
    #[serde(default)]
    pub voice_tone: VoiceTone,
}

/// Speaking style of the assistant
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VoiceTone {
    #[default]
    Formal,
    Casual,
    #[serde(alias = "sério")]
    Serio,
    #[serde(alias = "prático")]
    Pratico,
}

impl VoiceTone {
    /// Returns the display form interpolated into the opening prompt.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::Formal => "Formal",
            Self::Casual => "Casual",
            Self::Serio => "Sério",
            Self::Pratico => "Prático",
        }
    }
}

impl PersonaConfig {
    /// Validate persona configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingPersonaName);
        }
        Ok(())
    }
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            voice_tone: VoiceTone::default(),
        }
    }
}

fn default_name() -> String {
    "Assistente Virtual".to_string()
}
