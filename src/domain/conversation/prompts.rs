//! Prompt templates for the widget dialogue.
//!
//! Two prompts drive the whole conversation: the opening prompt that makes
//! the assistant introduce itself, and the per-phase prompt that relays the
//! shopper's choice together with the phase instruction.

/// Bot reply appended when a phase completion fails.
pub const FALLBACK_REPLY: &str = "Aconteceu algo inesperado.";

/// Builds the opening prompt that asks the assistant to introduce itself.
///
/// `voice_tone` is the display form of the configured tone (e.g. "Sério").
pub fn opening_prompt(assistant_name: &str, voice_tone: &str) -> String {
    format!(
        "Você é um assistente virtual de um e-commerce de vinhos. \
         Seu nome é {}. \
         Responda as mensagens do usuário com estilo {} e direto. \
         Se apresente.",
        assistant_name, voice_tone
    )
}

/// Builds the per-phase prompt relaying the shopper's choice.
///
/// The template always appends its own final period, even when the
/// instruction already ends with one.
pub fn phase_prompt(choice: &str, instruction: &str) -> String {
    format!("O usuário escolheu {}. {}.", choice, instruction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_prompt_substitutes_name_and_tone() {
        let prompt = opening_prompt("Assistente Virtual", "Formal");
        assert_eq!(
            prompt,
            "Você é um assistente virtual de um e-commerce de vinhos. \
             Seu nome é Assistente Virtual. \
             Responda as mensagens do usuário com estilo Formal e direto. \
             Se apresente."
        );
    }

    #[test]
    fn opening_prompt_carries_accented_tones() {
        let prompt = opening_prompt("Vinícola", "Sério");
        assert!(prompt.contains("Seu nome é Vinícola."));
        assert!(prompt.contains("estilo Sério e direto"));
    }

    #[test]
    fn phase_prompt_relays_choice_and_instruction() {
        let prompt = phase_prompt("Jantar", "Pergunte sobre o prato");
        assert_eq!(prompt, "O usuário escolheu Jantar. Pergunte sobre o prato.");
    }

    #[test]
    fn phase_prompt_keeps_the_template_period() {
        let prompt = phase_prompt("Carne", "Sugira apenas um vinho e finalize a conversa");
        assert_eq!(
            prompt,
            "O usuário escolheu Carne. Sugira apenas um vinho e finalize a conversa."
        );
    }

    #[test]
    fn phase_prompt_does_not_deduplicate_periods() {
        let prompt = phase_prompt("Tenho ideia do que quero", "Pergunte qual tipo de vinho.");
        assert_eq!(
            prompt,
            "O usuário escolheu Tenho ideia do que quero. Pergunte qual tipo de vinho.."
        );
    }

    #[test]
    fn fallback_reply_is_the_fixed_notice() {
        assert_eq!(FALLBACK_REPLY, "Aconteceu algo inesperado.");
    }
}
