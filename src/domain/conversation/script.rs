//! Phase script for the guided dialogue.
//!
//! A script is a fixed, ordered list of phases. Each phase carries the
//! instruction given to the completion model and the quick-reply options
//! offered to the shopper. The last phase is the terminal one: it has no
//! instruction and no options, and reaching it means the conversation is
//! finished until a restart.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One stage of the guided dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    instruction: String,
    options: Vec<String>,
}

impl Phase {
    /// Creates a phase with an instruction and its quick-reply options.
    pub fn new<I, S>(instruction: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            instruction: instruction.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates the terminal phase (empty instruction, no options).
    pub fn terminal() -> Self {
        Self {
            instruction: String::new(),
            options: Vec::new(),
        }
    }

    /// Returns the instruction sent to the completion model for this phase.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Returns the quick-reply options offered at this phase.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns true if this is a terminal phase.
    pub fn is_terminal(&self) -> bool {
        self.instruction.is_empty() && self.options.is_empty()
    }
}

/// The fixed ordered sequence of phases driving one conversation.
///
/// Immutable after construction. The built-in wine-selection script is the
/// one the widget ships with; arbitrary scripts can be built for tests or
/// other dialogues, with the terminal phase last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhaseScript {
    phases: Vec<Phase>,
}

impl PhaseScript {
    /// Creates a script from an ordered list of phases.
    pub fn new(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    /// Returns the built-in wine-selection dialogue.
    pub fn wine_selection() -> Self {
        WINE_SELECTION.clone()
    }

    /// Returns the number of phases, terminal included.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Returns true if the script has no phases.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Returns the phase at `index`, if it exists.
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    /// Returns the options for the phase at `index`.
    ///
    /// Out-of-range indexes yield an empty slice; past the script there is
    /// nothing left to offer.
    pub fn options_for(&self, index: usize) -> &[String] {
        self.phases
            .get(index)
            .map(|phase| phase.options())
            .unwrap_or(&[])
    }

    /// Returns the instruction for the phase at `index`.
    ///
    /// Out-of-range indexes yield an empty instruction.
    pub fn instruction_for(&self, index: usize) -> &str {
        self.phases
            .get(index)
            .map(|phase| phase.instruction())
            .unwrap_or("")
    }

    /// Returns the index of the terminal phase.
    pub fn terminal_index(&self) -> usize {
        self.phases.len().saturating_sub(1)
    }

    /// Returns true if `index` sits at or past the terminal phase.
    pub fn is_terminal(&self, index: usize) -> bool {
        index + 1 >= self.phases.len()
    }
}

/// The wine-selection dialogue the widget ships with.
static WINE_SELECTION: Lazy<PhaseScript> = Lazy::new(|| {
    PhaseScript::new(vec![
        Phase::new(
            "Pergunte qual tipo de vinho.",
            [
                "Sei exatamente que vinho procuro",
                "Tenho ideia do que quero",
                "Quero ser surpreendido",
            ],
        ),
        Phase::new(
            "Pergunte para qual ocasião será consumida o vinho.",
            [
                "Vinhos mais encopardos",
                "Vinhos mais secos",
                "Vinhos com mais docura",
                "Vinhos com mistura de frutas",
            ],
        ),
        Phase::new(
            "Elogie com um comentário de 1 linha sobre a escolha do usuário e pergunte sobre o tipo.",
            [
                "Jantar",
                "Harmonização com queijo",
                "Tomar enquanto vejo um filme",
                "Almoço",
            ],
        ),
        Phase::new(
            "Sugira apenas um vinho e finalize a conversa",
            ["Massas", "Carne", "Peixe", "Frango"],
        ),
        Phase::terminal(),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    mod phase {
        use super::*;

        #[test]
        fn new_keeps_instruction_and_options() {
            let phase = Phase::new("Pergunte qual tipo de vinho.", ["a", "b"]);
            assert_eq!(phase.instruction(), "Pergunte qual tipo de vinho.");
            assert_eq!(phase.options(), &["a".to_string(), "b".to_string()]);
            assert!(!phase.is_terminal());
        }

        #[test]
        fn terminal_is_empty() {
            let phase = Phase::terminal();
            assert!(phase.instruction().is_empty());
            assert!(phase.options().is_empty());
            assert!(phase.is_terminal());
        }
    }

    mod wine_selection {
        use super::*;

        #[test]
        fn has_five_phases_ending_terminal() {
            let script = PhaseScript::wine_selection();
            assert_eq!(script.len(), 5);
            assert_eq!(script.terminal_index(), 4);
            assert!(script.phase(4).unwrap().is_terminal());
        }

        #[test]
        fn first_phase_asks_for_wine_type() {
            let script = PhaseScript::wine_selection();
            assert_eq!(
                script.instruction_for(0),
                "Pergunte qual tipo de vinho."
            );
            assert_eq!(
                script.options_for(0),
                &[
                    "Sei exatamente que vinho procuro".to_string(),
                    "Tenho ideia do que quero".to_string(),
                    "Quero ser surpreendido".to_string(),
                ]
            );
        }

        #[test]
        fn last_scripted_phase_closes_the_conversation() {
            let script = PhaseScript::wine_selection();
            assert_eq!(
                script.instruction_for(3),
                "Sugira apenas um vinho e finalize a conversa"
            );
            assert_eq!(script.options_for(3).len(), 4);
        }

        #[test]
        fn only_last_index_is_terminal() {
            let script = PhaseScript::wine_selection();
            for index in 0..4 {
                assert!(!script.is_terminal(index), "phase {} is not terminal", index);
            }
            assert!(script.is_terminal(4));
        }
    }

    mod defensive_reads {
        use super::*;

        #[test]
        fn options_past_the_script_are_empty() {
            let script = PhaseScript::wine_selection();
            assert!(script.options_for(5).is_empty());
            assert!(script.options_for(100).is_empty());
        }

        #[test]
        fn instruction_past_the_script_is_empty() {
            let script = PhaseScript::wine_selection();
            assert_eq!(script.instruction_for(17), "");
        }

        #[test]
        fn indexes_past_the_script_count_as_terminal() {
            let script = PhaseScript::wine_selection();
            assert!(script.is_terminal(5));
            assert!(script.is_terminal(usize::MAX - 1));
        }

        #[test]
        fn empty_script_is_all_terminal() {
            let script = PhaseScript::new(Vec::new());
            assert!(script.is_empty());
            assert!(script.is_terminal(0));
            assert!(script.options_for(0).is_empty());
        }
    }
}
