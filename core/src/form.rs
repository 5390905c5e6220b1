//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

// Selection form: "me" (single choice) and "cards" (multiple choice)

use super::ident::Ident;
use super::selection::{CardSelection, PlayerChoice};

/// Message shown for every submission
pub const ACK_MESSAGE: &str = "test";

/// Acknowledgment of a submission. Its content does not depend on what was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub message: &'static str,
}

impl Default for Ack {
    fn default() -> Self {
        Ack { message: ACK_MESSAGE }
    }
}

/// Shows an acknowledgment to the user (blocking until dismissed)
pub trait Acknowledger {
    fn acknowledge(&mut self, ack: &Ack);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionForm {
    player: PlayerChoice,
    cards: CardSelection,
}

impl SelectionForm {
    pub fn new() -> SelectionForm {
        Self::default()
    }

    pub fn player(&self) -> PlayerChoice {
        self.player
    }

    pub fn cards(&self) -> CardSelection {
        self.cards
    }

    /// Submission returns to editing immediately, so this is the only phase
    pub fn phase(&self) -> FormPhase {
        FormPhase::Editing
    }

    pub fn select_player(&mut self, player: Ident) {
        self.player = PlayerChoice(player);
    }

    pub fn toggle_card(&mut self, card: Ident) -> bool {
        self.cards.toggle(card)
    }

    pub fn set_cards(&mut self, cards: CardSelection) {
        self.cards = cards;
    }

    /// Neither the player nor the cards are read, and the form is left as is.
    pub fn submit<A: Acknowledger>(&self, acker: &mut A) -> Ack {
        let ack = Ack::default();
        acker.acknowledge(&ack);
        ack
    }
}
