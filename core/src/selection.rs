//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use super::ident::Ident;

/// Which player the form is filled out for ("me")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerChoice(pub Ident);

/// Set of selected cards
///
/// Membership is one bit per identifier, so duplicates cannot exist.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct CardSelection {
    bits: u8,
}

impl PlayerChoice {
    pub fn ident(&self) -> Ident {
        self.0
    }
}

impl CardSelection {
    pub fn empty() -> CardSelection {
        CardSelection { bits: 0 }
    }

    fn mask(card: Ident) -> u8 {
        1 << card.index()
    }

    pub fn contains(&self, card: Ident) -> bool {
        self.bits & Self::mask(card) != 0
    }

    pub fn insert(&mut self, card: Ident) {
        self.bits |= Self::mask(card);
    }

    pub fn remove(&mut self, card: Ident) {
        self.bits &= !Self::mask(card);
    }

    /// flip membership, returns whether the card is selected afterwards
    pub fn toggle(&mut self, card: Ident) -> bool {
        self.bits ^= Self::mask(card);
        self.contains(card)
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// selected cards, in identifier order
    pub fn iter(&self) -> impl Iterator<Item = Ident> {
        let all: &'static [Ident; 5] = &Ident::ALL;
        let sel = *self;
        all.iter().cloned().filter(move |c| sel.contains(*c))
    }
}

impl std::iter::FromIterator<Ident> for CardSelection {
    fn from_iter<I: IntoIterator<Item = Ident>>(iter: I) -> Self {
        let mut ret = CardSelection::empty();
        for card in iter {
            ret.insert(card);
        }
        ret
    }
}

impl std::fmt::Debug for CardSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl std::fmt::Display for CardSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", card)?;
        }
        f.write_str("}")
    }
}
