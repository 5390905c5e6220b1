//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::convert::TryFrom;
use super::error as e;

/// One of the five identifiers offered by both form controls.
///
/// The same closed set names players ("me") and cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ident {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Ident {
    /// All identifiers, in option order
    pub const ALL: [Ident; 5] = [Ident::One, Ident::Two, Ident::Three, Ident::Four, Ident::Five];

    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// zero-based position in `ALL`
    pub fn index(&self) -> usize {
        (self.number() - 1) as usize
    }
}

impl Default for Ident {
    fn default() -> Self {
        Ident::One
    }
}

impl TryFrom<u8> for Ident {
    type Error = e::Error;

    fn try_from(val: u8) -> Result<Ident, e::Error> {
        match val {
            1..=5 => Ok(Ident::ALL[(val - 1) as usize]),
            _ => Err(e::Error::InvalidIdentNumber(val)),
        }
    }
}

impl TryFrom<&str> for Ident {
    type Error = e::Error;

    /// Parses an option value ("1".."5")
    fn try_from(val: &str) -> Result<Ident, e::Error> {
        let invalid = || e::Error::InvalidIdentStr(val.to_string());
        let n = val.trim().parse::<u8>().map_err(|_| invalid())?;
        Ident::try_from(n).map_err(|_| invalid())
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[test]
fn try_from_tests() {
    // number
    assert_eq!(Ident::try_from(1u8).unwrap(), Ident::One);
    assert_eq!(Ident::try_from(5u8).unwrap(), Ident::Five);
    assert_eq!(Ident::try_from(0u8), Err(e::Error::InvalidIdentNumber(0)));
    assert!(Ident::try_from(6u8).is_err());
    // option value
    assert_eq!(Ident::try_from("3").unwrap(), Ident::Three);
    assert_eq!(Ident::try_from(" 4 ").unwrap(), Ident::Four);
    assert_eq!(Ident::try_from("6"), Err(e::Error::InvalidIdentStr("6".to_string())));
    assert!(Ident::try_from("").is_err());
    assert!(Ident::try_from("-1").is_err());
    assert!(Ident::try_from("one").is_err());
}

#[test]
fn labels_follow_option_order() {
    let labels: Vec<String> = Ident::ALL.iter().map(|i| i.to_string()).collect();
    assert_eq!(labels, vec!["1", "2", "3", "4", "5"]);
    for (i, ident) in Ident::ALL.iter().enumerate() {
        assert_eq!(ident.index(), i);
        assert_eq!(Ident::try_from(ident.to_string().as_str()).unwrap(), *ident);
    }
}
