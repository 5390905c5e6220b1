//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use seed::{*, prelude::*,};

use clue_core::{CardSelection, Ident, PlayerChoice};
use crate::Msg;

/// Render something as the list of <option>s of a select control
pub trait ToOptions {
    fn to_options(&self) -> Vec<Node<Msg>>;
}

fn ident_option(ident: Ident, selected: bool) -> Node<Msg> {
    let val = ident.to_string();
    if selected {
        option![val.clone(), attrs!{At::Value => val, At::Selected => "true"} ]
    } else {
        option![val.clone(), attrs!{At::Value => val,} ]
    }
}

impl ToOptions for PlayerChoice {
    fn to_options(&self) -> Vec<Node<Msg>> {
        Ident::ALL.iter().map(|i| ident_option(*i, *i == self.ident())).collect()
    }
}

impl ToOptions for CardSelection {
    fn to_options(&self) -> Vec<Node<Msg>> {
        Ident::ALL.iter().map(|i| ident_option(*i, self.contains(*i))).collect()
    }
}
