//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

// The selection form ("me" and "cards")

use std::convert::TryFrom;
use seed::{*, prelude::*};
use wasm_bindgen::JsCast;

use clue_core::{Ack, Acknowledger, CardSelection, Ident, SelectionForm};
use crate::{
    Msg,
    to_elem::ToOptions,
};

#[derive(Clone,Debug)]
pub enum FormMsg {
    /// value of the "me" select
    SelectMe(String),
    /// values of all selected options of the "cards" select
    SetCards(Vec<String>),
    Submit,
}

/// Blocking acknowledgment via window.alert()
struct AlertAck;

impl Acknowledger for AlertAck {
    fn acknowledge(&mut self, ack: &Ack) {
        let ret = web_sys::window().map(|w| w.alert_with_message(ack.message));
        match ret {
            Some(Ok(())) => (),
            Some(Err(x)) => log!(format!("alert failed: {:?}", x)),
            None => log!("no window to show acknowledgment"),
        }
    }
}

/// Values of the selected options of the <select> that fired the event
fn selected_values(event: &web_sys::Event) -> Vec<String> {
    let select = match event.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok()) {
        Some(x) => x,
        None => return vec![],
    };

    let opts = select.selected_options();
    (0..opts.length())
        .filter_map(|i| opts.item(i))
        .filter_map(|e| e.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|o| o.value())
        .collect()
}

pub struct FormSt {
    form: SelectionForm,
}

impl FormSt {
    pub fn new() -> FormSt {
        FormSt { form: SelectionForm::new() }
    }

    pub fn update_state(&mut self, msg: &FormMsg) {
        match msg {
            FormMsg::SelectMe(x) => {
                match Ident::try_from(x.as_str()) {
                    Ok(ident) => self.form.select_player(ident),
                    Err(e) => log!(format!("Ignoring player selection: {}", e)),
                }
            },

            FormMsg::SetCards(xs) => {
                let mut cards = CardSelection::empty();
                for x in xs.iter() {
                    match Ident::try_from(x.as_str()) {
                        Ok(ident) => cards.insert(ident),
                        Err(e) => log!(format!("Ignoring card selection: {}", e)),
                    }
                }
                self.form.set_cards(cards);
            },

            FormMsg::Submit => {
                self.form.submit(&mut AlertAck);
            },
        }
    }

    fn select_me(&self) -> Node<Msg> {
        div![
            class!["form-group"],
            label!["me", attrs!{At::For => "sel-me" }],
            select![
                class!["form-control"],
                attrs!{At::Id => "sel-me"},
                self.form.player().to_options(),
                input_ev(Ev::Input, |x| Msg::Form(FormMsg::SelectMe(x))),
            ],
        ]
    }

    fn select_cards(&self) -> Node<Msg> {
        div![
            class!["form-group"],
            label!["cards", attrs!{At::For => "sel-cards" }],
            select![
                class!["form-control"],
                attrs!{At::Id => "sel-cards", At::Multiple => "true"},
                self.form.cards().to_options(),
                ev(Ev::Change, |event| Msg::Form(FormMsg::SetCards(selected_values(&event)))),
            ],
        ]
    }

    pub fn view(&self) -> Node<Msg> {
        form![
            // stay on the page, the form is never navigated away from
            ev(Ev::Submit, |event| {
                event.prevent_default();
                Msg::Form(FormMsg::Submit)
            }),
            div![
                class!["form-row"],
                div![class!["col"], self.select_me()],
                div![class!["col"], self.select_cards()],
            ],
            button![
                class!["btn", "btn-primary"],
                attrs!{At::Type => "submit"},
                "Submit",
            ],
        ]
    }
}
