//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

pub mod error;
pub mod ident;
pub mod selection;
pub mod form;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use ident::Ident;
pub use selection::{PlayerChoice, CardSelection};
pub use form::{Ack, Acknowledger, FormPhase, SelectionForm};
