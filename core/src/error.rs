//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Number -> Ident conversion failed (argument is given number)
    InvalidIdentNumber(u8),
    /// String -> Ident conversion failed (argument is given string)
    InvalidIdentStr(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidIdentNumber(x) => write!(f, "invalid identifier number: {}", x),
            Error::InvalidIdentStr(x) => write!(f, "invalid identifier: {:?}", x),
        }
    }
}

impl std::error::Error for Error {}
