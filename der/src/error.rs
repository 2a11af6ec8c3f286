use der_parser::error::BerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parser error: {0}")]
    Parser(BerError),
    #[error("parser incomplete: {0:?}")]
    ParserIncomplete(nom::Needed),
}

impl From<nom::Err<BerError>> for Error {
    fn from(err: nom::Err<BerError>) -> Self {
        match err {
            nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
            nom::Err::Error(e) | nom::Err::Failure(e) => Error::Parser(e),
        }
    }
}
