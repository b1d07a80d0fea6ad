use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid year '{input}': {source}")]
    InvalidYear {
        input: String,
        source: std::num::ParseIntError,
    },

    #[error("empty range: start year {from} is after end year {to}")]
    EmptyRange { from: i64, to: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
