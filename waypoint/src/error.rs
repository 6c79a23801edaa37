use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("duplicate route pattern: {path}"))]
    DuplicateRoute { path: String },
}

pub type Result<T> = std::result::Result<T, Error>;
