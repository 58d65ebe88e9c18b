use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid count '{input}': please enter a whole number"))]
    InvalidCount { input: String },

    #[snafu(display("Invalid number '{input}': please enter a numeric value"))]
    InvalidNumber { input: String },

    #[snafu(display("A file with the name '{name}' already exists"))]
    FileExists { name: String },

    #[snafu(display("Prompt failed: {message}"))]
    Prompt { message: String },

    #[snafu(display("OpenDAL error: {source}"))]
    OpenDal { source: opendal::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<opendal::Error> for Error {
    fn from(error: opendal::Error) -> Self {
        Error::OpenDal { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
