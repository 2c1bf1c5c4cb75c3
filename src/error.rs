use thiserror::Error;

/** errors raised while reading the command line parameters */
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    /// no number of colors given
    #[error("Provide the number (1 to 4) of colors (k) as a command-line argument.")]
    MissingColors,
    /// the number of colors is not an integer
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// the number of colors is outside of 1..=4
    #[error("k should be between 1 and 4.")]
    OutOfRange(i64),
}

/** errors raised while reading a DIMACS instance */
#[derive(Debug, Error)]
pub enum InstanceError {
    /// the instance file cannot be read
    #[error("unable to read {filename}: {source}")]
    Io {
        /// file name
        filename: String,
        /// underlying error
        #[source]
        source: std::io::Error,
    },
    /// the file does not follow the DIMACS format
    #[error("parse error: {0}")]
    Parse(String),
    /// the number of edges read differs from the header
    #[error("header announces {expected} edges, {found} read")]
    EdgeCount {
        /// edges announced in the header
        expected: usize,
        /// edges read
        found: usize,
    },
    /// an edge uses an unknown vertex
    #[error("vertex {vertex} out of range 1..={n}")]
    VertexOutOfRange {
        /// vertex read (DIMACS numbering)
        vertex: usize,
        /// number of vertices
        n: usize,
    },
}
