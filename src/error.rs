use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an adjacency record can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingColon,
    EmptyLabel,
    EmptyNeighbors,
    InvalidUtf8,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ParseErrorKind::MissingColon => "missing ':' separator",
            ParseErrorKind::EmptyLabel => "empty node label",
            ParseErrorKind::EmptyNeighbors => "empty neighbor list",
            ParseErrorKind::InvalidUtf8 => "node label is not valid UTF-8",
        };
        f.write_str(msg)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    /// A cut needs at least one node on each side
    #[error("graph has {0} node(s), at least 2 are needed for a cut")]
    TooFewNodes(usize),

    #[error("input graph is already split into {0} components")]
    Disconnected(usize),

    #[error("expected exactly two components, found {found}")]
    ComponentCount { found: usize },
}

impl Error {
    pub(crate) fn parse(line: usize, kind: ParseErrorKind) -> Error {
        Error::Parse { line, kind }
    }
}
