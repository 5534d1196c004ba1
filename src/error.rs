use std::fmt;

/// Errors raised while parsing, normalizing or rendering HTML.
#[derive(Debug)]
pub enum Error {
    /// The input could not be turned into a tree, for instance because it
    /// declares a character encoding we do not know.
    Parse(String),
    /// Invalid configuration, such as a non-positive indent width.
    Config(String),
    /// Reading the input or writing the output failed.
    Io(std::io::Error),
    /// A child was added to a void element. Void elements never have
    /// content; this indicates a bug in whatever built the tree.
    VoidElementContent(String),
    /// The tree was manipulated in a way that breaks its structure.
    InvalidOperation(String),
    /// Indextree error
    NodeError(indextree::NodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(message) => write!(f, "cannot parse input: {}", message),
            Error::Config(message) => write!(f, "invalid configuration: {}", message),
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::VoidElementContent(name) => {
                write!(f, "void element <{}> cannot have children", name)
            }
            Error::InvalidOperation(message) => write!(f, "invalid operation: {}", message),
            Error::NodeError(e) => write!(f, "tree error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::NodeError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::NodeError(e)
    }
}
