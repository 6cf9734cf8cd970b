use std::fmt;
use std::io;

/// Errors surfaced by the engine crate: malformed input graphs and invalid
/// algorithm parameters. Internal invariant violations (an out-of-range
/// vertex id reaching the superstep driver, a vertex program overrunning its
/// outbox slot) are not represented here — they are bugs in preprocessing or
/// in a vertex program, not recoverable conditions, and surface as panics.
#[derive(Debug)]
pub enum Error {
    /// The edgelist or adjacency-list file could not be read.
    Io(io::Error),

    /// A line did not parse as `src\tdst[\tweight]` (or, for adjacency-list
    /// input, as `vertex_id neighbor...`).
    MalformedLine { line_no: usize, text: String },

    /// A vertex or edge-weight field parsed to a negative integer.
    NegativeId { line_no: usize, text: String },

    /// Edgelist input must be sorted by `src` ascending; line `line_no`
    /// named a source smaller than one already seen.
    UnsortedSource {
        line_no: usize,
        src: usize,
        last_src: usize,
    },

    /// The source vertex supplied to an algorithm initializer is outside
    /// `[0, num_vertices)`.
    SourceOutOfRange { src: usize, num_vertices: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "failed to read graph file: {e}"),
            Error::MalformedLine { line_no, text } => {
                write!(f, "malformed line {line_no}: {text:?}")
            }
            Error::NegativeId { line_no, text } => {
                write!(f, "negative id on line {line_no}: {text:?}")
            }
            Error::UnsortedSource {
                line_no,
                src,
                last_src,
            } => write!(
                f,
                "edgelist not sorted by src: line {line_no} has src {src} after {last_src}"
            ),
            Error::SourceOutOfRange { src, num_vertices } => write!(
                f,
                "source vertex {src} is out of range for a graph with {num_vertices} vertices"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
