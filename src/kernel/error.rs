use std::fmt;

/// Failures surfaced to the caller of the simulator.
///
/// A process that cannot be admitted to memory is not an error; it is
/// reported as a skip in the run report.
#[derive(Debug)]
pub enum SimError {
    InvalidQuantum(i64),
    RegistryFull { max: usize },
    DuplicateProcessId(u32),
    InvalidProcess { id: u32, reason: &'static str },
    NotImplemented(&'static str),
    Parse { line: usize, reason: String },
    Io(std::io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidQuantum(quantum) => {
                write!(f, "invalid quantum {}: must be a positive number of ticks", quantum)
            }
            SimError::RegistryFull { max } => {
                write!(f, "process table is full ({} processes max)", max)
            }
            SimError::DuplicateProcessId(id) => write!(f, "duplicate process id {}", id),
            SimError::InvalidProcess { id, reason } => {
                write!(f, "invalid process {}: {}", id, reason)
            }
            SimError::NotImplemented(what) => write!(f, "{} is not implemented", what),
            SimError::Parse { line, reason } => write!(f, "line {}: {}", line, reason),
            SimError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> SimError {
        SimError::Io(err)
    }
}
