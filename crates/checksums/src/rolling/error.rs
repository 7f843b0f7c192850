use core::fmt;

/// Errors that can occur while updating the rolling checksum state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RollingError {
    /// The checksum window is empty, so there is no byte to roll out.
    EmptyWindow,
}

impl fmt::Display for RollingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWindow => write!(f, "rolling checksum requires a non-empty window"),
        }
    }
}

impl std::error::Error for RollingError {}
