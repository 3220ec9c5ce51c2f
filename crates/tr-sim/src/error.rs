use thiserror::Error;
use tr_core::{IntersectionId, LaneId, TrafficError};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("unknown lane {0}")]
    UnknownLane(LaneId),

    #[error("unknown intersection {0}")]
    UnknownIntersection(IntersectionId),

    #[error("{0} does not have a lane in every slot")]
    IntersectionNotReady(IntersectionId),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] TrafficError),
}

pub type SimResult<T> = Result<T, SimError>;
