use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Obstacle not found: {id}")]
    ObstacleNotFound { id: String },

    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    #[error("Invalid arm geometry: {reason}")]
    InvalidArmGeometry { reason: String },

    #[error("Configuration space has not been built")]
    ConfigurationSpaceMissing,

    #[error("No inverse kinematics solution at index {index}")]
    SolutionNotFound { index: usize },
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
