use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Direction {direction} not recognized by {operation}")]
    UnrecognizedDirection { direction: String, operation: String },

    #[error("Direction pair ({first}, {second}) cannot be combined")]
    UnrecognizedDirectionPair { first: String, second: String },

    #[error("No displacement between identical points at {point}")]
    DegenerateDisplacement { point: String },

    #[error("Cannot make {value} {target}: sign already matches")]
    InvalidSignTransition { value: i64, target: String },

    #[error("Travel ended prematurely: completed {completed} out of {expected} paces")]
    PrematureTermination { completed: usize, expected: usize },

    #[error("Adding {delta} to {value} leaves the grid")]
    CoordinateOverflow { value: i64, delta: i64 },

    #[error("Travel of {requested} exceeds the limit of {limit}")]
    DurationOutOfRange { requested: String, limit: String },

    #[error("Point map must hold exactly one entry, found {entries}")]
    InvalidPointMap { entries: usize },
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid action #{index}: {reason}")]
    InvalidAction { index: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported configuration format: {path}")]
    UnsupportedConfigFormat { path: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
