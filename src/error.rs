use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::sim::entity::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no free {kind} slot (capacity {capacity})")]
    PoolExhausted { kind: EntityKind, capacity: usize },
}

#[derive(Debug, Error)]
pub enum ScoreboardError {
    #[error("scoreboard file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("scoreboard line {line} is malformed: {content:?}")]
    Parse { line: usize, content: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config file {path} is invalid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
}
