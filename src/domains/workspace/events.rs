use crate::common::DomainEvent;
use crate::domains::collision::Obstacle;
use crate::domains::configuration_space::GridCell;
use crate::domains::kinematics::{Configuration, Position2D};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KinematicChainEvent {
    ChainCreated {
        chain_id: String,
        first_link_length: f64,
        second_link_length: f64,
        timestamp: DateTime<Utc>,
    },
    LinkLengthsChanged {
        chain_id: String,
        first_link_length: f64,
        second_link_length: f64,
        timestamp: DateTime<Utc>,
    },
    TargetSolved {
        chain_id: String,
        target: Position2D,
        solutions: Vec<Configuration>,
        timestamp: DateTime<Utc>,
    },
    TargetUnreachable {
        chain_id: String,
        target: Position2D,
        timestamp: DateTime<Utc>,
    },
    ObstacleAdded {
        chain_id: String,
        obstacle: Obstacle,
        timestamp: DateTime<Utc>,
    },
    ObstacleMoved {
        chain_id: String,
        obstacle_id: String,
        delta: Position2D,
        timestamp: DateTime<Utc>,
    },
    ObstacleResized {
        chain_id: String,
        obstacle_id: String,
        size: Position2D,
        timestamp: DateTime<Utc>,
    },
    ObstacleRemoved {
        chain_id: String,
        obstacle_id: String,
        timestamp: DateTime<Utc>,
    },
    ObstacleSelected {
        chain_id: String,
        obstacle_id: Option<String>,
        timestamp: DateTime<Utc>,
    },
    StartSet {
        chain_id: String,
        configuration: Configuration,
        timestamp: DateTime<Utc>,
    },
    GoalSet {
        chain_id: String,
        configuration: Configuration,
        timestamp: DateTime<Utc>,
    },
    ConfigurationSpaceBuilt {
        chain_id: String,
        free_cells: usize,
        timestamp: DateTime<Utc>,
    },
    PathFound {
        chain_id: String,
        start: GridCell,
        goal: GridCell,
        steps: usize,
        timestamp: DateTime<Utc>,
    },
    PathNotFound {
        chain_id: String,
        start: GridCell,
        goal: GridCell,
        timestamp: DateTime<Utc>,
    },
    PlaybackStarted {
        chain_id: String,
        timestamp: DateTime<Utc>,
    },
    PlaybackStopped {
        chain_id: String,
        timestamp: DateTime<Utc>,
    },
    PlaybackFinished {
        chain_id: String,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for KinematicChainEvent {
    fn event_type(&self) -> &'static str {
        match self {
            KinematicChainEvent::ChainCreated { .. } => "ChainCreated",
            KinematicChainEvent::LinkLengthsChanged { .. } => "LinkLengthsChanged",
            KinematicChainEvent::TargetSolved { .. } => "TargetSolved",
            KinematicChainEvent::TargetUnreachable { .. } => "TargetUnreachable",
            KinematicChainEvent::ObstacleAdded { .. } => "ObstacleAdded",
            KinematicChainEvent::ObstacleMoved { .. } => "ObstacleMoved",
            KinematicChainEvent::ObstacleResized { .. } => "ObstacleResized",
            KinematicChainEvent::ObstacleRemoved { .. } => "ObstacleRemoved",
            KinematicChainEvent::ObstacleSelected { .. } => "ObstacleSelected",
            KinematicChainEvent::StartSet { .. } => "StartSet",
            KinematicChainEvent::GoalSet { .. } => "GoalSet",
            KinematicChainEvent::ConfigurationSpaceBuilt { .. } => "ConfigurationSpaceBuilt",
            KinematicChainEvent::PathFound { .. } => "PathFound",
            KinematicChainEvent::PathNotFound { .. } => "PathNotFound",
            KinematicChainEvent::PlaybackStarted { .. } => "PlaybackStarted",
            KinematicChainEvent::PlaybackStopped { .. } => "PlaybackStopped",
            KinematicChainEvent::PlaybackFinished { .. } => "PlaybackFinished",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            KinematicChainEvent::ChainCreated { chain_id, .. }
            | KinematicChainEvent::LinkLengthsChanged { chain_id, .. }
            | KinematicChainEvent::TargetSolved { chain_id, .. }
            | KinematicChainEvent::TargetUnreachable { chain_id, .. }
            | KinematicChainEvent::ObstacleAdded { chain_id, .. }
            | KinematicChainEvent::ObstacleMoved { chain_id, .. }
            | KinematicChainEvent::ObstacleResized { chain_id, .. }
            | KinematicChainEvent::ObstacleRemoved { chain_id, .. }
            | KinematicChainEvent::ObstacleSelected { chain_id, .. }
            | KinematicChainEvent::StartSet { chain_id, .. }
            | KinematicChainEvent::GoalSet { chain_id, .. }
            | KinematicChainEvent::ConfigurationSpaceBuilt { chain_id, .. }
            | KinematicChainEvent::PathFound { chain_id, .. }
            | KinematicChainEvent::PathNotFound { chain_id, .. }
            | KinematicChainEvent::PlaybackStarted { chain_id, .. }
            | KinematicChainEvent::PlaybackStopped { chain_id, .. }
            | KinematicChainEvent::PlaybackFinished { chain_id, .. } => chain_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            KinematicChainEvent::ChainCreated { timestamp, .. }
            | KinematicChainEvent::LinkLengthsChanged { timestamp, .. }
            | KinematicChainEvent::TargetSolved { timestamp, .. }
            | KinematicChainEvent::TargetUnreachable { timestamp, .. }
            | KinematicChainEvent::ObstacleAdded { timestamp, .. }
            | KinematicChainEvent::ObstacleMoved { timestamp, .. }
            | KinematicChainEvent::ObstacleResized { timestamp, .. }
            | KinematicChainEvent::ObstacleRemoved { timestamp, .. }
            | KinematicChainEvent::ObstacleSelected { timestamp, .. }
            | KinematicChainEvent::StartSet { timestamp, .. }
            | KinematicChainEvent::GoalSet { timestamp, .. }
            | KinematicChainEvent::ConfigurationSpaceBuilt { timestamp, .. }
            | KinematicChainEvent::PathFound { timestamp, .. }
            | KinematicChainEvent::PathNotFound { timestamp, .. }
            | KinematicChainEvent::PlaybackStarted { timestamp, .. }
            | KinematicChainEvent::PlaybackStopped { timestamp, .. }
            | KinematicChainEvent::PlaybackFinished { timestamp, .. } => *timestamp,
        }
    }
}
