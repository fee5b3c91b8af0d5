use super::aggregate::KinematicChain;
use crate::domains::playback::PlaybackState;
use serde::Serialize;

/// Read model of a chain for status displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainSummary {
    pub chain_id: String,
    pub version: u64,
    pub obstacle_count: usize,
    pub solution_count: usize,
    pub free_cells: Option<usize>,
    pub configuration_space_stale: bool,
    pub path_steps: Option<usize>,
    pub playback: PlaybackState,
}

impl From<&KinematicChain> for ChainSummary {
    fn from(chain: &KinematicChain) -> Self {
        Self {
            chain_id: chain.id.clone(),
            version: chain.version,
            obstacle_count: chain.obstacles().len(),
            solution_count: chain.solutions().len(),
            free_cells: chain.availability().map(|grid| grid.free_count()),
            configuration_space_stale: chain.configuration_space_stale(),
            path_steps: chain.last_search().map(|search| search.path.step_count()),
            playback: chain.playback_state(),
        }
    }
}
