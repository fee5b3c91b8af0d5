use super::events::KinematicChainEvent;
use crate::common::{AggregateRoot, DomainError, DomainResult};
use crate::domains::collision::{Aabb, Obstacle};
use crate::domains::configuration_space::{build_configuration_space, AvailabilityGrid};
use crate::domains::kinematics::{ArmModel, ArmPose, Configuration, Position2D};
use crate::domains::path_planning::{find_path, DistanceGrid, Path, SearchOutcome};
use crate::domains::playback::{PathPlayer, PlaybackState};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of the last inverse kinematics request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IkStatus {
    Solved(usize),
    Unreachable,
}

/// Default bounds for obstacles created without explicit corners.
pub fn default_obstacle_bounds() -> Aabb {
    Aabb::new(Position2D::new(-0.5, -0.5), Position2D::new(0.5, 0.5))
}

/// The arm, its obstacle field, and every planning artifact derived from them.
///
/// Grids, the last search and the path are replaced wholesale by the build and
/// search commands and are never patched in place.
#[derive(Debug)]
pub struct KinematicChain {
    pub id: String,
    pub version: u64,
    arm: ArmModel,
    obstacles: Vec<Obstacle>,
    selected_obstacle: Option<String>,
    target: Option<Position2D>,
    solutions: Vec<Configuration>,
    start: Configuration,
    goal: Configuration,
    availability: Option<AvailabilityGrid>,
    availability_stale: bool,
    last_search: Option<SearchOutcome>,
    player: PathPlayer,
    uncommitted_events: Vec<KinematicChainEvent>,
}

impl KinematicChain {
    pub fn new(id: String, arm: ArmModel, step_duration: Duration) -> DomainResult<Self> {
        let mut chain = Self {
            id: id.clone(),
            version: 0,
            arm,
            obstacles: Vec::new(),
            selected_obstacle: None,
            target: None,
            solutions: Vec::new(),
            start: Configuration::default(),
            goal: Configuration::default(),
            availability: None,
            availability_stale: false,
            last_search: None,
            player: PathPlayer::new(step_duration)?,
            uncommitted_events: Vec::new(),
        };

        chain.record(KinematicChainEvent::ChainCreated {
            chain_id: id,
            first_link_length: arm.first_link_length(),
            second_link_length: arm.second_link_length(),
            timestamp: Utc::now(),
        })?;
        Ok(chain)
    }

    pub fn arm(&self) -> &ArmModel {
        &self.arm
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacle(&self, id: &str) -> DomainResult<&Obstacle> {
        self.obstacles
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| DomainError::ObstacleNotFound { id: id.to_string() })
    }

    pub fn selected_obstacle(&self) -> Option<&str> {
        self.selected_obstacle.as_deref()
    }

    pub fn target(&self) -> Option<Position2D> {
        self.target
    }

    pub fn solutions(&self) -> &[Configuration] {
        &self.solutions
    }

    pub fn solution(&self, index: usize) -> DomainResult<Configuration> {
        self.solutions
            .get(index)
            .copied()
            .ok_or(DomainError::SolutionNotFound { index })
    }

    pub fn start(&self) -> Configuration {
        self.start
    }

    pub fn goal(&self) -> Configuration {
        self.goal
    }

    pub fn availability(&self) -> Option<&AvailabilityGrid> {
        self.availability.as_ref()
    }

    /// True when obstacles or links changed after the last build.
    pub fn configuration_space_stale(&self) -> bool {
        self.availability_stale
    }

    pub fn last_search(&self) -> Option<&SearchOutcome> {
        self.last_search.as_ref()
    }

    pub fn distances(&self) -> Option<&DistanceGrid> {
        self.last_search.as_ref().map(|s| &s.distances)
    }

    pub fn path(&self) -> &Path {
        self.player.path()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.player.state()
    }

    pub fn playback_step(&self) -> usize {
        self.player.step()
    }

    // Arm and inverse kinematics

    pub fn set_link_lengths(&mut self, first: f64, second: f64) -> DomainResult<()> {
        ArmModel::new(first, second)?;
        self.record(KinematicChainEvent::LinkLengthsChanged {
            chain_id: self.id.clone(),
            first_link_length: first,
            second_link_length: second,
            timestamp: Utc::now(),
        })
    }

    /// Solve IK for `target`. An unreachable target keeps the previous solutions.
    pub fn solve_target(&mut self, target: Position2D) -> DomainResult<IkStatus> {
        let solutions = self.arm.inverse_solve(target);
        if solutions.is_empty() {
            self.record(KinematicChainEvent::TargetUnreachable {
                chain_id: self.id.clone(),
                target,
                timestamp: Utc::now(),
            })?;
            return Ok(IkStatus::Unreachable);
        }

        let count = solutions.len();
        self.record(KinematicChainEvent::TargetSolved {
            chain_id: self.id.clone(),
            target,
            solutions,
            timestamp: Utc::now(),
        })?;
        Ok(IkStatus::Solved(count))
    }

    // Obstacles

    pub fn add_obstacle(&mut self, bounds: Aabb) -> DomainResult<String> {
        let obstacle = Obstacle::new(bounds);
        let id = obstacle.id.clone();
        self.record(KinematicChainEvent::ObstacleAdded {
            chain_id: self.id.clone(),
            obstacle,
            timestamp: Utc::now(),
        })?;
        Ok(id)
    }

    pub fn add_default_obstacle(&mut self) -> DomainResult<String> {
        self.add_obstacle(default_obstacle_bounds())
    }

    pub fn move_obstacle(&mut self, id: &str, delta: Position2D) -> DomainResult<()> {
        self.obstacle(id)?;
        self.record(KinematicChainEvent::ObstacleMoved {
            chain_id: self.id.clone(),
            obstacle_id: id.to_string(),
            delta,
            timestamp: Utc::now(),
        })
    }

    pub fn resize_obstacle(&mut self, id: &str, size: Position2D) -> DomainResult<()> {
        self.obstacle(id)?;
        self.record(KinematicChainEvent::ObstacleResized {
            chain_id: self.id.clone(),
            obstacle_id: id.to_string(),
            size,
            timestamp: Utc::now(),
        })
    }

    pub fn remove_obstacle(&mut self, id: &str) -> DomainResult<()> {
        self.obstacle(id)?;
        self.record(KinematicChainEvent::ObstacleRemoved {
            chain_id: self.id.clone(),
            obstacle_id: id.to_string(),
            timestamp: Utc::now(),
        })
    }

    /// Select the first obstacle containing `point`, or clear the selection.
    pub fn select_obstacle_at(&mut self, point: Position2D) -> DomainResult<Option<String>> {
        let obstacle_id = self
            .obstacles
            .iter()
            .find(|o| o.bounds.contains(point))
            .map(|o| o.id.clone());
        self.record(KinematicChainEvent::ObstacleSelected {
            chain_id: self.id.clone(),
            obstacle_id: obstacle_id.clone(),
            timestamp: Utc::now(),
        })?;
        Ok(obstacle_id)
    }

    // Start and goal

    pub fn set_start(&mut self, configuration: Configuration) -> DomainResult<()> {
        self.record(KinematicChainEvent::StartSet {
            chain_id: self.id.clone(),
            configuration,
            timestamp: Utc::now(),
        })
    }

    pub fn set_goal(&mut self, configuration: Configuration) -> DomainResult<()> {
        self.record(KinematicChainEvent::GoalSet {
            chain_id: self.id.clone(),
            configuration,
            timestamp: Utc::now(),
        })
    }

    pub fn use_solution_as_start(&mut self, index: usize) -> DomainResult<()> {
        let configuration = self.solution(index)?;
        self.set_start(configuration)
    }

    pub fn use_solution_as_goal(&mut self, index: usize) -> DomainResult<()> {
        let configuration = self.solution(index)?;
        self.set_goal(configuration)
    }

    // Planning

    pub fn build_configuration_space(&mut self) -> DomainResult<&AvailabilityGrid> {
        let grid = build_configuration_space(&self.arm, &self.obstacles);
        let free_cells = grid.free_count();
        self.availability = Some(grid);
        self.record(KinematicChainEvent::ConfigurationSpaceBuilt {
            chain_id: self.id.clone(),
            free_cells,
            timestamp: Utc::now(),
        })?;
        self.availability
            .as_ref()
            .ok_or(DomainError::ConfigurationSpaceMissing)
    }

    /// Search from the start to the goal configuration on the current grid.
    /// The found path (possibly empty) is loaded into the player, which stops.
    pub fn find_path(&mut self) -> DomainResult<&SearchOutcome> {
        let availability = self
            .availability
            .as_ref()
            .ok_or(DomainError::ConfigurationSpaceMissing)?;
        let outcome = find_path(self.start, self.goal, availability);

        let event = if outcome.found() {
            KinematicChainEvent::PathFound {
                chain_id: self.id.clone(),
                start: outcome.start,
                goal: outcome.goal,
                steps: outcome.path.step_count(),
                timestamp: Utc::now(),
            }
        } else {
            KinematicChainEvent::PathNotFound {
                chain_id: self.id.clone(),
                start: outcome.start,
                goal: outcome.goal,
                timestamp: Utc::now(),
            }
        };

        self.player.load(outcome.path.clone());
        self.last_search = Some(outcome);
        self.record(event)?;
        self.last_search
            .as_ref()
            .ok_or(DomainError::ConfigurationSpaceMissing)
    }

    // Playback

    /// Returns false when there is no path of at least two cells to play.
    pub fn play(&mut self) -> DomainResult<bool> {
        if !self.player.play() {
            return Ok(false);
        }
        self.record(KinematicChainEvent::PlaybackStarted {
            chain_id: self.id.clone(),
            timestamp: Utc::now(),
        })?;
        Ok(true)
    }

    pub fn stop(&mut self) -> DomainResult<()> {
        if !self.player.is_playing() {
            return Ok(());
        }
        self.player.stop();
        self.record(KinematicChainEvent::PlaybackStopped {
            chain_id: self.id.clone(),
            timestamp: Utc::now(),
        })
    }

    pub fn restart(&mut self) -> DomainResult<bool> {
        if !self.player.restart() {
            return Ok(false);
        }
        self.record(KinematicChainEvent::PlaybackStarted {
            chain_id: self.id.clone(),
            timestamp: Utc::now(),
        })?;
        Ok(true)
    }

    pub fn update(&mut self, delta: Duration) -> DomainResult<()> {
        let was_playing = self.player.is_playing();
        self.player.update(delta);
        if was_playing && !self.player.is_playing() {
            self.record(KinematicChainEvent::PlaybackFinished {
                chain_id: self.id.clone(),
                timestamp: Utc::now(),
            })?;
        }
        Ok(())
    }

    pub fn set_step_duration(&mut self, step_duration: Duration) -> DomainResult<()> {
        self.player.set_step_duration(step_duration)
    }

    /// The pose to render: the interpolated playback pose when a path is loaded,
    /// the start configuration otherwise.
    pub fn current_configuration(&self) -> Configuration {
        self.player.current_configuration().unwrap_or(self.start)
    }

    pub fn current_arm_pose(&self) -> ArmPose {
        self.arm.forward(self.current_configuration())
    }

    fn obstacle_mut(&mut self, id: &str) -> DomainResult<&mut Obstacle> {
        self.obstacles
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| DomainError::ObstacleNotFound { id: id.to_string() })
    }

    fn mark_stale(&mut self) {
        if self.availability.is_some() {
            self.availability_stale = true;
        }
    }
}

impl AggregateRoot for KinematicChain {
    type Event = KinematicChainEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        match event {
            KinematicChainEvent::ChainCreated {
                first_link_length,
                second_link_length,
                ..
            } => {
                self.arm = ArmModel::new(*first_link_length, *second_link_length)?;
            }
            KinematicChainEvent::LinkLengthsChanged {
                first_link_length,
                second_link_length,
                ..
            } => {
                self.arm = ArmModel::new(*first_link_length, *second_link_length)?;
                self.mark_stale();
            }
            KinematicChainEvent::TargetSolved {
                target, solutions, ..
            } => {
                self.target = Some(*target);
                self.solutions = solutions.clone();
            }
            KinematicChainEvent::TargetUnreachable { target, .. } => {
                self.target = Some(*target);
            }
            KinematicChainEvent::ObstacleAdded { obstacle, .. } => {
                self.obstacles.push(obstacle.clone());
                self.mark_stale();
            }
            KinematicChainEvent::ObstacleMoved {
                obstacle_id, delta, ..
            } => {
                self.obstacle_mut(obstacle_id)?.translate(*delta);
                self.mark_stale();
            }
            KinematicChainEvent::ObstacleResized {
                obstacle_id, size, ..
            } => {
                self.obstacle_mut(obstacle_id)?.resize(*size);
                self.mark_stale();
            }
            KinematicChainEvent::ObstacleRemoved { obstacle_id, .. } => {
                let index = self
                    .obstacles
                    .iter()
                    .position(|o| &o.id == obstacle_id)
                    .ok_or_else(|| DomainError::ObstacleNotFound {
                        id: obstacle_id.clone(),
                    })?;
                self.obstacles.swap_remove(index);
                self.selected_obstacle = None;
                self.mark_stale();
            }
            KinematicChainEvent::ObstacleSelected { obstacle_id, .. } => {
                self.selected_obstacle = obstacle_id.clone();
            }
            KinematicChainEvent::StartSet { configuration, .. } => {
                self.start = *configuration;
            }
            KinematicChainEvent::GoalSet { configuration, .. } => {
                self.goal = *configuration;
            }
            KinematicChainEvent::ConfigurationSpaceBuilt { .. } => {
                self.availability_stale = false;
            }
            KinematicChainEvent::PathFound { .. }
            | KinematicChainEvent::PathNotFound { .. }
            | KinematicChainEvent::PlaybackStarted { .. }
            | KinematicChainEvent::PlaybackStopped { .. }
            | KinematicChainEvent::PlaybackFinished { .. } => {}
        }

        self.version += 1;
        Ok(())
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn mark_events_as_committed(&mut self) {
        self.uncommitted_events.clear();
    }

    fn add_event(&mut self, event: Self::Event) {
        self.uncommitted_events.push(event);
    }
}
