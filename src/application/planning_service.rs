use crate::common::{AggregateRoot, ApplicationResult, DomainEvent, DomainResult};
use crate::config::Config;
use crate::domains::collision::Aabb;
use crate::domains::kinematics::{ArmPose, Configuration, Position2D};
use crate::domains::logger::DynLogger;
use crate::domains::path_planning::Path;
use crate::domains::workspace::{ChainSummary, IkStatus, KinematicChain, PlanningObserver};
use std::sync::Arc;
use std::time::Duration;

/// Entry point for the hosting application. Wraps one [`KinematicChain`],
/// logs every committed event and forwards planning results to observers.
pub struct PlanningService {
    chain: KinematicChain,
    logger: DynLogger,
    observers: Vec<Arc<dyn PlanningObserver>>,
}

impl PlanningService {
    pub fn new(chain: KinematicChain, logger: DynLogger) -> Self {
        let mut service = Self {
            chain,
            logger,
            observers: Vec::new(),
        };
        service.commit_events();
        service
    }

    /// Build a chain from configuration, including its initial obstacles.
    pub fn from_config(chain_id: &str, config: &Config, logger: DynLogger) -> ApplicationResult<Self> {
        config.validate()?;
        let chain = KinematicChain::new(chain_id.to_string(), config.arm_model()?, config.step_duration())?;
        let mut service = Self::new(chain, logger);
        for obstacle in &config.obstacles {
            service.add_obstacle(obstacle.bounds())?;
        }
        Ok(service)
    }

    pub fn add_observer(&mut self, observer: Arc<dyn PlanningObserver>) {
        self.observers.push(observer);
    }

    pub fn chain(&self) -> &KinematicChain {
        &self.chain
    }

    pub fn summary(&self) -> ChainSummary {
        ChainSummary::from(&self.chain)
    }

    pub fn set_link_lengths(&mut self, first: f64, second: f64) -> DomainResult<()> {
        let result = self.chain.set_link_lengths(first, second);
        self.finish(result)
    }

    pub fn solve_target(&mut self, target: Position2D) -> DomainResult<IkStatus> {
        let result = self.chain.solve_target(target);
        if let Ok(IkStatus::Unreachable) = result {
            self.logger.warn(&format!(
                "target ({:.3}, {:.3}) is out of reach; keeping {} previous solution(s)",
                target.x,
                target.y,
                self.chain.solutions().len()
            ));
        }
        self.finish(result)
    }

    pub fn add_obstacle(&mut self, bounds: Aabb) -> DomainResult<String> {
        let result = self.chain.add_obstacle(bounds);
        self.finish(result)
    }

    pub fn add_default_obstacle(&mut self) -> DomainResult<String> {
        let result = self.chain.add_default_obstacle();
        self.finish(result)
    }

    pub fn move_obstacle(&mut self, id: &str, delta: Position2D) -> DomainResult<()> {
        let result = self.chain.move_obstacle(id, delta);
        self.finish(result)
    }

    pub fn resize_obstacle(&mut self, id: &str, size: Position2D) -> DomainResult<()> {
        let result = self.chain.resize_obstacle(id, size);
        self.finish(result)
    }

    pub fn remove_obstacle(&mut self, id: &str) -> DomainResult<()> {
        let result = self.chain.remove_obstacle(id);
        self.finish(result)
    }

    pub fn select_obstacle_at(&mut self, point: Position2D) -> DomainResult<Option<String>> {
        let result = self.chain.select_obstacle_at(point);
        self.finish(result)
    }

    pub fn set_start(&mut self, configuration: Configuration) -> DomainResult<()> {
        let result = self.chain.set_start(configuration);
        self.finish(result)
    }

    pub fn set_goal(&mut self, configuration: Configuration) -> DomainResult<()> {
        let result = self.chain.set_goal(configuration);
        self.finish(result)
    }

    pub fn use_solution_as_start(&mut self, index: usize) -> DomainResult<()> {
        let result = self.chain.use_solution_as_start(index);
        self.finish(result)
    }

    pub fn use_solution_as_goal(&mut self, index: usize) -> DomainResult<()> {
        let result = self.chain.use_solution_as_goal(index);
        self.finish(result)
    }

    /// Returns the number of free cells in the new grid.
    pub fn build_configuration_space(&mut self) -> DomainResult<usize> {
        let free_cells = match self.chain.build_configuration_space() {
            Ok(grid) => {
                for observer in &self.observers {
                    observer.configuration_space_built(grid);
                }
                Ok(grid.free_count())
            }
            Err(e) => Err(e),
        };
        self.finish(free_cells)
    }

    /// Returns the found path, empty when the goal is unreachable.
    pub fn find_path(&mut self) -> DomainResult<Path> {
        let path = match self.chain.find_path() {
            Ok(outcome) => {
                for observer in &self.observers {
                    observer.search_completed(&outcome.distances, &outcome.path);
                }
                Ok(outcome.path.clone())
            }
            Err(e) => Err(e),
        };
        if let Ok(p) = &path {
            if p.is_empty() {
                self.logger.warn("no collision-free path between start and goal");
            }
        }
        self.finish(path)
    }

    pub fn play(&mut self) -> DomainResult<bool> {
        let result = self.chain.play();
        if let Ok(false) = result {
            self.logger.warn("nothing to play: path has fewer than two configurations");
        }
        self.finish(result)
    }

    pub fn stop(&mut self) -> DomainResult<()> {
        let result = self.chain.stop();
        self.finish(result)
    }

    pub fn restart(&mut self) -> DomainResult<bool> {
        let result = self.chain.restart();
        self.finish(result)
    }

    pub fn update(&mut self, delta: Duration) -> DomainResult<()> {
        let result = self.chain.update(delta);
        self.finish(result)
    }

    pub fn current_configuration(&self) -> Configuration {
        self.chain.current_configuration()
    }

    pub fn current_arm_pose(&self) -> ArmPose {
        self.chain.current_arm_pose()
    }

    fn finish<T>(&mut self, result: DomainResult<T>) -> DomainResult<T> {
        if let Err(e) = &result {
            self.logger.error(&format!("command rejected: {}", e));
        }
        self.commit_events();
        result
    }

    fn commit_events(&mut self) {
        for event in self.chain.uncommitted_events() {
            self.logger.info(&format!(
                "[{}] {} at {}",
                event.aggregate_id(),
                event.event_type(),
                event.occurred_at().to_rfc3339()
            ));
        }
        self.chain.mark_events_as_committed();
    }
}
