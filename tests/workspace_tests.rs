use kinematic_chain::common::{AggregateRoot, DomainError, DomainEvent};
use kinematic_chain::domains::collision::Aabb;
use kinematic_chain::domains::kinematics::{ArmModel, Configuration, Position2D};
use kinematic_chain::domains::playback::PlaybackState;
use kinematic_chain::domains::workspace::*;
use std::time::Duration;

fn p(x: f64, y: f64) -> Position2D {
    Position2D::new(x, y)
}

fn new_chain() -> KinematicChain {
    let mut chain = KinematicChain::new(
        "chain-1".to_string(),
        ArmModel::default(),
        Duration::from_millis(10),
    )
    .unwrap();
    chain.mark_events_as_committed();
    chain
}

fn event_types(chain: &KinematicChain) -> Vec<&'static str> {
    chain.uncommitted_events().iter().map(|e| e.event_type()).collect()
}

#[cfg(test)]
mod creation_tests {
    use super::*;

    #[test]
    fn test_new_chain_records_creation() {
        let chain = KinematicChain::new(
            "chain-1".to_string(),
            ArmModel::new(0.4, 0.2).unwrap(),
            Duration::from_millis(10),
        )
        .unwrap();

        assert_eq!(chain.version(), 1);
        assert_eq!(chain.aggregate_id(), "chain-1");
        assert!((chain.arm().first_link_length() - 0.4).abs() < 1e-12);
        assert_eq!(event_types(&chain), vec!["ChainCreated"]);
        assert_eq!(chain.version() as usize, chain.uncommitted_events().len());
        assert!(chain.obstacles().is_empty());
        assert!(chain.availability().is_none());
        assert!(chain.path().is_empty());
        assert_eq!(chain.playback_state(), PlaybackState::Idle);
    }

    #[test]
    fn test_zero_step_duration_is_rejected() {
        let result = KinematicChain::new("c".to_string(), ArmModel::default(), Duration::ZERO);
        assert!(matches!(result, Err(DomainError::InvalidCommand { .. })));
    }

    #[test]
    fn test_events_serialize_to_json() {
        let mut chain = new_chain();
        chain.add_obstacle(Aabb::new(p(0.1, 0.1), p(0.2, 0.2))).unwrap();

        let json = serde_json::to_string(chain.uncommitted_events()).unwrap();
        assert!(json.contains("ObstacleAdded"));
        assert!(json.contains("chain-1"));
    }
}

#[cfg(test)]
mod obstacle_command_tests {
    use super::*;

    #[test]
    fn test_add_move_resize() {
        let mut chain = new_chain();
        let id = chain.add_obstacle(Aabb::new(p(0.0, 0.0), p(0.25, 0.25))).unwrap();

        chain.move_obstacle(&id, p(0.25, -0.5)).unwrap();
        assert_eq!(chain.obstacle(&id).unwrap().bounds, Aabb::new(p(0.25, -0.5), p(0.5, -0.25)));

        chain.resize_obstacle(&id, p(0.5, 0.125)).unwrap();
        assert_eq!(chain.obstacle(&id).unwrap().bounds, Aabb::new(p(0.25, -0.5), p(0.75, -0.375)));

        assert_eq!(chain.version(), 4);
        assert_eq!(
            event_types(&chain),
            vec!["ObstacleAdded", "ObstacleMoved", "ObstacleResized"]
        );
    }

    #[test]
    fn test_default_obstacle_bounds() {
        let mut chain = new_chain();
        let id = chain.add_default_obstacle().unwrap();
        assert_eq!(chain.obstacle(&id).unwrap().bounds, default_obstacle_bounds());
    }

    #[test]
    fn test_select_first_containing_obstacle() {
        let mut chain = new_chain();
        let first = chain.add_obstacle(Aabb::new(p(0.0, 0.0), p(1.0, 1.0))).unwrap();
        chain.add_obstacle(Aabb::new(p(0.5, 0.5), p(2.0, 2.0))).unwrap();

        assert_eq!(chain.select_obstacle_at(p(0.7, 0.7)).unwrap(), Some(first.clone()));
        assert_eq!(chain.selected_obstacle(), Some(first.as_str()));

        assert_eq!(chain.select_obstacle_at(p(5.0, 5.0)).unwrap(), None);
        assert_eq!(chain.selected_obstacle(), None);
    }

    #[test]
    fn test_remove_swaps_last_into_place_and_clears_selection() {
        let mut chain = new_chain();
        let a = chain.add_obstacle(Aabb::new(p(0.0, 0.0), p(0.1, 0.1))).unwrap();
        let b = chain.add_obstacle(Aabb::new(p(1.0, 1.0), p(1.1, 1.1))).unwrap();
        let c = chain.add_obstacle(Aabb::new(p(2.0, 2.0), p(2.1, 2.1))).unwrap();
        chain.select_obstacle_at(p(1.05, 1.05)).unwrap();

        chain.remove_obstacle(&a).unwrap();

        let ids: Vec<&str> = chain.obstacles().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec![c.as_str(), b.as_str()]);
        assert_eq!(chain.selected_obstacle(), None);
    }

    #[test]
    fn test_unknown_obstacle_is_rejected_without_events() {
        let mut chain = new_chain();

        for result in [
            chain.move_obstacle("missing", p(1.0, 0.0)),
            chain.resize_obstacle("missing", p(1.0, 1.0)),
            chain.remove_obstacle("missing"),
        ] {
            match result {
                Err(DomainError::ObstacleNotFound { id }) => assert_eq!(id, "missing"),
                other => panic!("Expected ObstacleNotFound, got {:?}", other),
            }
        }
        assert_eq!(chain.version(), 1);
        assert!(chain.uncommitted_events().is_empty());
    }
}

#[cfg(test)]
mod inverse_kinematics_tests {
    use super::*;

    #[test]
    fn test_reachable_target_replaces_solutions() {
        let mut chain = new_chain();
        let status = chain.solve_target(p(0.3, 0.3)).unwrap();

        assert_eq!(status, IkStatus::Solved(2));
        assert_eq!(chain.solutions().len(), 2);
        assert_eq!(chain.target(), Some(p(0.3, 0.3)));
    }

    #[test]
    fn test_unreachable_target_keeps_previous_solutions() {
        let mut chain = new_chain();
        chain.solve_target(p(0.3, 0.3)).unwrap();
        let previous = chain.solutions().to_vec();

        let status = chain.solve_target(p(5.0, 5.0)).unwrap();

        assert_eq!(status, IkStatus::Unreachable);
        assert_eq!(chain.solutions(), previous.as_slice());
        assert_eq!(chain.target(), Some(p(5.0, 5.0)));
        assert_eq!(event_types(&chain), vec!["TargetSolved", "TargetUnreachable"]);
    }

    #[test]
    fn test_solution_selects_start_and_goal() {
        let mut chain = new_chain();
        chain.solve_target(p(0.3, 0.3)).unwrap();

        chain.use_solution_as_start(0).unwrap();
        chain.use_solution_as_goal(1).unwrap();

        assert_eq!(chain.start(), chain.solutions()[0]);
        assert_eq!(chain.goal(), chain.solutions()[1]);
    }

    #[test]
    fn test_missing_solution_index() {
        let mut chain = new_chain();
        let result = chain.use_solution_as_start(0);
        assert!(matches!(result, Err(DomainError::SolutionNotFound { index: 0 })));
    }

    #[test]
    fn test_invalid_link_lengths_are_rejected() {
        let mut chain = new_chain();
        let result = chain.set_link_lengths(0.0, 0.3);

        assert!(matches!(result, Err(DomainError::InvalidArmGeometry { .. })));
        assert!((chain.arm().first_link_length() - 0.3).abs() < 1e-12);
    }
}

#[cfg(test)]
mod planning_tests {
    use super::*;

    #[test]
    fn test_find_path_requires_configuration_space() {
        let mut chain = new_chain();
        let result = chain.find_path();
        assert!(matches!(result, Err(DomainError::ConfigurationSpaceMissing)));
    }

    #[test]
    fn test_stale_flag_follows_edits_after_build() {
        let mut chain = new_chain();
        let id = chain.add_obstacle(Aabb::new(p(-1.0, -1.0), p(-0.8, -0.8))).unwrap();
        assert!(!chain.configuration_space_stale());

        chain.build_configuration_space().unwrap();
        assert!(!chain.configuration_space_stale());

        chain.move_obstacle(&id, p(0.1, 0.0)).unwrap();
        assert!(chain.configuration_space_stale());

        chain.build_configuration_space().unwrap();
        assert!(!chain.configuration_space_stale());

        chain.set_link_lengths(0.4, 0.2).unwrap();
        assert!(chain.configuration_space_stale());
    }

    #[test]
    fn test_path_is_loaded_and_played() {
        let mut chain = new_chain();
        chain.set_start(Configuration::from_degrees(0.0, 0.0)).unwrap();
        chain.set_goal(Configuration::from_degrees(3.0, 0.0)).unwrap();
        chain.build_configuration_space().unwrap();

        let steps = chain.find_path().unwrap().path.step_count();
        assert_eq!(steps, 3);
        assert_eq!(chain.path().len(), 4);
        assert!(chain.distances().is_some());

        assert!(chain.play().unwrap());
        assert_eq!(chain.playback_state(), PlaybackState::Playing);
        chain.update(Duration::from_secs(1)).unwrap();

        assert_eq!(chain.playback_state(), PlaybackState::Idle);
        assert_eq!(chain.playback_step(), 3);
        let current = chain.current_configuration().to_degrees();
        assert!((current.0 - 3.0).abs() < 1e-9);

        let types = event_types(&chain);
        assert!(types.ends_with(&["PathFound", "PlaybackStarted", "PlaybackFinished"]));
    }

    #[test]
    fn test_unreachable_goal_yields_empty_path() {
        let mut chain = new_chain();
        chain.add_obstacle(Aabb::new(p(-0.05, -0.05), p(0.05, 0.05))).unwrap();
        chain.set_goal(Configuration::from_degrees(90.0, 0.0)).unwrap();
        chain.build_configuration_space().unwrap();

        let outcome = chain.find_path().unwrap();
        assert!(!outcome.found());
        assert!(!chain.play().unwrap());
        assert_eq!(event_types(&chain).last(), Some(&"PathNotFound"));
    }

    #[test]
    fn test_stop_only_records_when_playing() {
        let mut chain = new_chain();
        chain.set_goal(Configuration::from_degrees(0.0, 10.0)).unwrap();
        chain.build_configuration_space().unwrap();
        chain.find_path().unwrap();
        chain.mark_events_as_committed();

        chain.stop().unwrap();
        assert!(chain.uncommitted_events().is_empty());

        chain.play().unwrap();
        chain.update(Duration::from_millis(25)).unwrap();
        chain.stop().unwrap();
        assert_eq!(event_types(&chain), vec!["PlaybackStarted", "PlaybackStopped"]);
        assert_eq!(chain.playback_step(), 2);

        assert!(chain.restart().unwrap());
        assert_eq!(chain.playback_step(), 0);
    }

    #[test]
    fn test_pose_defaults_to_start_without_path() {
        let mut chain = new_chain();
        chain.set_start(Configuration::from_degrees(90.0, 0.0)).unwrap();

        let pose = chain.current_arm_pose();
        assert!(pose.effector.distance(p(0.0, 0.6)) < 1e-9);
    }

    #[test]
    fn test_summary_reflects_state() {
        let mut chain = new_chain();
        chain.add_default_obstacle().unwrap();
        let summary = ChainSummary::from(&chain);

        assert_eq!(summary.chain_id, "chain-1");
        assert_eq!(summary.obstacle_count, 1);
        assert_eq!(summary.free_cells, None);
        assert_eq!(summary.path_steps, None);
        assert_eq!(summary.playback, PlaybackState::Idle);
    }
}
