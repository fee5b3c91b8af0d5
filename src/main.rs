use kinematic_chain::adapters::outbound::init_combined_logger;
use kinematic_chain::application::PlanningService;
use kinematic_chain::domains::kinematics::Position2D;
use kinematic_chain::domains::workspace::IkStatus;
use kinematic_chain::Config;
use std::error::Error;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Simulated frame time for the playback loop.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn Error>> {
    let config_path =
        std::env::var("KINEMATIC_CONFIG").unwrap_or_else(|_| "kinematic-chain.toml".to_string());
    let config = Config::load(&config_path)?;

    // Not `fmt::init()`: that also claims the global `log` logger fast_log needs.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting kinematic chain planner");
    info!(
        first_link = config.arm.first_link_length,
        second_link = config.arm.second_link_length,
        obstacles = config.obstacles.len(),
        "configuration loaded from {}",
        config_path
    );

    let logger = init_combined_logger(config.logging.file.as_deref(), config.log_level());
    let mut service = PlanningService::from_config("main-chain", &config, logger)?;

    let target = config
        .scenario
        .target
        .map(Position2D::from)
        .unwrap_or_else(|| Position2D::new(0.3, 0.3));

    match service.solve_target(target)? {
        IkStatus::Solved(count) => info!(count, "target reachable"),
        IkStatus::Unreachable => {
            warn!("target ({}, {}) is unreachable, nothing to plan", target.x, target.y);
            return Ok(());
        }
    }

    let solutions = service.chain().solutions().len();
    service.use_solution_as_start(0)?;
    service.use_solution_as_goal(solutions - 1)?;

    let free_cells = service.build_configuration_space()?;
    info!(free_cells, "configuration space ready");

    let path = service.find_path()?;
    if path.is_empty() {
        error!("no path between the two elbow configurations");
        return Ok(());
    }
    info!(steps = path.step_count(), "path found");

    if service.play()? {
        let mut frames = 0u64;
        while service.chain().playback_state() == kinematic_chain::PlaybackState::Playing {
            service.update(FRAME)?;
            frames += 1;
            if frames % 60 == 0 {
                let pose = service.current_arm_pose();
                info!(
                    step = service.chain().playback_step(),
                    x = pose.effector.x,
                    y = pose.effector.y,
                    "playback"
                );
            }
        }
        info!(frames, "playback finished");
    }

    info!(summary = ?service.summary(), "done");
    Ok(())
}
