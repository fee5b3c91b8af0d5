use super::interpolation::{mix_angle_degrees, normalize_degrees};
use crate::common::{DomainError, DomainResult};
use crate::domains::kinematics::Configuration;
use crate::domains::path_planning::Path;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    Idle,
    Playing,
}

/// Animates a discrete path one cell per `step_duration`.
#[derive(Debug, Clone)]
pub struct PathPlayer {
    path: Path,
    state: PlaybackState,
    step: usize,
    accumulated: Duration,
    step_duration: Duration,
}

impl PathPlayer {
    pub fn new(step_duration: Duration) -> DomainResult<Self> {
        validate_step_duration(step_duration)?;
        Ok(Self {
            path: Path::empty(),
            state: PlaybackState::Idle,
            step: 0,
            accumulated: Duration::ZERO,
            step_duration,
        })
    }

    /// Replace the path and rewind. Playback stops.
    pub fn load(&mut self, path: Path) {
        self.path = path;
        self.state = PlaybackState::Idle;
        self.rewind();
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_duration(&self) -> Duration {
        self.step_duration
    }

    pub fn set_step_duration(&mut self, step_duration: Duration) -> DomainResult<()> {
        validate_step_duration(step_duration)?;
        self.step_duration = step_duration;
        Ok(())
    }

    /// Start playing. Ignored for paths with fewer than two cells. A finished
    /// playback starts over from the first cell.
    pub fn play(&mut self) -> bool {
        if self.path.len() < 2 {
            return false;
        }
        if self.step >= self.last_index() {
            self.rewind();
        }
        self.state = PlaybackState::Playing;
        true
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Idle;
    }

    pub fn restart(&mut self) -> bool {
        self.rewind();
        self.play()
    }

    pub fn update(&mut self, delta: Duration) {
        if self.state != PlaybackState::Playing {
            return;
        }

        self.accumulated += delta;
        while self.accumulated > self.step_duration {
            self.accumulated -= self.step_duration;
            self.step += 1;
            if self.step >= self.last_index() {
                self.step = self.last_index();
                self.accumulated = Duration::ZERO;
                self.state = PlaybackState::Idle;
                break;
            }
        }
    }

    /// Interpolated pose in degrees, each angle normalized into `[0, 360)`.
    pub fn current_degrees(&self) -> Option<(f64, f64)> {
        let from = self.path.get(self.step)?;
        let Some(to) = self.path.get(self.step + 1) else {
            return Some((from.alpha as f64, from.beta as f64));
        };

        let t = (self.accumulated.as_secs_f64() / self.step_duration.as_secs_f64()).min(1.0);
        let alpha = mix_angle_degrees(from.alpha as f64, to.alpha as f64, t);
        let beta = mix_angle_degrees(from.beta as f64, to.beta as f64, t);
        Some((normalize_degrees(alpha), normalize_degrees(beta)))
    }

    pub fn current_configuration(&self) -> Option<Configuration> {
        self.current_degrees()
            .map(|(alpha, beta)| Configuration::from_degrees(alpha, beta))
    }

    fn last_index(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    fn rewind(&mut self) {
        self.step = 0;
        self.accumulated = Duration::ZERO;
    }
}

fn validate_step_duration(step_duration: Duration) -> DomainResult<()> {
    if step_duration.is_zero() {
        return Err(DomainError::InvalidCommand {
            reason: "step duration must be positive".to_string(),
        });
    }
    Ok(())
}
