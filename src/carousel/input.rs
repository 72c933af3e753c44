// SPDX-License-Identifier: MPL-2.0
//! Keyboard navigation with a grace period before autoplay resumes.

use super::scheduler::{Scheduler, TaskHandle, TaskKind};
use crate::domain::carousel::{Direction, ResumePolicy};
use std::time::Instant;

/// The left/right navigation key pair the carousel listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    /// Previous slide.
    Left,
    /// Next slide.
    Right,
}

/// An attached keyboard listener.
///
/// Exists only while the controller is mounted; dropping it is the
/// detach. Holding the binding is what makes key events count.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyBinding {
    previous: NavigationKey,
    next: NavigationKey,
}

impl KeyBinding {
    fn arrows() -> Self {
        Self {
            previous: NavigationKey::Left,
            next: NavigationKey::Right,
        }
    }

    /// Maps a key of the bound pair to its direction.
    #[must_use]
    pub fn direction(&self, key: NavigationKey) -> Option<Direction> {
        if key == self.previous {
            Some(Direction::Backward)
        } else if key == self.next {
            Some(Direction::Forward)
        } else {
            None
        }
    }
}

/// Keyboard side of the controller.
#[derive(Debug)]
pub struct InputController {
    binding: Option<KeyBinding>,
    policy: ResumePolicy,
    pending_resume: Option<TaskHandle>,
}

impl InputController {
    #[must_use]
    pub fn new(policy: ResumePolicy) -> Self {
        Self {
            binding: None,
            policy,
            pending_resume: None,
        }
    }

    /// Creates the key binding. Attaching twice keeps the first binding.
    pub fn attach(&mut self) {
        if self.binding.is_none() {
            self.binding = Some(KeyBinding::arrows());
        }
    }

    /// Drops the key binding. Safe to call when already detached.
    pub fn detach(&mut self) {
        self.binding = None;
        self.pending_resume = None;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    /// Direction requested by `key`, or `None` while detached.
    #[must_use]
    pub fn direction_for(&self, key: NavigationKey) -> Option<Direction> {
        self.binding.as_ref()?.direction(key)
    }

    /// Schedules the end of the grace period at `due`.
    ///
    /// Under [`ResumePolicy::Restart`] the previously pending resume is
    /// cancelled first; under [`ResumePolicy::Independent`] it is left to fire.
    pub fn schedule_resume(&mut self, scheduler: &mut Scheduler, due: Instant) -> TaskHandle {
        if self.policy == ResumePolicy::Restart {
            if let Some(previous) = self.pending_resume.take() {
                scheduler.cancel(previous);
            }
        }
        let handle = scheduler.schedule_once(TaskKind::ResumeAutoplay, due);
        self.pending_resume = Some(handle);
        handle
    }

    /// Forgets `handle` once it has fired.
    pub fn resume_fired(&mut self, handle: TaskHandle) {
        if self.pending_resume == Some(handle) {
            self.pending_resume = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn detached_controller_ignores_keys() {
        let input = InputController::new(ResumePolicy::Independent);
        assert_eq!(input.direction_for(NavigationKey::Right), None);
    }

    #[test]
    fn arrows_map_to_directions() {
        let mut input = InputController::new(ResumePolicy::Independent);
        input.attach();
        assert_eq!(
            input.direction_for(NavigationKey::Left),
            Some(Direction::Backward)
        );
        assert_eq!(
            input.direction_for(NavigationKey::Right),
            Some(Direction::Forward)
        );
    }

    #[test]
    fn detach_is_idempotent() {
        let mut input = InputController::new(ResumePolicy::Independent);
        input.attach();
        input.detach();
        input.detach();
        assert!(!input.is_attached());
    }

    #[test]
    fn independent_policy_keeps_every_resume() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let mut input = InputController::new(ResumePolicy::Independent);

        input.schedule_resume(&mut scheduler, t0 + Duration::from_millis(100));
        input.schedule_resume(&mut scheduler, t0 + Duration::from_millis(200));
        input.schedule_resume(&mut scheduler, t0 + Duration::from_millis(300));

        assert_eq!(scheduler.pending(TaskKind::ResumeAutoplay), 3);
    }

    #[test]
    fn restart_policy_keeps_only_latest_resume() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let mut input = InputController::new(ResumePolicy::Restart);

        input.schedule_resume(&mut scheduler, t0 + Duration::from_millis(100));
        let last = input.schedule_resume(&mut scheduler, t0 + Duration::from_millis(200));

        assert_eq!(scheduler.pending(TaskKind::ResumeAutoplay), 1);
        assert!(scheduler.is_scheduled(last));
    }
}
