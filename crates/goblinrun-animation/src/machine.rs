//! The locomotion state machine

use goblinrun_assets::ClipName;
use goblinrun_core::InputSnapshot;
use tracing::debug;

use crate::set::AnimationSet;
use crate::states::StateInstance;

/// Owns the single active locomotion state and executes transitions.
///
/// Any state may request any other state; re-requesting the active state is
/// a guarded no-op so an already-playing animation is never restarted. A
/// transition runs synchronously to completion: the outgoing state's exit
/// finishes before the incoming state's enter begins.
pub struct LocomotionStateMachine {
    current: Option<StateInstance>,
}

impl LocomotionStateMachine {
    /// Create a machine with no active state (the pre-load window)
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Name of the active state, if one has been entered yet
    pub fn current(&self) -> Option<ClipName> {
        self.current.as_ref().map(StateInstance::name)
    }

    /// Transition to `name`.
    ///
    /// No-op when `name` is already active. Otherwise the current state
    /// exits, the new state is constructed bound to the clip set, and its
    /// enter runs with the outgoing state's name (or `None` on the first
    /// ever activation).
    pub fn set_state(&mut self, set: &mut AnimationSet, name: ClipName) {
        if let Some(current) = &self.current {
            if current.name() == name {
                return;
            }
        }

        let previous = self.current.take();
        let previous_name = previous.as_ref().map(StateInstance::name);
        if let Some(previous) = previous {
            previous.exit(set);
        }

        let next = StateInstance::activate(name, set);
        next.enter(set, previous_name);
        debug!(from = ?previous_name.map(ClipName::label), to = name.label(), "locomotion transition");
        self.current = Some(next);
    }

    /// Evaluate the active state's transition rules for this frame.
    ///
    /// No-op while no state is active. This is the sole source of
    /// input-driven transition requests.
    pub fn update(&mut self, set: &mut AnimationSet, _dt: f32, input: &InputSnapshot) {
        let Some(active) = self.current() else {
            return;
        };
        self.run_transitions(set, active, input);
    }

    /// Drive one-shot clip completion: when the active state's subscribed
    /// clip has finished naturally, fall back to idle. Call after the clip
    /// set has been advanced for the frame.
    pub fn poll_finished(&mut self, set: &mut AnimationSet) {
        let token = match &self.current {
            Some(StateInstance::Dance { finished }) => *finished,
            _ => return,
        };
        if set.consume_finished(token) {
            self.set_state(set, ClipName::Idle);
        }
    }
}

impl Default for LocomotionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use goblinrun_assets::{AssetStore, ClipManifest};

    use super::*;
    use crate::clip::LoopMode;

    fn machine_and_set() -> (LocomotionStateMachine, AnimationSet) {
        let mut store = AssetStore::new();
        store.load_manifest(&ClipManifest::standard()).unwrap();
        let mut set = AnimationSet::from_store(&store).unwrap();
        let mut machine = LocomotionStateMachine::new();
        machine.set_state(&mut set, ClipName::Idle);
        (machine, set)
    }

    fn input(build: impl FnOnce(&mut InputSnapshot)) -> InputSnapshot {
        let mut snapshot = InputSnapshot::empty();
        build(&mut snapshot);
        snapshot
    }

    #[test]
    fn test_update_without_state_is_noop() {
        let mut store = AssetStore::new();
        store.load_manifest(&ClipManifest::standard()).unwrap();
        let mut set = AnimationSet::from_store(&store).unwrap();
        let mut machine = LocomotionStateMachine::new();

        machine.update(&mut set, 0.016, &input(|i| i.forward = true));
        assert_eq!(machine.current(), None);
    }

    #[test]
    fn test_set_state_is_idempotent() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Dance);
        assert_eq!(set.subscription_count(), 1);

        // second request for the active state must not re-enter
        machine.set_state(&mut set, ClipName::Dance);
        assert_eq!(machine.current(), Some(ClipName::Dance));
        assert_eq!(set.subscription_count(), 1);
    }

    #[test]
    fn test_reentry_does_not_restart_clip() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Walk);
        set.clip_mut(ClipName::Walk).time = 0.7;

        machine.set_state(&mut set, ClipName::Walk);
        assert_eq!(set.clip(ClipName::Walk).time, 0.7);
    }

    #[test]
    fn test_exit_releases_subscription_before_next_enter() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Dance);
        assert_eq!(set.subscription_count(), 1);

        machine.set_state(&mut set, ClipName::Walk);
        assert_eq!(machine.current(), Some(ClipName::Walk));
        assert_eq!(set.subscription_count(), 0);
    }

    #[test]
    fn test_walk_run_phase_continuity() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Walk);
        set.clip_mut(ClipName::Walk).time = 0.5;

        machine.set_state(&mut set, ClipName::Run);
        let walk = set.clip(ClipName::Walk);
        let run = set.clip(ClipName::Run);
        assert!((run.time - 0.5 * run.duration / walk.duration).abs() < 1e-5);
        assert!((run.phase() - walk.phase()).abs() < 1e-5);

        // and back the other way
        machine.set_state(&mut set, ClipName::Walk);
        let walk = set.clip(ClipName::Walk);
        let run = set.clip(ClipName::Run);
        assert!((walk.phase() - run.phase()).abs() < 1e-5);
    }

    #[test]
    fn test_walk_enters_at_fixed_offset_from_idle() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Walk);
        assert!((set.clip(ClipName::Walk).time - 0.2).abs() < 1e-6);
        assert_eq!(set.clip(ClipName::Walk).time_scale, 1.0);
    }

    #[test]
    fn test_dance_is_one_shot_and_returns_to_idle_once() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Dance);
        assert_eq!(set.clip(ClipName::Dance).loop_mode, LoopMode::Once);

        let duration = set.clip(ClipName::Dance).duration;
        set.advance(duration + 0.2);
        machine.poll_finished(&mut set);
        assert_eq!(machine.current(), Some(ClipName::Idle));
        assert_eq!(set.subscription_count(), 0);

        // a later poll must not transition again
        set.advance(1.0);
        machine.poll_finished(&mut set);
        assert_eq!(machine.current(), Some(ClipName::Idle));
    }

    #[test]
    fn test_idle_forward_requests_walk() {
        let (mut machine, mut set) = machine_and_set();
        machine.update(&mut set, 0.016, &input(|i| i.forward = true));
        assert_eq!(machine.current(), Some(ClipName::Walk));
    }

    #[test]
    fn test_idle_backward_requests_walk_back() {
        let (mut machine, mut set) = machine_and_set();
        machine.update(&mut set, 0.016, &input(|i| i.backward = true));
        assert_eq!(machine.current(), Some(ClipName::WalkBack));
    }

    #[test]
    fn test_idle_jump_requires_ground_contact() {
        let (mut machine, mut set) = machine_and_set();
        machine.update(&mut set, 0.016, &input(|i| i.jump = true));
        assert_eq!(machine.current(), Some(ClipName::Idle));

        machine.update(
            &mut set,
            0.016,
            &input(|i| {
                i.jump = true;
                i.grounded = true;
            }),
        );
        assert_eq!(machine.current(), Some(ClipName::Jump));
    }

    #[test]
    fn test_walk_sprint_requests_run() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Walk);
        machine.update(
            &mut set,
            0.016,
            &input(|i| {
                i.forward = true;
                i.sprint = true;
            }),
        );
        assert_eq!(machine.current(), Some(ClipName::Run));
    }

    #[test]
    fn test_walk_without_input_settles_to_idle() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Walk);
        machine.update(&mut set, 0.016, &InputSnapshot::empty());
        assert_eq!(machine.current(), Some(ClipName::Idle));
    }

    #[test]
    fn test_run_releasing_sprint_requests_walk() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Walk);
        machine.set_state(&mut set, ClipName::Run);
        set.clip_mut(ClipName::Run).time = 0.3;

        machine.update(&mut set, 0.016, &input(|i| i.forward = true));
        assert_eq!(machine.current(), Some(ClipName::Walk));

        // phase carried over from the run clip
        let walk = set.clip(ClipName::Walk);
        let run = set.clip(ClipName::Run);
        assert!((walk.time - 0.3 * walk.duration / run.duration).abs() < 1e-5);
    }

    #[test]
    fn test_run_holding_sprint_stays() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Walk);
        machine.set_state(&mut set, ClipName::Run);
        machine.update(
            &mut set,
            0.016,
            &input(|i| {
                i.forward = true;
                i.sprint = true;
            }),
        );
        assert_eq!(machine.current(), Some(ClipName::Run));
    }

    #[test]
    fn test_jump_with_movement_settles_on_walk() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Jump);
        machine.update(
            &mut set,
            0.016,
            &input(|i| {
                i.forward = true;
                i.sprint = true;
            }),
        );
        assert_eq!(machine.current(), Some(ClipName::Walk));
    }

    #[test]
    fn test_jump_without_movement_settles_on_idle() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Jump);
        machine.update(&mut set, 0.016, &InputSnapshot::empty());
        assert_eq!(machine.current(), Some(ClipName::Idle));
    }

    #[test]
    fn test_walk_back_always_settles_on_idle() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::WalkBack);
        machine.update(&mut set, 0.016, &input(|i| i.forward = true));
        assert_eq!(machine.current(), Some(ClipName::Idle));
    }

    #[test]
    fn test_dance_movement_requests_walk() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Dance);
        machine.update(&mut set, 0.016, &input(|i| i.backward = true));
        assert_eq!(machine.current(), Some(ClipName::Walk));
        assert_eq!(set.subscription_count(), 0);
    }

    #[test]
    fn test_dance_self_retrigger_is_blocked() {
        let (mut machine, mut set) = machine_and_set();
        machine.set_state(&mut set, ClipName::Dance);
        set.clip_mut(ClipName::Dance).time = 1.0;

        machine.update(&mut set, 0.016, &input(|i| i.dance = true));
        assert_eq!(machine.current(), Some(ClipName::Dance));
        assert_eq!(set.clip(ClipName::Dance).time, 1.0);
        assert_eq!(set.subscription_count(), 1);
    }
}
