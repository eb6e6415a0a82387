//! The six locomotion states: enter/exit behavior and transition rules

use goblinrun_assets::ClipName;
use goblinrun_core::InputSnapshot;

use crate::clip::LoopMode;
use crate::machine::LocomotionStateMachine;
use crate::set::{AnimationSet, FinishToken};

/// The active state held by the machine. Dance carries its completion
/// subscription; every other state is stateless beyond its tag.
pub(crate) enum StateInstance {
    Idle,
    Walk,
    Run,
    Jump,
    WalkBack,
    Dance { finished: FinishToken },
}

/// Cross-fade length when blending into a state's clip
fn blend_duration(name: ClipName) -> f32 {
    match name {
        ClipName::Idle | ClipName::Walk | ClipName::Run => 0.5,
        ClipName::Jump => 0.1,
        ClipName::Dance => 0.2,
        ClipName::WalkBack => 0.0,
    }
}

/// Playback offset a clip restarts from when entered without phase carry-over
fn entry_offset(name: ClipName) -> f32 {
    match name {
        ClipName::Walk => 0.2,
        _ => 0.0,
    }
}

/// Walk and run share a stride cycle; crossing between them keeps the
/// foot-strike phase by rescaling playback time to the new clip's length.
fn carries_phase(entering: ClipName, leaving: ClipName) -> bool {
    matches!(
        (entering, leaving),
        (ClipName::Walk, ClipName::Run) | (ClipName::Run, ClipName::Walk)
    )
}

impl StateInstance {
    /// Construct the state for `name`, taking out any subscriptions it needs
    pub(crate) fn activate(name: ClipName, set: &mut AnimationSet) -> Self {
        match name {
            ClipName::Idle => StateInstance::Idle,
            ClipName::Walk => StateInstance::Walk,
            ClipName::Run => StateInstance::Run,
            ClipName::Jump => StateInstance::Jump,
            ClipName::WalkBack => StateInstance::WalkBack,
            ClipName::Dance => StateInstance::Dance {
                finished: set.subscribe_finished(ClipName::Dance),
            },
        }
    }

    /// Name of the clip this state plays
    pub(crate) fn name(&self) -> ClipName {
        match self {
            StateInstance::Idle => ClipName::Idle,
            StateInstance::Walk => ClipName::Walk,
            StateInstance::Run => ClipName::Run,
            StateInstance::Jump => ClipName::Jump,
            StateInstance::WalkBack => ClipName::WalkBack,
            StateInstance::Dance { .. } => ClipName::Dance,
        }
    }

    /// Begin playing this state's clip, blending from the outgoing state's
    /// clip when there is one. First-ever activation plays with no blend.
    pub(crate) fn enter(&self, set: &mut AnimationSet, prev: Option<ClipName>) {
        let name = self.name();
        let Some(prev) = prev else {
            set.clip_mut(name).play();
            return;
        };

        if let StateInstance::Dance { .. } = self {
            let clip = set.clip_mut(ClipName::Dance);
            clip.reset();
            clip.loop_mode = LoopMode::Once;
            clip.time_scale = 1.0;
            clip.play();
        } else {
            let prev_time = set.clip(prev).time;
            let prev_duration = set.clip(prev).duration;
            let clip = set.clip_mut(name);
            clip.time_scale = 1.0;
            clip.play();
            clip.time = if carries_phase(name, prev) {
                prev_time * clip.duration / prev_duration
            } else {
                entry_offset(name)
            };
        }

        set.begin_fade(prev, name, blend_duration(name));
    }

    /// Release anything taken at activation. Only dance holds a subscription.
    pub(crate) fn exit(&self, set: &mut AnimationSet) {
        if let StateInstance::Dance { finished } = self {
            set.release(*finished);
        }
    }
}

impl LocomotionStateMachine {
    /// Transition rules for the active state, evaluated once per frame.
    pub(crate) fn run_transitions(
        &mut self,
        set: &mut AnimationSet,
        active: ClipName,
        input: &InputSnapshot,
    ) {
        match active {
            ClipName::Idle => {
                if input.forward {
                    self.set_state(set, ClipName::Walk);
                }
                if input.backward {
                    self.set_state(set, ClipName::WalkBack);
                }
                if input.dance {
                    self.set_state(set, ClipName::Dance);
                }
                if input.jump && input.grounded {
                    self.set_state(set, ClipName::Jump);
                }
            }
            ClipName::Walk => {
                if input.jump && input.grounded {
                    self.set_state(set, ClipName::Jump);
                }
                if input.forward {
                    if input.sprint {
                        self.set_state(set, ClipName::Run);
                    }
                    return;
                } else if input.backward {
                    self.set_state(set, ClipName::WalkBack);
                    return;
                }
                self.set_state(set, ClipName::Idle);
            }
            ClipName::Run => {
                if input.jump && input.grounded {
                    self.set_state(set, ClipName::Jump);
                }
                if input.moving() {
                    if !input.sprint {
                        self.set_state(set, ClipName::Walk);
                    }
                    return;
                }
                self.set_state(set, ClipName::Idle);
            }
            ClipName::Jump => {
                if input.moving() {
                    // movement out of a jump settles on walk whether or not
                    // sprint is held; run is only reachable from walk
                    self.set_state(set, ClipName::Walk);
                    return;
                }
                self.set_state(set, ClipName::Idle);
            }
            ClipName::WalkBack => {
                // TODO: confirm whether walking back should honor forward and
                // jump input; shipped behavior always settles back to idle
                self.set_state(set, ClipName::Idle);
            }
            ClipName::Dance => {
                if input.moving() {
                    self.set_state(set, ClipName::Walk);
                } else if input.dance {
                    self.set_state(set, ClipName::Dance);
                } else if input.jump && input.grounded {
                    self.set_state(set, ClipName::Jump);
                }
            }
        }
    }
}
