//! The character's shared clip set: playback, cross-fades, completion

use goblinrun_assets::{AssetStore, ClipName};
use tracing::debug;

use crate::clip::AnimationClip;
use crate::error::AnimationError;

/// Token identifying one completion subscription on a clip.
///
/// Returned when a state subscribes to a clip's natural completion and
/// released when the state exits, so a listener can never outlive the state
/// that registered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishToken(u64);

#[derive(Debug)]
struct Subscription {
    token: FinishToken,
    clip: ClipName,
    fired: bool,
}

#[derive(Debug, Clone, Copy)]
struct Crossfade {
    from: ClipName,
    to: ClipName,
    duration: f32,
    elapsed: f32,
}

/// Fixed-size set of the six locomotion clips plus blend state.
///
/// Owns all mutable clip data for one character. Built from the asset store
/// once loading completes; a missing clip is a configuration error surfaced
/// here rather than at state dispatch.
pub struct AnimationSet {
    clips: [AnimationClip; ClipName::COUNT],
    fade: Option<Crossfade>,
    subscriptions: Vec<Subscription>,
    next_token: u64,
}

impl AnimationSet {
    /// Build the clip set from the store, validating that every locomotion
    /// clip has been loaded.
    pub fn from_store(store: &AssetStore) -> Result<Self, AnimationError> {
        let mut durations = [0.0_f32; ClipName::COUNT];
        for name in ClipName::ALL {
            let asset = store
                .get(name)
                .ok_or(AnimationError::MissingClip(name))?;
            durations[name.index()] = asset.duration;
        }

        Ok(Self {
            clips: durations.map(AnimationClip::new),
            fade: None,
            subscriptions: Vec::new(),
            next_token: 0,
        })
    }

    /// Borrow a clip
    pub fn clip(&self, name: ClipName) -> &AnimationClip {
        &self.clips[name.index()]
    }

    /// Mutably borrow a clip
    pub fn clip_mut(&mut self, name: ClipName) -> &mut AnimationClip {
        &mut self.clips[name.index()]
    }

    /// Start a timed cross-fade from one clip to another.
    ///
    /// A non-positive duration switches instantly. Starting a new fade
    /// replaces any fade still in flight.
    pub fn begin_fade(&mut self, from: ClipName, to: ClipName, duration: f32) {
        if duration <= 0.0 {
            self.clip_mut(to).weight = 1.0;
            let outgoing = self.clip_mut(from);
            outgoing.weight = 0.0;
            outgoing.enabled = false;
            self.fade = None;
            return;
        }

        self.clip_mut(to).weight = 0.0;
        self.fade = Some(Crossfade {
            from,
            to,
            duration,
            elapsed: 0.0,
        });
    }

    /// Subscribe to a clip's natural completion. The returned token must be
    /// released by whoever took it.
    pub fn subscribe_finished(&mut self, clip: ClipName) -> FinishToken {
        let token = FinishToken(self.next_token);
        self.next_token += 1;
        self.subscriptions.push(Subscription {
            token,
            clip,
            fired: false,
        });
        debug!(clip = %clip, "completion subscription registered");
        token
    }

    /// Drop a completion subscription, fired or not
    pub fn release(&mut self, token: FinishToken) {
        self.subscriptions.retain(|sub| sub.token != token);
    }

    /// Take a pending completion for `token`, clearing it. Returns `false`
    /// if the subscription has not fired (or no longer exists).
    pub fn consume_finished(&mut self, token: FinishToken) -> bool {
        match self.subscriptions.iter_mut().find(|sub| sub.token == token) {
            Some(sub) if sub.fired => {
                sub.fired = false;
                true
            }
            _ => false,
        }
    }

    /// Number of live completion subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Advance all enabled clips and any active cross-fade by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if let Some(mut fade) = self.fade.take() {
            fade.elapsed += dt;
            let t = (fade.elapsed / fade.duration).min(1.0);
            self.clip_mut(fade.to).weight = t;
            self.clip_mut(fade.from).weight = 1.0 - t;
            if t >= 1.0 {
                self.clip_mut(fade.from).enabled = false;
            } else {
                self.fade = Some(fade);
            }
        }

        for (index, clip) in self.clips.iter_mut().enumerate() {
            if clip.advance(dt) {
                for sub in &mut self.subscriptions {
                    if sub.clip.index() == index {
                        sub.fired = true;
                    }
                }
            }
        }
    }
}
