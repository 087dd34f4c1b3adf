//! Reveal - One-shot entrance animation
//!
//! A block starts hidden, begins animating the first time it intersects the
//! viewport and settles once its staggered timeline has run. Nothing moves it
//! back: later intersections are ignored.

use std::time::{Duration, Instant};

use crate::constants::{REVEAL_DURATION_MS, REVEAL_RISE_PX, REVEAL_STAGGER_MS};

/// Phase of a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet scrolled into view
    Hidden,
    /// Timeline running since `started_at`
    Animating { started_at: Instant },
    /// Fully visible; terminal
    Settled,
}

/// Stagger and fade timings shared by every step of a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimeline {
    /// Offset between the start of consecutive steps
    stagger: Duration,
    /// Fade-and-rise time of a single step
    duration: Duration,
    /// Number of staggered steps, at least one
    steps: usize,
}

impl RevealTimeline {
    pub fn new(steps: usize) -> Self {
        Self {
            stagger: Duration::from_millis(REVEAL_STAGGER_MS),
            duration: Duration::from_millis(REVEAL_DURATION_MS),
            steps: steps.max(1),
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Time from the first step starting to the last step finishing
    pub fn total(&self) -> Duration {
        self.stagger * self.last_step() as u32 + self.duration
    }

    fn last_step(&self) -> usize {
        self.steps.saturating_sub(1)
    }

    /// Eased progress of `step` after `elapsed`, in `[0, 1]`
    pub fn progress(&self, step: usize, elapsed: Duration) -> f32 {
        let delay = self.stagger * step.min(self.last_step()) as u32;
        let Some(local) = elapsed.checked_sub(delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (local.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(t)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Per-step visual state for one rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct RevealFrame {
    progress: Vec<f32>,
}

impl RevealFrame {
    /// Everything fully shown
    pub fn settled(steps: usize) -> Self {
        Self {
            progress: vec![1.0; steps.max(1)],
        }
    }

    /// Progress of `step`; steps past the end follow the last one
    pub fn progress(&self, step: usize) -> f32 {
        self.progress
            .get(step)
            .or(self.progress.last())
            .copied()
            .unwrap_or(1.0)
    }

    /// Opacity of `step`
    pub fn opacity(&self, step: usize) -> f32 {
        self.progress(step)
    }

    /// Downward offset of `step` in pixels
    pub fn rise(&self, step: usize) -> f32 {
        REVEAL_RISE_PX * (1.0 - self.progress(step))
    }
}

/// Revealable parts of a section, in reveal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSlot {
    Eyebrow,
    Title,
    Description,
    Actions,
    Body,
}

/// Which optional slots a section fills. The title is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotPresence {
    pub eyebrow: bool,
    pub description: bool,
    pub actions: bool,
    pub body: bool,
}

impl SlotPresence {
    /// Present slots in reveal order
    pub fn slots(&self) -> Vec<SectionSlot> {
        present([
            (SectionSlot::Eyebrow, self.eyebrow),
            (SectionSlot::Title, true),
            (SectionSlot::Description, self.description),
            (SectionSlot::Actions, self.actions),
            (SectionSlot::Body, self.body),
        ])
    }

    /// Stagger step of `slot`, if present
    pub fn step(&self, slot: SectionSlot) -> Option<usize> {
        self.slots().iter().position(|s| *s == slot)
    }

    /// Number of staggered steps
    pub fn steps(&self) -> usize {
        self.slots().len()
    }

    /// Timeline with one step per present slot
    pub fn timeline(&self) -> RevealTimeline {
        RevealTimeline::new(self.steps())
    }
}

/// Revealable parts of the hero, in reveal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroSlot {
    Pills,
    Headline,
    Lead,
    Actions,
    Trust,
    Visual,
}

/// Which optional hero slots are filled. Headline, lead and visual always
/// are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeroPresence {
    pub pills: bool,
    pub actions: bool,
    pub trust: bool,
}

impl HeroPresence {
    pub fn slots(&self) -> Vec<HeroSlot> {
        present([
            (HeroSlot::Pills, self.pills),
            (HeroSlot::Headline, true),
            (HeroSlot::Lead, true),
            (HeroSlot::Actions, self.actions),
            (HeroSlot::Trust, self.trust),
            (HeroSlot::Visual, true),
        ])
    }

    /// Stagger step of `slot`, if present
    pub fn step(&self, slot: HeroSlot) -> Option<usize> {
        self.slots().iter().position(|s| *s == slot)
    }

    pub fn timeline(&self) -> RevealTimeline {
        RevealTimeline::new(self.slots().len())
    }
}

fn present<S: Copy, const N: usize>(slots: [(S, bool); N]) -> Vec<S> {
    slots
        .into_iter()
        .filter_map(|(slot, present)| present.then_some(slot))
        .collect()
}

/// One-shot reveal state machine
#[derive(Debug, Clone)]
pub struct Reveal {
    phase: RevealPhase,
    timeline: RevealTimeline,
}

impl Reveal {
    pub fn new(timeline: RevealTimeline) -> Self {
        Self {
            phase: RevealPhase::Hidden,
            timeline,
        }
    }

    /// A reveal that never animates
    pub fn settled(timeline: RevealTimeline) -> Self {
        Self {
            phase: RevealPhase::Settled,
            timeline,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn timeline(&self) -> &RevealTimeline {
        &self.timeline
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, RevealPhase::Animating { .. })
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == RevealPhase::Hidden
    }

    /// Viewport intersection signal. Returns `true` only when this call
    /// started the animation.
    pub fn on_intersection(&mut self, now: Instant) -> bool {
        match self.phase {
            RevealPhase::Hidden => {
                self.phase = RevealPhase::Animating { started_at: now };
                true
            }
            RevealPhase::Animating { .. } | RevealPhase::Settled => false,
        }
    }

    /// Advance the clock. Returns `true` only when this call settled the
    /// reveal.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            RevealPhase::Animating { started_at }
                if now.saturating_duration_since(started_at) >= self.timeline.total() =>
            {
                self.phase = RevealPhase::Settled;
                true
            }
            _ => false,
        }
    }

    /// Eased progress of `step` at `now`
    pub fn progress(&self, step: usize, now: Instant) -> f32 {
        match self.phase {
            RevealPhase::Hidden => 0.0,
            RevealPhase::Animating { started_at } => self
                .timeline
                .progress(step, now.saturating_duration_since(started_at)),
            RevealPhase::Settled => 1.0,
        }
    }

    /// Snapshot of every step at `now`
    pub fn frame(&self, now: Instant) -> RevealFrame {
        let steps = self.timeline.last_step() + 1;
        let progress = match self.phase {
            RevealPhase::Hidden => vec![0.0; steps],
            RevealPhase::Animating { .. } => {
                (0..steps).map(|step| self.progress(step, now)).collect()
            }
            RevealPhase::Settled => vec![1.0; steps],
        };
        RevealFrame { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> RevealTimeline {
        RevealTimeline {
            stagger: Duration::from_millis(100),
            duration: Duration::from_millis(500),
            steps: 4,
        }
    }

    #[test]
    fn second_intersection_does_not_restart() {
        let start = Instant::now();
        let mut reveal = Reveal::new(timeline());

        assert!(reveal.on_intersection(start));
        assert!(!reveal.on_intersection(start + Duration::from_millis(50)));
        assert_eq!(reveal.phase(), RevealPhase::Animating { started_at: start });
    }

    #[test]
    fn settles_exactly_once_after_total_duration() {
        let start = Instant::now();
        let mut reveal = Reveal::new(timeline());
        reveal.on_intersection(start);

        assert!(!reveal.tick(start + Duration::from_millis(799)));
        assert!(reveal.tick(start + Duration::from_millis(800)));
        assert_eq!(reveal.phase(), RevealPhase::Settled);

        assert!(!reveal.tick(start + Duration::from_secs(5)));
        assert!(!reveal.on_intersection(start + Duration::from_secs(6)));
        assert_eq!(reveal.phase(), RevealPhase::Settled);
    }

    #[test]
    fn hidden_reveal_ignores_ticks() {
        let mut reveal = Reveal::new(timeline());
        assert!(!reveal.tick(Instant::now() + Duration::from_secs(10)));
        assert!(reveal.is_hidden());
    }

    #[test]
    fn steps_cascade() {
        let start = Instant::now();
        let mut reveal = Reveal::new(timeline());
        reveal.on_intersection(start);

        let frame = reveal.frame(start + Duration::from_millis(150));
        assert!(frame.progress(0) > frame.progress(1));
        assert_eq!(frame.progress(2), 0.0);
        assert_eq!(frame.progress(3), 0.0);

        assert_eq!(
            reveal.progress(0, start + Duration::from_millis(150)),
            frame.progress(0)
        );

        let done = reveal.frame(start + Duration::from_millis(800));
        assert_eq!(done.progress(3), 1.0);
        assert_eq!(done.rise(3), 0.0);
    }

    #[test]
    fn hidden_frame_is_transparent_and_lowered() {
        let reveal = Reveal::new(timeline());
        let frame = reveal.frame(Instant::now());
        assert_eq!(frame.opacity(0), 0.0);
        assert_eq!(frame.rise(0), REVEAL_RISE_PX);
        // Steps past the end follow the last one
        assert_eq!(frame.opacity(42), 0.0);
    }

    #[test]
    fn slots_are_numbered_in_reveal_order() {
        let full = SlotPresence {
            eyebrow: true,
            description: true,
            actions: true,
            body: true,
        };
        assert_eq!(full.steps(), 5);
        assert_eq!(full.step(SectionSlot::Eyebrow), Some(0));
        assert_eq!(full.step(SectionSlot::Body), Some(4));

        let bare = SlotPresence {
            body: true,
            ..Default::default()
        };
        assert_eq!(bare.slots(), vec![SectionSlot::Title, SectionSlot::Body]);
        assert_eq!(bare.step(SectionSlot::Title), Some(0));
        assert_eq!(bare.step(SectionSlot::Eyebrow), None);
    }

    #[test]
    fn hero_steps_skip_missing_slots() {
        let bare = HeroPresence::default();
        assert_eq!(bare.step(HeroSlot::Headline), Some(0));
        assert_eq!(bare.step(HeroSlot::Trust), None);
        assert_eq!(bare.step(HeroSlot::Visual), Some(2));
        assert_eq!(bare.timeline().steps(), 3);

        let full = HeroPresence {
            pills: true,
            actions: true,
            trust: true,
        };
        assert_eq!(full.step(HeroSlot::Visual), Some(5));
    }

    #[test]
    fn total_covers_last_step() {
        assert_eq!(timeline().total(), Duration::from_millis(800));
        assert_eq!(RevealTimeline::new(0).steps(), 1);
    }

    #[test]
    fn stepless_timeline_behaves_like_a_single_step() {
        let empty = RevealTimeline {
            steps: 0,
            ..timeline()
        };
        assert_eq!(empty.total(), Duration::from_millis(500));
        assert_eq!(empty.progress(3, Duration::from_millis(500)), 1.0);
        assert_eq!(Reveal::new(empty).frame(Instant::now()).opacity(0), 0.0);
    }
}
