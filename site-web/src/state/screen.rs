//! Screen transition state
//!
//! Three mutually exclusive screens driven by a pure state machine
//! ([`ScreenMachine`]) plus a thin Leptos context that runs the timed fade
//! sequences. A transition is fade-out, display swap, then fade-in; while one
//! is in flight every further trigger is a no-op. The intro auto-advance
//! timer carries a generation number so a manual advance invalidates it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::utils::constants::{
    FADE_SETTLE_DELAY_MS, INTRO_AUTO_ADVANCE_MS, INTRO_FADE_OUT_MS, SCREEN_FADE_IN_MS,
    SCREEN_SWAP_MS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Main,
    Floppy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    FadingOut { to: Screen },
    FadingIn,
}

/// What a screen element should render as right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayState {
    pub displayed: bool,
    pub opaque: bool,
    /// CSS `transition` duration to carry while in this state.
    pub fade_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenMachine {
    current: Screen,
    phase: Phase,
    intro_generation: u32,
}

impl ScreenMachine {
    pub fn new() -> Self {
        Self {
            current: Screen::Intro,
            phase: Phase::Idle,
            intro_generation: 0,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    fn edge_allowed(from: Screen, to: Screen) -> bool {
        matches!(
            (from, to),
            (Screen::Intro, Screen::Main)
                | (Screen::Main, Screen::Floppy)
                | (Screen::Floppy, Screen::Main)
        )
    }

    fn fade_out_ms(from: Screen) -> u32 {
        match from {
            Screen::Intro => INTRO_FADE_OUT_MS,
            _ => SCREEN_SWAP_MS,
        }
    }

    /// Arm the intro auto-advance timer; returns its generation token.
    pub fn arm_intro_timer(&mut self) -> u32 {
        self.intro_generation += 1;
        self.intro_generation
    }

    /// Whether an auto-advance timer armed with `generation` is still valid
    /// when it fires. Stale generations (any transition started since) and
    /// fires outside an idle Intro screen are ignored.
    pub fn intro_timer_due(&self, generation: u32) -> bool {
        generation == self.intro_generation
            && self.current == Screen::Intro
            && self.phase == Phase::Idle
    }

    /// Start a transition. Refused while another one is in flight or when the
    /// edge is not one of Intro→Main, Main→Floppy, Floppy→Main.
    pub fn begin(&mut self, to: Screen) -> bool {
        if self.phase != Phase::Idle || !Self::edge_allowed(self.current, to) {
            return false;
        }
        // Any transition start invalidates a pending auto-advance timer.
        self.intro_generation += 1;
        self.phase = Phase::FadingOut { to };
        true
    }

    /// Swap the displayed screen once the fade-out has run.
    pub fn swap(&mut self) {
        if let Phase::FadingOut { to } = self.phase {
            self.current = to;
            self.phase = Phase::FadingIn;
        }
    }

    /// Finish the transition: the new screen fades up to full opacity.
    pub fn settle(&mut self) {
        if self.phase == Phase::FadingIn {
            self.phase = Phase::Idle;
        }
    }

    /// Render state for one screen. Keeps the invariant that at most one
    /// screen is displayed in every phase.
    pub fn display_state(&self, screen: Screen) -> DisplayState {
        if screen != self.current {
            return DisplayState {
                displayed: false,
                opaque: false,
                fade_ms: 0,
            };
        }
        match self.phase {
            Phase::Idle => DisplayState {
                displayed: true,
                opaque: true,
                fade_ms: SCREEN_FADE_IN_MS,
            },
            Phase::FadingOut { .. } => DisplayState {
                displayed: true,
                opaque: false,
                fade_ms: Self::fade_out_ms(self.current),
            },
            Phase::FadingIn => DisplayState {
                displayed: true,
                opaque: false,
                fade_ms: SCREEN_FADE_IN_MS,
            },
        }
    }
}

impl Default for ScreenMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Global screen context
#[derive(Clone, Copy)]
pub struct ScreenContext {
    pub machine: RwSignal<ScreenMachine>,
}

impl ScreenContext {
    pub fn new() -> Self {
        Self {
            machine: RwSignal::new(ScreenMachine::new()),
        }
    }

    /// Reactive check for the active screen.
    pub fn is_current(&self, screen: Screen) -> bool {
        self.machine.with(|m| m.current() == screen)
    }

    /// Inline style for a screen element, derived from the machine.
    pub fn style_for(&self, screen: Screen) -> String {
        let state = self.machine.with(|m| m.display_state(screen));
        if !state.displayed {
            return "display: none;".to_string();
        }
        format!(
            "display: block; opacity: {}; transition: opacity {}ms ease-in-out;",
            if state.opaque { "1" } else { "0" },
            state.fade_ms
        )
    }

    /// Kick off a timed transition. Returns false when refused.
    pub fn start(&self, to: Screen) -> bool {
        let machine = self.machine;
        let from = machine.with_untracked(|m| m.current());
        let began = machine.try_update(|m| m.begin(to)).unwrap_or(false);
        if !began {
            return false;
        }
        log::info!("screen transition {:?} -> {:?}", from, to);

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(ScreenMachine::fade_out_ms(from)).await;
            let _ = machine.try_update(|m| m.swap());
            // One rendered frame at opacity 0 before fading the new screen in.
            TimeoutFuture::new(FADE_SETTLE_DELAY_MS).await;
            let _ = machine.try_update(|m| m.settle());
        });
        true
    }

    /// Arm the intro auto-advance timer; a manual advance in the meantime
    /// makes the fire a no-op.
    pub fn arm_intro_auto_advance(&self) {
        let ctx = *self;
        let Some(generation) = self.machine.try_update(|m| m.arm_intro_timer()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(INTRO_AUTO_ADVANCE_MS).await;
            if ctx.machine.with_untracked(|m| m.intro_timer_due(generation)) {
                ctx.start(Screen::Main);
            }
        });
    }
}

pub fn provide_screen_context() -> ScreenContext {
    let context = ScreenContext::new();
    provide_context(context);
    context
}

pub fn use_screen_context() -> ScreenContext {
    expect_context::<ScreenContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn displayed_screens(machine: &ScreenMachine) -> Vec<Screen> {
        [Screen::Intro, Screen::Main, Screen::Floppy]
            .into_iter()
            .filter(|s| machine.display_state(*s).displayed)
            .collect()
    }

    #[test]
    fn test_at_most_one_screen_displayed_through_a_full_transition() {
        let mut machine = ScreenMachine::new();
        assert_eq!(displayed_screens(&machine), vec![Screen::Intro]);

        assert!(machine.begin(Screen::Main));
        assert_eq!(displayed_screens(&machine), vec![Screen::Intro]);

        machine.swap();
        assert_eq!(displayed_screens(&machine), vec![Screen::Main]);

        machine.settle();
        assert_eq!(displayed_screens(&machine), vec![Screen::Main]);
        assert!(!machine.is_transitioning());
    }

    #[test]
    fn test_double_trigger_is_a_no_op_while_in_flight() {
        let mut machine = ScreenMachine::new();
        assert!(machine.begin(Screen::Main));
        assert!(!machine.begin(Screen::Main));
        machine.swap();
        assert!(!machine.begin(Screen::Floppy));
        machine.settle();
        assert!(machine.begin(Screen::Floppy));
    }

    #[test]
    fn test_stale_auto_advance_timer_is_ignored_after_manual_advance() {
        let mut machine = ScreenMachine::new();
        let generation = machine.arm_intro_timer();
        assert!(machine.intro_timer_due(generation));

        // Manual click advances first; the armed timer must not fire again.
        assert!(machine.begin(Screen::Main));
        assert!(!machine.intro_timer_due(generation));
        machine.swap();
        machine.settle();
        assert!(!machine.intro_timer_due(generation));
    }

    #[test]
    fn test_auto_advance_only_fires_on_idle_intro() {
        let mut machine = ScreenMachine::new();
        let generation = machine.arm_intro_timer();
        assert!(machine.begin(Screen::Main));
        machine.swap();
        machine.settle();
        // Re-arming from a non-intro screen never becomes due either.
        let late = machine.arm_intro_timer();
        assert!(!machine.intro_timer_due(generation));
        assert!(!machine.intro_timer_due(late));
    }

    #[test]
    fn test_only_the_three_screen_edges_are_allowed() {
        let mut machine = ScreenMachine::new();
        assert!(!machine.begin(Screen::Floppy)); // Intro -> Floppy is not an edge
        assert!(!machine.begin(Screen::Intro)); // self-transition refused
        assert!(machine.begin(Screen::Main));
        machine.swap();
        machine.settle();
        assert!(!machine.begin(Screen::Intro)); // Main -> Intro is not an edge

        assert!(machine.begin(Screen::Floppy));
        machine.swap();
        machine.settle();
        assert!(machine.begin(Screen::Main)); // Floppy -> Main is
    }

    #[test]
    fn test_fade_durations_follow_the_edge() {
        let mut machine = ScreenMachine::new();
        machine.begin(Screen::Main);
        assert_eq!(
            machine.display_state(Screen::Intro).fade_ms,
            INTRO_FADE_OUT_MS
        );
        machine.swap();
        assert_eq!(
            machine.display_state(Screen::Main).fade_ms,
            SCREEN_FADE_IN_MS
        );
        machine.settle();

        machine.begin(Screen::Floppy);
        assert_eq!(machine.display_state(Screen::Main).fade_ms, SCREEN_SWAP_MS);
    }
}
