//! Sidebar auto-collapse state machine.
//!
//! The machine is pure and synchronous: the hook feeds it events plus a
//! millisecond clock reading, and it answers with the timer operations to
//! apply. Every timer lives outside the machine (see `super::Timers`), so a
//! whole activity cycle can be driven in tests with a fake clock.
//!
//! One timer chain owns the cycle: activity is debounced, the debounce
//! expiry resets everything and arms the warning + collapse pair, the
//! warning expiry starts the countdown interval, and the collapse expiry
//! performs the auto-collapse. Raw activity is ignored while the warning is
//! showing; `Extend` is the only dismissal.

/// Quiet interval that coalesces bursts of activity into one reset.
pub const DEBOUNCE_MS: u64 = 100;
/// Delay before the idle cycle restarts after a manual toggle.
pub const TOGGLE_GRACE_MS: u64 = 100;
/// Delay before an auto-collapsed sidebar re-collapses after hover leaves.
pub const LEAVE_DELAY_MS: u64 = 300;
/// Countdown refresh rate while the warning is showing.
pub const COUNTDOWN_TICK_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Active,
    Warning,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSize {
    Sm,
    Md,
    Lg,
    Xl,
}

impl ScreenSize {
    pub fn from_width(width: f64) -> Self {
        if width < 768.0 {
            Self::Sm
        } else if width < 1024.0 {
            Self::Md
        } else if width < 1280.0 {
            Self::Lg
        } else {
            Self::Xl
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IdleConfig {
    /// Milliseconds of silence until the sidebar auto-collapses.
    pub inactivity_timeout_ms: u64,
    /// Milliseconds before the timeout at which the warning begins.
    pub warning_threshold_ms: u64,
    /// Viewport width below which the sidebar is forced collapsed.
    pub collapse_breakpoint: f64,
    pub default_collapsed: bool,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout_ms: 120_000,
            warning_threshold_ms: 30_000,
            collapse_breakpoint: 1280.0,
            default_collapsed: false,
        }
    }
}

/// Everything that can happen to the tracker, DOM-sourced or timer-sourced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdleEvent {
    /// A raw activity signal (pointer, key, scroll, touch, click).
    Activity,
    DebounceElapsed,
    WarningElapsed,
    CollapseElapsed,
    CountdownTick,
    Toggle,
    GraceElapsed,
    /// Explicit "stay active" from the warning UI; accepted in any status.
    Extend,
    HoverEnter,
    HoverLeave,
    LeaveDelayElapsed,
    Resize { width: f64 },
}

/// Timer work the caller must perform, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOp {
    /// (Re)arm the debounce timer for [`DEBOUNCE_MS`].
    ArmDebounce,
    /// Arm the warning timer for the given delay.
    ArmWarning(u64),
    /// Arm the collapse timer for the given delay.
    ArmCollapse(u64),
    /// Start the countdown interval at [`COUNTDOWN_TICK_MS`].
    StartCountdown,
    StopCountdown,
    /// Arm the post-toggle grace timer for [`TOGGLE_GRACE_MS`].
    ArmGrace,
    /// Arm the hover-leave re-collapse timer for [`LEAVE_DELAY_MS`].
    ArmLeaveDelay,
    CancelLeaveDelay,
    /// Cancel every pending timer and stop the countdown interval.
    CancelAll,
}

#[derive(Debug, Default)]
pub struct Transition {
    pub timers: Vec<TimerOp>,
    /// True exactly when the idle timeout fired and the owner's
    /// `on_inactivity_timeout` callback must be invoked.
    pub notify_timeout: bool,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }

    fn timers(timers: Vec<TimerOp>) -> Self {
        Self {
            timers,
            notify_timeout: false,
        }
    }
}

#[derive(Debug)]
pub struct SidebarIdleMachine {
    cfg: IdleConfig,
    width: f64,
    screen: ScreenSize,
    status: ActivityStatus,
    is_collapsed: bool,
    is_auto_collapsed: bool,
    show_indicator: bool,
    countdown_secs: u32,
    /// Wall-clock deadline of the running warning, if any. The countdown is
    /// recomputed from this on every tick so timer drift cannot skew it.
    warning_deadline_ms: Option<u64>,
    last_activity_ms: u64,
}

impl SidebarIdleMachine {
    /// The width is assumed desktop-sized until the first resize report;
    /// the hook dispatches one on mount before any activity.
    pub fn new(cfg: IdleConfig, now_ms: u64) -> Self {
        let width = cfg.collapse_breakpoint.max(1280.0);
        Self {
            cfg,
            width,
            screen: ScreenSize::from_width(width),
            status: ActivityStatus::Active,
            is_collapsed: cfg.default_collapsed,
            is_auto_collapsed: false,
            show_indicator: false,
            countdown_secs: 0,
            warning_deadline_ms: None,
            last_activity_ms: now_ms,
        }
    }

    pub fn status(&self) -> ActivityStatus {
        self.status
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    pub fn is_auto_collapsed(&self) -> bool {
        self.is_auto_collapsed
    }

    pub fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    /// Seconds remaining in the warning phase; 0 outside it.
    pub fn time_until_collapse(&self) -> u32 {
        self.countdown_secs
    }

    pub fn show_indicator(&self) -> bool {
        self.show_indicator
    }

    /// Wall-clock instant of the last accepted activity reset.
    pub fn last_activity_ms(&self) -> u64 {
        self.last_activity_ms
    }

    pub fn on_event(&mut self, event: IdleEvent, now_ms: u64) -> Transition {
        match event {
            IdleEvent::Activity => {
                if self.status == ActivityStatus::Warning {
                    // Dismissal must go through Extend.
                    Transition::none()
                } else {
                    Transition::timers(vec![TimerOp::ArmDebounce])
                }
            }
            IdleEvent::Extend => Transition::timers(vec![TimerOp::ArmDebounce]),
            IdleEvent::DebounceElapsed | IdleEvent::GraceElapsed => self.full_reset(now_ms),
            IdleEvent::WarningElapsed => self.enter_warning(now_ms),
            IdleEvent::CountdownTick => self.tick_countdown(now_ms),
            IdleEvent::CollapseElapsed => self.auto_collapse(),
            IdleEvent::Toggle => self.toggle(),
            IdleEvent::HoverEnter => self.hover_enter(),
            IdleEvent::HoverLeave => self.hover_leave(),
            IdleEvent::LeaveDelayElapsed => self.leave_delay_elapsed(),
            IdleEvent::Resize { width } => self.resize(width),
        }
    }

    /// The single authoritative reset: cancel everything, return to Active,
    /// and arm the warning/collapse pair when the sidebar is eligible.
    fn full_reset(&mut self, now_ms: u64) -> Transition {
        self.last_activity_ms = now_ms;
        self.status = ActivityStatus::Active;
        self.show_indicator = false;
        self.countdown_secs = 0;
        self.warning_deadline_ms = None;

        let mut timers = vec![TimerOp::CancelAll];
        if self.width >= self.cfg.collapse_breakpoint && !self.is_collapsed {
            let warning_delay = self
                .cfg
                .inactivity_timeout_ms
                .saturating_sub(self.cfg.warning_threshold_ms);
            if warning_delay > 0 {
                timers.push(TimerOp::ArmWarning(warning_delay));
            }
            timers.push(TimerOp::ArmCollapse(self.cfg.inactivity_timeout_ms));
        }
        Transition::timers(timers)
    }

    fn enter_warning(&mut self, now_ms: u64) -> Transition {
        if self.status != ActivityStatus::Active || self.is_collapsed {
            // Stale timer fire.
            return Transition::none();
        }
        self.status = ActivityStatus::Warning;
        self.show_indicator = true;
        self.warning_deadline_ms = Some(now_ms + self.cfg.warning_threshold_ms);
        self.countdown_secs = self.cfg.warning_threshold_ms.div_ceil(1000) as u32;
        Transition::timers(vec![TimerOp::StartCountdown])
    }

    fn tick_countdown(&mut self, now_ms: u64) -> Transition {
        let Some(deadline) = self.warning_deadline_ms else {
            return Transition::none();
        };
        if self.status != ActivityStatus::Warning {
            return Transition::none();
        }
        let remaining = deadline.saturating_sub(now_ms);
        self.countdown_secs = remaining.div_ceil(1000) as u32;
        if remaining == 0 {
            // The collapse timer fires the actual transition.
            Transition::timers(vec![TimerOp::StopCountdown])
        } else {
            Transition::none()
        }
    }

    fn auto_collapse(&mut self) -> Transition {
        if self.is_collapsed {
            return Transition::none();
        }
        self.is_collapsed = true;
        self.is_auto_collapsed = true;
        self.status = ActivityStatus::Inactive;
        self.show_indicator = false;
        self.countdown_secs = 0;
        self.warning_deadline_ms = None;
        Transition {
            timers: vec![TimerOp::CancelAll],
            notify_timeout: true,
        }
    }

    fn toggle(&mut self) -> Transition {
        self.is_collapsed = !self.is_collapsed;
        self.is_auto_collapsed = false;
        self.status = ActivityStatus::Active;
        self.show_indicator = false;
        self.countdown_secs = 0;
        self.warning_deadline_ms = None;
        Transition::timers(vec![TimerOp::CancelAll, TimerOp::ArmGrace])
    }

    fn hover_enter(&mut self) -> Transition {
        if !self.is_auto_collapsed || self.width < self.cfg.collapse_breakpoint {
            return Transition::none();
        }
        // Temporary expansion; the auto flag stays so leave re-collapses.
        // Re-entering while a leave delay is pending cancels it, so quick
        // exits don't flicker the sidebar shut.
        self.is_collapsed = false;
        Transition::timers(vec![TimerOp::CancelLeaveDelay])
    }

    fn hover_leave(&mut self) -> Transition {
        if self.is_auto_collapsed
            && !self.is_collapsed
            && self.width >= self.cfg.collapse_breakpoint
        {
            Transition::timers(vec![TimerOp::ArmLeaveDelay])
        } else {
            Transition::none()
        }
    }

    fn leave_delay_elapsed(&mut self) -> Transition {
        // Re-check: the conditions must still hold at expiry.
        if self.is_auto_collapsed
            && !self.is_collapsed
            && self.width >= self.cfg.collapse_breakpoint
        {
            self.is_collapsed = true;
        }
        Transition::none()
    }

    fn resize(&mut self, width: f64) -> Transition {
        self.width = width;
        self.screen = ScreenSize::from_width(width);

        if width < self.cfg.collapse_breakpoint {
            if !self.is_collapsed {
                self.is_collapsed = true;
                self.is_auto_collapsed = true;
                self.status = ActivityStatus::Inactive;
                self.show_indicator = false;
                self.countdown_secs = 0;
                self.warning_deadline_ms = None;
                return Transition::timers(vec![TimerOp::CancelAll]);
            }
        } else if self.is_auto_collapsed && self.is_collapsed {
            // Only an auto-induced collapse reverses; manual collapse sticks.
            self.is_collapsed = false;
            self.is_auto_collapsed = false;
            self.status = ActivityStatus::Active;
            self.show_indicator = false;
        }
        Transition::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives the machine the way the hook does: timer ops become scheduled
    /// deadlines against a fake clock, and `advance` fires whatever comes
    /// due, in order.
    struct Harness {
        machine: SidebarIdleMachine,
        now: u64,
        debounce: Option<u64>,
        warning: Option<u64>,
        collapse: Option<u64>,
        grace: Option<u64>,
        leave: Option<u64>,
        next_tick: Option<u64>,
        timeouts_fired: u32,
    }

    impl Harness {
        fn new(cfg: IdleConfig) -> Self {
            let machine = SidebarIdleMachine::new(cfg, 0);
            let mut h = Self {
                machine,
                now: 0,
                debounce: None,
                warning: None,
                collapse: None,
                grace: None,
                leave: None,
                next_tick: None,
                timeouts_fired: 0,
            };
            // Mount sequence: one resize report, one initial activity.
            h.send(IdleEvent::Resize { width: 1600.0 });
            h.send(IdleEvent::Activity);
            h.advance(DEBOUNCE_MS);
            h
        }

        fn send(&mut self, event: IdleEvent) {
            let transition = self.machine.on_event(event, self.now);
            for op in transition.timers {
                match op {
                    TimerOp::ArmDebounce => self.debounce = Some(self.now + DEBOUNCE_MS),
                    TimerOp::ArmWarning(delay) => self.warning = Some(self.now + delay),
                    TimerOp::ArmCollapse(delay) => self.collapse = Some(self.now + delay),
                    TimerOp::StartCountdown => self.next_tick = Some(self.now + COUNTDOWN_TICK_MS),
                    TimerOp::StopCountdown => self.next_tick = None,
                    TimerOp::ArmGrace => self.grace = Some(self.now + TOGGLE_GRACE_MS),
                    TimerOp::ArmLeaveDelay => self.leave = Some(self.now + LEAVE_DELAY_MS),
                    TimerOp::CancelLeaveDelay => self.leave = None,
                    TimerOp::CancelAll => {
                        self.debounce = None;
                        self.warning = None;
                        self.collapse = None;
                        self.grace = None;
                        self.leave = None;
                        self.next_tick = None;
                    }
                }
            }
            if transition.notify_timeout {
                self.timeouts_fired += 1;
            }
        }

        fn due(&self) -> Option<(u64, IdleEvent)> {
            let candidates = [
                (self.debounce, IdleEvent::DebounceElapsed),
                (self.warning, IdleEvent::WarningElapsed),
                (self.collapse, IdleEvent::CollapseElapsed),
                (self.grace, IdleEvent::GraceElapsed),
                (self.leave, IdleEvent::LeaveDelayElapsed),
                (self.next_tick, IdleEvent::CountdownTick),
            ];
            candidates
                .into_iter()
                .filter_map(|(at, ev)| at.map(|at| (at, ev)))
                .min_by_key(|(at, _)| *at)
        }

        fn advance(&mut self, ms: u64) {
            let end = self.now + ms;
            while let Some((at, event)) = self.due() {
                if at > end {
                    break;
                }
                self.now = at;
                match event {
                    IdleEvent::DebounceElapsed => self.debounce = None,
                    IdleEvent::WarningElapsed => self.warning = None,
                    IdleEvent::CollapseElapsed => self.collapse = None,
                    IdleEvent::GraceElapsed => self.grace = None,
                    IdleEvent::LeaveDelayElapsed => self.leave = None,
                    IdleEvent::CountdownTick => {
                        self.next_tick = Some(at + COUNTDOWN_TICK_MS);
                    }
                    _ => unreachable!(),
                }
                self.send(event);
            }
            self.now = end;
        }

        fn status(&self) -> ActivityStatus {
            self.machine.status()
        }
    }

    fn test_config() -> IdleConfig {
        IdleConfig {
            inactivity_timeout_ms: 120_000,
            warning_threshold_ms: 30_000,
            collapse_breakpoint: 1280.0,
            default_collapsed: false,
        }
    }

    #[test]
    fn screen_size_thresholds() {
        assert_eq!(ScreenSize::from_width(320.0), ScreenSize::Sm);
        assert_eq!(ScreenSize::from_width(767.9), ScreenSize::Sm);
        assert_eq!(ScreenSize::from_width(768.0), ScreenSize::Md);
        assert_eq!(ScreenSize::from_width(1023.9), ScreenSize::Md);
        assert_eq!(ScreenSize::from_width(1024.0), ScreenSize::Lg);
        assert_eq!(ScreenSize::from_width(1279.9), ScreenSize::Lg);
        assert_eq!(ScreenSize::from_width(1280.0), ScreenSize::Xl);
    }

    #[test]
    fn full_cycle_warning_then_collapse() {
        let mut h = Harness::new(test_config());
        assert_eq!(h.status(), ActivityStatus::Active);

        // 90s of silence brings the warning up with a 30s countdown.
        h.advance(89_999);
        assert_eq!(h.status(), ActivityStatus::Active);
        h.advance(1);
        assert_eq!(h.status(), ActivityStatus::Warning);
        assert_eq!(h.machine.time_until_collapse(), 30);
        assert!(h.machine.show_indicator());

        // 30s more and the sidebar auto-collapses, firing the callback once.
        h.advance(30_000);
        assert_eq!(h.status(), ActivityStatus::Inactive);
        assert!(h.machine.is_collapsed());
        assert!(h.machine.is_auto_collapsed());
        assert_eq!(h.machine.time_until_collapse(), 0);
        assert_eq!(h.timeouts_fired, 1);

        // Nothing further fires.
        h.advance(300_000);
        assert_eq!(h.timeouts_fired, 1);
    }

    #[test]
    fn countdown_is_ceiling_of_remaining_and_monotone() {
        let mut h = Harness::new(test_config());
        h.advance(90_000);
        assert_eq!(h.status(), ActivityStatus::Warning);

        let mut last = h.machine.time_until_collapse();
        assert_eq!(last, 30);
        for _ in 0..299 {
            h.advance(100);
            let now = h.machine.time_until_collapse();
            assert!(now <= last, "countdown went up: {last} -> {now}");
            last = now;
        }
        // Last tick before the collapse timer fires reads 1, never negative.
        assert_eq!(last, 1);
        h.advance(100);
        assert_eq!(h.machine.time_until_collapse(), 0);
        assert_eq!(h.status(), ActivityStatus::Inactive);
    }

    #[test]
    fn activity_resets_the_window() {
        let mut h = Harness::new(test_config());
        h.advance(60_000);
        h.send(IdleEvent::Activity);
        h.advance(DEBOUNCE_MS);
        assert_eq!(h.status(), ActivityStatus::Active);
        assert_eq!(h.machine.last_activity_ms(), h.now);

        // The warning now fires 90s after the reset, not the original start.
        h.advance(89_000);
        assert_eq!(h.status(), ActivityStatus::Active);
        h.advance(1_000);
        assert_eq!(h.status(), ActivityStatus::Warning);
    }

    #[test]
    fn activity_bursts_collapse_to_one_reset() {
        let mut h = Harness::new(test_config());
        let start = h.now;
        h.advance(10_000);
        h.send(IdleEvent::Activity);
        h.advance(50);
        h.send(IdleEvent::Activity);
        h.advance(40);
        h.send(IdleEvent::Activity);
        // Debounce expires 100ms after the last burst event.
        h.advance(DEBOUNCE_MS);
        assert_eq!(h.status(), ActivityStatus::Active);

        // Exactly one warning is armed, relative to the single reset.
        let reset_at = start + 10_000 + 50 + 40 + DEBOUNCE_MS;
        assert_eq!(h.warning, Some(reset_at + 90_000));
        assert_eq!(h.collapse, Some(reset_at + 120_000));
    }

    #[test]
    fn activity_is_ignored_during_warning() {
        let mut h = Harness::new(test_config());
        h.advance(90_000);
        assert_eq!(h.status(), ActivityStatus::Warning);

        h.send(IdleEvent::Activity);
        h.advance(5_000);
        assert_eq!(h.status(), ActivityStatus::Warning);

        // The collapse still happens on the original schedule.
        h.advance(25_000);
        assert_eq!(h.status(), ActivityStatus::Inactive);
        assert_eq!(h.timeouts_fired, 1);
    }

    #[test]
    fn extend_dismisses_warning_and_restarts_window() {
        let mut h = Harness::new(test_config());
        h.advance(90_000);
        h.advance(20_000);
        assert_eq!(h.status(), ActivityStatus::Warning);
        assert_eq!(h.machine.time_until_collapse(), 10);

        h.send(IdleEvent::Extend);
        h.advance(DEBOUNCE_MS);
        assert_eq!(h.status(), ActivityStatus::Active);
        assert_eq!(h.machine.time_until_collapse(), 0);
        assert!(!h.machine.show_indicator());
        assert!(!h.machine.is_collapsed());

        // A fresh full window: warning 90s after the extend reset.
        h.advance(89_999);
        assert_eq!(h.status(), ActivityStatus::Active);
        h.advance(1);
        assert_eq!(h.status(), ActivityStatus::Warning);
        assert_eq!(h.timeouts_fired, 0);
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut h = Harness::new(test_config());
        assert!(!h.machine.is_collapsed());

        h.send(IdleEvent::Toggle);
        assert!(h.machine.is_collapsed());
        assert!(!h.machine.is_auto_collapsed());

        h.send(IdleEvent::Toggle);
        assert!(!h.machine.is_collapsed());
        assert!(!h.machine.is_auto_collapsed());
        assert_eq!(h.status(), ActivityStatus::Active);
    }

    #[test]
    fn toggle_cancels_warning_and_rearms_after_grace() {
        let mut h = Harness::new(test_config());
        h.advance(95_000);
        assert_eq!(h.status(), ActivityStatus::Warning);

        h.send(IdleEvent::Toggle);
        assert_eq!(h.status(), ActivityStatus::Active);
        assert_eq!(h.machine.time_until_collapse(), 0);
        assert!(h.machine.is_collapsed());
        assert!(h.warning.is_none());
        assert!(h.collapse.is_none());

        // While manually collapsed the grace reset arms nothing.
        h.advance(TOGGLE_GRACE_MS);
        assert!(h.warning.is_none());

        // Toggling back open restarts the cycle after the grace delay.
        h.send(IdleEvent::Toggle);
        h.advance(TOGGLE_GRACE_MS);
        assert!(h.warning.is_some());
        assert!(h.collapse.is_some());
    }

    #[test]
    fn shrink_always_collapses_grow_restores_only_auto() {
        let mut h = Harness::new(test_config());

        h.send(IdleEvent::Resize { width: 1000.0 });
        assert!(h.machine.is_collapsed());
        assert!(h.machine.is_auto_collapsed());
        assert_eq!(h.status(), ActivityStatus::Inactive);
        assert_eq!(h.machine.screen_size(), ScreenSize::Md);

        h.send(IdleEvent::Resize { width: 1600.0 });
        assert!(!h.machine.is_collapsed());
        assert!(!h.machine.is_auto_collapsed());
        assert_eq!(h.status(), ActivityStatus::Active);

        // A manual collapse survives the shrink/grow round trip.
        h.send(IdleEvent::Toggle);
        h.advance(TOGGLE_GRACE_MS);
        h.send(IdleEvent::Resize { width: 1000.0 });
        h.send(IdleEvent::Resize { width: 1600.0 });
        assert!(h.machine.is_collapsed());
        assert!(!h.machine.is_auto_collapsed());
    }

    #[test]
    fn shrink_during_warning_suppresses_it() {
        let mut h = Harness::new(test_config());
        h.advance(95_000);
        assert_eq!(h.status(), ActivityStatus::Warning);

        h.send(IdleEvent::Resize { width: 800.0 });
        assert_eq!(h.status(), ActivityStatus::Inactive);
        assert!(!h.machine.show_indicator());
        assert_eq!(h.machine.time_until_collapse(), 0);

        // The cancelled collapse timer never fires the callback.
        h.advance(120_000);
        assert_eq!(h.timeouts_fired, 0);
    }

    #[test]
    fn hover_expands_and_leave_recollapses_after_delay() {
        let mut h = Harness::new(test_config());
        h.advance(120_000);
        assert!(h.machine.is_collapsed());
        assert!(h.machine.is_auto_collapsed());

        h.send(IdleEvent::HoverEnter);
        assert!(!h.machine.is_collapsed());
        // Auto flag survives the temporary expansion.
        assert!(h.machine.is_auto_collapsed());

        h.send(IdleEvent::HoverLeave);
        h.advance(LEAVE_DELAY_MS - 1);
        assert!(!h.machine.is_collapsed());
        h.advance(1);
        assert!(h.machine.is_collapsed());
    }

    #[test]
    fn reentering_before_leave_delay_cancels_recollapse() {
        let mut h = Harness::new(test_config());
        h.advance(120_000);
        h.send(IdleEvent::HoverEnter);
        h.send(IdleEvent::HoverLeave);
        h.advance(LEAVE_DELAY_MS / 2);
        h.send(IdleEvent::HoverEnter);
        h.advance(LEAVE_DELAY_MS);
        assert!(!h.machine.is_collapsed());
    }

    #[test]
    fn hover_ignored_when_not_auto_collapsed() {
        let mut h = Harness::new(test_config());
        h.send(IdleEvent::Toggle);
        h.advance(TOGGLE_GRACE_MS);
        assert!(h.machine.is_collapsed());

        h.send(IdleEvent::HoverEnter);
        assert!(h.machine.is_collapsed());
    }

    #[test]
    fn activity_after_collapse_reactivates_without_expanding() {
        let mut h = Harness::new(test_config());
        h.advance(120_000);
        assert_eq!(h.status(), ActivityStatus::Inactive);

        h.send(IdleEvent::Activity);
        h.advance(DEBOUNCE_MS);
        assert_eq!(h.status(), ActivityStatus::Active);
        assert!(h.machine.is_collapsed());
        // No timers while collapsed.
        assert!(h.warning.is_none());
        assert!(h.collapse.is_none());
    }

    #[test]
    fn no_timers_armed_below_breakpoint() {
        let mut h = Harness::new(test_config());
        h.send(IdleEvent::Resize { width: 1100.0 });
        h.send(IdleEvent::Activity);
        h.advance(DEBOUNCE_MS);
        assert!(h.warning.is_none());
        assert!(h.collapse.is_none());
    }

    #[test]
    fn warning_skipped_when_threshold_covers_whole_timeout() {
        let cfg = IdleConfig {
            inactivity_timeout_ms: 30_000,
            warning_threshold_ms: 30_000,
            ..test_config()
        };
        let mut h = Harness::new(cfg);
        assert!(h.warning.is_none());
        assert!(h.collapse.is_some());
        h.advance(30_000);
        assert_eq!(h.status(), ActivityStatus::Inactive);
        assert_eq!(h.timeouts_fired, 1);
    }

    #[test]
    fn default_collapsed_starts_collapsed_without_timers() {
        let cfg = IdleConfig {
            default_collapsed: true,
            ..test_config()
        };
        let h = Harness::new(cfg);
        assert!(h.machine.is_collapsed());
        assert!(!h.machine.is_auto_collapsed());
        assert!(h.warning.is_none());
    }
}
