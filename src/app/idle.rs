mod machine;

pub use machine::{ActivityStatus, IdleConfig, ScreenSize};

use std::time::Duration;

use leptos::leptos_dom::helpers::{
    set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle,
};
use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_window};

use machine::{
    IdleEvent, SidebarIdleMachine, TimerOp, COUNTDOWN_TICK_MS, DEBOUNCE_MS, LEAVE_DELAY_MS,
    TOGGLE_GRACE_MS,
};

/// State and actions exposed to the shell. Signals are read-only; mutation
/// happens exclusively through the machine behind the callbacks.
#[derive(Clone, Copy)]
pub struct SidebarAutoCollapse {
    pub is_collapsed: ReadSignal<bool>,
    pub is_auto_collapsed: ReadSignal<bool>,
    pub screen_size: ReadSignal<ScreenSize>,
    pub activity_status: ReadSignal<ActivityStatus>,
    pub time_until_collapse: ReadSignal<u32>,
    pub show_activity_indicator: ReadSignal<bool>,
    /// Full warning window in seconds, for countdown progress bars.
    pub warning_total_secs: u32,
    pub toggle_collapse: Callback<()>,
    pub extend_activity: Callback<()>,
    pub handle_sidebar_hover: Callback<()>,
    pub handle_sidebar_leave: Callback<()>,
}

/// Every cancellable handle the tracker ever arms. One slot per timer; an
/// arm always clears the previous handle of its slot first.
#[derive(Default)]
struct Timers {
    debounce: Option<TimeoutHandle>,
    warning: Option<TimeoutHandle>,
    collapse: Option<TimeoutHandle>,
    grace: Option<TimeoutHandle>,
    leave: Option<TimeoutHandle>,
    countdown: Option<IntervalHandle>,
}

impl Timers {
    fn clear_all(&mut self) {
        for handle in [
            self.debounce.take(),
            self.warning.take(),
            self.collapse.take(),
            self.grace.take(),
            self.leave.take(),
        ]
        .into_iter()
        .flatten()
        {
            handle.clear();
        }
        if let Some(handle) = self.countdown.take() {
            handle.clear();
        }
    }
}

#[derive(Clone, Copy)]
struct IdleRuntime {
    machine: StoredValue<SidebarIdleMachine>,
    timers: StoredValue<Timers>,
    on_timeout: StoredValue<Option<Callback<()>>>,
    is_collapsed: RwSignal<bool>,
    is_auto_collapsed: RwSignal<bool>,
    screen_size: RwSignal<ScreenSize>,
    activity_status: RwSignal<ActivityStatus>,
    time_until_collapse: RwSignal<u32>,
    show_activity_indicator: RwSignal<bool>,
}

impl IdleRuntime {
    fn dispatch(self, event: IdleEvent) {
        log::trace!("idle event: {event:?}");
        let now = now_ms();
        let transition = self
            .machine
            .try_update_value(|m| m.on_event(event, now))
            .unwrap_or_default();
        for op in transition.timers {
            self.apply(op);
        }
        if transition.notify_timeout {
            log::debug!("inactivity timeout reached, sidebar auto-collapsed");
            if let Some(callback) = self.on_timeout.get_value() {
                callback.run(());
            }
        }
        self.sync();
    }

    fn apply(self, op: TimerOp) {
        let mut timers = self.timers.write_value();
        match op {
            TimerOp::ArmDebounce => {
                clear(&mut timers.debounce);
                timers.debounce = arm(self, IdleEvent::DebounceElapsed, DEBOUNCE_MS);
            }
            TimerOp::ArmWarning(delay) => {
                clear(&mut timers.warning);
                timers.warning = arm(self, IdleEvent::WarningElapsed, delay);
            }
            TimerOp::ArmCollapse(delay) => {
                clear(&mut timers.collapse);
                timers.collapse = arm(self, IdleEvent::CollapseElapsed, delay);
            }
            TimerOp::StartCountdown => {
                if let Some(handle) = timers.countdown.take() {
                    handle.clear();
                }
                timers.countdown = set_interval_with_handle(
                    move || self.dispatch(IdleEvent::CountdownTick),
                    Duration::from_millis(COUNTDOWN_TICK_MS),
                )
                .ok();
            }
            TimerOp::StopCountdown => {
                if let Some(handle) = timers.countdown.take() {
                    handle.clear();
                }
            }
            TimerOp::ArmGrace => {
                clear(&mut timers.grace);
                timers.grace = arm(self, IdleEvent::GraceElapsed, TOGGLE_GRACE_MS);
            }
            TimerOp::ArmLeaveDelay => {
                clear(&mut timers.leave);
                timers.leave = arm(self, IdleEvent::LeaveDelayElapsed, LEAVE_DELAY_MS);
            }
            TimerOp::CancelLeaveDelay => clear(&mut timers.leave),
            TimerOp::CancelAll => timers.clear_all(),
        }
    }

    fn sync(self) {
        self.machine.with_value(|m| {
            set_if_changed(self.is_collapsed, m.is_collapsed());
            set_if_changed(self.is_auto_collapsed, m.is_auto_collapsed());
            set_if_changed(self.screen_size, m.screen_size());
            set_if_changed(self.activity_status, m.status());
            set_if_changed(self.time_until_collapse, m.time_until_collapse());
            set_if_changed(self.show_activity_indicator, m.show_indicator());
        });
    }
}

fn clear(slot: &mut Option<TimeoutHandle>) {
    if let Some(handle) = slot.take() {
        handle.clear();
    }
}

fn arm(runtime: IdleRuntime, event: IdleEvent, delay_ms: u64) -> Option<TimeoutHandle> {
    set_timeout_with_handle(
        move || runtime.dispatch(event),
        Duration::from_millis(delay_ms),
    )
    .ok()
}

fn set_if_changed<T: PartialEq + Send + Sync + 'static>(signal: RwSignal<T>, value: T) {
    if signal.with_untracked(|current| *current != value) {
        signal.set(value);
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn window_width() -> f64 {
    window()
        .inner_width()
        .expect("should be able to get window width")
        .as_f64()
        .expect("window width should be a number")
}

/// Tracks user activity and viewport size, auto-collapsing the sidebar
/// after `cfg.inactivity_timeout_ms` of silence with a countdown warning
/// beforehand. `on_inactivity_timeout` fires exactly once per collapse.
pub fn use_sidebar_auto_collapse(
    cfg: IdleConfig,
    on_inactivity_timeout: Option<Callback<()>>,
) -> SidebarAutoCollapse {
    let initial = SidebarIdleMachine::new(cfg, 0);
    let runtime = IdleRuntime {
        machine: StoredValue::new(initial),
        timers: StoredValue::new(Timers::default()),
        on_timeout: StoredValue::new(on_inactivity_timeout),
        is_collapsed: RwSignal::new(cfg.default_collapsed),
        is_auto_collapsed: RwSignal::new(false),
        screen_size: RwSignal::new(ScreenSize::Xl),
        activity_status: RwSignal::new(ActivityStatus::Active),
        time_until_collapse: RwSignal::new(0),
        show_activity_indicator: RwSignal::new(false),
    };

    // Kick the cycle off once the client is up: report the real viewport,
    // then seed the first activity reset.
    Effect::new(move |_| {
        runtime.dispatch(IdleEvent::Resize {
            width: window_width(),
        });
        runtime.dispatch(IdleEvent::Activity);
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        runtime.dispatch(IdleEvent::Resize {
            width: window_width(),
        });
    });

    let _ = use_event_listener(use_document(), ev::mousedown, move |_| {
        runtime.dispatch(IdleEvent::Activity)
    });
    let _ = use_event_listener(use_document(), ev::mousemove, move |_| {
        runtime.dispatch(IdleEvent::Activity)
    });
    let _ = use_event_listener(use_document(), ev::keypress, move |_| {
        runtime.dispatch(IdleEvent::Activity)
    });
    let _ = use_event_listener(use_document(), ev::scroll, move |_| {
        runtime.dispatch(IdleEvent::Activity)
    });
    let _ = use_event_listener(use_document(), ev::touchstart, move |_| {
        runtime.dispatch(IdleEvent::Activity)
    });
    let _ = use_event_listener(use_document(), ev::click, move |_| {
        runtime.dispatch(IdleEvent::Activity)
    });

    on_cleanup(move || {
        runtime.timers.update_value(|t| t.clear_all());
    });

    SidebarAutoCollapse {
        is_collapsed: runtime.is_collapsed.read_only(),
        is_auto_collapsed: runtime.is_auto_collapsed.read_only(),
        screen_size: runtime.screen_size.read_only(),
        activity_status: runtime.activity_status.read_only(),
        time_until_collapse: runtime.time_until_collapse.read_only(),
        show_activity_indicator: runtime.show_activity_indicator.read_only(),
        warning_total_secs: cfg.warning_threshold_ms.div_ceil(1000) as u32,
        toggle_collapse: Callback::new(move |_| runtime.dispatch(IdleEvent::Toggle)),
        extend_activity: Callback::new(move |_| runtime.dispatch(IdleEvent::Extend)),
        handle_sidebar_hover: Callback::new(move |_| runtime.dispatch(IdleEvent::HoverEnter)),
        handle_sidebar_leave: Callback::new(move |_| runtime.dispatch(IdleEvent::HoverLeave)),
    }
}
