use leptos::{either::*, prelude::*};

use super::idle::ActivityStatus;

fn status_icon(status: ActivityStatus) -> &'static str {
    match status {
        ActivityStatus::Active => "extra-play",
        ActivityStatus::Warning => "extra-clock",
        ActivityStatus::Inactive => "extra-pause",
    }
}

fn status_color(status: ActivityStatus) -> &'static str {
    match status {
        ActivityStatus::Active => "text-green",
        ActivityStatus::Warning => "text-yellow",
        ActivityStatus::Inactive => "text-red",
    }
}

/// Floating activity-status card. Surfaces the collapse countdown with
/// "Stay Active" / "Dismiss" actions while the tracker is in WARNING.
#[component]
pub fn ActivityIndicator(
    status: ReadSignal<ActivityStatus>,
    time_until_collapse: ReadSignal<u32>,
    warning_total_secs: u32,
    visible: Signal<bool>,
    on_extend: Callback<()>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let total = warning_total_secs.max(1);

    view! {
        {move || {
            visible
                .get()
                .then(|| {
                    let current = status.get();
                    view! {
                        <div class="fixed top-4 right-4 z-50 bg-background border border-muted/40 rounded-lg shadow-lg p-4 min-w-[280px]">
                            <div class="flex items-start justify-between mb-3">
                                <div class="flex items-center gap-2">
                                    <i class=format!(
                                        "{} {} text-xs",
                                        status_icon(current),
                                        status_color(current),
                                    )></i>
                                    <span class="text-sm font-medium">"Activity Status"</span>
                                </div>
                                <button
                                    class="h-6 w-6 -mt-1 -mr-1 rounded hover:bg-brightBlack/40"
                                    aria-label="Dismiss"
                                    on:click=move |_| on_dismiss.run(())
                                >
                                    <i class="extra-close text-xs"></i>
                                </button>
                            </div>

                            {match current {
                                ActivityStatus::Warning => {
                                    let countdown = time_until_collapse.get();
                                    let percent = (total.saturating_sub(countdown)) * 100 / total;
                                    EitherOf3::A(
                                        view! {
                                            <div class="space-y-3">
                                                <div class="flex items-center justify-between">
                                                    <span class="text-sm text-muted">"Auto-collapse in:"</span>
                                                    <span class=if countdown <= 3 {
                                                        "text-lg font-bold text-red"
                                                    } else {
                                                        "text-lg font-bold text-yellow"
                                                    }>{countdown}"s"</span>
                                                </div>
                                                <div class="w-full bg-brightBlack/40 rounded-full h-2 overflow-hidden">
                                                    <div
                                                        class=if countdown <= 3 {
                                                            "h-full rounded-full bg-red"
                                                        } else {
                                                            "h-full rounded-full bg-yellow"
                                                        }
                                                        style=format!("width: {percent}%")
                                                    ></div>
                                                </div>
                                                <div class="flex gap-2">
                                                    <button
                                                        class="flex-1 bg-blue/20 hover:bg-blue/30 text-blue px-3 py-1.5 rounded text-xs font-medium"
                                                        on:click=move |_| on_extend.run(())
                                                    >
                                                        "Stay Active"
                                                    </button>
                                                    <button
                                                        class="px-3 py-1.5 rounded border border-muted/40 text-xs hover:bg-brightBlack/40"
                                                        on:click=move |_| on_dismiss.run(())
                                                    >
                                                        "Dismiss"
                                                    </button>
                                                </div>
                                                <p class="text-xs text-muted text-center">
                                                    "Sidebar will collapse due to inactivity"
                                                </p>
                                            </div>
                                        },
                                    )
                                }
                                ActivityStatus::Active => {
                                    EitherOf3::B(
                                        view! {
                                            <div class="space-y-2">
                                                <div class="flex items-center gap-2">
                                                    <span class="w-2 h-2 bg-green rounded-full animate-pulse"></span>
                                                    <span class="text-sm text-muted">"Currently active"</span>
                                                </div>
                                                <p class="text-xs text-muted">
                                                    "Sidebar auto-collapses after two minutes of inactivity"
                                                </p>
                                            </div>
                                        },
                                    )
                                }
                                ActivityStatus::Inactive => {
                                    EitherOf3::C(
                                        view! {
                                            <div class="space-y-2">
                                                <div class="flex items-center gap-2">
                                                    <span class="w-2 h-2 bg-red rounded-full"></span>
                                                    <span class="text-sm text-muted">
                                                        "Inactive - Auto-collapsed"
                                                    </span>
                                                </div>
                                                <p class="text-xs text-muted">
                                                    "Move the mouse or press any key to reactivate"
                                                </p>
                                            </div>
                                        },
                                    )
                                }
                            }}
                        </div>
                    }
                })
        }}
    }
}
