use leptos::{either::*, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use crate::data;

use super::idle::{ActivityStatus, ScreenSize, SidebarAutoCollapse};
use super::theme::use_theme;

fn status_color(status: ActivityStatus) -> &'static str {
    match status {
        ActivityStatus::Active => "text-green",
        ActivityStatus::Warning => "text-yellow",
        ActivityStatus::Inactive => "text-red",
    }
}

fn status_tooltip(
    status: ActivityStatus,
    auto_collapsed: bool,
    screen: ScreenSize,
    countdown: u32,
) -> String {
    if auto_collapsed {
        if screen == ScreenSize::Lg || screen == ScreenSize::Xl {
            "Auto-collapsed (inactive)".to_string()
        } else {
            format!("Auto-collapsed ({} screen)", screen.as_str())
        }
    } else {
        match status {
            ActivityStatus::Warning => format!("Collapsing in {countdown}s - Click for details"),
            ActivityStatus::Active => "Active - Click for activity status".to_string(),
            ActivityStatus::Inactive => "Inactive - Click for details".to_string(),
        }
    }
}

/// Desktop navigation rail. Consumes the auto-collapse tracker's state and
/// feeds hover/leave/toggle back into it.
#[component]
pub fn Sidebar(tracker: SidebarAutoCollapse, on_show_indicator: Callback<()>) -> impl IntoView {
    let theme = use_theme();

    let width_class = move || {
        if tracker.is_collapsed.get() {
            "hidden lg:flex lg:flex-col lg:fixed lg:inset-y-0 w-20 bg-brightBlack/20 border-r border-muted/30 z-20 transition-all duration-300"
        } else {
            "hidden lg:flex lg:flex-col lg:fixed lg:inset-y-0 w-64 bg-brightBlack/20 border-r border-muted/30 z-20 transition-all duration-300"
        }
    };

    view! {
        <div
            class=width_class
            on:mouseenter=move |_| tracker.handle_sidebar_hover.run(())
            on:mouseleave=move |_| tracker.handle_sidebar_leave.run(())
        >
            <div class="flex-1 flex flex-col pt-8 pb-4 overflow-hidden">
                <div class="px-6 mb-8 flex items-center justify-between">
                    {move || {
                        (!tracker.is_collapsed.get())
                            .then(|| {
                                view! { <h1 class="text-xl font-bold truncate">{data::NAME}</h1> }
                            })
                    }}
                    <div class="flex items-center gap-1">
                        <StatusDot tracker=tracker on_show_indicator=on_show_indicator />
                        <button
                            class="h-8 w-8 ml-auto rounded-md hover:bg-brightBlack/40"
                            aria-label="Toggle sidebar"
                            on:click=move |_| tracker.toggle_collapse.run(())
                        >
                            {move || {
                                if tracker.is_collapsed.get() {
                                    Either::Left(view! { <i class="extra-chevron-right"></i> })
                                } else {
                                    Either::Right(view! { <i class="extra-chevron-left"></i> })
                                }
                            }}
                        </button>
                    </div>
                </div>

                <WarningBanner tracker=tracker />

                <nav class="flex-1 px-4 space-y-1">
                    {data::SECTIONS
                        .iter()
                        .map(|section| {
                            view! { <NavItem section=section tracker=tracker /> }
                        })
                        .collect_view()}
                </nav>

                <div class="px-6 mt-8 space-y-4">
                    <button
                        class="w-full flex items-center gap-3 text-sm rounded-md px-2 py-2 hover:bg-brightBlack/40"
                        on:click=move |_| theme.toggle.run(())
                    >
                        {move || {
                            if theme.theme.get().is_dark() {
                                Either::Left(view! { <i class="extra-sun"></i> })
                            } else {
                                Either::Right(view! { <i class="extra-moon"></i> })
                            }
                        }}
                        {move || {
                            (!tracker.is_collapsed.get())
                                .then(|| {
                                    view! { <span class="whitespace-nowrap">"Toggle theme"</span> }
                                })
                        }}
                    </button>

                    {move || {
                        if tracker.is_collapsed.get() {
                            Either::Left(
                                view! {
                                    <div class="flex justify-center text-xs text-muted">
                                        {move || {
                                            tracker.screen_size.get().as_str().to_uppercase()
                                        }}
                                    </div>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <div class="flex items-center gap-2 text-xs text-muted overflow-hidden">
                                        <i class="extra-search"></i>
                                        <span class="whitespace-nowrap">"Press Ctrl+K to search"</span>
                                    </div>
                                },
                            )
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// Activity status glyph: a colored dot while tracking, a connectivity
/// glyph when the collapse was automatic, a countdown badge in WARNING.
#[component]
fn StatusDot(tracker: SidebarAutoCollapse, on_show_indicator: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="relative group cursor-pointer"
            on:click=move |_| on_show_indicator.run(())
        >
            <div class="h-6 w-6 flex items-center justify-center">
                {move || {
                    if tracker.is_auto_collapsed.get() {
                        let screen = tracker.screen_size.get();
                        if screen == ScreenSize::Lg || screen == ScreenSize::Xl {
                            EitherOf3::A(view! { <i class="extra-wifi text-yellow text-xs"></i> })
                        } else {
                            EitherOf3::B(
                                view! { <i class="extra-wifi-off text-blue text-xs"></i> },
                            )
                        }
                    } else {
                        let status = tracker.activity_status.get();
                        let countdown = tracker.time_until_collapse.get();
                        EitherOf3::C(
                            view! {
                                <div class="relative">
                                    <i class=format!(
                                        "extra-activity text-xs {}",
                                        status_color(status),
                                    )></i>
                                    {(status == ActivityStatus::Warning && countdown > 0)
                                        .then(|| {
                                            view! {
                                                <span class="absolute -top-1 -right-1 w-3 h-3 bg-yellow rounded-full flex items-center justify-center text-[8px] font-bold text-background">
                                                    {countdown}
                                                </span>
                                            }
                                        })}
                                    {(status == ActivityStatus::Active)
                                        .then(|| {
                                            view! {
                                                <span class="absolute -top-0.5 -right-0.5 w-2 h-2 bg-green rounded-full opacity-75 animate-pulse"></span>
                                            }
                                        })}
                                </div>
                            },
                        )
                    }
                }}
            </div>
            <div class="absolute left-full ml-2 top-1/2 -translate-y-1/2 bg-foreground text-background px-2 py-1 rounded text-xs whitespace-nowrap opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none z-50">
                {move || {
                    status_tooltip(
                        tracker.activity_status.get(),
                        tracker.is_auto_collapsed.get(),
                        tracker.screen_size.get(),
                        tracker.time_until_collapse.get(),
                    )
                }}
            </div>
        </div>
    }
}

#[component]
fn WarningBanner(tracker: SidebarAutoCollapse) -> impl IntoView {
    let total = tracker.warning_total_secs.max(1);
    view! {
        {move || {
            let countdown = tracker.time_until_collapse.get();
            let showing = !tracker.is_collapsed.get()
                && tracker.activity_status.get() == ActivityStatus::Warning && countdown > 0;
            showing
                .then(|| {
                    let percent = (total.saturating_sub(countdown)) * 100 / total;
                    let urgent = countdown <= 3;
                    view! {
                        <div class="mx-4 mb-4 p-3 bg-yellow/10 border border-yellow/40 rounded-lg">
                            <div class="flex items-center gap-2 mb-2">
                                <i class="extra-activity text-yellow text-xs"></i>
                                <span class="text-sm font-medium text-yellow">
                                    "Auto-collapse Warning"
                                </span>
                            </div>
                            <div class="flex items-center justify-between">
                                <span class="text-xs text-yellow/80">"Collapsing in:"</span>
                                <span class=if urgent {
                                    "text-sm font-bold text-red"
                                } else {
                                    "text-sm font-bold text-yellow"
                                }>{countdown}"s"</span>
                            </div>
                            <div class="w-full bg-yellow/20 rounded-full h-1 mt-2">
                                <div
                                    class=if urgent {
                                        "h-full rounded-full bg-red"
                                    } else {
                                        "h-full rounded-full bg-yellow"
                                    }
                                    style=format!("width: {percent}%")
                                ></div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn NavItem(section: &'static data::Section, tracker: SidebarAutoCollapse) -> impl IntoView {
    let is_active = move || use_location().pathname.get() == section.path;
    let link_class = move || {
        let base = "w-full flex items-center gap-3 px-3 py-2 rounded text-left transition-all duration-200 text-sm";
        let tone = if is_active() {
            "bg-blue/10 text-blue shadow-sm"
        } else {
            "text-foreground hover:bg-brightBlack/40"
        };
        let align = if tracker.is_collapsed.get() {
            "justify-center"
        } else {
            ""
        };
        format!("{base} {tone} {align}")
    };

    view! {
        <div class="relative group">
            <A href=section.path attr:class=link_class>
                <i class=format!("{} flex-shrink-0", section.icon)></i>
                {move || {
                    (!tracker.is_collapsed.get())
                        .then(|| {
                            view! {
                                <span class="overflow-hidden whitespace-nowrap">
                                    {section.label}
                                </span>
                            }
                        })
                }}
            </A>
            {move || {
                tracker
                    .is_collapsed
                    .get()
                    .then(|| {
                        view! {
                            <div class="absolute left-full ml-2 top-1/2 -translate-y-1/2 bg-foreground text-background px-2 py-1 rounded text-xs whitespace-nowrap opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none z-50">
                                {section.label}
                                {tracker
                                    .is_auto_collapsed
                                    .get()
                                    .then(|| {
                                        view! {
                                            <span class="block text-xs opacity-75 mt-1">
                                                "Hover to expand"
                                            </span>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
