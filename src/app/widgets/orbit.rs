use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::data;

/// Base revolution time at speed 1.0, in milliseconds.
const ORBIT_PERIOD_MS: f64 = 20_000.0;
const BASE_RADIUS: f64 = 120.0;
const RADIUS_STEP: f64 = 20.0;

/// Orbit radius for an item; every third item shares a ring.
pub fn orbit_radius(index: usize) -> f64 {
    BASE_RADIUS + (index % 3) as f64 * RADIUS_STEP
}

/// Current angle in degrees for an item, given the shared base angle.
pub fn item_angle(index: usize, count: usize, base_angle: f64, speed: f64) -> f64 {
    let initial = index as f64 * 360.0 / count as f64;
    (initial + base_angle * speed).rem_euclid(360.0)
}

/// Tech icons orbiting a center core at staggered radii and speeds. One
/// RAF-driven angle signal drives every item.
#[component]
pub fn TechStackOrbit() -> impl IntoView {
    let (base_angle, set_base_angle) = signal(0.0f64);

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let step = args.delta * 360.0 / ORBIT_PERIOD_MS;
        set_base_angle.update(|angle| *angle = (*angle + step).rem_euclid(360.0));
    });

    let count = data::TECH_ORBIT.len();

    view! {
        <div class="bg-brightBlack/20 rounded-lg border border-muted/30 p-6">
            <h3 class="text-lg font-semibold mb-6 text-center">"Tech Stack Orbit"</h3>
            <div class="relative w-80 h-80 mx-auto flex items-center justify-center overflow-hidden">
                <div class="absolute w-16 h-16 bg-gradient-to-r from-blue to-purple rounded-full flex items-center justify-center z-10">
                    <span class="text-background font-bold text-sm">"ME"</span>
                </div>

                {data::TECH_ORBIT
                    .iter()
                    .enumerate()
                    .map(|(i, tech)| {
                        let radius = orbit_radius(i);
                        view! {
                            <div
                                class="absolute flex items-center justify-center rounded-full shadow-lg cursor-pointer group"
                                style=move || {
                                    let angle = item_angle(i, count, base_angle.get(), tech.speed);
                                    format!(
                                        "width: {size}px; height: {size}px; background-color: {color}20; border: 2px solid {color}; transform: rotate({angle}deg) translateY(-{radius}px) rotate(-{angle}deg)",
                                        size = tech.size,
                                        color = tech.color,
                                    )
                                }
                            >
                                <i class=format!("{} text-lg", tech.icon) style=format!("color: {}", tech.color)></i>
                                <div class="absolute -top-8 left-1/2 -translate-x-1/2 bg-foreground text-background px-2 py-1 rounded text-xs whitespace-nowrap opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none z-20">
                                    {tech.name}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}

                {[BASE_RADIUS, BASE_RADIUS + RADIUS_STEP, BASE_RADIUS + 2.0 * RADIUS_STEP]
                    .into_iter()
                    .map(|radius| {
                        view! {
                            <div
                                class="absolute border border-muted/30 rounded-full opacity-30"
                                style=format!(
                                    "width: {0}px; height: {0}px",
                                    radius * 2.0,
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii_cycle_over_three_rings() {
        assert_eq!(orbit_radius(0), 120.0);
        assert_eq!(orbit_radius(1), 140.0);
        assert_eq!(orbit_radius(2), 160.0);
        assert_eq!(orbit_radius(3), 120.0);
    }

    #[test]
    fn items_start_evenly_distributed() {
        let count = 8;
        for i in 0..count {
            assert_eq!(item_angle(i, count, 0.0, 1.0), i as f64 * 45.0);
        }
    }

    #[test]
    fn faster_items_advance_further() {
        let slow = item_angle(0, 8, 10.0, 1.0);
        let fast = item_angle(0, 8, 10.0, 1.5);
        assert_eq!(slow, 10.0);
        assert_eq!(fast, 15.0);
    }

    #[test]
    fn angles_stay_in_range() {
        let angle = item_angle(7, 8, 359.5, 1.4);
        assert!((0.0..360.0).contains(&angle));
    }
}
