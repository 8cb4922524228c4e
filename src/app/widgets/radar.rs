use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::{html, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use crate::data;

use super::super::theme::use_theme;

const CANVAS_SIZE: u32 = 400;
const LABEL_MARGIN: f64 = 40.0;
const RING_COUNT: u32 = 5;

/// Angle of axis `index` of `count`, with the first axis pointing up.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64 - FRAC_PI_2
}

pub fn point_at(cx: f64, cy: f64, angle: f64, radius: f64) -> (f64, f64) {
    (cx + angle.cos() * radius, cy + angle.sin() * radius)
}

/// Distance from center for a 0-100 skill level.
pub fn skill_radius(level: u32, max_radius: f64) -> f64 {
    (level.min(100) as f64 / 100.0) * max_radius
}

fn draw_radar(ctx: &CanvasRenderingContext2d, label_color: &str) {
    let cx = CANVAS_SIZE as f64 / 2.0;
    let cy = cx;
    let max_radius = cx - LABEL_MARGIN;
    let skills = data::SKILLS;

    ctx.clear_rect(0.0, 0.0, CANVAS_SIZE as f64, CANVAS_SIZE as f64);

    for ring in 1..=RING_COUNT {
        let radius = max_radius / RING_COUNT as f64 * ring as f64;
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius, 0.0, TAU);
        ctx.set_stroke_style_str("rgba(156, 163, 175, 0.3)");
        ctx.set_line_width(1.0);
        ctx.stroke();
    }

    ctx.set_font("12px monospace");
    ctx.set_text_align("center");
    for (i, skill) in skills.iter().enumerate() {
        let angle = axis_angle(i, skills.len());

        let (end_x, end_y) = point_at(cx, cy, angle, max_radius);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(end_x, end_y);
        ctx.set_stroke_style_str("rgba(156, 163, 175, 0.2)");
        ctx.set_line_width(1.0);
        ctx.stroke();

        let (px, py) = point_at(cx, cy, angle, skill_radius(skill.level, max_radius));
        ctx.begin_path();
        let _ = ctx.arc(px, py, 4.0, 0.0, TAU);
        ctx.set_fill_style_str(skill.category.color());
        ctx.fill();

        let (lx, ly) = point_at(cx, cy, angle, max_radius + 20.0);
        ctx.set_fill_style_str(label_color);
        let _ = ctx.fill_text(skill.name, lx, ly);
        let _ = ctx.fill_text(&format!("{}%", skill.level), lx, ly + 15.0);
    }

    // The connecting polygon goes on top of the axes.
    ctx.begin_path();
    for (i, skill) in skills.iter().enumerate() {
        let angle = axis_angle(i, skills.len());
        let (px, py) = point_at(cx, cy, angle, skill_radius(skill.level, max_radius));
        if i == 0 {
            ctx.move_to(px, py);
        } else {
            ctx.line_to(px, py);
        }
    }
    ctx.close_path();
    ctx.set_stroke_style_str("rgba(59, 130, 246, 0.5)");
    ctx.set_line_width(2.0);
    ctx.stroke();
    ctx.set_fill_style_str("rgba(59, 130, 246, 0.1)");
    ctx.fill();
}

/// Static radar chart of the skill table, with a category legend.
#[component]
pub fn SkillsRadar() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let theme = use_theme();

    // Redraw whenever the theme flips so the labels stay legible.
    Effect::new(move |_| {
        let label_color = if theme.theme.get().is_dark() {
            "#d1d5db"
        } else {
            "#374151"
        };
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };
        draw_radar(&ctx, label_color);
    });

    view! {
        <div class="bg-brightBlack/20 rounded-lg border border-muted/30 p-6">
            <h3 class="text-lg font-semibold mb-4 text-center">"Skills Radar"</h3>
            <div class="flex justify-center">
                <canvas
                    node_ref=canvas_ref
                    width=CANVAS_SIZE
                    height=CANVAS_SIZE
                    class="max-w-full"
                ></canvas>
            </div>
            <div class="flex flex-wrap justify-center gap-4 mt-4">
                {data::SkillCategory::all()
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="flex items-center gap-2">
                                <span
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", category.color())
                                ></span>
                                <span class="text-sm text-muted capitalize">
                                    {category.label()}
                                </span>
                            </div>
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
    fn first_axis_points_straight_up() {
        let angle = axis_angle(0, 10);
        let (x, y) = point_at(100.0, 100.0, angle, 50.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn axes_are_evenly_spaced() {
        let step = axis_angle(1, 8) - axis_angle(0, 8);
        for i in 1..8 {
            let delta = axis_angle(i, 8) - axis_angle(i - 1, 8);
            assert!((delta - step).abs() < 1e-9);
        }
        assert!((step - TAU / 8.0).abs() < 1e-9);
    }

    #[test]
    fn skill_radius_is_linear_and_clamped() {
        assert_eq!(skill_radius(0, 160.0), 0.0);
        assert_eq!(skill_radius(50, 160.0), 80.0);
        assert_eq!(skill_radius(100, 160.0), 160.0);
        assert_eq!(skill_radius(250, 160.0), 160.0);
    }
}
