use leptos::{html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window};
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use super::super::theme::use_theme;

/// Radius of the pointer's attraction field.
const MOUSE_RADIUS: f64 = 100.0;
/// Particles closer than this get a connecting line.
const LINK_DISTANCE: f64 = 120.0;
const FADE_ZONE: f64 = 0.1;
const MAX_FADE_OPACITY: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub life: f64,
    pub max_life: f64,
}

impl Particle {
    /// `rng` yields values in [0, 1).
    pub fn spawn(rng: &mut impl FnMut() -> f64, width: f64, height: f64) -> Self {
        Self {
            x: rng() * width,
            y: rng() * height,
            vx: (rng() - 0.5) * 0.5,
            vy: (rng() - 0.5) * 0.5,
            size: rng() * 2.0 + 0.5,
            opacity: rng() * 0.5 + 0.1,
            life: 0.0,
            max_life: rng() * 300.0 + 200.0,
        }
    }

    /// Advances one frame. Returns false once the particle's life is spent
    /// and it should be replaced.
    pub fn step(&mut self, width: f64, height: f64, mouse: Option<(f64, f64)>) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.life += 1.0;

        if let Some((mx, my)) = mouse {
            let dx = mx - self.x;
            let dy = my - self.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > 0.0 && distance < MOUSE_RADIUS {
                let force = (MOUSE_RADIUS - distance) / MOUSE_RADIUS;
                self.vx += (dx / distance) * force * 0.01;
                self.vy += (dy / distance) * force * 0.01;
            }
        }

        let ratio = self.life / self.max_life;
        if ratio < FADE_ZONE {
            self.opacity = (ratio / FADE_ZONE) * MAX_FADE_OPACITY;
        } else if ratio > 1.0 - FADE_ZONE {
            self.opacity = ((1.0 - ratio) / FADE_ZONE).max(0.0) * MAX_FADE_OPACITY;
        }

        // Toroidal wrap keeps the field dense at the edges.
        if self.x < 0.0 {
            self.x = width;
        }
        if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
        if self.y > height {
            self.y = 0.0;
        }

        self.life < self.max_life
    }
}

fn js_rng() -> impl FnMut() -> f64 {
    || js_sys::Math::random()
}

fn canvas_size() -> (f64, f64) {
    let width = window()
        .inner_width()
        .expect("should be able to get window width")
        .as_f64()
        .expect("window width should be a number");
    let height = window()
        .inner_height()
        .expect("should be able to get window height")
        .as_f64()
        .expect("window height should be a number");
    (width, height)
}

fn context_2d(canvas: &web_sys::HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Full-viewport interactive particle field behind the home hero.
#[component]
pub fn ParticleBackground(#[prop(default = 50)] count: usize) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let particles = StoredValue::new(Vec::<Particle>::new());
    let mouse = StoredValue::new(None::<(f64, f64)>);
    let theme = use_theme();

    let resize_and_seed = move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (width, height) = canvas_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let mut rng = js_rng();
        particles.set_value((0..count).map(|_| Particle::spawn(&mut rng, width, height)).collect());
    };

    Effect::new(move |_| resize_and_seed());

    let _ = use_event_listener(use_window(), leptos::ev::resize, move |_| resize_and_seed());

    let _ = use_event_listener(use_window(), leptos::ev::mousemove, move |ev| {
        mouse.set_value(Some((ev.client_x() as f64, ev.client_y() as f64)));
    });

    let _ = use_raf_fn(move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            return;
        };
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let pointer = mouse.get_value();
        let is_dark = theme.theme.get_untracked().is_dark();

        particles.update_value(|field| {
            let mut rng = js_rng();
            for particle in field.iter_mut() {
                if !particle.step(width, height, pointer) {
                    *particle = Particle::spawn(&mut rng, width, height);
                }
            }

            ctx.clear_rect(0.0, 0.0, width, height);

            // Links first so the dots render on top.
            let stroke = if is_dark {
                "rgba(255, 255, 255, 0.1)"
            } else {
                "rgba(0, 0, 0, 0.1)"
            };
            ctx.set_stroke_style_str(stroke);
            ctx.set_line_width(0.5);
            for i in 0..field.len() {
                for j in (i + 1)..field.len() {
                    let dx = field[i].x - field[j].x;
                    let dy = field[i].y - field[j].y;
                    let distance = (dx * dx + dy * dy).sqrt();
                    if distance < LINK_DISTANCE {
                        ctx.set_global_alpha(((LINK_DISTANCE - distance) / LINK_DISTANCE) * 0.3);
                        ctx.begin_path();
                        ctx.move_to(field[i].x, field[i].y);
                        ctx.line_to(field[j].x, field[j].y);
                        ctx.stroke();
                    }
                }
            }

            let fill = if is_dark {
                "rgba(59, 130, 246, 0.8)"
            } else {
                "rgba(59, 130, 246, 0.6)"
            };
            ctx.set_fill_style_str(fill);
            for particle in field.iter() {
                ctx.set_global_alpha(particle.opacity.clamp(0.0, 1.0));
                ctx.begin_path();
                let _ = ctx.arc(
                    particle.x,
                    particle.y,
                    particle.size,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }
            ctx.set_global_alpha(1.0);
        });
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 pointer-events-none z-0"
            style="background: transparent"
        ></canvas>
    }
}

/// Deterministic [0, 1) value per index so SSR and hydration agree.
fn pseudo_random(index: usize, salt: f64) -> f64 {
    let x = ((index as f64 + 1.0) * 12.9898 + salt).sin() * 43758.5453;
    x - x.floor()
}

/// Lightweight CSS-animated drift dots used behind the non-home sections.
#[component]
pub fn FloatingParticles(#[prop(default = 20)] count: usize) -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none z-0 overflow-hidden">
            {(0..count)
                .map(|i| {
                    let size = pseudo_random(i, 0.0) * 4.0 + 2.0;
                    let left = pseudo_random(i, 1.0) * 100.0;
                    let top = pseudo_random(i, 2.0) * 100.0;
                    let duration = pseudo_random(i, 3.0) * 20.0 + 10.0;
                    let delay = pseudo_random(i, 4.0) * 5.0;
                    view! {
                        <div
                            class="absolute rounded-full bg-blue/20"
                            style=format!(
                                "width: {size:.1}px; height: {size:.1}px; left: {left:.1}%; top: {top:.1}%; animation: float-drift {duration:.1}s ease-in-out {delay:.1}s infinite",
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_rng(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter().cycle();
        move || iter.next().unwrap()
    }

    #[test]
    fn step_wraps_at_edges() {
        let mut p = Particle {
            x: 0.5,
            y: 10.0,
            vx: -1.0,
            vy: 0.0,
            size: 1.0,
            opacity: 0.3,
            life: 50.0,
            max_life: 200.0,
        };
        assert!(p.step(100.0, 100.0, None));
        assert_eq!(p.x, 100.0);

        p.vx = 1.0;
        p.x = 99.8;
        assert!(p.step(100.0, 100.0, None));
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn step_expires_at_max_life() {
        let mut p = Particle {
            x: 10.0,
            y: 10.0,
            vx: 0.0,
            vy: 0.0,
            size: 1.0,
            opacity: 0.3,
            life: 199.0,
            max_life: 200.0,
        };
        assert!(!p.step(100.0, 100.0, None));
    }

    #[test]
    fn mouse_pulls_particles_inward() {
        let mut p = Particle {
            x: 50.0,
            y: 50.0,
            vx: 0.0,
            vy: 0.0,
            size: 1.0,
            opacity: 0.3,
            life: 50.0,
            max_life: 200.0,
        };
        p.step(100.0, 100.0, Some((90.0, 50.0)));
        assert!(p.vx > 0.0, "should accelerate toward the pointer");
        assert_eq!(p.vy, 0.0);

        // Outside the attraction radius nothing changes.
        let mut far = p;
        far.vx = 0.0;
        far.step(1000.0, 1000.0, Some((500.0, 50.0)));
        assert_eq!(far.vx, 0.0);
    }

    #[test]
    fn fade_in_and_out_scales_opacity() {
        let mut p = Particle {
            x: 10.0,
            y: 10.0,
            vx: 0.0,
            vy: 0.0,
            size: 1.0,
            opacity: 0.0,
            life: 0.0,
            max_life: 100.0,
        };
        p.step(100.0, 100.0, None);
        // 1% through life: 10% of the way through the fade-in zone.
        assert!((p.opacity - 0.06).abs() < 1e-9);

        p.life = 98.0;
        p.step(100.0, 100.0, None);
        // 99% through: 10% opacity remaining in the fade-out zone.
        assert!((p.opacity - 0.06).abs() < 1e-9);
    }

    #[test]
    fn spawn_uses_rng_bounds() {
        let mut rng = fixed_rng(vec![0.5]);
        let p = Particle::spawn(&mut rng, 200.0, 100.0);
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, 50.0);
        assert_eq!(p.vx, 0.0);
        assert_eq!(p.size, 1.5);
        assert_eq!(p.max_life, 350.0);
    }

    #[test]
    fn pseudo_random_is_stable_and_bounded() {
        for i in 0..100 {
            let v = pseudo_random(i, 1.0);
            assert!((0.0..1.0).contains(&v));
            assert_eq!(v, pseudo_random(i, 1.0));
        }
    }
}
