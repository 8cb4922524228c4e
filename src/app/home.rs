use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;
use leptos_use::use_interval_fn;

use crate::data;

use super::widgets::ParticleBackground;

const TYPEWRITER_TEXT: &str = "Welcome to my portfolio";
const TYPE_INTERVAL_MS: u64 = 100;
const CURSOR_BLINK_MS: u64 = 500;

#[component]
pub fn HomePage() -> impl IntoView {
    let (shown, set_shown) = signal(0usize);
    let (cursor_on, set_cursor_on) = signal(true);

    let typing = use_interval_fn(
        move || {
            set_shown.update(|n| {
                if *n < TYPEWRITER_TEXT.len() {
                    *n += 1;
                }
            });
        },
        TYPE_INTERVAL_MS,
    );
    let pause_typing = typing.pause.clone();
    Effect::new(move |_| {
        if shown.get() >= TYPEWRITER_TEXT.len() {
            pause_typing();
        }
    });

    let _ = use_interval_fn(
        move || set_cursor_on.update(|on| *on = !*on),
        CURSOR_BLINK_MS,
    );

    view! {
        <Title text="Home" />
        <div class="relative min-h-[80vh] flex flex-col justify-center items-center text-center space-y-8">
            <ParticleBackground />

            <div class="space-y-6 relative z-10">
                <h1 class="text-4xl md:text-6xl font-bold">
                    "Hey, I'm Robin! \u{1F44B}"
                </h1>
                <div class="text-xl md:text-2xl text-muted h-8">
                    {move || TYPEWRITER_TEXT[..shown.get()].to_string()}
                    <span class=move || {
                        if cursor_on.get() {
                            "opacity-100 transition-opacity"
                        } else {
                            "opacity-0 transition-opacity"
                        }
                    }>"|"</span>
                </div>
                <p class="text-lg text-muted max-w-2xl mx-auto leading-relaxed">
                    {data::TAGLINE}", based in "{data::HOME_CITY}
                </p>
            </div>

            <div class="flex flex-col sm:flex-row gap-4 relative z-10">
                <A
                    href="/projects"
                    attr:class="bg-blue/20 hover:bg-blue/30 text-blue border border-blue/30 px-8 py-3 text-lg rounded-md font-medium shadow-lg hover:shadow-xl transition-all duration-300"
                >
                    "View My Work"
                </A>
                <A
                    href="/contact"
                    attr:class="border border-muted/40 hover:bg-brightBlack/40 px-8 py-3 text-lg rounded-md font-medium shadow-lg hover:shadow-xl transition-all duration-300"
                >
                    "Get In Touch"
                </A>
            </div>

            <div class="flex gap-6 mt-8 relative z-10">
                {data::SOCIAL_LINKS
                    .iter()
                    .take(3)
                    .map(|link| {
                        view! {
                            <a
                                href=link.url
                                target=if link.url.starts_with("mailto:") { "_self" } else { "_blank" }
                                rel="noopener noreferrer"
                                aria-label=link.name
                                class="text-muted hover:text-blue text-2xl transition-colors"
                            >
                                <i class=link.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-10 text-muted">
                <div class="w-6 h-10 border-2 border-muted rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-muted rounded-full mt-2 animate-bounce"></div>
                </div>
            </div>
        </div>
    }
}
