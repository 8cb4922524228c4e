use leptos::prelude::*;
use leptos_meta::Title;

use crate::data;

use super::widgets::{LiveStats, SkillsRadar, TechStackOrbit};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="space-y-12">
            <div>
                <h2 class="text-3xl font-bold mb-6">"About Me"</h2>
                <div class="space-y-4">
                    <p class="text-base leading-relaxed">
                        "Hi, I'm Robin. I build web applications end to end, with a soft \
                        spot for the systems underneath them: data pipelines, query \
                        layers, and the occasional bout of making Rust run in a browser. \
                        Currently at Northbeam Systems working on industrial telemetry \
                        tooling."
                    </p>
                    <p class="text-base leading-relaxed">
                        "Away from a keyboard I'm usually on a bike, at a climbing gym, \
                        or fussing over a pour-over. I keep a notebook of half-finished \
                        project ideas and occasionally one escapes into the Projects \
                        page. Always happy to talk shop - get in touch."
                    </p>
                </div>
            </div>

            <div>
                <h3 class="text-xl font-bold mb-4">"Developer Stats"</h3>
                <LiveStats />
            </div>

            <div class="grid gap-8 lg:grid-cols-2">
                <SkillsRadar />
                <TechStackOrbit />
            </div>

            <div class="bg-brightBlack/20 rounded-lg border border-muted/30 p-6">
                <h3 class="text-lg font-semibold mb-6 text-center">"Tech Stack"</h3>
                <div class="flex flex-wrap gap-3">
                    {data::TECH_STACK
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-sm bg-brightBlack/40 rounded border border-muted/30">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <p class="text-xs text-muted text-center">
                "This site is built with Leptos and WebAssembly. v"
                {env!("CARGO_PKG_VERSION")} ", built " {env!("BUILD_TIME")}
            </p>
        </div>
    }
}
