use leptos::{either::*, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use crate::data;

use super::theme::use_theme;

/// Fixed top bar for small screens: name, theme toggle, palette trigger,
/// and a slide-down section menu.
#[component]
pub fn MobileHeader(
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
    set_palette_open: WriteSignal<bool>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="lg:hidden fixed top-0 left-0 right-0 z-50 bg-background border-b border-muted/30">
            <div class="flex items-center justify-between p-4">
                <h1 class="text-xl font-bold">{data::NAME}</h1>
                <div class="flex items-center gap-2">
                    <button
                        class="h-8 w-8 rounded-md hover:bg-brightBlack/40"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle.run(())
                    >
                        {move || {
                            if theme.theme.get().is_dark() {
                                Either::Left(view! { <i class="extra-sun"></i> })
                            } else {
                                Either::Right(view! { <i class="extra-moon"></i> })
                            }
                        }}
                    </button>
                    <button
                        class="h-8 w-8 rounded-md hover:bg-brightBlack/40"
                        aria-label="Open command palette"
                        on:click=move |_| set_palette_open(true)
                    >
                        <i class="extra-search"></i>
                    </button>
                    <button
                        class="h-8 w-8 rounded-md hover:bg-brightBlack/40"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                Either::Left(view! { <i class="extra-close"></i> })
                            } else {
                                Either::Right(view! { <i class="extra-menu"></i> })
                            }
                        }}
                    </button>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="border-t border-muted/30 bg-background">
                                <nav class="p-4 space-y-2">
                                    {data::SECTIONS
                                        .iter()
                                        .map(|section| {
                                            let active = move || {
                                                use_location().pathname.get() == section.path
                                            };
                                            view! {
                                                <A
                                                    href=section.path
                                                    attr:class=move || {
                                                        if active() {
                                                            "w-full flex items-center gap-3 px-3 py-2 rounded-md text-left bg-blue/10 text-blue"
                                                        } else {
                                                            "w-full flex items-center gap-3 px-3 py-2 rounded-md text-left hover:bg-brightBlack/40"
                                                        }
                                                    }
                                                    on:click=move |_| set_menu_open(false)
                                                >
                                                    <i class=section.icon></i>
                                                    {section.label}
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </nav>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
