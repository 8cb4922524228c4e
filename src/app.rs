mod about;
mod contact;
mod header;
mod home;
mod idle;
mod indicator;
mod palette;
mod projects;
mod sidebar;
mod theme;
mod timeline;
mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::*,
    hooks::{use_location, use_navigate},
    path, NavigateOptions,
};

use crate::data;
use header::MobileHeader;
use idle::{use_sidebar_auto_collapse, ActivityStatus, IdleConfig};
use indicator::ActivityIndicator;
use palette::CommandPalette;
use sidebar::Sidebar;
use widgets::FloatingParticles;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    theme::provide_theme();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", data::NAME) />

        <Router>
            <Layout />
        </Router>
    }
}

/// Everything inside the router: the tracker, the shell chrome, and the
/// section routes. Lives below `Router` so navigation hooks are available
/// to the inactivity-timeout callback.
#[component]
fn Layout() -> impl IntoView {
    let navigate = use_navigate();
    let on_timeout = Callback::new(move |_| {
        // Idle users land back on home, same as the sidebar collapsing.
        navigate("/", NavigateOptions::default());
    });
    let tracker = use_sidebar_auto_collapse(IdleConfig::default(), Some(on_timeout));

    let (palette_open, set_palette_open) = signal(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let (indicator_requested, set_indicator_requested) = signal(false);

    let indicator_visible = Signal::derive(move || {
        indicator_requested.get()
            || (tracker.show_activity_indicator.get()
                && tracker.activity_status.get() == ActivityStatus::Warning)
    });
    let on_extend = Callback::new(move |_| {
        tracker.extend_activity.run(());
        set_indicator_requested(false);
    });
    let on_dismiss = Callback::new(move |_| set_indicator_requested(false));
    let on_show_indicator = Callback::new(move |_| set_indicator_requested(true));

    let main_class = move || {
        if tracker.is_collapsed.get() {
            "flex flex-col flex-1 pt-16 lg:pt-0 lg:pl-20 transition-all duration-300"
        } else {
            "flex flex-col flex-1 pt-16 lg:pt-0 lg:pl-64 transition-all duration-300"
        }
    };

    view! {
        <div class="min-h-screen bg-background text-foreground relative overflow-hidden">
            // Background particles everywhere except the home hero, which
            // brings its own canvas.
            {move || {
                (use_location().pathname.get() != "/")
                    .then(|| view! { <FloatingParticles count=15 /> })
            }}

            <ActivityIndicator
                status=tracker.activity_status
                time_until_collapse=tracker.time_until_collapse
                warning_total_secs=tracker.warning_total_secs
                visible=indicator_visible
                on_extend=on_extend
                on_dismiss=on_dismiss
            />

            <CommandPalette open=palette_open set_open=set_palette_open />

            <MobileHeader
                menu_open=mobile_menu_open
                set_menu_open=set_mobile_menu_open
                set_palette_open=set_palette_open
            />

            <div class="flex relative z-10">
                <Sidebar tracker=tracker on_show_indicator=on_show_indicator />
                <div class=main_class>
                    <main class="flex-1">
                        <div class="max-w-4xl mx-auto px-6 py-8 lg:py-12">
                            <Routes fallback=|| "Page not found.".into_view()>
                                <Route path=path!("/") view=home::HomePage />
                                <Route path=path!("/about") view=about::AboutPage />
                                <Route path=path!("/projects") view=projects::ProjectsPage />
                                <Route path=path!("/timeline") view=timeline::TimelinePage />
                                <Route path=path!("/contact") view=contact::ContactPage />
                            </Routes>
                        </div>
                    </main>
                </div>
            </div>
        </div>
    }
}
