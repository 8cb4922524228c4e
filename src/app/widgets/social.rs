use leptos::prelude::*;

use crate::data;

/// Grid of external profiles used on the contact page.
#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h3 class="text-xl font-semibold">"Connect With Me"</h3>
            <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                {data::SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.url
                                target=if link.url.starts_with("mailto:") { "_self" } else { "_blank" }
                                rel="noopener noreferrer"
                                download=link.download
                                class="group flex flex-col items-center p-5 rounded-lg border border-muted/30 bg-brightBlack/20 transition-all duration-200 hover:bg-brightBlack/40 hover:shadow-lg"
                            >
                                <i class=format!("{} text-2xl mb-3", link.icon)></i>
                                <span class="text-sm font-semibold mb-1">{link.name}</span>
                                <span class="text-xs text-muted text-center">
                                    {link.description}
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
