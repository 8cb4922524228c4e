use std::collections::HashSet;

use leptos::{either::*, prelude::*};
use leptos_meta::Title;

use crate::data;

/// Flip one entry's expansion state.
pub fn toggle_expanded(expanded: &mut HashSet<usize>, index: usize) {
    if !expanded.insert(index) {
        expanded.remove(&index);
    }
}

#[component]
pub fn TimelinePage() -> impl IntoView {
    let expanded = RwSignal::new(HashSet::<usize>::new());

    view! {
        <Title text="Timeline" />
        <div class="space-y-8">
            <div>
                <h2 class="text-3xl font-bold mb-4">"Timeline"</h2>
                <p class="text-base text-muted">
                    "My professional journey with detailed achievements and the \
                    technologies behind them."
                </p>
            </div>

            <div class="relative">
                <div class="absolute left-4 top-0 bottom-0 w-px bg-muted/30"></div>
                <div class="space-y-8">
                    {data::TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! { <TimelineItem index=index entry=entry expanded=expanded /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(
    index: usize,
    entry: &'static data::TimelineEntry,
    expanded: RwSignal<HashSet<usize>>,
) -> impl IntoView {
    let is_expanded = move || expanded.with(|set| set.contains(&index));

    view! {
        <div class="relative flex items-start gap-6">
            <div class="relative z-10 flex items-center justify-center w-8 h-8 bg-blue rounded-full">
                <span class="w-2 h-2 bg-background rounded-full"></span>
            </div>

            <div class="flex-1 min-w-0">
                <div
                    class="bg-brightBlack/20 border border-muted/30 rounded-lg p-4 cursor-pointer hover:shadow-md transition-all"
                    on:click=move |_| expanded.update(|set| toggle_expanded(set, index))
                >
                    <div class="flex items-center justify-between mb-2">
                        <div class="flex items-center gap-3">
                            <h3 class="text-lg font-semibold">{entry.role}</h3>
                            <span class="px-2 py-1 text-xs bg-brightBlack/40 rounded border border-muted/30">
                                {entry.year}
                            </span>
                        </div>
                        {move || {
                            if is_expanded() {
                                Either::Left(view! { <i class="extra-chevron-up text-xs"></i> })
                            } else {
                                Either::Right(
                                    view! { <i class="extra-chevron-down text-xs"></i> },
                                )
                            }
                        }}
                    </div>

                    <div class="flex items-center gap-4 mb-2">
                        <p class="text-blue font-medium">{entry.company}</p>
                        <div class="flex items-center gap-1 text-sm text-muted">
                            <i class="extra-location text-xs"></i>
                            {entry.location}
                        </div>
                    </div>

                    <p class="text-sm text-muted leading-relaxed">{entry.description}</p>

                    {move || {
                        is_expanded()
                            .then(|| {
                                view! {
                                    <div class="mt-4 space-y-4">
                                        <div>
                                            <div class="flex items-center gap-2 mb-2">
                                                <i class="extra-award text-yellow text-xs"></i>
                                                <h4 class="text-sm font-medium">"Key Achievements"</h4>
                                            </div>
                                            <ul class="space-y-1">
                                                {entry
                                                    .achievements
                                                    .iter()
                                                    .map(|achievement| {
                                                        view! {
                                                            <li class="text-sm text-muted flex items-start gap-2">
                                                                <span class="text-blue mt-1">"\u{2022}"</span>
                                                                {*achievement}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                        <div>
                                            <h4 class="text-sm font-medium mb-2">"Technologies Used"</h4>
                                            <div class="flex flex-wrap gap-2">
                                                {entry
                                                    .technologies
                                                    .iter()
                                                    .map(|tech| {
                                                        view! {
                                                            <span class="px-2 py-1 text-xs bg-blue/10 text-blue rounded border border-blue/30">
                                                                {*tech}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut expanded = HashSet::new();
        toggle_expanded(&mut expanded, 1);
        assert!(expanded.contains(&1));
        toggle_expanded(&mut expanded, 1);
        assert!(!expanded.contains(&1));
    }

    #[test]
    fn entries_toggle_independently() {
        let mut expanded = HashSet::new();
        toggle_expanded(&mut expanded, 0);
        toggle_expanded(&mut expanded, 2);
        toggle_expanded(&mut expanded, 0);
        assert!(!expanded.contains(&0));
        assert!(expanded.contains(&2));
    }
}
