use leptos::{ev, ev::KeyboardEvent, html, prelude::*};
use leptos_router::hooks::use_navigate;
use leptos_use::{use_document, use_event_listener};

use crate::data;

/// Sections matching the query, case-insensitive against id and label.
/// An empty query matches everything.
pub fn filter_sections(query: &str) -> Vec<&'static data::Section> {
    let needle = query.trim().to_lowercase();
    data::SECTIONS
        .iter()
        .filter(|s| {
            needle.is_empty() || s.id.contains(&needle) || s.label.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Wrapping selection cursor over `len` entries.
pub fn cycle_selection(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

/// Ctrl/Cmd-K launcher that jumps between sections.
#[component]
pub fn CommandPalette(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let (query, set_query) = signal(String::new());
    let (selected, set_selected) = signal(0usize);
    let navigate = use_navigate();

    let close = move || {
        set_open(false);
        set_query(String::new());
        set_selected(0);
    };

    let _ = use_event_listener(use_document(), ev::keydown, move |ev: KeyboardEvent| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "k" {
            ev.prevent_default();
            set_open(true);
        }
    });

    // Focus the input whenever the palette opens.
    Effect::new(move |_| {
        if open.get() {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let go_to = {
        let navigate = navigate.clone();
        move |path: &str| {
            log::debug!("palette: jumping to {path}");
            navigate(path, Default::default());
            close();
        }
    };

    let keydown_handler = {
        let go_to = go_to.clone();
        move |ev: KeyboardEvent| {
            let results = filter_sections(&query.get_untracked());
            match ev.key().as_ref() {
                "ArrowDown" => {
                    ev.prevent_default();
                    set_selected(cycle_selection(selected.get_untracked(), results.len(), true));
                }
                "ArrowUp" => {
                    ev.prevent_default();
                    set_selected(cycle_selection(selected.get_untracked(), results.len(), false));
                }
                "Enter" => {
                    ev.prevent_default();
                    if let Some(section) = results.get(selected.get_untracked()) {
                        go_to(section.path);
                    }
                }
                "Escape" => {
                    ev.prevent_default();
                    close();
                }
                _ => {}
            }
        }
    };

    view! {
        {move || {
            open.get()
                .then(|| {
                    let go_to = go_to.clone();
                    let keydown_handler = keydown_handler.clone();
                    view! {
                        <div
                            class="fixed inset-0 z-50 bg-background/80 flex items-start justify-center pt-[20vh]"
                            on:mousedown=move |_| close()
                        >
                            <div
                                class="w-full max-w-md bg-background border border-muted/40 rounded-lg shadow-2xl overflow-hidden"
                                on:mousedown=move |ev| ev.stop_propagation()
                            >
                                <input
                                    node_ref=input_ref
                                    type="text"
                                    placeholder="Jump to section..."
                                    autocapitalize="none"
                                    class="w-full px-4 py-3 border-b border-muted/40 bg-background text-foreground focus:outline-none"
                                    on:keydown=keydown_handler
                                    on:input=move |ev| {
                                        set_query(event_target_value(&ev));
                                        set_selected(0);
                                    }
                                />
                                <div class="max-h-64 overflow-y-auto p-2">
                                    {move || {
                                        let results = filter_sections(&query.get());
                                        if results.is_empty() {
                                            view! {
                                                <div class="px-3 py-6 text-center text-sm text-muted">
                                                    "No results found."
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            let go_to = go_to.clone();
                                            results
                                                .into_iter()
                                                .enumerate()
                                                .map(|(i, section)| {
                                                    let go_to = go_to.clone();
                                                    let item_class = move || {
                                                        if selected.get() == i {
                                                            "w-full flex items-center gap-2 px-3 py-2 rounded cursor-pointer bg-brightBlack/40 text-blue"
                                                        } else {
                                                            "w-full flex items-center gap-2 px-3 py-2 rounded cursor-pointer hover:bg-brightBlack/40"
                                                        }
                                                    };
                                                    view! {
                                                        <div
                                                            class=item_class
                                                            on:mousedown=move |_| go_to(section.path)
                                                        >
                                                            <i class=section.icon></i>
                                                            <span>{section.label}</span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                    }}
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_all_sections() {
        assert_eq!(filter_sections("").len(), data::SECTIONS.len());
        assert_eq!(filter_sections("   ").len(), data::SECTIONS.len());
    }

    #[test]
    fn query_matches_id_and_label_case_insensitively() {
        let results = filter_sections("PRO");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "projects");

        let results = filter_sections("time");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "timeline");
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        assert!(filter_sections("zzz").is_empty());
    }

    #[test]
    fn selection_wraps_both_directions() {
        assert_eq!(cycle_selection(0, 5, true), 1);
        assert_eq!(cycle_selection(4, 5, true), 0);
        assert_eq!(cycle_selection(0, 5, false), 4);
        assert_eq!(cycle_selection(3, 5, false), 2);
    }

    #[test]
    fn selection_on_empty_list_stays_put() {
        assert_eq!(cycle_selection(0, 0, true), 0);
        assert_eq!(cycle_selection(0, 0, false), 0);
    }
}
