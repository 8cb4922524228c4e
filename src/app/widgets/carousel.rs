use leptos::prelude::*;

use crate::data::ProjectImage;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

/// Screenshot pager for a project card: wrapping prev/next, dot
/// indicators, and a click-to-fullscreen overlay.
#[component]
pub fn ProjectImageCarousel(images: &'static [ProjectImage]) -> impl IntoView {
    let (current, set_current) = signal(0usize);
    let (fullscreen, set_fullscreen) = signal(false);
    let len = images.len();

    if len == 0 {
        return ().into_any();
    }

    view! {
        <div class="relative group">
            <div class="aspect-video bg-brightBlack/40 rounded-lg overflow-hidden relative">
                {move || {
                    let image = images[current.get().min(len - 1)];
                    view! {
                        <img
                            src=image.src
                            alt=image.alt
                            class="w-full h-full object-cover cursor-pointer"
                            on:click=move |_| set_fullscreen(true)
                        />
                    }
                }}

                {(len > 1)
                    .then(|| {
                        view! {
                            <button
                                class="absolute left-2 top-1/2 -translate-y-1/2 bg-background/50 text-foreground p-1.5 rounded-full opacity-0 group-hover:opacity-100 transition-opacity z-10"
                                aria-label="Previous image"
                                on:click=move |_| set_current.update(|i| *i = prev_index(*i, len))
                            >
                                <i class="extra-chevron-left text-xs"></i>
                            </button>
                            <button
                                class="absolute right-2 top-1/2 -translate-y-1/2 bg-background/50 text-foreground p-1.5 rounded-full opacity-0 group-hover:opacity-100 transition-opacity z-10"
                                aria-label="Next image"
                                on:click=move |_| set_current.update(|i| *i = next_index(*i, len))
                            >
                                <i class="extra-chevron-right text-xs"></i>
                            </button>
                        }
                    })}

                {(len > 1)
                    .then(|| {
                        view! {
                            <div class="absolute bottom-3 left-1/2 -translate-x-1/2 flex gap-1 z-10">
                                {(0..len)
                                    .map(|i| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if current.get() == i {
                                                        "w-2 h-2 rounded-full bg-foreground"
                                                    } else {
                                                        "w-2 h-2 rounded-full bg-foreground/50"
                                                    }
                                                }
                                                aria-label=format!("Show image {}", i + 1)
                                                on:click=move |_| set_current(i)
                                            ></button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>

            <p class="text-xs text-muted mt-4 text-center">
                {move || images[current.get().min(len - 1)].caption}
            </p>
        </div>

        {move || {
            fullscreen
                .get()
                .then(|| {
                    let image = images[current.get().min(len - 1)];
                    view! {
                        <div
                            class="fixed inset-0 bg-background/90 z-50 flex items-center justify-center p-4"
                            on:click=move |_| set_fullscreen(false)
                        >
                            <div class="relative max-w-5xl max-h-full" on:click=move |ev| ev.stop_propagation()>
                                <img
                                    src=image.src
                                    alt=image.alt
                                    class="max-w-full max-h-full object-contain"
                                />
                                <button
                                    class="absolute top-4 right-4 bg-background/50 rounded-full p-2 hover:bg-background/70"
                                    aria-label="Close fullscreen"
                                    on:click=move |_| set_fullscreen(false)
                                >
                                    <i class="extra-close"></i>
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_forward() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn prev_wraps_backward() {
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn single_image_stays_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }
}
