//! Hero carousel driven by the admin banner settings.

use dioxus::prelude::*;

use crate::app::api::BannerSlide;

/// Wrap-around index stepping for the slide controls.
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

#[derive(Props, Clone, PartialEq)]
pub struct HeroCarouselProps {
    /// Slides to show; inactive slides are skipped, order follows `position`.
    pub slides: Vec<BannerSlide>,
}

#[component]
pub fn HeroCarousel(props: HeroCarouselProps) -> Element {
    let mut slides: Vec<BannerSlide> = props
        .slides
        .iter()
        .filter(|slide| slide.active)
        .cloned()
        .collect();
    slides.sort_by_key(|slide| slide.position);

    let mut current = use_signal(|| 0usize);

    if slides.is_empty() {
        return rsx! {};
    }

    let len = slides.len();
    let index = current().min(len - 1);
    let slide = slides[index].clone();

    rsx! {
        div { class: "hero",
            div {
                class: "hero-slide",
                style: "background-image: linear-gradient(rgba(0,0,0,0.2), rgba(0,0,0,0.65)), url('{slide.image_url}');",
                h2 { style: "margin-bottom:0.25rem;", "{slide.title}" }
                if let Some(subtitle) = slide.subtitle.clone() {
                    p { "{subtitle}" }
                }
                if let Some(link) = slide.link_url.clone() {
                    a { role: "button", href: "{link}", "See more" }
                }
            }
            if len > 1 {
                div { class: "hero-controls",
                    button {
                        class: "secondary",
                        onclick: move |_| {
                            let i = current();
                            current.set(prev_index(i, len));
                        },
                        "‹"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| {
                            let i = current();
                            current.set(next_index(i, len));
                        },
                        "›"
                    }
                }
                div { class: "hero-dots",
                    for dot in 0..len {
                        button {
                            class: if dot == index { "" } else { "outline" },
                            onclick: move |_| current.set(dot),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_wraps_in_both_directions() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
    }

    #[test]
    fn stepping_is_safe_on_empty_slide_lists() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
