//! Landing page: hero carousel, welcome blurb, the product showcase strip,
//! promotional image bands, a rotating testimonial band and the solutions
//! overview. Every section loads independently; a failed band is logged and
//! left out rather than breaking the page.

use contracts::content::HomeImage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::showcase::ShowcaseStrip;
use crate::content::api::{fetch_bottom_images, fetch_carousel, fetch_top_images};

const SLIDE_INTERVAL_MS: u32 = 3_000;
const TESTIMONIAL_INTERVAL_MS: u32 = 4_000;

const TESTIMONIALS: [&str; 3] = [
    "Hikotek's dedication to quality and service stands out. Their team is \
     knowledgeable, responsive, and ensures specific needs are met. Customers \
     can always count on on-time deliveries and excellent support.",
    "Hikotek has exceeded expectations as a reliable partner. They offer a \
     wide range of products, and their expertise in electromechanical \
     assemblies is exceptional. Their commitment to quality control has \
     helped streamline our production processes.",
    "Hikotek provides a customer-centric experience with highly communicative \
     teams, fast turnaround times and tailored solutions. They deliver with \
     precision and dependability, whether for prototypes or high-volume \
     production.",
];

struct ServiceCard {
    title: &'static str,
    image: &'static str,
    description: &'static str,
}

static SERVICES: [ServiceCard; 2] = [
    ServiceCard {
        title: "Technical Support",
        image: "/images/solutions-support.png",
        description: "Get expert help with equipment setup and maintenance.",
    },
    ServiceCard {
        title: "Custom Solutions",
        image: "/images/solutions-custom.png",
        description: "We design tailored solutions to meet your business needs.",
    },
];

/// Next slide position, wrapping around the deck. An empty deck stays at 0.
fn advance(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Clamped slide lookup; `None` for an empty deck, so a render racing a
/// deck replacement can never index out of bounds.
fn slide_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(current.min(len - 1))
    }
}

#[component]
fn HeroCarousel() -> impl IntoView {
    let (slides, set_slides) = signal::<Vec<HomeImage>>(Vec::new());
    let (current, set_current) = signal(0usize);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_carousel().await {
                Ok(images) => set_slides.set(images),
                Err(e) => log::warn!("Failed to load carousel: {}", e),
            }
        });
    });

    // Auto-advance until the component is disposed; try_with/try_update
    // return None once the signals are gone and the loop exits.
    spawn_local(async move {
        loop {
            TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
            let Some(len) = slides.try_with(|s| s.len()) else {
                break;
            };
            if len < 2 {
                continue;
            }
            if set_current.try_update(|i| *i = advance(*i, len)).is_none() {
                break;
            }
        }
    });

    view! {
        <Show when=move || slides.with(|s| !s.is_empty())>
            <div class="hero-carousel">
                {move || {
                    slides.with(|s| {
                        slide_index(current.get(), s.len()).map(|index| {
                            let slide = &s[index];
                            view! {
                                <img
                                    class="hero-carousel__slide"
                                    src=slide.url.clone()
                                    alt=slide.title.clone()
                                />
                            }
                        })
                    })
                }}
                <div class="hero-carousel__dots">
                    {move || {
                        let len = slides.with(|s| s.len());
                        (0..len)
                            .map(|index| {
                                view! {
                                    <button
                                        class="hero-carousel__dot"
                                        class=("hero-carousel__dot--active", move || current.get() == index)
                                        on:click=move |_| set_current.set(index)
                                    ></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn TestimonialBand() -> impl IntoView {
    let (current, set_current) = signal(0usize);

    spawn_local(async move {
        loop {
            TimeoutFuture::new(TESTIMONIAL_INTERVAL_MS).await;
            if set_current
                .try_update(|i| *i = advance(*i, TESTIMONIALS.len()))
                .is_none()
            {
                break;
            }
        }
    });

    view! {
        <section class="testimonials">
            <h2 class="testimonials__title">"What Our Customers Say"</h2>
            <blockquote class="testimonials__quote">
                {move || TESTIMONIALS[current.get() % TESTIMONIALS.len()]}
            </blockquote>
            <div class="testimonials__dots">
                {(0..TESTIMONIALS.len())
                    .map(|index| {
                        view! {
                            <button
                                class="testimonials__dot"
                                class=("testimonials__dot--active", move || current.get() == index)
                                on:click=move |_| set_current.set(index)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SolutionsSection() -> impl IntoView {
    let (active, set_active) = signal::<Option<usize>>(None);

    view! {
        <section class="solutions">
            <h2 class="solutions__title">"Solutions and Services"</h2>
            <div class="solutions__cards">
                {SERVICES
                    .iter()
                    .enumerate()
                    .map(|(index, service)| {
                        view! {
                            <div
                                class="solutions__card"
                                class=("solutions__card--active", move || active.get() == Some(index))
                                on:mouseenter=move |_| set_active.set(Some(index))
                                on:mouseleave=move |_| set_active.set(None)
                            >
                                <img src=service.image alt=service.title />
                                <h4>{service.title}</h4>
                                <Show when=move || active.get() == Some(index)>
                                    <p class="solutions__description">{service.description}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn image_band(title: &'static str, images: ReadSignal<Vec<HomeImage>>) -> impl IntoView {
    view! {
        <Show when=move || images.with(|i| !i.is_empty())>
            <section class="image-band">
                <h2 class="image-band__title">{title}</h2>
                <div class="image-band__grid">
                    {move || {
                        images
                            .get()
                            .into_iter()
                            .map(|image| {
                                view! {
                                    <figure class="image-band__item">
                                        <img src=image.url alt=image.title.clone() />
                                        <figcaption>{image.title}</figcaption>
                                    </figure>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (top_images, set_top_images) = signal::<Vec<HomeImage>>(Vec::new());
    let (bottom_images, set_bottom_images) = signal::<Vec<HomeImage>>(Vec::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_top_images().await {
                Ok(images) => set_top_images.set(images),
                Err(e) => log::warn!("Failed to load top image band: {}", e),
            }
        });
        spawn_local(async move {
            match fetch_bottom_images().await {
                Ok(images) => set_bottom_images.set(images),
                Err(e) => log::warn!("Failed to load bottom image band: {}", e),
            }
        });
    });

    view! {
        <div class="home-page">
            <HeroCarousel />

            <section class="welcome">
                <h1>"Welcome to Hikotek"</h1>
                <p>
                    "Hikotek is a global supplier of precision test and measurement "
                    "instruments, serving laboratories, industry and education with "
                    "reliable equipment and responsive support."
                </p>
            </section>

            <ShowcaseStrip />

            {image_band("Featured Solutions", top_images)}
            {image_band("Our Technology", bottom_images)}

            <TestimonialBand />
            <SolutionsSection />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_around() {
        assert_eq!(advance(0, 3), 1);
        assert_eq!(advance(2, 3), 0);
    }

    #[test]
    fn test_advance_on_empty_deck_stays_put() {
        assert_eq!(advance(0, 0), 0);
        assert_eq!(advance(5, 0), 0);
    }

    #[test]
    fn test_slide_index_clamps_after_deck_shrinks() {
        assert_eq!(slide_index(4, 2), Some(1));
        assert_eq!(slide_index(1, 3), Some(1));
    }

    #[test]
    fn test_slide_index_is_none_for_empty_deck() {
        assert_eq!(slide_index(0, 0), None);
        assert_eq!(slide_index(3, 0), None);
    }
}
