//! Homepage showcase strip: a five-card circular window over the curated
//! showcase subset, centered on the current product.

use contracts::catalog::ProductRecord;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::api::fetch_showcase;
use crate::shared::fetch_guard::FetchGuard;

const SLOT_CLASSES: [&str; 5] = [
    "showcase__card--far-left",
    "showcase__card--left",
    "showcase__card--center",
    "showcase__card--right",
    "showcase__card--far-right",
];

/// Indices of the five visible cards, wrapping around the collection.
/// Collections smaller than the window repeat entries, matching the
/// circular modulo layout of the strip.
pub fn visible_indices(current: usize, len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (0..5)
        .map(|slot| (current + len * 2 + slot - 2) % len)
        .collect()
}

#[component]
pub fn ShowcaseStrip() -> impl IntoView {
    let (products, set_products) = signal::<Vec<ProductRecord>>(Vec::new());
    let (current, set_current) = signal(0usize);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (retries, set_retries) = signal(0u32);
    let navigate = use_navigate();
    let guard = FetchGuard::new();

    Effect::new(move |_| {
        retries.track();
        set_loading.set(true);
        let token = guard.issue();
        let guard = guard.clone();
        spawn_local(async move {
            let outcome = fetch_showcase().await;
            if !guard.is_current(token) {
                log::debug!("Dropping stale showcase response");
                return;
            }
            match outcome {
                Ok(list) => {
                    set_products.set(list);
                    set_current.set(0);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let step = move |delta: isize| {
        let len = products.with_untracked(|p| p.len());
        if len == 0 {
            return;
        }
        set_current.update(|i| *i = (*i as isize + delta).rem_euclid(len as isize) as usize);
    };

    let strip = move || {
        let list = products.get();
        if loading.get() {
            return view! { <div class="showcase__status">"Loading products..."</div> }.into_any();
        }
        if let Some(e) = error.get() {
            return view! {
                <div class="showcase__status showcase__status--error">
                    {format!("Error: {}", e)}
                    <button class="showcase__retry" on:click=move |_| set_retries.update(|r| *r += 1)>
                        "Retry"
                    </button>
                </div>
            }
            .into_any();
        }
        if list.is_empty() {
            return view! { <div class="showcase__status">"No products available"</div> }.into_any();
        }

        let navigate = navigate.clone();
        let cards = visible_indices(current.get(), list.len())
            .into_iter()
            .enumerate()
            .map(|(slot, product_index)| {
                let product = list[product_index].clone();
                let is_center = slot == 2;
                let navigate = navigate.clone();
                let id = product.id.clone();
                view! {
                    <div
                        class=format!("showcase__card {}", SLOT_CLASSES[slot])
                        on:click=move |_| {
                            if slot < 2 {
                                step(-1);
                            } else if slot > 2 {
                                step(1);
                            }
                        }
                    >
                        <img src=product.main_image alt=product.name.clone() />
                        <p class="showcase__name">{product.name}</p>
                        {is_center
                            .then(|| {
                                view! {
                                    <p class="showcase__description">{product.highlight}</p>
                                    <button
                                        class="showcase__view-button"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            navigate(&format!("/products/{}", id), Default::default());
                                        }
                                    >
                                        "View Product"
                                    </button>
                                }
                            })}
                    </div>
                }
            })
            .collect_view();

        view! { <div class="showcase__track">{cards}</div> }.into_any()
    };

    view! {
        <div class="showcase">
            <button class="showcase__nav showcase__nav--prev" on:click=move |_| step(-1)>
                "\u{2039}"
            </button>
            {strip}
            <button class="showcase__nav showcase__nav--next" on:click=move |_| step(1)>
                "\u{203A}"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centers_on_current() {
        assert_eq!(visible_indices(2, 10), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_window_wraps_at_both_ends() {
        assert_eq!(visible_indices(0, 10), vec![8, 9, 0, 1, 2]);
        assert_eq!(visible_indices(9, 10), vec![7, 8, 9, 0, 1]);
    }

    #[test]
    fn test_small_collections_repeat() {
        assert_eq!(visible_indices(0, 2), vec![0, 1, 0, 1, 0]);
        assert_eq!(visible_indices(0, 1), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_empty_collection_has_no_window() {
        assert!(visible_indices(0, 0).is_empty());
    }
}
