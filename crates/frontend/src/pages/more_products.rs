//! Full catalog page ("Latest Products"): every product in one grid, plus a
//! category band built from the same snapshot.

use contracts::catalog::{build_index, ProductRecord};
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::api::fetch_showcase_all;
use crate::catalog::product_card::ProductCard;
use crate::shared::fetch_guard::FetchGuard;

#[component]
pub fn MoreProductsPage() -> impl IntoView {
    let (products, set_products) = signal::<Vec<ProductRecord>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (retries, set_retries) = signal(0u32);
    let guard = FetchGuard::new();

    Effect::new(move |_| {
        retries.track();
        set_loading.set(true);
        let token = guard.issue();
        let guard = guard.clone();
        spawn_local(async move {
            let outcome = fetch_showcase_all().await;
            if !guard.is_current(token) {
                log::debug!("Dropping stale catalog response");
                return;
            }
            match outcome {
                Ok(list) => {
                    set_products.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let body = move || {
        if loading.get() {
            return view! {
                <div class="page-status">
                    <p>"Loading products..."</p>
                </div>
            }
            .into_any();
        }
        if let Some(e) = error.get() {
            return view! {
                <div class="page-status page-status--error">
                    <p>{format!("Error: {}", e)}</p>
                    <button class="retry-button" on:click=move |_| set_retries.update(|r| *r += 1)>
                        "Try Again"
                    </button>
                </div>
            }
            .into_any();
        }

        let list = products.get();
        if list.is_empty() {
            return view! {
                <div class="page-status">
                    <p>"No products available"</p>
                </div>
            }
            .into_any();
        }

        let categories = build_index(&list);
        view! {
            <section>
                <h2>"All Products"</h2>
                <div class="product-grid">
                    {list
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </section>
            <section>
                <h2>"Product Categories"</h2>
                <div class="category-band">
                    {categories
                        .into_iter()
                        .map(|entry| {
                            let href = format!(
                                "/categoryproducts?category={}",
                                urlencoding::encode(&entry.category)
                            );
                            let count = entry.items.len();
                            view! {
                                <A href=href attr:class="category-band__card">
                                    <span class="category-band__name">{entry.category}</span>
                                    <span class="category-band__count">
                                        {format!("{} products", count)}
                                    </span>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        }
        .into_any()
    };

    view! {
        <div class="more-products-page">
            <h1>"Latest Products"</h1>
            {body}
        </div>
    }
}
