//! Product detail page: thumbnail rail with a selected-image state,
//! description/downloads tabs, highlights, specifications and an enquiry
//! modal. Loaded via `/products/:id`, falling back to the public route when
//! the primary one fails.

use contracts::catalog::ProductRecord;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::api::{fetch_by_id, fetch_public_by_id};
use crate::forms::enquiry::EnquiryForm;
use crate::shared::fetch_guard::FetchGuard;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Description,
    Downloads,
}

#[component]
fn DetailBody(product: ProductRecord) -> impl IntoView {
    let gallery = product.gallery();
    let (selected_image, set_selected_image) = signal(gallery[0].clone());
    let (tab, set_tab) = signal(Tab::Description);
    let (show_enquiry, set_show_enquiry) = signal(false);

    let price_line = product.show_price.then(|| {
        product
            .price
            .map(|price| view! { <p class="detail__price">{format!("Price: ${:.2} USD", price)}</p> })
    });

    let specifications = product.specifications.clone();
    let downloads = product.downloads.clone();
    let highlight = product.highlight.clone();
    let product_id = product.id.clone();

    let tab_content = move || match tab.get() {
        Tab::Description => view! {
            <div class="detail__description">
                <p>{highlight.clone()}</p>
                <Show when={
                    let specifications = specifications.clone();
                    move || !specifications.is_empty()
                }>
                    <p class="detail__specs-title">"SPECIFICATIONS"</p>
                </Show>
                <ul class="detail__specs">
                    {specifications
                        .iter()
                        .map(|line| view! { <li>{line.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any(),
        Tab::Downloads => {
            if downloads.is_empty() {
                view! { <p class="detail__no-downloads">"No downloads available"</p> }.into_any()
            } else {
                view! {
                    <div class="detail__downloads">
                        {downloads
                            .iter()
                            .map(|entry| {
                                view! {
                                    <a class="detail__download" href=entry.url.clone() target="_blank">
                                        {entry.name.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <Show when=move || show_enquiry.get()>
            <EnquiryForm
                on_close=Callback::new(move |_| set_show_enquiry.set(false))
                product_id=product_id.clone()
            />
        </Show>

        <div class="detail">
            <div class="detail__media">
                <div class="detail__thumbnails">
                    {gallery
                        .iter()
                        .map(|image| {
                            let image = image.clone();
                            let for_click = image.clone();
                            view! {
                                <div
                                    class="detail__thumbnail"
                                    class=("detail__thumbnail--selected", {
                                        let image = image.clone();
                                        move || selected_image.get() == image
                                    })
                                    on:click=move |_| set_selected_image.set(for_click.clone())
                                >
                                    <img src=image.clone() alt="Thumbnail" />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="detail__main-image">
                    <img src=move || selected_image.get() alt=product.name.clone() />
                </div>
            </div>

            <div class="detail__info">
                <h2>{product.name.clone()}</h2>
                <ul class="detail__highlights">
                    {product
                        .highlights
                        .iter()
                        .map(|line| view! { <li>{line.clone()}</li> })
                        .collect_view()}
                </ul>
                {price_line}
                <button class="detail__enquire" on:click=move |_| set_show_enquiry.set(true)>
                    "Enquire Now"
                </button>
            </div>
        </div>

        <div class="detail__tabs">
            <button
                class="detail__tab"
                class=("detail__tab--active", move || tab.get() == Tab::Description)
                on:click=move |_| set_tab.set(Tab::Description)
            >
                "Description"
            </button>
            <button
                class="detail__tab"
                class=("detail__tab--active", move || tab.get() == Tab::Downloads)
                on:click=move |_| set_tab.set(Tab::Downloads)
            >
                "Downloads"
            </button>
        </div>
        <div class="detail__tab-content">{tab_content}</div>
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id").unwrap_or_default();

    let (product, set_product) = signal::<Option<ProductRecord>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (retries, set_retries) = signal(0u32);
    let guard = FetchGuard::new();

    Effect::new(move |_| {
        let product_id = id();
        retries.track();
        set_loading.set(true);
        let token = guard.issue();
        let guard = guard.clone();
        spawn_local(async move {
            // The public route serves records the primary one will not.
            let outcome = match fetch_by_id(&product_id).await {
                Ok(record) => Ok(record),
                Err(_) => fetch_public_by_id(&product_id).await,
            };
            if !guard.is_current(token) {
                log::debug!("Dropping stale product response for '{}'", product_id);
                return;
            }
            match outcome {
                Ok(record) => {
                    set_product.set(Some(record));
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
                    <p>"Loading product..."</p>
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
        match product.get() {
            Some(record) => view! { <DetailBody product=record /> }.into_any(),
            None => view! {
                <div class="page-status">
                    <p>"Product not found"</p>
                </div>
            }
            .into_any(),
        }
    };

    view! { <div class="detail-page">{body}</div> }
}
