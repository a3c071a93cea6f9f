use contracts::catalog::ProductRecord;
use leptos::prelude::*;
use leptos_router::components::A;

/// Grid card used by the category view and the "more products" page.
#[component]
pub fn ProductCard(product: ProductRecord) -> impl IntoView {
    let href = format!("/products/{}", product.id);

    view! {
        <A href=href attr:class="product-card-link">
            <div class="product-card">
                <img class="product-card__image" src=product.main_image alt=product.name.clone() />
                <div class="product-card__name">{product.name}</div>
                <h3 class="product-card__highlight">{product.highlight}</h3>
            </div>
        </A>
    }
}
