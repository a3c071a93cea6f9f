use crate::layout::chat::ChatWidget;
use crate::layout::footer::SiteFooter;
use crate::layout::header::SiteHeader;
use crate::pages::about::AboutPage;
use crate::pages::category::CategoryProductsPage;
use crate::pages::contact::ContactPage;
use crate::pages::distributor::DistributorApplyPage;
use crate::pages::home::HomePage;
use crate::pages::more_products::MoreProductsPage;
use crate::pages::product_detail::ProductDetailPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/">"Back to home"</a>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <SiteHeader />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/products/:id") view=ProductDetailPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/distributor") view=DistributorApplyPage />
                    <Route path=path!("/moreproducts") view=MoreProductsPage />
                    <Route path=path!("/categoryproducts") view=CategoryProductsPage />
                </Routes>
            </main>
            <ChatWidget />
            <SiteFooter />
        </Router>
    }
}
