use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::dropdown::ProductDropdown;
use crate::catalog::search_bar::SearchBar;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <div class="top-bar">
            <span class="top-bar__phone">"+91 12345 67890"</span>
            <span class="top-bar__email">"info@hikotek.com"</span>
        </div>

        <nav class="main-header">
            <A href="/" attr:class="main-header__logo">
                <img src="/Hikotek_Logo.png" alt="Hikotek Logo" class="logo" />
            </A>
            <SearchBar />
        </nav>

        <div class="nav-center-bar">
            <div class="nav-center">
                <A href="/">"Home"</A>
                <A href="/about">"About Us"</A>
                <ProductDropdown />
                <A href="/contact">"Contact Us"</A>
                <A href="/distributor">"Distributor Apply"</A>
            </div>
        </div>
    }
}
