//! About page. Content is editable server-side; when the endpoint is down
//! the page falls back to built-in copy instead of showing an error.

use contracts::content::AboutContent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::content::api::fetch_about;

const FALLBACK_TITLE: &str = "About Hikotek";
const FALLBACK_TAGLINE: &str = "Precision instruments, global reach";
const FALLBACK_PROFILE: &str = "Hikotek designs and distributes test and \
measurement instruments for laboratories, industry and education. Our product \
range covers oscilloscopes, multimeters, power supplies, environmental \
monitoring and laboratory equipment, backed by a worldwide distributor \
network and responsive technical support.";

#[component]
pub fn AboutPage() -> impl IntoView {
    let (content, set_content) = signal(AboutContent::default());

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_about().await {
                Ok(about) => set_content.set(about),
                Err(e) => log::warn!("Failed to load about content: {}", e),
            }
        });
    });

    let title = move || {
        content.with(|c| c.title.clone().unwrap_or_else(|| FALLBACK_TITLE.to_string()))
    };
    let tagline = move || {
        content.with(|c| c.tagline.clone().unwrap_or_else(|| FALLBACK_TAGLINE.to_string()))
    };
    let profile = move || {
        content.with(|c| c.profile.clone().unwrap_or_else(|| FALLBACK_PROFILE.to_string()))
    };
    let banner = move || content.with(|c| c.banner_image.clone());

    view! {
        <div class="about-page">
            {move || {
                banner()
                    .map(|url| view! { <img class="about-page__banner" src=url alt="About Hikotek" /> })
            }}
            <h1>{title}</h1>
            <p class="about-page__tagline">{tagline}</p>
            <p class="about-page__profile">{profile}</p>
        </div>
    }
}
