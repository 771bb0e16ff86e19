//! Single-pin location map

use hunt_review_core::map::{MapView, ATTRIBUTION, MAP_HEIGHT_PX};
use leptos::*;

#[component]
pub fn MapWidget(latitude: f64, longitude: f64) -> impl IntoView {
    let map = MapView::new(latitude, longitude);

    view! {
        <div class="mt-2">
            <iframe
                title="Hunt location"
                src=map.embed_url()
                style=format!("height: {}px; width: 100%; border: 0;", MAP_HEIGHT_PX)
                loading="lazy"
            ></iframe>
            <div class="flex justify-between text-xs text-gray-500 mt-1">
                <span>{ATTRIBUTION}</span>
                <a
                    href=map.link_url()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-indigo-600 hover:underline"
                >
                    "View larger map"
                </a>
            </div>
        </div>
    }
}
