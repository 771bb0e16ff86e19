//! Read-only code viewer

use hunt_review_core::EditorMode;
use leptos::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = hljs, js_name = highlightElement)]
    fn highlight_element(element: &web_sys::HtmlElement) -> Result<(), JsValue>;
}

/// Syntax-highlighted source with line numbers.
///
/// `language` is the backend's language tag; it is mapped to an editor
/// mode before highlighting.
#[component]
pub fn CodeViewer(
    #[prop(into)] code: String,
    #[prop(into)] language: String,
    #[prop(default = true)] read_only: bool,
    #[prop(into, default = "500px".to_string())] height: String,
) -> impl IntoView {
    let mode = EditorMode::from_lang(&language);
    let code_ref = create_node_ref::<html::Code>();

    create_effect(move |_| {
        if let Some(element) = code_ref.get() {
            if let Err(e) = highlight_element(&element) {
                tracing::debug!("highlight.js unavailable: {:?}", e);
            }
        }
    });

    let editable = (!read_only).to_string();
    let gutter = (1..=code.lines().count().max(1))
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    view! {
        <div
            class="rounded-lg overflow-auto bg-gray-900 text-gray-100 text-base font-mono"
            style=format!("height: {}; width: 100%;", height)
            data-mode=mode.as_str()
        >
            <div class="flex min-h-full">
                <pre class="select-none text-right text-gray-500 px-3 py-2">{gutter}</pre>
                <pre class="flex-1 px-3 py-2">
                    <code
                        node_ref=code_ref
                        class=mode.highlight_class()
                        contenteditable=editable
                        spellcheck="false"
                    >
                        {code}
                    </code>
                </pre>
            </div>
        </div>
    }
}
