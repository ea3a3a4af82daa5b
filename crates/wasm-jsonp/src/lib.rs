//! WASM JSONP Requests
//!
//! Cross-origin reads through script injection.
//! Each request registers a uniquely named global callback, appends
//! `callback=<name>` to the URL and injects a `<script>` pointing at it.
//! The payload arrives through the callback; a failed script load
//! arrives through the element's `error` event. A script that loads
//! without calling the callback settles the request at its `load` event.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Query parameter the server reads the callback name from
pub const DEFAULT_CALLBACK_PARAM: &str = "callback";

const CALLBACK_PREFIX: &str = "__jsonp_cb_";

thread_local! {
    static NEXT_CALLBACK_ID: Cell<u32> = const { Cell::new(0) };
}

/// Why a JSONP request produced no payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonpError {
    #[error("no browser window or document available")]
    NoWindow,
    #[error("could not inject request script: {0}")]
    Dom(String),
    #[error("request script failed to load")]
    Load,
    #[error("response loaded without calling the callback")]
    NoCallback,
    #[error("request dropped before a response arrived")]
    Abandoned,
}

impl JsonpError {
    /// Short status text, in the vocabulary browsers use for failed requests
    pub fn status(&self) -> &'static str {
        match self {
            JsonpError::Abandoned => "abort",
            JsonpError::NoCallback => "parsererror",
            _ => "error",
        }
    }
}

/// Allocate a global callback name not used by any earlier request on this thread
pub fn next_callback_name() -> String {
    let id = NEXT_CALLBACK_ID.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    });
    format!("{}{}", CALLBACK_PREFIX, id)
}

/// Append the callback parameter to a URL that may already carry a query
pub fn with_callback(url: &str, param: &str, name: &str) -> String {
    let (base, fragment) = match url.find('#') {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    };
    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };
    format!("{}{}{}={}{}", base, separator, param, name, fragment)
}

/// Issue one JSONP read using [`DEFAULT_CALLBACK_PARAM`]
pub async fn request(url: &str) -> Result<JsValue, JsonpError> {
    request_with(url, DEFAULT_CALLBACK_PARAM).await
}

/// Issue one JSONP read, naming the callback through `callback_param`
///
/// The future resolves when the callback fires, the script fails to load,
/// or the script finishes loading without having called the callback.
/// There is no timeout. Dropping the future unregisters the callback and
/// removes the script element.
pub async fn request_with(url: &str, callback_param: &str) -> Result<JsValue, JsonpError> {
    let window = web_sys::window().ok_or(JsonpError::NoWindow)?;
    let document = window.document().ok_or(JsonpError::NoWindow)?;

    let (tx, rx) = oneshot::channel::<Result<JsValue, JsonpError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_data = {
        let tx = tx.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |data: JsValue| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(data));
            }
        })
    };
    let on_error = {
        let tx = tx.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(JsonpError::Load));
            }
        })
    };

    // Scripts run before their load event, so a sender still present here
    // means the response never called back.
    let on_load = {
        let tx = tx.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(JsonpError::NoCallback));
            }
        })
    };

    let mut pending = Pending {
        window: window.clone(),
        name: next_callback_name(),
        script: None,
        on_data,
        on_error,
        on_load,
    };

    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(&pending.name),
        pending.on_data.as_ref().unchecked_ref(),
    )
    .map_err(dom_error)?;

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")
        .map_err(dom_error)?
        .dyn_into()
        .map_err(|_| JsonpError::Dom("created element is not a script".to_string()))?;
    script.set_async(true);
    script.set_onerror(Some(pending.on_error.as_ref().unchecked_ref()));
    script.set_onload(Some(pending.on_load.as_ref().unchecked_ref()));
    script.set_src(&with_callback(url, callback_param, &pending.name));

    let parent: web_sys::Node = match document.head() {
        Some(head) => head.into(),
        None => document.body().ok_or(JsonpError::NoWindow)?.into(),
    };
    parent.append_child(&script).map_err(dom_error)?;
    pending.script = Some(script);

    rx.await.unwrap_or(Err(JsonpError::Abandoned))
}

/// Registered callback and injected script for one in-flight request
///
/// Cleanup happens on drop so that every exit path, including a dropped
/// future, leaves no global or element behind.
struct Pending {
    window: web_sys::Window,
    name: String,
    script: Option<web_sys::HtmlScriptElement>,
    on_data: Closure<dyn FnMut(JsValue)>,
    on_error: Closure<dyn FnMut(web_sys::Event)>,
    on_load: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for Pending {
    fn drop(&mut self) {
        if let Some(script) = self.script.take() {
            script.set_onerror(None);
            script.set_onload(None);
            script.remove();
        }
        let _ = js_sys::Reflect::delete_property(&self.window, &JsValue::from_str(&self.name));
    }
}

fn dom_error(err: JsValue) -> JsonpError {
    JsonpError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
