use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Query string of the current page, including the leading `?`.
#[inline]
pub fn location_search() -> Option<String> {
    web::window().and_then(|w| w.location().search().ok())
}

#[inline]
pub fn input_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Call `handler` with the element's current value on every `input` event.
/// Returns false when no `<input>` with that id exists.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) -> bool {
    let Some(input) = input_by_id(document, element_id) else {
        return false;
    };
    let target = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        handler(target.value());
    }) as Box<dyn FnMut(web::Event)>);
    let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

#[inline]
pub fn set_inner_html(element: &web::Element, html: &str) {
    element.set_inner_html(html);
}
