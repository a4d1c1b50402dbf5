use web_sys as web;

// Tap-to-start overlay. Browsers gate speech output behind a user gesture,
// so the viewer stays covered until the first tap. Visibility is driven by
// both the `hidden` class and the style attribute; the overlay must work
// even when the stylesheet is absent.

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}
