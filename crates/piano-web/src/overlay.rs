use web_sys as web;

// The start overlay exists because browsers refuse to start an AudioContext
// without a user gesture; dismissing it resumes audio.

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let _ = el.set_attribute("style", "display:none");
    }
}
