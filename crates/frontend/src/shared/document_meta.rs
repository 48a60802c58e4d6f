//! `<title>`, `<meta name="description">` и `<link rel="canonical">`.

use contracts::shared::seo::SeoContent;
use web_sys::{window, Document};

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn apply_seo(seo: &SeoContent, canonical_path: &str) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(&seo.meta_title);
    set_head_element(&doc, "meta[name=\"description\"]", "meta", &[
        ("name", "description"),
        ("content", &seo.meta_description),
    ]);

    let canonical = window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}{}", origin, canonical_path))
        .unwrap_or_else(|| canonical_path.to_string());
    set_head_element(&doc, "link[rel=\"canonical\"]", "link", &[
        ("rel", "canonical"),
        ("href", &canonical),
    ]);
}

pub fn set_title(title: &str) {
    if let Some(doc) = document() {
        doc.set_title(title);
    }
}

/// Updates the first element matching `selector`, creating it in `<head>`
/// when missing.
fn set_head_element(doc: &Document, selector: &str, tag: &str, attrs: &[(&str, &str)]) {
    let element = match doc.query_selector(selector).ok().flatten() {
        Some(el) => el,
        None => {
            let Ok(el) = doc.create_element(tag) else {
                return;
            };
            let Some(head) = doc.head() else {
                return;
            };
            if head.append_child(&el).is_err() {
                return;
            }
            el
        }
    };
    for (name, value) in attrs {
        if let Err(e) = element.set_attribute(name, value) {
            log::warn!("Cannot set {} on {}: {:?}", name, tag, e);
        }
    }
}
