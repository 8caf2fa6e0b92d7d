//! DOM overlays around the canvas: instruction prompt, loading indicator,
//! section panel and the top navigation bar.

use crate::core::layout::css_hex;
use crate::core::panels::{panel_content, PanelContent};
use crate::core::{LoadProgress, Section};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn set_prompt(document: &web::Document, text: Option<&str>) {
    if let Some(el) = html_element(document, "prompt") {
        match text {
            Some(t) => {
                if el.text_content().as_deref() != Some(t) {
                    el.set_text_content(Some(t));
                }
                dom::set_visible(&el, true);
            }
            None => dom::set_visible(&el, false),
        }
    }
}

pub fn update_loader(document: &web::Document, progress: &LoadProgress) {
    if let Some(el) = html_element(document, "loader") {
        el.set_text_content(Some(&progress.label()));
        dom::set_visible(&el, true);
    }
}

pub fn hide_loader(document: &web::Document) {
    if let Some(el) = html_element(document, "loader") {
        dom::set_visible(&el, false);
    }
}

fn panel_html(content: &PanelContent) -> String {
    let accent = css_hex(content.accent);
    let mut html = format!(
        "<h2 class='panel-title' style='color:{}'>{}</h2>",
        accent, content.title
    );
    for p in content.paragraphs {
        html.push_str(&format!("<p>{}</p>", p));
    }
    if !content.links.is_empty() {
        html.push_str("<ul class='panel-links'>");
        for link in content.links {
            html.push_str(&format!(
                "<li><span class='link-label' style='color:{}'>{}</span>\
                 <a href='{}' target='_blank' rel='noopener noreferrer'>{}</a></li>",
                accent, link.label, link.href, link.text
            ));
        }
        html.push_str("</ul>");
    }
    html
}

pub fn show_panel(document: &web::Document, section: Section) {
    let content = panel_content(section);
    if let Some(body) = document.get_element_by_id("panel-body") {
        body.set_inner_html(&panel_html(content));
    }
    if let Some(card) = html_element(document, "panel-card") {
        dom::set_style(&card, "border-color", &css_hex(content.accent));
    }
    if let Some(el) = html_element(document, "panel-overlay") {
        dom::set_visible(&el, true);
    }
    set_active_nav(document, Some(section));
}

pub fn hide_panel(document: &web::Document) {
    if let Some(el) = html_element(document, "panel-overlay") {
        dom::set_visible(&el, false);
    }
    set_active_nav(document, None);
}

/// Highlight the navigation bar entry for the open section, if any.
pub fn set_active_nav(document: &web::Document, active: Option<Section>) {
    for s in Section::ALL {
        if let Some(el) = document.get_element_by_id(&format!("nav-{}", s.slug())) {
            let cl = el.class_list();
            if active == Some(s) {
                _ = cl.add_1("active");
            } else {
                _ = cl.remove_1("active");
            }
        }
    }
}

pub fn set_nav_bar_visible(document: &web::Document, visible: bool) {
    if let Some(el) = html_element(document, "site-nav") {
        dom::set_visible(&el, visible);
    }
}
