//! The only place that writes to the live document.

use std::fmt::Display;
use log::{error, warn};
use shared::{DomOp, DomTarget, Notice, PageUpdate};
use wasm_bindgen::JsValue;
use web_sys::{window, Element};

trait Render: Display {
    fn write_into(&self, element: &Element) {
        element.set_inner_html(&self.to_string());
    }
}

impl<T: Display> Render for T {}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn element(target: DomTarget) -> Option<Element> {
    let element = window()?.document()?.get_element_by_id(target.id());
    if element.is_none() {
        warn!("#{} not found, skipping write", target.id());
    }
    element
}

fn apply_op(op: &DomOp) {
    match op {
        DomOp::Replace { target, markup } => {
            if let Some(element) = element(*target) {
                markup.write_into(&element);
            }
        }
        DomOp::AddClass { target, class } => {
            if let Some(element) = element(*target) {
                if let Err(e) = element.class_list().add_1(class) {
                    warn!("Failed to add class {} to #{}: {}", class, target.id(), describe(e));
                }
            }
        }
    }
}

pub fn show_notice(notice: &Notice) {
    match notice {
        Notice::Alert(message) => {
            let shown = window()
                .ok_or_else(|| JsValue::from_str("no window"))
                .and_then(|w| w.alert_with_message(message));
            if let Err(e) = shown {
                error!("Failed to show alert '{}': {}", message, describe(e));
            }
        }
        Notice::Console(message) => error!("{}", message),
    }
}

pub fn apply(update: &PageUpdate) {
    update.ops.iter().for_each(apply_op);
    update.notices.iter().for_each(show_notice);
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            warn!("Failed to open {}: {}", url, describe(e));
        }
    }
}
