//! Browser platform: requestAnimationFrame scheduling and the game-over overlay

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use super::scheduler::{FrameHandle, Scheduler};
use crate::consts::GAME_OVER_MESSAGE;
use crate::sim::GameOverSink;

/// [`Scheduler`] on top of `requestAnimationFrame`
///
/// Each animation-frame callback invokes `on_frame` with the handle it was
/// requested under, so the loop can tell stale frames apart.
pub struct RafScheduler {
    window: Window,
    on_frame: Rc<dyn Fn(FrameHandle)>,
    next_id: u32,
    /// Our handle -> browser request id
    pending: Vec<(FrameHandle, i32)>,
}

impl RafScheduler {
    pub fn new(window: Window, on_frame: impl Fn(FrameHandle) + 'static) -> Self {
        Self {
            window,
            on_frame: Rc::new(on_frame),
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl Scheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);

        // The loop keeps one request outstanding; older entries already fired
        self.pending.clear();

        let on_frame = self.on_frame.clone();
        let closure = Closure::once_into_js(move |_time: f64| {
            on_frame(handle);
        });
        match self.window.request_animation_frame(closure.unchecked_ref()) {
            Ok(id) => {
                self.pending.push((handle, id));
                Some(handle)
            }
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(idx) = self.pending.iter().position(|(h, _)| *h == handle) {
            let (_, id) = self.pending.remove(idx);
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}

/// Shows the `#game-over` element, creating it if the page lacks one
pub struct DomGameOver {
    document: Document,
}

impl DomGameOver {
    const ELEMENT_ID: &'static str = "game-over";

    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self) -> Option<web_sys::Element> {
        if let Some(el) = self.document.get_element_by_id(Self::ELEMENT_ID) {
            return Some(el);
        }
        let el = self.document.create_element("div").ok()?;
        el.set_id(Self::ELEMENT_ID);
        let body = self.document.body()?;
        body.append_child(&el).ok()?;
        Some(el)
    }
}

impl GameOverSink for DomGameOver {
    fn game_over(&mut self) {
        match self.element() {
            Some(el) => {
                el.set_inner_html(&format!("<h1>{}</h1>", GAME_OVER_MESSAGE));
                let _ = el.set_attribute("class", "");
            }
            None => log::warn!("no document body for game-over message"),
        }
    }

    fn reset(&mut self) {
        if let Some(el) = self.document.get_element_by_id(Self::ELEMENT_ID) {
            let _ = el.set_attribute("class", "hidden");
        }
    }
}
