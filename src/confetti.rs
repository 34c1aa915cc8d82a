use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use folio_core::{ConfettiConfig, ConfettiRun, ConfettiSurface, FrameOutcome, RunSlot};

use crate::scheduler::now_ms;

pub(crate) struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub(crate) fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl ConfettiSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_square(&mut self, x: f64, y: f64, angle: f64, size: f64, color: &str) {
        self.ctx.save();
        let _ = self.ctx.translate(x, y);
        let _ = self.ctx.rotate(angle);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(-size / 2.0, -size / 2.0, size, size);
        self.ctx.restore();
    }
}

/// Owns the shared confetti canvas. Starting a run supersedes whatever run
/// is still animating on it.
pub(crate) struct ConfettiHost {
    config: ConfettiConfig,
    canvas: RefCell<Option<HtmlCanvasElement>>,
    slot: RunSlot,
    frame: RefCell<Option<AnimationFrame>>,
    runs_started: Cell<u64>,
}

impl ConfettiHost {
    pub(crate) fn new(config: ConfettiConfig) -> Rc<Self> {
        Rc::new(Self {
            config,
            canvas: RefCell::new(None),
            slot: RunSlot::new(),
            frame: RefCell::new(None),
            runs_started: Cell::new(0),
        })
    }

    pub(crate) fn attach(&self, canvas: Option<HtmlCanvasElement>) {
        if canvas.is_none() {
            self.frame.borrow_mut().take();
            self.slot.cancel();
        }
        *self.canvas.borrow_mut() = canvas;
    }

    pub(crate) fn start(self: &Rc<Self>) {
        let Some(canvas) = self.canvas.borrow().clone() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        canvas.set_width(width.max(0.0) as u32);
        canvas.set_height(height.max(0.0) as u32);
        let Some(surface) = CanvasSurface::new(&canvas) else {
            gloo::console::warn!("confetti: 2d context unavailable");
            return;
        };
        let started = now_ms();
        let count = self.runs_started.get().wrapping_add(1);
        self.runs_started.set(count);
        let seed = started.to_bits() ^ count.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let run = ConfettiRun::new(self.config, width, height, started, seed, self.slot.begin());
        self.frame.borrow_mut().take();
        self.step(run, surface);
    }

    fn step(self: &Rc<Self>, mut run: ConfettiRun, mut surface: CanvasSurface) {
        match run.frame(&mut surface, now_ms()) {
            FrameOutcome::Continue => {
                let host = Rc::clone(self);
                let handle = request_animation_frame(move |_| {
                    host.step(run, surface);
                });
                *self.frame.borrow_mut() = Some(handle);
            }
            FrameOutcome::Finished => {
                let (width, height) = run.size();
                surface.clear(width, height);
                self.frame.borrow_mut().take();
            }
            FrameOutcome::Superseded => {}
        }
    }
}
