// driver.rs - Frame loop wired to the browser
//
// One requestAnimationFrame callback that re-arms itself, a window
// resize handler that refits the canvas, and a mousemove handler that
// only records the pointer for the next frame. `stop` (or drop) revokes
// all three.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::config::SceneConfig;
use crate::error::SetupError;
use crate::render::Renderer;
use crate::sim::{Pointer, Scene};

/// Bookkeeping for the single outstanding frame request
#[derive(Debug)]
pub struct Schedule {
    pending: Option<i32>,
    running: bool,
}

impl Schedule {
    pub fn new() -> Self {
        Self { pending: None, running: true }
    }

    pub fn armed(&mut self, id: i32) {
        self.pending = Some(id);
    }

    /// Record the next frame request. A refused request ends the loop.
    pub fn rearm<E>(&mut self, request: Result<i32, E>) -> Result<(), E> {
        match request {
            Ok(id) => {
                self.armed(id);
                Ok(())
            }
            Err(e) => {
                self.halt();
                Err(e)
            }
        }
    }

    /// The host delivered a frame. Returns whether it should run.
    pub fn fire(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    /// Stop for good; hands back the request that still needs cancelling
    pub fn halt(&mut self) -> Option<i32> {
        self.running = false;
        self.pending.take()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

struct Stage {
    scene: Scene,
    renderer: Renderer,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    schedule: Schedule,
}

impl Stage {
    fn frame(&mut self, pointer: Pointer) {
        let eaten = self.scene.tick(pointer);
        if eaten > 0 {
            // Pickup sound would go here
            log::trace!("frame {}: {} coin(s)", self.scene.frame(), eaten);
        }
        self.renderer.draw(&self.scene, &mut self.ctx);
    }

    /// Match the backing store to the displayed size
    fn fit(&mut self) {
        let w = self.canvas.client_width().max(0) as u32;
        let h = self.canvas.client_height().max(0) as u32;
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.scene.resize(w, h);
        log::info!("canvas resized to {w}x{h}");
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameDriver {
    window: Window,
    stage: Rc<RefCell<Stage>>,
    tick: FrameCallback,
    on_resize: Option<Closure<dyn FnMut()>>,
    on_pointer: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl FrameDriver {
    /// Fit the canvas, hook resize and pointer, request the first frame.
    /// On error nothing stays registered.
    pub fn start(canvas: HtmlCanvasElement, config: SceneConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(SetupError::host)?
            .ok_or(SetupError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext)?;

        let pointer = Rc::new(Cell::new(Pointer::default()));
        let stage = Rc::new(RefCell::new(Stage {
            scene: Scene::new(0, 0, config.clone()),
            renderer: Renderer::new(&config),
            canvas: canvas.clone(),
            ctx,
            schedule: Schedule::new(),
        }));
        stage.borrow_mut().fit();

        let on_resize = {
            let stage = stage.clone();
            Closure::<dyn FnMut()>::new(move || stage.borrow_mut().fit())
        };

        let on_pointer = {
            let pointer = pointer.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                pointer.set(Pointer {
                    x: (e.client_x() as f64 - rect.left()) as f32,
                    y: (e.client_y() as f64 - rect.top()) as f32,
                });
            })
        };

        let tick: FrameCallback = Rc::new(RefCell::new(None));
        let rearm = tick.clone();
        let frame_stage = stage.clone();
        let frame_window = window.clone();
        *tick.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            let mut stage = frame_stage.borrow_mut();
            if !stage.schedule.fire() { return; }

            stage.frame(pointer.get());

            if let Some(cb) = rearm.borrow().as_ref() {
                let request = frame_window.request_animation_frame(cb.as_ref().unchecked_ref());
                if let Err(e) = stage.schedule.rearm(request) {
                    log::error!("frame request failed, loop stopped: {e:?}");
                }
            }
        }));

        let mut driver = Self {
            window,
            stage,
            tick,
            on_resize: Some(on_resize),
            on_pointer: Some(on_pointer),
        };
        // Dropping `driver` on error unhooks whatever did get registered
        driver.attach()?;
        log::info!("pig animation mounted");
        Ok(driver)
    }

    fn attach(&mut self) -> Result<(), SetupError> {
        if let Some(cb) = &self.on_resize {
            self.window
                .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
                .map_err(SetupError::host)?;
        }
        if let Some(cb) = &self.on_pointer {
            self.window
                .add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref())
                .map_err(SetupError::host)?;
        }

        let id = match self.tick.borrow().as_ref() {
            Some(cb) => self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(SetupError::host)?,
            None => return Err(SetupError::Host("frame callback missing".into())),
        };
        self.stage.borrow_mut().schedule.armed(id);
        Ok(())
    }

    /// Cancel the pending frame and remove both listeners. Idempotent.
    pub fn stop(&mut self) {
        let pending = self.stage.borrow_mut().schedule.halt();
        if let Some(id) = pending {
            let _ = self.window.cancel_animation_frame(id);
        }

        if let Some(cb) = self.on_resize.take() {
            self.unlisten("resize", cb.as_ref().unchecked_ref());
        }
        if let Some(cb) = self.on_pointer.take() {
            self.unlisten("mousemove", cb.as_ref().unchecked_ref());
        }
        // Breaks the callback's reference to itself
        if self.tick.borrow_mut().take().is_some() {
            log::info!("pig animation unmounted");
        }
    }

    fn unlisten(&self, event: &str, cb: &Function) {
        if let Err(e) = self.window.remove_event_listener_with_callback(event, cb) {
            log::warn!("could not remove {event} listener: {e:?}");
        }
    }

    pub fn is_running(&self) -> bool {
        self.stage.borrow().schedule.is_running()
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
