//! Browser shell: page geometry, keyboard, frame loop and element updates

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use super::ids;
use crate::Settings;
use crate::consts::SIM_DT;
use crate::sim::{
    ConfigError, Control, FixedStep, FrameView, GameState, InputMap, Rect, SimEvent, World,
};

/// Shell instance holding the simulation and the elements it drives
struct Shell {
    state: GameState,
    input: InputMap,
    stepper: FixedStep,
    last_time: Option<f64>,
    player_el: HtmlElement,
    bolt_el: HtmlElement,
}

impl Shell {
    /// Run the ticks owed for this frame and update the page
    fn frame(&mut self, time: f64) {
        let dt = match self.last_time {
            Some(last) => ((time - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(time);

        // One consistent snapshot for every tick of this frame
        let input = self.input.snapshot();
        let events = self.stepper.run(&mut self.state, &input, dt);
        self.render(&events);
    }

    fn render(&self, events: &[SimEvent]) {
        let view = FrameView::capture(&self.state);

        let (left, bottom) = view.player_anchor();
        set_px(&self.player_el, "left", left);
        set_px(&self.player_el, "bottom", bottom);

        for event in events {
            match event {
                SimEvent::BoltFired { .. } => set_style(&self.bolt_el, "display", "block"),
                SimEvent::BoltExpired { .. } => set_style(&self.bolt_el, "display", "none"),
                _ => {}
            }
        }
        if view.bolt_active {
            let (left, bottom) = view.bolt_anchor();
            set_px(&self.bolt_el, "left", left);
            set_px(&self.bolt_el, "bottom", bottom);
        }
    }
}

fn set_style(el: &HtmlElement, name: &str, value: &str) {
    let _ = el.style().set_property(name, value);
}

fn set_px(el: &HtmlElement, name: &str, value: f32) {
    set_style(el, name, &format!("{}px", value));
}

fn config_error(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", id)))
}

/// Read world bounds and platform rectangles relative to the game container
fn read_world(document: &Document) -> Result<World, JsValue> {
    let container = element(document, ids::CONTAINER)?;
    let origin = container.get_bounding_client_rect();

    let mut platforms = Vec::with_capacity(ids::PLATFORMS.len());
    for id in ids::PLATFORMS {
        let Ok(el) = element(document, id) else {
            log::warn!("Platform #{} not found, skipping", id);
            continue;
        };
        let rect = el.get_bounding_client_rect();
        platforms.push(Rect::new(
            (rect.left() - origin.left()) as f32,
            (rect.top() - origin.top()) as f32,
            el.offset_width() as f32,
            el.offset_height() as f32,
        ));
    }

    World::new(
        container.offset_width() as f32,
        container.offset_height() as f32,
        platforms,
    )
    .map_err(config_error)
}

fn setup_keyboard(document: &Document, shell: Rc<RefCell<Shell>>) {
    {
        let shell = shell.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut shell = shell.borrow_mut();
            if shell.input.key_down(&event.key()) == Some(Control::Fire) {
                shell.state.request_fire();
            }
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        shell.borrow_mut().input.key_up(&event.key());
    });
    let _ = document
        .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_release_on_blur(shell: Rc<RefCell<Shell>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        shell.borrow_mut().input.release_all();
        log::info!("Released held keys (window blur)");
    });
    let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_animation_frame(shell: Rc<RefCell<Shell>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        shell.borrow_mut().frame(time);
        request_animation_frame(shell);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Bind to the page and start the frame loop
pub fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let settings = Settings::load();

    let world = read_world(&document)?;
    let player_el = element(&document, ids::PLAYER)?;
    let bolt_el = element(&document, ids::BOLT)?;

    // Entity sizes come from the stylesheet when it sets them
    let mut tuning = settings.effective_tuning();
    if player_el.offset_width() > 0 && player_el.offset_height() > 0 {
        tuning.player_width = player_el.offset_width() as f32;
        tuning.player_height = player_el.offset_height() as f32;
    }
    if bolt_el.offset_width() > 0 && bolt_el.offset_height() > 0 {
        tuning.bolt_width = bolt_el.offset_width() as f32;
        tuning.bolt_height = bolt_el.offset_height() as f32;
    }
    set_style(&bolt_el, "display", "none");

    let state = GameState::new(world, tuning).map_err(config_error)?;
    let shell = Rc::new(RefCell::new(Shell {
        state,
        input: InputMap::new(settings.bindings.clone()),
        stepper: FixedStep::default(),
        last_time: None,
        player_el,
        bolt_el,
    }));

    setup_keyboard(&document, shell.clone());
    if settings.release_keys_on_blur {
        setup_release_on_blur(shell.clone());
    }
    request_animation_frame(shell);

    log::info!("Bolt Jumper running!");
    Ok(())
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = run() {
        log::error!("Failed to start: {:?}", e);
    }
}
