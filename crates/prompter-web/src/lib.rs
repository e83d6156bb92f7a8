pub mod runner;

pub use runner::PrompterRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<PrompterRunner>> = RefCell::new(None);
}

/// Run `f` against the runner, creating a default one if `prompter_init` hasn't run yet.
fn with_runner<R>(f: impl FnOnce(&mut PrompterRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.get_or_insert_with(PrompterRunner::default);
        f(runner)
    })
}

#[wasm_bindgen]
pub fn prompter_init(config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = PrompterRunner::default();
    if !config_json.trim().is_empty() {
        runner.load_config(config_json);
    }

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("prompter: initialized");
}

#[wasm_bindgen]
pub fn prompter_tick(now_ms: f64) {
    with_runner(|r| r.tick(now_ms));
}

// ---- Config ----

#[wasm_bindgen]
pub fn prompter_load_config(json: &str) -> bool {
    with_runner(|r| r.load_config(json))
}

#[wasm_bindgen]
pub fn prompter_config_json() -> String {
    with_runner(|r| r.config_json())
}

// ---- Controls ----

#[wasm_bindgen]
pub fn prompter_set_text(text: &str) {
    with_runner(|r| r.set_text(text));
}

#[wasm_bindgen]
pub fn prompter_set_font_size(font_size: f32) {
    with_runner(|r| r.set_font_size(font_size));
}

#[wasm_bindgen]
pub fn prompter_set_speed(points_per_second: f32) {
    with_runner(|r| r.set_speed(points_per_second));
}

#[wasm_bindgen]
pub fn prompter_set_fade_fraction(fraction: f32) {
    with_runner(|r| r.set_fade_fraction(fraction));
}

#[wasm_bindgen]
pub fn prompter_set_running(running: bool) {
    with_runner(|r| r.set_running(running));
}

#[wasm_bindgen]
pub fn prompter_set_hovering(hovering: bool) {
    with_runner(|r| r.set_hovering(hovering));
}

#[wasm_bindgen]
pub fn prompter_set_session_started(started: bool) {
    with_runner(|r| r.set_session_started(started));
}

#[wasm_bindgen]
pub fn prompter_reset() {
    with_runner(|r| r.reset());
}

/// Pass a negative distance to use the configured one.
#[wasm_bindgen]
pub fn prompter_jump_back(distance: f32) {
    with_runner(|r| r.jump_back(distance));
}

// ---- Layout ----

#[wasm_bindgen]
pub fn prompter_set_viewport_size(width: f32, height: f32) {
    with_runner(|r| r.set_viewport_size(width, height));
}

#[wasm_bindgen]
pub fn prompter_report_content_height(height: f32) {
    with_runner(|r| r.report_content_height(height));
}

// ---- Frame accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_frame_floats() -> u32 {
    with_runner(|r| r.frame_floats())
}

#[wasm_bindgen]
pub fn get_offset_y() -> f32 {
    with_runner(|r| r.offset_y())
}

#[wasm_bindgen]
pub fn get_copy_count() -> u32 {
    with_runner(|r| r.copy_count())
}

#[wasm_bindgen]
pub fn get_placeholder_message() -> String {
    with_runner(|r| r.placeholder_message())
}
