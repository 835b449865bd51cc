//! Browser binding
//!
//! Thin wasm-bindgen wrapper around [`PizzaEngine`]. Rejected inputs return
//! `false` (the engine already logged why); piece views and events cross the
//! boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::{FrameClock, PizzaEngine, PizzaSize, Tuning};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("Console logger already set: {}", e);
    }
    log::info!("Pizza Toppings (web) starting...");
}

#[wasm_bindgen]
pub struct WebEngine {
    engine: PizzaEngine,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebEngine {
    /// Create an engine from optional tuning JSON and an optional layout seed
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>, seed: Option<f64>) -> Result<WebEngine, JsError> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(|e| JsError::new(&e.to_string()))?,
            None => Tuning::default(),
        };
        let engine = match seed {
            Some(seed) => PizzaEngine::with_seed(tuning, seed as u64),
            None => PizzaEngine::new(tuning),
        };
        Ok(WebEngine {
            engine,
            clock: FrameClock::new(),
        })
    }

    #[wasm_bindgen(js_name = selectTopping)]
    pub fn select_topping(&mut self, id: &str) -> bool {
        self.engine.select_topping(id).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = deselectTopping)]
    pub fn deselect_topping(&mut self, id: &str) -> bool {
        self.engine.deselect_topping(id).unwrap_or(false)
    }

    /// Returns the topping's new selection state
    #[wasm_bindgen(js_name = toggleTopping)]
    pub fn toggle_topping(&mut self, id: &str) -> bool {
        self.engine
            .toggle_topping(id)
            .unwrap_or_else(|_| self.engine.is_selected(id))
    }

    #[wasm_bindgen(js_name = setPizza)]
    pub fn set_pizza(&mut self, id: &str) -> bool {
        self.engine.set_pizza(id).unwrap_or(false)
    }

    /// Accepts "S"/"M"/"L" or "small"/"medium"/"large"
    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, size: &str) -> bool {
        match PizzaSize::from_str(size) {
            Some(size) => self.engine.set_size(size),
            None => {
                log::warn!("Ignoring unknown size '{}'", size);
                false
            }
        }
    }

    /// Advance the clock by a frame delta; fractions carry into the next call
    pub fn advance(&mut self, dt_ms: f64) {
        let whole_ms = self.clock.step(dt_ms);
        self.engine.advance(whole_ms);
    }

    /// Move the clock to an absolute time, e.g. a requestAnimationFrame timestamp
    #[wasm_bindgen(js_name = advanceTo)]
    pub fn advance_to(&mut self, now_ms: f64) {
        if !now_ms.is_finite() || now_ms < 0.0 {
            log::warn!("Ignoring clock time {}", now_ms);
            return;
        }
        self.clock.reset();
        self.engine.advance_to(now_ms as u64);
    }

    #[wasm_bindgen(js_name = piecesJson)]
    pub fn pieces_json(&self, id: &str) -> String {
        serde_json::to_string(&self.engine.pieces(id)).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(js_name = drainEventsJson)]
    pub fn drain_events_json(&mut self) -> String {
        serde_json::to_string(&self.engine.drain_events()).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(js_name = isToppingAnimating)]
    pub fn is_topping_animating(&self, id: &str) -> bool {
        self.engine.is_topping_animating(id)
    }

    #[wasm_bindgen(js_name = totalPrice)]
    pub fn total_price(&self) -> f64 {
        self.engine.total_price()
    }

    #[wasm_bindgen(js_name = sizeScale)]
    pub fn size_scale(&self) -> f32 {
        self.engine.size_scale()
    }

    #[wasm_bindgen(js_name = targetSizeScale)]
    pub fn target_size_scale(&self) -> f32 {
        self.engine.target_size_scale()
    }
}
