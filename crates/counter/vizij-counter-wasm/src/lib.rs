use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_counter_core::{
    bake_counter, BakingConfig, Config, CounterConfig, CounterId, Easing, EasingFn, Engine,
    Inputs, Outputs,
};

#[wasm_bindgen]
pub struct VizijCounter {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn parse_counter_config(cfg: JsValue) -> Result<CounterConfig, JsError> {
    if jsvalue_is_undefined_or_null(&cfg) {
        return Err(JsError::new("counter config is null/undefined"));
    }
    swb::from_value(cfg).map_err(|e| JsError::new(&format!("counter config error: {e}")))
}

/// Custom easing backed by a JS function `(t: number) => number`.
struct JsEasing {
    f: Function,
}

impl EasingFn for JsEasing {
    fn ease(&self, t: f64) -> f64 {
        // A throwing or non-numeric easing degrades to linear progress.
        match self.f.call1(&JsValue::UNDEFINED, &JsValue::from_f64(t)) {
            Ok(val) => val.as_f64().unwrap_or(t),
            Err(_) => t,
        }
    }
}

#[wasm_bindgen]
impl VizijCounter {
    /// Create a new engine instance. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new VizijCounter({ max_frames_per_tick: 256 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VizijCounter, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(VizijCounter {
            core: Engine::new(cfg),
        })
    }

    /// Create a counter from widget props, e.g.
    /// `{ start: 0, end: 99, duration: 1000, locale: "en", easing: "easeOut" }`.
    /// Returns a counter id (u32).
    #[wasm_bindgen(js_name = create_counter)]
    pub fn create_counter(&mut self, cfg: JsValue) -> Result<u32, JsError> {
        let cfg = parse_counter_config(cfg)?;
        let id = self
            .core
            .create_counter(&cfg)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(id.0)
    }

    /// Create a counter whose easing is the JS function `easing(t) -> number`.
    /// Any `easing` field in `cfg` is ignored.
    #[wasm_bindgen(js_name = create_counter_with_easing)]
    pub fn create_counter_with_easing(
        &mut self,
        cfg: JsValue,
        easing: Function,
    ) -> Result<u32, JsError> {
        let cfg = parse_counter_config(cfg)?;
        let id = self
            .core
            .create_counter_with_easing(&cfg, Easing::custom(JsEasing { f: easing }))
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(id.0)
    }

    #[wasm_bindgen(js_name = remove_counter)]
    pub fn remove_counter(&mut self, id: u32) -> Result<(), JsError> {
        self.core
            .remove_counter(CounterId(id))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Apply a trigger immediately. Resulting events are reported by the next `update`.
    #[wasm_bindgen(js_name = set_trigger)]
    pub fn set_trigger(&mut self, id: u32, trigger: bool) -> Result<(), JsError> {
        let counter = self
            .core
            .counter_mut(CounterId(id))
            .ok_or_else(|| JsError::new(&format!("unknown counter id {id}")))?;
        counter.set_trigger(trigger);
        Ok(())
    }

    /// Step all counters by `dt_ms` with optional inputs JSON (`{ commands: [...] }`).
    /// Returns Outputs JSON (`{ frames, events }`).
    #[wasm_bindgen]
    pub fn update(&mut self, dt_ms: f64, inputs_json: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out: &Outputs = self.core.update(dt_ms, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Current surfaces (text + classes) for one counter.
    #[wasm_bindgen]
    pub fn view(&self, id: u32) -> Result<JsValue, JsError> {
        let view = self
            .core
            .view(CounterId(id))
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(&view).map_err(|e| JsError::new(&format!("view error: {e}")))
    }

    /// Current display text for one counter, or undefined when unknown.
    #[wasm_bindgen]
    pub fn text(&self, id: u32) -> Option<String> {
        self.core
            .counter(CounterId(id))
            .map(|c| c.text().to_string())
    }
}

/// Bake one run of a counter config at a frame rate. `baking` is optional
/// (`{ frame_rate: 60 }` by default).
#[wasm_bindgen]
pub fn bake(cfg: JsValue, baking: JsValue) -> Result<JsValue, JsError> {
    let cfg = parse_counter_config(cfg)?;
    let baking: BakingConfig = if jsvalue_is_undefined_or_null(&baking) {
        BakingConfig::default()
    } else {
        swb::from_value(baking).map_err(|e| JsError::new(&format!("baking config error: {e}")))?
    };
    let baked = bake_counter(&cfg, &baking).map_err(|e| JsError::new(&e.to_string()))?;
    swb::to_value(&baked).map_err(|e| JsError::new(&format!("bake output error: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
