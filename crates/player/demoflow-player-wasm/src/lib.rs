use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use demoflow_player_core::{
    parse_stored_script_json, Config, Inputs, Outputs, PlayerSnapshot, StepPlayer,
};

/// One demo screen's player. Each screen constructs its own instance and
/// discards it on unmount; nothing is shared between players.
#[wasm_bindgen]
pub struct DemoPlayer {
    core: StepPlayer,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl DemoPlayer {
    /// Create a player from stored demo-script JSON. Pass a JSON config
    /// object or undefined/null for defaults.
    /// Example:
    ///   new DemoPlayer(script, { navigation: "visited_only" })
    #[wasm_bindgen(constructor)]
    pub fn new(script_json: JsValue, config: JsValue) -> Result<DemoPlayer, JsError> {
        console_error_panic_hook::set_once();

        if jsvalue_is_undefined_or_null(&script_json) {
            return Err(JsError::new("DemoPlayer: script_json is null/undefined"));
        }
        // Stringify the JS object so we can reuse the core parser (expects &str)
        let s = JSON::stringify(&script_json)
            .map_err(|e| JsError::new(&format!("DemoPlayer stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("DemoPlayer: stringify produced non-string"))?;
        let script = parse_stored_script_json(&s)
            .map_err(|e| JsError::new(&format!("script parse error: {e}")))?;

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        let core = StepPlayer::new(std::sync::Arc::new(script), cfg)
            .map_err(|e| JsError::new(&format!("script error: {e}")))?;
        Ok(DemoPlayer { core })
    }

    pub fn play(&mut self) {
        self.core.play();
    }

    pub fn pause(&mut self) {
        self.core.pause();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    #[wasm_bindgen(js_name = go_to_step)]
    pub fn go_to_step(&mut self, index: u32) {
        self.core.go_to_step(index as usize);
    }

    pub fn next(&mut self) {
        self.core.next();
    }

    pub fn previous(&mut self) {
        self.core.previous();
    }

    /// Step the player by dt (milliseconds) with inputs JSON. Returns
    /// Outputs JSON ({ events }).
    pub fn update(&mut self, dt_ms: u32, inputs_json: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out: &Outputs = self.core.update(dt_ms, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Read-only render state ({ current_index, elapsed_ms, status,
    /// step_count, sequence_progress, step_progress }).
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        let snap: PlayerSnapshot = self.core.snapshot();
        swb::to_value(&snap).map_err(|e| JsError::new(&format!("snapshot error: {e}")))
    }

    /// The step definitions, for rendering the step list.
    pub fn steps(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.script().steps)
            .map_err(|e| JsError::new(&format!("steps error: {e}")))
    }

    /// Nominal tick period the host interval should be scheduled at.
    #[wasm_bindgen(js_name = tick_interval_ms)]
    pub fn tick_interval_ms(&self) -> u32 {
        self.core.tick_interval_ms()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
