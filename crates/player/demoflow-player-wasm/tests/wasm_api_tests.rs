#![cfg(target_arch = "wasm32")]
use demoflow_player_wasm::{abi_version, DemoPlayer};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

// Minimal stored-script JSON matching the demoflow-player-core schema
fn test_script() -> JsValue {
    let json = r#"{
        "id": "demo",
        "name": "Business Fraud Check",
        "steps": [
            { "title": "Transaction Initiated", "duration": 3000 },
            { "title": "Risk Score Calculated", "duration": 4000 },
            { "title": "Decision Returned", "duration": 3000 }
        ]
    }"#;
    js_sys::JSON::parse(json).unwrap()
}

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let player = DemoPlayer::new(test_script(), JsValue::UNDEFINED);
    assert!(player.is_ok());
}

#[wasm_bindgen_test]
fn play_tick_and_snapshot() {
    let mut player = DemoPlayer::new(test_script(), JsValue::NULL).unwrap();
    player.play();

    let outputs = player.update(3000, JsValue::UNDEFINED).unwrap();
    let events = js_sys::Reflect::get(&outputs, &JsValue::from_str("events")).unwrap();
    assert!(js_sys::Array::is_array(&events));

    let snap = player.snapshot().unwrap();
    let idx = js_sys::Reflect::get(&snap, &JsValue::from_str("current_index")).unwrap();
    assert_eq!(idx.as_f64(), Some(1.0));
    let status = js_sys::Reflect::get(&snap, &JsValue::from_str("status")).unwrap();
    assert_eq!(status.as_string().as_deref(), Some("playing"));
}

#[wasm_bindgen_test]
fn steps_are_exposed_for_rendering() {
    let player = DemoPlayer::new(test_script(), JsValue::UNDEFINED).unwrap();
    let steps = player.steps().unwrap();
    let arr = js_sys::Array::from(&steps);
    assert_eq!(arr.length(), 3);
}

// Negative/error-path tests

/// it should error cleanly when the script JSON is malformed
#[wasm_bindgen_test]
fn malformed_script_errors() {
    let bad = JsValue::from_str("not-a-script");
    let res = DemoPlayer::new(bad, JsValue::UNDEFINED);
    assert!(res.is_err());
}

/// it should error cleanly when a step has zero duration
#[wasm_bindgen_test]
fn zero_duration_script_errors() {
    let json = r#"{ "name": "bad", "steps": [ { "title": "t", "duration": 0 } ] }"#;
    let script = js_sys::JSON::parse(json).unwrap();
    let res = DemoPlayer::new(script, JsValue::UNDEFINED);
    assert!(res.is_err());
}

/// it should error cleanly when config is not an object
#[wasm_bindgen_test]
fn invalid_config_errors() {
    let res = DemoPlayer::new(test_script(), JsValue::from_f64(123.0));
    assert!(res.is_err());
}
