// ============================================================================
// SLOTGRID — WASM Port
// WebAssembly bindings for the SlotGrid game core
// Runs the reel state machine in the browser behind a JS renderer
// ============================================================================

use wasm_bindgen::prelude::*;

mod audio;
mod game;
mod settings;
mod view;

pub use audio::WebAudio;
pub use game::{response_kind, SlotGame};
pub use settings::{AudioSettings, SoundAssets, MUSIC_VOLUME, SFX_VOLUME};
pub use view::{ReelView, ViewPresenter, ViewSurface};

// ============================================================================
// INITIALIZATION
// ============================================================================

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log::init_with_level(log::Level::Debug).ok();
    log::info!("[SlotGrid WASM] Initialized");
}

// ============================================================================
// UTILITY EXPORTS
// ============================================================================

/// Get SlotGrid version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default config as JSON, for pages that tweak and pass it back
#[wasm_bindgen]
pub fn default_config_json() -> Result<String, JsValue> {
    sg_slot::SlotConfig::classic()
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Payout of a grid given as rows, e.g. `[[0,0,1],[2,3,2],[1,1,1]]`
#[wasm_bindgen]
pub fn evaluate_rows(rows: JsValue) -> Result<f64, JsValue> {
    let rows: Vec<Vec<u8>> = serde_wasm_bindgen::from_value(rows)?;
    evaluate_row_vecs(&rows)
        .map(|payout| payout as f64)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn evaluate_row_vecs(rows: &[Vec<u8>]) -> sg_core::SgResult<u64> {
    let rows: Vec<&[u8]> = rows.iter().map(Vec::as_slice).collect();
    let grid = sg_slot::Grid::from_rows(&rows)?;
    Ok(sg_slot::evaluate(&grid).payout)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(get_version(), "0.1.0");
    }

    #[test]
    fn test_evaluate_rows() {
        let rows = vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]];
        assert_eq!(evaluate_row_vecs(&rows).unwrap(), 0);

        let rows = vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]];
        assert_eq!(evaluate_row_vecs(&rows).unwrap(), 9);

        assert!(evaluate_row_vecs(&[vec![0, 1], vec![0]]).is_err());
    }

    #[test]
    fn test_default_config_parses() {
        let json = default_config_json().unwrap();
        let config = sg_slot::SlotConfig::from_json(&json).unwrap();
        assert_eq!(config, sg_slot::SlotConfig::classic());
    }
}
