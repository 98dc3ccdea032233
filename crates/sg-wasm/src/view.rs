// ============================================================================
// JS VIEW BRIDGE
// The page's renderer object, seen from Rust as ReelSurface + SpinPresenter
// ============================================================================

use wasm_bindgen::prelude::*;

use sg_slot::{ReelSurface, Session, SpinOutcome, SpinPresenter, SymbolIndex};

#[wasm_bindgen]
extern "C" {
    /// Renderer implemented in JS (sprites, containers, balance and win text)
    #[derive(Debug, Clone)]
    pub type ReelView;

    #[wasm_bindgen(method, js_name = setCell)]
    fn set_cell(this: &ReelView, col: u32, row: u32, symbol: u32);

    #[wasm_bindgen(method, js_name = setColumnOffset)]
    fn set_column_offset(this: &ReelView, col: u32, offset: f32);

    #[wasm_bindgen(method, js_name = showSpinStrip)]
    fn show_spin_strip(this: &ReelView, col: u32, strip: &[u8]);

    #[wasm_bindgen(method, js_name = setCellScale)]
    fn set_cell_scale(this: &ReelView, col: u32, row: u32, scale: f32);

    #[wasm_bindgen(method, js_name = spinStarted)]
    fn spin_started(this: &ReelView, spin_id: &str, balance: f64);

    #[wasm_bindgen(method, js_name = reelSettled)]
    fn reel_settled(this: &ReelView, col: u32, symbols: &[u8]);

    #[wasm_bindgen(method, js_name = spinCompleted)]
    fn spin_completed(this: &ReelView, outcome: JsValue, balance: f64);
}

/// Drawing half of the view
pub struct ViewSurface(pub ReelView);

impl ReelSurface for ViewSurface {
    fn set_cell(&mut self, col: usize, row: usize, symbol: SymbolIndex) {
        self.0.set_cell(col as u32, row as u32, symbol as u32);
    }

    fn set_column_offset(&mut self, col: usize, offset: f32) {
        self.0.set_column_offset(col as u32, offset);
    }

    fn show_spin_strip(&mut self, col: usize, strip: &[SymbolIndex]) {
        self.0.show_spin_strip(col as u32, strip);
    }

    fn set_cell_scale(&mut self, col: usize, row: usize, scale: f32) {
        self.0.set_cell_scale(col as u32, row as u32, scale);
    }
}

/// Notification half of the view
pub struct ViewPresenter(pub ReelView);

impl SpinPresenter for ViewPresenter {
    fn spin_started(&mut self, spin_id: &str, session: &Session) {
        self.0.spin_started(spin_id, session.balance() as f64);
    }

    fn reel_settled(&mut self, col: usize, symbols: &[SymbolIndex]) {
        self.0.reel_settled(col as u32, symbols);
    }

    fn spin_completed(&mut self, outcome: &SpinOutcome, session: &Session) {
        match serde_wasm_bindgen::to_value(outcome) {
            Ok(value) => self.0.spin_completed(value, session.balance() as f64),
            Err(e) => log::warn!("[SlotGrid WASM] Could not export {}: {}", outcome.spin_id, e),
        }
    }
}
