use crate::Arbitrary;
use crate::cards::*;
use crate::solver::Solver;
use wasm_bindgen::prelude::*;

// Re-export types for JavaScript

#[wasm_bindgen]
pub struct WasmCard(Card);

#[wasm_bindgen]
pub struct WasmHand(Hand);

/// Install the panic hook. Call once after loading the module.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Solver address for four bare values, in order.
#[wasm_bindgen]
pub fn solver_url(n1: u8, n2: u8, n3: u8, n4: u8) -> Result<String, JsValue> {
    let cards = [n1, n2, n3, n4]
        .into_iter()
        .map(|n| match n {
            1..=13 => Ok(Card::from((Rank::from(n), Suit::default()))),
            _ => Err(JsValue::from_str(&format!("card value out of range: {}", n))),
        })
        .collect::<Result<Vec<Card>, JsValue>>()?;
    let hand = Hand::try_from(cards).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(Solver::default().url(&hand))
}

// Card implementation
#[wasm_bindgen]
impl WasmCard {
    #[wasm_bindgen(constructor)]
    pub fn new(rank: &str, suit: &str) -> Result<Self, JsValue> {
        let r = Rank::try_from(rank).map_err(|e| JsValue::from_str(&e))?;
        let s = Suit::try_from(suit).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self(Card::from((r, s))))
    }

    #[wasm_bindgen]
    pub fn random() -> Self {
        Self(Card::random())
    }

    #[wasm_bindgen]
    pub fn from_string(s: &str) -> Result<Self, JsValue> {
        Ok(Card::try_from(s)
            .map_err(|e| JsValue::from_str(&e))
            .map(Self)?)
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        self.0.to_string()
    }

    #[wasm_bindgen]
    pub fn rank(&self) -> String {
        self.0.rank().to_string()
    }

    #[wasm_bindgen]
    pub fn suit(&self) -> String {
        self.0.suit().to_string()
    }

    #[wasm_bindgen]
    pub fn value(&self) -> u8 {
        self.0.value()
    }

    #[wasm_bindgen]
    pub fn is_red(&self) -> bool {
        self.0.suit().is_red()
    }
}

// Hand implementation
#[wasm_bindgen]
impl WasmHand {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self(Hand::random())
    }

    #[wasm_bindgen]
    pub fn from_string(s: &str) -> Result<Self, JsValue> {
        Ok(Self(
            Hand::try_from(s).map_err(|e| JsValue::from_str(&e.to_string()))?,
        ))
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        self.0.to_string()
    }

    #[wasm_bindgen]
    pub fn into_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.0).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn values(&self) -> Vec<u8> {
        self.0.values().to_vec()
    }

    #[wasm_bindgen]
    pub fn to_card_array(&self) -> js_sys::Array {
        self.0
            .iter()
            .copied()
            .map(WasmCard)
            .map(JsValue::from)
            .collect::<js_sys::Array>()
    }

    #[wasm_bindgen]
    pub fn solver_url(&self) -> String {
        Solver::default().url(&self.0)
    }
}
