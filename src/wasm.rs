//! Bindings for running the search in a browser extension.

use js_sys::{Array, Uint32Array};
use wasm_bindgen::prelude::*;

use crate::config::SearchConfig;
use crate::location::BoundingBox;
use crate::token::Token;

/// Pair each value with the `x0, y0, x1, y1` quadruple at the same position of `boxes`.
///
/// `None` unless `boxes` holds exactly four coordinates per value.
pub(crate) fn tokens_from_flat(values: &[f64], boxes: &[f64]) -> Option<Vec<Token>> {
    if boxes.len() != values.len() * 4 {
        return None;
    }

    Some(Token::from_positions(values.iter().zip(boxes.chunks_exact(4)).map(|(value, corners)| {
        (*value, BoundingBox::new(corners[0], corners[1], corners[2], corners[3]))
    })))
}

/// Browser entry point. Tokens are numbered by position; each returned array lists one combination's token numbers.
#[wasm_bindgen(js_name = findCombinations)]
pub fn find_combinations(values: &[f64], boxes: &[f64]) -> Result<Array, JsError> {
    let tokens = tokens_from_flat(values, boxes)
        .ok_or_else(|| JsError::new("expected four bounding box coordinates per value"))?;
    let findings = crate::find_combinations_with(&tokens, &SearchConfig::default())?;

    Ok(findings.combinations.iter()
        .map(|combo| {
            let indices = combo.indices().iter().map(|index| *index as u32).collect::<Vec<_>>();
            Uint32Array::from(indices.as_slice())
        })
        .collect())
}
