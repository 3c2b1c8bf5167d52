//! WASM bindings for songbook-core
//!
//! Lets a browser UI hand over songs as plain JS objects (the shape stored in
//! the `jazzSongs` slot) and get structured statistics back.

#[cfg(feature = "wasm")]
use crate::analysis::{aggregate, song_details, summarize, DisplayMode};
#[cfg(feature = "wasm")]
use crate::types::song::Song;
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::types::pitch::parse_root;

/// Pitch class number of a chord symbol's root, if it has one
pub fn root_number(chord: &str) -> Option<u8> {
    parse_root(chord).map(|root| root.value())
}

#[cfg(feature = "wasm")]
fn songs_from_js(songs: JsValue) -> Vec<Song> {
    serde_wasm_bindgen::from_value(songs).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable songs from JS: {}", e);
        Vec::new()
    })
}

/// Pitch class (0-11) of the chord's root, or `undefined`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = parseRoot)]
pub fn parse_root_js(chord: &str) -> Option<u8> {
    root_number(chord)
}

/// Summary row (title, sections line, 0..6 interval counts) for one song
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = songSummary)]
pub fn song_summary(song: JsValue, index: usize) -> JsValue {
    let song: Song = match serde_wasm_bindgen::from_value(song) {
        Ok(song) => song,
        Err(_) => return JsValue::NULL,
    };
    serde_wasm_bindgen::to_value(&summarize(index, &song)).unwrap_or(JsValue::NULL)
}

/// Section-by-section chord and interval rows for one song
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = songDetails)]
pub fn song_details_js(song: JsValue) -> JsValue {
    let song: Song = match serde_wasm_bindgen::from_value(song) {
        Ok(song) => song,
        Err(_) => return JsValue::NULL,
    };
    serde_wasm_bindgen::to_value(&song_details(&song)).unwrap_or(JsValue::NULL)
}

/// Global interval distribution; `signed` selects the 13-bucket view
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = aggregateStats)]
pub fn aggregate_stats(songs: JsValue, signed: bool) -> JsValue {
    let mode = if signed {
        DisplayMode::Signed
    } else {
        DisplayMode::Normalized
    };
    let table = aggregate(&songs_from_js(songs), mode);
    serde_wasm_bindgen::to_value(&table).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_number() {
        assert_eq!(root_number("Ebmaj7"), Some(3));
        assert_eq!(root_number("bb7"), Some(10));
        assert_eq!(root_number("N.C."), None);
    }
}
