//! Shared color constants for the UI.

use egui::Color32;
use payops_business::Tone;

/// Sky blue fill of the primary support button.
pub const COLOR_SKY: Color32 = Color32::from_rgb(14, 165, 233);

/// Light gray background of the support-contact card.
pub const COLOR_CARD_GRAY: Color32 = Color32::from_rgb(243, 244, 246);

/// Fill and text color of a tag in the given tone.
///
/// Light mode uses pale fills with dark text, dark mode translucent fills
/// with light text.
pub fn tone_colors(tone: Tone, dark_mode: bool) -> (Color32, Color32) {
    let (light_fill, light_text, dark_fill, dark_text) = match tone {
        Tone::Green => ([220, 252, 231], [22, 101, 52], [20, 83, 45], [134, 239, 172]),
        Tone::Red => ([254, 226, 226], [153, 27, 27], [127, 29, 29], [252, 165, 165]),
        Tone::Blue => ([219, 234, 254], [30, 64, 175], [30, 58, 138], [147, 197, 253]),
        Tone::Yellow => ([254, 249, 195], [133, 77, 14], [113, 63, 18], [253, 224, 71]),
        Tone::Gray => ([243, 244, 246], [31, 41, 55], [17, 24, 39], [209, 213, 219]),
    };

    if dark_mode {
        let [r, g, b] = dark_fill;
        let [tr, tg, tb] = dark_text;
        (
            Color32::from_rgba_unmultiplied(r, g, b, 51),
            Color32::from_rgb(tr, tg, tb),
        )
    } else {
        let [r, g, b] = light_fill;
        let [tr, tg, tb] = light_text;
        (Color32::from_rgb(r, g, b), Color32::from_rgb(tr, tg, tb))
    }
}
