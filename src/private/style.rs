use super::Color;
use crate::error::Result;
use serde::Deserialize;

/// Measurements and colours shared by every card.
///
/// Any field left out of a style file keeps its default.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    /// Gap between the card edge and the front shape.
    pub margin: f32,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_color: Color,
    pub face_background: Color,
    /// Colour of the decorative back pattern.
    pub pattern_color: Color,
}

impl Default for CardStyle {
    fn default() -> CardStyle {
        CardStyle {
            margin: 10.0,
            corner_radius: 20.0,
            border_width: 2.0,
            border_color: Color::BLACK,
            face_background: Color::WHITE,
            pattern_color: Color::BLACK,
        }
    }
}

impl CardStyle {
    pub fn from_json(json: &str) -> Result<CardStyle> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &str) -> Result<CardStyle> {
        let json = std::fs::read_to_string(path)?;
        let style = CardStyle::from_json(&json)?;
        tracing::debug!(path, ?style, "loaded card style");
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn partial_files_keep_defaults() {
        let style = CardStyle::from_json(r#"{"margin": 4, "border_color": {"r": 255, "g": 0, "b": 0}}"#).unwrap();
        assert_eq!(style.margin, 4.0);
        assert_eq!(style.border_color, Color::RED);
        assert_eq!(style.corner_radius, 20.0);
        assert_eq!(style.face_background, Color::WHITE);
    }

    #[test]
    fn malformed_files_are_reported() {
        match CardStyle::from_json("{\"margin\": \"wide\"}") {
            Err(Error::Style(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
