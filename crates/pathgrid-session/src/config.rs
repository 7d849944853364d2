//! Session configuration.

/// Default grid width in cells.
pub const DEFAULT_WIDTH: i32 = 20;
/// Default grid height in cells.
pub const DEFAULT_HEIGHT: i32 = 20;

/// Configuration for creating a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: SessionConfig = serde_json::from_str(r#"{"width": 8}"#).unwrap();
        assert_eq!(cfg.width, 8);
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
    }
}
