//! Linear barcode synthesis for marketplace label rows.
//!
//! Codes are rendered as Code 128 (character set B) PNG images with no
//! human-readable text and returned base64-encoded, which is the form the
//! label tables store in their `barcode` column.

use barcoders::generators::image::{Color, Image, Rotation};
use barcoders::sym::code128::Code128;
use base64::prelude::{Engine as _, BASE64_STANDARD};

/// Prefix selecting Code 128 character set B in `barcoders` input.
const CHARSET_B: char = '\u{0181}';

/// Width of the narrowest bar, in pixels.
pub const DEFAULT_MODULE_WIDTH: u32 = 3;

/// Symbol height, in pixels.
pub const DEFAULT_HEIGHT: u32 = 120;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BarcodeError {
    #[error("cannot encode an empty code")]
    EmptyCode,

    #[error("character {0:?} is not encodable in Code 128 set B")]
    UnsupportedCharacter(char),

    #[error("barcode rendering failed: {0}")]
    Render(String),
}

/// Turns an identifying code into an image payload.
///
/// Implementations must be pure: the same code always yields the same
/// payload and no state is kept between calls.
pub trait BarcodeEncoder: Send + Sync {
    fn encode(&self, code: &str) -> Result<String, BarcodeError>;
}

/// Code 128 PNG encoder with fixed module width and height.
#[derive(Debug, Clone, Copy)]
pub struct Code128Encoder {
    pub module_width: u32,
    pub height: u32,
}

impl Default for Code128Encoder {
    fn default() -> Self {
        Self {
            module_width: DEFAULT_MODULE_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BarcodeEncoder for Code128Encoder {
    fn encode(&self, code: &str) -> Result<String, BarcodeError> {
        if code.trim().is_empty() {
            return Err(BarcodeError::EmptyCode);
        }
        if let Some(c) = code.chars().find(|c| !(' '..='~').contains(c)) {
            return Err(BarcodeError::UnsupportedCharacter(c));
        }

        let symbol = Code128::new(format!("{CHARSET_B}{code}"))
            .map_err(|e| BarcodeError::Render(e.to_string()))?;
        let modules = symbol.encode();

        let png = Image::PNG {
            height: self.height,
            xdim: self.module_width,
            rotation: Rotation::Zero,
            foreground: Color::new([0, 0, 0, 255]),
            background: Color::new([255, 255, 255, 255]),
        };
        let bytes = png
            .generate(&modules[..])
            .map_err(|e| BarcodeError::Render(e.to_string()))?;

        Ok(BASE64_STANDARD.encode(bytes))
    }
}
