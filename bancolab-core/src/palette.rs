//! Bank color palette — the fixed categorical color domain shared with the
//! presentation layer.
//!
//! Every chart that colors by bank must draw its keys from this domain;
//! a bank outside it gets [`DEFAULT_HEX`]. The hex values are the banks'
//! brand colors.

/// A bank and its brand color as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankColor {
    pub bank: &'static str,
    pub hex: &'static str,
}

/// The fixed palette domain, in dashboard display order.
pub const BANK_PALETTE: [BankColor; 6] = [
    BankColor { bank: "Santander", hex: "#ec0000" },
    BankColor { bank: "BBVA", hex: "#003366" },
    BankColor { bank: "CaixaBank", hex: "#00529b" },
    BankColor { bank: "Sabadell", hex: "#00adef" },
    BankColor { bank: "Bankinter", hex: "#ff6600" },
    BankColor { bank: "Unicaja", hex: "#417d3c" },
];

/// Color for banks outside the palette domain.
pub const DEFAULT_HEX: &str = "#808080";

/// Brand color for a bank, or the default for unmapped names.
/// Lookup is exact — the palette domain uses the same bank spellings as the
/// dataset join keys.
pub fn color_for(bank: &str) -> &'static str {
    BANK_PALETTE
        .iter()
        .find(|entry| entry.bank == bank)
        .map(|entry| entry.hex)
        .unwrap_or(DEFAULT_HEX)
}

/// Decode `#rrggbb` into components. Returns `None` for anything that is
/// not a seven-character hex color.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
