//! Formatting utilities shared by the terminal front ends

use crate::core::Board;

/// Address label for a row of a column segment, e.g. `0x0F00`
#[must_use]
pub fn format_address(column: usize, row: usize) -> String {
    format!("0x{:04X}", Board::address(column, row))
}

/// Status-line text for the byte under the pointer
#[must_use]
pub fn memory_value_label(value: Option<u8>) -> String {
    value.map_or_else(
        || "Memory Value 0x--".to_string(),
        |byte| format!("Memory Value 0x{byte:02X}"),
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_zero_padded_hex() {
        assert_eq!(format_address(0, 0), "0x0F00");
        assert_eq!(format_address(0, 23), "0x1070");
        assert_eq!(format_address(1, 0), "0x1080");
    }

    #[test]
    fn memory_value_label_formats() {
        assert_eq!(memory_value_label(Some(b'{')), "Memory Value 0x7B");
        assert_eq!(memory_value_label(Some(b' ')), "Memory Value 0x20");
        assert_eq!(memory_value_label(None), "Memory Value 0x--");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
