//! Chart color palettes

/// Fixed colors for the simplified academic situation labels
const STATUS_COLORS: &[(&str, &str)] = &[
    ("Concluído", "#2e7d32"),
    ("Ativo", "#1976d2"),
    ("Trancado", "#f9a825"),
    ("Evasão/Cancelado", "#c62828"),
    ("Outros", "#6d4c41"),
];

/// Rotating palette for categories without a fixed color
const BASE_PALETTE: [&str; 10] = [
    "#1976d2", "#2e7d32", "#c62828", "#f9a825", "#6d4c41", "#00838f", "#6a1b9a", "#ef6c00",
    "#455a64", "#7cb342",
];

/// Color for a category position, cycling through the base palette
pub fn color_by_index(index: usize) -> &'static str {
    BASE_PALETTE[index % BASE_PALETTE.len()]
}

/// Fixed color for a known situation label, indexed fallback otherwise
pub fn status_color(status: &str, index: usize) -> &'static str {
    STATUS_COLORS
        .iter()
        .find(|(name, _)| *name == status)
        .map(|(_, color)| *color)
        .unwrap_or_else(|| color_by_index(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(color_by_index(0), "#1976d2");
        assert_eq!(color_by_index(10), color_by_index(0));
        assert_eq!(color_by_index(23), color_by_index(3));
    }

    #[test]
    fn test_known_status_colors() {
        assert_eq!(status_color("Concluído", 7), "#2e7d32");
        assert_eq!(status_color("Evasão/Cancelado", 0), "#c62828");
    }

    #[test]
    fn test_unknown_status_falls_back_to_index() {
        assert_eq!(status_color("Desconhecido", 2), color_by_index(2));
    }
}
