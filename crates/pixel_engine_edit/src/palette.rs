use pixel_engine::Color;

/// Swatches offered by the color palette, in display order.
pub const DEFAULT_PALETTE: [Color; 11] = [
    Color::new(0x0C, 0x46, 0xFA), // blue
    Color::new(0x0B, 0xD9, 0xC6), // turquoise
    Color::new(0x00, 0xF0, 0x01), // green
    Color::new(0xFF, 0xF6, 0x00), // yellow
    Color::new(0xFC, 0xA7, 0x0D), // orange
    Color::new(0xF5, 0x00, 0x76), // pink
    Color::new(0x5D, 0x00, 0xE5), // violet
    Color::new(0x0D, 0x79, 0xFD), // light blue
    Color::WHITE,
    Color::new(0x80, 0x80, 0x80),
    Color::BLACK,
];

/// Palette index of `color`, if it is one of the default swatches.
pub fn palette_index(color: Color) -> Option<usize> {
    DEFAULT_PALETTE.iter().position(|c| *c == color)
}
