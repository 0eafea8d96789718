use ratatui::style::Color;

/// Fixed palette; showreel has no runtime theming
pub struct Palette;

impl Palette {
    pub const BG: Color = Color::Rgb(0x1d, 0x20, 0x21);
    pub const PANEL: Color = Color::Rgb(0x28, 0x28, 0x28);
    pub const FG: Color = Color::Rgb(0xd4, 0xbe, 0x98);
    pub const DIM: Color = Color::Rgb(0x92, 0x83, 0x74);
    pub const GREY: Color = Color::Rgb(0x66, 0x5c, 0x54);
    pub const ACCENT: Color = Color::Rgb(0xe7, 0x8a, 0x4e);
    pub const GREEN: Color = Color::Rgb(0xa9, 0xb6, 0x65);
    pub const ERROR: Color = Color::Rgb(0xea, 0x69, 0x62);
}
