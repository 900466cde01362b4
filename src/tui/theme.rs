use ratatui::style::Color;

// Logo colors
pub const LOGO_COPPER: Color = Color::Rgb(224, 138, 116);     // #E08A74
pub const LOGO_BRASS: Color = Color::Rgb(211, 176, 106);      // #D3B06A
pub const LOGO_STEEL: Color = Color::Rgb(129, 168, 196);      // #81A8C4
pub const LOGO_PATINA: Color = Color::Rgb(143, 188, 143);     // #8FBC8F

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(130, 130, 130);        // #828282
pub const TEXT_WHITE: Color = Color::Rgb(245, 245, 245);      // #F5F5F5
pub const ACCENT: Color = LOGO_PATINA;                        // focus, success
pub const WARN: Color = LOGO_BRASS;                           // hints, counts
pub const ERROR: Color = LOGO_COPPER;                         // validation, required markers
pub const VALUE_BLUE: Color = LOGO_STEEL;                     // chosen values
