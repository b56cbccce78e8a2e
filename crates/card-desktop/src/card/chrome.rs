//! Card chrome metrics used for hit testing

/// Sizes of the card frame elements
pub struct ChromeStyle {
    pub title_bar_height: f32,
    pub resize_handle_size: f32,
    pub corner_handle_size: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default chrome matching the card header design
pub const CHROME: ChromeStyle = ChromeStyle {
    title_bar_height: 36.0,
    resize_handle_size: 6.0,
    corner_handle_size: 12.0,
    button_size: 24.0,
    button_spacing: 4.0,
    button_margin: 8.0,
};
