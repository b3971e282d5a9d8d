use std::sync::Arc;

/// Viewport widths (logical px) below which the narrower default applies
pub const NARROW_BREAKPOINT: f32 = 360.0;
pub const MEDIUM_BREAKPOINT: f32 = 600.0;

/// Default drawer widths per breakpoint band
pub const NARROW_WIDTH: f32 = 260.0;
pub const MEDIUM_WIDTH: f32 = 300.0;
pub const WIDE_WIDTH: f32 = 400.0;

/// Injected width strategy: maps the viewport width to a drawer width.
/// Supplied by the consumer when the breakpoint defaults don't fit.
pub type WidthResolver = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

/// Default drawer width for a viewport width, by breakpoint band.
pub fn default_width(viewport_width: f32) -> f32 {
    if viewport_width < NARROW_BREAKPOINT {
        NARROW_WIDTH
    } else if viewport_width < MEDIUM_BREAKPOINT {
        MEDIUM_WIDTH
    } else {
        WIDE_WIDTH
    }
}
