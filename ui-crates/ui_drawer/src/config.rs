use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{DrawerConfigError, Result};
use crate::sizing::{self, WidthResolver};

pub const DEFAULT_BACKDROP_OPACITY: f32 = 0.4;
pub const DEFAULT_BORDER_RADIUS: f32 = 20.0;
pub const DEFAULT_MAX_DRAG_EXTENT: f32 = 300.0;
pub const DEFAULT_MIN_BACKDROP_EXTENT: f32 = 30.0;
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Screen edge the drawer slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DrawerSide {
    Left,
    Right,
}

impl DrawerSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawerSide::Left => "left",
            DrawerSide::Right => "right",
        }
    }
}

impl Default for DrawerSide {
    fn default() -> Self {
        DrawerSide::Right
    }
}

/// Immutable configuration for a slide-out drawer.
///
/// Built through [`crate::DrawerConfigBuilder`]; every constructed instance
/// satisfies the invariants (backdrop opacity in range, non-negative border
/// radius, at least one dismissal trigger), so the rendering widget can read
/// the fields without re-checking them. No field is mutable after
/// construction, which makes a shared instance safe across threads.
#[derive(Clone)]
pub struct DrawerConfig {
    pub(crate) width_resolver: Option<WidthResolver>,
    pub(crate) close_on_click_outside: bool,
    pub(crate) backdrop_opacity: f32,
    pub(crate) drag_enabled: Option<bool>,
    pub(crate) max_drag_extent: Option<f32>,
    pub(crate) side: DrawerSide,
    pub(crate) animation_duration: Duration,
    pub(crate) close_on_escape_key: bool,
    pub(crate) border_radius: f32,
    pub(crate) close_on_resume: bool,
    pub(crate) close_on_back_button: bool,
    pub(crate) max_drawer_extent: Option<f32>,
    pub(crate) min_backdrop_extent: f32,
}

impl DrawerConfig {
    /// Custom width strategy, if the consumer supplied one.
    pub fn width_resolver(&self) -> Option<&WidthResolver> {
        self.width_resolver.as_ref()
    }

    /// Whether a click on the backdrop dismisses the drawer.
    pub fn close_on_click_outside(&self) -> bool {
        self.close_on_click_outside
    }

    /// Backdrop dim opacity, always within 0.0..=1.0.
    pub fn backdrop_opacity(&self) -> f32 {
        self.backdrop_opacity
    }

    /// Whether edge-drag opens the drawer; `None` defers to the widget.
    pub fn drag_enabled(&self) -> Option<bool> {
        self.drag_enabled
    }

    /// Maximum distance (px) a drag gesture can pull the drawer.
    pub fn max_drag_extent(&self) -> Option<f32> {
        self.max_drag_extent
    }

    /// Screen edge the drawer slides in from.
    pub fn side(&self) -> DrawerSide {
        self.side
    }

    /// Open/close animation duration.
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// Whether the escape key dismisses the drawer.
    pub fn close_on_escape_key(&self) -> bool {
        self.close_on_escape_key
    }

    /// Corner radius (px) of the drawer panel, never negative.
    pub fn border_radius(&self) -> f32 {
        self.border_radius
    }

    /// Whether the drawer closes when the application resumes.
    pub fn close_on_resume(&self) -> bool {
        self.close_on_resume
    }

    /// Whether the platform back button dismisses the drawer.
    pub fn close_on_back_button(&self) -> bool {
        self.close_on_back_button
    }

    /// Hard cap (px) on the drawer width, if any.
    pub fn max_drawer_extent(&self) -> Option<f32> {
        self.max_drawer_extent
    }

    /// Minimum backdrop strip (px) that must stay visible beside the drawer.
    pub fn min_backdrop_extent(&self) -> f32 {
        self.min_backdrop_extent
    }

    /// Width the hosting widget should lay the drawer out at for the given
    /// viewport width: the custom resolver if present, else the breakpoint
    /// default, capped by `max_drawer_extent` and by the viewport minus
    /// `min_backdrop_extent`.
    pub fn resolve_width(&self, viewport_width: f32) -> f32 {
        let requested = match &self.width_resolver {
            Some(resolver) => resolver(viewport_width),
            None => sizing::default_width(viewport_width),
        };

        let mut width = requested;
        if let Some(max) = self.max_drawer_extent {
            width = width.min(max);
        }
        let available = (viewport_width - self.min_backdrop_extent).max(0.0);
        width = width.min(available);

        if width < requested {
            tracing::debug!("drawer width clamped from {requested} to {width}");
        }
        width
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.backdrop_opacity) {
            return Err(DrawerConfigError::BackdropOpacityOutOfRange(
                self.backdrop_opacity,
            ));
        }
        if self.border_radius < 0.0 {
            return Err(DrawerConfigError::NegativeBorderRadius(self.border_radius));
        }
        if !self.close_on_click_outside && !self.close_on_escape_key {
            return Err(DrawerConfigError::NoDismissalTrigger);
        }
        Ok(())
    }
}

impl Default for DrawerConfig {
    fn default() -> Self {
        // Defaults satisfy every invariant, so no validation is needed here.
        Self {
            width_resolver: None,
            close_on_click_outside: true,
            backdrop_opacity: DEFAULT_BACKDROP_OPACITY,
            drag_enabled: Some(false),
            max_drag_extent: Some(DEFAULT_MAX_DRAG_EXTENT),
            side: DrawerSide::default(),
            animation_duration: DEFAULT_ANIMATION_DURATION,
            close_on_escape_key: true,
            border_radius: DEFAULT_BORDER_RADIUS,
            close_on_resume: false,
            close_on_back_button: false,
            max_drawer_extent: None,
            min_backdrop_extent: DEFAULT_MIN_BACKDROP_EXTENT,
        }
    }
}

impl PartialEq for DrawerConfig {
    fn eq(&self, other: &Self) -> bool {
        let resolver_eq = match (&self.width_resolver, &other.width_resolver) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        resolver_eq
            && self.close_on_click_outside == other.close_on_click_outside
            && self.backdrop_opacity == other.backdrop_opacity
            && self.drag_enabled == other.drag_enabled
            && self.max_drag_extent == other.max_drag_extent
            && self.side == other.side
            && self.animation_duration == other.animation_duration
            && self.close_on_escape_key == other.close_on_escape_key
            && self.border_radius == other.border_radius
            && self.close_on_resume == other.close_on_resume
            && self.close_on_back_button == other.close_on_back_button
            && self.max_drawer_extent == other.max_drawer_extent
            && self.min_backdrop_extent == other.min_backdrop_extent
    }
}

impl fmt::Debug for DrawerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerConfig")
            .field(
                "width_resolver",
                &self.width_resolver.as_ref().map(|_| "<fn>"),
            )
            .field("close_on_click_outside", &self.close_on_click_outside)
            .field("backdrop_opacity", &self.backdrop_opacity)
            .field("drag_enabled", &self.drag_enabled)
            .field("max_drag_extent", &self.max_drag_extent)
            .field("side", &self.side)
            .field("animation_duration", &self.animation_duration)
            .field("close_on_escape_key", &self.close_on_escape_key)
            .field("border_radius", &self.border_radius)
            .field("close_on_resume", &self.close_on_resume)
            .field("close_on_back_button", &self.close_on_back_button)
            .field("max_drawer_extent", &self.max_drawer_extent)
            .field("min_backdrop_extent", &self.min_backdrop_extent)
            .finish()
    }
}

/// Multi-line diagnostic listing for logs. Not stable across versions and
/// has no parsing counterpart.
impl fmt::Display for DrawerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DrawerConfig")?;
        writeln!(
            f,
            "  width_resolver: {}",
            if self.width_resolver.is_some() {
                "custom"
            } else {
                "breakpoint defaults"
            }
        )?;
        writeln!(f, "  side: {}", self.side.as_str())?;
        writeln!(f, "  backdrop_opacity: {}", self.backdrop_opacity)?;
        writeln!(f, "  border_radius: {}", self.border_radius)?;
        writeln!(
            f,
            "  animation_duration: {}ms",
            self.animation_duration.as_millis()
        )?;
        writeln!(f, "  drag_enabled: {:?}", self.drag_enabled)?;
        writeln!(f, "  max_drag_extent: {:?}", self.max_drag_extent)?;
        writeln!(f, "  max_drawer_extent: {:?}", self.max_drawer_extent)?;
        writeln!(f, "  min_backdrop_extent: {}", self.min_backdrop_extent)?;
        writeln!(
            f,
            "  close_on_click_outside: {}",
            self.close_on_click_outside
        )?;
        writeln!(f, "  close_on_escape_key: {}", self.close_on_escape_key)?;
        writeln!(f, "  close_on_resume: {}", self.close_on_resume)?;
        write!(f, "  close_on_back_button: {}", self.close_on_back_button)
    }
}
