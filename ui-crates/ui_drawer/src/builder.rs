use std::sync::Arc;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{
    DrawerConfig, DrawerSide, DEFAULT_ANIMATION_DURATION, DEFAULT_BACKDROP_OPACITY,
    DEFAULT_BORDER_RADIUS, DEFAULT_MAX_DRAG_EXTENT, DEFAULT_MIN_BACKDROP_EXTENT,
};
use crate::errors::Result;
use crate::sizing::WidthResolver;

/// Options for constructing a [`DrawerConfig`]. Every field is optional;
/// [`build`](Self::build) fills in defaults and runs the invariant checks.
///
/// Also serves as the serialized form of a drawer configuration: all fields
/// except the width resolver round-trip through JSON (camelCase keys,
/// duration as integer milliseconds).
#[derive(Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawerConfigBuilder {
    #[serde(skip)]
    width_resolver: Option<WidthResolver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    close_on_click_outside: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    backdrop_opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    drag_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_drag_extent: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    side: Option<DrawerSide>,
    #[serde(default, with = "duration_ms", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<u64>")]
    animation_duration: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    close_on_escape_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    border_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    close_on_resume: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    close_on_back_button: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_drawer_extent: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_backdrop_extent: Option<f32>,
}

impl DrawerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads overrides from a JSON document. Missing fields stay at their
    /// defaults; unknown fields are ignored. Validation happens in
    /// [`build`](Self::build).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn width_resolver(
        mut self,
        resolver: impl Fn(f32) -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.width_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn close_on_click_outside(mut self, close: bool) -> Self {
        self.close_on_click_outside = Some(close);
        self
    }

    pub fn backdrop_opacity(mut self, opacity: f32) -> Self {
        self.backdrop_opacity = Some(opacity);
        self
    }

    pub fn drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = Some(enabled);
        self
    }

    pub fn max_drag_extent(mut self, extent: f32) -> Self {
        self.max_drag_extent = Some(extent);
        self
    }

    pub fn side(mut self, side: DrawerSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = Some(duration);
        self
    }

    pub fn close_on_escape_key(mut self, close: bool) -> Self {
        self.close_on_escape_key = Some(close);
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn close_on_resume(mut self, close: bool) -> Self {
        self.close_on_resume = Some(close);
        self
    }

    pub fn close_on_back_button(mut self, close: bool) -> Self {
        self.close_on_back_button = Some(close);
        self
    }

    pub fn max_drawer_extent(mut self, extent: f32) -> Self {
        self.max_drawer_extent = Some(extent);
        self
    }

    pub fn min_backdrop_extent(mut self, extent: f32) -> Self {
        self.min_backdrop_extent = Some(extent);
        self
    }

    /// Applies defaults for unset fields, validates the invariants, and
    /// produces the immutable config. Fails fast on the first violated
    /// invariant; the caller must correct the inputs and rebuild.
    pub fn build(self) -> Result<DrawerConfig> {
        let config = DrawerConfig {
            width_resolver: self.width_resolver,
            close_on_click_outside: self.close_on_click_outside.unwrap_or(true),
            backdrop_opacity: self.backdrop_opacity.unwrap_or(DEFAULT_BACKDROP_OPACITY),
            drag_enabled: self.drag_enabled.or(Some(false)),
            max_drag_extent: self.max_drag_extent.or(Some(DEFAULT_MAX_DRAG_EXTENT)),
            side: self.side.unwrap_or_default(),
            animation_duration: self.animation_duration.unwrap_or(DEFAULT_ANIMATION_DURATION),
            close_on_escape_key: self.close_on_escape_key.unwrap_or(true),
            border_radius: self.border_radius.unwrap_or(DEFAULT_BORDER_RADIUS),
            close_on_resume: self.close_on_resume.unwrap_or(false),
            close_on_back_button: self.close_on_back_button.unwrap_or(false),
            max_drawer_extent: self.max_drawer_extent,
            min_backdrop_extent: self
                .min_backdrop_extent
                .unwrap_or(DEFAULT_MIN_BACKDROP_EXTENT),
        };
        config.validate()?;
        Ok(config)
    }
}

impl DrawerConfig {
    pub fn builder() -> DrawerConfigBuilder {
        DrawerConfigBuilder::new()
    }

    /// Derive-copy: a builder pre-seeded with every field of this config.
    /// Overrides applied to it go back through [`DrawerConfigBuilder::build`],
    /// so a derived copy is re-validated and can never hold an invalid value.
    pub fn to_builder(&self) -> DrawerConfigBuilder {
        DrawerConfigBuilder {
            width_resolver: self.width_resolver.clone(),
            close_on_click_outside: Some(self.close_on_click_outside),
            backdrop_opacity: Some(self.backdrop_opacity),
            drag_enabled: self.drag_enabled,
            max_drag_extent: self.max_drag_extent,
            side: Some(self.side),
            animation_duration: Some(self.animation_duration),
            close_on_escape_key: Some(self.close_on_escape_key),
            border_radius: Some(self.border_radius),
            close_on_resume: Some(self.close_on_resume),
            close_on_back_button: Some(self.close_on_back_button),
            max_drawer_extent: self.max_drawer_extent,
            min_backdrop_extent: Some(self.min_backdrop_extent),
        }
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.map(|d| d.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DrawerConfigError;

    #[test]
    fn test_empty_builder_matches_default() {
        let built = DrawerConfig::builder().build().unwrap();
        assert_eq!(built, DrawerConfig::default());
    }

    #[test]
    fn test_backdrop_opacity_out_of_range_fails() {
        for opacity in [-0.01, 1.01, 2.0, -5.0] {
            let result = DrawerConfig::builder().backdrop_opacity(opacity).build();
            assert!(matches!(
                result,
                Err(DrawerConfigError::BackdropOpacityOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_backdrop_opacity_bounds_are_inclusive() {
        assert!(DrawerConfig::builder().backdrop_opacity(0.0).build().is_ok());
        assert!(DrawerConfig::builder().backdrop_opacity(1.0).build().is_ok());
    }

    #[test]
    fn test_negative_border_radius_fails() {
        let result = DrawerConfig::builder().border_radius(-1.0).build();
        assert!(matches!(
            result,
            Err(DrawerConfigError::NegativeBorderRadius(_))
        ));
        assert!(DrawerConfig::builder().border_radius(0.0).build().is_ok());
    }

    #[test]
    fn test_dismissal_trigger_matrix() {
        for (outside, escape, ok) in [
            (true, true, true),
            (true, false, true),
            (false, true, true),
            (false, false, false),
        ] {
            let result = DrawerConfig::builder()
                .close_on_click_outside(outside)
                .close_on_escape_key(escape)
                .build();
            assert_eq!(result.is_ok(), ok, "outside={outside} escape={escape}");
            if !ok {
                assert!(matches!(
                    result,
                    Err(DrawerConfigError::NoDismissalTrigger)
                ));
            }
        }
    }

    #[test]
    fn test_derive_copy_without_overrides_is_identical() {
        let original = DrawerConfig::builder()
            .side(DrawerSide::Left)
            .backdrop_opacity(0.7)
            .drag_enabled(true)
            .max_drawer_extent(500.0)
            .width_resolver(|_| 280.0)
            .build()
            .unwrap();

        let copy = original.to_builder().build().unwrap();
        assert_eq!(copy, original);
    }

    #[test]
    fn test_derive_copy_single_override_changes_only_that_field() {
        let original = DrawerConfig::default();
        let copy = original
            .to_builder()
            .border_radius(8.0)
            .build()
            .unwrap();

        assert_eq!(copy.border_radius(), 8.0);
        assert_eq!(copy.side(), original.side());
        assert_eq!(copy.backdrop_opacity(), original.backdrop_opacity());
        assert_eq!(copy.drag_enabled(), original.drag_enabled());
        assert_eq!(copy.max_drag_extent(), original.max_drag_extent());
        assert_eq!(copy.animation_duration(), original.animation_duration());
        assert_eq!(
            copy.close_on_click_outside(),
            original.close_on_click_outside()
        );
        assert_eq!(copy.close_on_escape_key(), original.close_on_escape_key());
        assert_eq!(copy.close_on_resume(), original.close_on_resume());
        assert_eq!(
            copy.close_on_back_button(),
            original.close_on_back_button()
        );
        assert_eq!(copy.max_drawer_extent(), original.max_drawer_extent());
        assert_eq!(copy.min_backdrop_extent(), original.min_backdrop_extent());
    }

    #[test]
    fn test_derive_copy_is_revalidated() {
        let original = DrawerConfig::default();
        let result = original.to_builder().backdrop_opacity(1.5).build();
        assert!(matches!(
            result,
            Err(DrawerConfigError::BackdropOpacityOutOfRange(_))
        ));
    }

    #[test]
    fn test_from_json_overrides() {
        let json = r#"{
            "side": "left",
            "backdropOpacity": 0.25,
            "animationDuration": 150,
            "maxDrawerExtent": 480.0
        }"#;
        let config = DrawerConfigBuilder::from_json(json)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.side(), DrawerSide::Left);
        assert_eq!(config.backdrop_opacity(), 0.25);
        assert_eq!(config.animation_duration(), Duration::from_millis(150));
        assert_eq!(config.max_drawer_extent(), Some(480.0));
        // Untouched fields keep their defaults.
        assert_eq!(config.border_radius(), 20.0);
        assert!(config.close_on_click_outside());
    }

    #[test]
    fn test_from_json_invalid_value_fails_build() {
        let builder = DrawerConfigBuilder::from_json(r#"{"backdropOpacity": 3.0}"#).unwrap();
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_from_json_malformed_document_fails() {
        assert!(matches!(
            DrawerConfigBuilder::from_json("not json"),
            Err(DrawerConfigError::Json(_))
        ));
    }

    #[test]
    fn test_builder_round_trips_through_json() {
        let json = serde_json::to_string(
            &DrawerConfig::builder()
                .side(DrawerSide::Left)
                .animation_duration(Duration::from_millis(250)),
        )
        .unwrap();

        let config = DrawerConfigBuilder::from_json(&json)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.side(), DrawerSide::Left);
        assert_eq!(config.animation_duration(), Duration::from_millis(250));
    }
}
