use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawerConfigError {
    #[error("backdrop opacity {0} is outside 0.0..=1.0")]
    BackdropOpacityOutOfRange(f32),

    #[error("border radius {0} must not be negative")]
    NegativeBorderRadius(f32),

    #[error("drawer has no dismissal trigger: enable close_on_click_outside or close_on_escape_key")]
    NoDismissalTrigger,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DrawerConfigError>;
