//! App theme: colors and spacing shared by the widgets.

/// Material Design 3–style colors. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#00639B";
    pub const LIGHT_SURFACE: &'static str = "#FCFCFF";
    pub const LIGHT_ON_SURFACE: &'static str = "#1A1C1E";
    pub const LIGHT_ERROR: &'static str = "#BA1A1A";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#96CCFF";
    pub const DARK_SURFACE: &'static str = "#1A1C1E";
    pub const DARK_ON_SURFACE: &'static str = "#E2E2E5";
    pub const DARK_ERROR: &'static str = "#FFB4AB";

    pub const OUTLINE: &'static str = "#8C9199";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
}
