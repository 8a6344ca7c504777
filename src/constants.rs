// DOM hooks expected in the host page.

// Container that receives the rendered donut and its rating
pub const DONUT_ROOT_ID: &str = "donut";
// Optional button restoring the default options
pub const RESET_BUTTON_ID: &str = "donut-reset";
// CSS class applied to the rendered block
pub const DONUT_CLASS: &str = "Donut";

// Range inputs are looked up by `ConfigKey::short_name()`; these bound them.
pub const RADIUS_CONTROL_MAX: f32 = donut_core::MAX_RADIUS_SCALE;
pub const FRACTION_CONTROL_MAX: f32 = 1.0;
pub const CONTROL_STEP: f32 = 0.01;
