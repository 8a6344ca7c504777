// Shared layout and styling constants used by both web and native frontends.

// Sprinkle footprint (scene units)
pub const SPRINKLE_WIDTH: f32 = 6.0;
pub const HALF_SPRINKLE_WIDTH: f32 = SPRINKLE_WIDTH / 2.0;
pub const SPRINKLE_HEIGHT: f32 = 6.0;
pub const SPRINKLE_DOT_RADIUS: f32 = 3.0; // drawn as a dot inside the footprint

// Scene layout
pub const RADIUS_SCALE: f32 = 50.0; // a radius scale of 1.0 spans half the view box
pub const VIEW_BOX_SIZE: f32 = 100.0;
pub const VIEW_BOX_CENTER: [f32; 2] = [VIEW_BOX_SIZE / 2.0, VIEW_BOX_SIZE / 2.0];

// Input and layout bounds
pub const MAX_RADIUS_SCALE: f32 = 1.0; // larger rings would leave the view box
pub const MAX_BANDS: usize = 256;
pub const MAX_SPRINKLES: usize = 4096; // cap on the per-layout mark budget

// Sprinkles are hidden under a frosting layer thinner than this
pub const MIN_FROSTING_THICKNESS_FOR_SPRINKLES: f32 = 0.2;

// Palette
pub const SPRINKLE_COLORS: [&str; 5] = ["#EFE578", "#B7E5CF", "#FFFFFF", "#F8CACD", "#1ACFE2"];
pub const DOUGH_FILL: &str = "#efcc9a";
pub const HOLE_FILL: &str = "white";
pub const OUTLINE_STROKE: &str = "#20426a";
pub const OUTLINE_STROKE_WIDTH: f32 = 2.0;
pub const FROSTING_STROKE: &str = "#f288a9";

// Rating thresholds (strictly greater than)
pub const CONFIDENT_ABOVE: f32 = 0.9;
pub const NEUTRAL_ABOVE: f32 = 0.8;
