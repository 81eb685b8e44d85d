// cone.rs - Implicit volcano surface
//
// The cone mesh is never sampled. Flow particles hug this analytic slope
// instead, so they behave the same whether or not the exterior model loaded.

/// Height of the crater floor where lava is emitted
pub const CRATER_HEIGHT: f32 = 1.8;

/// Radius of the crater rim, where the slope begins
pub const RIM_RADIUS: f32 = 0.7;

/// Drop per unit of radius along the flank
pub const FLANK_SLOPE: f32 = 1.15;

/// Particles below this height are gone from view
pub const FLOOR_HEIGHT: f32 = -3.0;

/// Flank height at horizontal distance `r` from the cone axis
#[inline]
pub fn surface_height(r: f32) -> f32 {
    flank_height(r, FLANK_SLOPE)
}

/// Same as [`surface_height`] with an explicit slope
#[inline]
pub fn flank_height(r: f32, slope: f32) -> f32 {
    CRATER_HEIGHT - (r - RIM_RADIUS) * slope
}

/// Horizontal distance from the cone axis
#[inline(always)]
pub fn radius(x: f32, z: f32) -> f32 {
    (x * x + z * z).sqrt()
}

/// Check if a height is below the scene floor
#[inline(always)]
pub fn below_floor(y: f32) -> bool {
    y < FLOOR_HEIGHT
}
