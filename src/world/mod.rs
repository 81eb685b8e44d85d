// world/ - Scene geometry queries
//
// Pure functions over the implicit volcano: cone surface and exterior fade.
// No state, no allocation - just math.

mod cone;
mod transition;

pub use cone::*;
pub use transition::*;
