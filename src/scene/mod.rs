// scene/ - Static scene content
//
// Hand-authored data for the explainer page:
// - Hotspot labels (id, display text, anchor, initially hidden)
// - Explanations shown when a label is clicked
// - Narration for the eruption and reset buttons

mod data;

pub use data::*;
