//! Text post-processing: noise filtering, hyphenation repair and
//! structure tagging.

mod filter;
mod structure;

pub use filter::{FilterOptions, NoiseFilter};
pub use structure::{tag_structure, TagOptions};
