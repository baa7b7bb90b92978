/// Mosaic assembly over the cell grid
pub mod assembler;
/// Coarse candidate filtering by average colour
pub mod candidates;
/// Fine tile selection by pixel comparison
pub mod selection;

pub use assembler::{CellPlacement, MosaicAssembler, build_mosaic};
pub use candidates::{rank_candidates, select_candidates};
pub use selection::{best_candidate, select_best};
