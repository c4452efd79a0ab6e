pub mod closest_pair;
pub mod intersection;

#[doc(inline)]
pub use closest_pair::sweep::closest_pair;

#[doc(inline)]
pub use closest_pair::naive::closest_pair as closest_pair_naive;

#[doc(inline)]
pub use intersection::bentley_ottmann::{segment_intersections, segment_intersections_with};

#[doc(inline)]
pub use intersection::naive::segment_intersections as segment_intersections_naive;
