/// Insertion, moving and combining of elements
pub mod placement;
/// First-fit and random slot selection
pub mod search;
