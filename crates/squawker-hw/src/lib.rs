//! Hardware specifications for the ShortSquawker tone generator target.

pub mod specs;
