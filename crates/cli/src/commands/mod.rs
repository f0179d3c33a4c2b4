pub mod films;
pub mod folders;
pub mod stats;
pub mod wishlist;
