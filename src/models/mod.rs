pub mod candidate;
pub mod criterion;
pub mod rating;
pub mod review;
