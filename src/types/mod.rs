pub mod answers;
pub mod range;
pub mod result;
pub mod score;
