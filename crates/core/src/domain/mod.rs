pub mod answers;
pub mod catalogue;
pub mod category;
