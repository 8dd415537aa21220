pub mod chains;
pub mod estimation;
