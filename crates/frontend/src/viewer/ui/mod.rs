pub mod filters;
pub mod page;
pub mod table;
