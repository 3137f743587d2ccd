pub mod brands;
pub mod categories;
pub mod form;
pub mod page;
pub mod raw_inputs;
pub mod schema;
