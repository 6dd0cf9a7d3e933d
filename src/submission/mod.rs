pub mod fields;
pub mod pipeline;
pub mod sanitize;
