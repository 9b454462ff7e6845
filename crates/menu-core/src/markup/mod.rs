//! Markup output

pub mod writer;

pub use writer::ResponseWriter;
