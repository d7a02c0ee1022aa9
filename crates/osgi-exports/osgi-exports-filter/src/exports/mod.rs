//! Export definitions and the Export-Package header parser.

pub mod definition;
pub mod parser;
pub mod pattern;
