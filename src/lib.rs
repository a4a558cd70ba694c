pub mod document;
pub mod error;
pub mod export;
pub mod parser;
pub mod section;
pub mod utils;
pub mod value;
pub mod writer;

pub use document::Document;
pub use error::StrataError;
pub use parser::{Diagnostic, DiagnosticKind, ParseReport, SECTION_END};
pub use section::{Property, Section};
pub use value::{classify, Value, ValueType};
