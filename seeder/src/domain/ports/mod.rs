//! Domain ports for the seeding pipeline's outbound edges.

mod macros;
pub(crate) use macros::define_port_error;

mod document_sink;
mod table_sink;

#[cfg(test)]
pub use document_sink::MockDocumentSink;
pub use document_sink::{DocumentSink, DocumentSinkError};
#[cfg(test)]
pub use table_sink::MockTableSink;
pub use table_sink::{TableSink, TableSinkError};
