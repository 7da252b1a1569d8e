pub mod document;

pub use document::{
    extract_title, DocumentSummary, DocumentType, InitReport, ReadResult, UnknownDocumentType,
    UpdateResult,
};
