pub mod surat_repository;

pub use surat_repository::*;
