pub mod surat;

pub use surat::*;
