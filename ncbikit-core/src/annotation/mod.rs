//! Gene annotation tables.
//!
//! - [`ptt`]: NCBI protein tables (`.ptt`)

pub mod ptt;

pub use ptt::{read_ptt, read_ptt_file};
