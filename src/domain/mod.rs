pub mod diagnostics;
pub mod table;
