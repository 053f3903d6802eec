pub mod imports;
pub mod parse;
