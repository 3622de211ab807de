pub mod guild;
pub mod parse;
