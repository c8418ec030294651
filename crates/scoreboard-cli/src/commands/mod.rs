pub mod ocr;
pub mod parse;
pub mod profiles;
