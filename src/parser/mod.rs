mod cos_parser;

pub use cos_parser::CareerOneStopParser;
