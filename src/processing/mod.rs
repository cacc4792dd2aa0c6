//! Record decoding

pub mod parser;

pub use parser::{
    parse_iss_record, parse_iss_records, parse_visible_bodies, IssRecord, ParseError, VisibleBody,
};
