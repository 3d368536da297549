//! Facilities for parsing stimulus scripts.

mod lex;
mod script;
mod types;

pub use lex::{Token, TokenLexer, TokenValue};
pub use script::{ScriptStmt, parse_script};
pub use types::{ParseError, ParseResult, SrcLoc};

//===========================================================================//
