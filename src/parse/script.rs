use super::lex::{Token, TokenLexer, TokenValue};
use super::types::{ParseError, ParseResult, SrcLoc};
use crate::bus::BusKind;

//===========================================================================//

const MAX_ADDR: u32 = 0xfffff;
const MAX_PORT: u32 = 0xffff;
const MAX_WORD: u32 = 0xffff;

//===========================================================================//

/// A single statement in a stimulus script.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptStmt {
    /// Requests one bus transaction.  For transactions that carry no data,
    /// `data` is zero; for those that carry no address, so is `addr`.
    Transaction {
        /// The kind of transaction to request.
        kind: BusKind,
        /// The memory address or I/O port.
        addr: u32,
        /// The data to drive on the data-out lines.
        data: u16,
    },
    /// Drives the idle status for the given number of cycles.
    Idle(u32),
    /// Checks the data returned by the most recently completed read.
    Expect {
        /// The expected data.
        value: u16,
        /// The script line of the statement, for reporting.
        line: u32,
    },
}

//===========================================================================//

#[derive(Clone, Copy)]
enum Operand {
    Addr,
    Port,
    Word,
    Count,
}

impl Operand {
    fn check(self, value: u32, location: SrcLoc) -> Result<u32, ParseError> {
        let (limit, what) = match self {
            Operand::Addr => (MAX_ADDR, "address"),
            Operand::Port => (MAX_PORT, "port"),
            Operand::Word => (MAX_WORD, "value"),
            Operand::Count => return Ok(value),
        };
        if value > limit {
            let message = format!(
                "{what} {value:#x} is out of range (max is {limit:#x})"
            );
            return Err(ParseError::new(location, message));
        }
        Ok(value)
    }
}

const STATEMENTS: &[(&str, &[Operand])] = &[
    ("fetch", &[Operand::Addr]),
    ("memr", &[Operand::Addr]),
    ("memw", &[Operand::Addr, Operand::Word]),
    ("ior", &[Operand::Port]),
    ("iow", &[Operand::Port, Operand::Word]),
    ("inta", &[]),
    ("halt", &[]),
    ("idle", &[Operand::Count]),
    ("expect", &[Operand::Word]),
];

fn keyword_operands(keyword: &str) -> Option<&'static [Operand]> {
    STATEMENTS
        .iter()
        .find(|&&(name, _)| name == keyword)
        .map(|&(_, operands)| operands)
}

//===========================================================================//

/// Parses a stimulus script.  Every malformed line is reported, not just the
/// first one.
pub fn parse_script(input: &[u8]) -> ParseResult<Vec<ScriptStmt>> {
    let mut stmts = Vec::new();
    let mut errors = Vec::new();
    let mut line = Vec::<Token>::new();
    let mut line_ok = true;
    for result in TokenLexer::new(input) {
        match result {
            Ok(Token { value: TokenValue::Linebreak, .. }) => {
                if line_ok {
                    collect(parse_line(&line), &mut stmts, &mut errors);
                }
                line.clear();
                line_ok = true;
            }
            Ok(token) => line.push(token),
            Err(error) => {
                errors.push(error);
                line_ok = false;
            }
        }
    }
    if line_ok {
        collect(parse_line(&line), &mut stmts, &mut errors);
    }
    if errors.is_empty() { Ok(stmts) } else { Err(errors) }
}

fn collect(
    result: Result<Option<ScriptStmt>, ParseError>,
    stmts: &mut Vec<ScriptStmt>,
    errors: &mut Vec<ParseError>,
) {
    match result {
        Ok(Some(stmt)) => stmts.push(stmt),
        Ok(None) => {}
        Err(error) => errors.push(error),
    }
}

fn parse_line(tokens: &[Token]) -> Result<Option<ScriptStmt>, ParseError> {
    let Some((first, args)) = tokens.split_first() else {
        return Ok(None);
    };
    let keyword = match &first.value {
        TokenValue::Identifier(id) => id.as_str(),
        other => {
            let message =
                format!("expected a statement, found {}", other.name());
            return Err(ParseError::new(first.start, message));
        }
    };
    let Some(operands) = keyword_operands(keyword) else {
        let message = format!("unknown statement `{keyword}`");
        return Err(ParseError::new(first.start, message));
    };
    if args.len() != operands.len() {
        let message = format!(
            "`{keyword}` takes {} operand(s), found {}",
            operands.len(),
            args.len()
        );
        return Err(ParseError::new(first.start, message));
    }
    let mut values = [0u32; 2];
    for ((arg, &operand), slot) in
        args.iter().zip(operands).zip(values.iter_mut())
    {
        *slot = match arg.value {
            TokenValue::IntLiteral(value) => {
                operand.check(value, arg.start)?
            }
            ref other => {
                let message = format!(
                    "expected an int literal, found {}",
                    other.name()
                );
                return Err(ParseError::new(arg.start, message));
            }
        };
    }
    let [first_value, second_value] = values;
    let transaction = |kind: BusKind, addr: u32, data: u32| {
        ScriptStmt::Transaction { kind, addr, data: data as u16 }
    };
    let stmt = match keyword {
        "fetch" => transaction(BusKind::CodeFetch, first_value, 0),
        "memr" => transaction(BusKind::MemRead, first_value, 0),
        "memw" => transaction(BusKind::MemWrite, first_value, second_value),
        "ior" => transaction(BusKind::IoRead, first_value, 0),
        "iow" => transaction(BusKind::IoWrite, first_value, second_value),
        "inta" => transaction(BusKind::InterruptAck, 0, 0),
        "halt" => transaction(BusKind::Halt, 0, 0),
        "idle" => ScriptStmt::Idle(first_value),
        _ => ScriptStmt::Expect {
            value: first_value as u16,
            line: first.start.line,
        },
    };
    Ok(Some(stmt))
}

//===========================================================================//


//===========================================================================//
