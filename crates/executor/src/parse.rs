//! Line tokenizer: one input line, one command.
//!
//! Grammar: a command word, then up to three double-quoted identifiers,
//! space-separated. Quote characters carry no meaning beyond delimiting and
//! are stripped wholesale; identifiers are non-empty byte strings that never
//! contain `"`, space, or newline. Identifier length is unbounded.
//!
//! Malformed lines (unknown command word, wrong argument count, empty
//! identifier) are reported as [`ParseError`] and silently dropped by
//! callers.

use crate::command::Command;
use crate::error::ParseError;

/// Parse one input line into a [`Command`].
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line
        .trim_end()
        .split(' ')
        .filter(|token| !token.is_empty());
    let Some(word) = tokens.next() else {
        return Err(ParseError::EmptyLine);
    };
    let args: Vec<&str> = tokens.map(|token| token.trim_matches('"')).collect();

    match word {
        "addent" => {
            let [id] = take_idents("addent", &args)?;
            Ok(Command::AddEntity { id: id.to_string() })
        }
        "delent" => {
            let [id] = take_idents("delent", &args)?;
            Ok(Command::DelEntity { id: id.to_string() })
        }
        "addrel" => {
            let [from, to, ty] = take_idents("addrel", &args)?;
            Ok(Command::AddRelation {
                from: from.to_string(),
                to: to.to_string(),
                ty: ty.to_string(),
            })
        }
        "delrel" => {
            let [from, to, ty] = take_idents("delrel", &args)?;
            Ok(Command::DelRelation {
                from: from.to_string(),
                to: to.to_string(),
                ty: ty.to_string(),
            })
        }
        "report" => {
            let [] = take_idents("report", &args)?;
            Ok(Command::Report)
        }
        "end" => {
            let [] = take_idents("end", &args)?;
            Ok(Command::End)
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Check arity and identifier non-emptiness in one step.
fn take_idents<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], ParseError> {
    let idents: [&str; N] = args
        .try_into()
        .map_err(|_| ParseError::ArityMismatch {
            command,
            expected: N,
            got: args.len(),
        })?;
    if idents.iter().any(|ident| ident.is_empty()) {
        return Err(ParseError::EmptyIdentifier { command });
    }
    Ok(idents)
}
