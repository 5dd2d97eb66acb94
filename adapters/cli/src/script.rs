//! Parsing of scripted heading sequences supplied on the command line.

use snake_grid_core::Direction;
use thiserror::Error;

/// Errors that can occur while decoding a move script.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum MoveScriptError {
    /// The script contained only whitespace.
    #[error("move script was empty")]
    Empty,
    /// A character did not name a heading.
    #[error("unknown heading '{symbol}' at position {position}")]
    UnknownHeading {
        /// Offending character.
        symbol: char,
        /// Zero-based character offset within the script.
        position: usize,
    },
    /// A repeat count could not be parsed.
    #[error("invalid repeat count '{0}'")]
    InvalidRepeat(String),
}

/// Heading to request before each tick; `None` keeps the current heading.
pub(crate) type MoveScript = Vec<Direction>;

/// Decodes a script such as `"R3 D2 L"` or `"RRRDDL"`.
///
/// Each heading letter (`U`, `D`, `L`, `R`, or `.` to keep the heading) may be
/// followed by a repeat count. The heading is requested on the first tick of
/// the run and held for the remaining ticks.
pub(crate) fn decode(value: &str) -> Result<MoveScript, MoveScriptError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MoveScriptError::Empty);
    }

    let mut script = Vec::new();
    let mut chars = trimmed.char_indices().peekable();
    while let Some((position, symbol)) = chars.next() {
        if symbol.is_whitespace() || symbol == ',' {
            continue;
        }
        let direction = heading_for(symbol).ok_or(MoveScriptError::UnknownHeading {
            symbol,
            position,
        })?;

        let mut digits = String::new();
        while let Some((_, next)) = chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            digits.push(*next);
            let _ = chars.next();
        }
        let repeat = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<usize>()
                .map_err(|_| MoveScriptError::InvalidRepeat(digits.clone()))?
        };
        if repeat == 0 {
            return Err(MoveScriptError::InvalidRepeat(digits));
        }

        script.push(direction);
        script.extend(std::iter::repeat(Direction::None).take(repeat - 1));
    }

    Ok(script)
}

fn heading_for(symbol: char) -> Option<Direction> {
    match symbol.to_ascii_uppercase() {
        'U' => Some(Direction::Up),
        'D' => Some(Direction::Down),
        'L' => Some(Direction::Left),
        'R' => Some(Direction::Right),
        '.' => Some(Direction::None),
        _ => None,
    }
}
