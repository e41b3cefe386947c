use std::io::{self, BufRead};

use common::games::tictactoe::Position;

/// Parses `"<row> <col>"`.
pub fn parse_move(line: &str) -> Result<Position, String> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Expected a row and a column separated by a space".to_string());
    };

    let row = row
        .parse::<usize>()
        .map_err(|_| format!("Invalid row '{}'", row))?;
    let col = col
        .parse::<usize>()
        .map_err(|_| format!("Invalid column '{}'", col))?;

    let pos = Position::new(row, col);
    if !pos.is_on_board() {
        return Err("Position out of bounds".to_string());
    }
    Ok(pos)
}

/// Reads one line; end of input is an error so the game cannot spin forever.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Input closed before the game finished",
        ));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_move() {
        assert_eq!(parse_move("1 2\n"), Ok(Position::new(1, 2)));
        assert_eq!(parse_move("  0\t0  "), Ok(Position::new(0, 0)));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(parse_move("").is_err());
        assert!(parse_move("1").is_err());
        assert!(parse_move("1 2 3").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numbers_and_negatives() {
        assert_eq!(parse_move("a 1"), Err("Invalid row 'a'".to_string()));
        assert_eq!(parse_move("1 -1"), Err("Invalid column '-1'".to_string()));
    }

    #[test]
    fn test_parse_rejects_off_board() {
        assert_eq!(parse_move("3 0"), Err("Position out of bounds".to_string()));
    }

    #[test]
    fn test_read_line_reports_eof() {
        let mut input: &[u8] = b"2 2\n";
        assert_eq!(read_line(&mut input).unwrap(), "2 2\n");
        let err = read_line(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
