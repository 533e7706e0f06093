use std::io::{BufRead, Write};

use stackconquer::{Board, Move, Okay, Player, Request, Rules};

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, player: Player, rules: Rules);
    fn make_move(&mut self, board: Board, stones_left: bool) -> Move;

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        self.serve(stdin, stdout)
    }

    /// Answers requests from `input` on `output`, one JSON document per line,
    /// until `Bye` or EOF.
    fn serve(&mut self, mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = input.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the judge has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            match req {
                Request::NewGame { player, rules } => {
                    self.new_game(player, rules);
                    serde_json::to_writer(&mut output, &Okay())?;
                }
                Request::MakeMove { board, stones_left } => {
                    serde_json::to_writer(&mut output, &self.make_move(board, stones_left))?
                }
                Request::Bye => break Ok(()),
            }
            writeln!(output)?;
            output.flush()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use stackconquer::Pos;

    use super::*;

    struct FirstFreeBot {
        player: Option<Player>,
    }

    impl Bot for FirstFreeBot {
        fn new_game(&mut self, player: Player, _rules: Rules) {
            self.player = Some(player);
        }

        fn make_move(&mut self, board: Board, _stones_left: bool) -> Move {
            Move::Place(board.first_free_cell().unwrap_or(Pos::new(0, 0)))
        }
    }

    #[test]
    fn serve_answers_each_request() {
        let input = concat!(
            r#"{"type":"NewGame","player":2,"rules":{}}"#,
            "\n",
            r#"{"type":"MakeMove","board":[[[1],[]],[[],[]]],"stones_left":true}"#,
            "\n",
            r#"{"type":"Bye"}"#,
            "\n",
            r#"{"type":"MakeMove","board":[[[]]],"stones_left":true}"#,
            "\n",
        );
        let mut output = Vec::new();
        let mut bot = FirstFreeBot { player: None };
        bot.serve(input.as_bytes(), &mut output).unwrap();
        assert_eq!(bot.player, Some(Player::Two));
        assert_eq!(String::from_utf8(output).unwrap(), "[]\n\"0,1\"\n");
    }

    #[test]
    fn serve_rejects_invalid_board() {
        let input = r#"{"type":"MakeMove","board":[[[1],[]]],"stones_left":true}"#;
        let mut bot = FirstFreeBot { player: None };
        assert!(bot.serve(input.as_bytes(), Vec::new()).is_err());
    }
}
