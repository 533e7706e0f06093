use crate::{Board, Player};

fn player_symbol(player: Player) -> char {
    match player {
        Player::One => '●',
        Player::Two => '○',
    }
}

/// Renders the owner and height of every tower, e.g. `●3` for a tower of
/// height 3 with player 1 on top.
pub fn visualize_board(board: &Board) -> String {
    let size = board.size();
    let mut result = String::from("    ");
    for y in 0..size {
        result += &format!("{:>3}", y);
    }
    result += "\n    ╭";
    for _ in 0..size {
        result += "───";
    }
    result += "╮";

    let mut last_x = None;
    for (pos, tower) in board.iter() {
        if last_x != Some(pos.x) {
            if last_x.is_some() {
                result += "│";
            }
            result += &format!("\n{:>3} │", pos.x);
            last_x = Some(pos.x);
        }
        match tower.top() {
            Some(player) => result += &format!("{}{:<2}", player_symbol(player), tower.height()),
            None => result += " · ",
        }
    }
    result += "│\n    ╰";
    for _ in 0..size {
        result += "───";
    }
    result += "╯";
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pos;

    #[test]
    fn small_board() {
        let board = Board::empty(2)
            .unwrap()
            .with_tower(Pos::new(0, 1), &[Player::Two, Player::One])
            .with_tower(Pos::new(1, 0), &[Player::Two]);
        let expected = [
            "      0  1",
            "    ╭──────╮",
            "  0 │ · ●2 │",
            "  1 │○1  · │",
            "    ╰──────╯",
        ]
        .join("\n");
        assert_eq!(visualize_board(&board), expected);
    }
}
