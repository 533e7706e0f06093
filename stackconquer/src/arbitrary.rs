use crate::{Board, Player, Pos};

impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Player::BOTH).unwrap()
    }
}

impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = (u8::arbitrary(g) % 7) as i8 + 1;
        let mut board = Board::empty(size).unwrap();
        for x in 0..size {
            for y in 0..size {
                // About half of the fields are empty, and towers are mostly low,
                // so that paths are both blocked and clear reasonably often
                let height = match u8::arbitrary(g) % 8 {
                    0..=3 => 0,
                    4 | 5 => 1,
                    6 => 2,
                    _ => (u8::arbitrary(g) % 4) as usize + 1,
                };
                let tokens: Vec<Player> = (0..height).map(|_| Player::arbitrary(g)).collect();
                board = board.with_tower(Pos::new(x, y), &tokens);
            }
        }
        board
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Try removing one tower at a time
        let board = self.clone();
        Box::new(
            self.iter()
                .filter(|(_, tower)| !tower.is_empty())
                .map(|(pos, _)| pos)
                .collect::<Vec<_>>()
                .into_iter()
                .map(move |pos| board.clone().with_tower(pos, &[])),
        )
    }
}
