use gpui_roomba::{
    Direction, GridBounds, Motion, MotionController, Position, Presenter, TracingPresenter,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Default)]
struct Counter {
    turns: usize,
    moves: usize,
    last_direction: Option<Direction>,
    last_position: Option<Position>,
}

impl Presenter for Counter {
    fn on_direction_changed(&mut self, direction: Direction) {
        self.turns += 1;
        self.last_direction = Some(direction);
    }

    fn on_position_changed(&mut self, position: Position) {
        self.moves += 1;
        self.last_position = Some(position);
    }
}

#[test]
fn random_walk_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let bounds = GridBounds::new(rng.gen_range(1..8), rng.gen_range(1..8)).unwrap();
        let mut counter = Counter::default();
        let mut roomba = MotionController::new(bounds, &mut counter);

        for _ in 0..200 {
            let before = *roomba.state();
            let (turns, moves) = (roomba.presenter().turns, roomba.presenter().moves);

            if rng.gen_bool(0.3) {
                roomba.turn();
                assert_eq!(roomba.position(), before.position());
                assert_eq!(roomba.direction(), before.direction().clockwise());
                assert_eq!(roomba.presenter().turns, turns + 1);
                assert_eq!(roomba.presenter().moves, moves);
            } else {
                match roomba.advance() {
                    Motion::Moved(cell) => {
                        assert_eq!(roomba.direction(), before.direction());
                        assert_eq!(cell, before.position().offset(before.direction()));
                        assert_eq!(roomba.presenter().last_position, Some(cell));
                        assert_eq!(roomba.presenter().moves, moves + 1);
                        assert_eq!(roomba.presenter().turns, turns);
                    }
                    Motion::Turned(facing) => {
                        assert_eq!(roomba.position(), before.position());
                        assert_eq!(facing, before.direction().clockwise());
                        assert_eq!(roomba.presenter().last_direction, Some(facing));
                        assert_eq!(roomba.presenter().turns, turns + 1);
                        assert_eq!(roomba.presenter().moves, moves);
                    }
                }
            }

            assert!(bounds.contains(roomba.position()));
        }
    }
}

#[test]
fn full_lap_of_a_rectangle_returns_home() {
    let bounds = GridBounds::new(4, 3).unwrap();
    let mut roomba = MotionController::new(bounds, TracingPresenter);

    let mut moves = 0;
    let mut turns = 0;
    loop {
        match roomba.advance() {
            Motion::Moved(cell) => {
                moves += 1;
                if cell == Position::ORIGIN {
                    break;
                }
            }
            Motion::Turned(_) => turns += 1,
        }
    }

    assert_eq!(roomba.position(), Position::ORIGIN);
    assert_eq!(moves, 2 * (4 - 1) + 2 * (3 - 1));
    assert_eq!(turns, 4);
    assert_eq!(roomba.direction(), Direction::Up);
}

#[test]
fn single_row_bounces_between_ends() {
    let bounds = GridBounds::new(3, 1).unwrap();
    let mut roomba = MotionController::new(bounds, ());

    let trail: Vec<Motion> = (0..7).map(|_| roomba.advance()).collect();
    assert_eq!(
        trail,
        vec![
            Motion::Turned(Direction::Right),
            Motion::Moved(Position::new(1, 0)),
            Motion::Moved(Position::new(2, 0)),
            Motion::Turned(Direction::Down),
            Motion::Turned(Direction::Left),
            Motion::Moved(Position::new(1, 0)),
            Motion::Moved(Position::new(0, 0)),
        ]
    );
}
