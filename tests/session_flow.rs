use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::tempdir;
use wasd_snake::{
    Collision, Command, Direction, GameConfig, GameStatus, Grid, HighScoreStore, JsonFileStore,
    Point, Session, TickEvent, tick, GameState,
};

fn seeded() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

#[test]
fn eating_from_the_start_position() {
    let state = GameState::with_layout(
        Grid::new(20),
        [Point::new(10, 10)],
        Direction::Right,
        Point::new(11, 10),
    );
    let (state, res) = tick(state, Direction::Right, &mut seeded());
    assert_eq!(res.event, TickEvent::Ate);
    assert_eq!(
        state.snake_segments().copied().collect::<Vec<_>>(),
        vec![Point::new(11, 10), Point::new(10, 10)]
    );
    assert_eq!(state.score(), 1);
    assert_eq!(state.status(), GameStatus::Running);
    let food = state.food().unwrap();
    assert_ne!(food, Point::new(11, 10));
    assert_ne!(food, Point::new(10, 10));
}

#[test]
fn corner_wall_crash() {
    let state = GameState::with_layout(Grid::new(20), [Point::new(0, 0)], Direction::Left, Point::new(15, 15))
        .with_score(2)
        .with_high_score(1);
    let (state, res) = tick(state, Direction::Left, &mut seeded());
    assert_eq!(res.event, TickEvent::Crashed(Collision::Wall));
    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.head(), Point::new(0, 0));
    assert_eq!(state.snake_len(), 1);
    assert_eq!(state.high_score(), 2);
}

#[test]
fn high_score_survives_a_restart_of_the_program() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("best.json");

    let mut session =
        Session::with_seed(GameConfig::default(), JsonFileStore::new(&path), 9).unwrap();
    // Food at (15,15): five down, five right.
    session.handle(Command::Steer(Direction::Down));
    for _ in 0..5 {
        session.tick();
    }
    session.handle(Command::Steer(Direction::Right));
    for _ in 0..5 {
        session.tick();
    }
    assert_eq!(session.snapshot().score, 1);

    // Straight up into the top wall.
    session.handle(Command::Steer(Direction::Up));
    while !session.status().is_over() {
        session.tick();
    }
    let best = session.snapshot().high_score;
    assert!(best >= 1);
    assert_eq!(JsonFileStore::new(&path).load().unwrap(), best);

    let again = Session::with_seed(GameConfig::default(), JsonFileStore::new(&path), 10).unwrap();
    assert_eq!(again.snapshot().high_score, best);
    assert_eq!(again.snapshot().score, 0);
}

#[test]
fn restart_restores_the_opening_layout() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("best.json"));
    let mut session = Session::with_seed(GameConfig::default(), store, 1).unwrap();
    let opening = session.snapshot();

    session.handle(Command::Steer(Direction::Up));
    while !session.status().is_over() {
        session.tick();
    }
    assert!(session.snapshot().game_over);

    assert!(session.handle(Command::Restart));
    assert_eq!(session.snapshot(), opening);
    assert_eq!(session.status(), GameStatus::Running);
}
