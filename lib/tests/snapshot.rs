use lifestat_lib::{Config, Error as LifeError, World, ALIVE};
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;

fn blank(columns: usize, rows: usize) -> Result<World, LifeError> {
    Config::new(columns, rows, 1).set_density(0.0).world()
}

#[test]
fn snapshot_format() -> Result<(), Box<dyn Error>> {
    let mut world = blank(4, 3)?;
    world.set_cell(0, 0, ALIVE);
    world.set_cell(3, 1, ALIVE);
    world.set_cell(1, 2, ALIVE);
    assert_eq!(world.snapshot(), "1000\n0001\n0100\n");
    assert_eq!(world.plaintext(), "o...\n...o\n.o..\n");
    Ok(())
}

#[test]
fn restore() -> Result<(), Box<dyn Error>> {
    let saved = Config::new(30, 20, 1)
        .set_density(0.4)
        .world_with(&mut StdRng::seed_from_u64(3))?;
    let mut world = blank(30, 20)?;
    world.advance();
    world.load_snapshot("saved", &saved.snapshot())?;
    assert_eq!(world.generation(), 0);
    assert_eq!(world, saved);
    Ok(())
}

#[test]
fn restore_from_file() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join(format!("lifestat-backup-{}.txt", std::process::id()));
    let saved = Config::new(12, 9, 1)
        .set_density(0.5)
        .world_with(&mut StdRng::seed_from_u64(5))?;
    saved.save_snapshot_file(&path)?;
    let mut world = blank(12, 9)?;
    let result = world.load_snapshot_file(&path);
    std::fs::remove_file(&path)?;
    result?;
    assert_eq!(world.snapshot(), saved.snapshot());
    Ok(())
}

#[test]
fn short_line() -> Result<(), Box<dyn Error>> {
    let mut world = blank(4, 3)?;
    world.set_cell(2, 2, ALIVE);
    let before = world.clone();
    assert_eq!(
        world.load_snapshot("backup", "1111\n111\n1111\n"),
        Err(LifeError::LineLength {
            origin: String::from("backup"),
            line: 2,
            column: 4,
            expected: 4,
            found: 3,
        })
    );
    assert_eq!(world, before);
    Ok(())
}

#[test]
fn long_line() -> Result<(), Box<dyn Error>> {
    let mut world = blank(4, 3)?;
    assert_eq!(
        world.load_snapshot("backup", "0000\n0000\n00000\n"),
        Err(LifeError::LineLength {
            origin: String::from("backup"),
            line: 3,
            column: 5,
            expected: 4,
            found: 5,
        })
    );
    Ok(())
}

#[test]
fn wrong_row_count() -> Result<(), Box<dyn Error>> {
    let mut world = blank(4, 3)?;
    assert_eq!(
        world.load_snapshot("backup", "0000\n0000\n"),
        Err(LifeError::LineCount {
            origin: String::from("backup"),
            expected: 3,
            found: 2,
        })
    );
    assert_eq!(
        world.load_snapshot("backup", ""),
        Err(LifeError::EmptyPattern(String::from("backup")))
    );
    Ok(())
}

#[test]
fn missing_file() -> Result<(), Box<dyn Error>> {
    let mut world = blank(4, 3)?;
    let path = std::env::temp_dir().join("lifestat-no-such-backup.txt");
    match world.load_snapshot_file(&path) {
        Err(LifeError::IoError(p, _)) => assert_eq!(p, path),
        other => panic!("unexpected result: {:?}", other),
    }
    Ok(())
}

#[test]
fn restored_worlds_are_equal() -> Result<(), Box<dyn Error>> {
    let mut advanced = blank(6, 6)?;
    for x in 1..=3 {
        advanced.set_cell(x, 2, ALIVE);
    }
    advanced.advance();
    let snapshot = advanced.snapshot();

    let mut fresh = World::new(6, 6)?;
    advanced.load_snapshot("blinker", &snapshot)?;
    fresh.load_snapshot("blinker", &snapshot)?;
    assert_eq!(advanced.generation(), fresh.generation());
    assert_eq!(advanced, fresh);

    advanced.advance();
    fresh.advance();
    assert_eq!(advanced, fresh);
    Ok(())
}
