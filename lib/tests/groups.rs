use lifestat_lib::{Config, Error as LifeError, World, ALIVE};
use rand::{rngs::StdRng, SeedableRng};
use std::{collections::HashSet, error::Error};

fn blank(columns: usize, rows: usize) -> Result<World, LifeError> {
    Config::new(columns, rows, 1).set_density(0.0).world()
}

#[test]
fn no_living_cells() -> Result<(), Box<dyn Error>> {
    let world = blank(10, 10)?;
    assert!(world.groups().is_empty());
    assert_eq!(world.group_count(), 0);
    Ok(())
}

#[test]
fn one_living_cell() -> Result<(), Box<dyn Error>> {
    let mut world = blank(10, 10)?;
    world.set_cell(0, 0, ALIVE);
    let groups = world.groups();
    assert_eq!(groups, vec![vec![(0, 0)]]);
    assert_eq!(world.group_count(), 1);
    Ok(())
}

#[test]
fn two_vertically_adjacent_cells() -> Result<(), Box<dyn Error>> {
    let mut world = blank(10, 10)?;
    world.set_cell(0, 0, ALIVE);
    world.set_cell(0, 1, ALIVE);
    let groups = world.groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
    assert!(groups[0].contains(&(0, 0)));
    assert!(groups[0].contains(&(0, 1)));
    assert_eq!(world.group_count(), 1);
    Ok(())
}

#[test]
fn disconnected_cells() -> Result<(), Box<dyn Error>> {
    let mut world = blank(10, 10)?;
    world.set_cell(0, 0, ALIVE);
    world.set_cell(2, 2, ALIVE);
    let groups = world.groups();
    assert_eq!(groups, vec![vec![(0, 0)], vec![(2, 2)]]);
    Ok(())
}

#[test]
fn groups_in_discovery_order() -> Result<(), Box<dyn Error>> {
    let mut world = blank(10, 10)?;
    world.set_cell(5, 5, ALIVE);
    world.set_cell(0, 1, ALIVE);
    world.set_cell(0, 0, ALIVE);
    let groups = world.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[0][0], (0, 0));
    assert_eq!(groups[1], vec![(5, 5)]);
    Ok(())
}

#[test]
fn row_and_column() -> Result<(), Box<dyn Error>> {
    let mut world = blank(10, 10)?;
    for x in 0..3 {
        world.set_cell(x, 0, ALIVE);
    }
    assert_eq!(world.group_count(), 1);

    let mut world = blank(10, 10)?;
    for y in 0..3 {
        world.set_cell(0, y, ALIVE);
    }
    assert_eq!(world.group_count(), 1);
    Ok(())
}

#[test]
fn diagonal_neighbors() -> Result<(), Box<dyn Error>> {
    let mut world = blank(10, 10)?;
    world.set_cell(3, 3, ALIVE);
    world.set_cell(4, 4, ALIVE);
    world.set_cell(6, 2, ALIVE);
    world.set_cell(5, 3, ALIVE);
    assert_eq!(world.group_count(), 1);
    Ok(())
}

#[test]
fn wrapping_neighbors() -> Result<(), Box<dyn Error>> {
    // Opposite corners touch diagonally across both edges.
    let mut world = blank(10, 10)?;
    world.set_cell(0, 0, ALIVE);
    world.set_cell(9, 9, ALIVE);
    assert_eq!(world.group_count(), 1);

    let mut world = blank(10, 7)?;
    world.set_cell(9, 3, ALIVE);
    world.set_cell(0, 4, ALIVE);
    world.set_cell(4, 6, ALIVE);
    world.set_cell(4, 0, ALIVE);
    let groups = world.groups();
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.len() == 2));
    Ok(())
}

#[test]
fn full_world() -> Result<(), Box<dyn Error>> {
    for &(columns, rows) in [(2, 2), (10, 10), (3, 17)].iter() {
        let world = Config::new(columns, rows, 1).set_density(1.0).world()?;
        let groups = world.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), columns * rows);
    }
    Ok(())
}

#[test]
fn large_component() -> Result<(), Box<dyn Error>> {
    let world = Config::new(600, 600, 1).set_density(1.0).world()?;
    assert_eq!(world.group_count(), 1);
    Ok(())
}

#[test]
fn partition() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(2024);
    for &density in [0.1, 0.3, 0.5, 0.8].iter() {
        let world = Config::new(37, 23, 1)
            .set_density(density)
            .world_with(&mut rng)?;
        let groups = world.groups();
        let mut seen = HashSet::new();
        for cell in groups.iter().flatten() {
            assert!(world.is_alive(cell.0 as isize, cell.1 as isize));
            assert!(seen.insert(*cell));
        }
        assert_eq!(seen.len(), world.population());
        assert_eq!(world.group_count(), groups.len());
    }
    Ok(())
}

#[test]
fn separated_groups_are_not_adjacent() -> Result<(), Box<dyn Error>> {
    let world = Config::new(20, 20, 1)
        .set_density(0.25)
        .world_with(&mut StdRng::seed_from_u64(11))?;
    let groups = world.groups();
    for (i, a) in groups.iter().enumerate() {
        for b in groups.iter().skip(i + 1) {
            for &(ax, ay) in a {
                for &(bx, by) in b {
                    let dx = (ax as isize - bx as isize).rem_euclid(20);
                    let dy = (ay as isize - by as isize).rem_euclid(20);
                    let near = |d: isize| d <= 1 || d >= 19;
                    assert!(!(near(dx) && near(dy)));
                }
            }
        }
    }
    Ok(())
}

#[test]
fn cells_in_stack_order() -> Result<(), Box<dyn Error>> {
    // (0, 1) is pushed before (1, 0), so (1, 0) is popped first.
    let mut world = blank(10, 10)?;
    world.set_cell(0, 0, ALIVE);
    world.set_cell(0, 1, ALIVE);
    world.set_cell(1, 0, ALIVE);
    assert_eq!(world.groups(), vec![vec![(0, 0), (1, 0), (0, 1)]]);
    Ok(())
}
