//! Every puzzle module registers itself exactly once

use std::collections::BTreeMap;

use aoc_solver::{SolverPlugin, SolverRegistryBuilder};
use aoc_solutions as _;

fn expected_days() -> BTreeMap<u16, Vec<u8>> {
    let mut days = BTreeMap::new();
    days.insert(2015, (1..=25).filter(|d| ![4, 19].contains(d)).collect());
    days.insert(2020, (1..=25).filter(|&d| d != 20).collect());
    days.insert(2021, (1..=25).filter(|d| ![19, 20, 24].contains(d)).collect());
    days.insert(2022, (1..=25).filter(|d| ![16, 19, 22].contains(d)).collect());
    days
}

#[test]
fn test_all_plugins_register() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins should not collide")
        .build();

    let mut found: BTreeMap<u16, Vec<u8>> = BTreeMap::new();
    for info in registry.storage().iter_info() {
        found.entry(info.year).or_default().push(info.day);
    }
    for days in found.values_mut() {
        days.sort_unstable();
    }
    assert_eq!(found, expected_days());
}

#[test]
fn test_tags_lead_with_year() {
    for plugin in inventory_plugins() {
        assert_eq!(
            plugin.tags.first().copied(),
            Some(plugin.year.to_string().as_str()),
            "{}/{} should be tagged with its year first",
            plugin.year,
            plugin.day
        );
    }
}

#[test]
fn test_parts_match_final_day() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    for info in registry.storage().iter_info() {
        let expected = if info.day == 25 { 1 } else { 2 };
        assert_eq!(info.parts, expected, "{}/{}", info.year, info.day);
    }
}

#[test]
fn test_filtered_registration() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"cellular-automaton"))
        .unwrap()
        .build();
    assert!(registry.storage().contains(2020, 17));
    assert!(!registry.storage().contains(2020, 1));
}

#[test]
fn test_malformed_input_is_a_parse_error() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    assert!(registry.create_solver(2021, 2, "sideways 3\n").is_err());
}

#[test]
fn test_solver_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2015, 1, "(()(()(").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert!(solver.solve(3).is_err());
}

fn inventory_plugins() -> impl Iterator<Item = &'static SolverPlugin> {
    aoc_solver::inventory::iter::<SolverPlugin>().into_iter()
}
