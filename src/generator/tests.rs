use std::collections::HashSet;

use crate::generator::{GeneratorError, MaxResults, PlateGenerator};
use crate::pattern::PatternError;
use crate::plate::{Plate, symbol_sum_score};

fn rendered(plates: &[Plate]) -> Vec<String> {
    plates.iter().map(Plate::to_string).collect()
}

#[test]
fn test_two_by_two_scenario() {
    let mut generator = PlateGenerator::from_specs(&["0-1", "A-B"]);
    assert_eq!(generator.count(), 4);

    let plates = generator.generate(MaxResults::from(-1));
    assert_eq!(rendered(&plates), vec!["0A", "0B", "1A", "1B"]);
    let costs: Vec<f64> = plates.iter().map(Plate::cost).collect();
    assert_eq!(costs, vec![0.0, 1.0, 1.0, 2.0]);
}

#[test]
fn test_generate_clamps_to_count() {
    let mut generator = PlateGenerator::from_specs(&["0-2", "A-B"]);
    assert_eq!(generator.generate(MaxResults::Limit(100)).len(), 6);
    assert_eq!(generator.generate(MaxResults::All).len(), 6);
}

#[test]
fn test_generate_non_positive_is_empty() {
    let mut generator = PlateGenerator::from_specs(&["0-2", "A-B"]);
    assert!(generator.generate(MaxResults::from(0)).is_empty());
    assert!(generator.generate(MaxResults::from(-5)).is_empty());
    assert_eq!(generator.cached_len(), 0);
}

#[test]
fn test_generate_is_distinct_and_sorted() {
    let mut generator = PlateGenerator::from_specs(&["0-4", "A-E", "V-Z"]);
    let plates = generator.generate(MaxResults::Limit(60));
    assert_eq!(plates.len(), 60);
    assert!(plates.windows(2).all(|w| w[0].cost() <= w[1].cost()));

    let distinct: HashSet<Vec<usize>> = plates.iter().map(|p| p.indices().to_vec()).collect();
    assert_eq!(distinct.len(), 60);
}

#[test]
fn test_generate_all_covers_the_product() {
    let mut generator = PlateGenerator::from_specs(&["0-3", "A-C", "X,Y"]);
    let plates = generator.generate(MaxResults::All);
    assert_eq!(plates.len() as u64, generator.count());

    let mut expected = HashSet::new();
    for a in 0..4 {
        for b in 0..3 {
            for c in 0..2 {
                expected.insert(vec![a, b, c]);
            }
        }
    }
    let produced: HashSet<Vec<usize>> = plates.iter().map(|p| p.indices().to_vec()).collect();
    assert_eq!(produced, expected);
}

#[test]
fn test_prefix_is_stable() {
    let mut generator = PlateGenerator::from_specs(&["0-9", "A-F"]);
    let first = generator.generate(MaxResults::Limit(7));
    let second = generator.generate(MaxResults::Limit(30));
    assert_eq!(second.len(), 30);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.indices(), b.indices());
    }
}

#[test]
fn test_returned_list_is_a_copy() {
    let mut generator = PlateGenerator::from_specs(&["0-1", "A-B"]);
    let mut plates = generator.generate(MaxResults::All);
    plates.clear();
    assert_eq!(generator.generate(MaxResults::All).len(), 4);
}

#[test]
fn test_empty_pattern_collapses_count() {
    let mut generator = PlateGenerator::from_specs(&["0-9", "AB"]);
    assert_eq!(generator.count(), 0);
    assert!(generator.generate(MaxResults::All).is_empty());
}

#[test]
fn test_no_patterns() {
    let specs: [&str; 0] = [];
    let mut generator = PlateGenerator::from_specs(&specs);
    assert_eq!(generator.count(), 0);
    assert!(generator.generate(MaxResults::All).is_empty());
}

#[test]
fn test_visit_in_order() {
    let mut generator = PlateGenerator::from_specs(&["0-1", "A-B"]);
    let mut seen = Vec::new();
    generator.visit(MaxResults::Limit(3), |plate| seen.push(plate.to_string()));
    assert_eq!(seen, vec!["0A", "0B", "1A"]);
}

#[test]
fn test_try_visit_stops_on_error() {
    let mut generator = PlateGenerator::from_specs(&["0-1", "A-B"]);
    let mut seen = 0;
    let result = generator.try_visit(MaxResults::All, |plate| {
        seen += 1;
        if plate.to_string() == "0B" {
            Err(format!("rejected {}", plate))
        } else {
            Ok(())
        }
    });
    assert_eq!(result, Err("rejected 0B".to_string()));
    assert_eq!(seen, 2);
}

#[test]
fn test_find_best_returns_all_ties() {
    let mut generator = PlateGenerator::from_specs(&["0-2", "0-2"]);
    let best = generator.find_best_by_score(MaxResults::All, |plate| {
        (symbol_sum_score(plate) - 2.0).abs()
    });
    assert_eq!(rendered(&best), vec!["02", "11", "20"]);
}

#[test]
fn test_find_best_is_limited_to_prefix() {
    // Cost order starts 0A, 0B, 1A; the lowest score overall is 2C
    let mut generator = PlateGenerator::from_specs(&["0-2", "A-C"]);
    let score = |plate: &Plate| -symbol_sum_score(plate);

    let global = generator.find_best_by_score(MaxResults::All, score);
    assert_eq!(rendered(&global), vec!["2C"]);

    let limited = generator.find_best_by_score(MaxResults::Limit(3), score);
    assert_eq!(rendered(&limited), vec!["0B", "1A"]);
}

#[test]
fn test_find_best_ignores_nan() {
    let mut generator = PlateGenerator::from_specs(&["0-1"]);
    let best = generator.find_best_by_score(MaxResults::All, |plate| {
        if plate.to_string() == "0" { f64::NAN } else { 5.0 }
    });
    assert_eq!(rendered(&best), vec!["1"]);
}

#[test]
fn test_find_best_on_empty_product() {
    let mut generator = PlateGenerator::from_specs(&[""]);
    assert!(generator.find_best_by_score(MaxResults::All, symbol_sum_score).is_empty());
}

#[test]
fn test_try_from_specs_rejects_bad_alternatives() {
    let result = PlateGenerator::try_from_specs(&["0-9", "A,BC"]);
    assert!(matches!(
        result,
        Err(GeneratorError::Pattern {
            position: 1,
            source: PatternError::InvalidAlternative { .. }
        })
    ));

    let result = PlateGenerator::try_from_specs(&["0-9", ""]);
    assert!(matches!(
        result,
        Err(GeneratorError::EmptyPattern { position: 1, .. })
    ));

    let result = PlateGenerator::try_from_specs(&["0-9", "A-Z"]);
    assert!(result.is_ok());
    if let Ok(generator) = result {
        assert_eq!(generator.count(), 260);
        assert_eq!(generator.patterns().len(), 2);
    }
}

#[test]
fn test_try_visit_all_on_saturated_product_stops_early() {
    let specs = vec!["0-9,A-Z"; 14];
    let mut generator = PlateGenerator::from_specs(&specs);
    assert_eq!(generator.count_exact(), None);

    let mut seen: Vec<Plate> = Vec::new();
    let result = generator.try_visit(MaxResults::All, |plate| {
        seen.push(plate.clone());
        if seen.len() == 50 { Err("enough") } else { Ok(()) }
    });

    assert_eq!(result, Err("enough"));
    assert_eq!(seen.len(), 50);
    assert_eq!(generator.cached_len(), 50);
    assert!(seen.windows(2).all(|w| w[0].cost() <= w[1].cost()));
    let distinct: HashSet<Vec<usize>> = seen.iter().map(|p| p.indices().to_vec()).collect();
    assert_eq!(distinct.len(), 50);

    let first = generator.generate(MaxResults::Limit(5));
    assert_eq!(first.len(), 5);
    assert_eq!(first[0].to_string(), "0".repeat(14));
    assert_eq!(first[1].to_string(), format!("{}1", "0".repeat(13)));
    let costs: Vec<f64> = first.iter().map(Plate::cost).collect();
    assert_eq!(costs, vec![0.0, 1.0, 1.0, 1.0, 1.0]);
    for (a, b) in first.iter().zip(&seen) {
        assert_eq!(a.indices(), b.indices());
    }
}

#[test]
fn test_try_visit_all_on_product_too_large_for_memory() {
    let specs = vec!["0-9,A-Z"; 12];
    let mut generator = PlateGenerator::from_specs(&specs);
    assert_eq!(generator.count_exact(), Some(36u64.pow(12)));

    let mut seen = Vec::new();
    let result = generator.try_visit(MaxResults::All, |plate| {
        seen.push(plate.to_string());
        if seen.len() == 3 { Err(()) } else { Ok(()) }
    });

    assert_eq!(result, Err(()));
    assert_eq!(
        seen,
        vec![
            "0".repeat(12),
            format!("{}1", "0".repeat(11)),
            format!("{}10", "0".repeat(10)),
        ]
    );
}

#[test]
fn test_visit_matches_generate() {
    let mut generator = PlateGenerator::from_specs(&["0-3", "A-D"]);
    let mut visited = Vec::new();
    generator.visit(MaxResults::All, |plate| visited.push(plate.clone()));
    assert_eq!(visited, generator.generate(MaxResults::All));
}
