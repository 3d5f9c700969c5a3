use std::collections::HashSet;

use super::*;
use crate::catalog::fluorochrome_catalog;

fn marker(name: &str, expression: ExpressionLevel) -> AnnotatedMarker {
    AnnotatedMarker {
        marker: name.to_string(),
        description: String::new(),
        expression,
    }
}

fn cycle_markers(n: usize) -> Vec<AnnotatedMarker> {
    let levels = [
        ExpressionLevel::Low,
        ExpressionLevel::Medium,
        ExpressionLevel::High,
    ];
    (0..n)
        .map(|i| marker(&format!("CD{}", i + 1), levels[i % levels.len()]))
        .collect()
}

fn fluor_names(panel: &Panel) -> Vec<Option<&'static str>> {
    panel.entries.iter().map(|e| e.fluorochrome).collect()
}

#[test]
fn test_empty_input_gives_empty_panel() {
    let panel = assign_fluorochromes(&[], fluorochrome_catalog());
    assert!(panel.entries.is_empty());
}

#[test]
fn test_single_low_takes_brightest_first_in_catalog() {
    let markers = [marker("CD11c", ExpressionLevel::Low)];
    let panel = assign_fluorochromes(&markers, fluorochrome_catalog());
    assert_eq!(fluor_names(&panel), vec![Some("PE")]);
}

#[test]
fn test_single_high_takes_dimmest() {
    let markers = [marker("CD3", ExpressionLevel::High)];
    let panel = assign_fluorochromes(&markers, fluorochrome_catalog());
    assert_eq!(fluor_names(&panel), vec![Some("PerCP-Cy5.5")]);
}

#[test]
fn test_single_medium_takes_first_brightness_six() {
    let markers = [marker("CD56", ExpressionLevel::Medium)];
    let panel = assign_fluorochromes(&markers, fluorochrome_catalog());
    assert_eq!(fluor_names(&panel), vec![Some("APC-Cy7")]);
}

#[test]
fn test_second_low_takes_tied_brightest_later_in_catalog() {
    let markers = vec![
        marker("CD11c", ExpressionLevel::Low),
        marker("FoxP3", ExpressionLevel::Low),
        marker("PD-1", ExpressionLevel::Low),
    ];
    let panel = assign_fluorochromes(&markers, fluorochrome_catalog());
    assert_eq!(
        fluor_names(&panel),
        vec![Some("PE"), Some("Zombie Aqua"), Some("APC")]
    );
}

#[test]
fn test_high_markers_walk_up_from_dimmest() {
    let markers = vec![
        marker("CD3", ExpressionLevel::High),
        marker("CD4", ExpressionLevel::High),
        marker("CD8", ExpressionLevel::High),
        marker("CD19", ExpressionLevel::High),
    ];
    let panel = assign_fluorochromes(&markers, fluorochrome_catalog());
    assert_eq!(
        fluor_names(&panel),
        vec![Some("PerCP-Cy5.5"), Some("FITC"), Some("BB515"), Some("AF700")]
    );
}

#[test]
fn test_medium_markers_follow_catalog_order_among_ties() {
    let markers: Vec<_> = (0..6)
        .map(|i| marker(&format!("CD{}", 100 + i), ExpressionLevel::Medium))
        .collect();
    let panel = assign_fluorochromes(&markers, fluorochrome_catalog());
    assert_eq!(
        fluor_names(&panel),
        vec![
            Some("APC-Cy7"),
            Some("PE-Cy7"),
            Some("BV605"),
            Some("BV650"),
            Some("BV510"),
            Some("BUV395"),
        ]
    );
}

#[test]
fn test_order_dependence_low_then_high() {
    let low_high = vec![
        marker("CD11c", ExpressionLevel::Low),
        marker("CD3", ExpressionLevel::High),
    ];
    let panel = assign_fluorochromes(&low_high, fluorochrome_catalog());
    assert_eq!(fluor_names(&panel), vec![Some("PE"), Some("PerCP-Cy5.5")]);
}

#[test]
fn test_swapping_order_changes_assignment() {
    let catalog = [
        Fluorochrome {
            name: "A",
            brightness: 8,
        },
        Fluorochrome {
            name: "B",
            brightness: 3,
        },
    ];
    let low_first = vec![
        marker("CD11c", ExpressionLevel::Low),
        marker("CD56", ExpressionLevel::Medium),
    ];
    let panel = assign_fluorochromes(&low_first, &catalog);
    assert_eq!(fluor_names(&panel), vec![Some("A"), Some("B")]);

    let medium_first = vec![
        marker("CD56", ExpressionLevel::Medium),
        marker("CD11c", ExpressionLevel::Low),
    ];
    let panel = assign_fluorochromes(&medium_first, &catalog);
    assert_eq!(fluor_names(&panel), vec![Some("A"), Some("B")]);
    assert_eq!(panel.entries[1].marker, "CD11c");
    assert_eq!(panel.entries[1].fluorochrome, Some("B"));
}

#[test]
fn test_output_preserves_length_order_and_levels() {
    for n in [1usize, 5, 16, 17, 25] {
        let markers = cycle_markers(n);
        let panel = assign_fluorochromes(&markers, fluorochrome_catalog());
        assert_eq!(panel.len(), n);
        for (entry, m) in panel.entries.iter().zip(markers.iter()) {
            assert_eq!(entry.marker, m.marker);
            assert_eq!(entry.expression, m.expression);
        }
    }
}

#[test]
fn test_fluorochromes_unique_within_run() {
    for n in [3usize, 16, 20] {
        let panel = assign_fluorochromes(&cycle_markers(n), fluorochrome_catalog());
        let mut seen = HashSet::new();
        for name in panel.entries.iter().filter_map(|e| e.fluorochrome) {
            assert!(seen.insert(name), "{name} assigned twice");
        }
    }
}

#[test]
fn test_full_catalog_assigned_when_markers_fit() {
    let catalog = fluorochrome_catalog();
    let panel = assign_fluorochromes(&cycle_markers(catalog.len()), catalog);
    assert_eq!(panel.n_assigned(), catalog.len());
    assert_eq!(panel.n_unassigned(), 0);
}

#[test]
fn test_markers_beyond_catalog_are_unassigned() {
    let catalog = fluorochrome_catalog();
    let n = catalog.len() + 4;
    let panel = assign_fluorochromes(&cycle_markers(n), catalog);
    assert_eq!(panel.n_unassigned(), 4);
    for (idx, entry) in panel.entries.iter().enumerate() {
        assert_eq!(entry.fluorochrome.is_some(), idx < catalog.len());
    }
}

#[test]
fn test_empty_catalog_never_fails() {
    let markers = cycle_markers(3);
    let panel = assign_fluorochromes(&markers, &[]);
    assert_eq!(panel.len(), 3);
    assert_eq!(panel.n_assigned(), 0);
}

#[test]
fn test_mismatch_score_per_level() {
    assert_eq!(mismatch_score(ExpressionLevel::Low, 10), 0);
    assert_eq!(mismatch_score(ExpressionLevel::Low, 3), 7);
    assert_eq!(mismatch_score(ExpressionLevel::High, 3), 3);
    assert_eq!(mismatch_score(ExpressionLevel::Medium, 6), 0);
    assert_eq!(mismatch_score(ExpressionLevel::Medium, 4), 2);
    assert_eq!(mismatch_score(ExpressionLevel::Medium, 9), 3);
}

#[test]
fn test_run_stage3_matches_assign() {
    let markers = cycle_markers(18);
    let a = run_stage3(&markers, fluorochrome_catalog());
    let b = assign_fluorochromes(&markers, fluorochrome_catalog());
    assert_eq!(a.entries, b.entries);
}
