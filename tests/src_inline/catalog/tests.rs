use std::collections::HashSet;

use super::*;

#[test]
fn test_catalog_has_sixteen_unique_entries() {
    let catalog = fluorochrome_catalog();
    assert_eq!(catalog.len(), 16);
    let names: HashSet<_> = catalog.iter().map(|f| f.name).collect();
    assert_eq!(names.len(), catalog.len());
    assert!(
        catalog
            .iter()
            .all(|f| (3..=10).contains(&f.brightness))
    );
}

#[test]
fn test_catalog_order_is_stable() {
    let catalog = fluorochrome_catalog();
    assert_eq!(catalog[0].name, "PE");
    assert_eq!(catalog[7].name, "PerCP-Cy5.5");
    assert_eq!(catalog[8].name, "APC-Cy7");
    assert_eq!(catalog[15].name, "Zombie Aqua");
    assert_eq!(catalog[15].brightness, 10);
}

#[test]
fn test_lookup_expression_is_exact() {
    assert_eq!(lookup_expression("CD3"), Some(ExpressionLevel::High));
    assert_eq!(lookup_expression("FoxP3"), Some(ExpressionLevel::Low));
    assert_eq!(lookup_expression("HLA-DR"), Some(ExpressionLevel::Medium));
    assert_eq!(lookup_expression("FOXP3"), None);
    assert_eq!(lookup_expression(" CD3"), None);
    assert_eq!(expression_reference().len(), 12);
    assert_eq!(DEFAULT_EXPRESSION, ExpressionLevel::Medium);
}

#[test]
fn test_gating_steps_numbered() {
    for (idx, step) in gating_strategy_steps().iter().enumerate() {
        assert!(step.starts_with(&format!("{}. ", idx + 1)));
    }
    assert!(COMPENSATION_GUIDANCE.ends_with("compensation matrix."));
}
