//! # Built-in Material Catalog
//!
//! The shop's stock list with per-sheet prices by density.
//!
//! Stock prices change rarely and are maintained here rather than in the
//! remote pricing sheet; a feed's material section, if any, is ignored in
//! favor of this catalog. Prices are per SRA3 sheet.

use printcalc_core::money::Money;
use printcalc_core::types::Material;

/// The full stock catalog.
///
/// Order matters twice: the frontend lists stocks in this order, and a
/// density mismatch falls back to each material's FIRST listed density.
pub fn builtin_materials() -> Vec<Material> {
    vec![
        Material::new(
            "Офсет бумага",
            &[
                (80.0, Money::from_major_minor(6, 32)),
                (160.0, Money::from_rubles(10)),
            ],
        ),
        Material::new(
            "Мелованная бумага",
            &[
                (125.0, Money::from_major_minor(11, 20)),
                (150.0, Money::from_major_minor(12, 48)),
                (200.0, Money::from_major_minor(16, 67)),
                (250.0, Money::from_major_minor(21, 22)),
                (300.0, Money::from_major_minor(23, 47)),
                (350.0, Money::from_major_minor(26, 11)),
            ],
        ),
        Material::new(
            "Картон мелованный",
            &[(300.0, Money::from_major_minor(43, 42))],
        ),
        Material::new("Лён", &[(300.0, Money::from_major_minor(61, 69))]),
        Material::new(
            "Majestic светлый",
            &[(290.0, Money::from_major_minor(92, 15))],
        ),
        Material::new(
            "Touch cover светлый (plike)",
            &[(301.0, Money::from_major_minor(132, 10))],
        ),
        Material::new("Крафт", &[(350.0, Money::from_major_minor(62, 50))]),
        Material::new(
            "Колор копи",
            &[
                (90.0, Money::from_major_minor(7, 31)),
                (300.0, Money::from_major_minor(30, 7)),
                (350.0, Money::from_major_minor(32, 6)),
                (400.0, Money::from_major_minor(36, 55)),
            ],
        ),
    ]
}

/// Looks a material up by its display name (trimmed exact match).
pub fn find_material<'a>(materials: &'a [Material], name: &str) -> Option<&'a Material> {
    let name = name.trim();
    materials.iter().find(|material| material.name == name)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_order() {
        let materials = builtin_materials();
        assert_eq!(materials.len(), 8);
        assert_eq!(materials[0].name, "Офсет бумага");
        assert_eq!(materials[7].name, "Колор копи");
    }

    #[test]
    fn test_denylisted_stocks_are_present_and_flagged() {
        let materials = builtin_materials();
        let denied: Vec<&str> = materials
            .iter()
            .filter(|m| !m.is_laminable())
            .map(|m| m.name.as_str())
            .collect();

        assert_eq!(
            denied,
            vec![
                "Офсет бумага",
                "Лён",
                "Majestic светлый",
                "Touch cover светлый (plike)",
                "Крафт"
            ]
        );
    }

    #[test]
    fn test_coated_density_ladder() {
        let materials = builtin_materials();
        let coated = find_material(&materials, "Мелованная бумага").unwrap();

        assert_eq!(coated.densities.len(), 6);
        assert_eq!(coated.per_sheet_price(125.0), Money::from_kopecks(1120));
        assert_eq!(coated.per_sheet_price(350.0), Money::from_kopecks(2611));
    }

    #[test]
    fn test_find_material_trims() {
        let materials = builtin_materials();
        assert!(find_material(&materials, " Крафт ").is_some());
        assert!(find_material(&materials, "Неизвестный").is_none());
    }
}
