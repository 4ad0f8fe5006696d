//! Catalog module - built-in shape tables
//!
//! Offsets are `(row, col)` from the shape's top-left corner, already normalized.
//! The default catalog holds the thirteen shapes of the classic game; the extended
//! catalog adds the 3x3 square and the vertical Z/S variants.

use crate::shape::Shape;
use crate::types::ColorId;

/// Offsets of a catalog entry
type ShapeTable = &'static [(u8, u8)];

const SINGLE: ShapeTable = &[(0, 0)];
const LINE2: ShapeTable = &[(0, 0), (0, 1)];
const LINE2_V: ShapeTable = &[(0, 0), (1, 0)];
const LINE3: ShapeTable = &[(0, 0), (0, 1), (0, 2)];
const LINE3_V: ShapeTable = &[(0, 0), (1, 0), (2, 0)];
const LINE4: ShapeTable = &[(0, 0), (0, 1), (0, 2), (0, 3)];
const LINE4_V: ShapeTable = &[(0, 0), (1, 0), (2, 0), (3, 0)];
const SQUARE2: ShapeTable = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const SQUARE3: ShapeTable = &[
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];
// 2x2 corner
const L3: ShapeTable = &[(0, 0), (1, 0), (1, 1)];
// 3x2 L
const L4: ShapeTable = &[(0, 0), (1, 0), (2, 0), (2, 1)];
const T4: ShapeTable = &[(0, 0), (0, 1), (0, 2), (1, 1)];
const Z4: ShapeTable = &[(0, 0), (0, 1), (1, 1), (1, 2)];
const Z4_V: ShapeTable = &[(0, 1), (1, 0), (1, 1), (2, 0)];
const S4: ShapeTable = &[(0, 1), (0, 2), (1, 0), (1, 1)];
const S4_V: ShapeTable = &[(0, 0), (1, 0), (1, 1), (2, 1)];

const DEFAULT_TABLE: [(&str, ColorId, ShapeTable); 13] = [
    ("single", ColorId::RUBY, SINGLE),
    ("line2", ColorId::TEAL, LINE2),
    ("line2_v", ColorId::TEAL, LINE2_V),
    ("line3", ColorId::SAPPHIRE, LINE3),
    ("line3_v", ColorId::SAPPHIRE, LINE3_V),
    ("line4", ColorId::AMBER, LINE4),
    ("line4_v", ColorId::AMBER, LINE4_V),
    ("square2", ColorId::EMERALD, SQUARE2),
    ("l3", ColorId::CORAL, L3),
    ("l4", ColorId::AMETHYST, L4),
    ("t4", ColorId::ROSE, T4),
    ("z4", ColorId::RUBY, Z4),
    ("s4", ColorId::EMERALD, S4),
];

const EXTENDED_EXTRAS: [(&str, ColorId, ShapeTable); 3] = [
    ("square3", ColorId::AMETHYST, SQUARE3),
    ("z4_v", ColorId::RUBY, Z4_V),
    ("s4_v", ColorId::EMERALD, S4_V),
];

/// The thirteen-shape catalog used when no other catalog is configured
pub fn default_catalog() -> Vec<Shape> {
    DEFAULT_TABLE
        .iter()
        .map(|&(name, color, table)| Shape::from_table(name, color, table))
        .collect()
}

/// Default catalog plus the 3x3 square and vertical Z/S shapes
pub fn extended_catalog() -> Vec<Shape> {
    DEFAULT_TABLE
        .iter()
        .chain(EXTENDED_EXTRAS.iter())
        .map(|&(name, color, table)| Shape::from_table(name, color, table))
        .collect()
}

/// Look up a built-in shape by name (case-insensitive)
pub fn builtin_shape(name: &str) -> Option<Shape> {
    let wanted = name.to_lowercase();
    DEFAULT_TABLE
        .iter()
        .chain(EXTENDED_EXTRAS.iter())
        .find(|(n, _, _)| *n == wanted)
        .map(|&(name, color, table)| Shape::from_table(name, color, table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_thirteen_unique_shapes() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 13);
        for (i, a) in catalog.iter().enumerate() {
            for b in &catalog[i + 1..] {
                assert_ne!(a.cells(), b.cells(), "{} duplicates {}", a.name(), b.name());
            }
        }
    }

    #[test]
    fn tables_match_normalized_construction() {
        for shape in extended_catalog() {
            let offsets: Vec<(i32, i32)> = shape
                .cells()
                .iter()
                .map(|o| (o.row as i32, o.col as i32))
                .collect();
            let rebuilt = Shape::new(shape.name().to_string(), shape.color(), offsets).unwrap();
            assert_eq!(rebuilt, shape, "table for {} is not normalized", shape.name());
        }
    }

    #[test]
    fn block_counts_and_bounds() {
        let square3 = builtin_shape("SQUARE3").unwrap();
        assert_eq!(square3.block_count(), 9);
        assert_eq!(square3.bounds(), (3, 3));

        let l4 = builtin_shape("l4").unwrap();
        assert_eq!(l4.bounds(), (3, 2));
        assert_eq!(l4.to_string(), "#.\n#.\n##");

        assert!(builtin_shape("pentomino").is_none());
    }
}
