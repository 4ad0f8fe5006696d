//! Shape module - immutable polyomino descriptors
//!
//! A shape is a set of block offsets relative to its top-left corner plus an
//! opaque color tag. Offsets are normalized on construction so the smallest row
//! and column offsets are both zero, then sorted row-major and de-duplicated.
//! Cells live in an inline `ArrayVec`, so cloning a shape never allocates cell storage.

use std::borrow::Cow;
use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{ColorId, Offset, MAX_GRID_DIM, MAX_SHAPE_CELLS};

/// A rigid arrangement of blocks placed as one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShapeDef", into = "ShapeDef")]
pub struct Shape {
    name: Cow<'static, str>,
    color: ColorId,
    cells: ArrayVec<Offset, MAX_SHAPE_CELLS>,
    height: u8,
    width: u8,
}

impl Shape {
    /// Build a shape from raw `(row, col)` offsets.
    ///
    /// Offsets may be negative or shifted; they are normalized so the minimum in
    /// each axis becomes zero. Duplicates are dropped.
    pub fn new<I>(
        name: impl Into<Cow<'static, str>>,
        color: ColorId,
        offsets: I,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let name = name.into();
        let raw: Vec<(i64, i64)> = offsets
            .into_iter()
            .map(|(r, c)| (i64::from(r), i64::from(c)))
            .collect();

        let (Some(min_row), Some(min_col)) = (
            raw.iter().map(|&(r, _)| r).min(),
            raw.iter().map(|&(_, c)| c).min(),
        ) else {
            return Err(ConfigError::EmptyShape {
                name: name.into_owned(),
            });
        };

        let mut normalized = Vec::with_capacity(raw.len());
        for (r, c) in raw {
            let (row, col) = (r - min_row, c - min_col);
            if row >= MAX_GRID_DIM as i64 || col >= MAX_GRID_DIM as i64 {
                return Err(ConfigError::OffsetOutOfRange {
                    name: name.into_owned(),
                    row,
                    col,
                });
            }
            normalized.push(Offset::new(row as u8, col as u8));
        }
        normalized.sort_unstable();
        normalized.dedup();

        if normalized.len() > MAX_SHAPE_CELLS {
            return Err(ConfigError::ShapeTooLarge {
                name: name.into_owned(),
                cells: normalized.len(),
                max: MAX_SHAPE_CELLS,
            });
        }

        let height = normalized.iter().map(|o| o.row).max().unwrap_or(0) + 1;
        let width = normalized.iter().map(|o| o.col).max().unwrap_or(0) + 1;

        Ok(Self {
            name,
            color,
            cells: normalized.into_iter().collect(),
            height,
            width,
        })
    }

    /// Build a shape from offsets already normalized, sorted and in range.
    /// Used for built-in catalog tables.
    pub(crate) fn from_table(name: &'static str, color: ColorId, offsets: &[(u8, u8)]) -> Self {
        debug_assert!(!offsets.is_empty() && offsets.len() <= MAX_SHAPE_CELLS);
        debug_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(offsets.iter().any(|&(r, _)| r == 0) && offsets.iter().any(|&(_, c)| c == 0));

        let cells: ArrayVec<Offset, MAX_SHAPE_CELLS> =
            offsets.iter().map(|&(r, c)| Offset::new(r, c)).collect();
        let height = cells.iter().map(|o| o.row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|o| o.col).max().unwrap_or(0) + 1;
        Self {
            name: Cow::Borrowed(name),
            color,
            cells,
            height,
            width,
        }
    }

    /// Build a shape from a text picture: `#` is a block, anything else is empty.
    ///
    /// ```
    /// use blockfit_core::Shape;
    /// use blockfit_core::types::ColorId;
    ///
    /// let t = Shape::from_rows("t4", ColorId::ROSE, &["###", ".#."]).unwrap();
    /// assert_eq!(t.block_count(), 4);
    /// assert_eq!(t.bounds(), (2, 3));
    /// ```
    pub fn from_rows(
        name: impl Into<Cow<'static, str>>,
        color: ColorId,
        rows: &[&str],
    ) -> Result<Self, ConfigError> {
        let mut offsets = Vec::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    offsets.push((r as i32, c as i32));
                }
            }
        }
        Self::new(name, color, offsets)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> ColorId {
        self.color
    }

    /// Cell offsets in row-major order
    pub fn cells(&self) -> &[Offset] {
        &self.cells
    }

    pub fn block_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounding box as `(height, width)`
    pub fn bounds(&self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Absolute `(row, col)` cells covered when the shape's corner sits at the origin
    ///
    /// Coordinates saturate at `i32::MAX`, which is outside every grid.
    pub fn cells_at(&self, origin_row: i32, origin_col: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().map(move |o| {
            (
                origin_row.saturating_add(i32::from(o.row)),
                origin_col.saturating_add(i32::from(o.col)),
            )
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                let filled = self.cells.contains(&Offset::new(row, col));
                write!(f, "{}", if filled { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

/// Serialized form of a shape, as written in config files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeDef {
    pub name: String,
    #[serde(default)]
    pub color: ColorId,
    pub cells: Vec<(i32, i32)>,
}

impl TryFrom<ShapeDef> for Shape {
    type Error = ConfigError;

    fn try_from(def: ShapeDef) -> Result<Self, Self::Error> {
        Shape::new(def.name, def.color, def.cells)
    }
}

impl From<Shape> for ShapeDef {
    fn from(shape: Shape) -> Self {
        Self {
            cells: shape
                .cells
                .iter()
                .map(|o| (o.row as i32, o.col as i32))
                .collect(),
            name: shape.name.into_owned(),
            color: shape.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_negative_and_shifted_offsets() {
        let shape = Shape::new("z", ColorId::RUBY, [(-1, 3), (-1, 4), (0, 4), (0, 5)]).unwrap();
        assert_eq!(
            shape.cells(),
            &[
                Offset::new(0, 0),
                Offset::new(0, 1),
                Offset::new(1, 1),
                Offset::new(1, 2)
            ]
        );
        assert_eq!(shape.bounds(), (2, 3));
    }

    #[test]
    fn duplicates_are_dropped() {
        let shape = Shape::new("dup", ColorId::TEAL, [(0, 0), (0, 1), (0, 0)]).unwrap();
        assert_eq!(shape.block_count(), 2);
    }

    #[test]
    fn empty_shape_is_rejected() {
        let err = Shape::new("none", ColorId::TEAL, []).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyShape { .. }));
    }

    #[test]
    fn oversized_shapes_are_rejected() {
        let wide = Shape::new("wide", ColorId::TEAL, [(0, 0), (0, 40)]).unwrap_err();
        assert!(matches!(wide, ConfigError::OffsetOutOfRange { col: 40, .. }));

        let blob: Vec<(i32, i32)> = (0..6).flat_map(|r| (0..6).map(move |c| (r, c))).collect();
        let err = Shape::new("blob", ColorId::TEAL, blob).unwrap_err();
        assert!(matches!(err, ConfigError::ShapeTooLarge { cells: 36, .. }));
    }

    #[test]
    fn from_rows_matches_explicit_offsets() {
        let pictured = Shape::from_rows("l3", ColorId::CORAL, &["#.", "##"]).unwrap();
        let explicit = Shape::new("l3", ColorId::CORAL, [(0, 0), (1, 0), (1, 1)]).unwrap();
        assert_eq!(pictured, explicit);
        assert_eq!(pictured.to_string(), "#.\n##");
    }

    #[test]
    fn cells_at_translates_offsets() {
        let shape = Shape::from_rows("line2", ColorId::TEAL, &["##"]).unwrap();
        let cells: Vec<_> = shape.cells_at(3, -1).collect();
        assert_eq!(cells, vec![(3, -1), (3, 0)]);
    }

    #[test]
    fn cells_at_saturates_at_extreme_origins() {
        let s4 = Shape::from_rows("s4", ColorId::EMERALD, &[".##", "##."]).unwrap();
        let cells: Vec<_> = s4.cells_at(i32::MAX, i32::MAX).collect();
        assert!(cells.iter().all(|&(r, c)| r == i32::MAX && c == i32::MAX));
        let low: Vec<_> = s4.cells_at(i32::MIN, i32::MIN).collect();
        assert_eq!(low[0], (i32::MIN, i32::MIN + 1));
    }
}
