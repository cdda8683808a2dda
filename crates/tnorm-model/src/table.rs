//! Column-oriented table of [`Cell`] values.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{ModelError, Result};

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the cells that are not blank, with their row index.
    pub fn non_blank(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_blank())
    }
}

/// Ordered set of named, row-aligned columns.
///
/// Every column has the same number of rows and column names are unique.
/// Both invariants are checked whenever a column is added.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table from columns, validating names and lengths.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut table = Self::default();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Builder-style variant of [`Table::push_column`].
    pub fn with_column(mut self, name: impl Into<String>, cells: Vec<Cell>) -> Result<Self> {
        self.push_column(Column::new(name, cells))?;
        Ok(self)
    }

    /// Appends a column.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.column(&column.name).is_some() {
            return Err(ModelError::DuplicateColumn { name: column.name });
        }
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(ModelError::LengthMismatch {
                    name: column.name,
                    expected: first.len(),
                    got: column.cells.len(),
                });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Replaces the cells of an existing column.
    ///
    /// Returns `Ok(false)` when no column has that name.
    pub fn replace_cells(&mut self, name: &str, cells: Vec<Cell>) -> Result<bool> {
        let expected = self.height();
        let Some(column) = self.columns.iter_mut().find(|c| c.name == name) else {
            return Ok(false);
        };
        if cells.len() != expected {
            return Err(ModelError::LengthMismatch {
                name: name.to_string(),
                expected,
                got: cells.len(),
            });
        }
        column.cells = cells;
        Ok(true)
    }

    /// Applies `f` to every cell of every column, producing a new table.
    pub fn map_cells(&self, mut f: impl FnMut(&Cell) -> Cell) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name.clone(), c.cells.iter().map(&mut f).collect()))
            .collect();
        Self { columns }
    }
}
