//! Seed summary — which tables were touched and how many rows each holds.

use std::fmt;

/// Reporting group a table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableGroup {
  Core,
  Extended,
  Business,
}

impl TableGroup {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Core => "core",
      Self::Extended => "extended",
      Self::Business => "business",
    }
  }
}

/// Outcome of seeding one table.
#[derive(Debug, Clone)]
pub struct TableSeed {
  pub name:     &'static str,
  pub group:    TableGroup,
  /// Rows written by this run; 0 when re-running against a seeded file.
  pub inserted: usize,
  /// Rows present after the run.
  pub rows:     usize,
}

/// Summary of a completed seed run, in seed order.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
  tables: Vec<TableSeed>,
}

impl SeedReport {
  pub(crate) fn push(
    &mut self,
    name: &'static str,
    group: TableGroup,
    inserted: usize,
    rows: usize,
  ) {
    self.tables.push(TableSeed { name, group, inserted, rows });
  }

  pub fn tables(&self) -> &[TableSeed] { &self.tables }

  pub fn table_count(&self) -> usize { self.tables.len() }

  pub fn total_rows(&self) -> usize {
    self.tables.iter().map(|t| t.rows).sum()
  }

  pub fn total_inserted(&self) -> usize {
    self.tables.iter().map(|t| t.inserted).sum()
  }

  /// Names of the tables in `group`, in seed order.
  pub fn group_members(&self, group: TableGroup) -> Vec<&'static str> {
    self
      .tables
      .iter()
      .filter(|t| t.group == group)
      .map(|t| t.name)
      .collect()
  }
}

impl fmt::Display for SeedReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Sample commerce database seeded")?;
    for group in [TableGroup::Core, TableGroup::Extended, TableGroup::Business]
    {
      writeln!(
        f,
        "  {} tables: {}",
        group.as_str(),
        self.group_members(group).join(", ")
      )?;
    }
    write!(
      f,
      "{} tables, {} rows ({} inserted this run)",
      self.table_count(),
      self.total_rows(),
      self.total_inserted(),
    )
  }
}
