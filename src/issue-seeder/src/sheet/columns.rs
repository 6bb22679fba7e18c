//! Spreadsheet column headers and their mapping onto [`SeedRow`] fields.

use super::row::{present, SeedRow};
use calamine::Data;
use std::collections::HashMap;

/// A column the seeder understands, identified by its header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Week,
    Squad,
    Role,
    Task,
    AiAssist,
    StudentId,
    SeedId,
    PrTitle,
    Description,
    Deliverables,
    AcceptanceCriteria,
    SuggestedFiles,
    VerificationCommand,
    SuggestedBranch,
    Reviewer,
    Notes,
}

impl Column {
    pub const ALL: [Column; 16] = [
        Column::Week,
        Column::Squad,
        Column::Role,
        Column::Task,
        Column::AiAssist,
        Column::StudentId,
        Column::SeedId,
        Column::PrTitle,
        Column::Description,
        Column::Deliverables,
        Column::AcceptanceCriteria,
        Column::SuggestedFiles,
        Column::VerificationCommand,
        Column::SuggestedBranch,
        Column::Reviewer,
        Column::Notes,
    ];

    /// Header text as it appears in the workbook.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Column::Week => "Semana",
            Column::Squad => "SQUAD",
            Column::Role => "Papel",
            Column::Task => "Tarefa",
            Column::AiAssist => "IA",
            Column::StudentId => "Id Aluno",
            Column::SeedId => "Issue UID",
            Column::PrTitle => "Título do PR",
            Column::Description => "Descrição",
            Column::Deliverables => "Entregáveis",
            Column::AcceptanceCriteria => "Critérios de Aceite",
            Column::SuggestedFiles => "Arquivos Sugeridos",
            Column::VerificationCommand => "Comando de Verificação",
            Column::SuggestedBranch => "Branch Sugerida",
            Column::Reviewer => "Revisor",
            Column::Notes => "Observações",
        }
    }

    fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == header)
    }
}

/// Header positions for one sheet. Columns absent from the sheet read as `None`.
#[derive(Debug, Default)]
pub struct ColumnMap {
    positions: HashMap<Column, usize>,
}

impl ColumnMap {
    /// Builds the map from a header row. The first occurrence of a header wins.
    pub fn from_headers(headers: &[Data]) -> Self {
        let mut positions = HashMap::new();
        for (idx, cell) in headers.iter().enumerate() {
            if let Some(column) = cell_text(cell).as_deref().and_then(Column::from_header) {
                positions.entry(column).or_insert(idx);
            }
        }
        Self { positions }
    }

    #[must_use]
    pub fn contains(&self, column: Column) -> bool {
        self.positions.contains_key(&column)
    }

    fn get(&self, cells: &[Data], column: Column) -> Option<String> {
        let idx = *self.positions.get(&column)?;
        cells.get(idx).and_then(cell_text)
    }

    /// Reads one data row into a [`SeedRow`].
    pub fn read_row(&self, row_number: usize, sheet: &str, cells: &[Data]) -> SeedRow {
        SeedRow {
            row_number,
            sheet: sheet.to_string(),
            seed_id: self.get(cells, Column::SeedId),
            task: self.get(cells, Column::Task),
            week: self.get(cells, Column::Week),
            squad: self.get(cells, Column::Squad),
            role: self.get(cells, Column::Role),
            student_id: self.get(cells, Column::StudentId),
            ai_assist: self.get(cells, Column::AiAssist),
            description: self.get(cells, Column::Description),
            deliverables: self.get(cells, Column::Deliverables),
            acceptance_criteria: self.get(cells, Column::AcceptanceCriteria),
            suggested_files: self.get(cells, Column::SuggestedFiles),
            verification_command: self.get(cells, Column::VerificationCommand),
            suggested_branch: self.get(cells, Column::SuggestedBranch),
            pr_title: self.get(cells, Column::PrTitle),
            reviewer: self.get(cells, Column::Reviewer),
            notes: self.get(cells, Column::Notes),
        }
    }
}

/// Whole floats below this magnitude convert to `i64` exactly.
const MAX_EXACT_WHOLE_FLOAT: f64 = 9.0e15;

/// Stringifies a cell. Empty and error cells are `None`.
pub(crate) fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => present(s),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            // Whole numbers come back as floats; "1.0" should read "1"
            if f.fract() == 0.0 && f.abs() < MAX_EXACT_WHOLE_FLOAT {
                Some((*f as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) if dt.is_datetime() => match dt.as_datetime() {
            Some(datetime) => Some(datetime.to_string()),
            None => present(cell.to_string()),
        },
        other => present(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{CellErrorType, ExcelDateTime, ExcelDateTimeType};

    fn s(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn cell_text_normalizes_values() {
        assert_eq!(cell_text(&Data::Float(1.0)), Some("1".to_string()));
        assert_eq!(cell_text(&Data::Float(1.5)), Some("1.5".to_string()));
        assert_eq!(cell_text(&Data::Int(7)), Some("7".to_string()));
        assert_eq!(cell_text(&Data::Bool(true)), Some("true".to_string()));
        assert_eq!(cell_text(&s("  Setup repo ")), Some("Setup repo".to_string()));
        assert_eq!(cell_text(&s("   ")), None);
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::Error(CellErrorType::NA)), None);
    }

    #[test]
    fn huge_whole_floats_keep_their_digits() {
        assert_eq!(
            cell_text(&Data::Float(1e20)),
            Some("100000000000000000000".to_string())
        );
        assert_eq!(
            cell_text(&Data::Float(-4_503_599_627_370_496.0)),
            Some("-4503599627370496".to_string())
        );
    }

    #[test]
    fn dates_render_as_timestamps() {
        // 45355 is 2024-03-04 in the 1900 date system
        let date = ExcelDateTime::new(45355.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            cell_text(&Data::DateTime(date)),
            Some("2024-03-04 00:00:00".to_string())
        );

        let noon = ExcelDateTime::new(45355.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            cell_text(&Data::DateTime(noon)),
            Some("2024-03-04 12:00:00".to_string())
        );
    }

    #[test]
    fn maps_headers_regardless_of_order() {
        let headers = [s("Tarefa"), s("Unrelated"), s(" Issue UID "), s("Semana")];
        let map = ColumnMap::from_headers(&headers);

        assert!(map.contains(Column::Task));
        assert!(map.contains(Column::SeedId));
        assert!(!map.contains(Column::Squad));

        let row = map.read_row(
            3,
            "Sprint",
            &[s("Setup repo"), s("ignored"), s("W1-01"), Data::Float(1.0)],
        );
        assert_eq!(row.row_number, 3);
        assert_eq!(row.sheet, "Sprint");
        assert_eq!(row.task.as_deref(), Some("Setup repo"));
        assert_eq!(row.seed_id.as_deref(), Some("W1-01"));
        assert_eq!(row.week.as_deref(), Some("1"));
        assert_eq!(row.squad, None);
    }

    #[test]
    fn short_rows_read_as_absent() {
        let map = ColumnMap::from_headers(&[s("Issue UID"), s("Tarefa"), s("Revisor")]);
        let row = map.read_row(1, "S", &[s("W1-02")]);

        assert_eq!(row.seed_id.as_deref(), Some("W1-02"));
        assert_eq!(row.task, None);
        assert_eq!(row.reviewer, None);
    }
}
