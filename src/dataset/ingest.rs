use super::row::{DataRow, Scalar};
use crate::error::AppError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// The four tables the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Prismatic,
    Legendary,
    Augment,
    Voucher,
}

impl DatasetKind {
    // Checked in order; first substring hit wins.
    const PATTERNS: [(&'static str, DatasetKind); 4] = [
        ("augment", DatasetKind::Augment),
        ("voucher", DatasetKind::Voucher),
        ("prismatic", DatasetKind::Prismatic),
        ("legendary", DatasetKind::Legendary),
    ];

    /// Picks a dataset from a file name, case-insensitively.
    pub fn classify(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        Self::PATTERNS
            .iter()
            .find(|(pattern, _)| lower.contains(*pattern))
            .map(|(_, kind)| *kind)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Prismatic => "prismatic items",
            DatasetKind::Legendary => "legendary items",
            DatasetKind::Augment => "augments",
            DatasetKind::Voucher => "voucher comparison",
        }
    }
}

/// All rows from one upload batch.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub prismatic: Vec<DataRow>,
    pub legendary: Vec<DataRow>,
    pub augment: Vec<DataRow>,
    pub voucher: Vec<DataRow>,
}

impl Datasets {
    fn slot_mut(&mut self, kind: DatasetKind) -> &mut Vec<DataRow> {
        match kind {
            DatasetKind::Prismatic => &mut self.prismatic,
            DatasetKind::Legendary => &mut self.legendary,
            DatasetKind::Augment => &mut self.augment,
            DatasetKind::Voucher => &mut self.voucher,
        }
    }

    pub fn all_rows(&self) -> impl Iterator<Item = &DataRow> {
        self.prismatic
            .iter()
            .chain(&self.legendary)
            .chain(&self.augment)
            .chain(&self.voucher)
    }

    pub fn is_empty(&self) -> bool {
        self.all_rows().next().is_none()
    }
}

/// Accumulates one batch of files into a fresh `Datasets`.
#[derive(Debug, Default)]
pub struct Ingest {
    datasets: Datasets,
    matched: usize,
}

impl Ingest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one named file. Unmatched names are dropped and return `Ok(None)`.
    /// A later file of the same kind replaces an earlier one.
    pub fn add_file<R: Read>(&mut self, file_name: &str, reader: R) -> Result<Option<DatasetKind>, AppError> {
        let Some(kind) = DatasetKind::classify(file_name) else {
            tracing::debug!("Ignoring {}: no dataset pattern matches", file_name);
            return Ok(None);
        };

        let rows = parse_table(file_name, reader)?;
        tracing::info!("Loaded {} rows of {} from {}", rows.len(), kind.label(), file_name);
        *self.datasets.slot_mut(kind) = rows;
        self.matched += 1;
        Ok(Some(kind))
    }

    pub fn add_path(&mut self, path: &Path) -> Result<Option<DatasetKind>, AppError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if DatasetKind::classify(&file_name).is_none() {
            tracing::debug!("Ignoring {}: no dataset pattern matches", path.display());
            return Ok(None);
        }

        let file = File::open(path).map_err(|e| AppError::Ingest {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
        self.add_file(&file_name, file)
    }

    /// Number of files that landed in a dataset.
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn finish(self) -> Datasets {
        self.datasets
    }
}

/// Ingests files in order. Files that fail to parse are logged and skipped.
///
/// Always yields a batch: when nothing matched, the batch is empty and
/// replaces whatever was loaded before.
pub fn ingest_paths<F>(paths: &[PathBuf], mut on_file: F) -> Datasets
where
    F: FnMut(&Path),
{
    let mut ingest = Ingest::new();
    for path in paths {
        if let Err(e) = ingest.add_path(path) {
            tracing::warn!("Skipping file: {}", e);
        }
        on_file(path);
    }

    if ingest.matched() == 0 {
        tracing::warn!(
            "None of the {} file(s) matched a dataset (prismatic, legendary, augment, voucher)",
            paths.len()
        );
    }
    ingest.finish()
}

/// Reads a header line plus records into rows.
///
/// Short records leave missing columns empty, extra fields are ignored, and
/// records that fail to decode are skipped rather than failing the file.
pub fn parse_table<R: Read>(file_name: &str, reader: R) -> Result<Vec<DataRow>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Ingest {
            file: file_name.to_string(),
            reason: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(AppError::Ingest {
            file: file_name.to_string(),
            reason: "missing header line".to_string(),
        });
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("{}: skipping record {}: {}", file_name, idx + 2, e);
                continue;
            }
        };
        if record.iter().all(str::is_empty) {
            continue;
        }

        let mut row = DataRow::new();
        for (pos, column) in headers.iter().enumerate() {
            if column.is_empty() {
                continue;
            }
            let value = record.get(pos).map(Scalar::coerce).unwrap_or(Scalar::Empty);
            row.insert(column, value);
        }
        rows.push(row);
    }

    Ok(rows)
}
