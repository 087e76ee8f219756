use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{domain::Expense, errors::Result};

use super::ExpenseStore;

const TMP_SUFFIX: &str = "tmp";

/// Persists the collection as a pretty-printed JSON array of
/// `{id, description, amount, date, category}` objects.
#[derive(Debug, Clone)]
pub struct JsonExpenseStore {
    path: PathBuf,
}

impl JsonExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn load(&self) -> Result<Vec<Expense>> {
        load_expenses_from_path(&self.path)
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        save_expenses_to_path(expenses, &self.path)
    }
}

/// Reads a snapshot; a missing file is an empty collection.
pub fn load_expenses_from_path(path: &Path) -> Result<Vec<Expense>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no expense file yet, starting empty");
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    let expenses: Vec<Expense> = serde_json::from_str(&data)?;
    tracing::info!(path = %path.display(), count = expenses.len(), "loaded expenses");
    Ok(expenses)
}

/// Writes a snapshot by staging to a temporary file and renaming over the target.
pub fn save_expenses_to_path(expenses: &[Expense], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(expenses)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
