use crate::models::{NewSurat, Surat, SuratUpdate};
use tokio::sync::RwLock;
use tracing::debug;

struct SuratTable {
    rows: Vec<Surat>,
    next_id: u64,
}

/// In-memory, insertion-ordered store of surat records.
///
/// Every operation holds the lock for its whole scan and mutation.
pub struct SuratRepository {
    table: RwLock<SuratTable>,
}

impl Default for SuratRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SuratRepository {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Store preloaded with the two sample records served on a fresh start.
    pub fn with_sample_data() -> Self {
        Self::with_records(sample_records())
    }

    pub fn with_records(rows: Vec<Surat>) -> Self {
        let next_id = rows.iter().map(|surat| surat.id).max().unwrap_or(0) + 1;
        Self { table: RwLock::new(SuratTable { rows, next_id }) }
    }

    pub async fn list_surat(&self) -> Vec<Surat> {
        self.table.read().await.rows.clone()
    }

    pub async fn get_surat(&self, id: u64) -> Option<Surat> {
        let table = self.table.read().await;
        table.rows.iter().find(|surat| surat.id == id).cloned()
    }

    pub async fn create_surat(&self, payload: NewSurat) -> Surat {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let surat = payload.into_surat(id);
        table.rows.push(surat.clone());
        debug!("Created surat {}", id);
        surat
    }

    /// Returns `None` when no record has the given id.
    pub async fn update_surat(&self, id: u64, update: SuratUpdate) -> Option<Surat> {
        let mut table = self.table.write().await;
        let surat = table.rows.iter_mut().find(|surat| surat.id == id)?;
        update.apply_to(surat);
        debug!("Updated surat {}", id);
        Some(surat.clone())
    }

    /// Returns the number of records removed.
    pub async fn delete_surat(&self, id: u64) -> usize {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|surat| surat.id != id);
        let removed = before - table.rows.len();
        debug!("Deleted {} surat with id {}", removed, id);
        removed
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

fn sample_records() -> Vec<Surat> {
    vec![
        Surat {
            id: 1,
            name: Some("John Doe".to_string()),
            letter_number: Some("file1.pdf".to_string()),
            akta_notaris: None,
            gambar: None,
        },
        Surat {
            id: 2,
            name: Some("Jane Smith".to_string()),
            letter_number: Some("file2.pdf".to_string()),
            akta_notaris: None,
            gambar: None,
        },
    ]
}
