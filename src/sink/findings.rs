//! Append-only findings store.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::keys::{Address, PrivateKey};
use crate::ledger::{Balance, UNIT_LABEL};

/// A funded address and the key that controls it.
#[derive(Debug, Clone)]
pub struct Finding {
    pub private_key: PrivateKey,
    pub address: Address,
    pub balance: Balance,
    pub found_at: DateTime<Utc>,
}

impl Finding {
    pub fn new(private_key: PrivateKey, address: Address, balance: Balance) -> Self {
        Self {
            private_key,
            address,
            balance,
            found_at: Utc::now(),
        }
    }

    /// The blank-line-terminated text block written to the store.
    pub fn to_record(&self) -> String {
        format!(
            "Private: {}\nAddress: {}\nBalance: {} {}\nFound: {}\n\n",
            self.private_key.to_hex(),
            self.address,
            self.balance,
            UNIT_LABEL,
            self.found_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }
}

/// Plain-text file that findings are appended to.
#[derive(Debug)]
pub struct FindingsStore {
    path: PathBuf,
    /// Serializes appends from concurrent attempts.
    write_lock: Mutex<()>,
}

impl FindingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file if needed.
    pub async fn append(&self, finding: &Finding) -> std::io::Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(finding.to_record().as_bytes()).await?;
        file.sync_data().await
    }
}
