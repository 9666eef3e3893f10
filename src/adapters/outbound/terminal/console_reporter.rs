use std::io::{self, Write};
use std::sync::Mutex;

use tracing::warn;

use crate::{
    domain::{
        models::StoredObject,
        value_objects::{BucketName, ObjectKey},
    },
    ports::interaction::CleanupReporter,
};

/// Prints cleanup targets and deletions, one key per line
pub struct ConsoleReporter<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lines(&self, lines: impl IntoIterator<Item = String>) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        for line in lines {
            if let Err(e) = writeln!(out, "{}", line) {
                warn!("Failed to write cleanup report: {}", e);
                return;
            }
        }
        if let Err(e) = out.flush() {
            warn!("Failed to flush cleanup report: {}", e);
        }
    }
}

impl<W: Write + Send> CleanupReporter for ConsoleReporter<W> {
    fn deletion_targets(&self, bucket: &BucketName, targets: &[StoredObject]) {
        let header = format!(
            "{} object(s) selected for deletion from bucket '{}':",
            targets.len(),
            bucket
        );
        let rows = targets.iter().map(|t| {
            format!(
                "  {}  {} bytes  {}",
                t.key,
                t.size,
                t.last_modified.to_rfc3339()
            )
        });
        self.write_lines(std::iter::once(header).chain(rows));
    }

    fn object_deleted(&self, _bucket: &BucketName, key: &ObjectKey) {
        self.write_lines([format!("Deleted: {}", key)]);
    }
}
