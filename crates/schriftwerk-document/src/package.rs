// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Writing finished artifacts to disk.

use std::path::Path;

use schriftwerk_core::DocumentFormat;
use schriftwerk_core::error::Result;
use tracing::info;

/// Persist a serialised document at `path`, replacing any existing file.
pub(crate) fn persist(bytes: &[u8], path: &Path, format: DocumentFormat) -> Result<()> {
    std::fs::write(path, bytes)?;
    info!(
        format = format.extension(),
        mime = format.mime_type(),
        bytes = bytes.len(),
        "Wrote {}",
        path.display()
    );
    Ok(())
}
