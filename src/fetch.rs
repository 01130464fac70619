//! One-shot blocking download of PDB entries from RCSB.
//!
//! Fire-and-forget by design: no retry, no explicit timeout, no caching.
//! A failed download leaves the session without molecular content while
//! every UI feature keeps working.

use crate::error::ViewerError;

/// Download the PDB-format entry for a four-character id.
///
/// # Errors
/// [`ViewerError::Fetch`] for a malformed id, a transport failure, or an
/// unreadable response body.
pub fn fetch_structure(pdb_id: &str) -> Result<String, ViewerError> {
    if pdb_id.len() != 4 || !pdb_id.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ViewerError::Fetch(format!(
            "not a valid PDB code: {pdb_id:?}"
        )));
    }

    let url = format!(
        "https://files.rcsb.org/download/{}.pdb",
        pdb_id.to_uppercase()
    );
    log::info!("downloading {} from RCSB...", pdb_id.to_uppercase());

    ureq::get(&url)
        .call()
        .map_err(|e| ViewerError::Fetch(format!("download failed: {e}")))?
        .into_body()
        .read_to_string()
        .map_err(|e| ViewerError::Fetch(format!("unreadable response: {e}")))
}
