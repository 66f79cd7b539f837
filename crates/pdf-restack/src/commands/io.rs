//! Byte transfer and document parsing at the command edges
//!
//! Missing input path means standard input; missing output path means
//! standard output. Parsing and serialization run on the blocking pool.

use crate::types::{RestackError, Result};
use lopdf::Document;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Read the source bytes from a file, or from stdin when no path is given
pub async fn read_input_or_stdin(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => Ok(tokio::fs::read(path).await?),
        None => {
            let mut bytes = Vec::new();
            tokio::io::stdin().read_to_end(&mut bytes).await?;
            Ok(bytes)
        }
    }
}

/// Write the result bytes to a file, or to stdout when no path is given
pub async fn write_output_or_stdout(bytes: Vec<u8>, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, bytes).await?;
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&bytes).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

/// Parse a document from raw bytes
pub async fn load_document(bytes: Vec<u8>) -> Result<Document> {
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Serialize a document to raw bytes
pub async fn save_document(mut doc: Document) -> Result<Vec<u8>> {
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, RestackError>(writer)
    })
    .await??;
    Ok(bytes)
}
