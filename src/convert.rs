//! The two conversions: native tables to catalogs, and a catalog back to
//! its native table.

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    catalog::Catalog,
    parsers::{po::parse_po_file, strings::parse_strings_file},
    strings_writer::StringsWriter,
};

/// One native table and the catalog generated from it.
#[derive(Debug, Clone)]
pub struct CatalogJob {
    pub title: String,
    pub strings_path: PathBuf,
    pub catalog_path: PathBuf,
}

/// A file produced by a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub entry_count: usize,
}

/// Convert every native table to its catalog.
///
/// All inputs are parsed before the first catalog is written, so a missing
/// or unreadable table leaves the output directory untouched.
pub fn strings_to_catalogs(jobs: &[CatalogJob]) -> Result<Vec<WrittenFile>> {
    let catalogs = jobs
        .iter()
        .map(|job| {
            let table = parse_strings_file(&job.strings_path)?;
            Ok(Catalog::from_table(&table, &job.title))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut written = Vec::with_capacity(jobs.len());
    for (job, catalog) in jobs.iter().zip(catalogs) {
        catalog.save(&job.catalog_path)?;
        tracing::info!(
            title = %job.title,
            path = %job.catalog_path.display(),
            entries = catalog.len(),
            "generated catalog"
        );
        written.push(WrittenFile {
            path: job.catalog_path.clone(),
            entry_count: catalog.len(),
        });
    }
    Ok(written)
}

/// Convert one catalog to its native table, overwriting the table.
pub fn catalog_to_strings(catalog_path: PathBuf, strings_path: PathBuf) -> Result<WrittenFile> {
    let catalog = parse_po_file(&catalog_path)?;
    let writer = StringsWriter::from_catalog(&catalog);
    if writer.is_empty() && !catalog.is_empty() {
        tracing::warn!(
            catalog = %catalog_path.display(),
            "catalog has no translated entries"
        );
    }
    writer.save(&strings_path)?;
    tracing::info!(
        catalog = %catalog_path.display(),
        path = %strings_path.display(),
        entries = writer.len(),
        "generated strings file"
    );
    Ok(WrittenFile {
        path: strings_path,
        entry_count: writer.len(),
    })
}
