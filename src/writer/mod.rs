//! Output stage: renders processed tables as Java source or JSON.
pub mod bundle;
pub mod java;
pub mod json;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{CODES_INTERFACE, GeneratorConfig};
use crate::model::ProcessedTable;
use bundle::BundleKind;

/// A generated Java source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Codes,
    Messages,
    ShortMessages,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [Artifact::Codes, Artifact::Messages, Artifact::ShortMessages];

    pub fn file_name(self) -> String {
        match self {
            Artifact::Codes => format!("{CODES_INTERFACE}.java"),
            Artifact::Messages => BundleKind::Message.file_name(),
            Artifact::ShortMessages => BundleKind::ShortMessage.file_name(),
        }
    }

    pub fn write<W: Write + ?Sized>(
        self,
        w: &mut W,
        table: &ProcessedTable,
        config: &GeneratorConfig,
    ) -> io::Result<()> {
        match self {
            Artifact::Codes => java::write_interface(w, table, config),
            Artifact::Messages => bundle::write_bundle(w, BundleKind::Message, table, config),
            Artifact::ShortMessages => {
                bundle::write_bundle(w, BundleKind::ShortMessage, table, config)
            }
        }
    }
}

/// Write `artifact` into `out_dir`, or to stdout when no directory is given.
pub fn emit(
    artifact: Artifact,
    table: &ProcessedTable,
    config: &GeneratorConfig,
    out_dir: Option<&Path>,
) -> Result<()> {
    emit_to(artifact, table, config, out_dir, &mut io::stdout().lock())
}

/// Like [`emit`], with `fallback` standing in for stdout.
pub fn emit_to(
    artifact: Artifact,
    table: &ProcessedTable,
    config: &GeneratorConfig,
    out_dir: Option<&Path>,
    fallback: &mut dyn Write,
) -> Result<()> {
    let file_name = artifact.file_name();
    write_output_to(&file_name, out_dir, fallback, |w| {
        artifact.write(w, table, config)
    })
    .with_context(|| format!("Writing {file_name}"))
}

/// Shared sink selection for every artifact, falling back to stdout.
pub fn write_output<F>(file_name: &str, out_dir: Option<&Path>, body: F) -> io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    write_output_to(file_name, out_dir, &mut io::stdout().lock(), body)
}

/// Write `file_name` into `out_dir`, or into `fallback` when no directory
/// is given.
pub fn write_output_to<F>(
    file_name: &str,
    out_dir: Option<&Path>,
    fallback: &mut dyn Write,
    body: F,
) -> io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let path = dir.join(file_name);
            let mut w = BufWriter::new(File::create(&path)?);
            body(&mut w)?;
            w.flush()?;
            info!("Wrote {}", path.display());
        }
        None => {
            body(fallback)?;
            fallback.flush()?;
        }
    }
    Ok(())
}
