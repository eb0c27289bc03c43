use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use gridiron_analysis::report::Recommendation;

use crate::render;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Stdout unless a path is given.
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Output::Stdout {
                writer: io::stdout().lock(),
            });
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Output::Stdout { .. } => None,
            Output::File { path, .. } => Some(path),
        }
    }

    /// Writes a recommendation as pretty JSON or as the text report, then flushes.
    pub fn write_recommendation(
        &mut self,
        recommendation: &Recommendation,
        json: bool,
    ) -> anyhow::Result<()> {
        let written = if json {
            serde_json::to_writer_pretty(&mut *self, recommendation)
                .map_err(io::Error::from)
                .and_then(|()| writeln!(self))
        } else {
            render::write_recommendation(self, recommendation)
        };
        written
            .and_then(|()| self.flush())
            .with_context(|| match self.path() {
                Some(path) => format!("Failed to write recommendation to {}", path.display()),
                None => "Failed to write recommendation to stdout".to_owned(),
            })
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}
