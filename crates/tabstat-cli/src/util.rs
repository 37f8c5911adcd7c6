use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use tabstat_analysis::{config::AnalysisConfig, dataset::Dataset};

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
    pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)?;
        if let Output::File { path, .. } = &output {
            tracing::info!("Saved output to {}", path.display());
        }
        Ok(())
    }

    pub fn from_output_path(output_path: Option<&Path>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path.to_owned()),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
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

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a dataset from a JSON file
///
/// The file holds an array of objects. Numbers become numeric values, strings
/// categorical values, and `null` a missing-value placeholder.
///
/// # Errors
///
/// Returns error if the file cannot be opened or parsed
pub fn read_dataset_file<P>(path: P) -> anyhow::Result<Dataset>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::info!("Loading dataset from {}...", path.display());
    let dataset: Dataset = read_json_file("dataset", path)?;
    if dataset.is_empty() {
        tracing::warn!("{} contains no records", path.display());
    }
    tracing::info!("Loaded {} records", dataset.len());
    Ok(dataset)
}

/// Read an analysis configuration, falling back to the built-in one
///
/// Invalid configurations are reported as warnings, since every analysis
/// degrades to empty output on its own. With `strict`, they are errors.
///
/// # Errors
///
/// Returns error if the file cannot be opened or parsed, or if `strict` is
/// set and the configuration does not validate
pub fn read_config_file(path: Option<&Path>, strict: bool) -> anyhow::Result<AnalysisConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("Loading analysis configuration from {}...", path.display());
            read_json_file("analysis configuration", path)?
        }
        None => AnalysisConfig::default(),
    };

    if let Err(err) = config.validate() {
        if strict {
            bail!("invalid analysis configuration: {err}");
        }
        tracing::warn!("{err}; the affected analysis will be empty or incomplete");
    }

    Ok(config)
}
