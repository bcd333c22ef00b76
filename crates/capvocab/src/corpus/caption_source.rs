use std::{
    fs::File,
    io::{BufRead, BufReader, Seek},
    path::{Path, PathBuf},
    sync::Arc,
};

use arrow::{
    array::AsArray,
    compute::cast,
    csv::{ReaderBuilder, reader::Format},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::{CVResult, CapvocabError, TokenType, vocab::VocabBuilder};

/// The default caption column name.
pub const DEFAULT_CAPTION_COLUMN: &str = "caption";

/// Caption source file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionFormat {
    /// Comma separated values, with a header row.
    Csv,

    /// Apache Parquet.
    Parquet,

    /// Plain text, one caption per line.
    Text,
}

impl CaptionFormat {
    /// Guess the format from a file extension; defaults to [`CaptionFormat::Text`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => CaptionFormat::Csv,
            Some("parquet") | Some("pq") => CaptionFormat::Parquet,
            _ => CaptionFormat::Text,
        }
    }
}

/// A file of captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionSource {
    /// Path to the file.
    pub path: PathBuf,

    /// File format.
    pub format: CaptionFormat,

    /// Caption column name; ignored for [`CaptionFormat::Text`].
    pub column: String,
}

impl CaptionSource {
    /// Create a source, guessing the format from the path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format: CaptionFormat::from_path(&path),
            column: DEFAULT_CAPTION_COLUMN.to_string(),
        }
    }

    /// Sets the file format.
    pub fn with_format(
        mut self,
        format: CaptionFormat,
    ) -> Self {
        self.format = format;
        self
    }

    /// Sets the caption column name.
    pub fn with_column<S: Into<String>>(
        mut self,
        column: S,
    ) -> Self {
        self.column = column.into();
        self
    }

    /// Call `f` on each caption in file order; null cells are skipped.
    ///
    /// ## Returns
    /// The number of captions visited.
    ///
    /// ## Errors
    /// * [`CapvocabError::Io`] if the file cannot be read.
    /// * [`CapvocabError::Corpus`] if the file is not a caption table.
    pub fn for_each_caption<F>(
        &self,
        mut f: F,
    ) -> CVResult<usize>
    where
        F: FnMut(&str),
    {
        let mut count = 0;
        let mut visit = |caption: &str| {
            count += 1;
            f(caption);
        };

        match self.format {
            CaptionFormat::Text => self.read_text(&mut visit)?,
            CaptionFormat::Csv => self.read_csv(&mut visit)?,
            CaptionFormat::Parquet => self.read_parquet(&mut visit)?,
        }

        log::debug!("read {count} captions from {}", self.path.display());
        Ok(count)
    }

    /// Read every caption into memory.
    pub fn read_captions(&self) -> CVResult<Vec<String>> {
        let mut captions = Vec::new();
        self.for_each_caption(|caption| captions.push(caption.to_string()))?;
        Ok(captions)
    }

    /// Count the words of every caption into `builder`.
    pub fn feed<T: TokenType>(
        &self,
        builder: &mut VocabBuilder<T>,
    ) -> CVResult<usize> {
        self.for_each_caption(|caption| builder.update_from_text(caption))
    }

    fn read_text(
        &self,
        f: &mut dyn FnMut(&str),
    ) -> CVResult<()> {
        let reader = BufReader::new(File::open(&self.path)?);
        for line in reader.lines() {
            f(line?.as_str());
        }
        Ok(())
    }

    fn read_csv(
        &self,
        f: &mut dyn FnMut(&str),
    ) -> CVResult<()> {
        let mut file = File::open(&self.path)?;

        // Only the header names matter; every column is read as text.
        let format = Format::default().with_header(true);
        let (inferred, _) = format.infer_schema(&mut file, Some(1))?;
        file.rewind()?;

        let schema = Schema::new(
            inferred
                .fields()
                .iter()
                .map(|field| Field::new(field.name(), DataType::Utf8, true))
                .collect::<Vec<_>>(),
        );

        let reader = ReaderBuilder::new(Arc::new(schema))
            .with_format(format)
            .build(file)?;
        for batch in reader {
            self.visit_batch(&batch?, f)?;
        }
        Ok(())
    }

    fn read_parquet(
        &self,
        f: &mut dyn FnMut(&str),
    ) -> CVResult<()> {
        let file = File::open(&self.path)?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
        for batch in reader {
            self.visit_batch(&batch?, f)?;
        }
        Ok(())
    }

    fn visit_batch(
        &self,
        batch: &RecordBatch,
        f: &mut dyn FnMut(&str),
    ) -> CVResult<()> {
        let column = batch.column_by_name(&self.column).ok_or_else(|| {
            CapvocabError::Corpus(format!(
                "no {:?} column in {}",
                self.column,
                self.path.display()
            ))
        })?;

        let column = cast(column.as_ref(), &DataType::Utf8)?;
        let captions = column.as_string_opt::<i32>().ok_or_else(|| {
            CapvocabError::Corpus(format!("column {:?} is not text", self.column))
        })?;

        captions.iter().flatten().for_each(f);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use arrow::array::{ArrayRef, StringArray};
    use parquet::arrow::ArrowWriter;

    use super::*;

    const CSV: &str = "image,caption\n\
        1000.jpg,A child in a pink dress.\n\
        1001.jpg,\"A dog, running on grass\"\n\
        1002.jpg,42\n";

    fn write_file(
        dir: &tempdir::TempDir,
        name: &str,
        contents: &str,
    ) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(CaptionFormat::from_path("a/b.csv"), CaptionFormat::Csv);
        assert_eq!(CaptionFormat::from_path("b.CSV"), CaptionFormat::Csv);
        assert_eq!(CaptionFormat::from_path("b.parquet"), CaptionFormat::Parquet);
        assert_eq!(CaptionFormat::from_path("b.txt"), CaptionFormat::Text);
        assert_eq!(CaptionFormat::from_path("captions"), CaptionFormat::Text);
    }

    #[test]
    fn test_read_csv() {
        let dir = tempdir::TempDir::new("corpus_test").unwrap();
        let path = write_file(&dir, "captions.csv", CSV);

        let captions = CaptionSource::from_path(&path).read_captions().unwrap();
        assert_eq!(
            captions,
            vec!["A child in a pink dress.", "A dog, running on grass", "42"]
        );

        let images = CaptionSource::from_path(&path)
            .with_column("image")
            .read_captions()
            .unwrap();
        assert_eq!(images, vec!["1000.jpg", "1001.jpg", "1002.jpg"]);
    }

    #[test]
    fn test_missing_column() {
        let dir = tempdir::TempDir::new("corpus_test").unwrap();
        let path = write_file(&dir, "captions.csv", CSV);

        let err = CaptionSource::from_path(&path)
            .with_column("text")
            .read_captions()
            .unwrap_err();
        assert!(matches!(err, CapvocabError::Corpus(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir::TempDir::new("corpus_test").unwrap();
        let err = CaptionSource::from_path(dir.path().join("nope.txt"))
            .read_captions()
            .unwrap_err();
        assert!(matches!(err, CapvocabError::Io(_)));
    }

    #[test]
    fn test_read_text() {
        let dir = tempdir::TempDir::new("corpus_test").unwrap();
        let path = write_file(&dir, "captions.txt", "a cat sat\n\na dog ran\n");

        let source = CaptionSource::from_path(&path);
        assert_eq!(
            source.read_captions().unwrap(),
            vec!["a cat sat", "", "a dog ran"]
        );
    }

    #[test]
    fn test_read_parquet() {
        let dir = tempdir::TempDir::new("corpus_test").unwrap();
        let path = dir.path().join("captions.parquet");

        let schema = Arc::new(Schema::new(vec![Field::new(
            "caption",
            DataType::Utf8,
            true,
        )]));
        let column = StringArray::from(vec![Some("A cat sat."), None, Some("A dog ran.")]);
        let batch = RecordBatch::try_new(schema.clone(), vec![Arc::new(column) as ArrayRef]).unwrap();

        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let source = CaptionSource::from_path(&path);
        assert_eq!(source.format, CaptionFormat::Parquet);

        let mut seen = Vec::new();
        let count = source
            .for_each_caption(|caption| seen.push(caption.to_string()))
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(seen, vec!["A cat sat.", "A dog ran."]);
    }
}
