//! Loading and saving graph documents.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use mstbench_core::Graph;
use tracing::{Span, debug, field, info, instrument};

use crate::{
    document::{GraphDocument, GraphRecord},
    errors::JsonProviderError,
};

/// A validated set of graphs backed by a JSON document.
///
/// # Examples
/// ```
/// use mstbench_providers_json::JsonGraphProvider;
///
/// let json = r#"{"graphs": [{"id": 1, "nodes": ["A", "B"],
///     "edges": [{"from": "A", "to": "B", "weight": 3}]}]}"#;
/// let provider = JsonGraphProvider::try_from_reader(json.as_bytes())?;
/// assert_eq!(provider.len(), 1);
/// assert!(provider.graphs()[0].is_connected());
/// # Ok::<(), mstbench_providers_json::JsonProviderError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonGraphProvider {
    graphs: Vec<Graph>,
}

impl JsonGraphProvider {
    /// Wraps already validated graphs, typically for saving.
    #[must_use]
    pub fn from_graphs(graphs: Vec<Graph>) -> Self {
        Self { graphs }
    }

    /// Loads and validates the document at `path`.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Io`] when the file cannot be opened and
    /// otherwise fails like [`JsonGraphProvider::try_from_reader`].
    #[instrument(name = "provider.load", err, skip(path), fields(path = field::Empty))]
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, JsonProviderError> {
        let path = path.as_ref();
        Span::current().record("path", field::display(path.display()));
        let file = File::open(path).map_err(|source| JsonProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let provider = Self::try_from_reader(BufReader::new(file))?;
        info!(graphs = provider.len(), "graph document loaded");
        Ok(provider)
    }

    /// Parses and validates a document from `reader`.
    ///
    /// Graphs are validated in document order and loading stops at the first
    /// invalid one.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Json`] for malformed input and
    /// [`JsonProviderError::InvalidGraph`] when a graph fails validation.
    pub fn try_from_reader(reader: impl Read) -> Result<Self, JsonProviderError> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        let graphs = document
            .graphs
            .into_iter()
            .map(GraphRecord::into_graph)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(graphs = graphs.len(), "graph document parsed");
        Ok(Self { graphs })
    }

    /// Returns the graphs in document order.
    #[must_use]
    #[rustfmt::skip]
    pub fn graphs(&self) -> &[Graph] { &self.graphs }

    /// Consumes the provider and returns its graphs.
    #[must_use]
    pub fn into_graphs(self) -> Vec<Graph> {
        self.graphs
    }

    /// Returns the number of graphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Returns `true` when the document held no graphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Builds the serialisable document for the held graphs.
    #[must_use]
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            graphs: self.graphs.iter().map(GraphRecord::from).collect(),
        }
    }

    /// Writes the graphs to `writer` as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`JsonProviderError`] when serialisation or the write fails.
    pub fn write_to(&self, mut writer: impl Write) -> Result<(), JsonProviderError> {
        serde_json::to_writer_pretty(&mut writer, &self.to_document())?;
        writeln!(writer)?;
        Ok(())
    }

    /// Writes the graphs to a new file at `path`, replacing any existing one.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Io`] when the file cannot be created and
    /// otherwise fails like [`JsonGraphProvider::write_to`].
    #[instrument(name = "provider.save", err, skip(self, path), fields(path = field::Empty, graphs = self.len()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), JsonProviderError> {
        let path = path.as_ref();
        Span::current().record("path", field::display(path.display()));
        let mut writer = BufWriter::new(create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

pub(crate) fn create(path: &Path) -> Result<File, JsonProviderError> {
    File::create(path).map_err(|source| JsonProviderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
