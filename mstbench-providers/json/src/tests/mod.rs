pub(crate) use super::{
    BenchmarkReport, EdgeRecord, GraphDocument, GraphRecord, JsonGraphProvider, JsonProviderError,
    JsonProviderErrorCode,
};

mod support;
