mod retrieval_sink;
mod search_provider;

pub use retrieval_sink::IRetrievalSink;
pub use search_provider::ISearchProvider;
