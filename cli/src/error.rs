#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("could not read document: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),

	#[error("{0}")]
	Vocab(#[from] apvocab::VocabError),

	#[error("document changes when encoded a second time")]
	Unstable,

	#[error("{0} values could not be classified")]
	Unclassified(usize),
}
