use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
	/// Raised when a className was given without a packageName and the
	/// class loader cannot find it
	#[error("Missing class for name: {0}")]
	ClassNotFound(String),

	#[error("intent not initialized, creation options were never applied")]
	IntentNotInitialized,

	#[error("unknown method `{0}`")]
	UnknownMethod(String),

	#[error("`{method}` expects {expected} argument(s), got {actual}")]
	InvalidArgumentCount {
		method: &'static str,
		expected: usize,
		actual: usize,
	},

	#[error("`{method}` argument {index}: expected {expected}, got {actual}")]
	InvalidArgument {
		method: &'static str,
		index: usize,
		expected: &'static str,
		actual: &'static str,
	},
}
