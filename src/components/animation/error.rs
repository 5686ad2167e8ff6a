/// Browser-side failures while bringing up an animated canvas.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CanvasError {
	#[error("window is not available")]
	WindowUnavailable,

	#[error("2d context is not available: {0}")]
	ContextUnavailable(String),

	#[error("failed to request animation frame: {0}")]
	RequestFailed(String),

	#[error("failed to attach resize listener: {0}")]
	ListenerFailed(String),
}
