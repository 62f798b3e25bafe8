//! UI state for the node widget.

/// Persistent UI state of one run button.
///
/// `activated` tracks the pressed visual only; it is independent of whether
/// the node is currently executing.
#[derive(Default)]
pub struct RunButtonState {
    pub activated: bool,
}
