//! Evaluation settings.

/// How the engine treats input outside the accepted grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyntaxMode {
    /// Skip unknown characters and tolerate unbalanced parentheses, logging
    /// each occurrence at `warn` level.
    #[default]
    Permissive,
    /// Reject unknown characters and unbalanced parentheses with a
    /// [`SyntaxError`](crate::SyntaxError).
    Strict,
}

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalConfig {
    pub mode: SyntaxMode,
}

impl EvalConfig {
    #[must_use]
    pub const fn with_mode(mut self, mode: SyntaxMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.mode, SyntaxMode::Strict)
    }
}
