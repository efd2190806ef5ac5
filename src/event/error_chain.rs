use serde::{Deserialize, Serialize};

/// One captured error in a cause chain.
///
/// `cause` points toward the root cause, in the order errors wrapped each
/// other: the head of the chain is the error the host actually observed, the
/// deepest `cause` is where the failure started. Frames are opaque strings,
/// innermost call first, the way backtraces print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorChain {
    /// Error type name, when the host knows it (e.g. `std::io::Error`).
    pub kind: Option<String>,
    pub message: String,
    pub frames: Vec<String>,
    pub cause: Option<Box<ErrorChain>>,
}

impl ErrorChain {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: None,
            message: message.into(),
            frames: Vec::new(),
            cause: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn with_frames<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frames = frames.into_iter().map(Into::into).collect();
        self
    }

    /// Attaches the error this one wraps.
    #[must_use]
    pub fn caused_by(mut self, cause: ErrorChain) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Captures a full chain from a live error by walking
    /// [`std::error::Error::source`]. Frames are unavailable through the
    /// `Error` trait and stay empty; the top-level kind is the static type
    /// name when one exists.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let kind = {
            let name = std::any::type_name::<E>();
            (!name.starts_with("dyn ")).then(|| name.to_string())
        };

        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(inner) = source {
            causes.push(ErrorChain::new(inner.to_string()));
            source = inner.source();
        }

        let mut cause = None;
        for mut node in causes.into_iter().rev() {
            node.cause = cause;
            cause = Some(Box::new(node));
        }

        Self {
            kind,
            message: error.to_string(),
            frames: Vec::new(),
            cause,
        }
    }

    /// Iterates the chain from this error toward the root cause.
    pub fn chain(&self) -> impl Iterator<Item = &ErrorChain> {
        std::iter::successors(Some(self), |error| error.cause.as_deref())
    }

    /// The deepest cause in the chain (this error if it has none).
    pub fn root_cause(&self) -> &ErrorChain {
        self.chain().last().unwrap_or(self)
    }
}
