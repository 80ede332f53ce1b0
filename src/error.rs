/// Errors that can end an update cycle early.
///
/// Both variants are per-cycle outcomes: the socket stays open and the next
/// `update()` proceeds normally once data resumes.
#[derive(Debug, thiserror::Error)]
pub enum FreePieError {
    /// Transport-level receive or bind failure.
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),

    /// No channel-matching orientation arrived within the wait budget.
    /// A normal "nothing new" outcome, not a hard error.
    #[error("no orientation data within the wait budget")]
    Timeout,
}
