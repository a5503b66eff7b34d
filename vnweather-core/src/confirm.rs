//! Confirmation port for destructive actions.
//!
//! Each front-end decides how to ask: a native alert, a browser `confirm`, a
//! terminal prompt. The core only needs the yes/no answer.

pub const DELETE_TITLE: &str = "Xóa thành phố";
pub const DELETE_PROMPT: &str = "Bạn có chắc chắn muốn xóa thành phố này không?";

pub trait Confirm {
    /// Ask the user; `true` means go ahead.
    fn confirm(&self, title: &str, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str, &str) -> bool,
{
    fn confirm(&self, title: &str, message: &str) -> bool {
        self(title, message)
    }
}

/// Accepts without asking, e.g. for a `--yes` flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _title: &str, _message: &str) -> bool {
        true
    }
}
