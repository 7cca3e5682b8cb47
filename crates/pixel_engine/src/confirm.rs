/// Gate for destructive actions.
///
/// The editor asks before it throws a drawing away; whoever drives the
/// editor decides how the question is put to the user. Any
/// `FnMut(&str) -> bool` closure is a gate.
pub trait ConfirmGate {
    /// Blocks until the user answered. `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmGate for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Accepts every request without asking.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysConfirm;

impl ConfirmGate for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Declines every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverConfirm;

impl ConfirmGate for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}
