/// Process exit signal for a run.
///
/// Recorded, not enforced: the host process applies it once pending output is flushed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExitDecision {
    #[default]
    Success,
    Failure,
}

impl ExitDecision {
    pub fn code(self) -> i32 {
        match self {
            ExitDecision::Success => 0,
            ExitDecision::Failure => 1,
        }
    }
}
