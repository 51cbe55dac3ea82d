use std::collections::VecDeque;

/// Where the active player's moves come from. One line per call, blocking.
pub trait InputSource {
    /// `None` means no more input will ever arrive.
    fn next_line(&mut self) -> Option<String>;
}

/// Scripted input: lines are handed out front to back.
impl InputSource for VecDeque<String> {
    fn next_line(&mut self) -> Option<String> {
        self.pop_front()
    }
}
