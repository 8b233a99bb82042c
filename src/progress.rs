// src/progress.rs
/// Lightweight progress reporting for the scroll loop.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once before the first scroll.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after every scroll pass.
    /// `visible`: listings seen in this pass; `collected`: running total.
    fn pass_done(&mut self, _pass: u32, _visible: usize, _collected: usize, _stalls: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one line per pass to stderr (CLI).
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn pass_done(&mut self, pass: u32, visible: usize, collected: usize, stalls: u32) {
        eprintln!("pass {pass}: {visible} visible, {collected} collected, stalled {stalls}x");
    }
}
