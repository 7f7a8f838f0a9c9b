use std::fmt;

/// Identity of one started timed process.
///
/// A restarted process always gets a new handle; it never resumes the
/// progress of the instance it replaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessHandle(u64);

impl ProcessHandle {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic handle source. No two processes started by one controller share a handle.
#[derive(Debug)]
pub struct HandleGenerator {
    next: u64,
}

impl HandleGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_handle(&mut self) -> ProcessHandle {
        let handle = ProcessHandle(self.next);
        self.next += 1;
        handle
    }
}

impl Default for HandleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
