//! Download progress events.
//!
//! The fetcher emits one [`Progress`] per received chunk to a [`ProgressSink`];
//! rendering (progress bars, logs) is left to the sink.

/// Snapshot of one download's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Bytes written to the local file so far.
    pub bytes_so_far: u64,
    /// Total size advertised by the server (`Content-Length`), if known.
    pub total: Option<u64>,
}

impl Progress {
    /// True when the server did not advertise a size.
    pub fn is_indeterminate(&self) -> bool {
        self.total.is_none()
    }
}

/// Receiver of progress events for a single download.
pub trait ProgressSink {
    /// Called after every chunk is written.
    fn on_progress(&mut self, progress: Progress);

    /// Called once after the transfer completed successfully.
    fn on_finish(&mut self, _last: Progress) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(Progress),
{
    fn on_progress(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _progress: Progress) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indeterminate_only_without_total() {
        let known = Progress {
            bytes_so_far: 25,
            total: Some(100),
        };
        assert!(!known.is_indeterminate());
        let unknown = Progress {
            bytes_so_far: 25,
            total: None,
        };
        assert!(unknown.is_indeterminate());
    }

    #[test]
    fn closure_is_a_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |p: Progress| seen.push(p.bytes_so_far);
            sink.on_progress(Progress {
                bytes_so_far: 1,
                total: None,
            });
            sink.on_progress(Progress {
                bytes_so_far: 3,
                total: None,
            });
            sink.on_finish(Progress::default());
        }
        assert_eq!(seen, vec![1, 3]);
    }
}
