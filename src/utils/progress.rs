use crate::core::{ProgressReporter, RunSummary};

/// Prints one line per row to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn started(&self, total: usize) {
        println!("Generating {} QR labels", total);
    }

    fn row(&self, index: usize, total: usize, serial: &str) {
        println!("({}/{}) Generating QR code for {}", index, total, serial);
    }

    fn finished(&self, summary: &RunSummary) {
        println!("✅ Generated {} QR labels", summary.processed);
        println!("📁 Output saved to: {}", summary.output_dir);
    }
}

/// Discards all progress events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn started(&self, _total: usize) {}

    fn row(&self, _index: usize, _total: usize, _serial: &str) {}

    fn finished(&self, _summary: &RunSummary) {}
}
