/// ProgressReporter port for user feedback during the enrichment run
///
/// Enrichment is slow by necessity (strictly sequential registry access), so
/// the pipeline reports per-package progress.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports position within the package list
    ///
    /// # Arguments
    /// * `current` - Packages processed so far
    /// * `total` - Total number of packages
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
