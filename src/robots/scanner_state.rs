/// States of the robots.txt scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerState {
    /// Start of input, and after every completed directive or skipped line.
    ZeroPoint,
    /// A keyword matched; waiting for the `:` separator.
    ReadDirective,
    /// Discarding everything up to the next line terminator.
    SkipLine,
    /// Collecting the value after `:`.
    ReadValue,
}
