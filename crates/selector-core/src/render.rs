//! Transcript line rendering

use crate::types::Sequence;

/// One displayable transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Formatted start time, `hours:minutes:seconds`
    pub timecode: String,
    /// Transcript text
    pub text: String,
    /// Styling hook for the first line of a transcript
    pub first: bool,
}

/// Render sequences in response order, one line per sequence
pub fn render_sequences(sequences: &[Sequence]) -> Vec<RenderedLine> {
    sequences
        .iter()
        .enumerate()
        .map(|(i, seq)| RenderedLine {
            timecode: seq.start.to_string(),
            text: seq.text.clone(),
            first: i == 0,
        })
        .collect()
}
