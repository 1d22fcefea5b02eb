use crate::types::Label;
use std::io::{self, BufRead, Lines};

/// Iterator over the (label, data) line pairs of a collection file.
///
/// Lines starting with `#` are skipped wherever a label or a data line is
/// expected. A trailing label with no data line is discarded.
pub struct RecordPairs<B> {
    lines: Lines<B>,
}

impl<B: BufRead> RecordPairs<B> {
    pub fn new(reader: B) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    fn next_record_line(&mut self) -> Option<io::Result<String>> {
        while let Some(line) = self.lines.next() {
            match line {
                Ok(line) => {
                    if !line.starts_with('#') {
                        return Some(Ok(line));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

impl<B: BufRead> Iterator for RecordPairs<B> {
    type Item = io::Result<(Label, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let label = match self.next_record_line()? {
            Ok(label) => label,
            Err(e) => return Some(Err(e)),
        };
        match self.next_record_line() {
            Some(Ok(data)) => Some(Ok((label, data))),
            Some(Err(e)) => Some(Err(e)),
            None => None,
        }
    }
}
