use std::io::BufRead;

use log::{trace, warn};

use crate::level::LevelRecord;

/// Lines collected since the last `;` line.
#[derive(Debug, Default)]
struct Block {
    title: Option<String>,
    lines: Vec<String>,
}

impl Block {
    fn new(title: Option<String>) -> Self {
        Block {
            title,
            lines: Vec::new(),
        }
    }

    /// `None` if the block had no content.
    fn finish(self) -> Option<LevelRecord> {
        let Block { title, lines } = self;

        // blank lines around a level are just spacing between levels
        let first = lines.iter().position(|l| !l.is_empty())?;
        let last = lines.iter().rposition(|l| !l.is_empty())?;
        let lines = &lines[first..=last];

        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let height = lines.len();
        let mut text = String::new();
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        Some(LevelRecord::new(title, width, height, text))
    }
}

/// Reads `;`-separated levels.
///
/// A read error (including invalid UTF-8) ends the document: levels completed
/// before it are returned and the level being read is dropped.
pub(crate) fn read_levels<R: BufRead>(reader: R) -> Vec<LevelRecord> {
    let mut records = Vec::new();
    let mut block = Block::default();

    for (i, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("Stopped reading levels at line {}: {}", i + 1, err);
                return records;
            }
        };

        if line.starts_with(';') {
            let title = line[1..].trim();
            trace!("Separator at line {}: {}", i + 1, title);
            let title = if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            };
            let finished = std::mem::replace(&mut block, Block::new(title));
            records.extend(finished.finish());
        } else {
            block.lines.push(line);
        }
    }
    records.extend(block.finish());

    records
}
