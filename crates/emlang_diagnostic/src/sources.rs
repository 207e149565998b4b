use std::path::Path;

/// A collection of sources that diagnostics can point into.
pub trait Sources {
    type SourceId: Copy + Eq + std::hash::Hash;
    type Source: Source;

    fn get_source(&self, id: Self::SourceId) -> Option<&Cached<Self::Source>>;
}

pub trait Source {
    fn name_str(&self) -> &str;
    fn path(&self) -> Option<&Path>;

    fn source_str(&self) -> &str;
}

impl<S: Source> Sources for Vec<Cached<S>> {
    type SourceId = usize;
    type Source = S;

    fn get_source(&self, id: Self::SourceId) -> Option<&Cached<Self::Source>> {
        self.get(id)
    }
}

impl Source for (String, String) {
    fn name_str(&self) -> &str {
        &self.0
    }

    fn path(&self) -> Option<&Path> {
        None
    }

    fn source_str(&self) -> &str {
        &self.1
    }
}

/// A source with its line breaks precomputed.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct Cached<S: Source> {
    source: S,
    line_breaks: Vec<usize>,
}

impl<S: Source> Cached<S> {
    pub fn new(source: S) -> Self {
        let line_breaks = source
            .source_str()
            .match_indices('\n')
            .map(|(i, _)| i)
            .collect();

        Self {
            source,
            line_breaks,
        }
    }

    pub fn as_source(&self) -> &S {
        &self.source
    }

    /// One-based line and column of a byte offset.
    pub fn byte_to_line_col(&self, byte: usize) -> Option<(usize, usize)> {
        let line = self.byte_to_line_index(byte)?;
        let col = byte - self.line_to_byte(line)?;

        Some((line + 1, col + 1))
    }

    pub fn byte_to_line_index(&self, byte: usize) -> Option<usize> {
        if byte > self.source_str().len() {
            return None;
        }

        match self.line_breaks.binary_search(&byte) {
            Ok(line) | Err(line) => Some(line),
        }
    }

    pub fn line_to_byte(&self, line: usize) -> Option<usize> {
        match line {
            0 => Some(0),
            _ => self.line_breaks.get(line - 1).map(|&byte| byte + 1),
        }
    }

    /// The text of a line, without its line terminator.
    pub fn line_str(&self, index: usize) -> Option<&str> {
        let start = self.line_to_byte(index)?;
        let end = self
            .line_to_byte(index + 1)
            .unwrap_or(self.source_str().len());

        let s = &self.source_str()[start..end];
        let s = s.strip_suffix('\n').unwrap_or(s);
        let s = s.strip_suffix('\r').unwrap_or(s);

        Some(s)
    }

    pub fn num_lines(&self) -> usize {
        1 + self.line_breaks.len()
    }
}

impl<S: Source> Source for Cached<S> {
    fn name_str(&self) -> &str {
        self.source.name_str()
    }

    fn path(&self) -> Option<&Path> {
        self.source.path()
    }

    fn source_str(&self) -> &str {
        self.source.source_str()
    }
}

#[cfg(test)]
mod tests {
    use super::Cached;

    fn cached_str(s: &str) -> Cached<(String, String)> {
        Cached::new(("sample".to_owned(), s.to_owned()))
    }

    #[test]
    fn line_col_of_empty_source() {
        let cached = cached_str("");
        assert_eq!(cached.num_lines(), 1);
        assert_eq!(cached.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(cached.byte_to_line_col(1), None);
    }

    #[test]
    fn line_col_across_lines() {
        let cached = cached_str("fn\nmain\r\n");
        assert_eq!(cached.num_lines(), 3);

        assert_eq!(cached.byte_to_line_col(0), Some((1, 1)));
        // the newline itself belongs to the line it ends
        assert_eq!(cached.byte_to_line_col(2), Some((1, 3)));
        assert_eq!(cached.byte_to_line_col(3), Some((2, 1)));
        assert_eq!(cached.byte_to_line_col(6), Some((2, 4)));
        assert_eq!(cached.byte_to_line_col(9), Some((3, 1)));
    }

    #[test]
    fn line_str_strips_terminators() {
        let cached = cached_str("fn\nmain\r\n");
        assert_eq!(cached.line_str(0), Some("fn"));
        assert_eq!(cached.line_str(1), Some("main"));
        assert_eq!(cached.line_str(2), Some(""));
        assert_eq!(cached.line_str(3), None);
    }

    #[test]
    fn line_to_byte_bounds() {
        let cached = cached_str("x\ny");
        assert_eq!(cached.line_to_byte(0), Some(0));
        assert_eq!(cached.line_to_byte(1), Some(2));
        assert_eq!(cached.line_to_byte(2), None);
    }
}
