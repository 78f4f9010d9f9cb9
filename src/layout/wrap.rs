use std::collections::VecDeque;

/// Columns between tab stops when tabs are expanded
pub const TAB_SIZE: usize = 8;

/// Characters that separate words. Other Unicode spaces (such as a no-break
/// space) are part of the word they appear in.
fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{0b}' | '\u{0c}')
}

fn is_blank(chunk: &str) -> bool {
    chunk.starts_with(' ')
}

/// Expand tabs to the next multiple of [TAB_SIZE] columns, then turn every
/// remaining separator into a plain space so each character is one column.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let stop = (column / TAB_SIZE + 1) * TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(stop - column));
                column = stop;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            ch if is_separator(ch) => {
                out.push(' ');
                column += 1;
            }
            ch => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}

/// Split text into alternating runs of words and spaces, keeping every run
fn chunks(text: &str) -> VecDeque<&str> {
    let mut chunks: VecDeque<&str> = VecDeque::new();
    let mut start = 0usize;
    let mut in_space: Option<bool> = None;
    for (i, ch) in text.char_indices() {
        let space = ch == ' ';
        if in_space.is_some_and(|prev| prev != space) {
            chunks.push_back(&text[start..i]);
            start = i;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        chunks.push_back(&text[start..]);
    }
    chunks
}

/// Greedily word-wrap `text` so that no line is longer than `columns`
/// characters.
///
/// Tabs are expanded to stops every [TAB_SIZE] columns. A line that already
/// fits comes back as it is. Otherwise the first line keeps its leading
/// indentation and every line keeps the spacing between its words; only the
/// whitespace at a break is dropped, along with trailing whitespace.
///
/// A word is never split: one longer than `columns` gets a line of its own.
/// Text with no words wraps to no lines at all. Lengths are counted in `char`s.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let text = normalize(text);
    if text.trim_start_matches(' ').is_empty() {
        return Vec::new();
    }
    if text.chars().count() <= columns {
        return vec![text];
    }

    let mut chunks = chunks(&text);
    let mut lines: Vec<String> = Vec::new();

    while !chunks.is_empty() {
        // indentation only survives on the first line
        if !lines.is_empty() && chunks.front().is_some_and(|chunk| is_blank(chunk)) {
            chunks.pop_front();
        }

        let mut line: Vec<&str> = Vec::new();
        let mut line_len = 0usize;
        while let Some(&chunk) = chunks.front() {
            let chunk_len = chunk.chars().count();
            if line_len + chunk_len > columns {
                break;
            }
            line.push(chunk);
            line_len += chunk_len;
            chunks.pop_front();
        }

        // nothing fits: the next chunk is too long and goes on its own
        if line.is_empty() {
            if let Some(chunk) = chunks.pop_front() {
                line.push(chunk);
            }
        }

        if line.last().is_some_and(|chunk| is_blank(chunk)) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.concat());
        }
    }

    lines
}
