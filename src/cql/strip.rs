//! # Comment Stripping
//!
//! Line-oriented removal of `--`, `//`, and `/* ... */` comments for
//! display and logging. Every input line produces an output line, so line
//! structure is preserved even when a block comment spans several lines.
//!
//! This pass is deliberately not literal-aware: a comment marker inside a
//! quoted string is stripped anyway. That is fine for its display role;
//! statement boundaries are decided solely by the tokenizer, which is
//! literal-aware.

/// Removes CQL comments from `input` while preserving line breaks and
/// trimming trailing whitespace from each line.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_block = false;

    for (index, raw) in input.split('\n').enumerate() {
        let mut line = raw.to_string();

        loop {
            if in_block {
                match line.find("*/") {
                    Some(end) => {
                        line.replace_range(..end + 2, "");
                        in_block = false;
                    }
                    None => {
                        line.clear();
                        break;
                    }
                }
            }

            match line.find("/*") {
                Some(start) => match line[start..].find("*/") {
                    Some(end) => {
                        line.replace_range(start..start + end + 2, "");
                    }
                    None => {
                        line.truncate(start);
                        in_block = true;
                        break;
                    }
                },
                None => break,
            }
        }

        if let Some(idx) = line.find("--") {
            line.truncate(idx);
        }
        if let Some(idx) = line.find("//") {
            line.truncate(idx);
        }

        if index > 0 {
            out.push('\n');
        }
        out.push_str(line.trim_end_matches([' ', '\t', '\r']));
    }

    out
}
