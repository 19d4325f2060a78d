use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Greedy word wrap at `width` columns.
///
/// The text is trimmed as a whole, existing newlines are kept as hard breaks
/// and words are never split, so a word longer than `width` sits alone on its
/// own line. Each output line has its trailing whitespace removed and runs of
/// blank lines collapse into one.
pub fn wrap(text: &str, width: usize) -> String {
    let options = Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false);

    let wrapped = textwrap::wrap(text.trim(), options);
    let mut lines: Vec<&str> = Vec::with_capacity(wrapped.len());
    for line in &wrapped {
        let line = line.trim_end();
        if line.is_empty() && lines.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        lines.push(line);
    }

    lines.join("\n")
}
