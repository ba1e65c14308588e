use crate::backend::Strategy;
use crate::element::{Element, ElementKind};

const BULLETS: &[char] = &['•', '◦', '▪', '‣', '●', '-', '*', '–'];
const TITLE_MAX_WORDS: usize = 12;
const SENTENCE_END: &[char] = &['.', ',', ';', '!', '?'];

/// Turn one blank-line delimited block into elements.
///
/// Lines before the first list marker become a single element classified
/// by [`classify_lines`]; each list marker then starts a new `ListItem`
/// that absorbs the continuation lines after it.
pub fn classify_block(lines: &[&str], page_number: usize, strategy: Strategy) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut lead: Vec<&str> = Vec::new();
    let mut item: Vec<&str> = Vec::new();

    for &line in lines {
        if is_list_marker(line) {
            if !lead.is_empty() {
                let kind = classify_lines(&lead, strategy);
                elements.push(Element::new(kind, lead.join("\n"), page_number));
                lead.clear();
            }
            if !item.is_empty() {
                elements.push(Element::new(ElementKind::ListItem, item.join("\n"), page_number));
                item.clear();
            }
            item.push(line);
        } else if !item.is_empty() {
            item.push(line);
        } else {
            lead.push(line);
        }
    }

    if !lead.is_empty() {
        let kind = classify_lines(&lead, strategy);
        elements.push(Element::new(kind, lead.join("\n"), page_number));
    }
    if !item.is_empty() {
        elements.push(Element::new(ElementKind::ListItem, item.join("\n"), page_number));
    }

    elements
}

/// Classify a block that contains no list markers.
pub fn classify_lines(lines: &[&str], strategy: Strategy) -> ElementKind {
    if strategy == Strategy::Layout && looks_like_table(lines) {
        return ElementKind::Table;
    }
    if !lines.iter().any(|l| has_alphabetic(l)) {
        return ElementKind::UncategorizedText;
    }
    if lines.len() == 1 && is_title(lines[0]) {
        return ElementKind::Title;
    }
    ElementKind::NarrativeText
}

/// Detect a bullet (`• item`) or an enumerator (`3. item`, `b) item`).
pub fn is_list_marker(line: &str) -> bool {
    let trimmed = line.trim_start();
    let mut chars = trimmed.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    if BULLETS.contains(&first) {
        return chars.next().is_some_and(char::is_whitespace) && has_alphabetic(chars.as_str());
    }

    let marker_len = if first.is_ascii_digit() {
        1 + trimmed[1..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .count()
    } else if first.is_ascii_alphabetic() {
        1
    } else {
        return false;
    };

    if marker_len > 3 {
        return false;
    }

    let mut rest = trimmed[marker_len..].chars();
    matches!(rest.next(), Some('.') | Some(')'))
        && rest.next().is_some_and(char::is_whitespace)
        && has_alphabetic(rest.as_str())
}

fn has_alphabetic(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}

/// A title is a short single line that does not read as a sentence.
pub fn is_title(line: &str) -> bool {
    let trimmed = line.trim();
    let Some(last) = trimmed.chars().last() else {
        return false;
    };
    trimmed.split_whitespace().count() <= TITLE_MAX_WORDS
        && has_alphabetic(trimmed)
        && !SENTENCE_END.contains(&last)
}

/// Layout output keeps table columns apart with runs of spaces.
///
/// A block is a table when it has at least two lines and two thirds of
/// them show two or more column gaps.
pub fn looks_like_table(lines: &[&str]) -> bool {
    if lines.len() < 2 {
        return false;
    }
    let rows = lines.iter().filter(|l| column_gaps(l) >= 2).count();
    rows * 3 >= lines.len() * 2
}

/// Count runs of three or more spaces inside the trimmed line.
fn column_gaps(line: &str) -> usize {
    let mut gaps = 0;
    let mut run = 0;
    for c in line.trim().chars() {
        if c == ' ' {
            run += 1;
        } else {
            if run >= 3 {
                gaps += 1;
            }
            run = 0;
        }
    }
    gaps
}
