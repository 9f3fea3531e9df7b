//! Fixed-width page layout for the exported report.
//!
//! Content arrives as blocks. A block is wrapped to `WRAP_WIDTH` columns and
//! then placed whole: when it does not fit on the remaining page it moves to
//! the next one, so a bullet's wrapped lines always stay together.

/// Lines per page, footer included.
pub const PAGE_LINES: usize = 54;

/// Columns per line.
pub const WRAP_WIDTH: usize = 78;

/// Separator between rendered pages.
pub const PAGE_BREAK: &str = "\u{c}";

const BULLET: &str = "• ";
const CONTINUATION: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Centered line, for the title and footer.
    Centered(String),
    /// Section heading, underlined.
    Heading(String),
    /// One bullet; wraps with a hanging indent.
    Bullet(String),
    /// Vertical gap. Dropped at the top of a page.
    Spacer,
}

impl Block {
    /// Wrapped lines for this block.
    pub fn lines(&self, width: usize) -> Vec<String> {
        match self {
            Block::Centered(text) => wrap(text, width)
                .into_iter()
                .map(|line| center(&line, width))
                .collect(),
            Block::Heading(text) => {
                let mut lines = wrap(text, width);
                let underline = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                lines.push("-".repeat(underline));
                lines
            }
            Block::Bullet(text) => {
                let inner = width.saturating_sub(BULLET.chars().count()).max(1);
                wrap(text, inner)
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| {
                        let lead = if i == 0 { BULLET } else { CONTINUATION };
                        format!("{lead}{line}")
                    })
                    .collect()
            }
            Block::Spacer => vec![String::new()],
        }
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), line)
}

/// Lay blocks onto pages of `page_lines` lines, reserving room for the
/// footer on the last page.
pub fn paginate(blocks: &[Block], footer: Option<&Block>, page_lines: usize, width: usize) -> Vec<Vec<String>> {
    let page_lines = page_lines.max(1);
    let mut pages: Vec<Vec<String>> = Vec::new();
    let mut page: Vec<String> = Vec::new();

    for block in blocks {
        if matches!(block, Block::Spacer) && page.is_empty() {
            continue;
        }
        let lines = block.lines(width);

        if page.len() + lines.len() > page_lines && !page.is_empty() {
            pages.push(std::mem::take(&mut page));
            if matches!(block, Block::Spacer) {
                continue;
            }
        }

        // Only a block taller than a whole page is ever split
        for chunk in lines.chunks(page_lines) {
            if page.len() + chunk.len() > page_lines {
                pages.push(std::mem::take(&mut page));
            }
            page.extend_from_slice(chunk);
        }
    }

    if let Some(footer) = footer {
        let mut footer_lines = vec![String::new()];
        footer_lines.extend(footer.lines(width));
        if page.len() + footer_lines.len() > page_lines && !page.is_empty() {
            pages.push(std::mem::take(&mut page));
            footer_lines.remove(0);
        }
        page.extend(footer_lines);
    }

    if !page.is_empty() || pages.is_empty() {
        pages.push(page);
    }
    pages
}

/// Join pages into one document, separated by form feeds.
pub fn render_pages(pages: &[Vec<String>]) -> String {
    let rendered: Vec<String> = pages
        .iter()
        .map(|page| {
            let mut text = page.join("\n");
            text.push('\n');
            text
        })
        .collect();
    rendered.join(&format!("{PAGE_BREAK}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_bullet_hanging_indent() {
        let lines = Block::Bullet("one two three four".to_string()).lines(10);
        assert_eq!(lines, vec!["• one two", "  three", "  four"]);
    }

    #[test]
    fn test_heading_is_underlined() {
        let lines = Block::Heading("Targets".to_string()).lines(40);
        assert_eq!(lines, vec!["Targets", "-------"]);
    }

    #[test]
    fn test_bullet_never_split_across_pages() {
        let blocks = vec![
            Block::Bullet("a".to_string()),
            Block::Bullet("b".to_string()),
            Block::Bullet("c".to_string()),
            // Wraps to three lines
            Block::Bullet("dd ee ff".to_string()),
        ];
        let pages = paginate(&blocks, None, 5, 4);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec!["• a", "• b", "• c"]);
        assert_eq!(pages[1], vec!["• dd", "  ee", "  ff"]);
    }

    #[test]
    fn test_spacer_dropped_at_page_top() {
        let blocks = vec![
            Block::Bullet("a".to_string()),
            Block::Bullet("b".to_string()),
            Block::Spacer,
            Block::Bullet("c".to_string()),
        ];
        let pages = paginate(&blocks, None, 2, 20);
        assert_eq!(pages, vec![vec!["• a", "• b"], vec!["• c"]]);
    }

    #[test]
    fn test_footer_on_last_page() {
        let blocks = vec![Block::Bullet("a".to_string())];
        let footer = Block::Centered("end".to_string());
        let pages = paginate(&blocks, Some(&footer), 10, 7);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], vec!["• a", "", "  end"]);
    }

    #[test]
    fn test_render_separates_pages_with_form_feed() {
        let pages = vec![vec!["one".to_string()], vec!["two".to_string()]];
        assert_eq!(render_pages(&pages), "one\n\u{c}\ntwo\n");
    }
}
