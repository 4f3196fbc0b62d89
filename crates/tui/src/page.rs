use folio_core::content;
use folio_core::Document;
use folio_protocol::{Bounds, SectionId, ThemeToken};

/// One laid-out row of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLine {
    pub text: String,
    pub color: ThemeToken,
    pub bold: bool,
}

impl PageLine {
    fn new(text: impl Into<String>, color: ThemeToken) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    fn heading(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::new(text, ThemeToken::Accent)
        }
    }

    fn blank() -> Self {
        Self::new("", ThemeToken::Foreground)
    }
}

/// Placeholder row in the hero section that the renderer replaces with the
/// current role.
pub const ROLE_PLACEHOLDER: &str = "\u{0}role";

/// The portfolio laid out as terminal rows, with a scroll position.
///
/// Geometry is reported in page units (`units_per_row` per row) so the
/// controller's thresholds mean the same thing as in the browser.
#[derive(Debug, Clone)]
pub struct TerminalPage {
    lines: Vec<PageLine>,
    /// Row range `[start, end)` of each section, indexed by `SectionId`.
    sections: [(usize, usize); SectionId::ORDER.len()],
    width: usize,
    height: usize,
    units_per_row: f64,
    scroll: usize,
    target: Option<usize>,
}

impl TerminalPage {
    pub fn new(width: usize, height: usize, units_per_row: f64) -> Self {
        let (lines, sections) = layout(width.max(20), height.max(1));
        Self {
            lines,
            sections,
            width,
            height,
            units_per_row,
            scroll: 0,
            target: None,
        }
    }

    /// Re-wrap for a new terminal size, keeping the section at the top of
    /// the viewport in place. Returns whether the scroll position moved.
    pub fn resize(&mut self, width: usize, height: usize) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        let before = self.scroll;
        let anchor = self.section_at(self.scroll);
        let into = self.scroll.saturating_sub(self.sections[anchor.index()].0);
        let (lines, sections) = layout(width.max(20), height.max(1));
        self.lines = lines;
        self.sections = sections;
        self.width = width;
        self.height = height;
        self.target = None;
        self.scroll = (sections[anchor.index()].0 + into).min(self.max_scroll());
        self.scroll != before
    }

    pub fn visible(&self) -> &[PageLine] {
        let end = (self.scroll + self.height).min(self.lines.len());
        &self.lines[self.scroll.min(end)..end]
    }

    /// Row range `[start, end)` of a section.
    pub fn section_rows(&self, id: SectionId) -> (usize, usize) {
        self.sections[id.index()]
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    /// Scroll by `delta` rows immediately, cancelling any animation.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.target = None;
        self.jump(self.scroll.saturating_add_signed(delta))
    }

    /// Advance a pending smooth scroll by one frame. Returns whether the
    /// position moved.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.scroll);
        let step = (distance / 4).max(1);
        let next = if target > self.scroll {
            self.scroll + step
        } else {
            self.scroll - step
        };
        let moved = self.jump(next);
        if self.scroll == target || !moved {
            self.target = None;
        }
        moved
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    fn jump(&mut self, row: usize) -> bool {
        let row = row.min(self.max_scroll());
        let moved = row != self.scroll;
        self.scroll = row;
        moved
    }

    fn section_at(&self, row: usize) -> SectionId {
        SectionId::ORDER
            .into_iter()
            .rev()
            .find(|id| self.sections[id.index()].0 <= row)
            .unwrap_or_default()
    }

    fn smooth_to(&mut self, row: usize) {
        self.target = Some(row.min(self.max_scroll()));
    }
}

impl Document for TerminalPage {
    fn section_bounds(&self, id: SectionId) -> Option<Bounds> {
        let (start, end) = self.sections[id.index()];
        let top = (start as f64 - self.scroll as f64) * self.units_per_row;
        let bottom = (end as f64 - self.scroll as f64) * self.units_per_row;
        Some(Bounds::new(top, bottom))
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll as f64 * self.units_per_row
    }

    fn scroll_to_top(&mut self) {
        self.smooth_to(0);
    }

    fn scroll_into_view(&mut self, id: SectionId) -> bool {
        self.smooth_to(self.sections[id.index()].0);
        true
    }
}

type Layout = (Vec<PageLine>, [(usize, usize); SectionId::ORDER.len()]);

fn layout(width: usize, height: usize) -> Layout {
    let mut lines = Vec::new();
    let mut sections = [(0, 0); SectionId::ORDER.len()];
    let text_width = width.saturating_sub(4).max(16);

    for id in SectionId::ORDER {
        let start = lines.len();
        match id {
            SectionId::Hero => hero(&mut lines, text_width, height),
            SectionId::About => about(&mut lines, text_width),
            SectionId::Skills => skills(&mut lines, text_width),
            SectionId::Projects => projects(&mut lines, text_width),
            SectionId::Education => education(&mut lines, text_width),
            SectionId::Certifications => certifications(&mut lines, text_width),
            SectionId::Contact => contact(&mut lines, text_width),
        }
        lines.push(PageLine::blank());
        sections[id.index()] = (start, lines.len());
    }
    lines.push(PageLine::new(content::FOOTER, ThemeToken::Muted));
    (lines, sections)
}

fn hero(lines: &mut Vec<PageLine>, width: usize, height: usize) {
    let mut body = vec![
        PageLine::heading(format!("[ {} ]", content::OWNER_INITIALS)),
        PageLine::blank(),
        PageLine::heading(format!("Hi, I'm {}", content::OWNER_NAME)),
        PageLine::new(ROLE_PLACEHOLDER, ThemeToken::Muted),
        PageLine::blank(),
    ];
    push_wrapped(&mut body, content::TAGLINE, width, ThemeToken::Muted);
    body.push(PageLine::blank());
    let actions: Vec<_> = content::HERO_ACTIONS
        .iter()
        .map(|a| format!("[{}]", a.label))
        .collect();
    body.push(PageLine::new(actions.join("  "), ThemeToken::Accent));

    // The hero fills the first screen, content centered vertically.
    let pad = height.saturating_sub(body.len()) / 2;
    lines.extend(std::iter::repeat_n(PageLine::blank(), pad));
    lines.extend(body);
    lines.extend(std::iter::repeat_n(PageLine::blank(), pad));
}

fn about(lines: &mut Vec<PageLine>, width: usize) {
    lines.push(PageLine::heading(content::section_title(SectionId::About)));
    lines.push(PageLine::blank());
    for paragraph in content::ABOUT {
        push_wrapped(lines, paragraph, width, ThemeToken::Foreground);
        lines.push(PageLine::blank());
    }
    lines.push(PageLine::new("Core Strengths", ThemeToken::Foreground));
    for strength in content::CORE_STRENGTHS {
        lines.push(PageLine::new(format!("  • {strength}"), ThemeToken::Muted));
    }
}

fn skills(lines: &mut Vec<PageLine>, width: usize) {
    lines.push(PageLine::heading(content::section_title(SectionId::Skills)));
    lines.push(PageLine::blank());
    for category in content::SKILLS {
        lines.push(PageLine::new(category.name, ThemeToken::Foreground));
        push_wrapped(lines, &category.skills.join(" · "), width, ThemeToken::Badge);
        lines.push(PageLine::blank());
    }
}

fn projects(lines: &mut Vec<PageLine>, width: usize) {
    lines.push(PageLine::heading(content::section_title(SectionId::Projects)));
    lines.push(PageLine::blank());
    for project in content::PROJECTS {
        lines.push(PageLine::new(project.title, ThemeToken::Foreground));
        push_wrapped(lines, project.description, width, ThemeToken::Muted);
        push_wrapped(lines, &project.tech.join(" · "), width, ThemeToken::Badge);
        lines.push(PageLine::new(format!("Code: {}", project.github), ThemeToken::Link));
        lines.push(PageLine::new(format!("Demo: {}", project.demo), ThemeToken::Link));
        lines.push(PageLine::blank());
    }
}

fn education(lines: &mut Vec<PageLine>, width: usize) {
    let edu = content::EDUCATION;
    lines.push(PageLine::heading(content::section_title(SectionId::Education)));
    lines.push(PageLine::blank());
    push_wrapped(lines, edu.degree, width, ThemeToken::Foreground);
    lines.push(PageLine::new(
        format!("{} • {}", edu.institution, edu.graduation),
        ThemeToken::Muted,
    ));
    push_wrapped(lines, edu.coursework, width, ThemeToken::Muted);
}

fn certifications(lines: &mut Vec<PageLine>, width: usize) {
    lines.push(PageLine::heading(content::section_title(
        SectionId::Certifications,
    )));
    lines.push(PageLine::blank());
    for cert in content::CERTIFICATIONS {
        push_wrapped(lines, &format!("★ {cert}"), width, ThemeToken::Foreground);
    }
    lines.push(PageLine::blank());
    lines.push(PageLine::new(
        format!("Resume: {}", content::RESUME_PATH),
        ThemeToken::Link,
    ));
}

fn contact(lines: &mut Vec<PageLine>, width: usize) {
    lines.push(PageLine::heading(content::section_title(SectionId::Contact)));
    lines.push(PageLine::blank());
    push_wrapped(lines, content::CONTACT_BLURB, width, ThemeToken::Muted);
    lines.push(PageLine::blank());
    for link in content::CONTACT_LINKS {
        lines.push(PageLine::new(
            format!("{} <{}>", link.label, link.href),
            ThemeToken::Link,
        ));
    }
}

fn push_wrapped(lines: &mut Vec<PageLine>, text: &str, width: usize, color: ThemeToken) {
    lines.extend(
        wrap(text, width)
            .into_iter()
            .map(|line| PageLine::new(line, color)),
    );
}

/// Greedy word wrap on whitespace. Words longer than `width` get a line of
/// their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_len = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if cur_len > 0 && cur_len + 1 + len > width {
            lines.push(std::mem::take(&mut cur));
            cur_len = 0;
        }
        if cur_len > 0 {
            cur.push(' ');
            cur_len += 1;
        }
        cur.push_str(word);
        cur_len += len;
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}
