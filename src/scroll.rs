use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// last section whose top is at or above the probe; unknown tops are skipped
pub fn resolve_active_section<S, F>(
    sections: &[S],
    section_top: F,
    scroll_y: f64,
    activation_offset: f64,
) -> Option<&S>
where
    F: Fn(&S) -> Option<f64>,
{
    let probe = scroll_y + activation_offset;
    sections
        .iter()
        .rev()
        .find(|section| section_top(section).is_some_and(|top| top <= probe))
        .or_else(|| sections.first())
}

pub fn scroll_target(element_top: f64, nav_offset: f64) -> f64 {
    element_top - nav_offset
}

pub fn show_scroll_to_top(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}
