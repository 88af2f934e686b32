use owo_colors::Style;

// Stylesheet used to colorize the report.
#[derive(Debug, Default)]
pub(crate) struct Styles {
    pub(crate) section_style: Style,
    pub(crate) label_style: Style,
}

impl Styles {
    pub(crate) fn colorize(&mut self) {
        self.section_style = Style::new().bright_blue().bold();
        self.label_style = Style::new().bright_green();
    }
}
