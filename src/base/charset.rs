#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub rule: char,
    pub chart_axis: char,
    pub chart_bar_pos: char,
    pub chart_bar_neg: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            rule: '=',
            chart_axis: '|',
            chart_bar_pos: '+',
            chart_bar_neg: '-',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            rule: '\u{2550}',
            chart_axis: '\u{2502}',
            chart_bar_pos: '\u{2588}',
            chart_bar_neg: '\u{2588}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// Colors `s` by the direction `kind` moves money, if color is enabled.
    pub fn paint(&self, s: &str, kind: crate::base::Kind) -> String {
        if !self.color {
            return s.to_string();
        }
        match kind {
            crate::base::Kind::Income => colored::Colorize::green(s).to_string(),
            crate::base::Kind::VariableExpense => colored::Colorize::red(s).to_string(),
            crate::base::Kind::FixedExpense => colored::Colorize::magenta(s).to_string(),
        }
    }
}
