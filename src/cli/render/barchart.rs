use crate::base;

/// Narrowest terminal the chart lays itself out for.
const MIN_TERM_WIDTH: usize = 40;

/// Horizontal bars comparing the total of each kind.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    pub summary: base::Summary,
}

pub struct Barchart {
    charset: base::Charset,
    slices: [(base::Kind, base::Cents); 3],
    label_charlen: usize,
    max_val: base::Cents,
    max_barlen: usize,
}

impl Config {
    pub fn to_barchart(&self) -> Barchart {
        let slices = self.summary.breakdown();
        let label_charlen = slices.iter().map(|(k, _)| k.label().len()).max().unwrap_or_default();
        let max_val = slices.iter().map(|&(_, v)| v).max().unwrap_or_default();
        let max_amount_charlen = slices
            .iter()
            .map(|(_, v)| v.to_string().chars().count())
            .max()
            .unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(MIN_TERM_WIDTH)
            .saturating_sub(label_charlen)
            .saturating_sub(3) // space, axis, space
            .saturating_sub(max_amount_charlen);
        Barchart {
            charset: self.charset.clone(),
            slices,
            label_charlen,
            max_val,
            max_barlen,
        }
    }
}

impl Barchart {
    fn barlen(&self, val: base::Cents) -> usize {
        if self.max_val.0 <= 0 {
            return 0;
        }
        let x = (val.0 as f64) / (self.max_val.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, kind: base::Kind, val: base::Cents) -> std::fmt::Result {
        write!(
            w,
            "{:<width$} {}",
            kind.label(),
            self.charset.chart_axis,
            width = self.label_charlen
        )?;
        let barlen = self.barlen(val);
        if barlen > 0 {
            let bar = if kind.is_expense() {
                self.charset.chart_bar_neg
            } else {
                self.charset.chart_bar_pos
            };
            let bars = bar.to_string().repeat(barlen);
            w.write_str(&self.charset.paint(&bars, kind))?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", val)
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &(kind, val) in &self.slices {
            self.draw(f, kind, val)?;
        }
        Ok(())
    }
}
