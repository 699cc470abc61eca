use std::cmp::min;
use std::fmt::{self, Display, Write as _};

use colored::Colorize;
use unicode_width::UnicodeWidthChar;
use yard::{Span, UserFacing};

impl DisplayUserFacing for yard::Error {}
pub trait DisplayUserFacing: UserFacing {
    fn display<'a>(&'a self, input: &'a str) -> FmtUserFacing<'a, Self> {
        FmtUserFacing {
            input,
            error: self,
            first_line: 1,
        }
    }
}

pub struct FmtUserFacing<'a, U: DisplayUserFacing> {
    input: &'a str,
    error: &'a U,
    first_line: usize,
}

impl<U: DisplayUserFacing> FmtUserFacing<'_, U> {
    /// Numbers the lines of the input starting at `nr`, for input taken from the middle of a file.
    pub fn first_line(mut self, nr: usize) -> Self {
        self.first_line = nr;
        self
    }
}

impl<U: DisplayUserFacing> Display for FmtUserFacing<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spans = self.error.spans();
        let lines = spanned_lines(self.input);

        let mut hl_lines = Vec::new();
        for (i, (ls, l)) in lines.iter().enumerate() {
            let intersecting: Vec<_> = spans
                .iter()
                .filter(|s| s.intersects(ls))
                .map(|s| {
                    let ms = s.start.saturating_sub(ls.start);
                    let me = min(s.end.saturating_sub(ls.start), ls.len());
                    Span::of(ms, me)
                })
                .collect();

            if !intersecting.is_empty() {
                hl_lines.push((self.first_line + i, *l, intersecting));
            }
        }

        let nr_width = hl_lines.last().map_or(1, |(nr, _, _)| digits(*nr));

        let mut last_nr = None;
        for (nr, l, spans) in hl_lines.iter() {
            if last_nr.is_some_and(|last| last + 1 < *nr) {
                writeln!(f, "{}", "...".blue().bold())?;
            }
            mark_spans(f, *nr, nr_width, l, spans)?;
            last_nr = Some(*nr);
        }

        write!(
            f,
            "{spc:nr_width$} {bar} {desc}",
            spc = ' ',
            bar = "│".blue().bold(),
            desc = self.error.description().red().bold(),
        )
    }
}

fn digits(nr: usize) -> usize {
    nr.checked_ilog10().unwrap_or(0) as usize + 1
}

fn mark_spans(
    f: &mut fmt::Formatter<'_>,
    line_nr: usize,
    nr_width: usize,
    line: &str,
    spans: &[Span],
) -> fmt::Result {
    let bar = "│".blue().bold();
    writeln!(
        f,
        "{nr} {bar} {line}",
        nr = format!("{line_nr:nr_width$}").blue().bold(),
    )?;
    write!(f, "{spc:nr_width$} {bar} ", spc = ' ')?;

    let mut chars = line.chars();
    let mut pos = 0;

    for s in spans {
        let mut offset = 0;
        while pos < s.start {
            let Some(c) = chars.next() else { break };
            pos += 1;
            offset += c.width().unwrap_or(0);
        }

        let mut width = 0;
        while pos < s.end {
            let Some(c) = chars.next() else { break };
            pos += 1;
            width += c.width().unwrap_or(0);
        }
        // past the end of the line
        if width == 0 {
            width = 1;
        }

        for _ in 0..offset {
            f.write_char(' ')?;
        }
        write!(f, "{}", "^".repeat(width).red().bold())?;
    }

    f.write_char('\n')
}

/// Splits `string` into lines, each with the span of chars it covers including the line break.
fn spanned_lines(string: &str) -> Vec<(Span, &str)> {
    let mut lines = Vec::new();
    let mut line_start = (0, 0);
    let mut pos = (0, 0);
    let mut pushed_line = false;

    let mut chars = string.chars();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                let span = Span::of(line_start.0, pos.0 + 1);
                let line = &string[line_start.1..pos.1];
                lines.push((span, line));
                pushed_line = true;
            }
            '\n' => {
                if !pushed_line {
                    let span = Span::of(line_start.0, pos.0 + 1);
                    let line = &string[line_start.1..pos.1];
                    lines.push((span, line));
                }

                // We know this char is 1 byte wide
                line_start = (pos.0 + 1, pos.1 + 1);
                pushed_line = false;
            }
            _ => pushed_line = false,
        }

        pos.0 += 1;
        pos.1 = string.len() - chars.as_str().len();
    }

    if !pushed_line {
        let span = Span::of(line_start.0, pos.0 + 1);
        let line = &string[line_start.1..pos.1];
        lines.push((span, line));
    }

    lines
}

#[cfg(test)]
mod test {
    use yard::calculate;

    use super::*;

    fn render(input: &str) -> String {
        colored::control::set_override(false);
        let err = calculate(input).unwrap_err();
        err.display(input).to_string()
    }

    #[test]
    fn single_span() {
        assert_eq!(
            render("2 + a"),
            "\
1 │ 2 + a
  │     ^
  │ Found an invalid character 'a'"
        );
    }

    #[test]
    fn two_spans() {
        assert_eq!(
            render("5 / 0"),
            "\
1 │ 5 / 0
  │   ^ ^
  │ Attempted to divide by 0"
        );
    }

    #[test]
    fn wide_span() {
        assert_eq!(
            render("1 2.2.2"),
            "\
1 │ 1 2.2.2
  │   ^^^^^
  │ Invalid number format"
        );
    }

    #[test]
    fn multiple_lines() {
        assert_eq!(
            render("1 +\n(2"),
            "\
2 │ (2
  │ ^
  │ Parentheses do not match"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            render(""),
            "1 │ \n  │ ^\n  │ Malformed expression"
        );
    }

    #[test]
    fn lines() {
        assert_eq!(
            spanned_lines("ab\ncd"),
            vec![(Span::of(0, 3), "ab"), (Span::of(3, 6), "cd")]
        );
        assert_eq!(
            spanned_lines("ab\r\ncd"),
            vec![(Span::of(0, 3), "ab"), (Span::of(4, 7), "cd")]
        );
    }

    #[test]
    fn line_numbers() {
        assert_eq!(digits(1), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(120), 3);
    }
}
