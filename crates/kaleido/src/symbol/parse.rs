use std::fmt;

use crate::error::{WythoffError, WythoffResult};
use crate::rational::{format_fraction, Rational};

use super::table::{self, DIRHOMBIC_INDEX};

/// The four symbol layouts, named by where the bar sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolShape {
    /// `p|q r`
    Vertex,
    /// `p q|r`
    Edge,
    /// `p q r|`
    Even,
    /// `|p q r`
    Snub,
    /// Bar-free `p q r s` (table entry 80 only).
    Dirhombic,
}

/// A parsed, validated Wythoff symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct WythoffSymbol {
    /// The text as supplied by the caller, trimmed.
    pub text: String,
    /// Four parameter slots; the bar is stored as `0.0`.
    pub params: [f64; 4],
    /// Slot of the bar, `None` only for the bar-free entry.
    pub bar: Option<usize>,
    /// Table index when given as `#n` or when the text matches a table entry.
    pub index: Option<usize>,
}

impl WythoffSymbol {
    /// Parses `#n` or a literal symbol.
    pub fn parse(text: &str) -> WythoffResult<Self> {
        let text = text.trim();
        let (body, mut index) = match text.strip_prefix('#') {
            Some(rest) => {
                let n: usize = rest
                    .trim()
                    .parse()
                    .map_err(|e| WythoffError::symbol(text, format!("illegal number: {e}")))?;
                let entry = table::lookup(n).ok_or_else(|| {
                    WythoffError::symbol(text, format!("no tabulated polyhedron #{n}"))
                })?;
                (entry.symbol, Some(n))
            }
            None => (text, None),
        };

        let (params, bars) = read_slots(body).map_err(|m| WythoffError::symbol(text, m))?;
        if index.is_none() {
            index = find_in_table(&params);
        }

        let bar = match bars.as_slice() {
            [b] => Some(*b),
            [] if index == Some(DIRHOMBIC_INDEX) => None,
            [] => return Err(WythoffError::symbol(text, "missing bar")),
            _ => return Err(WythoffError::symbol(text, "more than one bar")),
        };
        for (slot, &p) in params.iter().enumerate() {
            if Some(slot) != bar && p <= 1.0 {
                return Err(WythoffError::symbol(
                    text,
                    format!("fraction {} must exceed 1", format_fraction(p)),
                ));
            }
        }

        Ok(Self {
            text: text.to_string(),
            params,
            bar,
            index,
        })
    }

    pub fn shape(&self) -> SymbolShape {
        match self.bar {
            Some(0) => SymbolShape::Snub,
            Some(1) => SymbolShape::Vertex,
            Some(2) => SymbolShape::Edge,
            Some(_) => SymbolShape::Even,
            None => SymbolShape::Dirhombic,
        }
    }

    /// Exact fractions for the four slots (`0/1` for the bar).
    pub fn angles(&self) -> [Rational; 4] {
        self.params.map(Rational::from_float)
    }
}

impl fmt::Display for WythoffSymbol {
    /// Presentable form: fractions reduced, single spaces, bar glued.
    /// The bar-free entry prints as its four bare fractions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (j, &p) in self.params.iter().enumerate() {
            if p > 0.0 {
                if j > 0 && self.params[j - 1] > 0.0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", format_fraction(p))?;
            } else {
                write!(f, "|")?;
            }
        }
        Ok(())
    }
}

/// Reads exactly four tokens; returns the slots and where the bars were.
fn read_slots(body: &str) -> Result<([f64; 4], Vec<usize>), String> {
    let mut cur = Cursor::new(body);
    let mut params = [0.0; 4];
    let mut bars = Vec::new();
    for (slot, value) in params.iter_mut().enumerate() {
        match cur.next_fraction()? {
            Some(Token::Bar) => bars.push(slot),
            Some(Token::Fraction(x)) => *value = x,
            None => return Err(format!("expected 4 tokens, found {slot}")),
        }
    }
    cur.skip_spaces();
    if let Some(c) = cur.peek() {
        return Err(format!("unexpected trailing input at {c:?}"));
    }
    Ok((params, bars))
}

fn find_in_table(params: &[f64; 4]) -> Option<usize> {
    table::entries().find_map(|e| match read_slots(e.symbol) {
        Ok((p, _)) if p == *params => Some(e.index),
        _ => None,
    })
}

enum Token {
    Bar,
    Fraction(f64),
}

struct Cursor<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            chars: s.chars().peekable(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_spaces(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    fn digits(&mut self) -> String {
        let mut s = String::new();
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            s.push(c);
            self.chars.next();
        }
        s
    }

    fn next_fraction(&mut self) -> Result<Option<Token>, String> {
        self.skip_spaces();
        let Some(c) = self.peek() else {
            return Ok(None);
        };
        if c == '|' {
            self.chars.next();
            return Ok(Some(Token::Bar));
        }
        if !c.is_ascii_digit() {
            return Err(format!("\"{c}\" is not a digit"));
        }
        let num = parse_int(&self.digits())?;
        if self.peek() != Some('/') {
            return Ok(Some(Token::Fraction(num)));
        }
        self.chars.next();
        let den = self.digits();
        if den.is_empty() {
            return Err(match self.peek() {
                Some(c) => format!("no digit after \"/\": {c:?}"),
                None => "no digit after \"/\"".to_string(),
            });
        }
        let den = parse_int(&den)?;
        if den == 0.0 {
            return Err("zero denominator".to_string());
        }
        Ok(Some(Token::Fraction(num / den)))
    }
}

fn parse_int(s: &str) -> Result<f64, String> {
    s.parse::<u32>()
        .map(f64::from)
        .map_err(|e| format!("number {s:?} out of range: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_four_shapes() {
        let s = WythoffSymbol::parse("3|2 3").unwrap();
        assert_eq!(s.params, [3.0, 0.0, 2.0, 3.0]);
        assert_eq!(s.shape(), SymbolShape::Vertex);
        assert_eq!(s.index, Some(6));

        assert_eq!(WythoffSymbol::parse("2 3|3").unwrap().shape(), SymbolShape::Edge);
        assert_eq!(WythoffSymbol::parse("2 3 4|").unwrap().shape(), SymbolShape::Even);
        let snub = WythoffSymbol::parse(" |2 3  5/2 ").unwrap();
        assert_eq!(snub.shape(), SymbolShape::Snub);
        assert_eq!(snub.params, [0.0, 2.0, 3.0, 2.5]);
        assert_eq!(snub.index, None);
    }

    #[test]
    fn table_reference_matches_literal() {
        let a = WythoffSymbol::parse("#27").unwrap();
        let b = WythoffSymbol::parse("5|2 3").unwrap();
        assert_eq!(a.params, b.params);
        assert_eq!(a.index, Some(27));
        assert_eq!(b.index, Some(27));
        assert_eq!(a.to_string(), "5|2 3");
    }

    #[test]
    fn bar_free_entry_only_via_table() {
        let s = WythoffSymbol::parse("#80").unwrap();
        assert_eq!(s.shape(), SymbolShape::Dirhombic);
        assert_eq!(s.to_string(), "3/2 5/3 3 5/2");
        let lit = WythoffSymbol::parse("3/2 5/3 3 5/2").unwrap();
        assert_eq!(lit.index, Some(80));
        assert!(WythoffSymbol::parse("2 3 4 5").is_err());
    }

    #[test]
    fn presentable_form_parses_back() {
        for text in ["#80", "#17", "#9", " 5/2  3 |3", "2 3 4|"] {
            let s = WythoffSymbol::parse(text).unwrap();
            let again = WythoffSymbol::parse(&s.to_string()).unwrap();
            assert_eq!(again.params, s.params, "{text}");
            assert_eq!(again.bar, s.bar, "{text}");
            assert_eq!(again.index, s.index, "{text}");
        }
    }

    #[test]
    fn malformed_text_is_rejected() {
        let cases = [
            "3|2 x",
            "3|2 5/",
            "3|2 5/a",
            "#abc",
            "#0",
            "#81",
            "3|2",
            "3|2 3 4",
            "3||2 3",
            "1|2 3",
            "3|2 3/0",
        ];
        for text in cases {
            let err = WythoffSymbol::parse(text).unwrap_err();
            assert!(matches!(err, WythoffError::Symbol { .. }), "{text}: {err}");
        }
        let msg = WythoffSymbol::parse("3|2 x").unwrap_err().to_string();
        assert!(msg.contains("\"x\" is not a digit"));
    }
}
