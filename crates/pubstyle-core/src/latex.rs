// File: crates/pubstyle-core/src/latex.rs
// Summary: Converts the subset of ROOT TLatex markup used in figure labels to plain Unicode.

use std::iter::Peekable;
use std::str::Chars;

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰', '1' => '¹', '2' => '²', '3' => '³', '4' => '⁴',
        '5' => '⁵', '6' => '⁶', '7' => '⁷', '8' => '⁸', '9' => '⁹',
        '+' => '⁺', '-' => '⁻', '=' => '⁼', '(' => '⁽', ')' => '⁾',
        'n' => 'ⁿ', 'i' => 'ⁱ', ' ' => ' ',
        _ => return None,
    })
}

fn subscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀', '1' => '₁', '2' => '₂', '3' => '₃', '4' => '₄',
        '5' => '₅', '6' => '₆', '7' => '₇', '8' => '₈', '9' => '₉',
        '+' => '₊', '-' => '₋', '=' => '₌', '(' => '₍', ')' => '₎',
        'a' => 'ₐ', 'e' => 'ₑ', 'o' => 'ₒ', 'x' => 'ₓ', ' ' => ' ',
        _ => return None,
    })
}

fn symbol(name: &str) -> Option<&'static str> {
    Some(match name {
        "alpha" => "α", "beta" => "β", "gamma" => "γ", "delta" => "δ",
        "epsilon" => "ε", "mu" => "μ", "nu" => "ν", "pi" => "π",
        "sigma" => "σ", "tau" => "τ", "phi" => "φ", "chi" => "χ",
        "Gamma" => "Γ", "Delta" => "Δ", "Upsilon" => "Υ", "ell" => "ℓ",
        "pm" => "±", "times" => "×", "rightarrow" => "→", "infty" => "∞",
        "geq" => "≥", "leq" => "≤",
        _ => return None,
    })
}

/// Map every char with `table`, or leave the text untouched if any char has no mapping.
fn map_all(text: &str, table: fn(char) -> Option<char>) -> String {
    text.chars()
        .map(table)
        .collect::<Option<String>>()
        .unwrap_or_else(|| text.to_string())
}

/// Contents of a `{...}` group, converted. Assumes the opening brace is next.
fn group(chars: &mut Peekable<Chars<'_>>) -> String {
    chars.next();
    convert_until(chars, true)
}

/// A script argument: a braced group or a single char.
fn argument(chars: &mut Peekable<Chars<'_>>) -> String {
    match chars.peek() {
        Some('{') => group(chars),
        Some(_) => chars.next().map(String::from).unwrap_or_default(),
        None => String::new(),
    }
}

fn convert_until(chars: &mut Peekable<Chars<'_>>, in_group: bool) -> String {
    let mut out = String::new();
    while let Some(c) = chars.next() {
        match c {
            '}' if in_group => break,
            '{' => out.push_str(&convert_until(chars, true)),
            '}' => {}
            '^' => out.push_str(&map_all(&argument(chars), superscript)),
            '_' => out.push_str(&map_all(&argument(chars), subscript)),
            '#' => {
                let mut name = String::new();
                while let Some(&n) = chars.peek() {
                    if !n.is_ascii_alphabetic() { break; }
                    name.push(n);
                    chars.next();
                }
                match name.as_str() {
                    "" => out.push('#'),
                    "sqrt" => {
                        out.push('√');
                        out.push_str(&argument(chars));
                    }
                    "bf" | "it" if chars.peek() == Some(&'{') => out.push_str(&group(chars)),
                    other => match symbol(other) {
                        Some(s) => out.push_str(s),
                        None => {
                            out.push('#');
                            out.push_str(other);
                        }
                    },
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Render TLatex markup such as `fb^{-1}` or `#sqrt{s}` as plain Unicode text.
pub fn to_unicode(text: &str) -> String {
    convert_until(&mut text.chars().peekable(), false)
}
