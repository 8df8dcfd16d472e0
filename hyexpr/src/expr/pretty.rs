//! RcDoc-based pretty-printer with termcolor annotations for [`Expr`].
//!
//! Unlike [`Expr::print`], this printer is precedence aware: it inserts the
//! parentheses needed to read back the actual tree shape, puts spaces around
//! operators and breaks long expressions across lines.
//!
//! Performance
//! - Building the doc is O(n) in expression size; rendering respects line widths with
//!   linear-time layout in the size of the resulting document.

use crate::expr::Expr;
use crate::expr::defs::{BinaryOperation, FunctionCall, Number, Variable};
use crate::expr::variant::Operator;
use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Operator, // +, -, *, /
    Ident,    // variables
    Literal,  // numbers
    Function, // sqrt, abs
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    5 => Color::Magenta,
                    _ => unreachable!(),
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green)).set_bold(true);
            }
            Style::Literal => {
                s.set_fg(Some(Color::Magenta));
            }
            Style::Function => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
        }
        s
    }
}

#[inline]
fn lparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(").annotate(Style::Paren(depth))
}

#[inline]
fn rparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(")").annotate(Style::Paren(depth))
}

fn op(o: Operator) -> RcDoc<'static, Style> {
    RcDoc::as_string(o.symbol()).annotate(Style::Operator)
}

fn ident(v: &Variable) -> RcDoc<'static, Style> {
    RcDoc::as_string(v.name()).annotate(Style::Ident)
}

fn literal(n: &Number) -> RcDoc<'static, Style> {
    RcDoc::as_string(n).annotate(Style::Literal)
}

fn precedence(o: Operator) -> u8 {
    match o {
        Operator::Plus | Operator::Minus => 1,
        Operator::Mul | Operator::Div => 2,
    }
}

/// Operators are left associative, so a right operand of equal precedence
/// needs parentheses (`a - (b - c)`) while a left one does not.
#[inline]
fn requires_parens(child: &Expr, parent: Operator, is_right: bool) -> bool {
    match child {
        Expr::BinaryOperation(b) => {
            let (current, outer) = (precedence(b.operator()), precedence(parent));
            current < outer || (is_right && current == outer)
        }
        _ => false,
    }
}

fn operand_doc(child: &Expr, parent: Operator, is_right: bool, depth: u8) -> RcDoc<'static, Style> {
    if requires_parens(child, parent, is_right) {
        lparen(depth)
            .append(to_doc_with_depth(child, depth.wrapping_add(1)))
            .append(rparen(depth))
            .group()
    } else {
        to_doc_with_depth(child, depth)
    }
}

fn binary_doc(b: &BinaryOperation, depth: u8) -> RcDoc<'static, Style> {
    operand_doc(b.left(), b.operator(), false, depth)
        .append(RcDoc::line())
        .append(op(b.operator()))
        .append(RcDoc::space())
        .append(operand_doc(b.right(), b.operator(), true, depth))
        .group()
}

fn call_doc(c: &FunctionCall, depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(c.name())
        .annotate(Style::Function)
        .append(lparen(depth))
        .append(
            RcDoc::line_()
                .append(to_doc_with_depth(c.argument(), depth.wrapping_add(1)))
                .nest(2),
        )
        .append(RcDoc::line_())
        .append(rparen(depth))
        .group()
}

/// Depth-aware variant that colors parentheses by nesting level.
fn to_doc_with_depth(e: &Expr, depth: u8) -> RcDoc<'static, Style> {
    match e {
        Expr::Number(n) => literal(n),
        Expr::Variable(v) => ident(v),
        Expr::BinaryOperation(b) => binary_doc(b, depth),
        Expr::FunctionCall(c) => call_doc(c, depth),
    }
}

// A writer that maps Style annotations to termcolor ColorSpec on a WriteColor sink.
struct ColorWriter<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for ColorWriter<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for ColorWriter<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("render failed")
    }
}

/// Render a document to a `termcolor::WriteColor` with width-aware layout.
fn render_to<W: WriteColor + Write>(
    doc: &RcDoc<'_, Style>,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut cw = ColorWriter { out };
    doc.render_raw(width, &mut cw)
}

/// Retrieve the width of the terminal, or 80 if it cannot be determined.
fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Pretty-printing conveniences for expressions.
pub trait PrettyExpr {
    /// Build an RcDoc representation of this expression with style annotations.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render this expression with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()>;

    /// Print this expression to stdout with colors (TTY-aware), at auto-detected width.
    fn pretty_print(&self) -> io::Result<()>;

    /// Format this expression into a plain string (no colors) at the given width.
    fn pretty_string_with_width(&self, width: usize) -> String;

    /// Format this expression into a plain string (no colors), 80 columns wide.
    fn pretty_string(&self) -> String {
        self.pretty_string_with_width(80)
    }
}

impl PrettyExpr for Expr {
    #[inline]
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        to_doc_with_depth(self, 0)
    }

    #[inline]
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        render_to(&self.pretty_doc(), width, out)
    }

    fn pretty_print(&self) -> io::Result<()> {
        let stdout = StandardStream::stdout(ColorChoice::Auto);
        let mut stdout = stdout.lock();
        self.pretty_render_to(terminal_width(), &mut stdout)
    }

    fn pretty_string_with_width(&self, width: usize) -> String {
        let mut buf = String::new();
        let mut w = FmtWrite::new(&mut buf);
        // Writing into a String cannot fail.
        let _ = self.pretty_doc().render_raw(width, &mut w);
        buf
    }
}
