//! CLI tool for glyphgrid - lays out a grid, places text, replays edits and
//! prints the result.
//!
//! Usage:
//!   glyphgrid_cli <width> <height> <text> [options]
//!
//! Options (applied in order):
//!   --cell-size <px>            Cell size (default 40, must come before edits)
//!   --click <index>             Plain click on a cell
//!   --toggle <index>            Modifier click on a cell
//!   --drag <from>:<to>          Drag the character in <from> and drop on <to>
//!   --marquee <x0>,<y0>,<x1>,<y1>  Additive rubber-band selection
//!   --json                      Print a JSON snapshot instead of rows
//!
//! Set GLYPHGRID_LOG=debug to trace each step on stderr.

#![allow(clippy::exit)]

use std::env;
use std::io::{self, Write};

use glyphgrid::error::{GlyphGridError, Result};
use glyphgrid::layout::DEFAULT_CELL_SIZE;
use glyphgrid::snapshot::GridSnapshot;
use glyphgrid::{EditorSession, Point};
use tracing_subscriber::filter::LevelFilter;

const USAGE: &str = "glyphgrid_cli <width> <height> <text> [--cell-size N] [--click I] [--toggle I] [--drag FROM:TO] [--marquee X0,Y0,X1,Y1] [--json]";

fn parse_num<T: std::str::FromStr>(value: Option<&String>, what: &str) -> Result<T> {
    let value = value.ok_or_else(|| GlyphGridError::Usage(format!("missing {what}")))?;
    value
        .trim()
        .parse()
        .map_err(|_| GlyphGridError::Usage(format!("invalid {what}: {value}")))
}

fn parse_pair(value: Option<&String>) -> Result<(usize, usize)> {
    let value = value.ok_or_else(|| GlyphGridError::Usage("missing <from>:<to>".into()))?;
    let (from, to) = value
        .split_once(':')
        .ok_or_else(|| GlyphGridError::Usage(format!("expected <from>:<to>, got {value}")))?;
    Ok((
        parse_num(Some(&from.to_string()), "drag source")?,
        parse_num(Some(&to.to_string()), "drag target")?,
    ))
}

fn parse_rect(value: Option<&String>) -> Result<(Point, Point)> {
    let value = value.ok_or_else(|| GlyphGridError::Usage("missing marquee corners".into()))?;
    let coords: Vec<f32> = value
        .split(',')
        .map(|v| parse_num(Some(&v.to_string()), "marquee coordinate"))
        .collect::<Result<_>>()?;
    match coords.as_slice() {
        [x0, y0, x1, y1] => Ok((Point::new(*x0, *y0), Point::new(*x1, *y1))),
        _ => Err(GlyphGridError::Usage(format!("expected 4 coordinates, got {value}"))),
    }
}

fn run(args: &[String]) -> Result<String> {
    let mut positional = args.iter().skip(1).take(3);
    let width: f32 = parse_num(positional.next(), "width")?;
    let height: f32 = parse_num(positional.next(), "height")?;
    let text = positional
        .next()
        .ok_or_else(|| GlyphGridError::Usage(USAGE.into()))?;

    let mut rest = args.iter().skip(4);
    let mut json = false;
    let mut session: Option<EditorSession> = None;
    let mut cell_size = DEFAULT_CELL_SIZE;

    // Build the session lazily so --cell-size can come first.
    fn ensure<'a>(
        session: &'a mut Option<EditorSession>,
        width: f32,
        height: f32,
        cell_size: f32,
        text: &str,
    ) -> &'a mut EditorSession {
        session.get_or_insert_with(|| {
            let mut s = EditorSession::with_container(width, height, cell_size);
            s.place_text(text);
            s
        })
    }

    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--cell-size" => {
                if session.is_some() {
                    return Err(GlyphGridError::Usage("--cell-size must come before edits".into()));
                }
                cell_size = parse_num(rest.next(), "cell size")?;
                if !cell_size.is_finite() || cell_size <= 0.0 {
                    return Err(GlyphGridError::Usage(format!("invalid cell size: {cell_size}")));
                }
            }
            "--click" | "--toggle" => {
                let index: usize = parse_num(rest.next(), "cell index")?;
                let s = ensure(&mut session, width, height, cell_size, text);
                s.click_cell(index, flag == "--toggle");
            }
            "--drag" => {
                let (from, to) = parse_pair(rest.next())?;
                let s = ensure(&mut session, width, height, cell_size, text);
                if s.begin_drag(from) {
                    let outcome = s.drop_on(to);
                    log::info!("drag {from} -> {to}: {outcome:?}");
                } else {
                    log::warn!("drag {from} -> {to}: cell {from} is empty");
                }
            }
            "--marquee" => {
                let (a, b) = parse_rect(rest.next())?;
                let s = ensure(&mut session, width, height, cell_size, text);
                s.begin_marquee(a, true);
                s.update_marquee(b);
                s.finish_marquee_by_cell();
            }
            "--json" => json = true,
            other => {
                return Err(GlyphGridError::Usage(format!("unknown option {other}\n{USAGE}")));
            }
        }
    }

    let session = ensure(&mut session, width, height, cell_size, text);
    if json {
        return GridSnapshot::from_grid(session.grid()).to_json_pretty();
    }

    let grid = session.grid();
    let mut out = String::new();
    for (row, line) in grid.rows_text('.').iter().enumerate() {
        out.push_str(line);
        let selected: Vec<String> = grid
            .selected()
            .filter_map(|(index, _)| {
                let (r, c) = grid.layout().position(index)?;
                (r as usize == row).then(|| c.to_string())
            })
            .collect();
        if !selected.is_empty() {
            out.push_str("   selected cols: ");
            out.push_str(&selected.join(","));
        }
        out.push('\n');
    }
    Ok(out)
}

fn main() {
    glyphgrid::logging::init_cli(LevelFilter::WARN);

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {USAGE}");
        std::process::exit(1);
    }

    match run(&args) {
        Ok(output) => {
            let mut stdout = io::stdout();
            if let Err(e) = stdout.write_all(output.as_bytes()) {
                eprintln!("Error writing output: {e}");
                std::process::exit(1);
            }
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
