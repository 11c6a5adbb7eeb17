// src/io/poscar.rs
//
// VASP POSCAR/CONTCAR reader.
//
//   0  comment
//   1  scale factor (negative = target cell volume)
//   2-4  lattice vectors a, b, c
//   5  element symbols
//   6  atom counts per symbol
//   7  [Selective dynamics]
//   7|8  Direct / Cartesian
//   ..  sum(counts) coordinate lines, blank lines skipped

use crate::error::ParseError;
use crate::model::{total_atoms, CoordinateMode, Structure};
use crate::utils::linalg::{self, Lattice, Vec3};
use std::fs;
use std::path::Path;

/// Index of the element-symbol line, reported for species errors.
pub const SYMBOL_LINE: usize = 5;

pub fn parse(path: impl AsRef<Path>) -> Result<Structure, ParseError> {
  let path = path.as_ref();
  let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  parse_str(&text)
}

pub fn parse_str(text: &str) -> Result<Structure, ParseError> {
  let mut reader = LineReader::new(text);

  let (_, comment) = reader.next_line("comment line")?;

  // Scale
  let (scale_line, scale_text) = reader.next_line("scale factor")?;
  let scale_token = scale_text
    .split_whitespace()
    .next()
    .ok_or(ParseError::MissingValues {
      line: scale_line,
      field: "scale factor",
      expected: 1,
      found: 0,
    })?;
  let scale = parse_real(scale_token, scale_line, "scale factor")?;
  if scale == 0.0 {
    return Err(ParseError::ZeroScale { line: scale_line });
  }

  // Lattice
  let mut lattice: Lattice = [[0.0; 3]; 3];
  for row in lattice.iter_mut() {
    let (line, text) = reader.next_line("lattice vector")?;
    *row = parse_vector(text, line, "lattice vector")?;
  }
  let lattice = apply_scale(lattice, scale)?;

  // Elements & Counts
  let (symbol_line, symbol_text) = reader.next_line("element symbols")?;
  let atom_types: Vec<String> = symbol_text
    .split_whitespace()
    .map(|t| species_symbol(t).to_string())
    .collect();
  match atom_types.first() {
    None => {
      return Err(ParseError::MissingSymbols {
        line: symbol_line,
        found: String::new(),
      })
    }
    Some(first) if first.parse::<f64>().is_ok() => {
      return Err(ParseError::MissingSymbols {
        line: symbol_line,
        found: symbol_text.trim().to_string(),
      })
    }
    Some(_) => {}
  }

  let (count_line, count_text) = reader.next_line("atom counts")?;
  let atom_counts = count_text
    .split_whitespace()
    .map(|t| {
      t.parse::<usize>().map_err(|_| ParseError::InvalidNumber {
        line: count_line,
        field: "atom count",
        token: t.to_string(),
      })
    })
    .collect::<Result<Vec<_>, _>>()?;
  if atom_counts.len() != atom_types.len() {
    return Err(ParseError::CountMismatch {
      line: count_line,
      expected: atom_types.len(),
      found: atom_counts.len(),
    });
  }
  if let Some((symbol, _)) = atom_types.iter().zip(&atom_counts).find(|(_, c)| **c == 0) {
    return Err(ParseError::EmptySpecies {
      line: count_line,
      symbol: symbol.clone(),
    });
  }

  // Optional flag, then mode
  let (_, mut mode_text) = reader.next_line("coordinate mode")?;
  let selective_dynamics = starts_with_ignore_case(mode_text, 's');
  if selective_dynamics {
    mode_text = reader.next_line("coordinate mode")?.1;
  }
  let coordinate_mode = if starts_with_ignore_case(mode_text, 'd') {
    CoordinateMode::Direct
  } else {
    CoordinateMode::Cartesian
  };

  // Atoms
  let expected =
    total_atoms(&atom_counts).ok_or(ParseError::AtomCountOverflow { line: count_line })?;
  let block_start = reader.position();
  // Each position needs a line of its own, so the file bounds the allocation.
  let mut positions = Vec::with_capacity(expected.min(reader.remaining()));
  while positions.len() < expected {
    let (line, text) = reader.next_nonblank().ok_or(ParseError::MissingPositions {
      line: block_start,
      expected,
      found: positions.len(),
    })?;
    let p = parse_vector(text, line, "atom position")?;
    positions.push(match coordinate_mode {
      CoordinateMode::Direct => linalg::frac_to_cart(p, &lattice),
      CoordinateMode::Cartesian => p,
    });
  }

  Ok(Structure {
    comment: comment.trim().to_string(),
    lattice,
    atom_types,
    atom_counts,
    positions,
    coordinate_mode,
    selective_dynamics,
  })
}

/// Positive scale multiplies every vector; negative gives the cell volume.
fn apply_scale(raw: Lattice, scale: f64) -> Result<Lattice, ParseError> {
  let raw_volume = linalg::cell_volume(&raw);
  if linalg::is_degenerate(&raw) {
    return Err(ParseError::DegenerateLattice { volume: raw_volume });
  }
  let factor = if scale > 0.0 {
    scale
  } else {
    (-scale / raw_volume.abs()).cbrt()
  };
  let lattice = raw.map(|row| row.map(|x| x * factor));
  if linalg::is_degenerate(&lattice) {
    return Err(ParseError::DegenerateLattice {
      volume: linalg::cell_volume(&lattice),
    });
  }
  Ok(lattice)
}

/// "Fe_pv" -> "Fe", "Fe/3a2b1c" -> "Fe"
pub fn species_symbol(token: &str) -> &str {
  token.split(['_', '/']).next().unwrap_or(token)
}

fn starts_with_ignore_case(text: &str, c: char) -> bool {
  text
    .trim_start()
    .chars()
    .next()
    .is_some_and(|first| first.eq_ignore_ascii_case(&c))
}

fn parse_real(token: &str, line: usize, field: &'static str) -> Result<f64, ParseError> {
  match token.parse::<f64>() {
    Ok(v) if v.is_finite() => Ok(v),
    _ => Err(ParseError::InvalidNumber {
      line,
      field,
      token: token.to_string(),
    }),
  }
}

/// First three reals of a line; anything after them is ignored.
fn parse_vector(text: &str, line: usize, field: &'static str) -> Result<Vec3, ParseError> {
  let tokens: Vec<&str> = text.split_whitespace().take(3).collect();
  if tokens.len() < 3 {
    return Err(ParseError::MissingValues {
      line,
      field,
      expected: 3,
      found: tokens.len(),
    });
  }
  Ok([
    parse_real(tokens[0], line, field)?,
    parse_real(tokens[1], line, field)?,
    parse_real(tokens[2], line, field)?,
  ])
}

struct LineReader<'a> {
  lines: Vec<&'a str>,
  next: usize,
}

impl<'a> LineReader<'a> {
  fn new(text: &'a str) -> Self {
    Self {
      lines: text.lines().collect(),
      next: 0,
    }
  }

  fn position(&self) -> usize {
    self.next
  }

  fn remaining(&self) -> usize {
    self.lines.len().saturating_sub(self.next)
  }

  fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), ParseError> {
    let line = self.next;
    let text = *self
      .lines
      .get(line)
      .ok_or(ParseError::UnexpectedEof { line, expected })?;
    self.next += 1;
    Ok((line, text))
  }

  fn next_nonblank(&mut self) -> Option<(usize, &'a str)> {
    while let Some(&text) = self.lines.get(self.next) {
      let line = self.next;
      self.next += 1;
      if !text.trim().is_empty() {
        return Some((line, text));
      }
    }
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const UNIT_DIRECT: &str = "\
H in a box
1.0
1.0 0.0 0.0
0.0 1.0 0.0
0.0 0.0 1.0
H
1
Direct
0.5 0.5 0.5
";

  const RUTILE: &str = "\
TiO2 rutile
  1.0
    4.594  0.000  0.000
    0.000  4.594  0.000
    0.000  0.000  2.959
  Ti O
  2 4
Selective dynamics
Direct
  0.000 0.000 0.000 T T T
  0.500 0.500 0.500 T T T

  0.305 0.305 0.000 F F F ! apical
  0.695 0.695 0.000 F F F
  0.805 0.195 0.500 T T T
  0.195 0.805 0.500 T T T
";

  fn close(a: Vec3, b: Vec3) -> bool {
    (0..3).all(|i| (a[i] - b[i]).abs() < 1e-9)
  }

  #[test]
  fn direct_position_is_transformed() {
    let s = parse_str(UNIT_DIRECT).unwrap();
    assert_eq!(s.atom_types, vec!["H"]);
    assert_eq!(s.atom_counts, vec![1]);
    assert_eq!(s.coordinate_mode, CoordinateMode::Direct);
    assert!(close(s.positions[0], [0.5, 0.5, 0.5]));
    assert!(close(s.lattice_center(), [1.0 / 3.0; 3]));
  }

  #[test]
  fn cartesian_position_is_used_as_given() {
    let text = UNIT_DIRECT
      .replace("Direct", "Cartesian")
      .replace("0.5 0.5 0.5", "2.0 0 0");
    let s = parse_str(&text).unwrap();
    assert_eq!(s.coordinate_mode, CoordinateMode::Cartesian);
    assert!(close(s.positions[0], [2.0, 0.0, 0.0]));
  }

  #[test]
  fn selective_dynamics_and_blank_lines() {
    let s = parse_str(RUTILE).unwrap();
    assert!(s.selective_dynamics);
    assert_eq!(s.comment, "TiO2 rutile");
    assert_eq!(Some(s.positions.len()), s.num_atoms());
    assert_eq!(s.num_atoms(), Some(6));
    assert!(close(s.positions[1], [2.297, 2.297, 1.4795]));
    assert!(close(s.positions[2], [0.305 * 4.594, 0.305 * 4.594, 0.0]));
  }

  #[test]
  fn scale_multiplies_lattice() {
    let text = UNIT_DIRECT.replacen("1.0\n", "2.5\n", 1);
    let s = parse_str(&text).unwrap();
    assert!(close(s.lattice[0], [2.5, 0.0, 0.0]));
    assert!(close(s.positions[0], [1.25, 1.25, 1.25]));
  }

  #[test]
  fn negative_scale_is_volume() {
    let text = UNIT_DIRECT.replacen("1.0\n", "-8.0\n", 1);
    let s = parse_str(&text).unwrap();
    assert!((s.volume() - 8.0).abs() < 1e-9);
    assert!(close(s.lattice[2], [0.0, 0.0, 2.0]));
  }

  #[test]
  fn cartesian_and_direct_agree() {
    let lattice = "\
skewed
1.0
4.0 0.0 0.0
2.0 3.46 0.0
0.5 0.5 5.0
Si
2
";
    let direct = format!("{lattice}Direct\n0.25 0.5 0.1\n0.75 0.1 0.9\n");
    let d = parse_str(&direct).unwrap();

    let mut cartesian = format!("{lattice}Cartesian\n");
    for p in &d.positions {
      cartesian.push_str(&format!("{:.15} {:.15} {:.15}\n", p[0], p[1], p[2]));
    }
    let c = parse_str(&cartesian).unwrap();

    for (a, b) in d.positions.iter().zip(&c.positions) {
      assert!(close(*a, *b));
    }
  }

  #[test]
  fn bad_scale_names_line_one() {
    let text = UNIT_DIRECT.replacen("1.0\n", "abc\n", 1);
    match parse_str(&text).unwrap_err() {
      ParseError::InvalidNumber { line, field, token } => {
        assert_eq!(line, 1);
        assert_eq!(field, "scale factor");
        assert_eq!(token, "abc");
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn zero_scale_is_rejected() {
    let text = UNIT_DIRECT.replacen("1.0\n", "0.0\n", 1);
    assert!(matches!(
      parse_str(&text),
      Err(ParseError::ZeroScale { line: 1 })
    ));
  }

  #[test]
  fn short_file_reports_eof() {
    let text = "title\n1.0\n1 0 0\n0 1 0\n";
    assert!(matches!(
      parse_str(text),
      Err(ParseError::UnexpectedEof { line: 4, .. })
    ));
  }

  #[test]
  fn short_lattice_row() {
    let text = UNIT_DIRECT.replace("0.0 1.0 0.0", "0.0 1.0");
    assert!(matches!(
      parse_str(&text),
      Err(ParseError::MissingValues { line: 3, expected: 3, found: 2, .. })
    ));
  }

  #[test]
  fn missing_positions() {
    let text = UNIT_DIRECT.replace("H\n1\n", "H\n3\n");
    match parse_str(&text).unwrap_err() {
      ParseError::MissingPositions { line, expected, found } => {
        assert_eq!(line, 8);
        assert_eq!(expected, 3);
        assert_eq!(found, 1);
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  #[cfg(target_pointer_width = "64")]
  fn huge_count_fails_without_allocating() {
    let text = UNIT_DIRECT.replace("H\n1\n", "H\n100000000000000\n");
    match parse_str(&text).unwrap_err() {
      ParseError::MissingPositions { expected, found, .. } => {
        assert_eq!(expected, 100_000_000_000_000);
        assert_eq!(found, 1);
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  #[cfg(target_pointer_width = "64")]
  fn overflowing_counts_are_rejected() {
    let text = UNIT_DIRECT.replace("H\n1\n", "H He\n18446744073709551615 1\n");
    let err = parse_str(&text).unwrap_err();
    assert!(matches!(err, ParseError::AtomCountOverflow { line: 6 }));
    assert!(err.to_string().starts_with("line 6:"));
  }

  #[test]
  fn garbled_position() {
    let text = UNIT_DIRECT.replace("0.5 0.5 0.5", "0.5 x 0.5");
    assert!(matches!(
      parse_str(&text),
      Err(ParseError::InvalidNumber { line: 8, field: "atom position", .. })
    ));
  }

  #[test]
  fn count_mismatch() {
    let text = UNIT_DIRECT.replace("H\n1\n", "H O\n1\n");
    assert!(matches!(
      parse_str(&text),
      Err(ParseError::CountMismatch { line: 6, expected: 2, found: 1 })
    ));
  }

  #[test]
  fn zero_count_is_rejected() {
    let text = UNIT_DIRECT.replace("H\n1\n", "H\n0\n");
    assert!(matches!(parse_str(&text), Err(ParseError::EmptySpecies { .. })));
  }

  #[test]
  fn numeric_symbol_line_is_rejected() {
    let text = UNIT_DIRECT.replace("H\n1\n", "1\nDirect\n");
    assert!(matches!(
      parse_str(&text),
      Err(ParseError::MissingSymbols { line: 5, .. })
    ));
  }

  #[test]
  fn degenerate_lattice() {
    let text = UNIT_DIRECT.replace("0.0 0.0 1.0", "1.0 1.0 0.0");
    assert!(matches!(
      parse_str(&text),
      Err(ParseError::DegenerateLattice { .. })
    ));
  }

  #[test]
  fn species_suffixes_are_stripped() {
    assert_eq!(species_symbol("Fe_pv"), "Fe");
    assert_eq!(species_symbol("O/7a3c2b"), "O");
    assert_eq!(species_symbol("Ti"), "Ti");
  }

  #[test]
  fn reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("POSCAR");
    std::fs::write(&path, RUTILE).unwrap();
    let s = parse(&path).unwrap();
    assert_eq!(s.num_atoms(), Some(6));

    let missing = parse(dir.path().join("CONTCAR"));
    assert!(matches!(missing, Err(ParseError::Io { .. })));
  }
}
